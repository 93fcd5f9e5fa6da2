// ============================================================================
// SESSION CONTROLLER - Login / logout over the Token Store
// ============================================================================

use crate::models::Session;
use crate::state::TokenStore;

use super::api_client::{GlooTransport, HttpTransport, SharedClient};
use super::auth_service::AuthClient;
use super::error::ApiResult;

pub struct SessionController<T: HttpTransport = GlooTransport> {
    auth: AuthClient<T>,
    store: TokenStore,
}

impl<T: HttpTransport> SessionController<T> {
    pub fn new(http: SharedClient<T>, store: TokenStore) -> Self {
        Self {
            auth: AuthClient::new(http),
            store,
        }
    }

    /// Exchange credentials for a session. On failure the Token Store is left
    /// as it was and the backend's error is returned verbatim.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<Session> {
        log::info!("🔐 [AUTH] Logging in {}", email);
        let payload = self.auth.login(email, password).await.map_err(|e| {
            log::warn!("❌ [AUTH] Login failed: {}", e);
            e
        })?;
        self.store.set_credentials(&payload);
        let session = self.store.snapshot();
        log::info!("✅ [AUTH] Logged in as {:?}", session.role);
        Ok(session)
    }

    pub fn logout(&self) {
        self.store.log_out();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::services::error::ApiError;
    use crate::services::testing::{client_with, empty_store, logged_in_store, MockTransport};
    use std::rc::Rc;

    #[tokio::test]
    async fn login_stores_backend_session() {
        let transport = MockTransport::new();
        transport.push(200, r#"{"access":"a","refresh":"r","role":"Employee","employee_id":12}"#);
        let store = empty_store();
        let controller = SessionController::new(Rc::new(client_with(&transport, store.clone())), store.clone());

        let session = controller.login("e@acme.io", "pw").await.unwrap();

        assert_eq!(session.role, Some(Role::Employee));
        assert_eq!(session.employee_id, Some(12));
        assert!(store.is_authenticated());
        let sent = transport.requests();
        assert_eq!(sent[0].url, "http://api.test/jwt/create/");
        assert_eq!(sent[0].body.as_ref().unwrap()["email"], "e@acme.io");
        assert_eq!(sent[0].bearer, None);
    }

    #[tokio::test]
    async fn rejected_login_surfaces_message_and_leaves_store_alone() {
        let transport = MockTransport::new();
        transport.push(401, r#"{"detail":"No active account found with the given credentials"}"#);
        let store = logged_in_store("previous", Some("prev-ref"));
        let before = store.snapshot();
        let controller = SessionController::new(Rc::new(client_with(&transport, store.clone())), store.clone());

        let err = controller.login("x@acme.io", "bad").await.unwrap_err();

        assert_eq!(
            err,
            ApiError::Auth {
                message: "No active account found with the given credentials".into()
            }
        );
        assert_eq!(store.snapshot(), before);
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn logout_clears_session() {
        let transport = MockTransport::new();
        let store = logged_in_store("a", Some("r"));
        let controller = SessionController::new(Rc::new(client_with(&transport, store.clone())), store.clone());

        controller.logout();

        assert!(!store.is_authenticated());
    }
}
