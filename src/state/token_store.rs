// ============================================================================
// TOKEN STORE - Session credentials, persisted across reloads
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{EntityId, Role, Session, TokenPayload};
use crate::utils::{load_from_storage, local_storage_available, remove_from_storage, save_to_storage};

use super::reactivity::{ReactiveState, SubscriptionId};

/// Where the session survives a page reload
pub trait SessionPersistence {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session);
    fn clear(&self);
}

/// localStorage under a fixed key
pub struct BrowserPersistence {
    key: String,
}

impl BrowserPersistence {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl SessionPersistence for BrowserPersistence {
    fn load(&self) -> Option<Session> {
        load_from_storage::<Session>(&self.key)
    }

    fn save(&self, session: &Session) {
        if let Err(e) = save_to_storage(&self.key, session) {
            log::error!("❌ [SESSION] {}", e);
        }
    }

    fn clear(&self) {
        remove_from_storage(&self.key);
    }
}

/// In-memory fallback when localStorage is unavailable
#[derive(Default, Clone)]
pub struct MemoryPersistence {
    slot: Rc<RefCell<Option<Session>>>,
}

impl SessionPersistence for MemoryPersistence {
    fn load(&self) -> Option<Session> {
        self.slot.borrow().clone()
    }

    fn save(&self, session: &Session) {
        *self.slot.borrow_mut() = Some(session.clone());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}

/// Injectable session context shared by the HTTP client, the session
/// controller and the views. Clones share state.
#[derive(Clone)]
pub struct TokenStore {
    state: ReactiveState<Session>,
    persistence: Rc<dyn SessionPersistence>,
}

impl TokenStore {
    /// Restore whatever session the persistence layer holds
    pub fn new(persistence: Rc<dyn SessionPersistence>) -> Self {
        let session = persistence.load().unwrap_or_default();
        if session.is_authenticated() {
            log::info!("✅ [SESSION] Restored session (role: {:?})", session.role);
        }
        Self {
            state: ReactiveState::new(session),
            persistence,
        }
    }

    /// Browser-backed store, falling back to memory outside a window
    pub fn from_browser(key: &str) -> Self {
        if local_storage_available() {
            Self::new(Rc::new(BrowserPersistence::new(key)))
        } else {
            log::warn!("⚠️ [SESSION] localStorage unavailable, session will not survive reloads");
            Self::new(Rc::new(MemoryPersistence::default()))
        }
    }

    pub fn snapshot(&self) -> Session {
        self.state.get()
    }

    pub fn access_token(&self) -> Option<String> {
        self.state.with(|s| s.access_token.clone())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.state.with(|s| s.refresh_token.clone())
    }

    pub fn role(&self) -> Option<Role> {
        self.state.with(|s| s.role)
    }

    pub fn employee_id(&self) -> Option<EntityId> {
        self.state.with(|s| s.employee_id)
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(Session::is_authenticated)
    }

    /// Overwrite credentials with a backend-issued payload. No local checks.
    pub fn set_credentials(&self, payload: &TokenPayload) {
        self.state.update(|session| session.apply(payload));
        self.state.with(|session| self.persistence.save(session));
    }

    /// Clear every field
    pub fn log_out(&self) {
        if self.is_authenticated() {
            log::info!("👋 [SESSION] Logged out");
        }
        self.persistence.clear();
        self.state.set(Session::default());
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Session) + 'static,
    {
        self.state.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.state.unsubscribe(id);
    }
}

impl PartialEq for TokenStore {
    fn eq(&self, other: &Self) -> bool {
        self.state.ptr_eq(&other.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login_payload() -> TokenPayload {
        TokenPayload {
            access: "acc".into(),
            refresh: Some("ref".into()),
            role: Some(Role::Admin),
            employee_id: Some(1),
        }
    }

    #[test]
    fn credentials_survive_a_reload() {
        let persistence = MemoryPersistence::default();
        let store = TokenStore::new(Rc::new(persistence.clone()));
        assert!(!store.is_authenticated());

        store.set_credentials(&login_payload());

        let reloaded = TokenStore::new(Rc::new(persistence));
        assert!(reloaded.is_authenticated());
        assert_eq!(reloaded.role(), Some(Role::Admin));
        assert_eq!(reloaded.refresh_token().as_deref(), Some("ref"));
        assert_eq!(reloaded.employee_id(), Some(1));
    }

    #[test]
    fn log_out_clears_state_and_persistence() {
        let persistence = MemoryPersistence::default();
        let store = TokenStore::new(Rc::new(persistence.clone()));
        store.set_credentials(&login_payload());

        store.log_out();

        assert_eq!(store.snapshot(), Session::default());
        assert!(persistence.load().is_none());
    }

    #[test]
    fn subscribers_observe_logout() {
        let store = TokenStore::new(Rc::new(MemoryPersistence::default()));
        store.set_credentials(&login_payload());
        let observed = Rc::new(RefCell::new(None));
        {
            let observed = observed.clone();
            store.subscribe(move |s| *observed.borrow_mut() = Some(s.is_authenticated()));
        }

        store.clone().log_out();

        assert_eq!(*observed.borrow(), Some(false));
    }
}
