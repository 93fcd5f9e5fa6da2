// ============================================================================
// API CLIENT - Authenticated HTTP with one-shot refresh-and-retry
// ============================================================================
// Attaches the bearer token, recovers a single 401 by refreshing the access
// token, and otherwise hands every failure to the caller unchanged.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::rc::Rc;

use crate::models::{RefreshRequest, TokenPayload};
use crate::state::TokenStore;
use crate::utils::REFRESH_PATH;

use super::error::{ApiError, ApiResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        })
    }
}

/// Fully-resolved outbound request
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
    pub body: Option<Value>,
}

/// Status plus raw body; interpretation is left to the client
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> ApiResult<T> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Sends one request. Only transport failures are errors here; every HTTP
/// status comes back as a `RawResponse`.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: &ApiRequest) -> ApiResult<RawResponse>;
}

/// Browser `fetch` via gloo-net
#[derive(Clone, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, request: &ApiRequest) -> ApiResult<RawResponse> {
        let mut builder: RequestBuilder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        builder = builder.header("Accept", "application/json");
        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let prepared = match &request.body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(format!("Request build error: {}", e)))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok(RawResponse { status, body })
    }
}

/// HTTP client bound to the backend base URL and the session's credentials
pub struct ApiClient<T: HttpTransport = GlooTransport> {
    base_url: String,
    transport: T,
    session: TokenStore,
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T, session: TokenStore) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send without credentials or refresh handling (login, refresh itself)
    pub async fn send_anonymous(&self, method: Method, path: &str, body: Option<Value>) -> ApiResult<RawResponse> {
        let request = ApiRequest {
            method,
            url: self.url(path),
            bearer: None,
            body,
        };
        self.transport.send(&request).await
    }

    async fn dispatch(&self, method: Method, path: &str, body: &Option<Value>) -> ApiResult<RawResponse> {
        let request = ApiRequest {
            method,
            url: self.url(path),
            bearer: self.session.access_token(),
            body: body.clone(),
        };
        log::debug!("📡 [HTTP] {} {}", method, path);
        self.transport.send(&request).await
    }

    /// Authenticated request returning the 2xx response.
    ///
    /// On 401: one refresh with the stored refresh token, then one retry.
    /// Without a refresh token, or if the refresh fails, the session is
    /// cleared and the original 401 is returned.
    pub async fn request(&self, method: Method, path: &str, body: Option<Value>) -> ApiResult<RawResponse> {
        let response = self.dispatch(method, path, &body).await?;
        if response.status != 401 {
            return into_result(response);
        }

        let original = ApiError::from_status(response.status, &response.body);
        let Some(refresh_token) = self.session.refresh_token() else {
            log::warn!("🔐 [AUTH] 401 on {} {} with no refresh token, logging out", method, path);
            self.session.log_out();
            return Err(original);
        };

        match self.refresh(&refresh_token).await {
            Ok(payload) => {
                log::info!("🔄 [AUTH] Access token refreshed, retrying {} {}", method, path);
                self.session.set_credentials(&payload);
            }
            Err(e) => {
                log::warn!("🔐 [AUTH] Refresh failed ({}), logging out", e);
                self.session.log_out();
                return Err(original);
            }
        }

        let retried = self.dispatch(method, path, &body).await?;
        if retried.status == 401 {
            // Fresh token rejected too: the session is unusable
            self.session.log_out();
        }
        into_result(retried)
    }

    /// `POST /auth/jwt/refresh/`
    pub async fn refresh(&self, refresh_token: &str) -> ApiResult<TokenPayload> {
        let body = to_body(&RefreshRequest {
            refresh: refresh_token.to_string(),
        })?;
        let response = into_result(self.send_anonymous(Method::Post, REFRESH_PATH, Some(body)).await?)?;
        response.json::<TokenPayload>()
    }

    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        self.request(Method::Get, path, None).await?.json()
    }

    pub async fn send_json<B: Serialize, R: DeserializeOwned>(&self, method: Method, path: &str, body: &B) -> ApiResult<R> {
        let body = to_body(body)?;
        self.request(method, path, Some(body)).await?.json()
    }

    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        self.request(Method::Delete, path, None).await.map(|_| ())
    }
}

/// Shared handle used by every resource client
pub type SharedClient<T> = Rc<ApiClient<T>>;

pub fn to_body<B: Serialize>(body: &B) -> ApiResult<Value> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(format!("Serialization error: {}", e)))
}

pub(crate) fn into_result(response: RawResponse) -> ApiResult<RawResponse> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::from_status(response.status, &response.body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::services::testing::{client_with, logged_in_store, MockTransport};

    #[tokio::test]
    async fn bearer_token_is_attached() {
        let transport = MockTransport::new();
        transport.push(200, "[]");
        let client = client_with(&transport, logged_in_store("tok", Some("ref")));

        client.request(Method::Get, "/companies/", None).await.unwrap();

        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].bearer.as_deref(), Some("tok"));
        assert_eq!(sent[0].url, "http://api.test/companies/");
    }

    #[tokio::test]
    async fn expired_token_is_refreshed_and_request_retried_once() {
        let transport = MockTransport::new();
        transport.push(401, r#"{"detail":"Given token not valid for any token type"}"#);
        transport.push(200, r#"{"access":"fresh","refresh":"ref2","role":"Admin","employee_id":1}"#);
        transport.push(200, r#"[{"id":1,"name":"Acme"}]"#);
        let store = logged_in_store("stale", Some("ref"));
        let client = client_with(&transport, store.clone());

        let response = client.request(Method::Get, "/companies/", None).await.unwrap();

        assert_eq!(response.status, 200);
        let sent = transport.requests();
        assert_eq!(sent.len(), 3);
        assert_eq!(sent[1].url, "http://api.test/auth/jwt/refresh/");
        assert_eq!(sent[1].body.as_ref().unwrap()["refresh"], "ref");
        assert_eq!(sent[1].bearer, None);
        assert_eq!(sent[2].url, "http://api.test/companies/");
        assert_eq!(sent[2].bearer.as_deref(), Some("fresh"));
        assert_eq!(store.access_token().as_deref(), Some("fresh"));
        assert_eq!(store.refresh_token().as_deref(), Some("ref2"));
        assert_eq!(store.role(), Some(Role::Admin));
    }

    #[tokio::test]
    async fn failed_refresh_logs_out_and_returns_original_401() {
        let transport = MockTransport::new();
        transport.push(401, r#"{"detail":"Token expired"}"#);
        transport.push(401, r#"{"detail":"Token is blacklisted"}"#);
        let store = logged_in_store("stale", Some("ref"));
        let client = client_with(&transport, store.clone());

        let err = client.request(Method::Get, "/employees/", None).await.unwrap_err();

        assert_eq!(err, ApiError::Auth { message: "Token expired".into() });
        assert!(!store.is_authenticated());
        assert_eq!(transport.requests().len(), 2);
    }

    #[tokio::test]
    async fn missing_refresh_token_logs_out_without_refreshing() {
        let transport = MockTransport::new();
        transport.push(401, r#"{"detail":"Token expired"}"#);
        let store = logged_in_store("stale", None);
        let client = client_with(&transport, store.clone());

        let err = client.request(Method::Get, "/dashboard/", None).await.unwrap_err();

        assert!(err.is_auth());
        assert!(!store.is_authenticated());
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn refresh_network_failure_counts_as_rejected() {
        let transport = MockTransport::new();
        transport.push(401, "");
        transport.push_network_error("connection reset");
        let store = logged_in_store("stale", Some("ref"));
        let client = client_with(&transport, store.clone());

        let err = client.request(Method::Get, "/companies/", None).await.unwrap_err();

        assert!(err.is_auth());
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn second_401_after_refresh_is_not_retried_again() {
        let transport = MockTransport::new();
        transport.push(401, "");
        transport.push(200, r#"{"access":"fresh"}"#);
        transport.push(401, r#"{"detail":"User is inactive"}"#);
        let store = logged_in_store("stale", Some("ref"));
        let client = client_with(&transport, store.clone());

        let err = client.request(Method::Get, "/companies/", None).await.unwrap_err();

        assert_eq!(err, ApiError::Auth { message: "User is inactive".into() });
        assert_eq!(transport.requests().len(), 3);
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn other_failures_propagate_untouched() {
        let transport = MockTransport::new();
        transport.push(400, r#"{"name":["company with this name already exists."]}"#);
        transport.push(500, "");
        transport.push_network_error("offline");
        let store = logged_in_store("tok", Some("ref"));
        let client = client_with(&transport, store.clone());

        let err = client.request(Method::Post, "/companies/", None).await.unwrap_err();
        assert_eq!(err.backend_message(), Some("name: company with this name already exists."));
        let err = client.request(Method::Get, "/companies/", None).await.unwrap_err();
        assert!(matches!(err, ApiError::Server { status: 500, .. }));
        let err = client.request(Method::Get, "/companies/", None).await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));

        assert!(store.is_authenticated());
        assert_eq!(transport.requests().len(), 3);
    }
}
