use crate::models::{LoginRequest, TokenPayload};
use crate::utils::LOGIN_PATH;

use super::api_client::{into_result, to_body, GlooTransport, HttpTransport, Method, SharedClient};
use super::error::ApiResult;

/// Credential exchange. Bypasses the refresh path: a 401 here means bad
/// credentials, not an expired session.
pub struct AuthClient<T: HttpTransport = GlooTransport> {
    http: SharedClient<T>,
}

impl<T: HttpTransport> AuthClient<T> {
    pub fn new(http: SharedClient<T>) -> Self {
        Self { http }
    }

    /// `POST /jwt/create/`
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<TokenPayload> {
        let body = to_body(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })?;
        let response = self.http.send_anonymous(Method::Post, LOGIN_PATH, Some(body)).await?;
        into_result(response)?.json()
    }
}
