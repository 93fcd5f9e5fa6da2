use serde::{Deserialize, Serialize};

use super::{EntityId, Role};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// Body returned by `/jwt/create/` and `/auth/jwt/refresh/`.
///
/// A refresh response may carry only `access`; the remaining fields are
/// optional so the payload deserializes either way.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TokenPayload {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub employee_id: Option<EntityId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_payload_carries_identity() {
        let json = r#"{"access":"a1","refresh":"r1","role":"Manager","employee_id":7}"#;
        let payload: TokenPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.access, "a1");
        assert_eq!(payload.refresh.as_deref(), Some("r1"));
        assert_eq!(payload.role, Some(Role::Manager));
        assert_eq!(payload.employee_id, Some(7));
    }

    #[test]
    fn refresh_payload_may_only_carry_access() {
        let payload: TokenPayload = serde_json::from_str(r#"{"access":"a2"}"#).unwrap();
        assert_eq!(payload.access, "a2");
        assert!(payload.refresh.is_none());
        assert!(payload.role.is_none());
    }

    #[test]
    fn superuser_without_employee_row_has_null_id() {
        let json = r#"{"access":"a","refresh":"r","role":"Admin","employee_id":null}"#;
        let payload: TokenPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.employee_id, None);
    }
}
