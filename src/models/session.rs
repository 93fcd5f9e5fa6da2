use serde::{Deserialize, Serialize};
use std::fmt;

use super::{EntityId, TokenPayload};

// ============================================================================
// SESSION - Credentials and identity of the signed-in user
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Manager,
    Employee,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Manager, Role::Employee];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::Employee => "Employee",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == value)
    }

    /// Admins and Managers see the whole console
    pub fn is_privileged(&self) -> bool {
        matches!(self, Role::Admin | Role::Manager)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client-side session, persisted across reloads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub role: Option<Role>,
    pub employee_id: Option<EntityId>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Overwrite credentials from a backend payload.
    ///
    /// Fields the payload omits (a refresh response without rotation) keep
    /// their current value.
    pub fn apply(&mut self, payload: &TokenPayload) {
        self.access_token = Some(payload.access.clone());
        if let Some(refresh) = &payload.refresh {
            self.refresh_token = Some(refresh.clone());
        }
        if let Some(role) = payload.role {
            self.role = Some(role);
        }
        if payload.employee_id.is_some() || payload.role.is_some() {
            self.employee_id = payload.employee_id;
        }
    }
}
