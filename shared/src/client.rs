//! Auth types shared between the backend contract and the client
//!
//! `CurrentUser` is what the dashboard kept in local storage. The role and
//! permission strings in it only decide what the client offers; the
//! backend enforces authorization on every request.

use serde::{Deserialize, Serialize};

use crate::types::Permission;

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: CurrentUser,
}

/// Dashboard role of the signed-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Manager,
    Staff,
}

impl UserRole {
    /// Parse a backend role name; unknown names fall back to `Staff`
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "admin" | "administrator" | "superadmin" => Self::Admin,
            "manager" | "supervisor" => Self::Manager,
            _ => Self::Staff,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Manager => write!(f, "manager"),
            Self::Staff => write!(f, "staff"),
        }
    }
}

/// Signed-in user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Raw role name as sent by the backend
    pub role: String,
    #[serde(default)]
    pub access_level: Option<String>,
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

impl CurrentUser {
    pub fn role(&self) -> UserRole {
        UserRole::parse(&self.role)
    }
}
