//! Directory Models
//!
//! Departments, roles and access levels share one flat shape and are
//! referenced by staff members.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, MIN_SHORT_NAME_LEN};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Staff role (RBAC)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessLevel {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Create / edit payload shared by all directory entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct DirectoryDraft {
    #[validate(length(min = MIN_SHORT_NAME_LEN, max = MAX_NAME_LEN))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = MAX_NOTE_LEN))]
    pub description: Option<String>,
}

impl DirectoryDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }
}
