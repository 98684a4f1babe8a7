//! Staff Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{MAX_NAME_LEN, MIN_NAME_LEN, MIN_SHORT_NAME_LEN, not_blank};

/// Staff member entity
///
/// `department`, `role` and `access_level` reference directory entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub position: String,
    pub department: String,
    pub role: String,
    pub access_level: String,
    /// Free-form duty status ("on shift", "on leave", ...)
    #[serde(default)]
    pub status: String,
    pub active: bool,
}

/// Create / edit payload for a staff member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StaffMemberDraft {
    #[validate(length(min = MIN_NAME_LEN, max = MAX_NAME_LEN))]
    pub name: String,
    #[validate(length(min = MIN_SHORT_NAME_LEN, max = MAX_NAME_LEN))]
    pub position: String,
    #[validate(custom(function = "not_blank"))]
    pub department: String,
    #[validate(custom(function = "not_blank"))]
    pub role: String,
    #[validate(custom(function = "not_blank"))]
    pub access_level: String,
    #[serde(default)]
    pub status: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl From<&StaffMember> for StaffMemberDraft {
    fn from(member: &StaffMember) -> Self {
        Self {
            name: member.name.clone(),
            position: member.position.clone(),
            department: member.department.clone(),
            role: member.role.clone(),
            access_level: member.access_level.clone(),
            status: member.status.clone(),
            active: member.active,
        }
    }
}
