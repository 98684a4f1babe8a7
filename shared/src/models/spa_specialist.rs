//! Spa Specialist Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, MIN_BIO_LEN, MIN_SHORT_NAME_LEN, non_blank_refs};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecialistStatus {
    Active,
    Inactive,
}

impl SpecialistStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

/// Spa specialist entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaSpecialist {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub bio: String,
    /// Spa category references
    #[serde(default)]
    pub specializations: Vec<String>,
    /// Stored photo URL
    #[serde(default)]
    pub photo: Option<String>,
    pub status: SpecialistStatus,
}

impl SpaSpecialist {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Create / edit payload for a specialist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SpaSpecialistDraft {
    #[validate(length(min = MIN_SHORT_NAME_LEN, max = MAX_NAME_LEN))]
    pub first_name: String,
    #[validate(length(min = MIN_SHORT_NAME_LEN, max = MAX_NAME_LEN))]
    pub last_name: String,
    #[validate(length(min = MIN_BIO_LEN, max = MAX_NOTE_LEN))]
    pub bio: String,
    #[validate(length(min = 1), custom(function = "non_blank_refs"))]
    pub specializations: Vec<String>,
    pub status: SpecialistStatus,
}

impl From<&SpaSpecialist> for SpaSpecialistDraft {
    fn from(specialist: &SpaSpecialist) -> Self {
        Self {
            first_name: specialist.first_name.clone(),
            last_name: specialist.last_name.clone(),
            bio: specialist.bio.clone(),
            specializations: specialist.specializations.clone(),
            status: specialist.status,
        }
    }
}
