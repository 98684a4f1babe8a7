//! Spa Category Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, MIN_SHORT_NAME_LEN};

/// Spa category entity (massage, facial, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaCategory {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SpaCategoryDraft {
    #[validate(length(min = MIN_SHORT_NAME_LEN, max = MAX_NAME_LEN))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = MAX_NOTE_LEN))]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl From<&SpaCategory> for SpaCategoryDraft {
    fn from(category: &SpaCategory) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone(),
            is_active: category.is_active,
        }
    }
}
