//! Menu Category Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, MIN_SHORT_NAME_LEN};

/// Menu category entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCategory {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Display position; lists are ordered by it
    pub sort_order: i32,
    pub is_active: bool,
}

impl MenuCategory {
    /// Sort order a newly created category gets: one past the current maximum
    pub fn next_sort_order(existing: &[MenuCategory]) -> i32 {
        existing
            .iter()
            .map(|c| c.sort_order)
            .max()
            .unwrap_or(0)
            .saturating_add(1)
    }
}

/// Create / edit payload for a menu category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MenuCategoryDraft {
    #[validate(length(min = MIN_SHORT_NAME_LEN, max = MAX_NAME_LEN))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = MAX_NOTE_LEN))]
    pub description: Option<String>,
    /// Assigned on create from the loaded list when left empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl MenuCategoryDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            sort_order: None,
            is_active: true,
        }
    }
}

impl From<&MenuCategory> for MenuCategoryDraft {
    fn from(category: &MenuCategory) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone(),
            sort_order: Some(category.sort_order),
            is_active: category.is_active,
        }
    }
}
