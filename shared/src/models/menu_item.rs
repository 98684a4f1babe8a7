//! Menu Item Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, MIN_NAME_LEN, not_blank, positive_price};

/// Paid extra offered with a menu item (extra cheese, side salad)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MenuExtra {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(custom(function = "positive_price"))]
    pub price: f64,
}

/// Menu item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    /// Menu category reference (id)
    pub category: String,
    pub price: f64,
    /// Preparation time in minutes
    pub prep_time: u32,
    #[serde(default)]
    pub ingredients: String,
    pub available: bool,
    /// Stored image URLs
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub extras: Vec<MenuExtra>,
}

/// Create / edit payload for a menu item
///
/// Images travel beside the draft as multipart parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemDraft {
    #[validate(length(min = MIN_NAME_LEN, max = MAX_NAME_LEN))]
    pub name: String,
    #[validate(custom(function = "not_blank"))]
    pub category: String,
    #[validate(custom(function = "positive_price"))]
    pub price: f64,
    #[validate(range(min = 1, max = 240))]
    pub prep_time: u32,
    #[serde(default)]
    #[validate(length(max = MAX_NOTE_LEN))]
    pub ingredients: String,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default)]
    #[validate(nested)]
    pub extras: Vec<MenuExtra>,
}

fn default_available() -> bool {
    true
}

impl From<&MenuItem> for MenuItemDraft {
    fn from(item: &MenuItem) -> Self {
        Self {
            name: item.name.clone(),
            category: item.category.clone(),
            price: item.price,
            prep_time: item.prep_time,
            ingredients: item.ingredients.clone(),
            available: item.available,
            extras: item.extras.clone(),
        }
    }
}
