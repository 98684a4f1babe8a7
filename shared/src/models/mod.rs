//! Data models
//!
//! Entities as returned by the hotel backend, each paired with a draft
//! payload used by both the create and the edit form. Ids are
//! server-generated strings (`id` or `_id` on the wire).

pub mod directory;
pub mod menu_category;
pub mod menu_item;
pub mod restaurant_table;
pub mod spa_category;
pub mod spa_service;
pub mod spa_specialist;
pub mod staff;

// Re-exports
pub use directory::*;
pub use menu_category::*;
pub use menu_item::*;
pub use restaurant_table::*;
pub use spa_category::*;
pub use spa_service::*;
pub use spa_specialist::*;
pub use staff::*;
