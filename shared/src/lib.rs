//! Shared types for the hotel operations admin
//!
//! Wire types used by the client crates: the response envelope,
//! entity models with their draft payloads, auth DTOs and permissions.

pub mod client;
pub mod models;
pub mod response;
pub mod types;
pub mod validation;

// Re-exports
pub use response::{ApiResponse, ListShape};
pub use serde::{Deserialize, Serialize};
pub use types::Permission;
