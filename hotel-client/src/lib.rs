//! Hotel Client - admin dashboard client for the hotel backend
//!
//! Typed access to the restaurant, spa and staff collections plus the
//! screen state (list, form, delete confirmation, status toggles) every
//! admin page is built from.

pub mod access;
pub mod auth;
pub mod config;
pub mod confirm;
pub mod error;
pub mod form;
pub mod http;
pub mod images;
pub mod list;
pub mod notify;
pub mod resource;
pub mod resources;
pub mod screen;
pub mod session;
pub mod toggle;

pub use access::{Area, Capability};
pub use config::ClientConfig;
pub use confirm::{ConfirmState, DeleteConfirmation};
pub use error::{ClientError, ClientResult};
pub use form::{FormMode, ResourceForm};
pub use http::{HttpClient, MultipartPayload, NetworkHttpClient, OneshotHttpClient};
pub use images::{ImageSet, PendingImage};
pub use list::{ListFilter, ResourceList};
pub use notify::{Notice, NoticeLevel, Notifier, RecordingNotifier, TracingNotifier};
pub use resource::{Payload, Resource, ResourceApi};
pub use screen::ResourceScreen;
pub use session::{Session, SessionStore};
pub use toggle::Toggle;

// Re-export shared types for convenience
pub use shared::client::{CurrentUser, LoginResponse, UserRole};
pub use shared::{ApiResponse, ListShape};
