//! Client error types
//!
//! Every failure a screen can run into, from transport problems to
//! client-side validation, and the single message shown to the user.

use shared::response::EnvelopeError;
use shared::validation::{FieldIssue, issues, summarize};
use thiserror::Error;
use validator::ValidationErrors;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or transport failure
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server rejected the request with a message
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Non-2xx response without a parseable body
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Response did not match the envelope contract
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Draft failed client-side validation; nothing was sent
    #[error("Validation error: {}", summarize(.0))]
    Validation(Vec<FieldIssue>),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// A submission is already in flight
    #[error("A submission is already in progress")]
    Busy,

    /// Operation not allowed in the current UI state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error (session file, image files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Error body the backend sends with non-2xx responses
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl ClientError {
    /// Classify a non-2xx response
    ///
    /// A structured `{message}` body always wins so the server's wording
    /// reaches the user unchanged.
    pub fn from_status(status: u16, text: &str) -> Self {
        if let Ok(body) = serde_json::from_str::<ErrorBody>(text)
            && let Some(message) = body.message.or(body.error)
        {
            return ClientError::Api { status, message };
        }
        match status {
            401 => ClientError::Unauthorized,
            403 => ClientError::Forbidden(text.to_string()),
            404 => ClientError::NotFound(text.to_string()),
            _ => ClientError::Status {
                status,
                body: text.to_string(),
            },
        }
    }

    /// Build a validation error from a `validator` report
    pub fn validation(errors: &ValidationErrors) -> Self {
        ClientError::Validation(issues(errors))
    }

    /// HTTP status, when the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } | ClientError::Status { status, .. } => Some(*status),
            ClientError::Unauthorized => Some(401),
            ClientError::Forbidden(_) => Some(403),
            ClientError::NotFound(_) => Some(404),
            ClientError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The one line shown to the user
    ///
    /// The server's message verbatim when there is one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Api { message, .. } => message.clone(),
            ClientError::Validation(list) => summarize(list),
            ClientError::Unauthorized => "Please sign in again".to_string(),
            ClientError::Forbidden(_) => "You do not have permission to do that".to_string(),
            ClientError::Busy => "Please wait for the current request to finish".to_string(),
            _ => fallback.to_string(),
        }
    }
}

impl From<EnvelopeError> for ClientError {
    fn from(err: EnvelopeError) -> Self {
        match err {
            EnvelopeError::Rejected(message) => ClientError::Api {
                status: 200,
                message: message.unwrap_or_else(|| "Request was rejected".to_string()),
            },
            other => ClientError::InvalidResponse(other.to_string()),
        }
    }
}
