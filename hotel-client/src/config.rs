//! Client configuration
//!
//! One place for the backend address and request settings. The CLI fills
//! it from these variables (or matching flags) and applies them through the
//! builders below.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | HOTEL_API_URL | http://localhost:5000 | Backend base URL |
//! | HOTEL_API_TOKEN | (none) | Bearer token |
//! | HOTEL_API_TIMEOUT_SECS | 30 | Request timeout |
//! | HOTEL_SESSION_DIR | .hotel-admin | Where the signed-in session is kept |

use std::path::PathBuf;

use crate::error::ClientResult;
use crate::http::NetworkHttpClient;
use crate::session::SessionStore;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_SESSION_DIR: &str = ".hotel-admin";

/// Client configuration for connecting to the hotel backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:5000")
    pub base_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Directory holding the session file
    pub session_dir: PathBuf,
}

impl ClientConfig {
    /// Create a configuration for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
            timeout: DEFAULT_TIMEOUT_SECS,
            session_dir: PathBuf::from(DEFAULT_SESSION_DIR),
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the bearer token if one is given; blank tokens are ignored
    pub fn with_optional_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the session directory
    pub fn with_session_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.session_dir = dir.into();
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<NetworkHttpClient> {
        NetworkHttpClient::new(self)
    }

    /// Session storage in the configured directory
    pub fn session_store(&self) -> SessionStore {
        SessionStore::new(&self.session_dir)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
