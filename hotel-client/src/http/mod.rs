//! HTTP transports
//!
//! `HttpClient` is the seam every screen talks through. `NetworkHttpClient`
//! goes over the wire with reqwest; `OneshotHttpClient` calls an axum
//! `Router` in-process.

mod multipart;
mod network;
mod oneshot;

pub use multipart::{MultipartPayload, Part, PartValue};
pub use network::NetworkHttpClient;
pub use oneshot::OneshotHttpClient;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ClientResult;

/// HTTP client trait
///
/// Paths are absolute (`/api/staff/42`). Non-2xx responses are classified
/// with [`ClientError::from_status`](crate::ClientError::from_status);
/// nothing is retried.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: MultipartPayload,
    ) -> ClientResult<T>;
    async fn put_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: MultipartPayload,
    ) -> ClientResult<T>;
    fn token(&self) -> Option<&str>;
    fn set_token(&mut self, token: Option<String>);
}
