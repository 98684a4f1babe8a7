// hotel-client/src/http/oneshot.rs
// Oneshot HTTP client - in-process calls into an axum Router

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use super::{HttpClient, MultipartPayload};
use crate::error::{ClientError, ClientResult};

/// Oneshot HTTP client (in-memory calls)
///
/// Drives a Router with tower's `oneshot`, so an embedded backend (or a
/// test double) answers without any socket.
///
/// ```ignore
/// let client = OneshotHttpClient::new(router);
/// let resp: ApiResponse<Value> = client.get("/api/roles").await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
    token: Option<String>,
}

impl OneshotHttpClient {
    /// `router` must already have its state attached
    pub fn new(router: Router) -> Self {
        Self {
            router,
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn build(
        &self,
        method: Method,
        path: &str,
        content_type: Option<&str>,
        body: Body,
    ) -> ClientResult<Request<Body>> {
        tracing::debug!(%method, %path, "dispatching in-process request");
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = &self.token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        builder
            .body(body)
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {}", e)))
    }

    fn json_request<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ClientResult<Request<Body>> {
        let bytes = serde_json::to_vec(body)?;
        self.build(method, path, Some("application/json"), Body::from(bytes))
    }

    fn multipart_request(
        &self,
        method: Method,
        path: &str,
        form: &MultipartPayload,
    ) -> ClientResult<Request<Body>> {
        let boundary = format!("hotel-{}", uuid::Uuid::new_v4().simple());
        let content_type = MultipartPayload::content_type(&boundary);
        self.build(method, path, Some(&content_type), Body::from(form.encode(&boundary)))
    }

    /// Execute the request and decode the response
    async fn execute<T: DeserializeOwned>(&self, request: Request<Body>) -> ClientResult<T> {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {}", e)))?;

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {}", e)))?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body_bytes);
            return Err(ClientError::from_status(status.as_u16(), &text));
        }

        serde_json::from_slice(&body_bytes)
            .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)))
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build(Method::GET, path, None, Body::empty())?;
        self.execute(request).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.json_request(Method::POST, path, body)?;
        self.execute(request).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.json_request(Method::PUT, path, body)?;
        self.execute(request).await
    }

    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.json_request(Method::PATCH, path, body)?;
        self.execute(request).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build(Method::DELETE, path, None, Body::empty())?;
        self.execute(request).await
    }

    async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: MultipartPayload,
    ) -> ClientResult<T> {
        let request = self.multipart_request(Method::POST, path, &form)?;
        self.execute(request).await
    }

    async fn put_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: MultipartPayload,
    ) -> ClientResult<T> {
        let request = self.multipart_request(Method::PUT, path, &form)?;
        self.execute(request).await
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;
    use axum::routing::get;
    use serde_json::{Value, json};

    #[tokio::test]
    async fn routes_through_router() {
        let router = Router::new().route("/api/ping", get(|| async { Json(json!({ "pong": true })) }));
        let client = OneshotHttpClient::new(router);
        let value: Value = client.get("/api/ping").await.unwrap();
        assert_eq!(value, json!({ "pong": true }));
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let client = OneshotHttpClient::new(Router::new());
        let err = client.get::<Value>("/api/missing").await.unwrap_err();
        assert!(matches!(err, ClientError::NotFound(_)));
    }
}
