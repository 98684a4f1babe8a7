//! API Response types
//!
//! The hotel backend wraps every payload in the same envelope:
//!
//! ```json
//! {
//!     "success": true,
//!     "data": { ... },
//!     "message": "Category created"
//! }
//! ```
//!
//! List endpoints either put the array directly into `data` or nest it
//! under an entity key (`{"data": {"categories": [...]}}`). Each resource
//! declares which one it uses via [`ListShape`]; nothing else is accepted.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Unified API response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// Create a successful response with custom message
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

impl ApiResponse<()> {
    /// Successful response without payload (deletes, logout)
    pub fn done(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Where a list endpoint puts its collection inside `data`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListShape {
    /// `data` is the array itself
    Bare,
    /// `data` is an object holding the array under this key
    Keyed(&'static str),
}

/// Envelope contract violations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvelopeError {
    /// `success` was false; carries the server message if any
    #[error("{}", .0.as_deref().unwrap_or("request was rejected"))]
    Rejected(Option<String>),
    /// `data` was absent where a payload is required
    #[error("response has no data")]
    MissingData,
    /// `data` did not have the declared shape
    #[error("unexpected response shape: {0}")]
    Shape(String),
}

impl ApiResponse<Value> {
    fn accepted(self) -> Result<Option<Value>, EnvelopeError> {
        if !self.success {
            return Err(EnvelopeError::Rejected(self.message));
        }
        Ok(self.data)
    }

    /// Unwrap a single-item payload
    pub fn into_item<T: DeserializeOwned>(self) -> Result<T, EnvelopeError> {
        let data = self.accepted()?.ok_or(EnvelopeError::MissingData)?;
        serde_json::from_value(data).map_err(|e| EnvelopeError::Shape(e.to_string()))
    }

    /// Unwrap a list payload with the declared shape
    pub fn into_list<T: DeserializeOwned>(self, shape: ListShape) -> Result<Vec<T>, EnvelopeError> {
        let data = self.accepted()?.ok_or(EnvelopeError::MissingData)?;
        let array = match (shape, data) {
            (ListShape::Bare, Value::Array(items)) => items,
            (ListShape::Bare, other) => {
                return Err(EnvelopeError::Shape(format!(
                    "expected an array in data, found {}",
                    kind(&other)
                )));
            }
            (ListShape::Keyed(key), Value::Object(mut map)) => match map.remove(key) {
                Some(Value::Array(items)) => items,
                Some(other) => {
                    return Err(EnvelopeError::Shape(format!(
                        "expected an array in data.{}, found {}",
                        key,
                        kind(&other)
                    )));
                }
                None => {
                    return Err(EnvelopeError::Shape(format!("data.{} is missing", key)));
                }
            },
            (ListShape::Keyed(key), other) => {
                return Err(EnvelopeError::Shape(format!(
                    "expected an object with '{}' in data, found {}",
                    key,
                    kind(&other)
                )));
            }
        };

        array
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(|e| EnvelopeError::Shape(e.to_string())))
            .collect()
    }

    /// Accept a payload-less acknowledgement (deletes)
    pub fn into_ack(self) -> Result<Option<String>, EnvelopeError> {
        let message = self.message.clone();
        self.accepted()?;
        Ok(message)
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: String,
    }

    fn envelope(value: Value) -> ApiResponse<Value> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn keyed_list_is_unwrapped() {
        let resp = envelope(json!({
            "success": true,
            "data": { "categories": [{ "id": "a" }, { "id": "b" }] }
        }));
        let rows: Vec<Row> = resp.into_list(ListShape::Keyed("categories")).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].id, "b");
    }

    #[test]
    fn bare_list_is_unwrapped() {
        let resp = envelope(json!({ "success": true, "data": [{ "id": "x" }] }));
        let rows: Vec<Row> = resp.into_list(ListShape::Bare).unwrap();
        assert_eq!(rows, vec![Row { id: "x".into() }]);
    }

    #[test]
    fn nested_data_data_is_rejected() {
        let resp = envelope(json!({
            "success": true,
            "data": { "data": [{ "id": "x" }] }
        }));
        let err = resp.into_list::<Row>(ListShape::Keyed("tables")).unwrap_err();
        assert_eq!(err, EnvelopeError::Shape("data.tables is missing".into()));
    }

    #[test]
    fn bare_shape_rejects_object() {
        let resp = envelope(json!({ "success": true, "data": { "roles": [] } }));
        let err = resp.into_list::<Row>(ListShape::Bare).unwrap_err();
        assert!(matches!(err, EnvelopeError::Shape(_)));
    }

    #[test]
    fn unsuccessful_envelope_carries_message() {
        let resp = envelope(json!({ "success": false, "message": "Not allowed" }));
        let err = resp.into_item::<Row>().unwrap_err();
        assert_eq!(err, EnvelopeError::Rejected(Some("Not allowed".into())));
        assert_eq!(err.to_string(), "Not allowed");
    }

    #[test]
    fn rejection_without_message_has_fallback_text() {
        let resp = envelope(json!({ "success": false }));
        let err = resp.into_ack().unwrap_err();
        assert_eq!(err.to_string(), "request was rejected");
        assert_eq!(
            EnvelopeError::Shape("data.roles is missing".into()).to_string(),
            "unexpected response shape: data.roles is missing"
        );
    }

    #[test]
    fn constructed_envelopes_unwrap_symmetrically() {
        let created: ApiResponse<Value> =
            envelope(serde_json::to_value(ApiResponse::ok_with_message(json!({ "id": "n" }), "Created")).unwrap());
        assert_eq!(created.message.as_deref(), Some("Created"));
        assert_eq!(created.into_item::<Row>().unwrap(), Row { id: "n".into() });

        let removed = envelope(serde_json::to_value(ApiResponse::<()>::done("Deleted")).unwrap());
        assert_eq!(removed.into_ack().unwrap().as_deref(), Some("Deleted"));

        let refused = envelope(serde_json::to_value(ApiResponse::<()>::error("Nope")).unwrap());
        assert_eq!(refused.into_ack().unwrap_err(), EnvelopeError::Rejected(Some("Nope".into())));
    }

    #[test]
    fn missing_data_is_an_error() {
        let resp = envelope(json!({ "success": true }));
        assert_eq!(resp.into_item::<Row>().unwrap_err(), EnvelopeError::MissingData);
    }

    #[test]
    fn ack_returns_message() {
        let resp = envelope(json!({ "success": true, "message": "Deleted" }));
        assert_eq!(resp.into_ack().unwrap().as_deref(), Some("Deleted"));
    }
}
