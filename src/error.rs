//! Error Types
//!
//! API failures and per-field error messages shown next to form inputs.

use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

/// Errors returned by the REST client
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success status, with the decoded body (Null when not JSON)
    #[error("Server responded with status {status}")]
    Status { status: u16, body: Value },

    /// Response body did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-provided `detail` message, if any
    pub fn detail(&self) -> Option<String> {
        match self {
            ApiError::Status { body, .. } => body.get("detail").and_then(first_message),
            _ => None,
        }
    }

    /// Field errors from a validation response body
    pub fn field_errors(&self) -> FieldErrors {
        match self {
            ApiError::Status { body, .. } => FieldErrors::from_server(body),
            _ => FieldErrors::default(),
        }
    }
}

/// First human-readable message in a server error value
fn first_message(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(values) => values.first().and_then(first_message),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// Error messages keyed by dotted field path (`title`, `custom_field.field_value`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.0.insert(path.into(), message.into());
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    /// Remove the error for `path`; returns whether one was present
    pub fn clear(&mut self, path: &str) -> bool {
        self.0.remove(path).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Overlay `other` on top of `self`
    pub fn merge(&mut self, other: FieldErrors) {
        self.0.extend(other.0);
    }

    /// Flatten a DRF-style error body: lists keep their first message,
    /// nested objects become dotted paths. `detail` is reported separately.
    pub fn from_server(body: &Value) -> Self {
        let mut errors = FieldErrors::new();
        if let Value::Object(map) = body {
            for (key, value) in map {
                if key == "detail" {
                    continue;
                }
                errors.collect(key, value);
            }
        }
        errors
    }

    fn collect(&mut self, path: &str, value: &Value) {
        match value {
            Value::Object(map) => {
                for (key, nested) in map {
                    self.collect(&format!("{}.{}", path, key), nested);
                }
            }
            other => {
                if let Some(message) = first_message(other) {
                    self.insert(path, message);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flatten_server_errors() {
        let body = json!({
            "title": ["This field may not be blank."],
            "custom_field": {
                "field_value": ["Value must be of type number"]
            },
            "detail": "Invalid input."
        });
        let errors = FieldErrors::from_server(&body);

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("title"), Some("This field may not be blank."));
        assert_eq!(errors.get("custom_field.field_value"), Some("Value must be of type number"));
        assert_eq!(errors.get("detail"), None);
    }

    #[test]
    fn test_plain_string_error_kept() {
        let errors = FieldErrors::from_server(&json!({ "due_date": "Date has wrong format." }));
        assert_eq!(errors.get("due_date"), Some("Date has wrong format."));
    }

    #[test]
    fn test_detail_and_status() {
        let err = ApiError::Status {
            status: 401,
            body: json!({ "detail": "No active account found with the given credentials" }),
        };
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.detail().as_deref(), Some("No active account found with the given credentials"));
        assert!(err.field_errors().is_empty());

        let err = ApiError::Network("offline".to_string());
        assert_eq!(err.detail(), None);
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_merge_and_clear() {
        let mut errors = FieldErrors::new();
        errors.insert("title", "Title is required");
        let mut server = FieldErrors::new();
        server.insert("title", "Too long");
        server.insert("notes", "Bad");
        errors.merge(server);

        assert_eq!(errors.get("title"), Some("Too long"));
        assert!(errors.clear("notes"));
        assert!(!errors.clear("notes"));
        assert_eq!(errors.len(), 1);
    }
}
