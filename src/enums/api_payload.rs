use serde::de::DeserializeOwned;
use serde_json::Value;
use crate::errors::{SessionDeskError, SessionDeskResult};

/// A successful response body, classified by content type.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiPayload {
    Json(Value),
    Text(String),
    Empty,
}

impl ApiPayload {
    pub fn into_json<T: DeserializeOwned>(self, operation: &str) -> SessionDeskResult<T> {
        match self {
            ApiPayload::Json(value) => Ok(serde_json::from_value(value)?),
            ApiPayload::Text(text) => Err(SessionDeskError::ParseError {
                content_type: "JSON".to_string(),
                reason: format!("{} returned non-JSON body: {}", operation, text),
            }),
            ApiPayload::Empty => Err(SessionDeskError::ParseError {
                content_type: "JSON".to_string(),
                reason: format!("{} returned an empty body", operation),
            }),
        }
    }

    /// Boolean-like bodies: `true`, `"true"` or the bare text `true`.
    pub fn is_truthy(&self) -> bool {
        match self {
            ApiPayload::Json(Value::Bool(flag)) => *flag,
            ApiPayload::Json(Value::String(text)) => text == "true",
            ApiPayload::Text(text) => text.trim() == "true",
            _ => false,
        }
    }
}
