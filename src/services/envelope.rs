// ============================================================================
// ENVELOPE - `{success, data | error}` returned by every backend call
// ============================================================================
// Page code only ever sees an `ApiResult`. Transport failures, HTTP errors
// and malformed payloads are all folded into `Failure` here.
// ============================================================================

use serde::de::DeserializeOwned;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

use super::transport::{HttpResponse, TransportError};
use crate::utils::{StorageError, STATUS_UNAUTHORIZED};

/// Failure side of the envelope. `Display` is the message shown to the admin.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Caller input rejected before any request was made
    #[error("{0}")]
    Validation(String),
    #[error("Network Error")]
    Network { detail: String },
    #[error("timeout of {millis}ms exceeded")]
    Timeout { millis: u128 },
    #[error("{0}")]
    Unauthorized(String),
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("Invalid response from server: {0}")]
    Parse(String),
    #[error("Could not save the session: {0}")]
    Storage(String),
    /// The session ended while the request was in flight; the response was dropped
    #[error("{0}")]
    Superseded(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    /// True when no response was received at all
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network { .. } | ApiError::Timeout { .. })
    }

    pub fn is_superseded(&self) -> bool {
        matches!(self, ApiError::Superseded(_))
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized(_) => Some(STATUS_UNAUTHORIZED),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(error: StorageError) -> Self {
        ApiError::Storage(error.to_string())
    }
}

impl From<TransportError> for ApiError {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::Network(detail) => ApiError::Network { detail },
            TransportError::Timeout(after) => ApiError::Timeout {
                millis: after.as_millis(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult<T> {
    Success(T),
    Failure(ApiError),
}

impl<T> ApiResult<T> {
    pub fn failure(error: ApiError) -> Self {
        ApiResult::Failure(error)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiResult::Success(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ApiResult::Success(data) => Some(data),
            ApiResult::Failure(_) => None,
        }
    }

    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            ApiResult::Success(_) => None,
            ApiResult::Failure(error) => Some(error),
        }
    }

    /// Message of a failed call
    pub fn error(&self) -> Option<String> {
        self.api_error().map(ToString::to_string)
    }

    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            ApiResult::Success(data) => Ok(data),
            ApiResult::Failure(error) => Err(error),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResult<U> {
        match self {
            ApiResult::Success(data) => ApiResult::Success(f(data)),
            ApiResult::Failure(error) => ApiResult::Failure(error),
        }
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> ApiResult<U>) -> ApiResult<U> {
        match self {
            ApiResult::Success(data) => f(data),
            ApiResult::Failure(error) => ApiResult::Failure(error),
        }
    }
}

impl<T> From<Result<T, ApiError>> for ApiResult<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => ApiResult::Success(data),
            Err(error) => ApiResult::Failure(error),
        }
    }
}

impl<T: Serialize> Serialize for ApiResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut envelope = serializer.serialize_struct("ApiResult", 2)?;
        match self {
            ApiResult::Success(data) => {
                envelope.serialize_field("success", &true)?;
                envelope.serialize_field("data", data)?;
            }
            ApiResult::Failure(error) => {
                envelope.serialize_field("success", &false)?;
                envelope.serialize_field("error", &error.to_string())?;
            }
        }
        envelope.end()
    }
}

/// Maps one transport outcome onto the envelope. Pure: the same outcome
/// always yields the same envelope, whatever verb or endpoint produced it.
pub fn normalize(outcome: Result<HttpResponse, TransportError>) -> ApiResult<Value> {
    let response = match outcome {
        Ok(response) => response,
        Err(error) => return ApiResult::Failure(error.into()),
    };

    if response.is_success() {
        return ApiResult::Success(parse_body(&response.body));
    }

    let message = extract_message(&response.body)
        .unwrap_or_else(|| format!("Request failed with status code {}", response.status));

    if response.status == STATUS_UNAUTHORIZED {
        ApiResult::Failure(ApiError::Unauthorized(message))
    } else {
        ApiResult::Failure(ApiError::Http {
            status: response.status,
            message,
        })
    }
}

/// Empty bodies become `null`; anything that is not JSON is kept as text
fn parse_body(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

/// Backend's structured `message` field, when present and non-blank
pub fn extract_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("message")?
        .as_str()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

/// Typed view over a raw envelope
pub fn decode<T: DeserializeOwned>(result: ApiResult<Value>) -> ApiResult<T> {
    result.and_then(|value| {
        serde_json::from_value::<T>(value)
            .map_err(|e| ApiError::Parse(e.to_string()))
            .into()
    })
}

/// List endpoints wrap their payload one level deep, either as
/// `{ "<key>": [...] }` or `{ "data": [...] }`. Unwraps that single level;
/// any other shape is returned unchanged.
pub fn unwrap_collection(value: Value, key: &str) -> Value {
    match value {
        Value::Object(mut fields) => {
            let inner = [key, "data"]
                .into_iter()
                .find(|k| fields.get(*k).is_some_and(is_present))
                .and_then(|k| fields.remove(k));
            match inner {
                Some(inner) => inner,
                None => Value::Object(fields),
            }
        }
        other => other,
    }
}

/// Like [`unwrap_collection`] for endpoints whose payload is always a list:
/// a wrapper object without the list, or a `null` body, reads as no items.
pub fn unwrap_list(value: Value, key: &str) -> Value {
    match unwrap_collection(value, key) {
        Value::Object(_) | Value::Null => Value::Array(Vec::new()),
        other => other,
    }
}

fn is_present(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Bool(false))
}
