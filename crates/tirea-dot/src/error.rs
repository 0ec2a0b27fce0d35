//! Error types for tirea-dot operations.

use thiserror::Error;

/// Result type alias for tirea-dot operations.
pub type DotResult<T> = Result<T, DotError>;

/// Errors that can occur during dot-path operations.
#[derive(Debug, Error)]
pub enum DotError {
    /// The delimiter cannot be used to split a key.
    #[error("invalid delimiter '{delimiter}': a delimiter must be a non-empty string")]
    InvalidDelimiter {
        /// The rejected delimiter.
        delimiter: String,
    },

    /// The requested key does not resolve to a value.
    ///
    /// Only produced when the caller opted into [`MissingKey::Fail`](crate::MissingKey::Fail).
    #[error("key not found: '{key}'")]
    KeyNotFound {
        /// The full key as requested, not the segment where descent stopped.
        key: String,
    },

    /// The value at the key could not be decoded into the requested type.
    #[error("cannot decode value at '{key}': {source}")]
    Decode {
        /// The full key that was read.
        key: String,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },
}

impl DotError {
    /// Create an invalid delimiter error.
    #[inline]
    pub fn invalid_delimiter(delimiter: impl Into<String>) -> Self {
        DotError::InvalidDelimiter {
            delimiter: delimiter.into(),
        }
    }

    /// Create a key not found error.
    #[inline]
    pub fn key_not_found(key: impl Into<String>) -> Self {
        DotError::KeyNotFound { key: key.into() }
    }

    /// Create a decode error.
    #[inline]
    pub fn decode(key: impl Into<String>, source: serde_json::Error) -> Self {
        DotError::Decode {
            key: key.into(),
            source,
        }
    }

    /// Returns true if this is a [`DotError::KeyNotFound`].
    #[inline]
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, DotError::KeyNotFound { .. })
    }

    /// The key this error refers to, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            DotError::KeyNotFound { key } | DotError::Decode { key, .. } => Some(key),
            DotError::InvalidDelimiter { .. } => None,
        }
    }
}

/// Get the type name of a JSON value.
#[inline]
pub fn value_type_name(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
