//! Delimiter validation.

use crate::{DotError, DotResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The delimiter used when none is configured.
pub const DEFAULT_DELIMITER: &str = ".";

/// A validated, non-empty key delimiter.
///
/// Any non-empty string works, including multi-character separators such as
/// `"--"` or `"::"`. Splitting is literal, never a pattern match.
///
/// # Examples
///
/// ```
/// use tirea_dot::Delimiter;
///
/// let d = Delimiter::new("::").unwrap();
/// assert_eq!(d.as_str(), "::");
/// assert!(Delimiter::new("").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Delimiter(String);

impl Delimiter {
    /// Validate and wrap a delimiter.
    pub fn new(delimiter: impl Into<String>) -> DotResult<Self> {
        let delimiter = delimiter.into();
        validate_delimiter(&delimiter)?;
        Ok(Self(delimiter))
    }

    /// The delimiter as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Self(DEFAULT_DELIMITER.to_owned())
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Delimiter {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Delimiter {
    type Error = DotError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Delimiter {
    type Error = DotError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Delimiter> for String {
    fn from(value: Delimiter) -> Self {
        value.0
    }
}

/// Reject delimiters that cannot split a key.
#[inline]
pub fn validate_delimiter(delimiter: &str) -> DotResult<()> {
    if delimiter.is_empty() {
        return Err(DotError::invalid_delimiter(delimiter));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dot() {
        assert_eq!(Delimiter::default().as_str(), ".");
    }

    #[test]
    fn test_empty_rejected() {
        let err = Delimiter::new("").unwrap_err();
        assert!(matches!(err, DotError::InvalidDelimiter { .. }));
        assert!(validate_delimiter("").is_err());
    }

    #[test]
    fn test_multi_char_accepted() {
        for d in ["~", "--", "::", " ", "\0"] {
            assert_eq!(Delimiter::new(d).unwrap().as_str(), d);
        }
    }

    #[test]
    fn test_serde_validates() {
        let d: Delimiter = serde_json::from_str("\"/\"").unwrap();
        assert_eq!(d.as_str(), "/");
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"/\"");

        assert!(serde_json::from_str::<Delimiter>("\"\"").is_err());
    }
}
