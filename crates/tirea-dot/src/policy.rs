//! Caller-selected behaviour for missing keys and non-container counts.

use crate::Delimiter;
use serde::{Deserialize, Serialize};

/// What a read does when the key does not resolve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingKey {
    /// Fall back to the caller's default.
    #[default]
    ReturnDefault,
    /// Fail with [`DotError::KeyNotFound`](crate::DotError::KeyNotFound).
    Fail,
}

/// What [`count`](crate::count) reports for a value that is not a container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonArrayCount {
    /// Report `0`.
    #[default]
    Zero,
    /// Report `-1`.
    NegativeOne,
}

impl NonArrayCount {
    /// The count reported under this policy.
    #[inline]
    pub fn value(self) -> i64 {
        match self {
            NonArrayCount::Zero => 0,
            NonArrayCount::NegativeOne => -1,
        }
    }
}

/// Serializable settings for a [`Dot`](crate::Dot) handle.
///
/// All fields are optional when deserializing:
///
/// ```
/// use tirea_dot::{DotConfig, MissingKey, NonArrayCount};
///
/// let cfg: DotConfig = serde_json::from_str(r#"{"delimiter": "/", "on_missing": "fail"}"#).unwrap();
/// assert_eq!(cfg.delimiter.as_str(), "/");
/// assert_eq!(cfg.on_missing, MissingKey::Fail);
/// assert_eq!(cfg.non_array_count, NonArrayCount::Zero);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotConfig {
    /// Key delimiter, `"."` by default.
    pub delimiter: Delimiter,
    /// Missing-key policy for reads, appends and deletes.
    pub on_missing: MissingKey,
    /// Count reported for non-container values.
    pub non_array_count: NonArrayCount,
}
