//! Dot-notation key parsing.
//!
//! A key such as `"users.0.name"` is split on the delimiter into segments.
//! Each segment is matched against the node it is applied to: as a field
//! name on an object, or as a position on an array.

use crate::Delimiter;
use std::fmt;

/// Split `key` on every literal occurrence of `delimiter`.
///
/// Empty segments are preserved: `"a..b"` yields `["a", "", "b"]` and the
/// empty key yields a single empty segment.
///
/// # Examples
///
/// ```
/// use tirea_dot::split;
///
/// assert_eq!(split("a.b.c", "."), vec!["a", "b", "c"]);
/// assert_eq!(split("a--b", "--"), vec!["a", "b"]);
/// assert_eq!(split("", "."), vec![""]);
/// ```
pub fn split(key: &str, delimiter: &str) -> Vec<String> {
    key.split(delimiter).map(str::to_owned).collect()
}

/// Join segments with `delimiter`, the inverse of [`split`].
///
/// ```
/// use tirea_dot::{join, split};
///
/// let key = "a..b.";
/// assert_eq!(join(&split(key, "."), "."), key);
/// ```
pub fn join<S: AsRef<str>>(segments: &[S], delimiter: &str) -> String {
    let mut out = String::new();
    for (i, seg) in segments.iter().enumerate() {
        if i > 0 {
            out.push_str(delimiter);
        }
        out.push_str(seg.as_ref());
    }
    out
}

/// Interpret a segment as an array position.
///
/// Only the canonical decimal form matches: `"0"` and `"17"` do, `"01"`,
/// `"+1"`, `"-1"` and `" 1"` do not.
pub fn parse_index(segment: &str) -> Option<usize> {
    let bytes = segment.as_bytes();
    match bytes {
        [] => None,
        [b'0'] => Some(0),
        [b'0', ..] => None,
        _ if bytes.iter().all(u8::is_ascii_digit) => segment.parse().ok(),
        _ => None,
    }
}

/// A parsed key: its segments plus the key exactly as the caller wrote it.
///
/// The original key travels with the segments so failures deep in a
/// traversal still report what was asked for.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DotPath {
    key: String,
    segments: Vec<String>,
}

impl DotPath {
    /// Parse `key` with an already validated delimiter.
    pub fn parse(key: &str, delimiter: &Delimiter) -> Self {
        Self {
            key: key.to_owned(),
            segments: split(key, delimiter.as_str()),
        }
    }

    /// The key as originally requested.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// All segments, in order.
    #[inline]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments (always at least one).
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True only for a path with no segments, which parsing never produces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Split into the parent segments and the final segment.
    pub fn split_last(&self) -> Option<(&str, &[String])> {
        self.segments
            .split_last()
            .map(|(last, parent)| (last.as_str(), parent))
    }

    /// Iterate over the segments.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }
}

impl fmt::Display for DotPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}
