//! Free-function surface.
//!
//! Each function takes the delimiter and policies per call and validates the
//! delimiter before touching the tree, so an empty delimiter always fails
//! with [`DotError::InvalidDelimiter`](crate::DotError::InvalidDelimiter) and
//! never leaves a partial write behind.

use crate::{Dot, DotResult, MissingKey, NonArrayCount};
use serde_json::{Map, Value};

#[inline]
fn accessor(delimiter: &str) -> DotResult<Dot> {
    Dot::new().with_delimiter(delimiter)
}

/// Clone the value at `key`, or apply `on_missing`.
///
/// ```
/// use tirea_dot::{get, MissingKey};
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": [1, 2]}});
/// assert_eq!(get(&doc, "a.b.1", json!(null), ".", MissingKey::ReturnDefault).unwrap(), json!(2));
/// assert_eq!(get(&doc, "a.x", json!("none"), ".", MissingKey::ReturnDefault).unwrap(), json!("none"));
/// assert!(get(&doc, "a.x", json!(null), ".", MissingKey::Fail).is_err());
/// ```
pub fn get(
    tree: &Value,
    key: &str,
    default: Value,
    delimiter: &str,
    on_missing: MissingKey,
) -> DotResult<Value> {
    accessor(delimiter)?
        .with_on_missing(on_missing)
        .get(tree, key, default)
}

/// Borrow the value at `key`, `None` if it does not resolve.
pub fn lookup<'a>(tree: &'a Value, key: &str, delimiter: &str) -> DotResult<Option<&'a Value>> {
    Ok(accessor(delimiter)?.lookup(tree, key))
}

/// Set `value` at `key`, creating intermediate objects.
///
/// ```
/// use tirea_dot::set;
/// use serde_json::json;
///
/// let mut doc = json!({"test": ["test1"]});
/// set(&mut doc, "test.0", json!("new"), ".").unwrap();
/// assert_eq!(doc, json!({"test": ["new"]}));
/// ```
pub fn set(tree: &mut Value, key: &str, value: Value, delimiter: &str) -> DotResult<()> {
    accessor(delimiter)?.set(tree, key, value);
    Ok(())
}

/// Whether `key` resolves to a value.
pub fn has(tree: &Value, key: &str, delimiter: &str) -> DotResult<bool> {
    Ok(accessor(delimiter)?.has(tree, key))
}

/// Number of children at `key`; non-containers report `non_array`.
pub fn count(
    tree: &Value,
    key: &str,
    delimiter: &str,
    non_array: NonArrayCount,
    on_missing: MissingKey,
) -> DotResult<i64> {
    accessor(delimiter)?
        .with_non_array_count(non_array)
        .with_on_missing(on_missing)
        .count(tree, key)
}

/// Append `value` at `key`.
///
/// ```
/// use tirea_dot::{append, MissingKey};
/// use serde_json::json;
///
/// let mut doc = json!({"test": "test1"});
/// append(&mut doc, "test", json!("test2"), ".", MissingKey::ReturnDefault).unwrap();
/// assert_eq!(doc, json!({"test": ["test1", "test2"]}));
/// ```
pub fn append(
    tree: &mut Value,
    key: &str,
    value: Value,
    delimiter: &str,
    on_missing: MissingKey,
) -> DotResult<()> {
    accessor(delimiter)?
        .with_on_missing(on_missing)
        .append(tree, key, value)
}

/// Remove the entry at `key`.
pub fn delete(tree: &mut Value, key: &str, delimiter: &str, on_missing: MissingKey) -> DotResult<()> {
    accessor(delimiter)?
        .with_on_missing(on_missing)
        .delete(tree, key)
}

/// Flatten `tree` into `prepend + key -> leaf` pairs.
///
/// ```
/// use tirea_dot::flatten;
/// use serde_json::{json, Value};
///
/// let flat = flatten(&json!({"a": {"b": 1}, "c": [true]}), ".", "").unwrap();
/// assert_eq!(Value::Object(flat), json!({"a.b": 1, "c.0": true}));
/// ```
pub fn flatten(tree: &Value, delimiter: &str, prepend: &str) -> DotResult<Map<String, Value>> {
    Ok(accessor(delimiter)?.flatten_with_prefix(tree, prepend))
}

/// Rebuild a tree from flattened pairs.
pub fn expand(flat: &Map<String, Value>, delimiter: &str) -> DotResult<Value> {
    Ok(accessor(delimiter)?.expand(flat))
}
