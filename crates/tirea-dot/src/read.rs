//! Read-side traversal: resolve a parsed key against a tree.
//!
//! Descent is iterative over the key's segments. A node that is not a
//! container, or a container without the segment, ends the walk as "not
//! found"; the two cases are indistinguishable to callers.

use crate::path::parse_index;
use crate::{DotError, DotPath, DotResult, MissingKey, NonArrayCount};
use serde_json::Value;

/// Child of `node` addressed by `segment`, if `node` is a container holding it.
#[inline]
pub(crate) fn child<'a>(node: &'a Value, segment: &str) -> Option<&'a Value> {
    match node {
        Value::Object(map) => map.get(segment),
        Value::Array(arr) => parse_index(segment).and_then(|i| arr.get(i)),
        _ => None,
    }
}

/// Mutable counterpart of [`child`].
#[inline]
pub(crate) fn child_mut<'a>(node: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
    match node {
        Value::Object(map) => map.get_mut(segment),
        Value::Array(arr) => parse_index(segment).and_then(|i| arr.get_mut(i)),
        _ => None,
    }
}

/// Resolve `path` against `tree`.
pub(crate) fn resolve<'a>(tree: &'a Value, path: &DotPath) -> Option<&'a Value> {
    let mut current = tree;
    for (depth, segment) in path.iter().enumerate() {
        match child(current, segment) {
            Some(next) => current = next,
            None => {
                tracing::trace!(key = %path, depth, segment, "dot path not found");
                return None;
            }
        }
    }
    Some(current)
}

/// Resolve `path` against `tree` for in-place modification.
pub(crate) fn resolve_mut<'a>(tree: &'a mut Value, path: &DotPath) -> Option<&'a mut Value> {
    let mut current = tree;
    for segment in path.iter() {
        current = child_mut(current, segment)?;
    }
    Some(current)
}

/// Apply the missing-key policy: hand back `default`, or fail with the full key.
pub(crate) fn on_missing<T>(path: &DotPath, policy: MissingKey, default: T) -> DotResult<T> {
    match policy {
        MissingKey::ReturnDefault => Ok(default),
        MissingKey::Fail => {
            tracing::debug!(key = %path, "dot path not found in strict mode");
            Err(DotError::key_not_found(path.key()))
        }
    }
}

/// Clone the value at `path`, or apply the missing-key policy.
pub(crate) fn get_path(
    tree: &Value,
    path: &DotPath,
    default: Value,
    policy: MissingKey,
) -> DotResult<Value> {
    match resolve(tree, path) {
        Some(found) => Ok(found.clone()),
        None => on_missing(path, policy, default),
    }
}

/// Number of children at `path`.
///
/// A present scalar and, under [`MissingKey::ReturnDefault`], an absent key
/// both report the `non_array` policy value.
pub(crate) fn count_path(
    tree: &Value,
    path: &DotPath,
    non_array: NonArrayCount,
    policy: MissingKey,
) -> DotResult<i64> {
    let fallback = non_array.value();
    let count = match resolve(tree, path) {
        Some(Value::Array(arr)) => arr.len() as i64,
        Some(Value::Object(map)) => map.len() as i64,
        Some(_) => fallback,
        None => on_missing(path, policy, fallback)?,
    };
    Ok(count)
}
