//! Write-side traversal: set, append and delete by dot path.
//!
//! Writes never fail on shape. Missing intermediate nodes are created as
//! objects, and a scalar in the way of a longer path is replaced by one.

use crate::error::value_type_name;
use crate::path::parse_index;
use crate::read::{child_mut, on_missing, resolve, resolve_mut};
use crate::{DotPath, DotResult, MissingKey};
use serde_json::{Map, Value};

#[inline]
fn is_container(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// Set `value` at `path`, creating intermediate objects as needed.
pub(crate) fn set_path(tree: &mut Value, path: &DotPath, value: Value) {
    set_at(tree, path.segments(), value, path);
}

fn set_at(current: &mut Value, segments: &[String], value: Value, path: &DotPath) {
    let Some((segment, rest)) = segments.split_first() else {
        *current = value;
        return;
    };

    if !is_container(current) {
        if !current.is_null() {
            tracing::debug!(
                key = %path,
                replaced = value_type_name(current),
                "replacing scalar with object to continue dot path"
            );
        }
        *current = Value::Object(Map::new());
    }

    let slot = slot_mut(current, segment, path);
    if rest.is_empty() {
        *slot = value;
    } else {
        set_at(slot, rest, value, path);
    }
}

/// Find or create the child of a container that `segment` addresses.
///
/// An array accepts an in-range index or the index one past its end (a push).
/// Any other segment turns the array into an object keyed by position so the
/// segment can be stored as a field.
fn slot_mut<'a>(node: &'a mut Value, segment: &str, path: &DotPath) -> &'a mut Value {
    let position = match node {
        Value::Array(arr) => parse_index(segment).filter(|&i| i <= arr.len()),
        _ => None,
    };

    match (node, position) {
        (Value::Array(arr), Some(i)) => {
            if i == arr.len() {
                arr.push(Value::Null);
            }
            &mut arr[i]
        }
        (node, _) => object_entry(node, segment, path),
    }
}

fn object_entry<'a>(node: &'a mut Value, segment: &str, path: &DotPath) -> &'a mut Value {
    if !node.is_object() {
        let fields = match std::mem::take(node) {
            Value::Array(arr) => {
                tracing::debug!(
                    key = %path,
                    segment,
                    len = arr.len(),
                    "promoting array to object for non-positional segment"
                );
                arr.into_iter()
                    .enumerate()
                    .map(|(i, v)| (i.to_string(), v))
                    .collect()
            }
            _ => Map::new(),
        };
        *node = Value::Object(fields);
    }

    match node {
        Value::Object(map) => map.entry(segment.to_owned()).or_insert(Value::Null),
        _ => unreachable!("node was just made an object"),
    }
}

/// Append `value` to whatever is at `path`.
///
/// Both sides are treated as arrays: a non-array existing value becomes the
/// first element, and an array `value` contributes all of its elements.
pub(crate) fn append_path(
    tree: &mut Value,
    path: &DotPath,
    value: Value,
    policy: MissingKey,
) -> DotResult<()> {
    let mut items = match resolve_mut(tree, path).map(std::mem::take) {
        Some(Value::Array(existing)) => existing,
        Some(existing) => vec![existing],
        None => on_missing(path, policy, Vec::new())?,
    };

    match value {
        Value::Array(more) => items.extend(more),
        single => items.push(single),
    }

    set_path(tree, path, Value::Array(items));
    Ok(())
}

/// Remove the entry at `path`.
///
/// An absent key is a no-op unless `policy` is [`MissingKey::Fail`]. Array
/// removal shifts later elements down; object removal keeps key order.
pub(crate) fn delete_path(tree: &mut Value, path: &DotPath, policy: MissingKey) -> DotResult<()> {
    if resolve(tree, path).is_none() {
        return on_missing(path, policy, ());
    }

    let Some((last, parents)) = path.split_last() else {
        return Ok(());
    };

    let mut current = tree;
    for segment in parents {
        let Some(next) = child_mut(current, segment) else {
            return Ok(());
        };
        if !is_container(next) {
            return Ok(());
        }
        current = next;
    }

    match current {
        Value::Object(map) => {
            map.shift_remove(last);
        }
        Value::Array(arr) => {
            if let Some(i) = parse_index(last).filter(|&i| i < arr.len()) {
                arr.remove(i);
            }
        }
        _ => {}
    }
    Ok(())
}
