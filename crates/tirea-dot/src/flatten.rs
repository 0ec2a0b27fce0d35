//! Flattening a tree into `key -> leaf` pairs, and rebuilding one.
//!
//! A leaf is a scalar or an empty container. Keys are the dot paths that
//! reach each leaf, so setting every pair into an empty object rebuilds the
//! tree, except that arrays come back as objects keyed by position.

use crate::write::set_path;
use crate::{Delimiter, DotPath};
use serde_json::{Map, Value};

/// Collect every leaf under `node` into `out`, keys prefixed with `prepend`.
pub(crate) fn flatten_into(
    node: &Value,
    delimiter: &Delimiter,
    prepend: &str,
    out: &mut Map<String, Value>,
) {
    match node {
        Value::Object(map) => {
            for (key, value) in map {
                flatten_entry(key, value, delimiter, prepend, out);
            }
        }
        Value::Array(arr) => {
            for (index, value) in arr.iter().enumerate() {
                flatten_entry(&index.to_string(), value, delimiter, prepend, out);
            }
        }
        _ => {}
    }
}

fn flatten_entry(
    key: &str,
    value: &Value,
    delimiter: &Delimiter,
    prepend: &str,
    out: &mut Map<String, Value>,
) {
    let full_key = format!("{prepend}{key}");
    let expands = match value {
        Value::Object(map) => !map.is_empty(),
        Value::Array(arr) => !arr.is_empty(),
        _ => false,
    };

    if expands {
        let nested_prefix = format!("{full_key}{delimiter}");
        flatten_into(value, delimiter, &nested_prefix, out);
    } else {
        out.insert(full_key, value.clone());
    }
}

/// Rebuild a tree from flattened pairs by setting each one in order.
pub(crate) fn expand_from(flat: &Map<String, Value>, delimiter: &Delimiter) -> Value {
    let mut tree = Value::Object(Map::new());
    for (key, value) in flat {
        set_path(&mut tree, &DotPath::parse(key, delimiter), value.clone());
    }
    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn flatten(doc: &Value, delimiter: &str) -> Value {
        let mut out = Map::new();
        flatten_into(doc, &Delimiter::new(delimiter).unwrap(), "", &mut out);
        Value::Object(out)
    }

    #[test]
    fn test_flatten_nested() {
        let doc = json!({"test1": {"test1": "test1"}, "test2": ["test2", "test2a"]});
        assert_eq!(
            flatten(&doc, "."),
            json!({"test1.test1": "test1", "test2.0": "test2", "test2.1": "test2a"})
        );
    }

    #[test]
    fn test_flatten_empty_containers_are_leaves() {
        let doc = json!({"a": {}, "b": [], "c": {"d": []}});
        assert_eq!(flatten(&doc, "."), json!({"a": {}, "b": [], "c.d": []}));
    }

    #[test]
    fn test_flatten_preserves_traversal_order() {
        let doc = json!({"z": 1, "a": {"y": 2, "b": 3}, "m": [4, 5]});
        let flat = flatten(&doc, ".");
        let keys: Vec<_> = flat.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["z", "a.y", "a.b", "m.0", "m.1"]);
    }

    #[test]
    fn test_flatten_with_prepend() {
        let mut out = Map::new();
        flatten_into(&json!({"a": {"b": 1}}), &Delimiter::default(), "root.", &mut out);
        assert_eq!(Value::Object(out), json!({"root.a.b": 1}));
    }

    #[test]
    fn test_flatten_scalar_root_is_empty() {
        assert_eq!(flatten(&json!("just a string"), "."), json!({}));
    }

    #[test]
    fn test_expand_rebuilds_objects() {
        let doc = json!({"a": {"b": {"c": 1}, "d": [1, 2]}, "e": {}});
        let d = Delimiter::default();
        let mut flat = Map::new();
        flatten_into(&doc, &d, "", &mut flat);
        assert_eq!(
            expand_from(&flat, &d),
            json!({"a": {"b": {"c": 1}, "d": {"0": 1, "1": 2}}, "e": {}})
        );
    }
}
