//! Dot-notation access to dynamic JSON value trees.
//!
//! `tirea-dot` reads, writes, tests, counts, appends to, deletes from and
//! flattens values inside a nested `serde_json::Value`, addressed by a
//! delimited key such as `"server.ports.0"` instead of manual traversal.
//!
//! # Core Concepts
//!
//! - **Key**: a string split on a delimiter (`"."` by default, any non-empty
//!   string allowed). Each segment is a field name on objects and a position
//!   on arrays.
//! - **Reads** (`get`, `has`, `count`, `flatten`) borrow the tree and never
//!   change it. A key that does not resolve, or that runs through a scalar,
//!   is missing.
//! - **Writes** (`set`, `append`, `delete`) take `&mut Value`. `set` creates
//!   missing intermediate objects and never fails on shape.
//! - **Missing keys** fall back to the caller's default unless
//!   [`MissingKey::Fail`] is chosen, in which case
//!   [`DotError::KeyNotFound`] carries the full key that was requested.
//!
//! # Quick Start
//!
//! ```
//! use tirea_dot::{Dot, MissingKey};
//! use serde_json::json;
//!
//! let dot = Dot::new();
//! let mut doc = json!({"user": {"name": "Alice"}});
//!
//! dot.set(&mut doc, "user.roles", json!(["admin"]));
//! dot.append(&mut doc, "user.roles", json!("ops")).unwrap();
//! dot.delete(&mut doc, "user.name").unwrap();
//!
//! assert_eq!(doc, json!({"user": {"roles": ["admin", "ops"]}}));
//! assert_eq!(dot.get(&doc, "user.name", json!("anonymous")).unwrap(), json!("anonymous"));
//! assert!(dot.strict().get(&doc, "user.name", json!(null)).is_err());
//! ```
//!
//! # Free functions
//!
//! The same operations are available as functions that take the delimiter
//! and policies on every call:
//!
//! ```
//! use tirea_dot::{count, flatten, MissingKey, NonArrayCount};
//! use serde_json::{json, Value};
//!
//! let doc = json!({"a": [1, 2, 3], "b": "x"});
//! assert_eq!(count(&doc, "a", ".", NonArrayCount::Zero, MissingKey::ReturnDefault).unwrap(), 3);
//! assert_eq!(count(&doc, "b", ".", NonArrayCount::NegativeOne, MissingKey::ReturnDefault).unwrap(), -1);
//!
//! let flat = flatten(&doc, "/", "").unwrap();
//! assert_eq!(Value::Object(flat), json!({"a/0": 1, "a/1": 2, "a/2": 3, "b": "x"}));
//! ```

mod delimiter;
mod dot;
mod error;
mod flatten;
mod functions;
mod path;
mod policy;
mod read;
mod write;

pub use delimiter::{validate_delimiter, Delimiter, DEFAULT_DELIMITER};
pub use dot::Dot;
pub use error::{value_type_name, DotError, DotResult};
pub use functions::{append, count, delete, expand, flatten, get, has, lookup, set};
pub use path::{join, parse_index, split, DotPath};
pub use policy::{DotConfig, MissingKey, NonArrayCount};

// Re-export serde_json types for convenience
pub use serde_json::{Map, Value};
