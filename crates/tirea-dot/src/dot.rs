//! Config-bound accessor.
//!
//! `Dot` carries a validated delimiter and the caller's policies, so its
//! methods only report errors the policies ask for.

use crate::flatten::{expand_from, flatten_into};
use crate::read::{count_path, get_path, on_missing, resolve};
use crate::write::{append_path, delete_path, set_path};
use crate::{Delimiter, DotConfig, DotError, DotPath, DotResult, MissingKey, NonArrayCount};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Dot-notation accessor over `serde_json::Value` trees.
///
/// # Examples
///
/// ```
/// use tirea_dot::Dot;
/// use serde_json::json;
///
/// let dot = Dot::new();
/// let mut config = json!({"server": {"ports": [80]}});
///
/// dot.set(&mut config, "server.host", json!("localhost"));
/// dot.append(&mut config, "server.ports", json!(443)).unwrap();
///
/// assert!(dot.has(&config, "server.host"));
/// assert_eq!(dot.count(&config, "server.ports").unwrap(), 2);
/// assert_eq!(dot.get(&config, "server.ports.1", json!(null)).unwrap(), json!(443));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dot {
    delimiter: Delimiter,
    on_missing: MissingKey,
    non_array_count: NonArrayCount,
}

impl Dot {
    /// Accessor with the `"."` delimiter and lenient policies.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accessor built from deserialized settings.
    pub fn from_config(config: DotConfig) -> Self {
        Self {
            delimiter: config.delimiter,
            on_missing: config.on_missing,
            non_array_count: config.non_array_count,
        }
    }

    /// Current settings.
    pub fn config(&self) -> DotConfig {
        DotConfig {
            delimiter: self.delimiter.clone(),
            on_missing: self.on_missing,
            non_array_count: self.non_array_count,
        }
    }

    /// Replace the delimiter.
    ///
    /// Fails with [`DotError::InvalidDelimiter`] for the empty string.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> DotResult<Self> {
        self.delimiter = Delimiter::new(delimiter)?;
        Ok(self)
    }

    /// Set the missing-key policy.
    #[inline]
    pub fn with_on_missing(mut self, on_missing: MissingKey) -> Self {
        self.on_missing = on_missing;
        self
    }

    /// Fail with [`DotError::KeyNotFound`] instead of falling back to defaults.
    #[inline]
    pub fn strict(self) -> Self {
        self.with_on_missing(MissingKey::Fail)
    }

    /// Set what [`count`](Self::count) reports for non-containers.
    #[inline]
    pub fn with_non_array_count(mut self, non_array_count: NonArrayCount) -> Self {
        self.non_array_count = non_array_count;
        self
    }

    /// The delimiter in use.
    #[inline]
    pub fn delimiter(&self) -> &Delimiter {
        &self.delimiter
    }

    /// The missing-key policy in use.
    #[inline]
    pub fn on_missing(&self) -> MissingKey {
        self.on_missing
    }

    /// The non-container count policy in use.
    #[inline]
    pub fn non_array_count(&self) -> NonArrayCount {
        self.non_array_count
    }

    /// Parse `key` with this accessor's delimiter.
    #[inline]
    pub fn path(&self, key: &str) -> DotPath {
        DotPath::parse(key, &self.delimiter)
    }

    /// Clone the value at `key`, or fall back to `default`.
    ///
    /// A key that runs through a scalar counts as missing.
    pub fn get(&self, tree: &Value, key: &str, default: Value) -> DotResult<Value> {
        get_path(tree, &self.path(key), default, self.on_missing)
    }

    /// [`get`](Self::get) with `null` as the default.
    pub fn get_or_null(&self, tree: &Value, key: &str) -> DotResult<Value> {
        self.get(tree, key, Value::Null)
    }

    /// Borrow the value at `key` without cloning. Ignores the missing-key policy.
    pub fn lookup<'a>(&self, tree: &'a Value, key: &str) -> Option<&'a Value> {
        resolve(tree, &self.path(key))
    }

    /// Decode the value at `key` into `T`.
    ///
    /// A missing key yields `Ok(None)` under the lenient policy.
    pub fn get_as<T: DeserializeOwned>(&self, tree: &Value, key: &str) -> DotResult<Option<T>> {
        let path = self.path(key);
        match resolve(tree, &path) {
            Some(found) => T::deserialize(found)
                .map(Some)
                .map_err(|e| DotError::decode(path.key(), e)),
            None => on_missing(&path, self.on_missing, None),
        }
    }

    /// Whether `key` resolves to a value, `null` included.
    pub fn has(&self, tree: &Value, key: &str) -> bool {
        self.lookup(tree, key).is_some()
    }

    /// Number of children of the container at `key`.
    pub fn count(&self, tree: &Value, key: &str) -> DotResult<i64> {
        count_path(tree, &self.path(key), self.non_array_count, self.on_missing)
    }

    /// Set `value` at `key`, creating intermediate objects.
    pub fn set(&self, tree: &mut Value, key: &str, value: Value) {
        set_path(tree, &self.path(key), value);
    }

    /// Append `value` at `key`, turning the existing value into an array.
    pub fn append(&self, tree: &mut Value, key: &str, value: Value) -> DotResult<()> {
        append_path(tree, &self.path(key), value, self.on_missing)
    }

    /// Remove the entry at `key`.
    pub fn delete(&self, tree: &mut Value, key: &str) -> DotResult<()> {
        delete_path(tree, &self.path(key), self.on_missing)
    }

    /// Flatten `tree` into `key -> leaf` pairs.
    pub fn flatten(&self, tree: &Value) -> Map<String, Value> {
        self.flatten_with_prefix(tree, "")
    }

    /// Flatten `tree`, prefixing every key with `prepend`.
    pub fn flatten_with_prefix(&self, tree: &Value, prepend: &str) -> Map<String, Value> {
        let mut out = Map::new();
        flatten_into(tree, &self.delimiter, prepend, &mut out);
        out
    }

    /// Rebuild a tree from flattened pairs.
    pub fn expand(&self, flat: &Map<String, Value>) -> Value {
        expand_from(flat, &self.delimiter)
    }
}

impl From<DotConfig> for Dot {
    fn from(config: DotConfig) -> Self {
        Self::from_config(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Server {
        host: String,
        port: u16,
    }

    #[test]
    fn test_builder() {
        let dot = Dot::new()
            .with_delimiter("/")
            .unwrap()
            .strict()
            .with_non_array_count(NonArrayCount::NegativeOne);
        assert_eq!(dot.delimiter().as_str(), "/");
        assert_eq!(dot.on_missing(), MissingKey::Fail);
        assert_eq!(dot.non_array_count(), NonArrayCount::NegativeOne);
        assert!(Dot::new().with_delimiter("").is_err());
    }

    #[test]
    fn test_config_round_trip() {
        let dot = Dot::new().with_delimiter("::").unwrap().strict();
        assert_eq!(Dot::from(dot.config()), dot);
    }

    #[test]
    fn test_get_as() {
        let doc = json!({"svc": {"api": {"host": "example.org", "port": 8080}}});
        let dot = Dot::new();

        let server: Option<Server> = dot.get_as(&doc, "svc.api").unwrap();
        assert_eq!(
            server,
            Some(Server {
                host: "example.org".into(),
                port: 8080
            })
        );

        let port: Option<u16> = dot.get_as(&doc, "svc.api.port").unwrap();
        assert_eq!(port, Some(8080));

        let missing: Option<u16> = dot.get_as(&doc, "svc.db.port").unwrap();
        assert_eq!(missing, None);
    }

    #[test]
    fn test_get_as_errors() {
        let doc = json!({"port": "not a number"});
        let err = Dot::new().get_as::<u16>(&doc, "port").unwrap_err();
        assert!(matches!(err, DotError::Decode { ref key, .. } if key == "port"));

        let err = Dot::new().strict().get_as::<u16>(&doc, "nope").unwrap_err();
        assert!(err.is_key_not_found());
    }

    #[test]
    fn test_has_counts_null_as_present() {
        let doc = json!({"a": null});
        assert!(Dot::new().has(&doc, "a"));
        assert!(!Dot::new().has(&doc, "a.b"));
    }

    #[test]
    fn test_flatten_expand_custom_delimiter() {
        let dot = Dot::new().with_delimiter("--").unwrap();
        let doc = json!({"a": {"b": 1}, "c": 2});
        let flat = dot.flatten(&doc);
        assert_eq!(Value::Object(flat.clone()), json!({"a--b": 1, "c": 2}));
        assert_eq!(dot.expand(&flat), doc);
    }
}
