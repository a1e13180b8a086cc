//! Resolved configuration map and its typed accessors.
//!
//! Responsibilities:
//! - Hold resolved values keyed case-insensitively.
//! - Coerce values to strings and integers on read.
//!
//! Does NOT handle:
//! - Reading files or resolving indirect values (see `loader` and `provider`).
//!
//! Invariants:
//! - Keys are stored lowercase; every lookup lowercases its argument.
//! - Callers cannot mutate a map once built; only the loader rewrites values
//!   during its resolution pass.
//! - `get_string` never converts numbers to strings.
//! - `get_int` accepts native integers and base-10 strings only.

use serde::Serialize;
use std::collections::HashMap;
use std::collections::hash_map;

use crate::error::ConfigError;
use crate::value::ConfigValue;

/// A typed mapping from configuration key to decoded value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConfigMap {
    values: HashMap<String, ConfigValue>,
}

impl ConfigMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw lookup without coercion.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.values.get(&normalize_key(key))
    }

    /// Lookup a value that is already a string.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ConfigValue::as_str)
    }

    /// Lookup a native integer, or a string that parses as a base-10 integer.
    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            ConfigValue::Int(i) => Some(*i),
            ConfigValue::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Like [`ConfigMap::get`], but a missing key is an error.
    pub fn must_get(&self, key: &str) -> Result<&ConfigValue, ConfigError> {
        self.get(key)
            .ok_or_else(|| ConfigError::MissingKey(key.to_string()))
    }

    /// Like [`ConfigMap::get_int`], but a missing key or failed coercion is an error.
    pub fn must_get_int(&self, key: &str) -> Result<i64, ConfigError> {
        let value = self.must_get(key)?;
        self.get_int(key).ok_or_else(|| {
            tracing::debug!(key, found = value.type_name(), "int coercion failed");
            ConfigError::TypeMismatch {
                key: key.to_string(),
                expected: "int",
            }
        })
    }

    /// String form of the value for `key`.
    ///
    /// Unlike its siblings this does not fail on a type mismatch: a present
    /// non-string value is formatted with its `Display` form. Only a missing
    /// key is an error.
    pub fn must_get_string(&self, key: &str) -> Result<String, ConfigError> {
        let value = self.must_get(key)?;
        Ok(match value.as_str() {
            Some(s) => s.to_string(),
            None => value.to_string(),
        })
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(&normalize_key(key))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Keys in arbitrary order (lowercase).
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, ConfigValue> {
        self.values.iter()
    }

    /// Rewrite a single value in place. Used by the loader's resolution pass.
    pub(crate) fn insert(&mut self, key: &str, value: ConfigValue) {
        self.values.insert(normalize_key(key), value);
    }
}

fn normalize_key(key: &str) -> String {
    key.to_lowercase()
}

impl<K, V> FromIterator<(K, V)> for ConfigMap
where
    K: AsRef<str>,
    V: Into<ConfigValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (normalize_key(k.as_ref()), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for ConfigMap {
    type Item = (String, ConfigValue);
    type IntoIter = hash_map::IntoIter<String, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConfigMap {
    type Item = (&'a String, &'a ConfigValue);
    type IntoIter = hash_map::Iter<'a, String, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
