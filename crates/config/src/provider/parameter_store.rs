//! Parameter-store dereferencing provider (`ssm://name`).
//!
//! Responsibilities:
//! - Fetch every parameter under a path prefix once, when the provider is built.
//! - Resolve `ssm://name` values from that cache.
//!
//! Does NOT handle:
//! - Talking to a real remote store; callers supply a `ParameterSource`.
//! - Refreshing the cache. Build a new provider to pick up changes.
//!
//! Invariants:
//! - `ParameterSource::fetch_by_path` is called exactly once per provider.
//! - Names are looked up relative to the prefix first, then as absolute paths.
//! - Unknown names resolve to the empty string, mirroring `env://`.

use std::collections::HashMap;

use super::{ProviderKind, ValueProvider};
use crate::constants::PARAMETER_STORE_PROVIDER_PREFIX;
use crate::env::EnvSource;
use crate::error::ConfigError;
use crate::value::ConfigValue;

/// A store that can list every parameter under a path.
pub trait ParameterSource {
    /// All `(full_path, value)` pairs whose path starts with `path`.
    fn fetch_by_path(&self, path: &str) -> Result<Vec<(String, String)>, ConfigError>;
}

/// In-memory parameter store.
#[derive(Debug, Default, Clone)]
pub struct StaticParameterSource {
    params: HashMap<String, String>,
}

impl StaticParameterSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter at `path`.
    pub fn with_parameter(mut self, path: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(path.into(), value.into());
        self
    }
}

impl ParameterSource for StaticParameterSource {
    fn fetch_by_path(&self, path: &str) -> Result<Vec<(String, String)>, ConfigError> {
        Ok(self
            .params
            .iter()
            .filter(|(name, _)| name.starts_with(path))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect())
    }
}

/// Replaces `ssm://name` strings with values fetched from a parameter store.
///
/// The cache lives as long as the provider. A `DiaperConfig` reused across
/// loads serves the same snapshot every time; build a fresh provider (and
/// chain) per load when parameters may change between loads.
#[derive(Debug, Clone)]
pub struct ParameterStoreProvider {
    path_prefix: String,
    fetched: HashMap<String, String>,
}

impl ParameterStoreProvider {
    /// Fetch all parameters under `path_prefix` from `source` and cache them.
    pub fn new(
        source: &dyn ParameterSource,
        path_prefix: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let path_prefix = path_prefix.into();
        let fetched: HashMap<String, String> =
            source.fetch_by_path(&path_prefix)?.into_iter().collect();

        tracing::debug!(
            prefix = %path_prefix,
            count = fetched.len(),
            "Fetched parameters"
        );

        Ok(Self {
            path_prefix,
            fetched,
        })
    }

    /// Cached value for `name`, relative to the prefix or as a full path.
    fn lookup(&self, name: &str) -> Option<&String> {
        let relative = join_path(&self.path_prefix, name);
        self.fetched
            .get(&relative)
            .or_else(|| self.fetched.get(name))
    }
}

fn join_path(prefix: &str, name: &str) -> String {
    format!(
        "{}/{}",
        prefix.trim_end_matches('/'),
        name.trim_start_matches('/')
    )
}

impl ValueProvider for ParameterStoreProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::ParameterStore
    }

    fn deref(&self, value: ConfigValue, _env: &dyn EnvSource) -> ConfigValue {
        let ConfigValue::String(raw) = &value else {
            return value;
        };

        let Some(name) = raw.strip_prefix(PARAMETER_STORE_PROVIDER_PREFIX) else {
            return value;
        };

        match self.lookup(name) {
            Some(found) => ConfigValue::String(found.clone()),
            None => {
                tracing::warn!(
                    prefix = %self.path_prefix,
                    name,
                    "Parameter not found, resolving to empty string"
                );
                ConfigValue::String(String::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MemoryEnv;
    use std::cell::Cell;

    /// Counts fetches so tests can assert on caching.
    struct CountingSource {
        inner: StaticParameterSource,
        calls: Cell<usize>,
    }

    impl ParameterSource for CountingSource {
        fn fetch_by_path(&self, path: &str) -> Result<Vec<(String, String)>, ConfigError> {
            self.calls.set(self.calls.get() + 1);
            self.inner.fetch_by_path(path)
        }
    }

    struct FailingSource;

    impl ParameterSource for FailingSource {
        fn fetch_by_path(&self, path: &str) -> Result<Vec<(String, String)>, ConfigError> {
            Err(ConfigError::ParameterFetch {
                path: path.to_string(),
                message: "access denied".to_string(),
            })
        }
    }

    fn source() -> StaticParameterSource {
        StaticParameterSource::new()
            .with_parameter("/app/prod/db_password", "s3cret")
            .with_parameter("/app/prod/api_key", "key-1")
            .with_parameter("/app/dev/db_password", "dev")
    }

    #[test]
    fn test_resolves_relative_and_absolute_names() {
        let provider = ParameterStoreProvider::new(&source(), "/app/prod").unwrap();
        let env = MemoryEnv::new();

        assert_eq!(
            provider.deref(ConfigValue::from("ssm://db_password"), &env),
            ConfigValue::from("s3cret")
        );
        assert_eq!(
            provider.deref(ConfigValue::from("ssm:///app/prod/api_key"), &env),
            ConfigValue::from("key-1")
        );
    }

    #[test]
    fn test_only_caches_parameters_under_prefix() {
        let provider = ParameterStoreProvider::new(&source(), "/app/prod/").unwrap();
        let env = MemoryEnv::new();

        assert_eq!(
            provider.deref(ConfigValue::from("ssm:///app/dev/db_password"), &env),
            ConfigValue::from("")
        );
    }

    #[test]
    fn test_passes_through_other_values() {
        let provider = ParameterStoreProvider::new(&source(), "/app/prod").unwrap();
        let env = MemoryEnv::new();

        for value in [ConfigValue::from("env://X"), ConfigValue::from(3), ConfigValue::from("plain")] {
            assert_eq!(provider.deref(value.clone(), &env), value);
        }
    }

    #[test]
    fn test_fetches_once_per_provider() {
        let counting = CountingSource {
            inner: source(),
            calls: Cell::new(0),
        };
        let provider = ParameterStoreProvider::new(&counting, "/app/prod").unwrap();
        let env = MemoryEnv::new();

        for _ in 0..3 {
            provider.deref(ConfigValue::from("ssm://db_password"), &env);
        }

        assert_eq!(counting.calls.get(), 1);
    }

    #[test]
    fn test_reused_provider_serves_snapshot_until_rebuilt() {
        let env = MemoryEnv::new();
        let first = StaticParameterSource::new().with_parameter("/app/key", "v1");
        let provider = ParameterStoreProvider::new(&first, "/app").unwrap();

        let second = first.with_parameter("/app/key", "v2");
        assert_eq!(
            provider.deref(ConfigValue::from("ssm://key"), &env),
            ConfigValue::from("v1")
        );

        let rebuilt = ParameterStoreProvider::new(&second, "/app").unwrap();
        assert_eq!(
            rebuilt.deref(ConfigValue::from("ssm://key"), &env),
            ConfigValue::from("v2")
        );
    }

    #[test]
    fn test_fetch_failure_is_returned() {
        let err = ParameterStoreProvider::new(&FailingSource, "/app").unwrap_err();

        assert!(matches!(err, ConfigError::ParameterFetch { .. }));
        assert!(err.to_string().contains("/app"));
    }
}
