//! `DiaperConfig`: the loader's settings and the load entry point.
//!
//! Responsibilities:
//! - Hold the provider chain, default env file name, and back-fill/override flags.
//! - Run the full pipeline: select file, parse, merge environment, resolve, back-fill.
//!
//! Does NOT handle:
//! - File selection and parsing details (delegated to file.rs).
//! - Individual provider semantics (see `crate::provider`).
//!
//! Invariants / Assumptions:
//! - A fresh `ConfigMap` is built on every call; nothing is cached across calls.
//! - Override, provider resolution, and back-fill only touch the environment
//!   through the supplied `EnvSource`; `${VAR}` expansion during parsing reads
//!   the process environment.
//! - Back-fill writes a key only when the environment does not already hold the
//!   identical string.

use std::collections::HashMap;
use std::path::Path;

use super::file::{parse_env_file, resolve_env_file};
use crate::constants::DEFAULT_ENV_FILE;
use crate::env::{EnvSource, ProcessEnv};
use crate::error::ConfigError;
use crate::map::ConfigMap;
use crate::provider::Providers;
use crate::value::ConfigValue;

/// Settings for loading an environment's configuration.
#[derive(Debug)]
pub struct DiaperConfig {
    /// Chain applied to every value after parsing.
    pub providers: Providers,
    /// File used when `<env>.env` does not exist. `None` or empty means `.env`.
    pub default_env_file: Option<String>,
    /// Write resolved values into the environment when they differ.
    pub set_missing_env: bool,
    /// Let environment variables named like a file key replace the file value.
    pub env_override: bool,
}

impl Default for DiaperConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DiaperConfig {
    /// Create a loader with the environment provider, `.env` default file,
    /// env override enabled, and back-fill disabled.
    pub fn new() -> Self {
        Self {
            providers: Providers::env_only(),
            default_env_file: None,
            set_missing_env: false,
            env_override: true,
        }
    }

    /// Replace the provider chain.
    pub fn with_providers(mut self, providers: Providers) -> Self {
        self.providers = providers;
        self
    }

    /// Set the fallback env file name (relative to the load directory).
    pub fn with_default_env_file(mut self, name: impl Into<String>) -> Self {
        self.default_env_file = Some(name.into());
        self
    }

    /// Enable or disable back-filling the environment with resolved values.
    pub fn with_set_missing_env(mut self, enabled: bool) -> Self {
        self.set_missing_env = enabled;
        self
    }

    /// Enable or disable environment variables overriding file values.
    pub fn with_env_override(mut self, enabled: bool) -> Self {
        self.env_override = enabled;
        self
    }

    /// Effective default env file name.
    pub fn default_env_file(&self) -> &str {
        match self.default_env_file.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_ENV_FILE,
        }
    }

    /// Load configuration for `env_name` from `dir` against the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The default file's absolute path cannot be built (`ConfigError::PathResolution`)
    /// - The selected file cannot be read (`ConfigError::EnvFileRead`)
    /// - The selected file has invalid syntax (`ConfigError::EnvFileParse`)
    ///
    /// A missing `<env>.env` override is not an error; the default file is used.
    pub fn read_from_file(&self, env_name: &str, dir: &Path) -> Result<ConfigMap, ConfigError> {
        self.read_from_file_with(env_name, dir, &ProcessEnv)
    }

    /// Same as [`DiaperConfig::read_from_file`], reading and writing `env` instead
    /// of the process environment.
    ///
    /// Environment override looks up each file key uppercased (`port` -> `PORT`).
    /// Back-fill writes one variable per key, using the spelling of the key's
    /// last occurrence in the file.
    ///
    /// `${VAR}` expansion inside the env file is done by `dotenvy` while parsing
    /// and always reads the process environment, not `env`. Only the override,
    /// provider, and back-fill steps go through `env`.
    pub fn read_from_file_with(
        &self,
        env_name: &str,
        dir: &Path,
        env: &dyn EnvSource,
    ) -> Result<ConfigMap, ConfigError> {
        let path = resolve_env_file(env_name, dir, self.default_env_file())?;
        tracing::debug!(env = %env_name, path = %path.display(), "Reading env file");

        let pairs = parse_env_file(&path)?;
        let mut config = ConfigMap::new();
        // Lowercase key -> spelling of its last occurrence in the file.
        let mut spellings: HashMap<String, String> = HashMap::new();

        for (key, raw) in pairs {
            let raw = match env.var(&key.to_uppercase()) {
                Some(from_env) if self.env_override => from_env,
                _ => raw,
            };

            let resolved = self.providers.deref(ConfigValue::String(raw), env);
            config.insert(&key, resolved);
            spellings.insert(key.to_lowercase(), key);
        }

        if self.set_missing_env {
            for (normalized, spelling) in &spellings {
                if let Some(resolved) = config.get(normalized) {
                    backfill(env, spelling, resolved);
                }
            }
        }

        tracing::info!(
            env = %env_name,
            path = %path.display(),
            keys = config.len(),
            "Loaded configuration"
        );

        Ok(config)
    }
}

/// Set `key` in `env` unless it already holds the resolved string form.
fn backfill(env: &dyn EnvSource, key: &str, resolved: &ConfigValue) {
    let value = resolved.to_string();
    if env.var(key).as_deref() != Some(value.as_str()) {
        tracing::debug!(key, "Back-filling environment");
        env.set_var(key, &value);
    }
}
