//! Env file selection and parsing.
//!
//! Responsibilities:
//! - Compute the default and override file paths for an environment name.
//! - Parse an env file into ordered `(key, value)` pairs via `dotenvy`.
//!
//! Does NOT handle:
//! - Provider resolution or back-fill (see builder.rs).
//!
//! Invariants:
//! - The override path is `<dir>/<lowercase env>.env`.
//! - The override is chosen only when it exists as a regular file.
//! - Returned paths are absolute.

use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_ENV_FILE, ENV_FILE_EXTENSION};
use crate::error::ConfigError;

/// Resolve which env file to read for `env_name` inside `dir`.
///
/// `default_env_file` falls back to [`DEFAULT_ENV_FILE`] when empty.
/// Failing to build the default file's absolute path is the only error;
/// any problem with the override candidate silently selects the default.
pub fn resolve_env_file(
    env_name: &str,
    dir: &Path,
    default_env_file: &str,
) -> Result<PathBuf, ConfigError> {
    let default_env_file = if default_env_file.is_empty() {
        DEFAULT_ENV_FILE
    } else {
        default_env_file
    };

    let default_path = absolute(&dir.join(default_env_file))?;

    let override_name = format!("{}.{}", env_name.to_lowercase(), ENV_FILE_EXTENSION);
    let override_path = match absolute(&dir.join(&override_name)) {
        Ok(path) if path.is_file() => path,
        Ok(path) => {
            tracing::debug!(
                tried = %path.display(),
                fallback = %default_path.display(),
                "Override env file not found, using default"
            );
            return Ok(default_path);
        }
        Err(e) => {
            tracing::debug!(error = %e, "Override env file path invalid, using default");
            return Ok(default_path);
        }
    };

    Ok(override_path)
}

fn absolute(path: &Path) -> Result<PathBuf, ConfigError> {
    std::path::absolute(path).map_err(|source| ConfigError::PathResolution {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse the env file at `path` into `(key, value)` pairs in file order.
///
/// Keys keep their spelling from the file. Quoting and `${VAR}` substitution
/// follow `dotenvy`: substitution reads the process environment first, then
/// earlier lines of the same file. The process environment is not modified.
pub fn parse_env_file(path: &Path) -> Result<Vec<(String, String)>, ConfigError> {
    let iter = dotenvy::from_path_iter(path)
        .map_err(|e| ConfigError::from_dotenv(path.to_path_buf(), e))?;

    iter.map(|item| item.map_err(|e| ConfigError::from_dotenv(path.to_path_buf(), e)))
        .collect()
}
