//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define the closed set of failures the loader, providers, and accessors report.
//! - Convert lower-level dotenv and YAML failures into those variants.
//!
//! Does NOT handle:
//! - Deciding whether a failure terminates the process (the caller owns that).
//!
//! Invariants:
//! - All error variants include context for debugging (keys, paths, positions).
//! - Env file errors NEVER include raw line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving, reading, or querying configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to build absolute path for {path}: {source}")]
    PathResolution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read the resolved env file.
    #[error("Failed to read env file at {path}: {kind}")]
    EnvFileRead { path: PathBuf, kind: ErrorKind },

    /// The env file has invalid syntax.
    ///
    /// SAFETY: Only the byte index of the failure is kept, NOT the offending
    /// line, so secrets stored in the file never end up in logs.
    #[error("Failed to parse env file at {path} (position {error_index})")]
    EnvFileParse { path: PathBuf, error_index: usize },

    /// Unknown dotenv error (future variants from the dotenvy crate).
    #[error("Failed to load env file at {path}")]
    EnvFileUnknown { path: PathBuf },

    #[error("Failed to decode provider declaration: {message}")]
    ProviderDecode { message: String },

    #[error("Failed to open provider declaration at {path}: {source}")]
    ProviderFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to fetch parameters under {path}: {message}")]
    ParameterFetch { path: String, message: String },

    #[error("Configuration key not found: {0}")]
    MissingKey(String),

    #[error("Value for {key} cannot be coerced to {expected}")]
    TypeMismatch { key: String, expected: &'static str },
}

impl ConfigError {
    /// Map a dotenvy failure for `path` into a secret-safe error.
    pub(crate) fn from_dotenv(path: PathBuf, err: dotenvy::Error) -> Self {
        match err {
            dotenvy::Error::LineParse(_, error_index) => {
                ConfigError::EnvFileParse { path, error_index }
            }
            dotenvy::Error::Io(io_err) => ConfigError::EnvFileRead {
                path,
                kind: io_err.kind(),
            },
            _ => ConfigError::EnvFileUnknown { path },
        }
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(error: serde_yaml::Error) -> Self {
        ConfigError::ProviderDecode {
            message: error.to_string(),
        }
    }
}
