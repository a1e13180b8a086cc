//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ConfigError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).

use diaper_config::ConfigError;

/// Structured exit codes for diaper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - configuration loaded and printed.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Not found - env file, provider file, or requested key is missing.
    NotFound = 4,

    /// Validation error - malformed env file or provider declaration, or a
    /// path that cannot be resolved.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(error: &ConfigError) -> Self {
        match error {
            ConfigError::EnvFileRead { .. }
            | ConfigError::ProviderFileRead { .. }
            | ConfigError::MissingKey(_) => ExitCode::NotFound,
            ConfigError::PathResolution { .. }
            | ConfigError::EnvFileParse { .. }
            | ConfigError::EnvFileUnknown { .. }
            | ConfigError::ProviderDecode { .. }
            | ConfigError::TypeMismatch { .. } => ExitCode::ValidationError,
            ConfigError::ParameterFetch { .. } => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for extracting exit codes from errors.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no ConfigError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ConfigError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
