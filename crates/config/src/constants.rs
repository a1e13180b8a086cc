//! Centralized constants for the diaper configuration crate.
//!
//! File naming and provider markers live here so the loader, the providers,
//! and the CLI agree on the same literals.

// =============================================================================
// Env File Naming
// =============================================================================

/// Default env file name used when no override file matches the environment.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Extension appended to the environment name to form the override file name
/// (`test` -> `test.env`).
pub const ENV_FILE_EXTENSION: &str = "env";

// =============================================================================
// Provider Markers
// =============================================================================

/// Values starting with this prefix are dereferenced from the environment.
pub const ENV_PROVIDER_PREFIX: &str = "env://";

/// Values starting with this prefix are dereferenced from a parameter store.
pub const PARAMETER_STORE_PROVIDER_PREFIX: &str = "ssm://";

/// Identifier for the environment provider in a provider declaration.
pub const ENV_PROVIDER_ID: &str = "env";

/// Top-level key of a provider declaration document.
pub const PROVIDER_DECLARATION_KEY: &str = "provider";
