//! Shared test utilities for diaper integration tests.
//!
//! Invariants / Assumptions:
//! - Commands are hermetic: variables the fixtures reference are cleared
//!   unless a test sets them explicitly.

use assert_cmd::Command;
use std::path::PathBuf;

/// Returns a hermetic `diaper` command for integration testing.
pub fn diaper_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("diaper");

    cmd.env_remove("ENVIRONMENT")
        .env_remove("RUST_LOG")
        .env_remove("PORT")
        .env_remove("LOG_LEVEL")
        .env_remove("DATABASE_NAME")
        .env_remove("AWS_ACCESS_KEY_ID");

    cmd
}

/// The `demos/` directory at the workspace root.
pub fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demos")
}
