//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test env file selection (override vs default).
//! - Test provider resolution and environment override precedence.
//! - Test environment back-fill.
//!
//! Invariants:
//! - Tests that touch the process environment use `serial_test`.
//! - Everything else runs against an isolated `MemoryEnv`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::fs;
use tempfile::TempDir;

pub mod selection_tests;

/// A directory with `app.env` (default) and `test.env` (override), like a
/// typical service checkout.
pub fn fixture_dir() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("app.env"),
        "PORT=8080\nDATABASE_URL=env://DATABASE_NAME\nAUTHZ_DOMAIN=localhost\n",
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("test.env"),
        "PORT=9090\nDATABASE_URL=env://DATABASE_NAME\nAUTHZ_CLIENT_ID=env://AUTHZ_CLIENT_ID\n",
    )
    .unwrap();
    temp_dir
}
