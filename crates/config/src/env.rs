//! Environment variable access for value resolution and back-fill.
//!
//! Responsibilities:
//! - Define the `EnvSource` seam that providers and the loader read and write through.
//! - Provide the real process environment (`ProcessEnv`) and an isolated
//!   in-memory environment (`MemoryEnv`).
//!
//! Does NOT handle:
//! - Deciding when to back-fill (see `loader`).
//! - Prefix detection for indirect values (see `provider`).
//!
//! Invariants / Assumptions:
//! - `ProcessEnv` mutates global state; callers must not load configuration
//!   while other threads read or write the same variables.
//! - `MemoryEnv` never touches the process environment.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A readable and writable set of environment variables.
pub trait EnvSource: Send + Sync {
    /// Current value of `key`, or `None` if unset or not valid unicode.
    fn var(&self, key: &str) -> Option<String>;

    /// Set `key` to `value`.
    fn set_var(&self, key: &str, value: &str);
}

/// The real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn set_var(&self, key: &str, value: &str) {
        // SAFETY: configuration loading is synchronous and expected to run
        // before other threads touch the environment.
        unsafe {
            std::env::set_var(key, value);
        }
    }
}

/// An in-memory environment isolated from the process.
#[derive(Debug, Default)]
pub struct MemoryEnv {
    vars: Mutex<HashMap<String, String>>,
}

impl MemoryEnv {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every variable currently set.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.vars.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: Mutex::new(
                iter.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl EnvSource for MemoryEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn set_var(&self, key: &str, value: &str) {
        self.lock().insert(key.to_string(), value.to_string());
    }
}
