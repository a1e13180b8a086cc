//! Configuration loader for per-environment env files.
//!
//! Responsibilities:
//! - Pick the env file for a logical environment (`<env>.env`, else the default file).
//! - Parse it into a `ConfigMap` and run every value through the provider chain.
//! - Optionally back-fill the environment with resolved values.
//!
//! Does NOT handle:
//! - Building provider chains from declarations (see `crate::provider`).
//! - Typed access to resolved values (see `crate::map`).
//!
//! Invariants / Assumptions:
//! - A missing override file is an expected fallback, never an error.
//! - Environment variables named like a file key take precedence over the file value
//!   when env override is enabled.
//! - Env file errors never carry raw line contents.

mod builder;
mod file;

pub use builder::DiaperConfig;
pub use file::{parse_env_file, resolve_env_file};

#[cfg(test)]
mod tests;
