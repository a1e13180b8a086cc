//! Per-environment configuration loading with pluggable value providers.
//!
//! This crate reads a `KEY=value` env file chosen by environment name
//! (`<env>.env`, falling back to a default file), merges it with the
//! environment, and runs every value through an ordered provider chain
//! that can dereference indirections such as `env://DATABASE_NAME`.
//!
//! ```no_run
//! use std::path::Path;
//! use diaper_config::{DiaperConfig, load_providers_from_path};
//!
//! # fn main() -> Result<(), diaper_config::ConfigError> {
//! let providers = load_providers_from_path(Path::new("providers.yaml"))?;
//! let config = DiaperConfig::new()
//!     .with_providers(providers)
//!     .with_default_env_file("app.env")
//!     .read_from_file("test", Path::new("./config"))?;
//!
//! let port = config.must_get_int("port")?;
//! # let _ = port;
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod env;
mod error;
mod loader;
mod map;
pub mod provider;
mod value;

pub use env::{EnvSource, MemoryEnv, ProcessEnv};
pub use error::ConfigError;
pub use loader::{DiaperConfig, parse_env_file, resolve_env_file};
pub use map::ConfigMap;
pub use provider::{
    EnvProvider, NoopProvider, ParameterSource, ParameterStoreProvider, ProviderDeclaration,
    ProviderKind, Providers, StaticParameterSource, ValueProvider, load_providers,
    load_providers_from_path,
};
pub use value::ConfigValue;
