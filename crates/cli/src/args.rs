//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Translate arguments into a `DiaperConfig`.
//!
//! Non-responsibilities:
//! - Does not read env files or resolve values (see `diaper_config`).

use anyhow::Context;
use clap::Parser;
use diaper_config::constants::DEFAULT_ENV_FILE;
use diaper_config::{DiaperConfig, Providers, load_providers_from_path};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "diaper")]
#[command(about = "Load per-environment .env configuration and print the resolved values", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  diaper -e ./demos --default-env-file app.env\n  ENVIRONMENT=test diaper -p ./demos/providers.yaml -e ./demos --default-env-file app.env\n  diaper -e ./demos --default-env-file app.env --get port\n"
)]
pub struct Cli {
    /// Provider declaration file (YAML with a `provider` list).
    ///
    /// Without it only `env://` indirections are resolved.
    #[arg(short, long, value_name = "FILE")]
    pub providers: Option<PathBuf>,

    /// Directory containing the env files
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub env_dir: PathBuf,

    /// Logical environment name; selects `<name>.env` when present
    #[arg(long, env = "ENVIRONMENT", default_value = "dev")]
    pub environment: String,

    /// Env file used when no `<environment>.env` exists
    #[arg(long, value_name = "FILE", default_value = DEFAULT_ENV_FILE)]
    pub default_env_file: String,

    /// Write resolved values back into the process environment
    #[arg(long)]
    pub set_missing_env: bool,

    /// Ignore environment variables that share a name with a file key
    #[arg(long)]
    pub no_env_override: bool,

    /// Print only the value of this key instead of the whole map
    #[arg(long, value_name = "KEY")]
    pub get: Option<String>,
}

impl Cli {
    /// Build the loader described by these arguments.
    pub fn loader(&self) -> anyhow::Result<DiaperConfig> {
        let providers = match &self.providers {
            Some(path) => load_providers_from_path(path)
                .with_context(|| format!("failed to load providers from {}", path.display()))?,
            None => Providers::env_only(),
        };

        Ok(DiaperConfig::new()
            .with_providers(providers)
            .with_default_env_file(self.default_env_file.clone())
            .with_set_missing_env(self.set_missing_env)
            .with_env_override(!self.no_env_override))
    }
}
