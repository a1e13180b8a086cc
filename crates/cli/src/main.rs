//! diaper - print the resolved configuration for an environment.
//!
//! Responsibilities:
//! - Parse command-line arguments and the `ENVIRONMENT` variable.
//! - Load and resolve configuration via `diaper_config`.
//! - Print the resolved map (or one key) as JSON on stdout.
//!
//! Does NOT handle:
//! - File selection, parsing, or value resolution (see `crates/config`).
//!
//! Invariants:
//! - Logs go to stderr so stdout stays machine-readable.
//! - Failures exit with a structured code (see `error.rs`).

mod args;
mod error;

use std::collections::BTreeMap;

use anyhow::Context;
use args::Cli;
use clap::Parser;
use diaper_config::ConfigMap;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let code = match run(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(code.as_i32());
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let loader = cli.loader()?;
    tracing::debug!(
        environment = %cli.environment,
        env_dir = %cli.env_dir.display(),
        providers = ?loader.providers.kinds(),
        "Loading configuration"
    );

    let config = loader
        .read_from_file(&cli.environment, &cli.env_dir)
        .with_context(|| {
            format!(
                "failed to load configuration for '{}' from {}",
                cli.environment,
                cli.env_dir.display()
            )
        })?;

    match &cli.get {
        Some(key) => Ok(serde_json::to_string(config.must_get(key)?)?),
        None => render(&config),
    }
}

/// Pretty JSON with keys sorted for stable output.
fn render(config: &ConfigMap) -> anyhow::Result<String> {
    let sorted: BTreeMap<_, _> = config.iter().collect();
    Ok(serde_json::to_string_pretty(&sorted)?)
}
