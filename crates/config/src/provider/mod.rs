//! Value providers and the ordered provider chain.
//!
//! Responsibilities:
//! - Define the `ValueProvider` contract: take a value, return a possibly rewritten value.
//! - Compose providers into an ordered `Providers` chain that always ends in a no-op.
//!
//! Does NOT handle:
//! - Building a chain from a declaration document (see `loader.rs`).
//! - Applying the chain to a parsed env file (see `crate::loader`).
//!
//! Invariants:
//! - Providers never fail the chain; values they do not recognize pass through unchanged.
//! - Each provider's output is the next provider's input, left to right.
//! - A chain built through `Providers::build` ends with exactly one appended `NoopProvider`.

mod env;
mod loader;
mod parameter_store;

use std::fmt;

use crate::env::EnvSource;
use crate::value::ConfigValue;

pub use env::EnvProvider;
pub use loader::{ProviderDeclaration, load_providers, load_providers_from_path};
pub use parameter_store::{ParameterSource, ParameterStoreProvider, StaticParameterSource};

/// Which provider implementation sits at a given position in a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Env,
    Noop,
    ParameterStore,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::Env => write!(f, "env"),
            ProviderKind::Noop => write!(f, "noop"),
            ProviderKind::ParameterStore => write!(f, "parameter-store"),
        }
    }
}

/// A transformer applied to every configuration value.
pub trait ValueProvider: Send + Sync + fmt::Debug {
    fn kind(&self) -> ProviderKind;

    /// Resolve `value`, returning it unchanged if this provider does not apply.
    fn deref(&self, value: ConfigValue, env: &dyn EnvSource) -> ConfigValue;
}

/// Identity provider, appended last to every chain.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProvider;

impl ValueProvider for NoopProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Noop
    }

    fn deref(&self, value: ConfigValue, _env: &dyn EnvSource) -> ConfigValue {
        value
    }
}

/// An ordered chain of value providers.
#[derive(Debug, Default)]
pub struct Providers {
    chain: Vec<Box<dyn ValueProvider>>,
}

impl Providers {
    /// Build a chain from `providers`, appending the terminal no-op.
    pub fn build<I>(providers: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn ValueProvider>>,
    {
        let mut chain: Vec<Box<dyn ValueProvider>> = providers.into_iter().collect();
        chain.push(Box::new(NoopProvider));
        Self { chain }
    }

    /// The chain most callers want: environment dereferencing only.
    pub fn env_only() -> Self {
        Self::build([Box::new(EnvProvider) as Box<dyn ValueProvider>])
    }

    /// Run `value` through every provider in order.
    pub fn deref(&self, value: ConfigValue, env: &dyn EnvSource) -> ConfigValue {
        self.chain
            .iter()
            .fold(value, |value, provider| provider.deref(value, env))
    }

    /// Kinds of the providers in chain order.
    pub fn kinds(&self) -> Vec<ProviderKind> {
        self.chain.iter().map(|p| p.kind()).collect()
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}
