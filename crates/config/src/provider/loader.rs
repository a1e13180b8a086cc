//! Building a provider chain from a YAML declaration.
//!
//! The declaration is a document whose `provider` key lists provider
//! identifiers in chain order:
//!
//! ```yaml
//! provider:
//!   - env
//! ```

use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::{EnvProvider, NoopProvider, Providers, ValueProvider};
use crate::constants::ENV_PROVIDER_ID;
use crate::error::ConfigError;

/// Declarative list of provider identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProviderDeclaration {
    #[serde(rename = "provider", default)]
    pub providers: Vec<String>,
}

impl ProviderDeclaration {
    /// Map each identifier to its provider and append the terminal no-op.
    ///
    /// Identifiers are matched case-insensitively; unknown ones become no-ops.
    pub fn into_providers(self) -> Providers {
        Providers::build(self.providers.iter().map(|id| provider_for(id)))
    }
}

fn provider_for(id: &str) -> Box<dyn ValueProvider> {
    match id.to_lowercase().as_str() {
        ENV_PROVIDER_ID => Box::new(EnvProvider),
        _ => {
            tracing::warn!(provider = %id, "Unknown provider, using no-op");
            Box::new(NoopProvider)
        }
    }
}

/// Decode a provider declaration from `reader` and build its chain.
pub fn load_providers<R: Read>(reader: R) -> Result<Providers, ConfigError> {
    let declaration: ProviderDeclaration = serde_yaml::from_reader(reader)?;
    let providers = declaration.into_providers();

    tracing::debug!(kinds = ?providers.kinds(), "Loaded provider chain");
    Ok(providers)
}

/// Open `path` and decode its provider declaration.
pub fn load_providers_from_path(path: &Path) -> Result<Providers, ConfigError> {
    let file = File::open(path).map_err(|source| ConfigError::ProviderFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    load_providers(file)
}
