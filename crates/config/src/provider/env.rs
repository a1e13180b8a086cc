//! Environment-variable dereferencing provider (`env://KEY`).

use super::{ProviderKind, ValueProvider};
use crate::constants::ENV_PROVIDER_PREFIX;
use crate::env::EnvSource;
use crate::value::ConfigValue;

/// Replaces `env://KEY` strings with the current value of `KEY`.
///
/// An unset `KEY` resolves to the empty string. Non-string values and
/// strings without the prefix are returned as-is.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvProvider;

impl ValueProvider for EnvProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Env
    }

    fn deref(&self, value: ConfigValue, env: &dyn EnvSource) -> ConfigValue {
        let ConfigValue::String(raw) = &value else {
            return value;
        };

        match raw.strip_prefix(ENV_PROVIDER_PREFIX) {
            Some(key) => ConfigValue::String(env.var(key).unwrap_or_default()),
            None => value,
        }
    }
}
