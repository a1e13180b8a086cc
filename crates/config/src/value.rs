//! Decoded configuration values.

use serde::Serialize;
use std::fmt;

/// A single decoded configuration value.
///
/// Env files only ever produce `String`; the other variants exist for
/// providers that resolve to typed values and for maps built in code.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl ConfigValue {
    /// Borrow the inner string, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Name of the variant, used in type mismatch errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            ConfigValue::String(_) => "string",
            ConfigValue::Int(_) => "int",
            ConfigValue::Float(_) => "float",
            ConfigValue::Bool(_) => "bool",
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::String(s) => f.write_str(s),
            ConfigValue::Int(i) => write!(f, "{}", i),
            ConfigValue::Float(v) => write!(f, "{}", v),
            ConfigValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::String(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Int(value)
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        ConfigValue::Int(i64::from(value))
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        ConfigValue::Float(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_generic_string_form() {
        assert_eq!(ConfigValue::from("db_url").to_string(), "db_url");
        assert_eq!(ConfigValue::from(9090).to_string(), "9090");
        assert_eq!(ConfigValue::from(true).to_string(), "true");
        assert_eq!(ConfigValue::from(1.5).to_string(), "1.5");
    }

    #[test]
    fn test_serializes_as_bare_scalar() {
        let json = serde_json::to_string(&vec![
            ConfigValue::from("x"),
            ConfigValue::from(1),
            ConfigValue::from(false),
        ])
        .unwrap();

        assert_eq!(json, r#"["x",1,false]"#);
    }
}
