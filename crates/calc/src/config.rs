use serde::{Deserialize, Serialize};

use crate::Operation;

/// The list of calls the demo evaluates, in order.
///
/// Serialized as TOML with one `[[call]]` table per call:
///
/// ```toml
/// [[call]]
/// op = "+"
/// a = 3
/// b = 2
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "call", default)]
    pub calls: Vec<Call>,
}

/// A single binary operation with fixed operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Call {
    pub op: Operation,
    pub a: i32,
    pub b: i32,
}

impl Call {
    pub const fn new(op: Operation, a: i32, b: i32) -> Self {
        Self { op, a, b }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            calls: vec![
                Call::new(Operation::Add, 3, 2),
                Call::new(Operation::Subtract, 5, 2),
                Call::new(Operation::Multiply, 4, 6),
                Call::new(Operation::Divide, 10, 2),
            ],
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Generate the default configuration as TOML text
    pub fn default_toml() -> String {
        toml::to_string_pretty(&Self::default()).unwrap_or_default()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}
