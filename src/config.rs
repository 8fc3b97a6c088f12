//! Configuration for the touch trace annotator.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key names and output formatting used during annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Top-level key holding the touch event array
    pub touch_data_key: String,

    /// Per-event key holding the absolute timestamp
    pub time_key: String,

    /// Per-event key written with the computed delta
    pub delta_key: String,

    /// Number of spaces per nesting level in the output
    pub indent: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            touch_data_key: "touchData".to_string(),
            time_key: "timeSinceStart".to_string(),
            delta_key: "timeDelta".to_string(),
            indent: 4,
        }
    }
}

impl Config {
    /// Check that the configuration can produce a well-formed annotation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indent == 0 {
            return Err(ConfigError::ZeroIndent);
        }
        if self.time_key == self.delta_key {
            return Err(ConfigError::DeltaOverwritesTime(self.delta_key.clone()));
        }
        Ok(())
    }

    /// The indentation unit handed to the JSON formatter.
    pub fn indent_bytes(&self) -> Vec<u8> {
        vec![b' '; self.indent]
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Config error: indent must be at least 1")]
    ZeroIndent,
    #[error("Config error: delta key `{0}` would overwrite the time key")]
    DeltaOverwritesTime(String),
}
