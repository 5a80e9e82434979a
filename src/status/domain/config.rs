//! Limits applied by status edit sessions.

use serde::Deserialize;
use thiserror::Error;

/// Configuration for staged status editing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatusEditConfig {
    /// Maximum status name length in characters.
    pub max_name_length: usize,
    /// Maximum number of live (non-deleted) statuses on a board.
    pub max_statuses: usize,
}

impl Default for StatusEditConfig {
    fn default() -> Self {
        Self {
            max_name_length: 48,
            max_statuses: 16,
        }
    }
}

impl StatusEditConfig {
    /// Creates a lenient configuration with generous limits.
    ///
    /// Useful for imports where existing boards may exceed the defaults.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            max_name_length: 256,
            max_statuses: 128,
        }
    }

    /// Creates a strict configuration with reduced limits.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_name_length: 24,
            max_statuses: 8,
        }
    }

    /// Parses a configuration from JSON, filling omitted fields with
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`StatusEditConfigError`] when the document is malformed,
    /// names an unknown field, or sets a zero limit.
    pub fn from_json_str(json: &str) -> Result<Self, StatusEditConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if config.max_name_length == 0 {
            return Err(StatusEditConfigError::ZeroLimit("max_name_length"));
        }
        if config.max_statuses == 0 {
            return Err(StatusEditConfigError::ZeroLimit("max_statuses"));
        }
        Ok(config)
    }
}

/// Errors returned while loading a [`StatusEditConfig`].
#[derive(Debug, Error)]
pub enum StatusEditConfigError {
    /// The JSON document could not be decoded.
    #[error("invalid status edit configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A limit was set to zero.
    #[error("configuration field '{0}' must be greater than zero")]
    ZeroLimit(&'static str),
}
