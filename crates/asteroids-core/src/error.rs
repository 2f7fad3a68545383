//! Error types shared by the simulation crates.

use thiserror::Error;

/// Errors raised while constructing simulation state.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// Collision radius must be finite and strictly positive.
    #[error("collision radius must be positive, got {0}")]
    InvalidRadius(f64),

    /// A configuration value is outside its valid range.
    #[error("invalid config value for `{field}`: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
}

/// Errors raised while loading a [`crate::config::GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] SimError),
}
