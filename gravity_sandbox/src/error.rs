//! Error types for the simulation core and its configuration

use crate::math::Scalar;
use thiserror::Error;

/// Raised when a body cannot enter the registry
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidBodyError {
    #[error("body density must be positive, got {0}")]
    NonPositiveDensity(Scalar),

    #[error("body radius must be positive, got {0}")]
    NonPositiveRadius(Scalar),

    #[error("body position and velocity must be finite")]
    NonFiniteState,
}

/// Failure while loading or validating a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}
