//! Configuration system for Pitwall.
//! TOML-based, layered: overrides > env > project > user > defaults.

pub mod narrowing_config;
pub mod observability_config;
pub mod pitwall_config;
pub mod search_config;

pub use narrowing_config::NarrowingConfig;
pub use observability_config::ObservabilityConfig;
pub use pitwall_config::{ConfigOverrides, PitwallConfig};
pub use search_config::SearchConfig;

use crate::errors::ConfigError;

/// Shorthand for a `ValidationFailed` on `field`.
pub(crate) fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

pub(crate) fn require_positive(field: &str, value: usize) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(invalid(field, "must be greater than 0"));
    }
    Ok(())
}
