//! Config Module
//!
//! Tuning constants for movement, jumping, knockback and the world, plus
//! loading them from JSON.

pub mod sim_config;

pub use sim_config::{
    BoundaryPolicy, JumpConfig, KnockbackConfig, MovementConfig, SimConfig, WorldConfig,
};

/// Errors raised while loading or validating a [`SimConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: &'static str) -> Self {
        ConfigError::Invalid { field, reason }
    }
}
