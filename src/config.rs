//! Tunable rule configuration.
//!
//! The engine encodes exactly one game; the only knobs are the pass-back cap
//! and the penalty-pile win condition. Defaults match the published rules and
//! can be overridden through environment variables, mainly for test setups.

use std::env;

use thiserror::Error;

use crate::domain::rules::{DEFAULT_MAX_PASSES, DEFAULT_WIN_CONDITION};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {message}")]
    Invalid { message: String },
}

/// Rule knobs consumed by the response resolver and win evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulesConfig {
    /// Pass-backs allowed per round before the responder must commit.
    pub max_passes: u8,
    /// Penalty-pile size that loses the game.
    pub win_condition: u8,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_passes: DEFAULT_MAX_PASSES,
            win_condition: DEFAULT_WIN_CONDITION,
        }
    }
}

impl RulesConfig {
    /// Build a config from the environment, falling back to defaults.
    ///
    /// * `VERMIN_MAX_PASSES` — pass-back cap (must be >= 1)
    /// * `VERMIN_WIN_CONDITION` — losing pile size (must be >= 1)
    pub fn from_env() -> Result<Self, ConfigError> {
        let max_passes = parse_var("VERMIN_MAX_PASSES", DEFAULT_MAX_PASSES)?;
        let win_condition = parse_var("VERMIN_WIN_CONDITION", DEFAULT_WIN_CONDITION)?;
        if max_passes == 0 {
            return Err(ConfigError::Invalid {
                message: "VERMIN_MAX_PASSES must be >= 1".to_string(),
            });
        }
        if win_condition == 0 {
            return Err(ConfigError::Invalid {
                message: "VERMIN_WIN_CONDITION must be >= 1".to_string(),
            });
        }
        Ok(Self {
            max_passes,
            win_condition,
        })
    }
}

fn parse_var(name: &str, default: u8) -> Result<u8, ConfigError> {
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(raw) => raw.parse::<u8>().map_err(|_| ConfigError::Invalid {
            message: format!("{name} must be an integer 0..=255, got '{raw}'"),
        }),
    }
}
