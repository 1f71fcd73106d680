//! Session configuration
//!
//! Every field has a default matching the classic game, so an empty JSON
//! object is a valid configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{BOARD_HEIGHT, GRAVITY_INTERVAL_MS, MIN_OBJECTIVES, OBJECTIVE_ROWS};

/// What happens when a hold swap places a piece where it does not fit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HoldPolicy {
    /// Swap without checking; a collision surfaces at the next spawn check.
    #[default]
    Deferred,
    /// Check immediately and end the game if the swapped-in piece collides.
    Strict,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    /// Seed for layout, queue, and bomb placement
    pub seed: u64,
    /// Milliseconds between gravity ticks
    pub gravity_interval_ms: u32,
    /// Depth of the objective band at the bottom of the board
    pub objective_rows: u8,
    /// Minimum objective blocks per session
    pub min_objectives: u8,
    /// Arm bombs and explode bomb rows on clear
    pub bombs_enabled: bool,
    pub hold_policy: HoldPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            gravity_interval_ms: GRAVITY_INTERVAL_MS,
            objective_rows: OBJECTIVE_ROWS,
            min_objectives: MIN_OBJECTIVES,
            bombs_enabled: false,
            hold_policy: HoldPolicy::Deferred,
        }
    }
}

impl GameConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// First board row of the objective band
    pub fn start_row(&self) -> u8 {
        BOARD_HEIGHT - self.objective_rows
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // Cluster centers need rows in [start_row + 1, height - 2], and the
        // two spawn rows must stay outside the band.
        if self.objective_rows < 3 || self.objective_rows > BOARD_HEIGHT - 2 {
            return Err(ConfigError::Invalid {
                field: "objectiveRows",
                reason: format!(
                    "must be between 3 and {}, got {}",
                    BOARD_HEIGHT - 2,
                    self.objective_rows
                ),
            });
        }
        if self.gravity_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "gravityIntervalMs",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
