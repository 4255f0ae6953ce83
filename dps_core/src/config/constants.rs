//! Tunable calculation constants

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Global calculation constants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalcConstants {
    /// Multiplier from display attack to true attack value
    #[serde(default = "default_weapon_coefficient")]
    pub weapon_coefficient: f64,
    /// Critical multiplier used when no skill overrides it
    #[serde(default = "default_base_crit_multiplier")]
    pub base_crit_multiplier: f64,
}

impl Default for CalcConstants {
    fn default() -> Self {
        CalcConstants {
            weapon_coefficient: 1.4,
            base_crit_multiplier: 1.25,
        }
    }
}

fn default_weapon_coefficient() -> f64 {
    1.4
}
fn default_base_crit_multiplier() -> f64 {
    1.25
}

/// Load constants from a TOML file
pub fn load_constants(path: &Path) -> Result<CalcConstants, ConfigError> {
    let constants: CalcConstants = super::load_toml(path)?;
    if constants.weapon_coefficient <= 0.0 {
        return Err(ConfigError::ValidationError(
            "weapon_coefficient must be positive".to_string(),
        ));
    }
    if constants.base_crit_multiplier < 1.0 {
        return Err(ConfigError::ValidationError(
            "base_crit_multiplier must be at least 1.0".to_string(),
        ));
    }
    Ok(constants)
}
