//! Weapon table loading

use super::ConfigError;
use crate::types::ElementType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// A weapon's element payload
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WeaponElement {
    #[serde(default)]
    pub kind: ElementType,
    #[serde(default)]
    pub value: f64,
}

/// Static weapon record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    /// Display attack value as shown in-game
    pub attack: f64,
    /// Base critical-hit rate in percent, signed
    #[serde(default)]
    pub affinity: f64,
    #[serde(default)]
    pub element: WeaponElement,
    /// Sharpness tier name; unknown names calculate as neutral
    #[serde(default = "default_sharpness")]
    pub sharpness: String,
    /// Hits before the sharpness pool is exhausted
    #[serde(default = "default_sharpness_hits")]
    pub sharpness_hits: u32,
}

fn default_sharpness() -> String {
    "white".to_string()
}
fn default_sharpness_hits() -> u32 {
    999
}

/// Container for the weapon table document
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WeaponsConfig {
    weapons: HashMap<String, Weapon>,
}

/// Load the weapon table from a TOML file
pub fn load_weapons(path: &Path) -> Result<HashMap<String, Weapon>, ConfigError> {
    let config: WeaponsConfig = super::load_toml(path)?;
    Ok(config.weapons)
}

/// Parse the weapon table from a TOML string
pub fn parse_weapons(content: &str) -> Result<HashMap<String, Weapon>, ConfigError> {
    let config: WeaponsConfig = super::parse_toml(content)?;
    Ok(config.weapons)
}

/// Built-in weapon table
pub fn default_weapons() -> HashMap<String, Weapon> {
    let toml = include_str!("../../config/weapons.toml");
    parse_weapons(toml).unwrap_or_default()
}
