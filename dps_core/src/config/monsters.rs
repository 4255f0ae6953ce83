//! Monster hitzone table loading

use super::ConfigError;
use crate::types::ElementType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Damage modifiers for one body part
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hitzone {
    /// Physical modifier in percent (45 = takes 45% of expected attack)
    pub physical: f64,
    /// Per-element modifier in percent; absent elements take nothing
    #[serde(default)]
    pub element: HashMap<ElementType, f64>,
}

impl Hitzone {
    /// Elemental modifier for a given element kind, 0 when unlisted
    pub fn element_percent(&self, kind: ElementType) -> f64 {
        self.element.get(&kind).copied().unwrap_or(0.0)
    }
}

/// Static monster record: named parts with hitzones
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Monster {
    pub parts: HashMap<String, Hitzone>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct MonstersConfig {
    monsters: HashMap<String, Monster>,
}

/// Load the monster table from a TOML file
pub fn load_monsters(path: &Path) -> Result<HashMap<String, Monster>, ConfigError> {
    let config: MonstersConfig = super::load_toml(path)?;
    Ok(config.monsters)
}

/// Parse the monster table from a TOML string
pub fn parse_monsters(content: &str) -> Result<HashMap<String, Monster>, ConfigError> {
    let config: MonstersConfig = super::parse_toml(content)?;
    Ok(config.monsters)
}

/// Built-in monster table
pub fn default_monsters() -> HashMap<String, Monster> {
    let toml = include_str!("../../config/monsters.toml");
    parse_monsters(toml).unwrap_or_default()
}
