//! Combo table loading

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Fixed ordered sequence of moves with a total execution time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Combo {
    pub moves: Vec<String>,
    /// Total execution time in seconds
    pub time: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CombosConfig {
    combos: HashMap<String, Combo>,
}

/// Load the combo table from a TOML file
pub fn load_combos(path: &Path) -> Result<HashMap<String, Combo>, ConfigError> {
    let config: CombosConfig = super::load_toml(path)?;
    Ok(config.combos)
}

/// Parse the combo table from a TOML string
pub fn parse_combos(content: &str) -> Result<HashMap<String, Combo>, ConfigError> {
    let config: CombosConfig = super::parse_toml(content)?;
    Ok(config.combos)
}

/// Built-in combo table
pub fn default_combos() -> HashMap<String, Combo> {
    let toml = include_str!("../../config/combos.toml");
    parse_combos(toml).unwrap_or_default()
}
