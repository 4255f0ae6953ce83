//! Per-move motion value table loading

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Motion values for one move
///
/// Each entry in `motion` is one hit of the move. The `element`
/// sequence pairs with `motion` by index; when it is shorter (or
/// absent), missing entries fall back to the default elemental motion
/// value during accumulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Motion {
    pub motion: Vec<f64>,
    #[serde(default)]
    pub element: Vec<f64>,
}

impl Motion {
    /// Number of hits this move lands
    pub fn hits(&self) -> usize {
        self.motion.len()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct MotionsConfig {
    motions: HashMap<String, Motion>,
}

/// Load the motion table from a TOML file
pub fn load_motions(path: &Path) -> Result<HashMap<String, Motion>, ConfigError> {
    let config: MotionsConfig = super::load_toml(path)?;
    Ok(config.motions)
}

/// Parse the motion table from a TOML string
pub fn parse_motions(content: &str) -> Result<HashMap<String, Motion>, ConfigError> {
    let config: MotionsConfig = super::parse_toml(content)?;
    Ok(config.motions)
}

/// Built-in motion table
pub fn default_motions() -> HashMap<String, Motion> {
    let toml = include_str!("../../config/motions.toml");
    parse_motions(toml).unwrap_or_default()
}
