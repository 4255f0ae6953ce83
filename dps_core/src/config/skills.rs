//! Skill effect table loading
//!
//! The table is keyed by skill name, then by level label (`lv1`..`lv7`).
//! Every effect field defaults to neutral, so a table entry only states
//! what the skill actually changes. Lookups for unknown skills or
//! levels yield None and callers treat that as a no-op modifier.

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Effects of one skill at one level
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillEffect {
    /// Flat attack added before hitzones
    #[serde(default)]
    pub attack_add: f64,
    /// Attack multiplier; raised to the activation rate when aggregated
    #[serde(default = "neutral_mult")]
    pub attack_mult: f64,
    /// Flat affinity percentage added
    #[serde(default)]
    pub affinity_add: f64,
    /// Flat elemental value added
    #[serde(default)]
    pub element_add: f64,
    /// Elemental multiplier; raised to the activation rate when aggregated
    #[serde(default = "neutral_mult")]
    pub element_mult: f64,
    /// Overrides the critical multiplier when present
    #[serde(default)]
    pub crit_mult: Option<f64>,
    /// Overrides the aggregate elemental critical bonus when present
    #[serde(default)]
    pub crit_element_bonus: Option<f64>,
    /// Flat hits added to the sharpness pool
    #[serde(default)]
    pub sharpness_add: f64,
    /// Probability of skipping sharpness consumption on any hit
    #[serde(default)]
    pub sharpness_skip_prob: f64,
    /// Probability of skipping sharpness consumption on critical hits
    #[serde(default)]
    pub crit_sharpness_skip_prob: f64,
    /// Seconds of sharpness-free attacking granted
    #[serde(default)]
    pub no_degrade_time: f64,
}

fn neutral_mult() -> f64 {
    1.0
}

/// Skill name -> level label -> effect record
pub type SkillTable = HashMap<String, HashMap<String, SkillEffect>>;

/// Look up the effect record for an exact skill level.
///
/// No fallback to lower levels: a skill whose exact level is missing
/// from the table is treated as inert by callers.
pub fn effect_for<'a>(table: &'a SkillTable, name: &str, level: u8) -> Option<&'a SkillEffect> {
    table.get(name)?.get(&format!("lv{level}"))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SkillsConfig {
    skills: SkillTable,
}

/// Load the skill effect table from a TOML file
pub fn load_skills(path: &Path) -> Result<SkillTable, ConfigError> {
    let config: SkillsConfig = super::load_toml(path)?;
    Ok(config.skills)
}

/// Parse the skill effect table from a TOML string
pub fn parse_skills(content: &str) -> Result<SkillTable, ConfigError> {
    let config: SkillsConfig = super::parse_toml(content)?;
    Ok(config.skills)
}

/// Built-in skill effect table
pub fn default_skills() -> SkillTable {
    let toml = include_str!("../../config/skills.toml");
    parse_skills(toml).unwrap_or_default()
}
