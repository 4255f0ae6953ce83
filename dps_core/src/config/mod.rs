//! Static game-data tables loaded from TOML files
//!
//! Every table is an explicit immutable value constructed once (from a
//! data directory or from the embedded defaults) and passed into each
//! calculation call. There is no ambient global table state.

mod combos;
mod constants;
mod monsters;
mod motions;
mod skills;
mod weapons;

pub use combos::{default_combos, load_combos, parse_combos, Combo};
pub use constants::{load_constants, CalcConstants};
pub use monsters::{default_monsters, load_monsters, parse_monsters, Hitzone, Monster};
pub use motions::{default_motions, load_motions, parse_motions, Motion};
pub use skills::{default_skills, effect_for, load_skills, parse_skills, SkillEffect, SkillTable};
pub use weapons::{default_weapons, load_weapons, parse_weapons, Weapon, WeaponElement};

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// All static tables needed for one calculation run
#[derive(Debug, Clone)]
pub struct GameData {
    pub weapons: HashMap<String, Weapon>,
    pub monsters: HashMap<String, Monster>,
    pub combos: HashMap<String, Combo>,
    pub motions: HashMap<String, Motion>,
    pub skills: SkillTable,
    pub constants: CalcConstants,
}

impl GameData {
    /// Load all tables from a data directory.
    ///
    /// Expects `weapons.toml`, `monsters.toml`, `combos.toml`,
    /// `motions.toml` and `skills.toml`; `constants.toml` is optional
    /// and falls back to the built-in defaults.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let constants_path = dir.join("constants.toml");
        let constants = if constants_path.exists() {
            load_constants(&constants_path)?
        } else {
            CalcConstants::default()
        };

        Ok(GameData {
            weapons: load_weapons(&dir.join("weapons.toml"))?,
            monsters: load_monsters(&dir.join("monsters.toml"))?,
            combos: load_combos(&dir.join("combos.toml"))?,
            motions: load_motions(&dir.join("motions.toml"))?,
            skills: load_skills(&dir.join("skills.toml"))?,
            constants,
        })
    }
}

impl Default for GameData {
    /// Built-in tables embedded at compile time
    fn default() -> Self {
        GameData {
            weapons: default_weapons(),
            monsters: default_monsters(),
            combos: default_combos(),
            motions: default_motions(),
            skills: default_skills(),
            constants: CalcConstants::default(),
        }
    }
}
