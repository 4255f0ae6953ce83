//! Shared types used across the calculation pipeline

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Element carried by a weapon and resisted per monster part
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    #[default]
    None,
    Fire,
    Water,
    Thunder,
    Ice,
    Dragon,
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementType::None => "none",
            ElementType::Fire => "fire",
            ElementType::Water => "water",
            ElementType::Thunder => "thunder",
            ElementType::Ice => "ice",
            ElementType::Dragon => "dragon",
        };
        write!(f, "{name}")
    }
}

/// One entry in the per-calculation skill selection
///
/// `level` is the equipped level (1-7; level 0 entries are expected to
/// be filtered out by the caller). `rate` is the activation probability
/// in [0.0, 1.0] used to scale the skill's effects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActiveSkill {
    pub level: u8,
    pub rate: f64,
}

impl ActiveSkill {
    pub fn new(level: u8, rate: f64) -> Self {
        ActiveSkill { level, rate }
    }
}

/// Active skill selection supplied per calculation call
pub type SkillSelection = HashMap<String, ActiveSkill>;

/// Format a selection as `nameLv2(80%)|...`, sorted by skill name so
/// the output is stable regardless of map iteration order.
pub fn format_skill_summary(selection: &SkillSelection) -> String {
    let mut entries: Vec<_> = selection.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
        .iter()
        .map(|(name, skill)| {
            format!("{}Lv{}({}%)", name, skill.level, (skill.rate * 100.0).round() as i64)
        })
        .collect::<Vec<_>>()
        .join("|")
}
