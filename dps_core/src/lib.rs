//! dps_core - DPS estimation library for blade weapons
//!
//! This library provides:
//! - GameData: static weapon/monster/combo/motion/skill tables
//! - Skill modifier aggregation and sharpness adjustment
//! - Expected-value critical damage and combo accumulation
//! - Sharpness sustain estimation
//! - Calculator: the end-to-end pipeline producing a CalcResult
//!
//! Every calculation is a pure, synchronous function of its request
//! and the static tables; result logging is the single best-effort
//! side effect.

pub mod bookmarks;
pub mod calculator;
pub mod config;
pub mod damage;
pub mod logger;
pub mod modifiers;
pub mod prelude;
pub mod sharpness;
pub mod sustain;
pub mod types;

// Re-export core types for convenience
pub use bookmarks::{Bookmark, BookmarkStore};
pub use calculator::{CalcError, CalcRequest, CalcResult, Calculator};
pub use config::{default_skills, Combo, GameData, Hitzone, Monster, Motion, SkillEffect, Weapon};
pub use logger::{CsvResultLogger, LogEntry, ResultLogger};
pub use modifiers::{aggregate_modifiers, ModifiedStats};
pub use sharpness::SharpnessTier;
pub use sustain::SustainEstimate;
pub use types::{ActiveSkill, ElementType, SkillSelection};
