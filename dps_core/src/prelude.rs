//! Prelude module for convenient imports
//!
//! ```rust
//! use dps_core::prelude::*;
//! ```

// Core types
pub use crate::types::{ActiveSkill, ElementType, SkillSelection};

// Static data
pub use crate::config::{Combo, GameData, Hitzone, Monster, Motion, SkillEffect, Weapon};

// Pipeline
pub use crate::calculator::{CalcError, CalcRequest, CalcResult, Calculator};
pub use crate::damage::{ComboInputs, ComboTotals};
pub use crate::modifiers::ModifiedStats;
pub use crate::sharpness::SharpnessTier;
pub use crate::sustain::SustainEstimate;

// Persistence
pub use crate::bookmarks::{Bookmark, BookmarkStore};
pub use crate::logger::{CsvResultLogger, ResultLogger};
