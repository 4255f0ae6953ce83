//! Sharpness tiers and their physical/elemental multipliers
//!
//! The two multiplier curves are calibrated independently; they are not
//! proportional to each other. Unknown tier names always resolve to a
//! neutral 1.0 multiplier rather than an error, so partially-migrated
//! weapon data keeps calculating.

use serde::{Deserialize, Serialize};

/// Weapon condition tier, ordered worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SharpnessTier {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    White,
    Purple,
}

impl SharpnessTier {
    /// Parse a tier name, case-insensitive. Unknown names yield None.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "red" => Some(SharpnessTier::Red),
            "orange" => Some(SharpnessTier::Orange),
            "yellow" => Some(SharpnessTier::Yellow),
            "green" => Some(SharpnessTier::Green),
            "blue" => Some(SharpnessTier::Blue),
            "white" => Some(SharpnessTier::White),
            "purple" => Some(SharpnessTier::Purple),
            _ => None,
        }
    }

    /// Multiplier applied to physical attack at this tier
    pub fn physical_multiplier(&self) -> f64 {
        match self {
            SharpnessTier::Red => 0.50,
            SharpnessTier::Orange => 0.75,
            SharpnessTier::Yellow => 1.00,
            SharpnessTier::Green => 1.05,
            SharpnessTier::Blue => 1.20,
            SharpnessTier::White => 1.32,
            SharpnessTier::Purple => 1.39,
        }
    }

    /// Multiplier applied to elemental value at this tier
    pub fn elemental_multiplier(&self) -> f64 {
        match self {
            SharpnessTier::Red => 0.25,
            SharpnessTier::Orange => 0.50,
            SharpnessTier::Yellow => 0.75,
            SharpnessTier::Green => 1.00,
            SharpnessTier::Blue => 1.0625,
            SharpnessTier::White => 1.15,
            SharpnessTier::Purple => 1.25,
        }
    }
}

/// Physical multiplier for a tier name; unknown tiers are neutral.
pub fn physical_multiplier(tier_name: &str) -> f64 {
    SharpnessTier::from_name(tier_name)
        .map(|t| t.physical_multiplier())
        .unwrap_or(1.0)
}

/// Elemental multiplier for a tier name; unknown tiers are neutral.
pub fn elemental_multiplier(tier_name: &str) -> f64 {
    SharpnessTier::from_name(tier_name)
        .map(|t| t.elemental_multiplier())
        .unwrap_or(1.0)
}
