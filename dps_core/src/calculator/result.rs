//! CalcResult - the flat record produced by one calculation run

use serde::{Deserialize, Serialize};

/// Every intermediate and final quantity of one orchestrated run.
///
/// Created once per run and never mutated afterwards; display and
/// logging collaborators read individual named fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalcResult {
    // === Identifying fields ===
    pub weapon: String,
    pub monster: String,
    pub part: String,
    /// Sharpness tier name the weapon calculated at
    pub sharpness: String,
    /// Formatted skill summary, stable across runs
    pub skills: String,
    pub combo: String,

    // === Adjusted stats ===
    /// Attack after skills and sharpness
    pub attack: f64,
    /// Affinity after skills, percent, unclamped
    pub affinity: f64,
    /// Elemental value after skills and sharpness
    pub element: f64,
    /// Probability-weighted expected attack
    pub expected_attack: f64,
    /// Expected attack after the part's physical hitzone
    pub effective_attack: f64,
    /// Elemental value after the part's elemental hitzone
    pub effective_element: f64,

    // === Combo totals ===
    pub total_physical: f64,
    pub total_elemental: f64,
    pub combo_time: f64,
    pub physical_dps: f64,
    pub elemental_dps: f64,
    pub total_dps: f64,

    // === Sharpness sustain ===
    pub base_sharpness_hits: u32,
    pub effective_hits: u32,
    /// Hits landed by one execution of the combo
    pub hits_per_combo: u32,
    /// Full combo repetitions before the pool runs out
    pub combo_count: u32,
    pub average_hit_damage: f64,
    pub total_damage_until_dull: f64,
    /// Seconds of sustained attacking, including no-degrade bonuses
    pub sustain_duration: f64,
}

impl CalcResult {
    /// One-line human summary
    pub fn summary(&self) -> String {
        format!(
            "{} vs {} ({}): {:.2} DPS ({:.1} physical + {:.1} elemental), sustained {:.1}s",
            self.weapon,
            self.monster,
            self.part,
            self.total_dps,
            self.total_physical,
            self.total_elemental,
            self.sustain_duration,
        )
    }
}
