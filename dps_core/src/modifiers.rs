//! Skill modifier aggregation
//!
//! Folds the active skill selection into net attack/affinity/element
//! adjustments. Additive effects scale linearly with the activation
//! rate; multiplicative effects are raised to the power of the rate,
//! modelling "the bonus applies rate% of the time" as a continuous
//! relaxation instead of a binary toggle.
//!
//! Unknown skill names and missing levels are silently inert. That is
//! a deliberate forward-compatibility choice: a selection built
//! against newer game data must still calculate against an older
//! table.

use crate::config::{effect_for, SkillTable};
use crate::types::SkillSelection;

/// Attack/affinity/element after skill aggregation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModifiedStats {
    pub attack: f64,
    pub affinity: f64,
    pub element: f64,
}

/// Aggregate all active skills over the weapon's base stats.
///
/// Affinity is not clamped here; clamping happens in the expected-value
/// calculation downstream.
pub fn aggregate_modifiers(
    base_attack: f64,
    base_affinity: f64,
    base_element: f64,
    selection: &SkillSelection,
    table: &SkillTable,
) -> ModifiedStats {
    let mut attack_add = 0.0;
    let mut attack_mult = 1.0;
    let mut affinity = base_affinity;
    let mut element_add = 0.0;
    let mut element_mult = 1.0;

    for (name, skill) in selection {
        let Some(effect) = effect_for(table, name, skill.level) else {
            continue;
        };
        let rate = skill.rate;

        attack_add += effect.attack_add * rate;
        attack_mult *= effect.attack_mult.powf(rate);
        affinity += effect.affinity_add * rate;
        element_add += effect.element_add * rate;
        element_mult *= effect.element_mult.powf(rate);
    }

    ModifiedStats {
        attack: base_attack * attack_mult + attack_add,
        affinity,
        element: base_element * element_mult + element_add,
    }
}

/// Critical multiplier for this selection.
///
/// Taken from the first active skill whose effect carries an override
/// (skill order is irrelevant because override skills are mutually
/// exclusive in practice). Overrides are not scaled by activation rate.
pub fn crit_multiplier(selection: &SkillSelection, table: &SkillTable, default: f64) -> f64 {
    selection
        .iter()
        .filter_map(|(name, skill)| effect_for(table, name, skill.level))
        .find_map(|effect| effect.crit_mult)
        .unwrap_or(default)
}

/// Aggregate elemental critical bonus for this selection, 1.0 when no
/// active skill overrides it. Applied once to the combo's elemental
/// total, never per hit.
pub fn crit_element_bonus(selection: &SkillSelection, table: &SkillTable) -> f64 {
    selection
        .iter()
        .filter_map(|(name, skill)| effect_for(table, name, skill.level))
        .find_map(|effect| effect.crit_element_bonus)
        .unwrap_or(1.0)
}
