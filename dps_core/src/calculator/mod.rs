//! Calculation orchestrator
//!
//! Composes the full pipeline: skill aggregation, sharpness
//! adjustment, expected-value critical adjustment, combo accumulation
//! and sustain estimation, producing one immutable [`CalcResult`].
//! Each run is a pure function of the request and the static tables;
//! the only side effect is a best-effort hand-off to the result logger.

mod result;

pub use result::CalcResult;

use crate::config::GameData;
use crate::damage::{accumulate_combo, apply_hitzone, expected_physical, ComboInputs};
use crate::logger::ResultLogger;
use crate::modifiers::{aggregate_modifiers, crit_element_bonus, crit_multiplier};
use crate::sharpness;
use crate::sustain::estimate_sustain;
use crate::types::{format_skill_summary, SkillSelection};
use thiserror::Error;
use tracing::{debug, warn};

/// Fatal lookup failure: the request named a key the static tables do
/// not contain. Never silently defaulted.
#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Unknown weapon: {0}")]
    UnknownWeapon(String),
    #[error("Unknown monster: {0}")]
    UnknownMonster(String),
    #[error("Unknown part '{part}' on monster '{monster}'")]
    UnknownPart { monster: String, part: String },
    #[error("Unknown combo: {0}")]
    UnknownCombo(String),
}

/// One calculation invocation
#[derive(Debug, Clone)]
pub struct CalcRequest {
    pub weapon: String,
    pub monster: String,
    pub part: String,
    pub combo: String,
    /// Level-0 entries are expected to be pre-filtered by the caller
    pub skills: SkillSelection,
}

/// Owns the static tables and an optional result logger
pub struct Calculator {
    data: GameData,
    logger: Option<Box<dyn ResultLogger>>,
}

impl Calculator {
    pub fn new(data: GameData) -> Self {
        Calculator { data, logger: None }
    }

    /// Attach a result logger; every successful calculation is handed
    /// to it best-effort.
    pub fn with_logger(mut self, logger: Box<dyn ResultLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn data(&self) -> &GameData {
        &self.data
    }

    /// Run the full pipeline for one request.
    pub fn calculate(&self, request: &CalcRequest) -> Result<CalcResult, CalcError> {
        debug!(
            weapon = %request.weapon,
            monster = %request.monster,
            part = %request.part,
            combo = %request.combo,
            "running calculation"
        );

        let weapon = self
            .data
            .weapons
            .get(&request.weapon)
            .ok_or_else(|| CalcError::UnknownWeapon(request.weapon.clone()))?;
        let monster = self
            .data
            .monsters
            .get(&request.monster)
            .ok_or_else(|| CalcError::UnknownMonster(request.monster.clone()))?;
        let hitzone = monster
            .parts
            .get(&request.part)
            .ok_or_else(|| CalcError::UnknownPart {
                monster: request.monster.clone(),
                part: request.part.clone(),
            })?;
        let combo = self
            .data
            .combos
            .get(&request.combo)
            .ok_or_else(|| CalcError::UnknownCombo(request.combo.clone()))?;

        let constants = &self.data.constants;
        let base_attack = weapon.attack * constants.weapon_coefficient;

        let stats = aggregate_modifiers(
            base_attack,
            weapon.affinity,
            weapon.element.value,
            &request.skills,
            &self.data.skills,
        );

        let attack = stats.attack * sharpness::physical_multiplier(&weapon.sharpness);
        let element = stats.element * sharpness::elemental_multiplier(&weapon.sharpness);

        let crit_mult = crit_multiplier(
            &request.skills,
            &self.data.skills,
            constants.base_crit_multiplier,
        );
        let expected_attack = expected_physical(attack, stats.affinity, crit_mult);

        let physical_zone = hitzone.physical;
        let element_zone = hitzone.element_percent(weapon.element.kind);
        let effective_attack = apply_hitzone(expected_attack, physical_zone);
        let effective_element = apply_hitzone(element, element_zone);

        let totals = accumulate_combo(
            &combo.moves,
            &self.data.motions,
            &ComboInputs {
                attack,
                element,
                affinity: stats.affinity,
                crit_mult,
                physical_zone,
                element_zone,
                crit_element_bonus: crit_element_bonus(&request.skills, &self.data.skills),
            },
        );

        // Only moves the motion table knows land hits; unknown moves
        // were skipped during accumulation as well.
        let hits_per_combo: u32 = combo
            .moves
            .iter()
            .filter_map(|mv| self.data.motions.get(mv))
            .map(|m| m.hits() as u32)
            .sum();

        let sustain = estimate_sustain(
            weapon.sharpness_hits,
            stats.affinity,
            &request.skills,
            &self.data.skills,
        );

        let combo_count = if hits_per_combo > 0 {
            sustain.effective_hits / hits_per_combo
        } else {
            0
        };
        let average_hit_damage = if hits_per_combo > 0 {
            (totals.physical + totals.elemental) / hits_per_combo as f64
        } else {
            0.0
        };
        let total_damage_until_dull = average_hit_damage * sustain.effective_hits as f64;
        let sustain_duration = combo_count as f64 * combo.time + sustain.bonus_duration;

        let physical_dps = per_second(totals.physical, combo.time);
        let elemental_dps = per_second(totals.elemental, combo.time);

        let result = CalcResult {
            weapon: request.weapon.clone(),
            monster: request.monster.clone(),
            part: request.part.clone(),
            sharpness: weapon.sharpness.clone(),
            skills: format_skill_summary(&request.skills),
            combo: request.combo.clone(),
            attack,
            affinity: stats.affinity,
            element,
            expected_attack,
            effective_attack,
            effective_element,
            total_physical: totals.physical,
            total_elemental: totals.elemental,
            combo_time: combo.time,
            physical_dps,
            elemental_dps,
            total_dps: physical_dps + elemental_dps,
            base_sharpness_hits: weapon.sharpness_hits,
            effective_hits: sustain.effective_hits,
            hits_per_combo,
            combo_count,
            average_hit_damage,
            total_damage_until_dull,
            sustain_duration,
        };

        if let Some(logger) = &self.logger {
            // Best-effort: a failed log write never invalidates the
            // result that was already produced.
            if let Err(err) = logger.record(&result) {
                warn!(error = %err, "result logging failed");
            }
        }

        Ok(result)
    }
}

/// Per-second rate; defined as 0 for non-positive time spans
fn per_second(value: f64, time: f64) -> f64 {
    if time <= 0.0 {
        0.0
    } else {
        value / time
    }
}
