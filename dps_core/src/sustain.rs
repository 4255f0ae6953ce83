//! Sharpness pool duration estimation
//!
//! Estimates how many hits a weapon lands before its sharpness pool is
//! exhausted. Pool-extending skills grow the pool itself; skip-chance
//! skills shrink the average consumption per hit. Critical-only skip
//! chances are additionally scaled by the critical-hit rate since they
//! can only trigger on a critical hit.

use crate::config::{effect_for, SkillTable};
use crate::types::SkillSelection;

/// Floor for the consumption-rate multiplier; keeps the division away
/// from zero when stacked skip chances would eliminate consumption.
const MIN_CONSUMPTION_RATE: f64 = 0.01;

/// Outcome of a sustain estimation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SustainEstimate {
    /// Hits landable before the pool runs out
    pub effective_hits: u32,
    /// Flat no-consumption time in seconds, added to sustain duration
    /// downstream, never to the hit count
    pub bonus_duration: f64,
}

/// Estimate effective hits and bonus duration for a selection.
pub fn estimate_sustain(
    base_hits: u32,
    affinity: f64,
    selection: &SkillSelection,
    table: &SkillTable,
) -> SustainEstimate {
    let mut pool = base_hits as f64;
    let mut consumption_rate = 1.0;
    let mut bonus_duration = 0.0;

    let crit_rate = affinity.clamp(0.0, 100.0) / 100.0;

    for (name, skill) in selection {
        let Some(effect) = effect_for(table, name, skill.level) else {
            continue;
        };
        let rate = skill.rate;

        // Pool extension is flat and additive, applied once.
        pool += effect.sharpness_add * rate;

        if effect.sharpness_skip_prob > 0.0 {
            consumption_rate *= 1.0 - effect.sharpness_skip_prob * rate;
        }
        if effect.crit_sharpness_skip_prob > 0.0 {
            consumption_rate *= 1.0 - effect.crit_sharpness_skip_prob * crit_rate * rate;
        }

        bonus_duration += effect.no_degrade_time * rate;
    }

    if consumption_rate <= 0.0 {
        consumption_rate = MIN_CONSUMPTION_RATE;
    }

    SustainEstimate {
        // Truncation, not rounding, for parity with prior logged data.
        effective_hits: (pool / consumption_rate) as u32,
        bonus_duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_skills;
    use crate::types::ActiveSkill;
    use proptest::prelude::*;

    fn test_table() -> SkillTable {
        parse_skills(
            r#"
[skills.handicraft.lv3]
sharpness_add = 30.0

[skills.razor_sharp.lv2]
sharpness_skip_prob = 0.25

[skills.master_artisan.lv1]
crit_sharpness_skip_prob = 0.80

[skills.keen_polish.lv2]
no_degrade_time = 60.0
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_no_skills_returns_pool() {
        let estimate = estimate_sustain(90, 20.0, &SkillSelection::new(), &test_table());
        assert_eq!(estimate.effective_hits, 90);
        assert!((estimate.bonus_duration - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pool_extension_is_flat() {
        let mut selection = SkillSelection::new();
        selection.insert("handicraft".to_string(), ActiveSkill::new(3, 1.0));

        let estimate = estimate_sustain(90, 0.0, &selection, &test_table());
        assert_eq!(estimate.effective_hits, 120);
    }

    #[test]
    fn test_skip_probability_stretches_pool() {
        let mut selection = SkillSelection::new();
        selection.insert("razor_sharp".to_string(), ActiveSkill::new(2, 1.0));

        // 90 / (1 - 0.25) = 120
        let estimate = estimate_sustain(90, 0.0, &selection, &test_table());
        assert_eq!(estimate.effective_hits, 120);
    }

    #[test]
    fn test_crit_skip_scales_with_affinity() {
        let mut selection = SkillSelection::new();
        selection.insert("master_artisan".to_string(), ActiveSkill::new(1, 1.0));

        // Zero affinity: the crit-only skip never triggers.
        let none = estimate_sustain(100, 0.0, &selection, &test_table());
        assert_eq!(none.effective_hits, 100);

        // 50% affinity: 100 / (1 - 0.8*0.5) = 166.6 -> truncated
        let half = estimate_sustain(100, 50.0, &selection, &test_table());
        assert_eq!(half.effective_hits, 166);

        // Negative affinity clamps to zero crit rate.
        let negative = estimate_sustain(100, -40.0, &selection, &test_table());
        assert_eq!(negative.effective_hits, 100);
    }

    #[test]
    fn test_consumption_rate_floored_at_epsilon() {
        let mut selection = SkillSelection::new();
        selection.insert("master_artisan".to_string(), ActiveSkill::new(1, 1.0));

        let mut table = test_table();
        table
            .get_mut("master_artisan")
            .unwrap()
            .get_mut("lv1")
            .unwrap()
            .crit_sharpness_skip_prob = 1.0;

        // Guaranteed skip on guaranteed crits: rate would hit zero.
        let estimate = estimate_sustain(100, 100.0, &selection, &table);
        assert_eq!(estimate.effective_hits, (100.0 / 0.01) as u32);
    }

    #[test]
    fn test_bonus_duration_separate_from_hits() {
        let mut selection = SkillSelection::new();
        selection.insert("keen_polish".to_string(), ActiveSkill::new(2, 0.5));

        let estimate = estimate_sustain(90, 0.0, &selection, &test_table());
        assert_eq!(estimate.effective_hits, 90);
        assert!((estimate.bonus_duration - 30.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_effective_hits_monotone_in_skip_rate(
            rate_lo in 0.0..1.0f64,
            rate_hi in 0.0..1.0f64,
            affinity in -100.0..100.0f64,
        ) {
            let (rate_lo, rate_hi) = if rate_lo <= rate_hi {
                (rate_lo, rate_hi)
            } else {
                (rate_hi, rate_lo)
            };
            let table = test_table();

            let mut lo = SkillSelection::new();
            lo.insert("razor_sharp".to_string(), ActiveSkill::new(2, rate_lo));
            let mut hi = SkillSelection::new();
            hi.insert("razor_sharp".to_string(), ActiveSkill::new(2, rate_hi));

            let hits_lo = estimate_sustain(200, affinity, &lo, &table).effective_hits;
            let hits_hi = estimate_sustain(200, affinity, &hi, &table).effective_hits;
            prop_assert!(hits_lo <= hits_hi);
        }
    }
}
