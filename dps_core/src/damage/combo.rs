//! Combo damage accumulation
//!
//! Walks a combo's move sequence hit by hit and sums physical and
//! elemental contributions. The per-hit elemental critical multiplier
//! is held neutral; the real elemental critical bonus is applied
//! exactly once to the aggregate total so it never compounds per hit.

use super::expected_physical;
use crate::config::Motion;
use std::collections::HashMap;

/// Elemental motion value used when a move's elemental sequence is
/// shorter than its physical one, or absent entirely
pub const DEFAULT_ELEMENT_MOTION: f64 = 0.3;

/// Inputs to one combo accumulation pass.
///
/// `attack` and `element` must already carry the sharpness multipliers;
/// they are not re-applied here.
#[derive(Debug, Clone, Copy)]
pub struct ComboInputs {
    /// Physical attack after skills and sharpness
    pub attack: f64,
    /// Elemental value after skills and sharpness
    pub element: f64,
    /// Affinity in percent, signed
    pub affinity: f64,
    /// Critical multiplier for the expected-value adjustment
    pub crit_mult: f64,
    /// Physical hitzone percentage of the target part
    pub physical_zone: f64,
    /// Elemental hitzone percentage of the target part
    pub element_zone: f64,
    /// Aggregate elemental critical bonus, applied once to the total
    pub crit_element_bonus: f64,
}

/// Summed damage over every hit of a combo
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ComboTotals {
    pub physical: f64,
    pub elemental: f64,
}

/// Accumulate physical and elemental damage across a move sequence.
///
/// Moves missing from the motion table contribute nothing and are
/// skipped silently. Accumulation is per-hit: each physical motion
/// entry is one hit, index-paired with the elemental sequence.
pub fn accumulate_combo(
    moves: &[String],
    motion_table: &HashMap<String, Motion>,
    inputs: &ComboInputs,
) -> ComboTotals {
    let mut totals = ComboTotals::default();

    // Expected attack is computed once; every hit shares it.
    let expected = expected_physical(inputs.attack, inputs.affinity, inputs.crit_mult);

    for mv in moves {
        let Some(motion) = motion_table.get(mv) else {
            continue;
        };
        for (i, motion_value) in motion.motion.iter().enumerate() {
            let element_motion = motion
                .element
                .get(i)
                .copied()
                .unwrap_or(DEFAULT_ELEMENT_MOTION);

            totals.physical += expected * motion_value * (inputs.physical_zone / 100.0);
            totals.elemental +=
                inputs.element * element_motion * (inputs.element_zone / 100.0);
        }
    }

    // Two-stage elemental critical design: neutral inside the loop,
    // the bonus lands exactly once on the aggregate.
    totals.elemental *= inputs.crit_element_bonus;
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn motion_table() -> HashMap<String, Motion> {
        let mut table = HashMap::new();
        table.insert(
            "overhead_slash".to_string(),
            Motion {
                motion: vec![1.0],
                element: vec![1.0],
            },
        );
        table.insert(
            "double_cut".to_string(),
            Motion {
                motion: vec![0.2, 0.4],
                element: vec![0.5],
            },
        );
        table
    }

    fn neutral_inputs() -> ComboInputs {
        ComboInputs {
            attack: 100.0,
            element: 0.0,
            affinity: 0.0,
            crit_mult: 1.25,
            physical_zone: 100.0,
            element_zone: 100.0,
            crit_element_bonus: 1.0,
        }
    }

    #[test]
    fn test_empty_combo_is_zero() {
        let totals = accumulate_combo(&[], &motion_table(), &neutral_inputs());
        assert_eq!(totals, ComboTotals::default());
    }

    #[test]
    fn test_unknown_move_skipped() {
        let moves = vec!["no_such_move".to_string(), "overhead_slash".to_string()];
        let totals = accumulate_combo(&moves, &motion_table(), &neutral_inputs());
        assert!((totals.physical - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_per_hit_accumulation_with_zone() {
        let mut inputs = neutral_inputs();
        inputs.physical_zone = 50.0;

        let moves = vec!["double_cut".to_string()];
        let totals = accumulate_combo(&moves, &motion_table(), &inputs);
        // (100*0.2 + 100*0.4) * 0.5
        assert!((totals.physical - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_short_element_sequence_falls_back() {
        let mut inputs = neutral_inputs();
        inputs.element = 100.0;

        let moves = vec!["double_cut".to_string()];
        let totals = accumulate_combo(&moves, &motion_table(), &inputs);
        // First hit uses 0.5, second falls back to 0.3
        assert!((totals.elemental - (100.0 * 0.5 + 100.0 * 0.3)).abs() < 1e-9);
    }

    #[test]
    fn test_affinity_applied_through_expected_value() {
        let mut inputs = neutral_inputs();
        inputs.affinity = 20.0;

        let moves = vec!["overhead_slash".to_string()];
        let totals = accumulate_combo(&moves, &motion_table(), &inputs);
        assert!((totals.physical - 105.0).abs() < 1e-9);
    }

    #[test]
    fn test_element_crit_bonus_applied_once_to_aggregate() {
        let mut inputs = neutral_inputs();
        inputs.element = 100.0;
        inputs.crit_element_bonus = 1.15;

        // Two single-hit moves; a per-hit bonus would compound.
        let moves = vec!["overhead_slash".to_string(), "overhead_slash".to_string()];
        let totals = accumulate_combo(&moves, &motion_table(), &inputs);
        assert!((totals.elemental - 200.0 * 1.15).abs() < 1e-9);
    }

    #[test]
    fn test_sharpness_not_reapplied() {
        // The accumulator treats attack/element as final; feeding the
        // same inputs twice must give identical results regardless of
        // any tier the caller used upstream.
        let inputs = neutral_inputs();
        let moves = vec!["overhead_slash".to_string()];
        let a = accumulate_combo(&moves, &motion_table(), &inputs);
        let b = accumulate_combo(&moves, &motion_table(), &inputs);
        assert_eq!(a, b);
    }
}
