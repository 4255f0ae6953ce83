//! Expected-value damage calculations

mod combo;

pub use combo::{accumulate_combo, ComboInputs, ComboTotals, DEFAULT_ELEMENT_MOTION};

/// Fixed penalty multiplier applied proportionally to negative affinity.
/// Weak hits are not affected by critical-boosting skills.
const WEAK_HIT_MULTIPLIER: f64 = 0.75;

/// Probability-weighted expected attack for a given affinity.
///
/// Affinity is clamped to [-100, 100]. Non-negative affinity
/// interpolates linearly between a guaranteed normal hit and a
/// guaranteed critical hit at `crit_mult`. Negative affinity applies
/// the fixed weak-hit penalty proportionally, regardless of
/// `crit_mult`.
pub fn expected_physical(attack: f64, affinity: f64, crit_mult: f64) -> f64 {
    let affinity = affinity.clamp(-100.0, 100.0);
    if affinity >= 0.0 {
        attack * (1.0 + (affinity / 100.0) * (crit_mult - 1.0))
    } else {
        attack * (1.0 + (affinity / 100.0) * (WEAK_HIT_MULTIPLIER - 1.0))
    }
}

/// Scale a damage value by a hitzone percentage
pub fn apply_hitzone(value: f64, zone_percent: f64) -> f64 {
    value * (zone_percent / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_affinity_is_neutral() {
        assert!((expected_physical(400.0, 0.0, 1.25) - 400.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_positive_affinity_interpolates() {
        // 20% affinity at 1.25x: 400 * (1 + 0.2 * 0.25) = 420
        assert!((expected_physical(400.0, 20.0, 1.25) - 420.0).abs() < 1e-9);
        // Guaranteed crit
        assert!((expected_physical(400.0, 100.0, 1.25) - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_affinity_fixed_penalty() {
        // -50% affinity: 420 * (1 + (-0.5) * (0.75 - 1)) = 472.5
        let expected = 420.0 * 1.125;
        assert!((expected_physical(420.0, -50.0, 1.25) - expected).abs() < 1e-9);
        // crit_mult must not influence the weak-hit branch
        assert!((expected_physical(420.0, -50.0, 2.0) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_affinity_clamped() {
        assert!(
            (expected_physical(400.0, 250.0, 1.25) - expected_physical(400.0, 100.0, 1.25)).abs()
                < f64::EPSILON
        );
        assert!(
            (expected_physical(400.0, -250.0, 1.25) - expected_physical(400.0, -100.0, 1.25))
                .abs()
                < f64::EPSILON
        );
    }

    #[test]
    fn test_apply_hitzone() {
        assert!((apply_hitzone(582.12, 100.0) - 582.12).abs() < f64::EPSILON);
        assert!((apply_hitzone(400.0, 45.0) - 180.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_monotone_in_nonnegative_affinity(
            attack in 1.0..2000.0f64,
            crit_mult in 1.0..2.0f64,
            lo in 0.0..100.0f64,
            hi in 0.0..100.0f64,
        ) {
            let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
            prop_assert!(
                expected_physical(attack, lo, crit_mult)
                    <= expected_physical(attack, hi, crit_mult) + 1e-9
            );
        }

        #[test]
        fn prop_weak_hit_independent_of_crit_mult(
            attack in 1.0..2000.0f64,
            affinity in -100.0..0.0f64,
            crit_a in 1.0..2.0f64,
            crit_b in 1.0..2.0f64,
        ) {
            prop_assert!(
                (expected_physical(attack, affinity, crit_a)
                    - expected_physical(attack, affinity, crit_b))
                .abs()
                    < 1e-9
            );
        }
    }
}
