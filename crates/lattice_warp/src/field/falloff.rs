//! Falloff curves mapping normalized distance to influence.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a well's influence decays between its center and its radius.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Falloff {
    /// `1 - n`.
    Linear,
    /// `(1 - n)^2`, tighter around the center.
    Quadratic,
    /// `exp(-3 n)`; note this is still `e^-3` at the rim, the strict
    /// distance-inside-radius gate is what zeroes the boundary.
    Exponential,
    /// Hermite ease `t^2 (3 - 2 t)` with `t = 1 - n`.
    #[default]
    Smooth,
}

impl Falloff {
    /// Influence for a normalized distance `n = distance / radius`.
    ///
    /// `apply(0) == 1` for every kind; the result is never negative.
    pub fn apply(self, n: f32) -> f32 {
        let n = n.clamp(0.0, 1.0);
        match self {
            Falloff::Linear => 1.0 - n,
            Falloff::Quadratic => {
                let t = 1.0 - n;
                t * t
            }
            Falloff::Exponential => (-3.0 * n).exp(),
            Falloff::Smooth => {
                let t = 1.0 - n;
                t * t * (3.0 - 2.0 * t)
            }
        }
    }

    /// All falloff kinds, in presentation order.
    pub const ALL: [Falloff; 4] = [
        Falloff::Linear,
        Falloff::Quadratic,
        Falloff::Exponential,
        Falloff::Smooth,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_is_one_at_the_center() {
        for falloff in Falloff::ALL {
            assert_eq!(falloff.apply(0.0), 1.0, "{falloff:?}");
        }
    }

    #[test]
    fn rim_values_match_their_curves() {
        assert_eq!(Falloff::Linear.apply(1.0), 0.0);
        assert_eq!(Falloff::Quadratic.apply(1.0), 0.0);
        assert_eq!(Falloff::Smooth.apply(1.0), 0.0);
        let rim = Falloff::Exponential.apply(1.0);
        assert!((rim - (-3.0_f32).exp()).abs() < 1e-6);
    }

    #[test]
    fn influence_is_never_negative() {
        for falloff in Falloff::ALL {
            for step in 0..=100 {
                let n = step as f32 / 100.0;
                assert!(falloff.apply(n) >= 0.0, "{falloff:?} at {n}");
            }
        }
    }

    #[test]
    fn influence_decreases_with_distance() {
        for falloff in Falloff::ALL {
            let mut previous = falloff.apply(0.0);
            for step in 1..=100 {
                let n = step as f32 / 100.0;
                let value = falloff.apply(n);
                assert!(value <= previous, "{falloff:?} rose at {n}");
                previous = value;
            }
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        for falloff in Falloff::ALL {
            assert_eq!(falloff.apply(-1.0), falloff.apply(0.0));
            assert_eq!(falloff.apply(2.0), falloff.apply(1.0));
        }
    }
}
