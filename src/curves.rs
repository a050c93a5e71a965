//! Contains the easing curve used when blending corner contributions.

use bevy_math::{
    Curve, WithDerivative,
    curve::{Interval, derivatives::SampleDerivative},
};

/// Quintic smootherstep easing, `6t^5 - 15t^4 + 10t^3`.
///
/// Compared to plain smoothstep, the second derivative also vanishes at 0 and 1,
/// which keeps cell boundaries invisible in the blended field.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Smootherstep;

impl Curve<f32> for Smootherstep {
    #[inline]
    fn domain(&self) -> Interval {
        Interval::UNIT
    }

    #[inline]
    fn sample_unchecked(&self, t: f32) -> f32 {
        t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
    }
}

impl SampleDerivative<f32> for Smootherstep {
    #[inline]
    fn sample_with_derivative_unchecked(&self, t: f32) -> WithDerivative<f32> {
        WithDerivative {
            value: self.sample_unchecked(t),
            derivative: 30.0 * t * t * (t - 1.0) * (t - 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_pinned() {
        assert_eq!(Smootherstep.sample_unchecked(0.0), 0.0);
        assert_eq!(Smootherstep.sample_unchecked(1.0), 1.0);
    }

    #[test]
    fn midpoint_is_exact() {
        // 6/32 - 15/16 + 10/8, every term exact in f32.
        assert_eq!(Smootherstep.sample_unchecked(0.5), 0.5);
    }

    #[test]
    fn monotone_on_unit_domain() {
        // f32 evaluation wobbles a few ulps where the curve flattens, so the
        // comparison carries that much slack. A real dip would blow past it.
        let mut last = 0.0f32;
        for step in 0..=1000 {
            let eased = Smootherstep.sample_unchecked(step as f32 / 1000.0);
            assert!(
                eased >= last - 1e-6,
                "eased {eased} fell below {last} at step {step}"
            );
            last = eased;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn flat_at_endpoints() {
        assert_eq!(
            Smootherstep.sample_with_derivative_unchecked(0.0).derivative,
            0.0
        );
        assert_eq!(
            Smootherstep.sample_with_derivative_unchecked(1.0).derivative,
            0.0
        );
    }
}
