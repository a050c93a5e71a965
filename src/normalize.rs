//! Contains the policies that map raw noise onto the displayable unit range.

use core::f32::consts::SQRT_2;

use crate::field::NoiseField;

/// Selects how raw noise values are mapped onto `[0, 1]`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum Normalization {
    /// Fixed affine map from the raw bound `[-sqrt(2), sqrt(2)]`.
    ///
    /// Deterministic given a raw value alone, so brightness stays comparable
    /// between separately generated fields.
    #[default]
    Analytic,
    /// Per-field map of the observed minimum to 0 and the observed maximum
    /// to 1.
    ///
    /// Maximizes contrast within one field at the cost of making brightness
    /// incomparable between fields. A flat field maps to 0.5 everywhere.
    MinMax,
}

/// Rescales every value of `field` onto `[0, 1]` according to `policy`.
///
/// An empty field is left untouched.
pub fn normalize_field(field: &mut NoiseField, policy: Normalization) {
    match policy {
        Normalization::Analytic => {
            for value in field.as_mut_slice() {
                *value = (*value + SQRT_2) / (2.0 * SQRT_2);
            }
        }
        Normalization::MinMax => {
            let Some((lo, hi)) = field.min_max() else {
                return;
            };
            if lo == hi {
                // No spread to stretch, so everything sits mid-range.
                for value in field.as_mut_slice() {
                    *value = 0.5;
                }
            } else {
                let spread = hi - lo;
                for value in field.as_mut_slice() {
                    *value = (*value - lo) / spread;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(values: &[f32]) -> NoiseField {
        let mut field = NoiseField::new(values.len() as u32, 1);
        field.as_mut_slice().copy_from_slice(values);
        field
    }

    #[test]
    fn analytic_is_the_fixed_affine_map() {
        let mut field = field_of(&[-SQRT_2, 0.0, SQRT_2]);
        normalize_field(&mut field, Normalization::Analytic);
        assert_eq!(field.as_slice(), [0.0, 0.5, 1.0]);
    }

    #[test]
    fn analytic_ignores_observed_extrema() {
        // Same input maps to the same output no matter what else the field
        // holds.
        let mut narrow = field_of(&[0.2, 0.1]);
        let mut wide = field_of(&[0.2, -1.0, 1.0]);
        normalize_field(&mut narrow, Normalization::Analytic);
        normalize_field(&mut wide, Normalization::Analytic);
        assert_eq!(narrow.as_slice()[0], wide.as_slice()[0]);
    }

    #[test]
    fn min_max_pins_observed_extrema() {
        let mut field = field_of(&[-0.5, 0.25, 1.0]);
        normalize_field(&mut field, Normalization::MinMax);
        assert_eq!(field.as_slice(), [0.0, 0.5, 1.0]);
    }

    #[test]
    fn flat_field_maps_to_mid_range() {
        let mut field = field_of(&[0.3, 0.3, 0.3, 0.3]);
        normalize_field(&mut field, Normalization::MinMax);
        assert_eq!(field.as_slice(), [0.5, 0.5, 0.5, 0.5]);
    }

    #[test]
    fn empty_field_is_left_alone() {
        let mut field = NoiseField::new(0, 0);
        normalize_field(&mut field, Normalization::MinMax);
        normalize_field(&mut field, Normalization::Analytic);
        assert_eq!(field.as_slice().len(), 0);
    }
}
