//! Contains gradient storage and random gradient assignment for lattice
//! points.

use alloc::vec::Vec;
use core::f32::consts::TAU;

use bevy_math::{UVec2, Vec2};
use rand::Rng;

use crate::lattice::Lattice;

/// One gradient vector per lattice point, stored flat in row-major order.
///
/// Lookup is indexed (`y * points_per_axis + x`), never hashed, so fetching a
/// cell's corners touches exactly 4 slots.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientField {
    points_per_axis: u32,
    gradients: Vec<Vec2>,
}

impl GradientField {
    /// Draws one random unit gradient per point of `lattice`.
    ///
    /// Each gradient is `(cos a, sin a)` for an angle drawn uniformly from
    /// `[0, 2pi)`. The source is consumed sequentially in the lattice's
    /// row-major point order, so two identically seeded sources reproduce the
    /// same field.
    pub fn assign(lattice: &Lattice, rng: &mut impl Rng) -> Self {
        let gradients = lattice
            .points()
            .map(|_| Vec2::from_angle(rng.gen_range(0.0..TAU)))
            .collect();
        Self {
            points_per_axis: lattice.points_per_axis(),
            gradients,
        }
    }

    /// Builds a field from explicit per-point vectors in row-major order.
    ///
    /// Vector magnitudes are taken as given; [`GradientField::assign`] is the
    /// way to get the usual random unit gradients.
    ///
    /// # Panics
    ///
    /// Panics if `gradients.len()` is not `points_per_axis` squared.
    pub fn from_vectors(points_per_axis: u32, gradients: Vec<Vec2>) -> Self {
        let expected = points_per_axis as usize * points_per_axis as usize;
        assert_eq!(
            gradients.len(),
            expected,
            "a {points_per_axis}x{points_per_axis} lattice needs {expected} gradients"
        );
        Self {
            points_per_axis,
            gradients,
        }
    }

    /// How many lattice points one axis carries.
    #[inline]
    pub fn points_per_axis(&self) -> u32 {
        self.points_per_axis
    }

    /// The gradient stored for `point`.
    ///
    /// # Panics
    ///
    /// Panics if `point` lies outside the lattice.
    #[inline]
    pub fn get(&self, point: UVec2) -> Vec2 {
        assert!(
            point.x < self.points_per_axis && point.y < self.points_per_axis,
            "lattice point {point} is outside a {0}x{0} lattice",
            self.points_per_axis
        );
        self.gradients[(point.y * self.points_per_axis + point.x) as usize]
    }

    /// The 4 corner gradients of one cell, fetched together in corner order.
    #[inline]
    pub fn corner_gradients(&self, corners: [UVec2; 4]) -> [Vec2; 4] {
        corners.map(|corner| self.get(corner))
    }

    /// All stored gradients in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.gradients.iter().copied()
    }
}
