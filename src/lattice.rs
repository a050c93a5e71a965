//! Contains the integer lattice a field is built over and its division into
//! unit cells.
//!
//! Lattice points sit at integer coordinates with unit spacing, so a point's
//! position equals its coordinates. The y axis grows downward, matching the
//! raster order of the output field.

use bevy_math::UVec2;

/// Selects how far the lattice extends relative to the configured domain size.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum LatticeExtent {
    /// `domain_size` points per axis. The far row and column of points start no
    /// cell of their own, leaving `domain_size - 1` cells per axis.
    Exclusive,
    /// `domain_size + 1` points per axis. The far edge is covered, so every one
    /// of the `domain_size * domain_size` cells has all 4 corners.
    #[default]
    Inclusive,
}

impl LatticeExtent {
    /// How many lattice points one axis carries for `domain_size`.
    #[inline]
    pub fn points_per_axis(self, domain_size: u32) -> u32 {
        match self {
            Self::Exclusive => domain_size,
            Self::Inclusive => domain_size + 1,
        }
    }

    /// How many complete cells one axis carries for `domain_size`.
    #[inline]
    pub fn cells_per_axis(self, domain_size: u32) -> u32 {
        match self {
            Self::Exclusive => domain_size - 1,
            Self::Inclusive => domain_size,
        }
    }
}

/// An axis-aligned square lattice of integer points with unit spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Lattice {
    domain_size: u32,
    extent: LatticeExtent,
}

impl Lattice {
    /// Creates a lattice spanning `domain_size` units per axis.
    ///
    /// # Panics
    ///
    /// Panics if `domain_size` is 0.
    pub fn new(domain_size: u32, extent: LatticeExtent) -> Self {
        assert!(domain_size > 0, "a lattice needs a positive domain size");
        Self {
            domain_size,
            extent,
        }
    }

    /// The domain size this lattice was built for.
    #[inline]
    pub fn domain_size(&self) -> u32 {
        self.domain_size
    }

    /// The extent rule this lattice was built with.
    #[inline]
    pub fn extent(&self) -> LatticeExtent {
        self.extent
    }

    /// How many lattice points one axis carries.
    #[inline]
    pub fn points_per_axis(&self) -> u32 {
        self.extent.points_per_axis(self.domain_size)
    }

    /// How many complete cells one axis carries.
    #[inline]
    pub fn cells_per_axis(&self) -> u32 {
        self.extent.cells_per_axis(self.domain_size)
    }

    /// Total number of lattice points.
    #[inline]
    pub fn point_count(&self) -> usize {
        let per_axis = self.points_per_axis() as usize;
        per_axis * per_axis
    }

    /// All lattice points in row-major order (y outer, x inner).
    ///
    /// The iterator is finite and can be restarted by calling this again.
    pub fn points(&self) -> impl Iterator<Item = UVec2> {
        let per_axis = self.points_per_axis();
        (0..per_axis).flat_map(move |y| (0..per_axis).map(move |x| UVec2::new(x, y)))
    }

    /// Origins of all complete cells in row-major order.
    ///
    /// A cell's origin is its top-left corner. Points on the far edge that
    /// would start a cell missing a corner are never produced, so under
    /// [`LatticeExtent::Exclusive`] with a domain size of 1 this is empty.
    pub fn cells(&self) -> impl Iterator<Item = UVec2> {
        let per_axis = self.cells_per_axis();
        (0..per_axis).flat_map(move |y| (0..per_axis).map(move |x| UVec2::new(x, y)))
    }
}

/// The 4 corners of the cell at `origin`, always ordered top-left, top-right,
/// bottom-left, bottom-right.
///
/// Every per-corner value downstream (gradients, offsets, dot products) keeps
/// this order.
#[inline]
pub fn cell_corners(origin: UVec2) -> [UVec2; 4] {
    [
        origin,
        origin + UVec2::X,
        origin + UVec2::Y,
        origin + UVec2::ONE,
    ]
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn exclusive_extent_counts() {
        let lattice = Lattice::new(100, LatticeExtent::Exclusive);
        assert_eq!(lattice.domain_size(), 100);
        assert_eq!(lattice.extent(), LatticeExtent::Exclusive);
        assert_eq!(lattice.points_per_axis(), 100);
        assert_eq!(lattice.cells_per_axis(), 99);
        assert_eq!(lattice.point_count(), 10_000);
    }

    #[test]
    fn inclusive_extent_counts() {
        let lattice = Lattice::new(40, LatticeExtent::Inclusive);
        assert_eq!(lattice.points_per_axis(), 41);
        assert_eq!(lattice.cells_per_axis(), 40);
        assert_eq!(lattice.point_count(), 41 * 41);
    }

    #[test]
    fn points_iterate_row_major() {
        let lattice = Lattice::new(2, LatticeExtent::Exclusive);
        let points: Vec<UVec2> = lattice.points().collect();
        assert_eq!(
            points,
            [
                UVec2::new(0, 0),
                UVec2::new(1, 0),
                UVec2::new(0, 1),
                UVec2::new(1, 1),
            ]
        );
    }

    #[test]
    fn smallest_exclusive_lattice_has_no_cells() {
        let lattice = Lattice::new(1, LatticeExtent::Exclusive);
        assert_eq!(lattice.cells_per_axis(), 0);
        assert_eq!(lattice.cells().count(), 0);
    }

    #[test]
    fn two_point_exclusive_lattice_is_a_single_cell() {
        let lattice = Lattice::new(2, LatticeExtent::Exclusive);
        let cells: Vec<UVec2> = lattice.cells().collect();
        assert_eq!(cells, [UVec2::ZERO]);
        assert_eq!(
            cell_corners(UVec2::ZERO),
            [
                UVec2::new(0, 0),
                UVec2::new(1, 0),
                UVec2::new(0, 1),
                UVec2::new(1, 1),
            ]
        );
    }

    #[test]
    #[should_panic]
    fn zero_domain_size_is_rejected() {
        let _ = Lattice::new(0, LatticeExtent::Inclusive);
    }
}
