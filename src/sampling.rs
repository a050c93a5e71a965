//! Contains the per-sample math that turns corner gradients into one scalar
//! and the assembly loop that fills a whole field cell by cell.
//!
//! Per-corner data always travels as fixed-size 4-element arrays in the corner
//! order established by [`cell_corners`], so arity mistakes are compile
//! errors rather than runtime checks.

use bevy_math::{Curve, FloatExt, UVec2, Vec2};

use crate::{
    field::NoiseField,
    gradients::GradientField,
    lattice::{Lattice, cell_corners},
};

/// Offset vectors pointing from each cell corner to `sample`, in corner order.
///
/// A sample sitting exactly on a corner produces a zero offset there.
#[inline]
pub fn corner_offsets(corners: [UVec2; 4], sample: Vec2) -> [Vec2; 4] {
    corners.map(|corner| sample - corner.as_vec2())
}

/// Dot product of each corner's gradient with its offset, in corner order.
#[inline]
pub fn corner_dots(gradients: [Vec2; 4], offsets: [Vec2; 4]) -> [f32; 4] {
    let [g_tl, g_tr, g_bl, g_br] = gradients;
    let [o_tl, o_tr, o_bl, o_br] = offsets;
    [g_tl.dot(o_tl), g_tr.dot(o_tr), g_bl.dot(o_bl), g_br.dot(o_br)]
}

/// Blends 4 corner dot products into one scalar with eased bilinear
/// interpolation.
///
/// `fraction` is the sample's position within its cell, each axis in `[0, 1)`.
/// Both axes are eased through `curve`, the top and bottom corner pairs are
/// mixed horizontally, then the two rows are mixed vertically. With unit
/// gradients the result stays within `[-sqrt(2), sqrt(2)]`.
#[inline]
pub fn blend_corner_dots(dots: [f32; 4], fraction: Vec2, curve: &impl Curve<f32>) -> f32 {
    let [d_tl, d_tr, d_bl, d_br] = dots;
    let eased_x = curve.sample_unchecked(fraction.x);
    let eased_y = curve.sample_unchecked(fraction.y);
    let top = d_tl.lerp(d_tr, eased_x);
    let bottom = d_bl.lerp(d_br, eased_x);
    top.lerp(bottom, eased_y)
}

/// Evaluates the raw noise value of one sub-sample inside one cell.
///
/// `gradients` are the cell's corner gradients and `fraction` is the sample
/// position relative to the cell origin at `origin`.
#[inline]
pub fn sample_cell(
    gradients: [Vec2; 4],
    origin: UVec2,
    fraction: Vec2,
    curve: &impl Curve<f32>,
) -> f32 {
    let sample = origin.as_vec2() + fraction;
    let offsets = corner_offsets(cell_corners(origin), sample);
    blend_corner_dots(corner_dots(gradients, offsets), fraction, curve)
}

/// Fills a raw field by visiting every cell of `lattice` and every sub-sample
/// inside it.
///
/// Each cell's 4 corner gradients are fetched once and reused for all of its
/// `cell_resolution * cell_resolution` sub-samples. The sub-sample at `(i, j)`
/// lands on pixel `(cell.x * cell_resolution + i, cell.y * cell_resolution + j)`,
/// so cells write disjoint pixel blocks and share no mutable state.
///
/// # Panics
///
/// Panics if `gradients` was not assigned over a lattice of the same size.
pub fn assemble(
    lattice: &Lattice,
    gradients: &GradientField,
    cell_resolution: u32,
    curve: &impl Curve<f32>,
) -> NoiseField {
    assert_eq!(
        gradients.points_per_axis(),
        lattice.points_per_axis(),
        "gradient field does not cover this lattice"
    );
    let pixels_per_axis = lattice.cells_per_axis() * cell_resolution;
    let mut field = NoiseField::new(pixels_per_axis, pixels_per_axis);
    let step = (cell_resolution as f32).recip();
    for origin in lattice.cells() {
        let cell_gradients = gradients.corner_gradients(cell_corners(origin));
        for j in 0..cell_resolution {
            for i in 0..cell_resolution {
                let fraction = Vec2::new(i as f32, j as f32) * step;
                let value = sample_cell(cell_gradients, origin, fraction, curve);
                field.set(
                    origin.x * cell_resolution + i,
                    origin.y * cell_resolution + j,
                    value,
                );
            }
        }
    }
    field
}
