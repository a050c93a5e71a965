#![no_std]
#![allow(
    clippy::doc_markdown,
    reason = "These rules should not apply to the readme."
)]
#![doc = include_str!("../README.md")]

extern crate alloc;

pub mod curves;
pub mod field;
pub mod gradients;
pub mod lattice;
pub mod normalize;
pub mod sampling;

use rand::Rng;

pub use crate::{field::NoiseField, lattice::LatticeExtent, normalize::Normalization};
use crate::{
    curves::Smootherstep,
    gradients::GradientField,
    lattice::Lattice,
    normalize::normalize_field,
    sampling::assemble,
};

/// Everything needed to describe one field generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct FieldConfig {
    /// Domain size in lattice units per axis. Must be positive.
    pub domain_size: u32,
    /// Sub-samples per cell axis, so every cell contributes a square of
    /// `cell_resolution * cell_resolution` pixels. Must be positive.
    pub cell_resolution: u32,
    /// How far the gradient lattice extends relative to `domain_size`.
    pub extent: LatticeExtent,
    /// How the raw field is mapped onto `[0, 1]`.
    pub normalization: Normalization,
}

impl FieldConfig {
    /// Creates a config with the default extent and normalization.
    pub fn new(domain_size: u32, cell_resolution: u32) -> Self {
        Self {
            domain_size,
            cell_resolution,
            extent: LatticeExtent::default(),
            normalization: Normalization::default(),
        }
    }

    /// The lattice this config spans.
    ///
    /// # Panics
    ///
    /// Panics if [`FieldConfig::domain_size`] is 0.
    pub fn lattice(&self) -> Lattice {
        Lattice::new(self.domain_size, self.extent)
    }

    /// Output field width and height in pixels.
    ///
    /// # Panics
    ///
    /// Panics if [`FieldConfig::domain_size`] is 0.
    pub fn pixels_per_axis(&self) -> u32 {
        self.lattice().cells_per_axis() * self.cell_resolution
    }
}

/// Generates the raw, unnormalized noise field described by `config`, drawing
/// all randomness from `rng`.
///
/// The pipeline builds the lattice, assigns one random unit gradient per
/// lattice point, then blends corner contributions for every sub-sample of
/// every cell. Raw values lie within `[-sqrt(2), sqrt(2)]`. The source is
/// consumed sequentially, so two identically seeded sources produce identical
/// fields.
///
/// # Panics
///
/// Panics if `config.domain_size` or `config.cell_resolution` is 0.
pub fn generate_raw_field(config: &FieldConfig, rng: &mut impl Rng) -> NoiseField {
    assert!(
        config.cell_resolution > 0,
        "a cell needs a positive sub-sample resolution"
    );
    let lattice = config.lattice();
    let gradients = GradientField::assign(&lattice, rng);
    assemble(&lattice, &gradients, config.cell_resolution, &Smootherstep)
}

/// Generates the noise field described by `config` and maps it onto `[0, 1]`
/// with the configured normalization policy.
///
/// # Panics
///
/// Panics if `config.domain_size` or `config.cell_resolution` is 0.
pub fn generate_field(config: &FieldConfig, rng: &mut impl Rng) -> NoiseField {
    let mut field = generate_raw_field(config, rng);
    normalize_field(&mut field, config.normalization);
    field
}
