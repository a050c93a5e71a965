//! Contains dense row-major storage for sampled field values.

use alloc::{vec, vec::Vec};

/// A dense scalar field, one `f32` per output pixel.
///
/// Values are stored row-major (`y * width + x`). Raw values straight out of
/// assembly lie within `[-sqrt(2), sqrt(2)]`; normalized values lie within
/// `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseField {
    width: u32,
    height: u32,
    values: Vec<f32>,
}

impl NoiseField {
    /// Creates a zero-filled field of `width` by `height` pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            values: vec![0.0; width as usize * height as usize],
        }
    }

    /// Field width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Field height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) is outside a {}x{} field",
            self.width,
            self.height
        );
        (y * self.width + x) as usize
    }

    /// The value at pixel `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the pixel lies outside the field.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.values[self.index(x, y)]
    }

    /// Writes the value at pixel `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the pixel lies outside the field.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: f32) {
        let index = self.index(x, y);
        self.values[index] = value;
    }

    /// All values in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// All values in row-major order, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.values
    }

    /// Observed `(min, max)` over all values, or `None` for an empty field.
    pub fn min_max(&self) -> Option<(f32, f32)> {
        let mut values = self.values.iter().copied();
        let first = values.next()?;
        let mut lo = first;
        let mut hi = first;
        for value in values {
            lo = lo.min(value);
            hi = hi.max(value);
        }
        Some((lo, hi))
    }
}
