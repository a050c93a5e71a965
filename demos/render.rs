//! Renders one noise field to a grayscale PNG.
//!
//! Usage: `render [seed] [domain-size] [cell-resolution]`. Anything omitted
//! falls back to a default, and without a seed one is drawn from entropy and
//! printed so the picture can be regenerated.

use std::env;

use anyhow::{Context, Result};
use image::GrayImage;
use perlin_field::{FieldConfig, LatticeExtent, Normalization, generate_field};
use rand::{SeedableRng, rngs::StdRng};

const DOMAIN_SIZE: u32 = 40;
const CELL_RESOLUTION: u32 = 20;
const OUTPUT: &str = "perlin.png";

struct Options {
    seed: u64,
    domain_size: u32,
    cell_resolution: u32,
}

impl Options {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let seed = match args.next() {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("seed {raw:?} is not a u64"))?,
            None => rand::random(),
        };
        let domain_size = match args.next() {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("domain size {raw:?} is not a u32"))?,
            None => DOMAIN_SIZE,
        };
        let cell_resolution = match args.next() {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("cell resolution {raw:?} is not a u32"))?,
            None => CELL_RESOLUTION,
        };
        Ok(Self {
            seed,
            domain_size,
            cell_resolution,
        })
    }
}

fn main() -> Result<()> {
    let options = Options::parse(env::args().skip(1))?;

    let config = FieldConfig {
        domain_size: options.domain_size,
        cell_resolution: options.cell_resolution,
        extent: LatticeExtent::Inclusive,
        normalization: Normalization::Analytic,
    };
    let field = generate_field(&config, &mut StdRng::seed_from_u64(options.seed));

    let pixels = field
        .as_slice()
        .iter()
        .map(|value| (value * 255.0) as u8)
        .collect();
    let image = GrayImage::from_raw(field.width(), field.height(), pixels)
        .context("pixel buffer does not match the image dimensions")?;
    image.save(OUTPUT)?;

    println!(
        "wrote {OUTPUT}: {0}x{0} pixels, seed {1}",
        field.width(),
        options.seed
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_arguments_override_the_defaults() {
        let options = Options::parse(["5", "10", "4"].map(str::to_string).into_iter()).unwrap();
        assert_eq!(options.seed, 5);
        assert_eq!(options.domain_size, 10);
        assert_eq!(options.cell_resolution, 4);
    }

    #[test]
    fn omitted_sizes_fall_back_to_the_defaults() {
        let options = Options::parse(["7"].map(str::to_string).into_iter()).unwrap();
        assert_eq!(options.seed, 7);
        assert_eq!(options.domain_size, DOMAIN_SIZE);
        assert_eq!(options.cell_resolution, CELL_RESOLUTION);
    }

    #[test]
    fn garbage_arguments_are_reported() {
        assert!(Options::parse(["oops"].map(str::to_string).into_iter()).is_err());
        assert!(Options::parse(["5", "-1"].map(str::to_string).into_iter()).is_err());
    }
}
