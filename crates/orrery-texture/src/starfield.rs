//! Deterministic background starfield: point positions inside a cube with
//! three color classes and randomized brightness.

use glam::Vec3;

use crate::lcg::Lcg;

/// Seed used for the default sky.
pub const DEFAULT_STAR_SEED: u32 = 12_345;
/// Number of stars in the default sky.
pub const DEFAULT_STAR_COUNT: u32 = 12_000;
/// Edge length of the cube stars are scattered in.
pub const DEFAULT_STAR_EXTENT: f32 = 2_600.0;

const BLUE_WHITE: [f32; 3] = [0xaa as f32 / 255.0, 0xbf as f32 / 255.0, 1.0];
const YELLOW_WHITE: [f32; 3] = [1.0, 0xe1 as f32 / 255.0, 0xb5 as f32 / 255.0];
const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

/// A single star in the background catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct StarPoint {
    /// Position in world units, centered on the origin.
    pub position: Vec3,
    /// Linear RGB already scaled by brightness; may exceed 1.0 for bright stars.
    pub color: [f32; 3],
    /// Brightness multiplier in `[0.6, 1.4)`.
    pub brightness: f32,
}

/// Generates a deterministic catalog of stars from a seed.
pub struct StarfieldGenerator {
    seed: u32,
    star_count: u32,
    extent: f32,
}

impl StarfieldGenerator {
    /// Create a new generator with the given seed, star count and cube extent.
    pub fn new(seed: u32, star_count: u32, extent: f32) -> Self {
        Self {
            seed,
            star_count,
            extent,
        }
    }

    /// Generate the star catalog. Deterministic for a given seed.
    pub fn generate(&self) -> Vec<StarPoint> {
        let mut rng = Lcg::new(self.seed);
        let extent = f64::from(self.extent);
        let mut stars = Vec::with_capacity(self.star_count as usize);

        for _ in 0..self.star_count {
            let position = Vec3::new(
                rng.centered(extent) as f32,
                rng.centered(extent) as f32,
                rng.centered(extent) as f32,
            );

            let class = rng.next_f64();
            let base = if class > 0.85 {
                BLUE_WHITE
            } else if class > 0.70 {
                YELLOW_WHITE
            } else {
                WHITE
            };

            let brightness = rng.span(0.6, 0.8) as f32;
            stars.push(StarPoint {
                position,
                color: base.map(|c| c * brightness),
                brightness,
            });
        }

        stars
    }
}

impl Default for StarfieldGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_STAR_SEED, DEFAULT_STAR_COUNT, DEFAULT_STAR_EXTENT)
    }
}
