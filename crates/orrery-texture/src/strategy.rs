//! Procedural surface strategies.
//!
//! Each strategy is a pure function of `(seed, strategy, size)`: the same
//! inputs always produce a pixel-identical [`Pixmap`].

use std::f64::consts::{PI, TAU};

use crate::color::Rgb;
use crate::lcg::Lcg;
use crate::pixmap::Pixmap;
use crate::raster::{RadialGradient, fill_ellipse, fill_radial, stroke_circle};

/// Noise amplitude for rocky bodies (±30).
pub const ROCK_NOISE: f64 = 60.0;
/// Noise amplitude for banded gas giants (±15).
pub const STRIPE_NOISE: f64 = 30.0;
/// Noise amplitude for the land-over-ocean composition (±9).
pub const TERRESTRIAL_NOISE: f64 = 18.0;

/// Number of latitude bands across the texture height.
const STRIPE_FREQUENCY: f64 = 10.0;
/// Maximum random phase shift per row, in radians.
const STRIPE_JITTER: f64 = 2.0;

const OCEAN: Rgb = Rgb::from_hex(0x1a3b8f);
const ICE_CAP: Rgb = Rgb::new(240, 240, 255);
const LAND_PATCHES: u32 = 230;
const LAND_ALPHA: f32 = 0.85;
const CAP_ALPHA: f32 = 0.95;
/// Cap center distance from the top/bottom edge as a fraction of size.
const CAP_OFFSET: f64 = 0.03;
/// Cap gradient radius as a fraction of size.
const CAP_RADIUS: f64 = 0.18;

const CLOUD_PUFFS: u32 = 650;
const RING_BANDS: u32 = 230;
/// Outermost ring band radius as a fraction of size.
const RING_EXTENT: f64 = 0.48;
const RING_LINE_WIDTH: f64 = 2.0;
/// Full width of the per-band alpha jitter (±0.01).
const RING_ALPHA_JITTER: f64 = 0.02;

/// How a body's surface texture is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureStrategy {
    /// Flat base color with strong per-pixel noise.
    Rock { base: Rgb },
    /// Horizontal sine bands alternating between two colors, then light noise.
    Striped { primary: Rgb, secondary: Rgb },
    /// Land patches over ocean with polar ice caps, then faint noise.
    Terrestrial,
    /// Soft white puffs on a transparent canvas.
    Clouds,
    /// Concentric faint grey bands on a transparent canvas.
    Ring,
    /// Warm radial halo sprite on a transparent canvas.
    Glow,
}

impl TextureStrategy {
    /// Short identifier, used for file names and log fields.
    pub fn label(&self) -> &'static str {
        match self {
            TextureStrategy::Rock { .. } => "rock",
            TextureStrategy::Striped { .. } => "striped",
            TextureStrategy::Terrestrial => "terrestrial",
            TextureStrategy::Clouds => "clouds",
            TextureStrategy::Ring => "ring",
            TextureStrategy::Glow => "glow",
        }
    }
}

/// Generate a `size x size` texture for `strategy` driven by `seed`.
pub fn synthesize(seed: u32, strategy: &TextureStrategy, size: u32) -> Pixmap {
    if size == 0 {
        return Pixmap::new(0);
    }
    let mut rng = Lcg::new(seed);
    match *strategy {
        TextureStrategy::Rock { base } => rock(&mut rng, base, size),
        TextureStrategy::Striped { primary, secondary } => {
            striped(&mut rng, primary, secondary, size)
        }
        TextureStrategy::Terrestrial => terrestrial(&mut rng, size),
        TextureStrategy::Clouds => clouds(&mut rng, size),
        TextureStrategy::Ring => ring(&mut rng, size),
        TextureStrategy::Glow => glow(size),
    }
}

fn rock(rng: &mut Lcg, base: Rgb, size: u32) -> Pixmap {
    let mut pixmap = Pixmap::filled(size, base);
    pixmap.apply_noise(rng, ROCK_NOISE);
    pixmap
}

fn striped(rng: &mut Lcg, primary: Rgb, secondary: Rgb, size: u32) -> Pixmap {
    let mut pixmap = Pixmap::new(size);
    let n = f64::from(size);
    for y in 0..size {
        let t = f64::from(y) / n;
        let band = (t * TAU * STRIPE_FREQUENCY + rng.next_f64() * STRIPE_JITTER).sin() * 0.5 + 0.5;
        pixmap.fill_row(y, if band > 0.5 { primary } else { secondary });
    }
    pixmap.apply_noise(rng, STRIPE_NOISE);
    pixmap
}

fn terrestrial(rng: &mut Lcg, size: u32) -> Pixmap {
    let mut pixmap = Pixmap::filled(size, OCEAN);
    let n = f64::from(size);

    for _ in 0..LAND_PATCHES {
        let x = rng.next_f64() * n;
        let y = rng.next_f64() * n;
        let rx = rng.span(20.0, 90.0);
        let ry = rng.span(12.0, 70.0);
        let land = Rgb::new(
            40 + (rng.next_f64() * 60.0) as u8,
            120 + (rng.next_f64() * 80.0) as u8,
            40 + (rng.next_f64() * 40.0) as u8,
        );
        let rotation = rng.next_f64() * PI;
        fill_ellipse(&mut pixmap, x, y, rx, ry, rotation, land.with_alpha(LAND_ALPHA));
    }

    for cy in [n * CAP_OFFSET, n * (1.0 - CAP_OFFSET)] {
        let cap = RadialGradient::new(n * 0.5, cy, n * CAP_RADIUS)
            .with_stop(0.0, ICE_CAP.with_alpha(CAP_ALPHA))
            .with_stop(1.0, ICE_CAP.with_alpha(0.0));
        fill_radial(&mut pixmap, &cap);
    }

    pixmap.apply_noise(rng, TERRESTRIAL_NOISE);
    pixmap
}

fn clouds(rng: &mut Lcg, size: u32) -> Pixmap {
    let mut pixmap = Pixmap::new(size);
    let n = f64::from(size);
    let white = Rgb::new(255, 255, 255);

    for _ in 0..CLOUD_PUFFS {
        let x = rng.next_f64() * n;
        let y = rng.next_f64() * n;
        let radius = rng.span(6.0, 26.0);
        let alpha = rng.span(0.04, 0.08) as f32;
        let puff = RadialGradient::new(x, y, radius)
            .with_stop(0.0, white.with_alpha(alpha))
            .with_stop(1.0, white.with_alpha(0.0));
        fill_radial(&mut pixmap, &puff);
    }
    pixmap
}

fn ring(rng: &mut Lcg, size: u32) -> Pixmap {
    let mut pixmap = Pixmap::new(size);
    let n = f64::from(size);
    let center = n / 2.0;

    for i in 0..RING_BANDS {
        let rad = f64::from(i) / f64::from(RING_BANDS);
        let alpha = (0.07 + (1.0 - rad) * 0.25 + rng.centered(RING_ALPHA_JITTER)).max(0.0);
        let gray = (160.0 + rng.centered(30.0).floor()) as u8;
        stroke_circle(
            &mut pixmap,
            center,
            center,
            rad * n * RING_EXTENT,
            RING_LINE_WIDTH,
            Rgb::new(gray, gray, gray).with_alpha(alpha as f32),
        );
    }
    pixmap
}

fn glow(size: u32) -> Pixmap {
    let mut pixmap = Pixmap::new(size);
    let half = f64::from(size) / 2.0;
    let halo = RadialGradient::new(half, half, half)
        .with_stop(0.0, Rgb::new(255, 200, 90).with_alpha(1.0))
        .with_stop(0.35, Rgb::new(255, 140, 30).with_alpha(0.5))
        .with_stop(1.0, Rgb::new(0, 0, 0).with_alpha(0.0));
    fill_radial(&mut pixmap, &halo);
    pixmap
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: u32 = 128;

    fn all_strategies() -> Vec<TextureStrategy> {
        vec![
            TextureStrategy::Rock {
                base: Rgb::from_hex(0x7e7e7e),
            },
            TextureStrategy::Striped {
                primary: Rgb::from_hex(0xd9b38c),
                secondary: Rgb::from_hex(0xc79c74),
            },
            TextureStrategy::Terrestrial,
            TextureStrategy::Clouds,
            TextureStrategy::Ring,
            TextureStrategy::Glow,
        ]
    }

    #[test]
    fn test_same_seed_is_pixel_identical() {
        for strategy in all_strategies() {
            let a = synthesize(3, &strategy, SIZE);
            let b = synthesize(3, &strategy, SIZE);
            assert_eq!(a, b, "{} not deterministic", strategy.label());
        }
    }

    #[test]
    fn test_different_seed_changes_noisy_output() {
        let rock = TextureStrategy::Rock {
            base: Rgb::from_hex(0xb94a2b),
        };
        assert_ne!(synthesize(1, &rock, SIZE), synthesize(2, &rock, SIZE));
        assert_ne!(
            synthesize(1, &TextureStrategy::Terrestrial, SIZE),
            synthesize(2, &TextureStrategy::Terrestrial, SIZE)
        );
    }

    #[test]
    fn test_output_is_requested_size() {
        for strategy in all_strategies() {
            let pixmap = synthesize(9, &strategy, 64);
            assert_eq!(pixmap.size(), 64);
            assert_eq!(pixmap.as_bytes().len(), 64 * 64 * 4);
        }
    }

    #[test]
    fn test_zero_size_is_empty() {
        let pixmap = synthesize(1, &TextureStrategy::Terrestrial, 0);
        assert!(pixmap.as_bytes().is_empty());
    }

    #[test]
    fn test_rock_noise_stays_within_amplitude() {
        let base = Rgb::new(128, 128, 128);
        let pixmap = synthesize(1, &TextureStrategy::Rock { base }, SIZE);
        for px in pixmap.as_bytes().chunks_exact(4) {
            assert!((98..=158).contains(&px[0]), "channel {} out of ±30", px[0]);
            assert_eq!(px[0], px[1]);
            assert_eq!(px[1], px[2]);
            assert_eq!(px[3], 255);
        }
        assert!(pixmap.unique_color_count() > 30);
    }

    #[test]
    fn test_rock_near_white_clamps_instead_of_wrapping() {
        let base = Rgb::new(250, 250, 250);
        let pixmap = synthesize(4, &TextureStrategy::Rock { base }, SIZE);
        let dark = pixmap.as_bytes().chunks_exact(4).filter(|px| px[0] < 200).count();
        assert_eq!(dark, 0, "noise wrapped around instead of clamping");
        assert!(pixmap.as_bytes().chunks_exact(4).any(|px| px[0] == 255));
    }

    #[test]
    fn test_striped_uses_both_band_colors() {
        let primary = Rgb::new(200, 50, 50);
        let secondary = Rgb::new(50, 50, 200);
        let pixmap = synthesize(5, &TextureStrategy::Striped { primary, secondary }, SIZE);
        let rows_red = (0..SIZE)
            .filter(|&y| pixmap.mean_region(0, y, SIZE, y + 1)[0] > 125.0)
            .count();
        assert!(rows_red > SIZE as usize / 4, "only {rows_red} primary rows");
        assert!(rows_red < SIZE as usize * 3 / 4, "{rows_red} primary rows");
    }

    #[test]
    fn test_terrestrial_seed_three_has_polar_caps() {
        let n = 512;
        let pixmap = synthesize(3, &TextureStrategy::Terrestrial, n);
        let x0 = n / 2 - n / 20;
        let x1 = n / 2 + n / 20;
        let top = pixmap.mean_region(x0, 0, x1, n / 32);
        let bottom = pixmap.mean_region(x0, n - n / 32, x1, n);
        let middle = pixmap.mean_region(x0, n / 2 - n / 64, x1, n / 2 + n / 64);
        assert!(top[2] > middle[2] + 50.0, "top {top:?} middle {middle:?}");
        assert!(bottom[2] > middle[2] + 50.0, "bottom {bottom:?} middle {middle:?}");
        assert!(top[0] > 180.0 && bottom[0] > 180.0);
    }

    #[test]
    fn test_terrestrial_has_land_over_ocean() {
        let n = 512;
        let pixmap = synthesize(3, &TextureStrategy::Terrestrial, n);
        let band = pixmap.mean_region(0, n / 4, n, 3 * n / 4);
        // Land patches are green-dominant; the ocean is blue-dominant.
        assert!(band[1] > band[2], "equator band {band:?}");
        assert!(pixmap.as_bytes().chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn test_clouds_are_translucent_white() {
        let pixmap = synthesize(99, &TextureStrategy::Clouds, 256);
        let covered: Vec<&[u8]> = pixmap
            .as_bytes()
            .chunks_exact(4)
            .filter(|px| px[3] > 0)
            .collect();
        assert!(covered.len() > 256 * 256 / 2, "clouds too sparse");
        assert!(covered.iter().all(|px| px[0] == 255 && px[1] == 255 && px[2] == 255));
        assert!(covered.iter().all(|px| px[3] < 255));
    }

    #[test]
    fn test_ring_is_hollow_outside_extent() {
        let n = 256;
        let pixmap = synthesize(777, &TextureStrategy::Ring, n);
        assert_eq!(pixmap.get_pixel(0, 0)[3], 0);
        assert_eq!(pixmap.get_pixel(n - 1, n / 2)[3], 0);
        assert!(pixmap.get_pixel(n / 2 + n / 4, n / 2)[3] > 0);
        for px in pixmap.as_bytes().chunks_exact(4).filter(|px| px[3] > 0) {
            assert!((145..=175).contains(&px[0]), "ring gray {}", px[0]);
        }
    }

    #[test]
    fn test_ring_band_alpha_follows_formula() {
        let n = 1024;
        let pixmap = synthesize(777, &TextureStrategy::Ring, n);
        let center = n / 2;
        let mut rng = Lcg::new(777);
        for i in 0..RING_BANDS {
            let rad = f64::from(i) / f64::from(RING_BANDS);
            let expected = (0.07 + (1.0 - rad) * 0.25 + (rng.next_f64() - 0.5) * 0.02).max(0.0);
            let gray = (160.0 + ((rng.next_f64() - 0.5) * 30.0).floor()) as u8;
            if i == 0 {
                continue;
            }
            // Bands are further apart than their width, so this pixel sees one band only.
            let x = center + (rad * f64::from(n) * RING_EXTENT).floor() as u32;
            let px = pixmap.get_pixel(x, center);
            assert_eq!(px[0], gray, "band {i}");
            let alpha = f64::from(px[3]) / 255.0;
            assert!(
                (alpha - expected).abs() <= 0.5 / 255.0 + 1e-6,
                "band {i}: alpha {alpha} expected {expected}"
            );
        }
    }

    #[test]
    fn test_glow_is_bright_center_dark_corner() {
        let pixmap = synthesize(0, &TextureStrategy::Glow, 128);
        let center = pixmap.get_pixel(64, 64);
        assert!(center[3] > 240);
        assert_eq!(center[0], 255);
        assert_eq!(pixmap.get_pixel(0, 0)[3], 0);
    }
}
