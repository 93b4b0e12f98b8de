//! Celestial body descriptors and their live animation state.

use std::f64::consts::TAU;

use glam::DVec3;
use orrery_texture::{Lcg, Rgb, TextureStrategy};
use tracing::warn;

use crate::trail::Trail;

/// Seed for the shared cloud overlay.
pub const CLOUD_SEED: u32 = 99;
/// Seed for the shared ring overlay.
pub const RING_SEED: u32 = 777;

/// Salt mixed into a body's seed to place its pivot at startup.
const PIVOT_SALT: u32 = 0x9e37_79b9;

/// Axial tilts cycled through by catalog index.
const AXIAL_TILTS: [f64; 3] = [0.08, -0.12, 0.18];

/// Static description of one orbiting body.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyDescriptor {
    pub name: &'static str,
    /// Sphere radius in world units.
    pub surface_radius: f64,
    /// Distance from the central star in world units.
    pub orbital_radius: f64,
    /// Pivot rotation per frame in radians at 1x speed.
    pub orbital_step: f64,
    /// Self-rotation per frame in radians; `None` uses the global spin step.
    pub spin_step: Option<f64>,
    /// Tilt of the spin axis in radians.
    pub axial_tilt: f64,
    /// Seed for the surface texture and the startup pivot angle.
    pub seed: u32,
    pub texture: TextureStrategy,
    /// Wrap the body in cloud and atmosphere shells.
    pub clouds: bool,
    /// Surround the body with a ring system.
    pub ring: bool,
}

const fn planet(
    index: usize,
    name: &'static str,
    surface_radius: f64,
    orbital_radius: f64,
    orbital_step: f64,
    seed: u32,
    texture: TextureStrategy,
) -> BodyDescriptor {
    BodyDescriptor {
        name,
        surface_radius,
        orbital_radius,
        orbital_step,
        spin_step: None,
        axial_tilt: AXIAL_TILTS[index % AXIAL_TILTS.len()],
        seed,
        texture,
        clouds: false,
        ring: false,
    }
}

const fn rock(hex: u32) -> TextureStrategy {
    TextureStrategy::Rock {
        base: Rgb::from_hex(hex),
    }
}

const fn bands(primary: u32, secondary: u32) -> TextureStrategy {
    TextureStrategy::Striped {
        primary: Rgb::from_hex(primary),
        secondary: Rgb::from_hex(secondary),
    }
}

/// The eight planets, innermost first.
pub const SOLAR_SYSTEM: [BodyDescriptor; 8] = [
    planet(0, "Mercury", 2.0, 28.0, 0.040, 1, rock(0x7e7e7e)),
    planet(1, "Venus", 3.5, 45.0, 0.015, 2, rock(0xd6b15a)),
    BodyDescriptor {
        clouds: true,
        ..planet(2, "Earth", 3.8, 65.0, 0.010, 3, TextureStrategy::Terrestrial)
    },
    planet(3, "Mars", 3.0, 85.0, 0.008, 4, rock(0xb94a2b)),
    planet(4, "Jupiter", 10.0, 130.0, 0.002, 5, bands(0xd9b38c, 0xc79c74)),
    BodyDescriptor {
        ring: true,
        ..planet(5, "Saturn", 8.5, 170.0, 0.0015, 6, bands(0xf2c88f, 0xd9b076))
    },
    planet(6, "Uranus", 6.0, 210.0, 0.0010, 7, rock(0x6fd7d7)),
    planet(7, "Neptune", 5.8, 250.0, 0.0008, 8, rock(0x2f58c9)),
];

/// The default catalog as an owned list.
pub fn default_catalog() -> Vec<BodyDescriptor> {
    SOLAR_SYSTEM.to_vec()
}

/// Live animation state of one body.
#[derive(Clone, Debug)]
pub struct Body {
    descriptor: BodyDescriptor,
    orbital_step: f64,
    spin_step: f64,
    start_orbital_angle: f64,
    orbital_angle: f64,
    spin_angle: f64,
    trail: Trail,
}

impl Body {
    /// Create a body at its startup pivot angle.
    ///
    /// `global_spin_step` applies unless the descriptor overrides it.
    /// Negative or non-finite steps are replaced by zero so angles never run
    /// backwards.
    pub fn new(descriptor: BodyDescriptor, global_spin_step: f64, trail_capacity: usize) -> Self {
        let start = startup_angle(descriptor.seed);
        let name = descriptor.name;
        Self {
            orbital_step: forward_step(name, "orbital_step", descriptor.orbital_step),
            spin_step: forward_step(
                name,
                "spin_step",
                descriptor.spin_step.unwrap_or(global_spin_step),
            ),
            descriptor,
            start_orbital_angle: start,
            orbital_angle: start,
            spin_angle: 0.0,
            trail: Trail::new(trail_capacity),
        }
    }

    pub fn descriptor(&self) -> &BodyDescriptor {
        &self.descriptor
    }

    pub fn name(&self) -> &'static str {
        self.descriptor.name
    }

    /// Accumulated pivot rotation in radians (not wrapped).
    pub fn orbital_angle(&self) -> f64 {
        self.orbital_angle
    }

    /// Pivot rotation wrapped into `[0, TAU)`.
    pub fn orbital_phase(&self) -> f64 {
        self.orbital_angle.rem_euclid(TAU)
    }

    /// Pivot rotation at startup.
    pub fn start_orbital_angle(&self) -> f64 {
        self.start_orbital_angle
    }

    /// Accumulated self-rotation in radians.
    pub fn spin_angle(&self) -> f64 {
        self.spin_angle
    }

    /// Pivot rotation per frame at 1x, after validation.
    pub fn orbital_step(&self) -> f64 {
        self.orbital_step
    }

    pub fn spin_step(&self) -> f64 {
        self.spin_step
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// World position: the pivot rotates `+X * orbital_radius` about `+Y`.
    pub fn position(&self) -> DVec3 {
        let (sin, cos) = self.orbital_angle.sin_cos();
        DVec3::new(cos, 0.0, -sin) * self.descriptor.orbital_radius
    }

    /// Closed polyline of this body's orbit with `segments` segments.
    pub fn orbit_line(&self, segments: u32) -> Vec<DVec3> {
        orbit_line(self.descriptor.orbital_radius, segments)
    }

    /// Advance both angles by one frame scaled by `scale`.
    pub(crate) fn advance(&mut self, scale: f64) {
        self.orbital_angle += self.orbital_step * scale;
        self.spin_angle += self.spin_step * scale;
    }

    pub(crate) fn record_trail(&mut self) {
        let position = self.position();
        self.trail.push(position);
    }

    pub(crate) fn clear_trail(&mut self) {
        self.trail.clear();
    }

    /// Return to the startup pivot angle with zero spin.
    pub(crate) fn restart(&mut self) {
        self.orbital_angle = self.start_orbital_angle;
        self.spin_angle = 0.0;
        self.trail.clear();
    }
}

/// Points on a circle of `radius` in the orbital plane, first point repeated
/// at the end. Uses the same angle convention as [`Body::position`].
pub fn orbit_line(radius: f64, segments: u32) -> Vec<DVec3> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| {
            let (sin, cos) = (f64::from(i) / f64::from(segments) * TAU).sin_cos();
            DVec3::new(cos, 0.0, -sin) * radius
        })
        .collect()
}

fn forward_step(body: &str, field: &str, step: f64) -> f64 {
    if step.is_finite() && step >= 0.0 {
        step
    } else {
        warn!(body, field, step, "step must be a non-negative number; using 0");
        0.0
    }
}

/// Deterministic startup pivot angle in `[0, TAU)` derived from a body seed.
pub fn startup_angle(seed: u32) -> f64 {
    Lcg::new(seed ^ PIVOT_SALT).next_f64() * TAU
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ordered_by_distance() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 8);
        for pair in catalog.windows(2) {
            assert!(pair[0].orbital_radius < pair[1].orbital_radius);
        }
    }

    #[test]
    fn test_only_earth_has_clouds_only_saturn_has_ring() {
        let catalog = default_catalog();
        let clouds: Vec<_> = catalog.iter().filter(|b| b.clouds).map(|b| b.name).collect();
        let rings: Vec<_> = catalog.iter().filter(|b| b.ring).map(|b| b.name).collect();
        assert_eq!(clouds, ["Earth"]);
        assert_eq!(rings, ["Saturn"]);
        assert_eq!(catalog[2].texture, TextureStrategy::Terrestrial);
        assert_eq!(catalog[2].seed, 3);
    }

    #[test]
    fn test_axial_tilt_cycles() {
        let catalog = default_catalog();
        assert_eq!(catalog[0].axial_tilt, 0.08);
        assert_eq!(catalog[1].axial_tilt, -0.12);
        assert_eq!(catalog[2].axial_tilt, 0.18);
        assert_eq!(catalog[3].axial_tilt, 0.08);
    }

    #[test]
    fn test_startup_angle_deterministic_and_in_range() {
        for seed in 1..=8 {
            let a = startup_angle(seed);
            assert_eq!(a, startup_angle(seed));
            assert!((0.0..TAU).contains(&a));
        }
        assert_ne!(startup_angle(1), startup_angle(2));
    }

    #[test]
    fn test_position_lies_on_orbit() {
        let mut body = Body::new(SOLAR_SYSTEM[4].clone(), 0.02, 10);
        for _ in 0..100 {
            body.advance(1.0);
            let p = body.position();
            assert!((p.length() - 130.0).abs() < 1e-9);
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn test_spin_override() {
        let descriptor = BodyDescriptor {
            spin_step: Some(0.5),
            ..SOLAR_SYSTEM[0].clone()
        };
        let body = Body::new(descriptor, 0.02, 0);
        assert_eq!(body.spin_step(), 0.5);
        assert_eq!(Body::new(SOLAR_SYSTEM[0].clone(), 0.02, 0).spin_step(), 0.02);
    }

    #[test]
    fn test_negative_steps_are_clamped_to_zero() {
        let descriptor = BodyDescriptor {
            orbital_step: -0.5,
            ..SOLAR_SYSTEM[0].clone()
        };
        let mut body = Body::new(descriptor, -0.02, 0);
        assert_eq!(body.orbital_step(), 0.0);
        assert_eq!(body.spin_step(), 0.0);
        body.advance(1.0);
        assert_eq!(body.orbital_angle(), body.start_orbital_angle());
        assert_eq!(body.spin_angle(), 0.0);

        let nan = Body::new(SOLAR_SYSTEM[1].clone(), f64::NAN, 0);
        assert_eq!(nan.spin_step(), 0.0);
    }

    #[test]
    fn test_tilt_follows_catalog_index_not_seed() {
        const ZERO_SEED: BodyDescriptor = planet(4, "Test", 1.0, 10.0, 0.01, 0, rock(0x000000));
        assert_eq!(ZERO_SEED.axial_tilt, -0.12);
        for (index, body) in SOLAR_SYSTEM.iter().enumerate() {
            assert_eq!(body.axial_tilt, AXIAL_TILTS[index % 3]);
        }
    }

    #[test]
    fn test_orbit_line_is_closed_circle() {
        let body = Body::new(SOLAR_SYSTEM[2].clone(), 0.02, 0);
        let line = body.orbit_line(180);
        assert_eq!(line.len(), 181);
        assert!(line[0].distance(line[180]) < 1e-9);
        assert!(line.iter().all(|p| (p.length() - 65.0).abs() < 1e-9 && p.y == 0.0));
        // A quarter turn lands where the body would after a quarter revolution.
        assert!(line[45].distance(DVec3::new(0.0, 0.0, -65.0)) < 1e-9);
    }

    #[test]
    fn test_restart_restores_startup() {
        let mut body = Body::new(SOLAR_SYSTEM[0].clone(), 0.02, 4);
        body.advance(1.0);
        body.record_trail();
        body.restart();
        assert_eq!(body.orbital_angle(), body.start_orbital_angle());
        assert_eq!(body.spin_angle(), 0.0);
        assert!(body.trail().is_empty());
    }
}
