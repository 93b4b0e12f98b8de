//! Static scene geometry drawn around the animated bodies: the central star,
//! per-body shells and rings, orbit lines and the background starfield.
//!
//! Built once from the catalog. Renderers read it through
//! [`SimulationState::scene`](crate::SimulationState::scene).

use std::sync::Arc;

use glam::DVec3;
use orrery_texture::starfield::{
    DEFAULT_STAR_COUNT, DEFAULT_STAR_EXTENT, DEFAULT_STAR_SEED, StarfieldGenerator,
};
use orrery_texture::{Rgb, StarPoint};
use tracing::debug;

use crate::body::{BodyDescriptor, orbit_line};

/// Radius of the central star.
pub const SUN_RADIUS: f64 = 15.0;
/// Flat color of the central star.
pub const SUN_COLOR: Rgb = Rgb::from_hex(0xffb14a);
/// World-space edge length of the sun glow sprite.
pub const SUN_GLOW_SCALE: f64 = 140.0;

/// Cloud shell radius relative to the surface.
pub const CLOUD_SHELL_SCALE: f64 = 1.02;
pub const CLOUD_OPACITY: f32 = 0.85;
/// Atmosphere shell radius relative to the surface.
pub const ATMOSPHERE_SHELL_SCALE: f64 = 1.06;
pub const ATMOSPHERE_COLOR: Rgb = Rgb::from_hex(0x6cc6ff);
pub const ATMOSPHERE_OPACITY: f32 = 0.10;
/// Inner and outer ring radii relative to the surface.
pub const RING_RADII_SCALE: (f64, f64) = (1.35, 2.25);
pub const RING_OPACITY: f32 = 0.95;

/// Segments per orbit line.
pub const ORBIT_SEGMENTS: u32 = 180;
pub const ORBIT_OPACITY: f32 = 0.12;

/// The central star.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sun {
    pub radius: f64,
    pub color: Rgb,
    /// Edge length of the additive glow sprite.
    pub glow_scale: f64,
}

/// A translucent sphere wrapped around a body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shell {
    pub radius: f64,
    pub color: Rgb,
    pub opacity: f32,
}

/// A flat ring in the body's equatorial plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingDisc {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub opacity: f32,
}

/// Faint circle marking a body's path.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitLine {
    pub points: Vec<DVec3>,
    pub opacity: f32,
}

/// Everything about a body that does not change frame to frame.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyGeometry {
    pub name: &'static str,
    pub surface_radius: f64,
    pub axial_tilt: f64,
    pub clouds: Option<Shell>,
    pub atmosphere: Option<Shell>,
    pub ring: Option<RingDisc>,
    pub orbit: OrbitLine,
}

impl BodyGeometry {
    pub fn from_descriptor(descriptor: &BodyDescriptor) -> Self {
        let size = descriptor.surface_radius;
        let (clouds, atmosphere) = if descriptor.clouds {
            (
                Some(Shell {
                    radius: size * CLOUD_SHELL_SCALE,
                    color: Rgb::new(255, 255, 255),
                    opacity: CLOUD_OPACITY,
                }),
                Some(Shell {
                    radius: size * ATMOSPHERE_SHELL_SCALE,
                    color: ATMOSPHERE_COLOR,
                    opacity: ATMOSPHERE_OPACITY,
                }),
            )
        } else {
            (None, None)
        };
        let ring = descriptor.ring.then(|| RingDisc {
            inner_radius: size * RING_RADII_SCALE.0,
            outer_radius: size * RING_RADII_SCALE.1,
            opacity: RING_OPACITY,
        });
        Self {
            name: descriptor.name,
            surface_radius: size,
            axial_tilt: descriptor.axial_tilt,
            clouds,
            atmosphere,
            ring,
            orbit: OrbitLine {
                points: orbit_line(descriptor.orbital_radius, ORBIT_SEGMENTS),
                opacity: ORBIT_OPACITY,
            },
        }
    }
}

/// The static half of the scene.
#[derive(Clone, Debug)]
pub struct SceneLayout {
    pub sun: Sun,
    pub bodies: Vec<BodyGeometry>,
    /// Shared so cloning a simulation does not copy the catalog.
    pub stars: Arc<[StarPoint]>,
}

impl SceneLayout {
    /// Layout for `catalog` with the default starfield.
    pub fn new(catalog: &[BodyDescriptor]) -> Self {
        let stars = StarfieldGenerator::new(DEFAULT_STAR_SEED, DEFAULT_STAR_COUNT, DEFAULT_STAR_EXTENT)
            .generate();
        Self::with_stars(catalog, stars)
    }

    pub fn with_stars(catalog: &[BodyDescriptor], stars: Vec<StarPoint>) -> Self {
        debug!(bodies = catalog.len(), stars = stars.len(), "scene layout built");
        Self {
            sun: Sun {
                radius: SUN_RADIUS,
                color: SUN_COLOR,
                glow_scale: SUN_GLOW_SCALE,
            },
            bodies: catalog.iter().map(BodyGeometry::from_descriptor).collect(),
            stars: stars.into(),
        }
    }
}
