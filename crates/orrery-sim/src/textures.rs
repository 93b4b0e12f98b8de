//! Startup texture synthesis for a body catalog.

use std::sync::Arc;

use orrery_texture::{Pixmap, TextureStrategy, synthesize};
use tracing::{debug, info};

use crate::body::{BodyDescriptor, CLOUD_SEED, RING_SEED};

/// Textures for one body. Overlays are shared between every body that uses them.
#[derive(Clone, Debug)]
pub struct BodyTextures {
    pub name: &'static str,
    pub surface: Arc<Pixmap>,
    pub clouds: Option<Arc<Pixmap>>,
    pub ring: Option<Arc<Pixmap>>,
}

/// All textures the scene needs, synthesized once.
#[derive(Clone, Debug)]
pub struct SceneTextures {
    pub bodies: Vec<BodyTextures>,
    pub sun_glow: Arc<Pixmap>,
}

/// Synthesize every surface plus the shared overlays.
///
/// Cloud and ring overlays are only generated when some body needs them.
pub fn synthesize_scene(catalog: &[BodyDescriptor], size: u32, glow_size: u32) -> SceneTextures {
    let clouds = catalog
        .iter()
        .any(|d| d.clouds)
        .then(|| Arc::new(synthesize(CLOUD_SEED, &TextureStrategy::Clouds, size)));
    let ring = catalog
        .iter()
        .any(|d| d.ring)
        .then(|| Arc::new(synthesize(RING_SEED, &TextureStrategy::Ring, size)));

    let bodies = catalog
        .iter()
        .map(|d| {
            debug!(body = d.name, strategy = d.texture.label(), seed = d.seed, "synthesizing");
            BodyTextures {
                name: d.name,
                surface: Arc::new(synthesize(d.seed, &d.texture, size)),
                clouds: d.clouds.then(|| clouds.clone()).flatten(),
                ring: d.ring.then(|| ring.clone()).flatten(),
            }
        })
        .collect::<Vec<_>>();

    let sun_glow = Arc::new(synthesize(0, &TextureStrategy::Glow, glow_size));
    info!(bodies = bodies.len(), size, "textures synthesized");
    SceneTextures { bodies, sun_glow }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::default_catalog;

    #[test]
    fn test_overlays_attached_and_shared() {
        let mut catalog = default_catalog();
        catalog[0].clouds = true;
        let scene = synthesize_scene(&catalog, 32, 16);
        assert_eq!(scene.bodies.len(), 8);

        let mercury = scene.bodies[0].clouds.as_ref().unwrap();
        let earth = scene.bodies[2].clouds.as_ref().unwrap();
        assert!(Arc::ptr_eq(mercury, earth));
        assert!(scene.bodies[5].ring.is_some());
        assert!(scene.bodies[4].ring.is_none());
        assert!(scene.bodies[3].clouds.is_none());
        assert_eq!(scene.sun_glow.size(), 16);
    }

    #[test]
    fn test_scene_is_reproducible() {
        let catalog = default_catalog();
        let a = synthesize_scene(&catalog, 32, 16);
        let b = synthesize_scene(&catalog, 32, 16);
        for (x, y) in a.bodies.iter().zip(&b.bodies) {
            assert_eq!(x.surface, y.surface);
        }
    }
}
