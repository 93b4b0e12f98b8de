//! Writes the startup textures to disk as PNG files.

use std::path::{Path, PathBuf};

use orrery_sim::SceneTextures;
use orrery_texture::{Pixmap, TextureError};
use tracing::info;

/// File name for a body surface, e.g. `earth.png`.
pub fn surface_file_name(body: &str) -> String {
    format!("{}.png", body.to_lowercase())
}

/// Write every surface plus the shared overlays into `out_dir`.
///
/// Shared overlays are written once. Returns the written paths in order.
pub fn bake_textures(textures: &SceneTextures, out_dir: &Path) -> Result<Vec<PathBuf>, TextureError> {
    std::fs::create_dir_all(out_dir)?;
    let mut written = Vec::new();

    for body in &textures.bodies {
        written.push(write(&body.surface, out_dir, &surface_file_name(body.name))?);
    }
    if let Some(clouds) = textures.bodies.iter().find_map(|b| b.clouds.as_ref()) {
        written.push(write(clouds, out_dir, "clouds.png")?);
    }
    if let Some(ring) = textures.bodies.iter().find_map(|b| b.ring.as_ref()) {
        written.push(write(ring, out_dir, "ring.png")?);
    }
    written.push(write(&textures.sun_glow, out_dir, "sun_glow.png")?);

    info!(count = written.len(), dir = %out_dir.display(), "textures baked");
    Ok(written)
}

fn write(pixmap: &Pixmap, out_dir: &Path, file_name: &str) -> Result<PathBuf, TextureError> {
    let path = out_dir.join(file_name);
    pixmap.write_png(&path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_sim::{default_catalog, synthesize_scene};

    #[test]
    fn test_bake_writes_surfaces_and_overlays_once() {
        let dir = tempfile::tempdir().unwrap();
        let textures = synthesize_scene(&default_catalog(), 16, 8);
        let written = bake_textures(&textures, dir.path()).unwrap();

        // Eight surfaces, clouds, ring, glow.
        assert_eq!(written.len(), 11);
        for name in ["mercury.png", "earth.png", "clouds.png", "ring.png", "sun_glow.png"] {
            assert!(dir.path().join(name).is_file(), "missing {name}");
        }
        let bytes = std::fs::read(dir.path().join("earth.png")).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_bake_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let textures = synthesize_scene(&default_catalog()[..1], 8, 8);
        let written = bake_textures(&textures, &nested).unwrap();
        assert_eq!(written, vec![nested.join("mercury.png"), nested.join("sun_glow.png")]);
    }
}
