//! Runs the animation without a window and reports what a renderer would see.

use std::collections::BTreeMap;

use orrery_sim::{KeyBindings, SceneRenderer, SimulationState};
use tracing::{debug, info};

/// A key press scheduled for a given frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptedKey {
    pub frame: u64,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("expected FRAME:KEY, got {0:?}")]
    Malformed(String),

    #[error("invalid frame number in {0:?}")]
    BadFrame(String),
}

/// Parse `"120:Space,240:KeyR"` into per-frame key presses.
pub fn parse_key_script(script: &str) -> Result<Vec<ScriptedKey>, ScriptError> {
    script
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (frame, key) = entry
                .split_once(':')
                .ok_or_else(|| ScriptError::Malformed(entry.to_string()))?;
            let frame = frame
                .trim()
                .parse()
                .map_err(|_| ScriptError::BadFrame(entry.to_string()))?;
            let key = key.trim();
            if key.is_empty() {
                return Err(ScriptError::Malformed(entry.to_string()));
            }
            Ok(ScriptedKey {
                frame,
                key: key.to_string(),
            })
        })
        .collect()
}

/// Renderer that only counts what it would draw and keeps the last HUD line.
#[derive(Debug, Default)]
pub struct LogRenderer {
    pub frames: u64,
    pub last_hud: String,
    pub labels_drawn: usize,
    pub stars_drawn: usize,
    pub orbit_lines_drawn: usize,
    /// Cloud and atmosphere shells plus ring discs.
    pub overlays_drawn: usize,
}

impl SceneRenderer for LogRenderer {
    fn render(&mut self, state: &SimulationState) {
        let scene = state.scene();
        self.frames += 1;
        self.last_hud = state.hud();
        self.labels_drawn = state.labels().len();
        self.stars_drawn = scene.stars.len();
        self.orbit_lines_drawn = scene.bodies.len();
        self.overlays_drawn = scene
            .bodies
            .iter()
            .map(|g| {
                usize::from(g.clouds.is_some())
                    + usize::from(g.atmosphere.is_some())
                    + usize::from(g.ring.is_some())
            })
            .sum();
        if self.frames % 600 == 0 {
            debug!(frame = state.frame_count(), hud = %self.last_hud, "frame");
        }
    }
}

/// Run `frames` frames, pressing scripted keys before the frame they name.
pub fn run(
    state: &mut SimulationState,
    bindings: &KeyBindings,
    frames: u64,
    script: &[ScriptedKey],
) -> LogRenderer {
    let mut presses: BTreeMap<u64, Vec<&str>> = BTreeMap::new();
    for scripted in script {
        presses.entry(scripted.frame).or_default().push(&scripted.key);
    }

    let mut renderer = LogRenderer::default();
    for frame in 0..frames {
        for key in presses.get(&frame).into_iter().flatten() {
            match state.handle_key(bindings, key) {
                Some(action) => info!(frame, key, %action, "key pressed"),
                None => debug!(frame, key, "unbound key"),
            }
        }
        state.frame(&mut renderer);
    }
    renderer
}

/// The central star followed by one line per body: name, orbital angle,
/// position and any shells or ring.
pub fn body_report(state: &SimulationState) -> Vec<String> {
    let sun = state.scene().sun;
    let mut lines = vec![format!(
        "{:<8} radius {:.1}  glow {:.0}  color #{:02x}{:02x}{:02x}",
        "Sun", sun.radius, sun.glow_scale, sun.color.r, sun.color.g, sun.color.b
    )];
    for (body, geometry) in state.bodies().iter().zip(&state.scene().bodies) {
        let p = body.position();
        let mut line = format!(
            "{:<8} angle {:>7.3} rad  pos ({:>8.2}, {:>5.2}, {:>8.2})",
            body.name(),
            body.orbital_phase(),
            p.x,
            p.y,
            p.z
        );
        if let Some(atmosphere) = geometry.atmosphere {
            line.push_str(&format!("  atmosphere r={:.2}", atmosphere.radius));
        }
        if let Some(ring) = geometry.ring {
            line.push_str(&format!(
                "  ring {:.2}..{:.2}",
                ring.inner_radius, ring.outer_radius
            ));
        }
        lines.push(line);
    }
    lines
}
