//! The explicit simulation state and its per-frame step.

use glam::DVec3;
use orrery_config::Config;
use tracing::{debug, info, warn};

use crate::body::{Body, BodyDescriptor, default_catalog};
use crate::camera::{CameraMode, CameraRig};
use crate::controls::{Action, ControlState, KeyBindings, RunState};
use crate::scene::SceneLayout;

/// Receives the scene once per frame after the step has run.
pub trait SceneRenderer {
    fn render(&mut self, state: &SimulationState);
}

/// Outcome of one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepReport {
    /// Frame counter after this frame, counting paused frames too.
    pub frame: u64,
    /// Whether body angles moved this frame.
    pub advanced: bool,
}

/// A name label anchored at a body's world position.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub name: &'static str,
    pub position: DVec3,
}

/// Everything the orbit animator mutates, owned in one place.
#[derive(Clone, Debug)]
pub struct SimulationState {
    bodies: Vec<Body>,
    scene: SceneLayout,
    run_state: RunState,
    initial_run_state: RunState,
    camera: CameraRig,
    controls: ControlState,
    elapsed_days: f64,
    frame: u64,
}

impl SimulationState {
    /// Build the state for `catalog` using the animation and camera settings
    /// from `config`.
    pub fn new(catalog: Vec<BodyDescriptor>, config: &Config) -> Self {
        let animation = &config.animation;
        let scene = SceneLayout::new(&catalog);
        let bodies = catalog
            .into_iter()
            .map(|d| Body::new(d, animation.spin_step, animation.trail_length))
            .collect::<Vec<_>>();
        let run_state = if animation.start_paused {
            RunState::Paused
        } else {
            RunState::Running
        };
        info!(
            bodies = bodies.len(),
            ?run_state,
            spin_step = animation.spin_step,
            "simulation initialized"
        );
        Self {
            bodies,
            scene,
            run_state,
            initial_run_state: run_state,
            camera: CameraRig::from_config(&config.camera),
            controls: ControlState::from_config(animation),
            elapsed_days: 0.0,
            frame: 0,
        }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Sun, shells, rings, orbit lines and stars.
    pub fn scene(&self) -> &SceneLayout {
        &self.scene
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    /// Index of the body called `name`, if any.
    pub fn find_body(&self, name: &str) -> Option<usize> {
        self.bodies
            .iter()
            .position(|b| b.name().eq_ignore_ascii_case(name))
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_paused(&self) -> bool {
        self.run_state == RunState::Paused
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    pub fn controls(&self) -> &ControlState {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut ControlState {
        &mut self.controls
    }

    /// Simulated days elapsed since startup or the last reset.
    pub fn elapsed_days(&self) -> f64 {
        self.elapsed_days
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Advance one display refresh.
    ///
    /// The camera always updates. Body angles, elapsed time and trails only
    /// move while running.
    pub fn step(&mut self) -> StepReport {
        self.frame += 1;
        let advanced = self.run_state == RunState::Running;

        if advanced {
            let scale = self.controls.frame_scale();
            let record = self.controls.show_trails;
            for body in &mut self.bodies {
                body.advance(scale);
                if record {
                    body.record_trail();
                }
            }
            self.elapsed_days += self.controls.step_days() * self.controls.speed_multiplier();
        }

        let followed = match self.camera.mode() {
            CameraMode::Following(index) => self.bodies.get(index).map(Body::position),
            CameraMode::Free => None,
        };
        self.camera.update(followed);

        StepReport {
            frame: self.frame,
            advanced,
        }
    }

    /// Step, then hand the scene to `renderer`.
    pub fn frame(&mut self, renderer: &mut impl SceneRenderer) -> StepReport {
        let report = self.step();
        renderer.render(self);
        report
    }

    pub fn toggle_pause(&mut self) -> RunState {
        self.run_state = self.run_state.toggled();
        debug!(run_state = ?self.run_state, "pause toggled");
        self.run_state
    }

    pub fn pause(&mut self) {
        self.run_state = RunState::Paused;
    }

    pub fn resume(&mut self) {
        self.run_state = RunState::Running;
    }

    /// Return every body to its startup angles and zero the clock.
    ///
    /// Run state, sliders and camera are left alone.
    pub fn reset(&mut self) {
        for body in &mut self.bodies {
            body.restart();
        }
        self.elapsed_days = 0.0;
        info!("simulation reset");
    }

    /// Rebuild everything as at startup, including run state and camera.
    pub fn restart(&mut self) {
        self.reset();
        self.run_state = self.initial_run_state;
        self.camera.restore();
        self.frame = 0;
    }

    /// Stop following and ease back to the central body.
    pub fn recenter(&mut self) {
        self.camera.recenter();
    }

    /// Toggle following the body at `index`. Out-of-range indices are ignored.
    pub fn click_body(&mut self, index: usize) -> CameraMode {
        if index >= self.bodies.len() {
            warn!(index, bodies = self.bodies.len(), "click on unknown body");
            return self.camera.mode();
        }
        let mode = self.camera.click_body(index);
        debug!(body = self.bodies[index].name(), ?mode, "body clicked");
        mode
    }

    pub fn unfollow(&mut self) {
        self.camera.unfollow();
    }

    pub fn set_show_trails(&mut self, show: bool) {
        self.controls.show_trails = show;
        if !show {
            for body in &mut self.bodies {
                body.clear_trail();
            }
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::TogglePause => {
                self.toggle_pause();
            }
            Action::Reset => self.reset(),
            Action::Recenter => self.recenter(),
            Action::Unfollow => self.unfollow(),
            Action::ToggleTrails => self.set_show_trails(!self.controls.show_trails),
            Action::ToggleLabels => self.controls.show_labels = !self.controls.show_labels,
            Action::ToggleMutualGravity => {
                self.controls.mutual_gravity = !self.controls.mutual_gravity;
            }
            Action::ZoomIn => self.camera.zoom(-1),
            Action::ZoomOut => self.camera.zoom(1),
        }
    }

    /// Dispatch a key code through `bindings`. Returns the action taken.
    pub fn handle_key(&mut self, bindings: &KeyBindings, code: &str) -> Option<Action> {
        let action = bindings.action_for(code)?;
        self.apply(action);
        Some(action)
    }

    /// Labels to draw this frame; empty when labels are hidden.
    pub fn labels(&self) -> Vec<Label> {
        if !self.controls.show_labels {
            return Vec::new();
        }
        self.bodies
            .iter()
            .map(|b| Label {
                name: b.name(),
                position: b.position(),
            })
            .collect()
    }

    /// Heads-up display line, e.g. `time: 12 d`.
    pub fn hud(&self) -> String {
        format!("time: {:.0} d", self.elapsed_days)
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new(default_catalog(), &Config::default())
    }
}
