//! Orbit camera with a Free / Following state machine.
//!
//! The camera orbits a look-at target. In [`CameraMode::Following`] the
//! target eases toward the followed body every frame and the eye is carried
//! along with it, so the viewing offset is preserved. Camera updates run
//! whether or not the animation is paused.

use glam::DVec3;
use orrery_config::CameraConfig;

/// What the camera is looking at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CameraMode {
    /// User-driven; the target eases toward a fixed anchor.
    #[default]
    Free,
    /// Tracks the body at this catalog index.
    Following(usize),
}

/// Orbit-style camera rig.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraRig {
    mode: CameraMode,
    eye: DVec3,
    target: DVec3,
    anchor: DVec3,
    min_distance: f64,
    max_distance: f64,
    damping: f64,
    zoom_factor: f64,
    start_eye: DVec3,
}

impl CameraRig {
    pub fn from_config(config: &CameraConfig) -> Self {
        let eye = DVec3::from_array(config.start_position);
        let min_distance = config.min_distance.max(f64::EPSILON);
        let mut rig = Self {
            mode: CameraMode::Free,
            eye,
            target: DVec3::ZERO,
            anchor: DVec3::ZERO,
            min_distance,
            max_distance: config.max_distance.max(min_distance),
            damping: config.damping.clamp(0.0, 1.0),
            zoom_factor: config.zoom_factor.max(1.0),
            start_eye: eye,
        };
        rig.clamp_distance();
        rig
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn eye(&self) -> DVec3 {
        self.eye
    }

    pub fn target(&self) -> DVec3 {
        self.target
    }

    /// Distance from eye to target.
    pub fn distance(&self) -> f64 {
        self.eye.distance(self.target)
    }

    /// Toggle following the body at `index`.
    ///
    /// Clicking the followed body releases it; clicking another switches.
    pub fn click_body(&mut self, index: usize) -> CameraMode {
        self.mode = match self.mode {
            CameraMode::Following(current) if current == index => {
                self.anchor = self.target;
                CameraMode::Free
            }
            _ => CameraMode::Following(index),
        };
        self.mode
    }

    /// Stop following and hold the current target.
    pub fn unfollow(&mut self) {
        if let CameraMode::Following(_) = self.mode {
            self.anchor = self.target;
        }
        self.mode = CameraMode::Free;
    }

    /// Stop following and ease back to the central body.
    pub fn recenter(&mut self) {
        self.mode = CameraMode::Free;
        self.anchor = DVec3::ZERO;
    }

    /// Restore the startup eye position and target.
    pub fn restore(&mut self) {
        self.mode = CameraMode::Free;
        self.eye = self.start_eye;
        self.target = DVec3::ZERO;
        self.anchor = DVec3::ZERO;
        self.clamp_distance();
    }

    /// Multiply the viewing distance by `zoom_factor^notches`, clamped.
    ///
    /// Positive notches move away, negative notches move closer.
    pub fn zoom(&mut self, notches: i32) {
        let offset = self.eye - self.target;
        let scaled = offset * self.zoom_factor.powi(notches);
        self.eye = self.target + scaled;
        self.clamp_distance();
    }

    /// Ease toward the current goal. `followed` is the followed body's
    /// position, if any.
    pub fn update(&mut self, followed: Option<DVec3>) {
        let goal = match (self.mode, followed) {
            (CameraMode::Following(_), Some(position)) => position,
            _ => self.anchor,
        };
        let delta = (goal - self.target) * self.damping;
        self.target += delta;
        self.eye += delta;
        self.clamp_distance();
    }

    fn clamp_distance(&mut self) {
        let offset = self.eye - self.target;
        let distance = offset.length();
        if distance < f64::EPSILON {
            self.eye = self.target + DVec3::Z * self.min_distance;
            return;
        }
        let clamped = distance.clamp(self.min_distance, self.max_distance);
        if clamped != distance {
            self.eye = self.target + offset * (clamped / distance);
        }
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}
