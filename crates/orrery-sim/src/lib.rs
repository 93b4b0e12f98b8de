//! Orbit animation for the orrery.
//!
//! [`SimulationState`] owns the body list, the Running/Paused state, the
//! Free/Following camera and the user controls. Call
//! [`SimulationState::step`] once per display refresh; each running step
//! advances every body by a fixed fraction of a revolution, so perceived
//! speed follows the refresh rate rather than wall-clock time.

pub mod body;
pub mod camera;
pub mod controls;
pub mod scene;
mod state;
pub mod textures;
mod trail;

pub use body::{Body, BodyDescriptor, SOLAR_SYSTEM, default_catalog, orbit_line};
pub use camera::{CameraMode, CameraRig};
pub use controls::{Action, ControlState, KeyBindings, RunState};
pub use scene::{BodyGeometry, OrbitLine, RingDisc, SceneLayout, Shell, Sun};
pub use state::{Label, SceneRenderer, SimulationState, StepReport};
pub use textures::{BodyTextures, SceneTextures, synthesize_scene};
pub use trail::Trail;
