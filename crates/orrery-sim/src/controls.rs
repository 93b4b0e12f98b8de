//! User controls: run state, sliders, visibility toggles and key bindings.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use orrery_config::AnimationConfig;
use tracing::warn;

/// Whether the animation advances on each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Running,
    Paused,
}

impl RunState {
    /// The other state.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
        }
    }

    /// Label for the pause/resume button in this state.
    pub fn button_label(self) -> &'static str {
        match self {
            RunState::Running => "⏸ Pause",
            RunState::Paused => "▶ Resume",
        }
    }
}

pub const SPEED_SLIDER_MAX: u8 = 100;
/// Speed slider position that maps to 1x.
pub const SPEED_SLIDER_UNITY: u8 = 55;
pub const STEP_SLIDER_MIN: u8 = 1;
pub const STEP_SLIDER_MAX: u8 = 40;
/// Step slider position that leaves angular steps unscaled.
pub const STEP_SLIDER_UNITY: u8 = 10;
/// Simulated days per frame for each step slider unit.
pub const DAYS_PER_STEP_UNIT: f64 = 0.05;

/// Slider positions and visibility toggles.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlState {
    speed_slider: u8,
    step_slider: u8,
    pub show_trails: bool,
    pub show_labels: bool,
    pub mutual_gravity: bool,
}

impl ControlState {
    pub fn from_config(config: &AnimationConfig) -> Self {
        let mut controls = Self {
            speed_slider: SPEED_SLIDER_UNITY,
            step_slider: STEP_SLIDER_UNITY,
            show_trails: config.show_trails,
            show_labels: config.show_labels,
            mutual_gravity: config.mutual_gravity,
        };
        controls.set_speed_slider(config.speed_slider);
        controls.set_step_slider(config.step_slider);
        controls
    }

    /// Set the speed slider, clamped to `0..=100`.
    pub fn set_speed_slider(&mut self, value: u8) {
        self.speed_slider = value.min(SPEED_SLIDER_MAX);
    }

    /// Set the step slider, clamped to `1..=40`.
    pub fn set_step_slider(&mut self, value: u8) {
        self.step_slider = value.clamp(STEP_SLIDER_MIN, STEP_SLIDER_MAX);
    }

    pub fn speed_slider(&self) -> u8 {
        self.speed_slider
    }

    pub fn step_slider(&self) -> u8 {
        self.step_slider
    }

    /// `10^((v - 55) / 45)`: 55 is 1x, 100 is 10x, 10 is 0.1x.
    pub fn speed_multiplier(&self) -> f64 {
        let exponent = (f64::from(self.speed_slider) - f64::from(SPEED_SLIDER_UNITY)) / 45.0;
        10f64.powf(exponent)
    }

    /// Simulated days covered by one frame at 1x.
    pub fn step_days(&self) -> f64 {
        f64::from(self.step_slider) * DAYS_PER_STEP_UNIT
    }

    /// Factor applied to every angular step this frame.
    ///
    /// Exactly 1.0 with both sliders at their defaults.
    pub fn frame_scale(&self) -> f64 {
        self.speed_multiplier() * f64::from(self.step_slider) / f64::from(STEP_SLIDER_UNITY)
    }

    pub fn speed_label(&self) -> String {
        format!("{}x", trim_decimal(self.speed_multiplier()))
    }

    pub fn step_label(&self) -> String {
        format!("{} d", trim_decimal(self.step_days()))
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::from_config(&AnimationConfig::default())
    }
}

/// Format with at most two decimals and no trailing zeros.
fn trim_decimal(value: f64) -> String {
    let s = format!("{value:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Something the user can ask the orrery to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    TogglePause,
    Reset,
    Recenter,
    Unfollow,
    ToggleTrails,
    ToggleLabels,
    ToggleMutualGravity,
    ZoomIn,
    ZoomOut,
}

impl Action {
    pub const ALL: [Action; 9] = [
        Action::TogglePause,
        Action::Reset,
        Action::Recenter,
        Action::Unfollow,
        Action::ToggleTrails,
        Action::ToggleLabels,
        Action::ToggleMutualGravity,
        Action::ZoomIn,
        Action::ZoomOut,
    ];

    /// Config name of the action.
    pub fn name(self) -> &'static str {
        match self {
            Action::TogglePause => "toggle_pause",
            Action::Reset => "reset",
            Action::Recenter => "recenter",
            Action::Unfollow => "unfollow",
            Action::ToggleTrails => "toggle_trails",
            Action::ToggleLabels => "toggle_labels",
            Action::ToggleMutualGravity => "toggle_mutual_gravity",
            Action::ZoomIn => "zoom_in",
            Action::ZoomOut => "zoom_out",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown action: {0}")]
pub struct UnknownAction(pub String);

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.name() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}

/// Maps key codes (`"Space"`, `"KeyR"`, ...) to actions.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyBindings {
    keys: HashMap<String, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let keys = [
            ("Space", Action::TogglePause),
            ("Escape", Action::Unfollow),
            ("KeyR", Action::Reset),
            ("KeyC", Action::Recenter),
            ("KeyT", Action::ToggleTrails),
            ("KeyL", Action::ToggleLabels),
            ("KeyG", Action::ToggleMutualGravity),
            ("Equal", Action::ZoomIn),
            ("Minus", Action::ZoomOut),
        ]
        .into_iter()
        .map(|(key, action)| (key.to_string(), action))
        .collect();
        Self { keys }
    }
}

impl KeyBindings {
    /// Defaults with `action name -> key code` overrides applied.
    ///
    /// Overrides apply in action-name order, so when two actions claim the
    /// same key the later name wins and a warning is logged. Unknown action
    /// names are skipped with a warning.
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let mut sorted: Vec<_> = overrides.iter().collect();
        sorted.sort();

        let mut bindings = Self::default();
        let mut claimed: HashMap<&str, Action> = HashMap::new();
        for (action_name, key) in sorted {
            let action = match action_name.parse::<Action>() {
                Ok(action) => action,
                Err(e) => {
                    warn!("{e}; ignoring binding to {key}");
                    continue;
                }
            };
            if let Some(previous) = claimed.insert(key.as_str(), action) {
                warn!("{key} bound to both {previous} and {action}; keeping {action}");
            }
            bindings.bind(key, action);
        }
        bindings
    }

    /// Bind `key` to `action`, replacing any previous key for that action.
    pub fn bind(&mut self, key: &str, action: Action) {
        self.keys.retain(|_, bound| *bound != action);
        self.keys.insert(key.to_string(), action);
    }

    pub fn action_for(&self, key: &str) -> Option<Action> {
        self.keys.get(key).copied()
    }

    pub fn key_for(&self, action: Action) -> Option<&str> {
        self.keys
            .iter()
            .find(|(_, bound)| **bound == action)
            .map(|(key, _)| key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_state_toggles() {
        assert_eq!(RunState::default(), RunState::Running);
        assert_eq!(RunState::Running.toggled(), RunState::Paused);
        assert_eq!(RunState::Paused.toggled(), RunState::Running);
    }

    #[test]
    fn test_default_speed_is_exactly_unity() {
        let controls = ControlState::default();
        assert_eq!(controls.speed_multiplier(), 1.0);
        assert_eq!(controls.frame_scale(), 1.0);
        assert_eq!(controls.speed_label(), "1x");
        assert_eq!(controls.step_label(), "0.5 d");
    }

    #[test]
    fn test_speed_slider_endpoints() {
        let mut controls = ControlState::default();
        controls.set_speed_slider(100);
        assert!((controls.speed_multiplier() - 10.0).abs() < 1e-9);
        assert_eq!(controls.speed_label(), "10x");
        controls.set_speed_slider(10);
        assert!((controls.speed_multiplier() - 0.1).abs() < 1e-9);
        assert_eq!(controls.speed_label(), "0.1x");
        controls.set_speed_slider(250);
        assert_eq!(controls.speed_slider(), 100);
    }

    #[test]
    fn test_step_slider_clamps() {
        let mut controls = ControlState::default();
        controls.set_step_slider(0);
        assert_eq!(controls.step_slider(), 1);
        controls.set_step_slider(99);
        assert_eq!(controls.step_slider(), 40);
        assert_eq!(controls.step_label(), "2 d");
        assert!((controls.frame_scale() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_action_names_roundtrip() {
        for action in Action::ALL {
            assert_eq!(action.name().parse::<Action>(), Ok(action));
        }
        assert!("warp_drive".parse::<Action>().is_err());
    }

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.action_for("Space"), Some(Action::TogglePause));
        assert_eq!(bindings.action_for("Escape"), Some(Action::Unfollow));
        assert_eq!(bindings.action_for("KeyQ"), None);
    }

    #[test]
    fn test_override_moves_binding() {
        let overrides = HashMap::from([
            ("toggle_pause".to_string(), "KeyP".to_string()),
            ("bogus".to_string(), "KeyB".to_string()),
        ]);
        let bindings = KeyBindings::with_overrides(&overrides);
        assert_eq!(bindings.action_for("KeyP"), Some(Action::TogglePause));
        assert_eq!(bindings.action_for("Space"), None);
        assert_eq!(bindings.action_for("KeyB"), None);
        assert_eq!(bindings.key_for(Action::TogglePause), Some("KeyP"));
    }

    #[test]
    fn test_conflicting_overrides_resolve_by_action_name() {
        let overrides = HashMap::from([
            ("reset".to_string(), "KeyX".to_string()),
            ("recenter".to_string(), "KeyX".to_string()),
            ("toggle_trails".to_string(), "KeyX".to_string()),
        ]);
        for _ in 0..16 {
            let bindings = KeyBindings::with_overrides(&overrides);
            assert_eq!(bindings.action_for("KeyX"), Some(Action::ToggleTrails));
            assert_eq!(bindings.key_for(Action::Reset), None);
            assert_eq!(bindings.key_for(Action::Recenter), None);
        }
    }

    #[test]
    fn test_button_label_names_next_action() {
        assert_eq!(RunState::Running.button_label(), "⏸ Pause");
        assert_eq!(RunState::Paused.button_label(), "▶ Resume");
    }
}
