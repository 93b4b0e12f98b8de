//! Configuration structs with sensible defaults and RON persistence.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level orrery configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Procedural texture settings.
    pub textures: TextureConfig,
    /// Orbit animation settings.
    pub animation: AnimationConfig,
    /// Orbit camera settings.
    pub camera: CameraConfig,
    /// Page widget settings.
    pub widgets: WidgetConfig,
    /// Input settings.
    pub input: InputConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Procedural texture configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TextureConfig {
    /// Edge length of planet, cloud and ring textures in pixels.
    pub size: u32,
    /// Edge length of the sun glow sprite in pixels.
    pub glow_size: u32,
    /// Directory baked textures are written to.
    pub output_dir: PathBuf,
}

/// Orbit animation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    /// Self-rotation increment per frame in radians, shared by all bodies.
    pub spin_step: f64,
    /// Initial speed slider position (0-100, 55 = 1x).
    pub speed_slider: u8,
    /// Initial step slider position (1-40, each unit = 0.05 days per frame).
    pub step_slider: u8,
    /// Start in the paused state.
    pub start_paused: bool,
    /// Maximum number of points kept per body trail.
    pub trail_length: usize,
    /// Record and show orbit trails.
    pub show_trails: bool,
    /// Show body name labels.
    pub show_labels: bool,
    /// Mutual-gravity display mode flag.
    pub mutual_gravity: bool,
}

/// Orbit camera configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Initial camera position in world units.
    pub start_position: [f64; 3],
    /// Closest allowed distance to the look-at target.
    pub min_distance: f64,
    /// Farthest allowed distance to the look-at target.
    pub max_distance: f64,
    /// Fraction of the remaining offset closed per frame when easing the target.
    pub damping: f64,
    /// Distance multiplier applied per zoom notch.
    pub zoom_factor: f64,
}

/// Page widget configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WidgetConfig {
    /// File backing the key-value store used by the visit counter.
    pub store_path: PathBuf,
    /// Key the visit count is stored under.
    pub visit_key: String,
    /// IANA time zone identifiers shown as world clocks.
    pub world_clock_zones: Vec<String>,
    /// How long the "copied" acknowledgment stays visible.
    pub copy_ack_millis: u64,
}

/// Input configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Keybinding overrides (action name -> key name).
    pub keybindings: HashMap<String, String>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Directory for JSON log files in debug builds.
    pub log_dir: Option<PathBuf>,
}

// --- Default implementations ---

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            size: 512,
            glow_size: 128,
            output_dir: PathBuf::from("textures"),
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            spin_step: 0.02,
            speed_slider: 55,
            step_slider: 10,
            start_paused: false,
            trail_length: 180,
            show_trails: true,
            show_labels: true,
            mutual_gravity: true,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            start_position: [0.0, 150.0, 280.0],
            min_distance: 80.0,
            max_distance: 900.0,
            damping: 0.05,
            zoom_factor: 1.1,
        }
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("orrery-store.json"),
            visit_key: "demo_site_visits_v1".to_string(),
            world_clock_zones: vec![
                "Asia/Shanghai".to_string(),
                "Europe/London".to_string(),
                "America/New_York".to_string(),
                "Asia/Tokyo".to_string(),
            ],
            copy_ack_millis: 1200,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

/// Platform config directory for the orrery, e.g. `~/.config/orrery`.
///
/// Falls back to the working directory when the platform has none.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("orrery"))
        .unwrap_or_else(|| PathBuf::from("."))
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
