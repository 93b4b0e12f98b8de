//! Command-line argument parsing for the orrery.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Shared orrery command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "orrery", about = "Procedural solar system orrery")]
pub struct CliArgs {
    /// Texture edge length in pixels.
    #[arg(long)]
    pub texture_size: Option<u32>,

    /// Directory baked textures are written to.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Initial speed slider position (0-100).
    #[arg(long)]
    pub speed: Option<u8>,

    /// Start with the animation paused.
    #[arg(long)]
    pub paused: Option<bool>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(size) = args.texture_size {
            self.textures.size = size;
        }
        if let Some(ref dir) = args.output_dir {
            self.textures.output_dir = dir.clone();
        }
        if let Some(speed) = args.speed {
            self.animation.speed_slider = speed;
        }
        if let Some(paused) = args.paused {
            self.animation.start_paused = paused;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
