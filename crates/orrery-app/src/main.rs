//! Orrery command-line entry point.
//!
//! Bakes the procedural textures to PNG, runs the orbit animation headlessly
//! for a fixed number of frames, or prints the page widgets.
//!
//! Run with: `cargo run -p orrery-app -- simulate --frames 600`

mod bake;
mod headless;
mod panel;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use orrery_config::{CliArgs, Config, default_config_dir};
use orrery_sim::{KeyBindings, SimulationState, default_catalog, synthesize_scene};
use tracing::info;

/// CLI arguments for the orrery binary.
#[derive(Parser, Debug)]
#[command(name = "orrery", version, about = "Procedural solar system orrery")]
struct AppArgs {
    #[command(flatten)]
    common: CliArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Synthesize every texture and write it as PNG
    Textures,

    /// Run the animation without a window
    Simulate {
        /// Number of display refreshes to simulate
        #[arg(long, default_value_t = 600)]
        frames: u64,

        /// Follow this body with the camera (e.g. Earth)
        #[arg(long)]
        follow: Option<String>,

        /// Key presses as FRAME:KEY pairs, e.g. "120:Space,240:Space"
        #[arg(long, default_value = "")]
        keys: String,
    },

    /// Print the clock, visit counter, world clocks and copy-link output
    Widgets {
        /// Page address the copy button copies
        #[arg(long, default_value = "http://localhost:8000/")]
        url: String,

        /// Keep printing the clock once per second for this many seconds
        #[arg(long)]
        watch: Option<u64>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = AppArgs::parse();

    let config_dir = args.common.config.clone().unwrap_or_else(default_config_dir);
    let mut config = Config::load_or_create(&config_dir)?;
    config.apply_cli_overrides(&args.common);

    let log_dir = config.debug.log_dir.clone();
    orrery_log::init_logging(log_dir.as_deref(), cfg!(debug_assertions), Some(&config));
    info!(config_dir = %config_dir.display(), "orrery starting");

    match args.command {
        Command::Textures => textures(&config)?,
        Command::Simulate {
            frames,
            follow,
            keys,
        } => simulate(&config, frames, follow.as_deref(), &keys)?,
        Command::Widgets { url, watch } => {
            for line in panel::widget_lines(&config.widgets, &url)? {
                println!("{line}");
            }
            if let Some(seconds) = watch {
                panel::watch_clock(Duration::from_secs(seconds), |line| println!("{line}"));
            }
        }
    }
    Ok(())
}

fn textures(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let scene = synthesize_scene(
        &default_catalog(),
        config.textures.size,
        config.textures.glow_size,
    );
    let written: Vec<PathBuf> = bake::bake_textures(&scene, &config.textures.output_dir)?;
    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}

fn simulate(
    config: &Config,
    frames: u64,
    follow: Option<&str>,
    keys: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let script = headless::parse_key_script(keys)?;
    let bindings = KeyBindings::with_overrides(&config.input.keybindings);
    let mut state = SimulationState::new(default_catalog(), config);

    if let Some(name) = follow {
        let index = state
            .find_body(name)
            .ok_or_else(|| format!("no body named {name:?}"))?;
        state.click_body(index);
    }

    let renderer = headless::run(&mut state, &bindings, frames, &script);
    info!(frames = renderer.frames, run_state = ?state.run_state(), "simulation finished");

    println!("{}", renderer.last_hud);
    println!(
        "[{}]  speed {}  step {}  camera {:?}",
        state.run_state().button_label(),
        state.controls().speed_label(),
        state.controls().step_label(),
        state.camera().mode()
    );
    println!(
        "sky: {} stars, {} orbit lines, {} overlays",
        renderer.stars_drawn, renderer.orbit_lines_drawn, renderer.overlays_drawn
    );
    for line in headless::body_report(&state) {
        println!("{line}");
    }
    Ok(())
}
