//! Normallight entry point
//!
//! Runs the simulation headless with the built-in autopilot. A windowed
//! build plugs its own `InputSource` and `FrameSink` into the same runner.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use normallight::SimConfig;
use normallight::autopilot::Autopilot;
use normallight::runner::{FixedTickRunner, HeadlessSink};
use normallight::sim::{GameState, Viewport};

/// First-person orb dodging in a bounded volume
#[derive(Parser, Debug)]
#[command(name = "normallight")]
#[command(version, about)]
struct Cli {
    /// JSON configuration file (defaults are used for missing fields)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed for orb spawning (defaults to the config seed, or the clock)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop after this many ticks
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Restart after a loss instead of exiting
    #[arg(short, long)]
    restart: bool,

    /// Viewport size in pixels (square)
    #[arg(long, default_value = "800")]
    size: u32,
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match SimConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => SimConfig::default(),
    };
    if let Err(e) = config.validate() {
        log::error!("Invalid configuration: {}", e);
        std::process::exit(1);
    }
    config.seed = match cli.seed {
        Some(seed) => seed,
        None if config.seed != 0 => config.seed,
        None => clock_seed(),
    };

    log::info!(
        "Normallight starting (seed {}, {} orientation, {} orbs)",
        config.seed,
        config.orientation.as_str(),
        config.max_objects
    );

    let runner = FixedTickRunner::new(config.tick_interval()).with_max_ticks(cli.ticks);
    let ticks_per_second = (1000 / config.tick_millis).max(1);
    let mut state = GameState::new(config);
    let mut pilot = Autopilot::new(cli.restart);
    let size = cli.size as f32;
    let mut sink = HeadlessSink::new(Viewport::new(size, size), ticks_per_second);

    let summary = runner.run(&mut state, &mut pilot, &mut sink);
    log::info!(
        "Finished: {} ticks, {} losses, {} overruns, survived {:.1}s this run",
        summary.ticks,
        summary.losses,
        summary.overruns,
        state.elapsed_secs()
    );
}
