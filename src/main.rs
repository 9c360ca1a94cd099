//! Space Rocks entry point
//!
//! Runs the simulation headless with the autopilot at the controls.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use space_rocks::platform::{AutopilotInput, FrameClock};
use space_rocks::renderer::HeadlessRenderer;
use space_rocks::{Game, Settings};

#[derive(Parser, Debug)]
#[command(name = "space-rocks")]
#[command(about = "Drifting, spinning, fracturing rocks on a fixed-rate tick")]
struct Cli {
    /// JSON settings file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,
    /// Trace logging and on-screen diagnostics
    #[arg(long)]
    debug: bool,
    /// Single draw colour
    #[arg(long)]
    monochrome: bool,
    /// Ticks per second
    #[arg(long)]
    tick_rate: Option<f32>,
    /// Large rocks at startup
    #[arg(long)]
    rocks: Option<usize>,
    #[arg(long)]
    seed: Option<u64>,
    /// Disable the centre hazard
    #[arg(long)]
    no_hazard: bool,
    /// Quit after this many ticks (0 runs forever)
    #[arg(long, default_value_t = 900)]
    ticks: u64,
    /// Run as fast as possible instead of at the tick rate
    #[arg(long)]
    unthrottled: bool,
}

impl Cli {
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        settings.debug |= self.debug;
        settings.monochrome |= self.monochrome;
        if self.no_hazard {
            settings.centre_hazard = false;
        }
        if let Some(rate) = self.tick_rate {
            settings.target_tick_rate = rate;
        }
        if let Some(rocks) = self.rocks {
            settings.rock_count = rocks;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }

        settings.validate()?;
        Ok(settings)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = cli.settings().context("bad configuration")?;

    let default_level = if settings.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Some(path) = &cli.config {
        log::info!("Loaded settings from {}", path.display());
    }

    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Space Rocks starting (seed {seed}, {} ticks/s)", settings.target_tick_rate);

    let max_ticks = (cli.ticks > 0).then_some(cli.ticks);
    let mut game = Game::new(
        settings,
        seed,
        AutopilotInput::new(max_ticks),
        FrameClock::new(!cli.unthrottled),
        HeadlessRenderer::default(),
    )?;
    game.run();

    Ok(())
}
