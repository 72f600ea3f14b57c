//! Chrono-Glitch entry point
//!
//! Runs the simulation headless at the display tick rate, driven by the demo
//! autopilot. Scene geometry is built every frame the way a windowed frontend
//! would, but nothing is presented.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use chrono_glitch::demo::DemoPilot;
use chrono_glitch::platform::{FrameLimiter, InputQueue};
use chrono_glitch::renderer::build_scene;
use chrono_glitch::sim::{GameEvent, GameState, GlitchEvent, tick};
use chrono_glitch::{Level, LevelData, Settings};

#[derive(Parser)]
#[command(name = "chrono-glitch", about = "Chrono-Glitch platformer prototype")]
struct Args {
    /// Settings JSON file (defaults are used if missing or invalid)
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Level JSON file (built-in level when omitted)
    #[arg(long)]
    level: Option<PathBuf>,
    /// Glitch RNG seed (overrides the settings file)
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many ticks (0 runs until interrupted)
    #[arg(long, default_value_t = 3600)]
    ticks: u64,
    /// Run as fast as possible instead of pacing to the tick rate
    #[arg(long)]
    no_pace: bool,
    /// Log a status line every N ticks
    #[arg(long, default_value_t = 300)]
    status_every: u64,
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn load_level(args: &Args, settings: &Settings) -> Result<Level, chrono_glitch::LevelError> {
    match &args.level {
        Some(path) => Level::from_data(&LevelData::load(path)?, settings),
        None => Ok(Level::level_01(settings)),
    }
}

fn log_event(event: &GameEvent, tick: u64) {
    match event {
        GameEvent::Glitch(GlitchEvent::Started { kind, duration }) => {
            log::info!("[{tick}] glitch: {} for {duration} ticks", kind.as_str());
        }
        GameEvent::Glitch(GlitchEvent::Ended { kind }) => {
            log::info!("[{tick}] glitch over: {}", kind.as_str());
        }
        GameEvent::RewindStopped => log::info!("[{tick}] rewind released"),
        other => log::debug!("[{tick}] {other:?}"),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Chrono-Glitch (headless) starting...");

    let settings = Settings::load_or_default(args.settings.as_deref());
    let level = match load_level(&args, &settings) {
        Ok(level) => level,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let seed = args.seed.or(settings.glitch.seed).unwrap_or_else(clock_seed);
    let mut state = match GameState::new(&settings, level, seed) {
        Ok(state) => state,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("Game initialized with seed: {}", state.seed);

    let mut pilot = DemoPilot::new(&settings);
    let mut queue = InputQueue::new();
    let mut limiter = FrameLimiter::new(settings.display.tick_rate);
    if !args.no_pace {
        log::info!("Pacing to {:?} per tick", limiter.frame_budget());
    }

    while args.ticks == 0 || state.time_ticks < args.ticks {
        for event in pilot.next_events(&state) {
            queue.push(event);
        }
        if queue.should_quit() {
            break;
        }

        let input = queue.drain();
        for event in tick(&mut state, &input) {
            log_event(&event, state.time_ticks);
        }

        let vertices = build_scene(&state, &settings);
        log::trace!("frame {}: {} vertices", state.time_ticks, vertices.len());

        if args.status_every > 0 && state.time_ticks % args.status_every == 0 {
            let pos = state.player.pos();
            log::info!(
                "[{}] player at ({:.1}, {:.1}), history {}/{}, glitch {:?}",
                state.time_ticks,
                pos.x,
                pos.y,
                state.player.history.len(),
                state.player.history.capacity(),
                state.director.active().map(|g| g.kind().as_str()),
            );
        }

        if !args.no_pace {
            limiter.wait();
        }
    }

    match serde_json::to_string(&state.player) {
        Ok(json) => log::debug!("Final player state: {json}"),
        Err(e) => log::warn!("Could not serialize player: {e}"),
    }
    log::info!("Stopped after {} ticks", state.time_ticks);
    ExitCode::SUCCESS
}
