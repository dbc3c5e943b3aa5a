//! Ark entry point
//!
//! Runs the game against the headless frontend. Usage:
//! `ark [settings.json]`

use std::path::PathBuf;
use std::process::ExitCode;

use ark::platform::Headless;
use ark::{Game, Settings, SettingsError};

fn load_settings() -> Result<Settings, SettingsError> {
    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => Settings::load(&path),
        None => Ok(Settings::default()),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Ark (headless) starting...");

    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut frontend = Headless::new(settings.autopilot, settings.max_frames);
    let mut game = Game::new(settings);
    let summary = game.run(&mut frontend);

    println!(
        "{} frames, {} bricks broken, {} paddle bounces, {} rounds lost",
        summary.frames, summary.bricks_broken, summary.paddle_bounces, summary.rounds_lost
    );
    ExitCode::SUCCESS
}
