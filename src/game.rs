//! Frame loop
//!
//! One thread, one loop: poll input, tick the simulation with the measured
//! wall-clock dt, capture a snapshot, present it, then sleep a fixed delay.
//! The delay throttles the frame rate; simulation speed follows real time.

use std::time::{Duration, Instant};

use crate::platform::Frontend;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, RenderSnapshot, TickInput, tick};

/// Totals for a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub rounds_lost: u32,
    pub bricks_broken: u32,
    pub paddle_bounces: u32,
}

impl RunSummary {
    fn record(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::BrickBroken { .. } => self.bricks_broken += 1,
                GameEvent::PaddleBounce { .. } => self.paddle_bounces += 1,
                GameEvent::RoundLost(_) => self.rounds_lost += 1,
                _ => {}
            }
        }
    }
}

/// Owns the game state for the lifetime of a run
pub struct Game {
    state: GameState,
    settings: Settings,
    summary: RunSummary,
}

impl Game {
    pub fn new(settings: Settings) -> Self {
        let seed = settings.resolve_seed();
        log::info!("New game with seed {}", seed);
        Self {
            state: GameState::new(seed),
            settings,
            summary: RunSummary::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run one frame with an explicit dt. Returns the snapshot to draw and
    /// whether quit was requested.
    pub fn frame(&mut self, input: &TickInput, dt: f32) -> (RenderSnapshot, bool) {
        // Never negative, even with an unvalidated bound (NaN leaves dt unclamped)
        let dt = dt.min(self.settings.max_frame_dt).max(0.0);
        let report = tick(&mut self.state, input, dt);

        self.summary.frames += 1;
        self.summary.record(&report.events);

        let every = self.settings.log_every_frames;
        if every > 0 && self.summary.frames % every == 0 {
            log::info!(
                "frame {}: round {}, {} bricks left, {} broken total",
                self.summary.frames,
                self.state.round,
                self.state.board.active_bricks().count(),
                self.summary.bricks_broken
            );
        }

        (RenderSnapshot::capture(&self.state), report.quit)
    }

    /// Drive the game against a frontend until it asks to quit
    pub fn run<F: Frontend>(&mut self, frontend: &mut F) -> RunSummary {
        let delay = Duration::from_millis(self.settings.frame_delay_ms);
        let mut prev = Instant::now();

        loop {
            let now = Instant::now();
            let dt = now.duration_since(prev).as_secs_f32();
            prev = now;

            let input = TickInput::from_events(frontend.poll_events());
            let (snapshot, quit) = self.frame(&input, dt);
            frontend.present(&snapshot);

            if quit {
                break;
            }
            if !delay.is_zero() {
                std::thread::sleep(delay);
            }
        }

        log::info!(
            "Run finished after {} frames: {} bricks broken, {} rounds lost",
            self.summary.frames,
            self.summary.bricks_broken,
            self.summary.rounds_lost
        );
        self.summary
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }
}
