//! Ark - a brick-breaker arcade game
//!
//! Core modules:
//! - `sim`: Simulation (geometry, collisions, board state, per-tick update)
//! - `game`: Frame loop driving the simulation against a frontend
//! - `platform`: Frontend abstraction (input events in, render snapshots out)
//! - `settings`: Runtime settings loaded from JSON

pub mod game;
pub mod platform;
pub mod settings;
pub mod sim;

pub use game::{Game, RunSummary};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const SCREEN_WIDTH: i32 = 640;
    pub const SCREEN_HEIGHT: i32 = 480;

    /// Brick dimensions
    pub const BRICK_WIDTH: i32 = 80;
    pub const BRICK_HEIGHT: i32 = 20;

    /// Gap between neighbouring bricks
    pub const BRICK_PADDING: i32 = 10;
    /// Gap between the grid and the playfield edges
    pub const BRICK_EDGE_OFFSET: i32 = 10;

    /// Bricks per row
    pub const RECT_COUNT_X: usize =
        ((SCREEN_WIDTH - 2 * BRICK_EDGE_OFFSET) / (BRICK_WIDTH + BRICK_PADDING) + 1) as usize;
    /// Rows of bricks (grid fills the upper half of the screen)
    pub const RECT_COUNT_Y: usize =
        ((SCREEN_HEIGHT / 2 - 2 * BRICK_EDGE_OFFSET) / (BRICK_HEIGHT + BRICK_PADDING) + 1)
            as usize;
    pub const BRICK_COUNT: usize = RECT_COUNT_X * RECT_COUNT_Y;

    /// Paddle defaults
    pub const PADDLE_WIDTH: i32 = 100;
    pub const PADDLE_HEIGHT: i32 = 20;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Ball speed (pixels/second), applied to the unit velocity direction
    pub const BALL_SPEED: f32 = 300.0;

    /// Launch direction before normalization
    pub const LAUNCH_VX: f32 = 0.25;
    pub const LAUNCH_VY: f32 = -0.75;

    /// Paddle hits further than this (normalized) from center reverse the ball
    pub const ENGLISH_REVERSE_THRESHOLD: f32 = 0.1;
}
