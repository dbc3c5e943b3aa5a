//! Board and game state
//!
//! The board owns the brick grid, the paddle, and the ball. `GameState`
//! wraps it together with the round phase; it is owned by the frame loop
//! and only mutated inside `tick`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::consts::*;

/// Phase of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Ball rides on the paddle, waiting for launch
    Attached,
    /// Ball is moving
    InFlight,
    /// Round was lost this tick; the board is rebuilt on the next tick
    Resetting,
}

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Random opaque color
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::opaque(
            rng.random_range(0..255),
            rng.random_range(0..255),
            rng.random_range(0..255),
        )
    }
}

/// A destructible brick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub color: Rgba,
    /// Cleared on the first hit; stays cleared until the round resets
    pub active: bool,
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    pub color: Rgba,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            rect: Rect::new(
                (SCREEN_WIDTH / 2 - PADDLE_WIDTH / 2) as f32,
                (SCREEN_HEIGHT - PADDLE_HEIGHT) as f32,
                PADDLE_WIDTH as f32,
                PADDLE_HEIGHT as f32,
            ),
            color: Rgba::WHITE,
        }
    }
}

impl Paddle {
    /// Center the paddle under the pointer, kept inside the playfield
    pub fn follow_pointer(&mut self, pointer_x: i32) {
        let x = pointer_x
            .saturating_sub(PADDLE_WIDTH / 2)
            .clamp(0, SCREEN_WIDTH - PADDLE_WIDTH);
        self.rect.pos.x = x as f32;
    }

    /// Where an attached ball sits: centered on top of the paddle
    pub fn anchor(&self, ball_radius: f32) -> Vec2 {
        Vec2::new(self.rect.center().x, self.rect.pos.y - ball_radius)
    }
}

/// The ball
///
/// `vel` is a direction; it is kept at unit length after every collision
/// response and scaled by `speed` during integration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub speed: f32,
    pub radius: f32,
    pub color: Rgba,
}

impl Ball {
    pub fn new(color: Rgba) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            speed: BALL_SPEED,
            radius: BALL_RADIUS,
            color,
        }
    }

    /// Rescale the direction to unit length (zero stays zero)
    pub fn renormalize(&mut self) {
        self.vel = self.vel.normalize_or_zero();
    }
}

/// Build the full brick grid, row-major, all active
pub fn brick_grid(rng: &mut impl Rng) -> Vec<Brick> {
    let mut bricks = Vec::with_capacity(BRICK_COUNT);
    for row in 0..RECT_COUNT_Y as i32 {
        for col in 0..RECT_COUNT_X as i32 {
            bricks.push(Brick {
                rect: Rect::new(
                    (BRICK_EDGE_OFFSET + (BRICK_WIDTH + BRICK_PADDING) * col) as f32,
                    (BRICK_EDGE_OFFSET + (BRICK_HEIGHT + BRICK_PADDING) * row) as f32,
                    BRICK_WIDTH as f32,
                    BRICK_HEIGHT as f32,
                ),
                color: Rgba::random(rng),
                active: true,
            });
        }
    }
    bricks
}

/// Bricks, paddle, and ball
#[derive(Debug, Clone)]
pub struct Board {
    pub bricks: Vec<Brick>,
    pub paddle: Paddle,
    pub ball: Ball,
    rng: Pcg32,
}

impl Board {
    /// Fresh board with a seeded color source
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let bricks = brick_grid(&mut rng);
        let ball = Ball::new(Rgba::random(&mut rng));
        let mut board = Self {
            bricks,
            paddle: Paddle::default(),
            ball,
            rng,
        };
        board.attach_ball();
        board
    }

    /// Rebuild for a new round: every brick active with new colors, new
    /// ball color, white paddle, ball back on the paddle. The paddle keeps
    /// its x.
    pub fn regenerate(&mut self) {
        self.bricks = brick_grid(&mut self.rng);
        self.paddle.color = Rgba::WHITE;
        self.ball = Ball::new(Rgba::random(&mut self.rng));
        self.attach_ball();
    }

    /// Slave the ball to the paddle's top center
    pub fn attach_ball(&mut self) {
        self.ball.pos = self.paddle.anchor(self.ball.radius);
    }

    /// Fresh random color from the board's generator
    pub fn random_color(&mut self) -> Rgba {
        Rgba::random(&mut self.rng)
    }

    pub fn active_bricks(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| b.active)
    }
}

/// Complete game state owned by the frame loop
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub board: Board,
    pub phase: Phase,
    /// Rounds started so far (1-based)
    pub round: u32,
    /// Simulated seconds since the run started
    pub elapsed: f32,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            board: Board::new(seed),
            phase: Phase::Attached,
            round: 1,
            elapsed: 0.0,
        }
    }
}
