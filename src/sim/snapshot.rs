//! Read-only view of the board handed to the renderer each frame

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::state::{GameState, Phase, Rgba};

/// Ball as drawn: a filled circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallSnapshot {
    pub center: Vec2,
    pub radius: f32,
    pub color: Rgba,
}

/// Filled rectangle with an outline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectSnapshot {
    pub rect: Rect,
    pub color: Rgba,
    pub outline: Rgba,
}

impl RectSnapshot {
    fn new(rect: Rect, color: Rgba, time_secs: f32) -> Self {
        Self {
            rect,
            color,
            outline: outline_color(color, time_secs),
        }
    }
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub phase: Phase,
    pub ball: BallSnapshot,
    /// Active bricks only, grid order
    pub bricks: Vec<RectSnapshot>,
    pub paddle: RectSnapshot,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let board = &state.board;
        let t = state.elapsed;

        Self {
            phase: state.phase,
            ball: BallSnapshot {
                center: board.ball.pos,
                radius: board.ball.radius,
                color: board.ball.color,
            },
            bricks: board
                .active_bricks()
                .map(|b| RectSnapshot::new(b.rect, b.color, t))
                .collect(),
            paddle: RectSnapshot::new(board.paddle.rect, board.paddle.color, t),
        }
    }
}

/// Pulsing outline: fill channels rotated (b, r, g) and scaled by a slow
/// sine of elapsed time. Alpha is kept.
pub fn outline_color(fill: Rgba, time_secs: f32) -> Rgba {
    let pulse = (time_secs.sin() + 1.0) / 2.0;
    let scale = |c: u8| (c as f32 * pulse) as u8;
    Rgba {
        r: scale(fill.b),
        g: scale(fill.r),
        b: scale(fill.g),
        a: fill.a,
    }
}
