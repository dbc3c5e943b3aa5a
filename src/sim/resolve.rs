//! Collision response
//!
//! Scans bricks (grid order) and then the paddle, resolving only the first
//! overlap found per tick, and reflects the ball off the playfield walls.

use serde::{Deserialize, Serialize};

use super::collision::{Contact, Side, detect};
use super::state::{Ball, Board, Paddle};
use crate::consts::{ENGLISH_REVERSE_THRESHOLD, SCREEN_WIDTH};

/// How a top-face paddle hit steered the ball horizontally
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Deflection {
    /// Ball was heading further out on the side it hit; sent back toward center
    Reversed,
    /// Normalized strike offset added to the horizontal direction
    Nudged(f32),
    /// Side-face hit, plain reflection
    Reflected,
}

/// Outcome of resolving the first overlap of a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Resolution {
    /// Brick at this grid index was destroyed
    BrickBroken { index: usize, side: Side },
    /// Ball bounced off the paddle
    PaddleBounce { side: Side, deflection: Deflection },
    /// Ball got under the paddle; the round is over
    PaddleUnderside,
}

/// Playfield wall the ball reflected off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Left,
    Right,
    Top,
}

/// Run the brick/paddle scan, stopping after the first resolved overlap
pub fn resolve_collisions(board: &mut Board) -> Option<Resolution> {
    let center = board.ball.pos;
    let radius = board.ball.radius;

    let brick_hit = board
        .bricks
        .iter()
        .enumerate()
        .filter(|(_, brick)| brick.active)
        .find_map(|(index, brick)| detect(center, radius, &brick.rect).map(|c| (index, c)));

    if let Some((index, contact)) = brick_hit {
        reflect(&mut board.ball, contact.side);
        board.ball.renormalize();

        let color = board.random_color();
        let brick = &mut board.bricks[index];
        brick.active = false;
        // Not visible once inactive
        brick.color = color;

        log::debug!("Brick {} broken ({:?})", index, contact.side);
        return Some(Resolution::BrickBroken {
            index,
            side: contact.side,
        });
    }

    let contact = detect(center, radius, &board.paddle.rect)?;
    if !moving_toward(&board.ball, contact.side) {
        return None;
    }
    let resolution = resolve_paddle(&mut board.ball, &board.paddle, &contact);
    board.paddle.color = board.random_color();
    Some(resolution)
}

/// Paddle response: reflection plus English on the top face
pub fn resolve_paddle(ball: &mut Ball, paddle: &Paddle, contact: &Contact) -> Resolution {
    reflect(ball, contact.side);

    let resolution = match contact.side {
        Side::Up => {
            let deflection = apply_english(ball, paddle);
            log::debug!("Paddle bounce at x={:.1}: {:?}", ball.pos.x, deflection);
            Resolution::PaddleBounce {
                side: Side::Up,
                deflection,
            }
        }
        Side::Down => {
            log::debug!("Ball slipped under the paddle at x={:.1}", ball.pos.x);
            Resolution::PaddleUnderside
        }
        side => Resolution::PaddleBounce {
            side,
            deflection: Deflection::Reflected,
        },
    };

    ball.renormalize();
    resolution
}

/// Whether the ball is travelling into the struck face
///
/// A ball resting on the paddle (as it is at launch) touches it without
/// approaching. The underside always counts.
pub fn moving_toward(ball: &Ball, side: Side) -> bool {
    match side {
        Side::Up => ball.vel.y > 0.0,
        Side::Down => true,
        Side::Right => ball.vel.x > 0.0,
        Side::Left => ball.vel.x < 0.0,
    }
}

/// Negate the velocity component facing the struck side
#[inline]
pub fn reflect(ball: &mut Ball, side: Side) {
    if side.is_vertical() {
        ball.vel.y = -ball.vel.y;
    } else {
        ball.vel.x = -ball.vel.x;
    }
}

/// Steer the ball by where it struck the paddle top
///
/// The offset from the paddle center is clamped to the half width and
/// normalized into `[-1, 1]`. Moving outward on the struck half beyond the
/// threshold reverses the horizontal direction; anything else adds the
/// normalized offset to it.
pub fn apply_english(ball: &mut Ball, paddle: &Paddle) -> Deflection {
    let half = paddle.rect.half_width();
    let offset = (ball.pos.x - paddle.rect.center().x).clamp(-half, half);
    let normalized = offset / half;

    if offset * ball.vel.x > 0.0 && normalized.abs() > ENGLISH_REVERSE_THRESHOLD {
        ball.vel.x = -ball.vel.x;
        Deflection::Reversed
    } else {
        ball.vel.x += normalized;
        Deflection::Nudged(normalized)
    }
}

/// Reflect off the left, right, and top walls, only when moving into them
pub fn resolve_walls(ball: &mut Ball) -> Option<Wall> {
    let mut hit = None;

    if ball.pos.x - ball.radius < 0.0 && ball.vel.x < 0.0 {
        ball.vel.x = -ball.vel.x;
        hit = Some(Wall::Left);
    }
    if ball.pos.x + ball.radius > SCREEN_WIDTH as f32 && ball.vel.x > 0.0 {
        ball.vel.x = -ball.vel.x;
        hit = Some(Wall::Right);
    }
    if ball.pos.y - ball.radius < 0.0 && ball.vel.y < 0.0 {
        ball.vel.y = -ball.vel.y;
        hit = Some(Wall::Top);
    }

    hit
}
