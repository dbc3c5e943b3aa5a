//! Per-frame simulation tick
//!
//! Advances the game by one variable-length frame: input, collision
//! response, integration, and round lifecycle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::resolve::{Deflection, Resolution, Wall, resolve_collisions, resolve_walls};
use super::state::{Ball, GameState, Phase};
use crate::consts::*;

/// Input event from the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Pointer moved to this x (screen pixels)
    PointerMoved(i32),
    /// Pointer button released
    PointerReleased,
    /// Window closed / quit requested
    Quit,
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Latest pointer x, if the pointer moved this frame
    pub pointer_x: Option<i32>,
    /// Launch the attached ball
    pub launch: bool,
    /// Stop after this tick
    pub quit: bool,
}

impl TickInput {
    /// Fold a frame's worth of events; the last pointer position wins
    pub fn from_events<I: IntoIterator<Item = InputEvent>>(events: I) -> Self {
        let mut input = Self::default();
        for event in events {
            match event {
                InputEvent::PointerMoved(x) => input.pointer_x = Some(x),
                InputEvent::PointerReleased => input.launch = true,
                InputEvent::Quit => input.quit = true,
            }
        }
        input
    }
}

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossCause {
    /// Ball dropped below the bottom edge
    BallExited,
    /// Ball struck the paddle's underside
    PaddleUnderside,
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Launched,
    BrickBroken { index: usize },
    PaddleBounce { deflection: Deflection },
    WallBounce(Wall),
    RoundLost(LossCause),
    RoundReset { round: u32 },
}

/// Result of a tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub events: Vec<GameEvent>,
    /// Quit was requested; the caller should stop after this frame
    pub quit: bool,
}

impl TickReport {
    pub fn lost(&self) -> Option<LossCause> {
        self.events.iter().find_map(|e| match e {
            GameEvent::RoundLost(cause) => Some(*cause),
            _ => None,
        })
    }
}

/// Advance the game state by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> TickReport {
    let mut report = TickReport {
        events: Vec::new(),
        quit: input.quit,
    };

    // A round lost last tick has been rendered; rebuild before reading input
    if state.phase == Phase::Resetting {
        reset_round(state);
        report.events.push(GameEvent::RoundReset { round: state.round });
    }

    state.elapsed += dt;

    if let Some(x) = input.pointer_x {
        state.board.paddle.follow_pointer(x);
    }

    if input.launch && state.phase == Phase::Attached {
        launch(&mut state.board.ball);
        state.phase = Phase::InFlight;
        report.events.push(GameEvent::Launched);
        log::debug!("Ball launched from x={:.1}", state.board.ball.pos.x);
    }

    match state.phase {
        Phase::Attached => state.board.attach_ball(),
        Phase::InFlight => {
            if let Some(cause) = step_flight(state, dt, &mut report.events) {
                lose_round(state, cause, &mut report.events);
            }
        }
        Phase::Resetting => {}
    }

    if state.phase == Phase::InFlight && state.board.ball.pos.y > SCREEN_HEIGHT as f32 {
        lose_round(state, LossCause::BallExited, &mut report.events);
    }

    log::trace!(
        "t={:.3} phase={:?} ball=({:.1}, {:.1})",
        state.elapsed,
        state.phase,
        state.board.ball.pos.x,
        state.board.ball.pos.y
    );

    report
}

/// Collision scan, wall checks, then integration. Returns the loss cause if
/// the ball went under the paddle.
fn step_flight(state: &mut GameState, dt: f32, events: &mut Vec<GameEvent>) -> Option<LossCause> {
    let board = &mut state.board;

    match resolve_collisions(board) {
        Some(Resolution::BrickBroken { index, .. }) => {
            events.push(GameEvent::BrickBroken { index });
        }
        Some(Resolution::PaddleBounce { deflection, .. }) => {
            events.push(GameEvent::PaddleBounce { deflection });
        }
        Some(Resolution::PaddleUnderside) => return Some(LossCause::PaddleUnderside),
        None => {}
    }

    if let Some(wall) = resolve_walls(&mut board.ball) {
        events.push(GameEvent::WallBounce(wall));
    }

    integrate(&mut board.ball, dt);
    None
}

fn lose_round(state: &mut GameState, cause: LossCause, events: &mut Vec<GameEvent>) {
    let remaining = state.board.active_bricks().count();
    log::info!(
        "Round {} lost ({:?}), {} bricks left",
        state.round,
        cause,
        remaining
    );
    state.phase = Phase::Resetting;
    events.push(GameEvent::RoundLost(cause));
}

/// Rebuild the board and put the ball back on the paddle
pub fn reset_round(state: &mut GameState) {
    state.board.regenerate();
    state.phase = Phase::Attached;
    state.round += 1;
    log::info!("Round {} ready", state.round);
}

/// Give an attached ball its launch direction (normalized)
pub fn launch(ball: &mut Ball) {
    ball.vel = Vec2::new(LAUNCH_VX, LAUNCH_VY);
    ball.renormalize();
}

/// Move the ball along its direction at its speed
#[inline]
pub fn integrate(ball: &mut Ball, dt: f32) {
    ball.pos += ball.vel * ball.speed * dt;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BRICK_COUNT;

    const DT: f32 = 1.0 / 30.0;

    fn launch_input() -> TickInput {
        TickInput {
            launch: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_from_events() {
        let input = TickInput::from_events([
            InputEvent::PointerMoved(10),
            InputEvent::PointerReleased,
            InputEvent::PointerMoved(400),
        ]);
        assert_eq!(input.pointer_x, Some(400));
        assert!(input.launch);
        assert!(!input.quit);

        assert!(TickInput::from_events([InputEvent::Quit]).quit);
        assert_eq!(TickInput::from_events([]), TickInput::default());
    }

    #[test]
    fn test_attached_follows_paddle() {
        let mut state = GameState::new(1);

        let input = TickInput {
            pointer_x: Some(100),
            ..Default::default()
        };
        let report = tick(&mut state, &input, DT);

        assert!(report.events.is_empty());
        assert_eq!(state.phase, Phase::Attached);
        assert_eq!(state.board.paddle.rect.pos.x, 50.0);
        assert_eq!(state.board.ball.pos, Vec2::new(100.0, 450.0));
    }

    #[test]
    fn test_paddle_clamped_to_screen() {
        let mut state = GameState::new(1);

        let input = TickInput {
            pointer_x: Some(-100),
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        assert_eq!(state.board.paddle.rect.pos.x, 0.0);

        let input = TickInput {
            pointer_x: Some(SCREEN_WIDTH + 100),
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        assert_eq!(
            state.board.paddle.rect.pos.x,
            (SCREEN_WIDTH - PADDLE_WIDTH) as f32
        );
    }

    #[test]
    fn test_paddle_extreme_pointer_values() {
        let mut state = GameState::new(1);

        let input = TickInput {
            pointer_x: Some(i32::MIN),
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        assert_eq!(state.board.paddle.rect.pos.x, 0.0);
        assert_eq!(state.board.ball.pos.x, (PADDLE_WIDTH / 2) as f32);

        let input = TickInput {
            pointer_x: Some(i32::MAX),
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        assert_eq!(
            state.board.paddle.rect.pos.x,
            (SCREEN_WIDTH - PADDLE_WIDTH) as f32
        );
    }

    #[test]
    fn test_launch_transitions_and_normalizes() {
        let mut state = GameState::new(1);
        let start = state.board.ball.pos;

        let report = tick(&mut state, &launch_input(), DT);

        assert_eq!(report.events.first(), Some(&GameEvent::Launched));
        assert_eq!(state.phase, Phase::InFlight);
        assert!((state.board.ball.vel.length() - 1.0).abs() < 1e-6);
        assert!(state.board.ball.vel.x > 0.0 && state.board.ball.vel.y < 0.0);
        // Ratio of the launch vector is kept
        let v = state.board.ball.vel;
        assert!((v.y / v.x - LAUNCH_VY / LAUNCH_VX).abs() < 1e-4);
        // Moved on the launch frame
        let expected = start + v * BALL_SPEED * DT;
        assert!((state.board.ball.pos - expected).length() < 1e-3);
    }

    #[test]
    fn test_launch_ignored_in_flight() {
        let mut state = GameState::new(1);
        tick(&mut state, &launch_input(), DT);
        state.board.ball.vel = Vec2::new(-0.6, -0.8);

        let report = tick(&mut state, &launch_input(), DT);

        assert!(!report.events.contains(&GameEvent::Launched));
        assert!((state.board.ball.vel.x + 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_integrate() {
        let mut ball = Ball::new(crate::sim::Rgba::WHITE);
        ball.pos = Vec2::new(100.0, 100.0);
        ball.vel = Vec2::new(0.6, -0.8);

        integrate(&mut ball, 0.5);

        assert!((ball.pos - Vec2::new(190.0, -20.0)).length() < 1e-3);
    }

    #[test]
    fn test_left_wall_flips_vx() {
        let mut state = GameState::new(1);
        state.phase = Phase::InFlight;
        state.board.ball.pos = Vec2::new(0.0, 300.0);
        state.board.ball.vel = Vec2::new(-0.3, -0.5);

        let report = tick(&mut state, &TickInput::default(), DT);

        assert!(report.events.contains(&GameEvent::WallBounce(Wall::Left)));
        assert!((state.board.ball.vel.x - 0.3).abs() < 1e-6);
        assert!(state.board.ball.pos.x > 0.0);
    }

    #[test]
    fn test_brick_broken_stays_broken() {
        let mut state = GameState::new(1);
        state.phase = Phase::InFlight;
        let index = BRICK_COUNT - RECT_COUNT_X;
        // Under the bottom-left brick, heading up
        state.board.ball.pos = Vec2::new(50.0, 248.0);
        state.board.ball.vel = Vec2::new(0.0, -1.0);

        let report = tick(&mut state, &TickInput::default(), DT);
        assert!(report.events.contains(&GameEvent::BrickBroken { index }));
        assert!(!state.board.bricks[index].active);

        // Put the ball back into the same spot: nothing left to hit there
        state.board.ball.pos = Vec2::new(50.0, 248.0);
        state.board.ball.vel = Vec2::new(0.0, -1.0);
        let report = tick(&mut state, &TickInput::default(), DT);
        assert!(!report.events.iter().any(|e| matches!(e, GameEvent::BrickBroken { .. })));

        let snap = crate::sim::RenderSnapshot::capture(&state);
        assert_eq!(snap.bricks.len(), BRICK_COUNT - 1);
    }

    #[test]
    fn test_bottom_exit_resets_round() {
        let mut state = GameState::new(1);
        tick(&mut state, &launch_input(), DT);
        state.board.bricks[0].active = false;
        state.board.paddle.follow_pointer(500);
        state.board.ball.pos = Vec2::new(100.0, 478.0);
        state.board.ball.vel = Vec2::new(0.0, 1.0);

        let report = tick(&mut state, &TickInput::default(), DT);
        assert_eq!(report.lost(), Some(LossCause::BallExited));
        assert_eq!(state.phase, Phase::Resetting);

        let report = tick(&mut state, &TickInput::default(), DT);
        assert_eq!(report.events, vec![GameEvent::RoundReset { round: 2 }]);
        assert_eq!(state.phase, Phase::Attached);
        assert!(state.board.bricks.iter().all(|b| b.active));

        let paddle = &state.board.paddle.rect;
        let expected = Vec2::new(
            paddle.pos.x + paddle.size.x / 2.0,
            paddle.pos.y - state.board.ball.radius,
        );
        assert_eq!(state.board.ball.pos, expected);
        assert_eq!(paddle.pos.x, 450.0);
    }

    #[test]
    fn test_reset_restores_white_paddle() {
        let mut state = GameState::new(1);
        state.phase = Phase::InFlight;
        state.board.ball.pos = Vec2::new(320.0, 452.0);
        state.board.ball.vel = Vec2::new(0.0, 1.0);
        tick(&mut state, &TickInput::default(), DT);
        assert_ne!(state.board.paddle.color, crate::sim::Rgba::WHITE);

        // Drop the ball out of the bottom, then let the reset tick run
        state.board.ball.pos = Vec2::new(100.0, 478.0);
        state.board.ball.vel = Vec2::new(0.0, 1.0);
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, Phase::Resetting);
        tick(&mut state, &TickInput::default(), DT);

        assert_eq!(state.phase, Phase::Attached);
        assert_eq!(state.board.paddle.color, crate::sim::Rgba::WHITE);
    }

    #[test]
    fn test_paddle_underside_ends_round() {
        let mut state = GameState::new(1);
        state.phase = Phase::InFlight;
        state.board.ball.pos = Vec2::new(320.0, 485.0);
        state.board.ball.vel = Vec2::new(0.0, -1.0);

        let report = tick(&mut state, &TickInput::default(), DT);

        assert_eq!(report.lost(), Some(LossCause::PaddleUnderside));
        assert_eq!(state.phase, Phase::Resetting);
        // Only one loss reported even though the ball is also below the screen
        assert_eq!(
            report
                .events
                .iter()
                .filter(|e| matches!(e, GameEvent::RoundLost(_)))
                .count(),
            1
        );

        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, Phase::Attached);
    }

    #[test]
    fn test_paddle_bounce_event() {
        let mut state = GameState::new(1);
        state.phase = Phase::InFlight;
        state.board.ball.pos = Vec2::new(322.0, 452.0);
        state.board.ball.vel = Vec2::new(0.6, 0.8);

        let report = tick(&mut state, &TickInput::default(), DT);

        assert!(report.events.iter().any(|e| matches!(
            e,
            GameEvent::PaddleBounce {
                deflection: Deflection::Nudged(_)
            }
        )));
        assert!(state.board.ball.vel.y < 0.0);
        assert!((state.board.ball.vel.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_quit_flag_passed_through() {
        let mut state = GameState::new(1);
        let input = TickInput {
            quit: true,
            ..Default::default()
        };
        assert!(tick(&mut state, &input, DT).quit);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            TickInput {
                pointer_x: Some(200),
                ..Default::default()
            },
            launch_input(),
            TickInput {
                pointer_x: Some(260),
                ..Default::default()
            },
            TickInput::default(),
        ];

        for _ in 0..100 {
            for input in &inputs {
                tick(&mut state1, input, DT);
                tick(&mut state2, input, DT);
            }
        }

        assert_eq!(state1.round, state2.round);
        assert_eq!(state1.board.ball.pos, state2.board.ball.pos);
        assert_eq!(state1.board.ball.color, state2.board.ball.color);
    }
}
