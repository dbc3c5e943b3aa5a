//! Windowless frontend
//!
//! Plays by itself: the paddle tracks the ball with a drifting offset,
//! the ball is launched as soon as it is attached, and quit is requested
//! after a fixed number of frames.

use super::Frontend;
use crate::sim::{InputEvent, Phase, RenderSnapshot};

#[derive(Debug, Clone, Default)]
pub struct Headless {
    autopilot: bool,
    max_frames: Option<u64>,
    frames: u64,
    last: Option<RenderSnapshot>,
}

impl Headless {
    pub fn new(autopilot: bool, max_frames: Option<u64>) -> Self {
        Self {
            autopilot,
            max_frames,
            frames: 0,
            last: None,
        }
    }

    /// Frames presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Pointer x that keeps the paddle under the ball, off-center by a slow
    /// oscillation so the rally doesn't settle into a vertical loop
    fn steer(&self, frame: &RenderSnapshot) -> i32 {
        let t = self.frames as f32 * 0.05;
        let offset = t.sin() * 25.0 + (t * 0.7).sin() * 12.0;
        (frame.ball.center.x + offset).round() as i32
    }
}

impl Frontend for Headless {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if self.autopilot {
            if let Some(frame) = &self.last {
                events.push(InputEvent::PointerMoved(self.steer(frame)));
                if frame.phase == Phase::Attached {
                    events.push(InputEvent::PointerReleased);
                }
            }
        }

        if self.max_frames.is_some_and(|max| self.frames >= max) {
            events.push(InputEvent::Quit);
        }

        events
    }

    fn present(&mut self, frame: &RenderSnapshot) {
        self.frames += 1;
        log::trace!(
            "frame {}: {} bricks, ball at ({:.1}, {:.1})",
            self.frames,
            frame.bricks.len(),
            frame.ball.center.x,
            frame.ball.center.y
        );
        self.last = Some(frame.clone());
    }
}
