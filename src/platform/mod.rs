//! Platform abstraction layer
//!
//! The simulation never touches a window. A frontend turns its native
//! events into `InputEvent`s and draws whatever `RenderSnapshot` it is
//! handed. Window creation, drawing primitives, and presentation timing
//! belong to the frontend.

pub mod headless;

pub use headless::Headless;

use crate::sim::{InputEvent, RenderSnapshot};

/// A source of input and a sink for frames
pub trait Frontend {
    /// Events received since the previous poll, in arrival order
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Draw one frame
    fn present(&mut self, frame: &RenderSnapshot);
}
