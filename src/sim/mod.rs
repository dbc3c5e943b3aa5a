//! Simulation module
//!
//! All gameplay logic lives here:
//! - Variable timestep (dt comes from the frame loop)
//! - Seeded RNG only (colors)
//! - Stable iteration order (bricks in grid order, paddle last)
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod resolve;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{Contact, Side, detect};
pub use geometry::{Rect, circle_overlaps_rect, clamp, closest_point};
pub use resolve::{Deflection, Resolution, Wall, resolve_collisions, resolve_walls};
pub use snapshot::{BallSnapshot, RectSnapshot, RenderSnapshot};
pub use state::{Ball, Board, Brick, GameState, Paddle, Phase, Rgba};
pub use tick::{GameEvent, InputEvent, LossCause, TickInput, TickReport, tick};
