//! Axis-aligned rectangle geometry
//!
//! Screen coordinates: x grows to the right, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left origin + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.size.x * 0.5
    }
}

/// Clamp `value` into `[min, max]`
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    min.max(max.min(value))
}

/// Closest point of `rect` (boundary or interior) to `p`, by per-axis clamping
pub fn closest_point(p: Vec2, rect: &Rect) -> Vec2 {
    let min = rect.min();
    let max = rect.max();
    Vec2::new(clamp(p.x, min.x, max.x), clamp(p.y, min.y, max.y))
}

/// Whether a circle overlaps (or touches) the rectangle
pub fn circle_overlaps_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    (closest_point(center, rect) - center).length() <= radius
}
