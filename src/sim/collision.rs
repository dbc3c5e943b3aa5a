//! Circle vs axis-aligned rectangle collision detection
//!
//! The ball is tested against one rectangle at a time. A hit reports which
//! face of the rectangle was struck so the resolver knows which velocity
//! component to reflect.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Rect, circle_overlaps_rect, closest_point};

/// Face of a rectangle a ball collision is attributed to
///
/// Classified from the direction of the ball-to-closest-point vector in
/// screen space (y down): `Up` is the top face, `Down` the underside.
/// `Right` is reported when the ball strikes moving rightward (the left
/// face), `Left` when it strikes the right face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
    Up,
    Down,
}

impl Side {
    /// Enumeration order, also the tie-break order
    pub const ALL: [Side; 4] = [Side::Left, Side::Right, Side::Up, Side::Down];

    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Side::Up | Side::Down)
    }
}

/// A detected overlap between the ball and a rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub side: Side,
    /// Closest point on the rectangle to the ball center
    pub point: Vec2,
    /// `point - ball center`
    pub offset: Vec2,
}

/// Check the ball (center + radius) against a rectangle
///
/// Returns `None` when the distance from the center to the closest point
/// exceeds the radius. A center lying inside the rectangle has no defined
/// direction, so the side is chosen by minimum penetration instead.
pub fn detect(center: Vec2, radius: f32, rect: &Rect) -> Option<Contact> {
    if !circle_overlaps_rect(center, radius, rect) {
        return None;
    }

    let point = closest_point(center, rect);
    let offset = point - center;
    let dist = offset.length();

    let side = if dist > 0.0 {
        classify(offset / dist)
    } else {
        min_penetration_side(center, rect)
    };

    Some(Contact {
        side,
        point,
        offset,
    })
}

/// Pick the side whose axis best matches a unit ball-to-contact direction
///
/// Scores are the dot products against the four axes; only a strictly
/// greater score displaces an earlier side.
pub fn classify(dir: Vec2) -> Side {
    let scores = [-dir.x, dir.x, dir.y, -dir.y];

    let mut best = 0;
    for i in 1..scores.len() {
        if scores[i] > scores[best] {
            best = i;
        }
    }
    Side::ALL[best]
}

/// Fallback for a center inside the rectangle: the nearest face wins
fn min_penetration_side(center: Vec2, rect: &Rect) -> Side {
    let min = rect.min();
    let max = rect.max();

    // Depth to the face that a just-outside contact with the same side would touch
    let depths = [
        max.x - center.x, // Left: right face
        center.x - min.x, // Right: left face
        center.y - min.y, // Up: top face
        max.y - center.y, // Down: underside
    ];

    let mut best = 0;
    for i in 1..depths.len() {
        if depths[i] < depths[best] {
            best = i;
        }
    }
    Side::ALL[best]
}
