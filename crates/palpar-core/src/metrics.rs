//! Pure metric functions over contact-list snapshots.
//!
//! Every function here is stateless; the session tracker feeds them the
//! start snapshot and the current frame. Undefined inputs yield neutral
//! values (velocity 0, scale 1, rotation 0), never errors.

use crate::geometry::Point;
use crate::input::Contact;
use serde::{Deserialize, Serialize};

/// Cardinal movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Direction {
    /// Moving up (negative y).
    Up,
    /// Moving down (positive y).
    Down,
    /// Moving left (negative x).
    Left,
    /// Moving right (positive x).
    #[default]
    Right,
}

impl Direction {
    /// The axis this direction lies on.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Up | Self::Down => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }

    /// Whether this direction is vertical.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// Lowercase name, used to build direction-suffixed event names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Movement axis, used for drag axis locking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Left/right.
    Horizontal,
    /// Up/down.
    Vertical,
}

/// Midpoint of the bounding box of all contacts.
///
/// This is `(min + max) / 2` independently per axis, NOT the centroid;
/// the two differ for 3+ asymmetric contacts and downstream thresholds
/// depend on the bounding-box form. Empty input yields the origin.
#[must_use]
pub fn center(contacts: &[Contact]) -> Point {
    let mut iter = contacts.iter();
    let Some(first) = iter.next() else {
        return Point::ORIGIN;
    };
    let (mut min_x, mut max_x) = (first.position.x, first.position.x);
    let (mut min_y, mut max_y) = (first.position.y, first.position.y);
    for contact in iter {
        min_x = min_x.min(contact.position.x);
        max_x = max_x.max(contact.position.x);
        min_y = min_y.min(contact.position.y);
        max_y = max_y.max(contact.position.y);
    }
    Point::new((min_x + max_x) / 2.0, (min_y + max_y) / 2.0)
}

/// Absolute velocity of a delta over a duration, in px/ms per axis.
///
/// A zero duration yields zero velocity, not NaN or infinity.
#[must_use]
pub fn velocity(delta_time_ms: f64, delta_x: f32, delta_y: f32) -> (f32, f32) {
    if delta_time_ms == 0.0 {
        return (0.0, 0.0);
    }
    (
        (f64::from(delta_x.abs()) / delta_time_ms) as f32,
        (f64::from(delta_y.abs()) / delta_time_ms) as f32,
    )
}

/// Angle from `from` to `to` in degrees, `atan2` convention.
#[must_use]
pub fn angle(from: Point, to: Point) -> f32 {
    let y = to.y - from.y;
    let x = to.x - from.x;
    y.atan2(x).to_degrees()
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(from: Point, to: Point) -> f32 {
    from.distance(&to)
}

/// Dominant movement direction from `from` to `to`.
///
/// Compares `|dx|` against `|dy|`; ties resolve to the horizontal axis.
#[must_use]
pub fn direction(from: Point, to: Point) -> Direction {
    let x = (from.x - to.x).abs();
    let y = (from.y - to.y).abs();

    if x >= y {
        if from.x - to.x > 0.0 {
            Direction::Left
        } else {
            Direction::Right
        }
    } else if from.y - to.y > 0.0 {
        Direction::Up
    } else {
        Direction::Down
    }
}

/// Scale factor between two contact-list snapshots.
///
/// Ratio of the pairwise distance between the first two contacts at `end`
/// versus `start`; 1.0 (neutral) unless both snapshots have at least two
/// contacts. No scale is 1, pinching in goes toward 0, pinching out above 1.
#[must_use]
pub fn scale(start: &[Contact], end: &[Contact]) -> f32 {
    if start.len() >= 2 && end.len() >= 2 {
        let start_span = distance(start[0].position, start[1].position);
        if start_span == 0.0 {
            return 1.0;
        }
        return distance(end[0].position, end[1].position) / start_span;
    }
    1.0
}

/// Rotation between two contact-list snapshots, in degrees.
///
/// Difference of the pairwise angles (second contact toward first) at
/// `end` versus `start`; 0.0 (neutral) unless both snapshots have at
/// least two contacts.
#[must_use]
pub fn rotation(start: &[Contact], end: &[Contact]) -> f32 {
    if start.len() >= 2 && end.len() >= 2 {
        return angle(end[1].position, end[0].position)
            - angle(start[1].position, start[0].position);
    }
    0.0
}
