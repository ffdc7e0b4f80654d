//! Enriched gesture events and their names.

use crate::geometry::Point;
use crate::input::{Contact, InputKind, PointerKind};
use crate::metrics::Direction;
use serde::{Deserialize, Serialize};

/// Name of an emitted gesture event.
///
/// Hashable and cheap to copy; the dispatcher keys its handler lists on
/// this. [`GestureEventKind::Custom`] carries the name of a user-defined
/// recognizer's event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureEventKind {
    /// First contact went down.
    Touch,
    /// Contact stayed in place for the hold timeout.
    Hold,
    /// Quick touch and release.
    Tap,
    /// Two taps in quick succession at the same place.
    DoubleTap,
    /// High-velocity release.
    Swipe,
    /// Swipe, upward.
    SwipeUp,
    /// Swipe, downward.
    SwipeDown,
    /// Swipe, leftward.
    SwipeLeft,
    /// Swipe, rightward.
    SwipeRight,
    /// Drag started (fires once per drag).
    DragStart,
    /// Continuous drag movement.
    Drag,
    /// Drag, upward.
    DragUp,
    /// Drag, downward.
    DragDown,
    /// Drag, leftward.
    DragLeft,
    /// Drag, rightward.
    DragRight,
    /// Drag ended.
    DragEnd,
    /// Two-finger transform started (fires once per transform).
    TransformStart,
    /// Continuous two-finger transform.
    Transform,
    /// Transform ended.
    TransformEnd,
    /// Rotation component of a transform.
    Rotate,
    /// Scale component of a transform.
    Pinch,
    /// Pinch toward each other (scale below 1).
    PinchIn,
    /// Pinch apart (scale above 1).
    PinchOut,
    /// Last contact lifted.
    Release,
    /// Event of a user-registered recognizer.
    Custom(&'static str),
}

impl GestureEventKind {
    /// Lowercase event name, as dispatched to the host.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Touch => "touch",
            Self::Hold => "hold",
            Self::Tap => "tap",
            Self::DoubleTap => "doubletap",
            Self::Swipe => "swipe",
            Self::SwipeUp => "swipeup",
            Self::SwipeDown => "swipedown",
            Self::SwipeLeft => "swipeleft",
            Self::SwipeRight => "swiperight",
            Self::DragStart => "dragstart",
            Self::Drag => "drag",
            Self::DragUp => "dragup",
            Self::DragDown => "dragdown",
            Self::DragLeft => "dragleft",
            Self::DragRight => "dragright",
            Self::DragEnd => "dragend",
            Self::TransformStart => "transformstart",
            Self::Transform => "transform",
            Self::TransformEnd => "transformend",
            Self::Rotate => "rotate",
            Self::Pinch => "pinch",
            Self::PinchIn => "pinchin",
            Self::PinchOut => "pinchout",
            Self::Release => "release",
            Self::Custom(name) => name,
        }
    }

    /// The direction-suffixed swipe event for `direction`.
    #[must_use]
    pub const fn swipe(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::SwipeUp,
            Direction::Down => Self::SwipeDown,
            Direction::Left => Self::SwipeLeft,
            Direction::Right => Self::SwipeRight,
        }
    }

    /// The direction-suffixed drag event for `direction`.
    #[must_use]
    pub const fn drag(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::DragUp,
            Direction::Down => Self::DragDown,
            Direction::Left => Self::DragLeft,
            Direction::Right => Self::DragRight,
        }
    }
}

impl std::fmt::Display for GestureEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for GestureEventKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Snapshot of the session's first frame.
///
/// Used as the baseline for all derived metrics. The contact list is
/// refreshed when the live contact count changes mid-session (see
/// [`crate::session::Session::recalibrate`]); the center and timestamp
/// always belong to the original first frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStart {
    /// Time of the first frame in milliseconds.
    pub timestamp_ms: f64,
    /// Bounding-box center of the first frame's contacts.
    pub center: Point,
    /// Baseline contact list for scale/rotation.
    pub contacts: Vec<Contact>,
    /// Device kind for the session.
    pub pointer_kind: PointerKind,
}

/// An input frame enriched with metrics derived against the session start.
///
/// This is the payload carried by every dispatched gesture event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedEvent {
    /// Event time in milliseconds.
    pub timestamp_ms: f64,
    /// Active contacts.
    pub touches: Vec<Contact>,
    /// Lifecycle phase of the underlying frame.
    pub kind: InputKind,
    /// Device kind for the sequence.
    pub pointer_kind: PointerKind,
    /// Bounding-box center of the active contacts.
    pub center: Point,
    /// Time since the session start; never negative within a session.
    pub delta_time_ms: f64,
    /// Horizontal movement of the center since the session start.
    pub delta_x: f32,
    /// Vertical movement of the center since the session start.
    pub delta_y: f32,
    /// Horizontal velocity in px/ms; 0 when no time has passed.
    pub velocity_x: f32,
    /// Vertical velocity in px/ms; 0 when no time has passed.
    pub velocity_y: f32,
    /// Distance of the center from the session start center.
    pub distance: f32,
    /// Angle of movement in degrees.
    pub angle: f32,
    /// Dominant movement direction; ties resolve horizontal.
    pub direction: Direction,
    /// Two-finger scale factor; 1 with fewer than two contacts.
    pub scale: f32,
    /// Two-finger rotation in degrees; 0 with fewer than two contacts.
    pub rotation: f32,
    /// The session's start snapshot.
    pub start: SessionStart,
}

impl EnrichedEvent {
    /// Derive the enriched event for a frame against a session start.
    ///
    /// The caller recalibrates the start snapshot first (see
    /// [`crate::session::Session::recalibrate`]).
    #[must_use]
    pub fn derive(start: &SessionStart, frame: &crate::input::InputFrame) -> Self {
        let center = crate::metrics::center(&frame.contacts);
        let delta_time_ms = frame.timestamp_ms - start.timestamp_ms;
        let delta_x = center.x - start.center.x;
        let delta_y = center.y - start.center.y;
        let (velocity_x, velocity_y) = crate::metrics::velocity(delta_time_ms, delta_x, delta_y);
        Self {
            timestamp_ms: frame.timestamp_ms,
            touches: frame.contacts.clone(),
            kind: frame.kind,
            pointer_kind: frame.pointer_kind,
            center,
            delta_time_ms,
            delta_x,
            delta_y,
            velocity_x,
            velocity_y,
            distance: crate::metrics::distance(start.center, center),
            angle: crate::metrics::angle(start.center, center),
            direction: crate::metrics::direction(start.center, center),
            scale: crate::metrics::scale(&start.contacts, &frame.contacts),
            rotation: crate::metrics::rotation(&start.contacts, &frame.contacts),
            start: start.clone(),
        }
    }
}

/// A named gesture event ready for dispatch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GestureEvent {
    /// Event name.
    pub kind: GestureEventKind,
    /// Enriched payload.
    pub data: EnrichedEvent,
}
