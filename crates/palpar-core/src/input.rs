//! Raw platform input and normalized input frames.
//!
//! [`RawInput`] is the inbound boundary: one variant per platform mouse,
//! touch, or pointer event, each carrying a `DOMHighResTimeStamp`-style
//! millisecond timestamp supplied by the host. The [`InputNormalizer`]
//! (see [`crate::normalize`]) turns accepted raw events into [`InputFrame`]s.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Identifier for one active contact (finger, pen tip, or mouse cursor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct ContactId(pub u32);

/// One active touch/pointer/mouse contact.
///
/// Owned transiently by the current input frame; contacts are never
/// persisted beyond a detection session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Contact identifier, stable for the lifetime of the contact.
    pub id: ContactId,
    /// Position in page coordinates.
    pub position: Point,
}

impl Contact {
    /// Create a new contact.
    #[must_use]
    pub const fn new(id: ContactId, position: Point) -> Self {
        Self { id, position }
    }
}

/// Kind of pointer device that produced an input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PointerKind {
    /// Mouse pointer
    #[default]
    Mouse,
    /// Touch pointer
    Touch,
    /// Pen/stylus pointer
    Pen,
}

/// Lifecycle phase of a normalized input frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InputKind {
    /// First contact went down.
    #[default]
    Start,
    /// Contacts moved, or a non-final contact lifted.
    Move,
    /// Contact count reached zero.
    End,
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (wheel click)
    Middle,
    /// Additional button 1
    Button4,
    /// Additional button 2
    Button5,
}

/// A raw platform input event, the boundary contract with the host
/// environment's event system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawInput {
    /// Mouse button pressed.
    MouseDown {
        /// Cursor position
        position: Point,
        /// Button pressed
        button: MouseButton,
        /// Event time in milliseconds
        timestamp_ms: f64,
    },
    /// Mouse moved.
    MouseMove {
        /// Cursor position
        position: Point,
        /// Whether the primary button is held
        primary_down: bool,
        /// Event time in milliseconds
        timestamp_ms: f64,
    },
    /// Mouse button released.
    MouseUp {
        /// Cursor position
        position: Point,
        /// Button released
        button: MouseButton,
        /// Event time in milliseconds
        timestamp_ms: f64,
    },
    /// Touch sequence started or a finger was added.
    TouchStart {
        /// All contacts currently on the surface
        contacts: Vec<Contact>,
        /// Event time in milliseconds
        timestamp_ms: f64,
    },
    /// One or more fingers moved.
    TouchMove {
        /// All contacts currently on the surface
        contacts: Vec<Contact>,
        /// Event time in milliseconds
        timestamp_ms: f64,
    },
    /// A finger lifted; `contacts` holds the remaining contacts.
    TouchEnd {
        /// Contacts still on the surface
        contacts: Vec<Contact>,
        /// Event time in milliseconds
        timestamp_ms: f64,
    },
    /// The platform cancelled the touch sequence (e.g. palm rejection).
    TouchCancel {
        /// Contacts still on the surface
        contacts: Vec<Contact>,
        /// Event time in milliseconds
        timestamp_ms: f64,
    },
    /// Pointer went down.
    PointerDown {
        /// The contact for this pointer
        contact: Contact,
        /// Device kind for this pointer
        kind: PointerKind,
        /// Event time in milliseconds
        timestamp_ms: f64,
    },
    /// Pointer moved.
    PointerMove {
        /// The contact for this pointer
        contact: Contact,
        /// Device kind for this pointer
        kind: PointerKind,
        /// Event time in milliseconds
        timestamp_ms: f64,
    },
    /// Pointer lifted.
    PointerUp {
        /// Identifier of the lifted pointer
        id: ContactId,
        /// Device kind for this pointer
        kind: PointerKind,
        /// Event time in milliseconds
        timestamp_ms: f64,
    },
    /// Pointer cancelled.
    PointerCancel {
        /// Identifier of the cancelled pointer
        id: ContactId,
        /// Device kind for this pointer
        kind: PointerKind,
        /// Event time in milliseconds
        timestamp_ms: f64,
    },
}

impl RawInput {
    /// Event time in milliseconds.
    #[must_use]
    pub const fn timestamp_ms(&self) -> f64 {
        match self {
            Self::MouseDown { timestamp_ms, .. }
            | Self::MouseMove { timestamp_ms, .. }
            | Self::MouseUp { timestamp_ms, .. }
            | Self::TouchStart { timestamp_ms, .. }
            | Self::TouchMove { timestamp_ms, .. }
            | Self::TouchEnd { timestamp_ms, .. }
            | Self::TouchCancel { timestamp_ms, .. }
            | Self::PointerDown { timestamp_ms, .. }
            | Self::PointerMove { timestamp_ms, .. }
            | Self::PointerUp { timestamp_ms, .. }
            | Self::PointerCancel { timestamp_ms, .. } => *timestamp_ms,
        }
    }

    /// The lifecycle phase this event requests, before contact-count
    /// adjustment by the normalizer.
    #[must_use]
    pub const fn phase(&self) -> InputKind {
        match self {
            Self::MouseDown { .. } | Self::TouchStart { .. } | Self::PointerDown { .. } => {
                InputKind::Start
            }
            Self::MouseMove { .. } | Self::TouchMove { .. } | Self::PointerMove { .. } => {
                InputKind::Move
            }
            Self::MouseUp { .. }
            | Self::TouchEnd { .. }
            | Self::TouchCancel { .. }
            | Self::PointerUp { .. }
            | Self::PointerCancel { .. } => InputKind::End,
        }
    }

    /// Whether this is a plain mouse event (not a pointer event of mouse kind).
    #[must_use]
    pub const fn is_mouse(&self) -> bool {
        matches!(
            self,
            Self::MouseDown { .. } | Self::MouseMove { .. } | Self::MouseUp { .. }
        )
    }

    /// Whether this is a touch event.
    #[must_use]
    pub const fn is_touch(&self) -> bool {
        matches!(
            self,
            Self::TouchStart { .. }
                | Self::TouchMove { .. }
                | Self::TouchEnd { .. }
                | Self::TouchCancel { .. }
        )
    }

    /// Whether this is a pointer event.
    #[must_use]
    pub const fn is_pointer(&self) -> bool {
        matches!(
            self,
            Self::PointerDown { .. }
                | Self::PointerMove { .. }
                | Self::PointerUp { .. }
                | Self::PointerCancel { .. }
        )
    }

    /// Device kind reported for the sequence this event belongs to.
    #[must_use]
    pub const fn pointer_kind(&self) -> PointerKind {
        match self {
            Self::MouseDown { .. } | Self::MouseMove { .. } | Self::MouseUp { .. } => {
                PointerKind::Mouse
            }
            Self::TouchStart { .. }
            | Self::TouchMove { .. }
            | Self::TouchEnd { .. }
            | Self::TouchCancel { .. } => PointerKind::Touch,
            Self::PointerDown { kind, .. }
            | Self::PointerMove { kind, .. }
            | Self::PointerUp { kind, .. }
            | Self::PointerCancel { kind, .. } => *kind,
        }
    }
}

/// One normalized input frame: a uniform contact list regardless of the
/// input modality that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputFrame {
    /// Event time in milliseconds.
    pub timestamp_ms: f64,
    /// Active contacts, in stable identifier order for pointer input.
    pub contacts: Vec<Contact>,
    /// Lifecycle phase after contact-count adjustment.
    pub kind: InputKind,
    /// Device kind for the sequence.
    pub pointer_kind: PointerKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_mapping() {
        let down = RawInput::MouseDown {
            position: Point::ORIGIN,
            button: MouseButton::Left,
            timestamp_ms: 0.0,
        };
        assert_eq!(down.phase(), InputKind::Start);
        assert!(down.is_mouse());
        assert_eq!(down.pointer_kind(), PointerKind::Mouse);

        let end = RawInput::TouchEnd {
            contacts: vec![],
            timestamp_ms: 5.0,
        };
        assert_eq!(end.phase(), InputKind::End);
        assert!(end.is_touch());
        assert_eq!(end.timestamp_ms(), 5.0);
    }

    #[test]
    fn test_pointer_kind_passthrough() {
        let pen = RawInput::PointerDown {
            contact: Contact::new(ContactId(7), Point::new(1.0, 2.0)),
            kind: PointerKind::Pen,
            timestamp_ms: 1.0,
        };
        assert_eq!(pen.pointer_kind(), PointerKind::Pen);
        assert!(pen.is_pointer());
        assert!(!pen.is_touch());
    }

    #[test]
    fn test_contact_id_ordering() {
        let mut ids = vec![ContactId(3), ContactId(1), ContactId(2)];
        ids.sort();
        assert_eq!(ids, vec![ContactId(1), ContactId(2), ContactId(3)]);
    }
}
