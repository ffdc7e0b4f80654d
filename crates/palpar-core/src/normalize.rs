//! Input normalization: heterogeneous raw events to uniform frames.

use crate::input::{Contact, ContactId, InputFrame, InputKind, MouseButton, RawInput};
use std::collections::BTreeMap;

/// Converts raw platform input into normalized [`InputFrame`]s.
///
/// One normalizer per gesture surface. Tracks pointer positions across
/// events, synthesizes a single contact for mouse input, and suppresses
/// the synthetic mouse events touch devices fire after a touch sequence.
#[derive(Debug, Default)]
pub struct InputNormalizer {
    /// Last known contact per pointer id, iterated in id order.
    pointers: BTreeMap<ContactId, Contact>,
    /// Whether the current input sequence drives detection.
    detecting: bool,
    /// A touch or pointer event was seen in this sequence; plain mouse
    /// events are double counts until the sequence resets.
    touch_seen: bool,
    /// Contact list of the last frame that still had contacts. Platform
    /// end events carry no positions, so the final frame reuses this.
    last_move: Option<Vec<Contact>>,
}

impl InputNormalizer {
    /// Create a new normalizer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize one raw event into at most one frame.
    ///
    /// Returns `None` for events that do not participate in detection:
    /// mouse events after touch input, mouse movement with no button
    /// held, and anything before a sequence has started.
    pub fn normalize(&mut self, raw: &RawInput) -> Option<InputFrame> {
        if raw.is_mouse() && self.touch_seen {
            return None;
        }

        // A sequence begins with a touch, a pointer going down, or the
        // primary mouse button held.
        match raw {
            RawInput::MouseDown {
                button: MouseButton::Left,
                ..
            }
            | RawInput::MouseMove {
                primary_down: true, ..
            } => self.detecting = true,
            RawInput::TouchStart { .. }
            | RawInput::TouchMove { .. }
            | RawInput::TouchEnd { .. }
            | RawInput::TouchCancel { .. }
            | RawInput::PointerDown { .. } => {
                self.detecting = true;
                self.touch_seen = true;
            }
            RawInput::PointerMove { .. }
            | RawInput::PointerUp { .. }
            | RawInput::PointerCancel { .. } => self.touch_seen = true,
            _ => {}
        }

        if !self.detecting {
            return None;
        }

        let contacts: Vec<Contact> = match raw {
            RawInput::MouseDown { position, .. } | RawInput::MouseMove { position, .. } => {
                vec![Contact::new(ContactId(0), *position)]
            }
            RawInput::MouseUp { .. } => Vec::new(),
            RawInput::TouchStart { contacts, .. }
            | RawInput::TouchMove { contacts, .. }
            | RawInput::TouchEnd { contacts, .. }
            | RawInput::TouchCancel { contacts, .. } => contacts.clone(),
            RawInput::PointerDown { contact, .. } | RawInput::PointerMove { contact, .. } => {
                self.pointers.insert(contact.id, *contact);
                self.pointers.values().copied().collect()
            }
            RawInput::PointerUp { id, .. } | RawInput::PointerCancel { id, .. } => {
                self.pointers.remove(id);
                self.pointers.values().copied().collect()
            }
        };

        let count = contacts.len();
        let kind = if count == 0 {
            // No contacts left: force the end frame.
            InputKind::End
        } else if raw.phase() == InputKind::End {
            // A contact lifted but others remain: still a move.
            InputKind::Move
        } else {
            raw.phase()
        };

        let contacts = if count == 0 {
            self.last_move.take().unwrap_or_default()
        } else {
            self.last_move = Some(contacts.clone());
            contacts
        };

        let frame = InputFrame {
            timestamp_ms: raw.timestamp_ms(),
            contacts,
            kind,
            pointer_kind: raw.pointer_kind(),
        };

        if count == 0 {
            self.reset();
        }
        Some(frame)
    }

    fn reset(&mut self) {
        self.pointers.clear();
        self.detecting = false;
        self.touch_seen = false;
        self.last_move = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::input::PointerKind;

    fn contact(id: u32, x: f32, y: f32) -> Contact {
        Contact::new(ContactId(id), Point::new(x, y))
    }

    #[test]
    fn test_mouse_sequence() {
        let mut normalizer = InputNormalizer::new();

        let down = normalizer
            .normalize(&RawInput::MouseDown {
                position: Point::new(10.0, 20.0),
                button: MouseButton::Left,
                timestamp_ms: 0.0,
            })
            .expect("frame");
        assert_eq!(down.kind, InputKind::Start);
        assert_eq!(down.contacts.len(), 1);
        assert_eq!(down.contacts[0].position, Point::new(10.0, 20.0));
        assert_eq!(down.pointer_kind, PointerKind::Mouse);

        let mv = normalizer
            .normalize(&RawInput::MouseMove {
                position: Point::new(30.0, 20.0),
                primary_down: true,
                timestamp_ms: 16.0,
            })
            .expect("frame");
        assert_eq!(mv.kind, InputKind::Move);

        let up = normalizer
            .normalize(&RawInput::MouseUp {
                position: Point::new(30.0, 20.0),
                button: MouseButton::Left,
                timestamp_ms: 32.0,
            })
            .expect("frame");
        assert_eq!(up.kind, InputKind::End);
        // End frames reuse the last move frame's contacts.
        assert_eq!(up.contacts[0].position, Point::new(30.0, 20.0));
    }

    #[test]
    fn test_mouse_move_without_button_ignored() {
        let mut normalizer = InputNormalizer::new();
        let frame = normalizer.normalize(&RawInput::MouseMove {
            position: Point::new(5.0, 5.0),
            primary_down: false,
            timestamp_ms: 0.0,
        });
        assert!(frame.is_none());
    }

    #[test]
    fn test_non_primary_mouse_button_ignored() {
        let mut normalizer = InputNormalizer::new();
        let frame = normalizer.normalize(&RawInput::MouseDown {
            position: Point::new(5.0, 5.0),
            button: MouseButton::Right,
            timestamp_ms: 0.0,
        });
        assert!(frame.is_none());
    }

    #[test]
    fn test_mouse_after_touch_suppressed() {
        let mut normalizer = InputNormalizer::new();
        normalizer.normalize(&RawInput::TouchStart {
            contacts: vec![contact(1, 0.0, 0.0)],
            timestamp_ms: 0.0,
        });

        // Touch devices fire a synthetic mouse event mid-sequence.
        let ghost = normalizer.normalize(&RawInput::MouseDown {
            position: Point::new(0.0, 0.0),
            button: MouseButton::Left,
            timestamp_ms: 1.0,
        });
        assert!(ghost.is_none());
    }

    #[test]
    fn test_touch_end_with_remaining_contacts_downgrades_to_move() {
        let mut normalizer = InputNormalizer::new();
        normalizer.normalize(&RawInput::TouchStart {
            contacts: vec![contact(1, 0.0, 0.0), contact(2, 50.0, 0.0)],
            timestamp_ms: 0.0,
        });

        let frame = normalizer
            .normalize(&RawInput::TouchEnd {
                contacts: vec![contact(2, 50.0, 0.0)],
                timestamp_ms: 10.0,
            })
            .expect("frame");
        assert_eq!(frame.kind, InputKind::Move);
        assert_eq!(frame.contacts.len(), 1);
    }

    #[test]
    fn test_touch_end_reuses_last_move_contacts() {
        let mut normalizer = InputNormalizer::new();
        normalizer.normalize(&RawInput::TouchStart {
            contacts: vec![contact(1, 0.0, 0.0)],
            timestamp_ms: 0.0,
        });
        normalizer.normalize(&RawInput::TouchMove {
            contacts: vec![contact(1, 40.0, 0.0)],
            timestamp_ms: 10.0,
        });

        let end = normalizer
            .normalize(&RawInput::TouchEnd {
                contacts: vec![],
                timestamp_ms: 20.0,
            })
            .expect("frame");
        assert_eq!(end.kind, InputKind::End);
        assert_eq!(end.contacts[0].position, Point::new(40.0, 0.0));
    }

    #[test]
    fn test_sequence_resets_after_end() {
        let mut normalizer = InputNormalizer::new();
        normalizer.normalize(&RawInput::TouchStart {
            contacts: vec![contact(1, 0.0, 0.0)],
            timestamp_ms: 0.0,
        });
        normalizer.normalize(&RawInput::TouchEnd {
            contacts: vec![],
            timestamp_ms: 10.0,
        });

        // The touch flag is per-sequence: mouse input works again.
        let down = normalizer.normalize(&RawInput::MouseDown {
            position: Point::new(1.0, 1.0),
            button: MouseButton::Left,
            timestamp_ms: 20.0,
        });
        assert!(down.is_some());
    }

    #[test]
    fn test_pointer_sequence_id_order() {
        let mut normalizer = InputNormalizer::new();
        normalizer.normalize(&RawInput::PointerDown {
            contact: contact(7, 10.0, 0.0),
            kind: PointerKind::Touch,
            timestamp_ms: 0.0,
        });
        let frame = normalizer
            .normalize(&RawInput::PointerDown {
                contact: contact(3, 0.0, 0.0),
                kind: PointerKind::Touch,
                timestamp_ms: 1.0,
            })
            .expect("frame");

        // Contacts iterate in id order regardless of arrival order.
        assert_eq!(frame.contacts[0].id, ContactId(3));
        assert_eq!(frame.contacts[1].id, ContactId(7));
    }

    #[test]
    fn test_pointer_up_drops_one_entry() {
        let mut normalizer = InputNormalizer::new();
        normalizer.normalize(&RawInput::PointerDown {
            contact: contact(1, 0.0, 0.0),
            kind: PointerKind::Touch,
            timestamp_ms: 0.0,
        });
        normalizer.normalize(&RawInput::PointerDown {
            contact: contact(2, 50.0, 0.0),
            kind: PointerKind::Touch,
            timestamp_ms: 1.0,
        });

        let frame = normalizer
            .normalize(&RawInput::PointerUp {
                id: ContactId(1),
                kind: PointerKind::Touch,
                timestamp_ms: 2.0,
            })
            .expect("frame");
        assert_eq!(frame.kind, InputKind::Move);
        assert_eq!(frame.contacts.len(), 1);
        assert_eq!(frame.contacts[0].id, ContactId(2));

        let end = normalizer
            .normalize(&RawInput::PointerUp {
                id: ContactId(2),
                kind: PointerKind::Touch,
                timestamp_ms: 3.0,
            })
            .expect("frame");
        assert_eq!(end.kind, InputKind::End);
        // Reuses the one-contact list from the downgraded move frame.
        assert_eq!(end.contacts.len(), 1);
    }

    #[test]
    fn test_tap_without_move_reuses_start_contacts() {
        let mut normalizer = InputNormalizer::new();
        normalizer.normalize(&RawInput::MouseDown {
            position: Point::new(10.0, 10.0),
            button: MouseButton::Left,
            timestamp_ms: 0.0,
        });

        let end = normalizer
            .normalize(&RawInput::MouseUp {
                position: Point::new(10.0, 10.0),
                button: MouseButton::Left,
                timestamp_ms: 50.0,
            })
            .expect("frame");
        // No move frame happened; the start frame's contacts serve.
        assert_eq!(end.contacts.len(), 1);
        assert_eq!(end.contacts[0].position, Point::new(10.0, 10.0));
    }
}
