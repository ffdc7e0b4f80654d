//! Gesture detection session state.

use crate::event::{EnrichedEvent, SessionStart};
use crate::input::InputFrame;
use crate::metrics::{self, Axis};
use serde::{Deserialize, Serialize};

/// The gesture currently claiming the session.
///
/// A recognizer claims the session to signal the others that it is
/// mid-gesture; the engine resolves yielding centrally when the claim
/// moves to a different gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Claim {
    /// The hold recognizer armed its timer.
    Hold,
    /// A tap was recognized on release.
    Tap,
    /// A drag is in progress.
    Drag,
    /// A two-finger transform is in progress.
    Transform,
}

/// One gesture-detection session, from first contact to zero contacts.
///
/// Exactly one session is active per engine at a time; sessions never
/// nest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Snapshot of the first frame.
    pub start: SessionStart,
    /// The most recently processed enriched event.
    pub last_event: Option<EnrichedEvent>,
    /// Which gesture currently claims the session, if any.
    pub claimed: Option<Claim>,
    /// Axis a drag has locked onto, if any.
    pub locked_axis: Option<Axis>,
}

impl Session {
    /// Open a session for a start frame.
    #[must_use]
    pub fn open(frame: &InputFrame) -> Self {
        Self {
            start: SessionStart {
                timestamp_ms: frame.timestamp_ms,
                center: metrics::center(&frame.contacts),
                contacts: frame.contacts.clone(),
                pointer_kind: frame.pointer_kind,
            },
            last_event: None,
            claimed: None,
            locked_axis: None,
        }
    }

    /// Refresh the start snapshot's contact list when the live contact
    /// count changes.
    ///
    /// Platform start events rarely carry every finger (users do not land
    /// all fingers in the same frame), so the baseline contact list must
    /// follow the live count. Only the contact list is replaced; the start
    /// center and timestamp keep the original baseline, so scale and
    /// rotation re-baseline on finger changes while center-derived deltas
    /// do not.
    // TODO(product): confirm the full-reset baseline is intended when a
    // finger lifts mid-gesture; it causes a scale/rotation discontinuity.
    pub fn recalibrate(&mut self, frame: &InputFrame) {
        if frame.contacts.len() != self.start.contacts.len() {
            self.start.contacts = frame.contacts.clone();
        }
    }
}

/// Wholesale snapshot of the just-ended session.
///
/// Replaced, never merged, each time a session ends; kept only so the
/// tap recognizer can compare against the immediately preceding session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviousSession {
    /// The claim the session ended with.
    pub claimed: Option<Claim>,
    /// The session's final enriched event.
    pub last_event: Option<EnrichedEvent>,
}

impl From<&Session> for PreviousSession {
    fn from(session: &Session) -> Self {
        Self {
            claimed: session.claimed,
            last_event: session.last_event.clone(),
        }
    }
}
