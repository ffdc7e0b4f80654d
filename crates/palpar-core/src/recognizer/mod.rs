//! Gesture recognizers.
//!
//! Each recognizer is a small state machine over the session lifecycle
//! (`Start`/`Move`/`End`). Recognizers inspect the enriched event and emit
//! zero or more named gesture events through the [`Emitter`]; they claim
//! the session (see [`crate::session::Claim`]) to signal the others, and
//! the engine resolves yielding centrally via [`Recognizer::relinquish`].

mod drag;
mod hold;
mod release;
mod swipe;
mod tap;
mod touch;
mod transform;

pub use drag::DragRecognizer;
pub use hold::HoldRecognizer;
pub use release::ReleaseRecognizer;
pub use swipe::SwipeRecognizer;
pub use tap::TapRecognizer;
pub use touch::TouchRecognizer;
pub use transform::TransformRecognizer;

use crate::config::GestureConfig;
use crate::event::{EnrichedEvent, GestureEvent, GestureEventKind};
use crate::session::{Claim, PreviousSession, Session};

/// Detection priorities of the built-in recognizers.
///
/// The registry invokes recognizers in ascending priority order; custom
/// recognizers pick a value relative to these (e.g. "after drag").
pub mod priority {
    /// Touch runs first.
    pub const TOUCH: i32 = i32::MIN;
    /// Hold.
    pub const HOLD: i32 = 10;
    /// Swipe.
    pub const SWIPE: i32 = 40;
    /// Transform, before drag so two-finger input wins.
    pub const TRANSFORM: i32 = 45;
    /// Drag.
    pub const DRAG: i32 = 50;
    /// Tap/doubletap.
    pub const TAP: i32 = 100;
    /// Release runs last.
    pub const RELEASE: i32 = i32::MAX;
    /// Default for custom recognizers that do not choose one.
    pub const CUSTOM_DEFAULT: i32 = 1000;
}

/// Identity of a recognizer, used for the per-gesture enable flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecognizerKind {
    /// The touch recognizer.
    Touch,
    /// The hold recognizer.
    Hold,
    /// The tap/doubletap recognizer.
    Tap,
    /// The swipe recognizer.
    Swipe,
    /// The drag recognizer.
    Drag,
    /// The transform recognizer.
    Transform,
    /// The release recognizer.
    Release,
    /// A user-registered recognizer.
    Custom(&'static str),
}

/// Handler outcome: continue the walk or stop detection entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flow {
    /// Keep invoking the remaining recognizers.
    #[default]
    Continue,
    /// Halt the walk and end the session immediately.
    Stop,
}

/// Collects a recognizer's output for one frame.
#[derive(Debug, Default)]
pub struct Emitter {
    pub(crate) events: Vec<GestureEvent>,
    pub(crate) prevent_default: bool,
    pub(crate) arm_hold: Option<EnrichedEvent>,
    pub(crate) disarm_hold: bool,
}

impl Emitter {
    /// Emit a gesture event carrying the current enriched payload.
    pub fn emit(&mut self, kind: GestureEventKind, data: &EnrichedEvent) {
        self.events.push(GestureEvent {
            kind,
            data: data.clone(),
        });
    }

    /// Request suppression of the platform's default action for the
    /// underlying raw event.
    pub fn prevent_default(&mut self) {
        self.prevent_default = true;
    }

    /// Ask the host to schedule the hold timer, capturing the event the
    /// eventual `hold` will carry.
    pub fn arm_hold(&mut self, data: &EnrichedEvent) {
        self.arm_hold = Some(data.clone());
    }

    /// Cancel any armed hold timer.
    pub fn disarm_hold(&mut self) {
        self.disarm_hold = true;
    }
}

/// A gesture recognizer.
///
/// State, if any, is scoped per recognizer instance (and therefore per
/// gesture surface), not per session.
pub trait Recognizer {
    /// Identity for enable-flag lookup.
    fn kind(&self) -> RecognizerKind;

    /// Position in the detection order, ascending.
    fn priority(&self) -> i32 {
        priority::CUSTOM_DEFAULT
    }

    /// The claim this recognizer places on a session, if it claims at all.
    fn claim(&self) -> Option<Claim> {
        None
    }

    /// Whether this recognizer is mid-gesture (has emitted its start
    /// event and owes an end event).
    fn triggered(&self) -> bool {
        false
    }

    /// Called by the engine instead of [`Recognizer::handle`] when a
    /// different gesture has claimed the session while this recognizer
    /// was mid-gesture. Implementations emit their end event and reset.
    fn relinquish(&mut self, ev: &EnrichedEvent, out: &mut Emitter) {
        let _ = (ev, out);
    }

    /// Inspect one enriched event.
    ///
    /// Returning [`Flow::Stop`] halts the walk over the remaining
    /// recognizers and ends the session.
    fn handle(
        &mut self,
        ev: &mut EnrichedEvent,
        session: &mut Session,
        previous: Option<&PreviousSession>,
        config: &GestureConfig,
        out: &mut Emitter,
    ) -> Flow;
}
