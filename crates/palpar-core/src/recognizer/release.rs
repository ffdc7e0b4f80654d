//! Release: runs last, reports that the user released the screen.

use super::{priority, Emitter, Flow, Recognizer, RecognizerKind};
use crate::config::GestureConfig;
use crate::event::{EnrichedEvent, GestureEventKind};
use crate::input::InputKind;
use crate::session::{PreviousSession, Session};

/// Emits `release` on the end frame.
#[derive(Debug, Default)]
pub struct ReleaseRecognizer;

impl Recognizer for ReleaseRecognizer {
    fn kind(&self) -> RecognizerKind {
        RecognizerKind::Release
    }

    fn priority(&self) -> i32 {
        priority::RELEASE
    }

    fn handle(
        &mut self,
        ev: &mut EnrichedEvent,
        _session: &mut Session,
        _previous: Option<&PreviousSession>,
        _config: &GestureConfig,
        out: &mut Emitter,
    ) -> Flow {
        if ev.kind == InputKind::End {
            out.emit(GestureEventKind::Release, ev);
        }
        Flow::Continue
    }
}
