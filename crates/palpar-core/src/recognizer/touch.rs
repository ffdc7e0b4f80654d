//! Touch: runs first, reports that the user touched the screen.

use super::{priority, Emitter, Flow, Recognizer, RecognizerKind};
use crate::config::GestureConfig;
use crate::event::{EnrichedEvent, GestureEventKind};
use crate::input::{InputKind, PointerKind};
use crate::session::{PreviousSession, Session};

/// Emits `touch` on the start frame. Optionally blocks the default
/// browser action on every frame, and optionally stops detection for
/// mouse-origin input so only touch or pen drives gestures.
#[derive(Debug, Default)]
pub struct TouchRecognizer;

impl Recognizer for TouchRecognizer {
    fn kind(&self) -> RecognizerKind {
        RecognizerKind::Touch
    }

    fn priority(&self) -> i32 {
        priority::TOUCH
    }

    fn handle(
        &mut self,
        ev: &mut EnrichedEvent,
        _session: &mut Session,
        _previous: Option<&PreviousSession>,
        config: &GestureConfig,
        out: &mut Emitter,
    ) -> Flow {
        if config.prevent_mouse_events && ev.pointer_kind == PointerKind::Mouse {
            return Flow::Stop;
        }

        if config.prevent_default {
            out.prevent_default();
        }

        if ev.kind == InputKind::Start {
            out.emit(GestureEventKind::Touch, ev);
        }
        Flow::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::super::testutil::{contact, emitted, enrich, session_for};
    use super::*;

    #[test]
    fn test_touch_emits_on_start_only() {
        let mut recognizer = TouchRecognizer;
        let mut session = session_for(vec![contact(1, 0.0, 0.0)], 0.0);
        let config = GestureConfig::default();

        let mut start = enrich(&mut session, vec![contact(1, 0.0, 0.0)], InputKind::Start, 0.0);
        let mut out = Emitter::default();
        let flow = recognizer.handle(&mut start, &mut session, None, &config, &mut out);
        assert_eq!(flow, Flow::Continue);
        assert_eq!(emitted(&out), vec![GestureEventKind::Touch]);

        let mut mv = enrich(&mut session, vec![contact(1, 5.0, 0.0)], InputKind::Move, 10.0);
        let mut out = Emitter::default();
        recognizer.handle(&mut mv, &mut session, None, &config, &mut out);
        assert!(out.events.is_empty());
    }

    #[test]
    fn test_touch_stops_detection_for_mouse_when_configured() {
        let mut recognizer = TouchRecognizer;
        let mut session = session_for(vec![contact(1, 0.0, 0.0)], 0.0);
        let config = GestureConfig {
            prevent_mouse_events: true,
            ..Default::default()
        };

        let mut ev = enrich(&mut session, vec![contact(1, 0.0, 0.0)], InputKind::Start, 0.0);
        ev.pointer_kind = PointerKind::Mouse;
        let mut out = Emitter::default();
        let flow = recognizer.handle(&mut ev, &mut session, None, &config, &mut out);
        assert_eq!(flow, Flow::Stop);
        assert!(out.events.is_empty());
    }

    #[test]
    fn test_touch_prevent_default_option() {
        let mut recognizer = TouchRecognizer;
        let mut session = session_for(vec![contact(1, 0.0, 0.0)], 0.0);
        let config = GestureConfig {
            prevent_default: true,
            ..Default::default()
        };

        let mut ev = enrich(&mut session, vec![contact(1, 1.0, 0.0)], InputKind::Move, 5.0);
        let mut out = Emitter::default();
        recognizer.handle(&mut ev, &mut session, None, &config, &mut out);
        assert!(out.prevent_default);
    }
}
