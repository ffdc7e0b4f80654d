//! Tap and double tap.

use super::{priority, Emitter, Flow, Recognizer, RecognizerKind};
use crate::config::GestureConfig;
use crate::event::{EnrichedEvent, GestureEventKind};
use crate::input::InputKind;
use crate::metrics;
use crate::session::{Claim, PreviousSession, Session};

/// Evaluated on the end frame. A release within `tap_max_touch_time_ms`
/// and `tap_max_distance` is a tap; if the immediately preceding session
/// was also a tap, close enough and recent enough, it is a double tap.
/// Double-tap detection compares against the previous session, which is
/// why the engine keeps the [`PreviousSession`] snapshot at all.
#[derive(Debug, Default)]
pub struct TapRecognizer;

impl Recognizer for TapRecognizer {
    fn kind(&self) -> RecognizerKind {
        RecognizerKind::Tap
    }

    fn priority(&self) -> i32 {
        priority::TAP
    }

    fn claim(&self) -> Option<Claim> {
        Some(Claim::Tap)
    }

    fn handle(
        &mut self,
        ev: &mut EnrichedEvent,
        session: &mut Session,
        previous: Option<&PreviousSession>,
        config: &GestureConfig,
        out: &mut Emitter,
    ) -> Flow {
        if ev.kind != InputKind::End {
            return Flow::Continue;
        }

        // Too slow or travelled too far: not a tap.
        if ev.delta_time_ms > config.tap_max_touch_time_ms
            || ev.distance > config.tap_max_distance
        {
            return Flow::Continue;
        }

        let mut did_doubletap = false;
        if let Some(prev) = previous {
            if prev.claimed == Some(Claim::Tap) {
                if let Some(last) = &prev.last_event {
                    if ev.timestamp_ms - last.timestamp_ms < config.doubletap_interval_ms
                        && metrics::distance(last.center, ev.center) < config.doubletap_distance
                    {
                        out.emit(GestureEventKind::DoubleTap, ev);
                        did_doubletap = true;
                    }
                }
            }
        }

        if !did_doubletap || config.tap_always {
            session.claimed = Some(Claim::Tap);
            out.emit(GestureEventKind::Tap, ev);
        }
        Flow::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::super::testutil::{contact, emitted, enrich, session_for};
    use super::*;

    fn previous_tap(center_x: f32, timestamp_ms: f64) -> PreviousSession {
        let mut session = session_for(vec![contact(1, center_x, 100.0)], timestamp_ms - 50.0);
        let last = enrich(
            &mut session,
            vec![contact(1, center_x, 100.0)],
            InputKind::End,
            timestamp_ms,
        );
        PreviousSession {
            claimed: Some(Claim::Tap),
            last_event: Some(last),
        }
    }

    #[test]
    fn test_tap_within_limits() {
        let mut recognizer = TapRecognizer;
        let mut session = session_for(vec![contact(1, 10.0, 10.0)], 0.0);
        let config = GestureConfig::default();

        let mut end = enrich(&mut session, vec![contact(1, 12.0, 10.0)], InputKind::End, 100.0);
        let mut out = Emitter::default();
        recognizer.handle(&mut end, &mut session, None, &config, &mut out);
        assert_eq!(emitted(&out), vec![GestureEventKind::Tap]);
        assert_eq!(session.claimed, Some(Claim::Tap));
    }

    #[test]
    fn test_tap_rejects_slow_release() {
        let mut recognizer = TapRecognizer;
        let mut session = session_for(vec![contact(1, 10.0, 10.0)], 0.0);
        let config = GestureConfig::default();

        let mut end = enrich(&mut session, vec![contact(1, 10.0, 10.0)], InputKind::End, 400.0);
        let mut out = Emitter::default();
        recognizer.handle(&mut end, &mut session, None, &config, &mut out);
        assert!(out.events.is_empty());
    }

    #[test]
    fn test_tap_rejects_travel() {
        let mut recognizer = TapRecognizer;
        let mut session = session_for(vec![contact(1, 0.0, 0.0)], 0.0);
        let config = GestureConfig::default();

        let mut end = enrich(&mut session, vec![contact(1, 50.0, 0.0)], InputKind::End, 100.0);
        let mut out = Emitter::default();
        recognizer.handle(&mut end, &mut session, None, &config, &mut out);
        assert!(out.events.is_empty());
    }

    #[test]
    fn test_doubletap_with_tap_always() {
        let mut recognizer = TapRecognizer;
        let mut session = session_for(vec![contact(1, 100.0, 100.0)], 400.0);
        let config = GestureConfig::default();
        let previous = previous_tap(100.0, 300.0);

        let mut end = enrich(
            &mut session,
            vec![contact(1, 100.0, 100.0)],
            InputKind::End,
            450.0,
        );
        let mut out = Emitter::default();
        recognizer.handle(&mut end, &mut session, Some(&previous), &config, &mut out);
        // tap_always defaults on: both fire.
        assert_eq!(
            emitted(&out),
            vec![GestureEventKind::DoubleTap, GestureEventKind::Tap]
        );
    }

    #[test]
    fn test_doubletap_without_tap_always() {
        let mut recognizer = TapRecognizer;
        let mut session = session_for(vec![contact(1, 100.0, 100.0)], 400.0);
        let config = GestureConfig {
            tap_always: false,
            ..Default::default()
        };
        let previous = previous_tap(100.0, 300.0);

        let mut end = enrich(
            &mut session,
            vec![contact(1, 100.0, 100.0)],
            InputKind::End,
            450.0,
        );
        let mut out = Emitter::default();
        recognizer.handle(&mut end, &mut session, Some(&previous), &config, &mut out);
        assert_eq!(emitted(&out), vec![GestureEventKind::DoubleTap]);
        // The session was not claimed as tap: a third tap will not chain.
        assert!(session.claimed.is_none());
    }

    #[test]
    fn test_doubletap_interval_expired() {
        let mut recognizer = TapRecognizer;
        let mut session = session_for(vec![contact(1, 100.0, 100.0)], 900.0);
        let config = GestureConfig::default();
        let previous = previous_tap(100.0, 300.0);

        let mut end = enrich(
            &mut session,
            vec![contact(1, 100.0, 100.0)],
            InputKind::End,
            950.0,
        );
        let mut out = Emitter::default();
        recognizer.handle(&mut end, &mut session, Some(&previous), &config, &mut out);
        assert_eq!(emitted(&out), vec![GestureEventKind::Tap]);
    }

    #[test]
    fn test_doubletap_too_far_from_first() {
        let mut recognizer = TapRecognizer;
        let mut session = session_for(vec![contact(1, 200.0, 100.0)], 400.0);
        let config = GestureConfig::default();
        let previous = previous_tap(100.0, 300.0);

        let mut end = enrich(
            &mut session,
            vec![contact(1, 200.0, 100.0)],
            InputKind::End,
            450.0,
        );
        let mut out = Emitter::default();
        recognizer.handle(&mut end, &mut session, Some(&previous), &config, &mut out);
        assert_eq!(emitted(&out), vec![GestureEventKind::Tap]);
    }

    #[test]
    fn test_previous_non_tap_session_does_not_chain() {
        let mut recognizer = TapRecognizer;
        let mut session = session_for(vec![contact(1, 100.0, 100.0)], 400.0);
        let config = GestureConfig::default();
        let previous = PreviousSession {
            claimed: Some(Claim::Drag),
            last_event: previous_tap(100.0, 300.0).last_event,
        };

        let mut end = enrich(
            &mut session,
            vec![contact(1, 100.0, 100.0)],
            InputKind::End,
            450.0,
        );
        let mut out = Emitter::default();
        recognizer.handle(&mut end, &mut session, Some(&previous), &config, &mut out);
        assert_eq!(emitted(&out), vec![GestureEventKind::Tap]);
    }
}
