//! Transform: two-finger scale and rotation.

use super::{priority, Emitter, Flow, Recognizer, RecognizerKind};
use crate::config::GestureConfig;
use crate::event::{EnrichedEvent, GestureEventKind};
use crate::input::InputKind;
use crate::session::{Claim, PreviousSession, Session};

/// Requires at least two contacts. Claims the session once the scale
/// factor deviates from 1 by `transform_min_scale` or the rotation
/// exceeds `transform_min_rotation` degrees, then emits
/// `transformstart` once, `transform` per move, `rotate` and
/// `pinch`/`pinchin`/`pinchout` for the components that crossed their
/// thresholds, and `transformend` on release.
#[derive(Debug, Default)]
pub struct TransformRecognizer {
    triggered: bool,
}

impl Recognizer for TransformRecognizer {
    fn kind(&self) -> RecognizerKind {
        RecognizerKind::Transform
    }

    fn priority(&self) -> i32 {
        priority::TRANSFORM
    }

    fn claim(&self) -> Option<Claim> {
        Some(Claim::Transform)
    }

    fn triggered(&self) -> bool {
        self.triggered
    }

    fn relinquish(&mut self, ev: &EnrichedEvent, out: &mut Emitter) {
        out.emit(GestureEventKind::TransformEnd, ev);
        self.triggered = false;
    }

    fn handle(
        &mut self,
        ev: &mut EnrichedEvent,
        session: &mut Session,
        _previous: Option<&PreviousSession>,
        config: &GestureConfig,
        out: &mut Emitter,
    ) -> Flow {
        if ev.touches.len() < 2 {
            return Flow::Continue;
        }

        if config.transform_always_block {
            out.prevent_default();
        }

        match ev.kind {
            InputKind::Start => self.triggered = false,
            InputKind::Move => {
                let scale_deviation = (1.0 - ev.scale).abs();
                let rotation_amount = ev.rotation.abs();

                if scale_deviation < config.transform_min_scale
                    && rotation_amount < config.transform_min_rotation
                {
                    return Flow::Continue;
                }

                session.claimed = Some(Claim::Transform);

                if !self.triggered {
                    out.emit(GestureEventKind::TransformStart, ev);
                    self.triggered = true;
                }

                out.emit(GestureEventKind::Transform, ev);

                if rotation_amount > config.transform_min_rotation {
                    out.emit(GestureEventKind::Rotate, ev);
                }

                if scale_deviation > config.transform_min_scale {
                    out.emit(GestureEventKind::Pinch, ev);
                    let pinch = if ev.scale < 1.0 {
                        GestureEventKind::PinchIn
                    } else {
                        GestureEventKind::PinchOut
                    };
                    out.emit(pinch, ev);
                }
            }
            InputKind::End => {
                if self.triggered {
                    out.emit(GestureEventKind::TransformEnd, ev);
                }
                self.triggered = false;
            }
        }
        Flow::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::super::testutil::{contact, emitted, enrich, session_for};
    use super::*;

    #[test]
    fn test_transform_requires_two_contacts() {
        let mut recognizer = TransformRecognizer::default();
        let mut session = session_for(vec![contact(1, 0.0, 0.0)], 0.0);
        let config = GestureConfig::default();

        let mut mv = enrich(&mut session, vec![contact(1, 50.0, 0.0)], InputKind::Move, 10.0);
        let mut out = Emitter::default();
        recognizer.handle(&mut mv, &mut session, None, &config, &mut out);
        assert!(out.events.is_empty());
    }

    #[test]
    fn test_transform_pinch_out() {
        let mut recognizer = TransformRecognizer::default();
        let mut session = session_for(vec![contact(1, 0.0, 0.0), contact(2, 100.0, 0.0)], 0.0);
        let config = GestureConfig::default();

        // Fingers spread from 100 to 200 apart: scale 2.0.
        let mut mv = enrich(
            &mut session,
            vec![contact(1, -50.0, 0.0), contact(2, 150.0, 0.0)],
            InputKind::Move,
            10.0,
        );
        let mut out = Emitter::default();
        recognizer.handle(&mut mv, &mut session, None, &config, &mut out);
        assert_eq!(
            emitted(&out),
            vec![
                GestureEventKind::TransformStart,
                GestureEventKind::Transform,
                GestureEventKind::Pinch,
                GestureEventKind::PinchOut,
            ]
        );
        assert_eq!(session.claimed, Some(Claim::Transform));
    }

    #[test]
    fn test_transform_pinch_in() {
        let mut recognizer = TransformRecognizer::default();
        let mut session = session_for(vec![contact(1, 0.0, 0.0), contact(2, 100.0, 0.0)], 0.0);
        let config = GestureConfig::default();

        let mut mv = enrich(
            &mut session,
            vec![contact(1, 25.0, 0.0), contact(2, 75.0, 0.0)],
            InputKind::Move,
            10.0,
        );
        let mut out = Emitter::default();
        recognizer.handle(&mut mv, &mut session, None, &config, &mut out);
        assert!(emitted(&out).contains(&GestureEventKind::PinchIn));
    }

    #[test]
    fn test_transform_rotate() {
        let mut recognizer = TransformRecognizer::default();
        let mut session = session_for(vec![contact(1, 0.0, 0.0), contact(2, 100.0, 0.0)], 0.0);
        let config = GestureConfig::default();

        // Second finger orbits: same span, ~45 degrees of rotation.
        let mut mv = enrich(
            &mut session,
            vec![contact(1, 0.0, 0.0), contact(2, 70.7, 70.7)],
            InputKind::Move,
            10.0,
        );
        let mut out = Emitter::default();
        recognizer.handle(&mut mv, &mut session, None, &config, &mut out);
        let kinds = emitted(&out);
        assert!(kinds.contains(&GestureEventKind::Rotate));
        assert!(kinds.contains(&GestureEventKind::Transform));
    }

    #[test]
    fn test_transform_below_thresholds_is_silent() {
        let mut recognizer = TransformRecognizer::default();
        let mut session = session_for(vec![contact(1, 0.0, 0.0), contact(2, 1000.0, 0.0)], 0.0);
        let config = GestureConfig::default();

        // Span shifts by well under 1%: no transform.
        let mut mv = enrich(
            &mut session,
            vec![contact(1, 0.0, 0.0), contact(2, 1001.0, 0.0)],
            InputKind::Move,
            10.0,
        );
        let mut out = Emitter::default();
        recognizer.handle(&mut mv, &mut session, None, &config, &mut out);
        assert!(out.events.is_empty());
        assert!(session.claimed.is_none());
    }

    #[test]
    fn test_transform_end_emits_transformend() {
        let mut recognizer = TransformRecognizer::default();
        let mut session = session_for(vec![contact(1, 0.0, 0.0), contact(2, 100.0, 0.0)], 0.0);
        let config = GestureConfig::default();

        let mut mv = enrich(
            &mut session,
            vec![contact(1, -50.0, 0.0), contact(2, 150.0, 0.0)],
            InputKind::Move,
            10.0,
        );
        let mut out = Emitter::default();
        recognizer.handle(&mut mv, &mut session, None, &config, &mut out);

        let mut end = enrich(
            &mut session,
            vec![contact(1, -50.0, 0.0), contact(2, 150.0, 0.0)],
            InputKind::End,
            20.0,
        );
        let mut out = Emitter::default();
        recognizer.handle(&mut end, &mut session, None, &config, &mut out);
        assert_eq!(emitted(&out), vec![GestureEventKind::TransformEnd]);
    }

    #[test]
    fn test_transform_always_block() {
        let mut recognizer = TransformRecognizer::default();
        let mut session = session_for(vec![contact(1, 0.0, 0.0), contact(2, 100.0, 0.0)], 0.0);
        let config = GestureConfig {
            transform_always_block: true,
            ..Default::default()
        };

        let mut mv = enrich(
            &mut session,
            vec![contact(1, 0.0, 0.0), contact(2, 100.0, 0.0)],
            InputKind::Move,
            10.0,
        );
        let mut out = Emitter::default();
        recognizer.handle(&mut mv, &mut session, None, &config, &mut out);
        assert!(out.prevent_default);
    }
}
