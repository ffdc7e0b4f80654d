//! Hold: contact stays at the same place for a while.

use super::{priority, Emitter, Flow, Recognizer, RecognizerKind};
use crate::config::GestureConfig;
use crate::event::EnrichedEvent;
use crate::input::InputKind;
use crate::session::{Claim, PreviousSession, Session};

/// Arms the hold timer on the start frame and claims the session; the
/// timer is disarmed when the contact travels past `hold_threshold` or
/// lifts. The engine delivers the timer only if the session's claim is
/// still Hold at fire time, so a gesture recognized in the meantime
/// silently wins.
#[derive(Debug, Default)]
pub struct HoldRecognizer;

impl Recognizer for HoldRecognizer {
    fn kind(&self) -> RecognizerKind {
        RecognizerKind::Hold
    }

    fn priority(&self) -> i32 {
        priority::HOLD
    }

    fn claim(&self) -> Option<Claim> {
        Some(Claim::Hold)
    }

    fn handle(
        &mut self,
        ev: &mut EnrichedEvent,
        session: &mut Session,
        _previous: Option<&PreviousSession>,
        config: &GestureConfig,
        out: &mut Emitter,
    ) -> Flow {
        match ev.kind {
            InputKind::Start => {
                session.claimed = Some(Claim::Hold);
                out.arm_hold(ev);
            }
            InputKind::Move => {
                if ev.distance > config.hold_threshold {
                    out.disarm_hold();
                }
            }
            InputKind::End => out.disarm_hold(),
        }
        Flow::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::super::testutil::{contact, enrich, session_for};
    use super::*;

    #[test]
    fn test_hold_arms_and_claims_on_start() {
        let mut recognizer = HoldRecognizer;
        let mut session = session_for(vec![contact(1, 0.0, 0.0)], 0.0);
        let config = GestureConfig::default();

        let mut ev = enrich(&mut session, vec![contact(1, 0.0, 0.0)], InputKind::Start, 0.0);
        let mut out = Emitter::default();
        recognizer.handle(&mut ev, &mut session, None, &config, &mut out);

        assert_eq!(session.claimed, Some(Claim::Hold));
        assert!(out.arm_hold.is_some());
        assert!(!out.disarm_hold);
    }

    #[test]
    fn test_hold_disarms_past_threshold() {
        let mut recognizer = HoldRecognizer;
        let mut session = session_for(vec![contact(1, 0.0, 0.0)], 0.0);
        let config = GestureConfig::default();

        // Within the threshold: the timer stays armed.
        let mut small = enrich(&mut session, vec![contact(1, 0.5, 0.0)], InputKind::Move, 10.0);
        let mut out = Emitter::default();
        recognizer.handle(&mut small, &mut session, None, &config, &mut out);
        assert!(!out.disarm_hold);

        let mut big = enrich(&mut session, vec![contact(1, 30.0, 0.0)], InputKind::Move, 20.0);
        let mut out = Emitter::default();
        recognizer.handle(&mut big, &mut session, None, &config, &mut out);
        assert!(out.disarm_hold);
    }

    #[test]
    fn test_hold_disarms_on_end() {
        let mut recognizer = HoldRecognizer;
        let mut session = session_for(vec![contact(1, 0.0, 0.0)], 0.0);
        let config = GestureConfig::default();

        let mut ev = enrich(&mut session, vec![contact(1, 0.0, 0.0)], InputKind::End, 100.0);
        let mut out = Emitter::default();
        recognizer.handle(&mut ev, &mut session, None, &config, &mut out);
        assert!(out.disarm_hold);
    }
}
