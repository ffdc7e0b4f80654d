//! Swipe: release velocity above the threshold.

use super::{priority, Emitter, Flow, Recognizer, RecognizerKind};
use crate::config::GestureConfig;
use crate::event::{EnrichedEvent, GestureEventKind};
use crate::input::InputKind;
use crate::session::{PreviousSession, Session};

/// Stateless; evaluated only on the end frame. Fires `swipe` plus the
/// direction-suffixed variant when the velocity on either axis exceeds
/// `swipe_velocity` and the touch count is within `swipe_max_touches`.
#[derive(Debug, Default)]
pub struct SwipeRecognizer;

impl Recognizer for SwipeRecognizer {
    fn kind(&self) -> RecognizerKind {
        RecognizerKind::Swipe
    }

    fn priority(&self) -> i32 {
        priority::SWIPE
    }

    fn handle(
        &mut self,
        ev: &mut EnrichedEvent,
        _session: &mut Session,
        _previous: Option<&PreviousSession>,
        config: &GestureConfig,
        out: &mut Emitter,
    ) -> Flow {
        if ev.kind != InputKind::End {
            return Flow::Continue;
        }

        if config.swipe_max_touches > 0 && ev.touches.len() > config.swipe_max_touches {
            return Flow::Continue;
        }

        if ev.velocity_x > config.swipe_velocity || ev.velocity_y > config.swipe_velocity {
            out.emit(GestureEventKind::Swipe, ev);
            out.emit(GestureEventKind::swipe(ev.direction), ev);
        }
        Flow::Continue
    }
}
