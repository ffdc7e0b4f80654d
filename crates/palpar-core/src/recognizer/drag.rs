//! Drag: move with one or more fingers around the page.

use super::{priority, Emitter, Flow, Recognizer, RecognizerKind};
use crate::config::GestureConfig;
use crate::event::{EnrichedEvent, GestureEventKind};
use crate::input::InputKind;
use crate::metrics::{Axis, Direction};
use crate::session::{Claim, PreviousSession, Session};

/// Claims the session once the travel distance exceeds
/// `drag_min_distance`, then emits `dragstart` once, `drag` plus the
/// direction-suffixed variant per move, and `dragend` on release.
///
/// With `drag_lock_to_axis`, the reported direction locks onto the axis
/// the gesture had established once the distance passes
/// `drag_lock_min_distance`, overriding the computed direction from then
/// on.
#[derive(Debug, Default)]
pub struct DragRecognizer {
    triggered: bool,
}

impl DragRecognizer {
    fn locked_direction(ev: &EnrichedEvent, axis: Axis) -> Direction {
        match axis {
            Axis::Vertical => {
                if ev.delta_y < 0.0 {
                    Direction::Up
                } else {
                    Direction::Down
                }
            }
            Axis::Horizontal => {
                if ev.delta_x < 0.0 {
                    Direction::Left
                } else {
                    Direction::Right
                }
            }
        }
    }
}

impl Recognizer for DragRecognizer {
    fn kind(&self) -> RecognizerKind {
        RecognizerKind::Drag
    }

    fn priority(&self) -> i32 {
        priority::DRAG
    }

    fn claim(&self) -> Option<Claim> {
        Some(Claim::Drag)
    }

    fn triggered(&self) -> bool {
        self.triggered
    }

    fn relinquish(&mut self, ev: &EnrichedEvent, out: &mut Emitter) {
        out.emit(GestureEventKind::DragEnd, ev);
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
        if config.drag_max_touches > 0 && ev.touches.len() > config.drag_max_touches {
            return Flow::Continue;
        }

        match ev.kind {
            InputKind::Start => self.triggered = false,
            InputKind::Move => {
                if ev.distance < config.drag_min_distance && session.claimed != Some(Claim::Drag)
                {
                    return Flow::Continue;
                }

                session.claimed = Some(Claim::Drag);

                if session.locked_axis.is_none()
                    && config.drag_lock_to_axis
                    && config.drag_lock_min_distance <= ev.distance
                {
                    // Lock to the axis the gesture had already established.
                    let established = session
                        .last_event
                        .as_ref()
                        .map_or(ev.direction, |last| last.direction);
                    session.locked_axis = Some(established.axis());
                }
                if let Some(axis) = session.locked_axis {
                    if ev.direction.axis() != axis {
                        ev.direction = Self::locked_direction(ev, axis);
                    }
                }

                if !self.triggered {
                    out.emit(GestureEventKind::DragStart, ev);
                    self.triggered = true;
                }

                out.emit(GestureEventKind::Drag, ev);
                out.emit(GestureEventKind::drag(ev.direction), ev);

                if (config.drag_block_vertical && ev.direction.is_vertical())
                    || (config.drag_block_horizontal && !ev.direction.is_vertical())
                {
                    out.prevent_default();
                }
            }
            InputKind::End => {
                if self.triggered {
                    out.emit(GestureEventKind::DragEnd, ev);
                }
                self.triggered = false;
            }
        }
        Flow::Continue
    }
}
