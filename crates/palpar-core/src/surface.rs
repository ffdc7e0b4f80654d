//! A bound gesture surface: normalizer, engine, and dispatcher assembled.

use crate::config::{ConfigError, GestureConfig};
use crate::dispatch::{Dispatcher, EventControl};
use crate::engine::{DetectOutcome, GestureEngine, HoldSchedule, HoldToken};
use crate::event::{GestureEvent, GestureEventKind};
use crate::input::{InputKind, RawInput};
use crate::normalize::InputNormalizer;
use crate::recognizer::Recognizer;
use serde::{Deserialize, Serialize};

/// Host effects produced by one input event or timer delivery.
///
/// The host applies `prevent_default` to the source event, schedules a
/// timer for `schedule_hold`, and cancels the running timer on
/// `cancel_hold`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct InputEffects {
    /// Suppress the platform default action of the source event.
    pub prevent_default: bool,
    /// Schedule the hold timer.
    pub schedule_hold: Option<HoldSchedule>,
    /// Cancel any running hold timer.
    pub cancel_hold: bool,
}

/// One gesture-capable target: feeds raw input through normalization,
/// detection, and dispatch, synchronously.
///
/// Each surface is fully independent; binding several elements never
/// shares state between them.
#[derive(Debug)]
pub struct GestureSurface {
    normalizer: InputNormalizer,
    engine: GestureEngine,
    dispatcher: Dispatcher,
    enabled: bool,
}

impl GestureSurface {
    /// Bind a surface with the given configuration.
    ///
    /// Validation happens here, once; live gesture processing never
    /// fails.
    pub fn bind(config: GestureConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            normalizer: InputNormalizer::new(),
            engine: GestureEngine::new(config),
            dispatcher: Dispatcher::new(),
            enabled: true,
        })
    }

    /// Bind a handler for an event kind.
    pub fn on<F>(&mut self, kind: GestureEventKind, handler: F)
    where
        F: FnMut(&GestureEvent, &mut EventControl) + 'static,
    {
        self.dispatcher.on(kind, handler);
    }

    /// Unbind every handler for an event kind.
    pub fn off(&mut self, kind: GestureEventKind) {
        self.dispatcher.off(kind);
    }

    /// Bind an observer that sees every dispatched event.
    pub fn on_any<F>(&mut self, handler: F)
    where
        F: FnMut(&GestureEvent, &mut EventControl) + 'static,
    {
        self.dispatcher.on_any(handler);
    }

    /// Add a custom recognizer.
    pub fn register(&mut self, recognizer: Box<dyn Recognizer>) {
        self.engine.register(recognizer);
    }

    /// Pause or resume detection. While paused, no new session starts;
    /// a session already in flight still runs to completion.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether detection is enabled.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The surface configuration.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        self.engine.config()
    }

    /// Feed one raw platform event through the surface.
    ///
    /// Unknown or inapplicable events are silently ignored.
    pub fn input(&mut self, raw: &RawInput) -> InputEffects {
        let mut effects = InputEffects::default();
        let Some(frame) = self.normalizer.normalize(raw) else {
            return effects;
        };

        if frame.kind == InputKind::Start && !self.enabled {
            return effects;
        }

        let outcome = if frame.kind == InputKind::Start {
            self.engine.start_detect(frame)
        } else {
            self.engine.detect(frame)
        };
        self.apply(outcome, &mut effects);
        effects
    }

    /// Deliver a due hold timer previously requested via
    /// [`InputEffects::schedule_hold`].
    pub fn fire_hold(&mut self, token: HoldToken) -> InputEffects {
        let mut effects = InputEffects::default();
        if let Some(event) = self.engine.fire_hold(token) {
            self.dispatch(&event, &mut effects);
        }
        effects
    }

    /// End the current detection session immediately.
    pub fn stop_detect(&mut self) {
        let _ = self.engine.stop_detect();
    }

    /// Trigger an event manually, bypassing detection.
    pub fn trigger(&mut self, event: &GestureEvent) -> EventControl {
        self.dispatcher.trigger(event)
    }

    fn apply(&mut self, outcome: DetectOutcome, effects: &mut InputEffects) {
        effects.prevent_default |= outcome.prevent_default;
        if outcome.hold_cancelled {
            effects.cancel_hold = true;
        }
        if let Some(schedule) = outcome.hold_schedule {
            effects.schedule_hold = Some(schedule);
        }

        for event in &outcome.events {
            self.dispatch(event, effects);
        }
    }

    fn dispatch(&mut self, event: &GestureEvent, effects: &mut InputEffects) {
        let control = self.dispatcher.trigger(event);
        if control.wants_prevent_default() {
            effects.prevent_default = true;
        }
        if control.wants_stop_detect() {
            let outcome = self.engine.stop_detect();
            if outcome.hold_cancelled {
                effects.cancel_hold = true;
                effects.schedule_hold = None;
            }
        }
    }
}
