//! The gesture detection engine: session lifecycle and the recognizer
//! walk.
//!
//! One engine per bound target. All state lives on the instance; nothing
//! is process-wide, so independent gesture surfaces never cross-talk.

use crate::config::GestureConfig;
use crate::event::{EnrichedEvent, GestureEvent, GestureEventKind};
use crate::input::{InputFrame, InputKind};
use crate::recognizer::{Emitter, Flow, Recognizer};
use crate::registry::GestureRegistry;
use crate::session::{Claim, PreviousSession, Session};
use serde::{Deserialize, Serialize};

/// Identifies one armed hold timer.
///
/// Tokens are never reused; a timer that was cancelled or superseded
/// fires into a stale token and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HoldToken(u64);

/// A request for the host to schedule the hold timer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoldSchedule {
    /// Token to pass back at fire time.
    pub token: HoldToken,
    /// Delay until the timer is due, in milliseconds.
    pub delay_ms: f64,
}

/// What one frame of detection produced.
#[derive(Debug, Default)]
pub struct DetectOutcome {
    /// Gesture events to dispatch, in emission order.
    pub events: Vec<GestureEvent>,
    /// A recognizer asked to suppress the platform default action.
    pub prevent_default: bool,
    /// The hold timer should be (re)scheduled.
    pub hold_schedule: Option<HoldSchedule>,
    /// Any running hold timer should be cancelled.
    pub hold_cancelled: bool,
}

#[derive(Debug)]
struct ArmedHold {
    token: HoldToken,
    event: EnrichedEvent,
}

/// Session tracker and recognizer walk.
pub struct GestureEngine {
    config: GestureConfig,
    registry: GestureRegistry,
    session: Option<Session>,
    previous: Option<PreviousSession>,
    /// Set between `stop_detect` and the next `start_detect`; late frames
    /// of the old input sequence are ignored while set.
    stopped: bool,
    /// Re-entrancy guard: a recursive `detect` is a no-op.
    in_detect: bool,
    hold_serial: u64,
    armed_hold: Option<ArmedHold>,
}

impl GestureEngine {
    /// Create an engine with the built-in recognizers.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            registry: GestureRegistry::with_defaults(),
            session: None,
            previous: None,
            stopped: false,
            in_detect: false,
            hold_serial: 0,
            armed_hold: None,
        }
    }

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// The previous session snapshot, if any session has ended yet.
    #[must_use]
    pub fn previous_session(&self) -> Option<&PreviousSession> {
        self.previous.as_ref()
    }

    /// Whether a session is currently active.
    #[must_use]
    pub fn session_active(&self) -> bool {
        self.session.is_some()
    }

    /// Add a custom recognizer.
    pub fn register(&mut self, recognizer: Box<dyn Recognizer>) {
        self.registry.register(recognizer);
    }

    /// Begin a detection session for a start frame.
    ///
    /// A no-op while a session is already active: sessions never nest,
    /// and racing start events are tolerated input, not a fault.
    pub fn start_detect(&mut self, frame: InputFrame) -> DetectOutcome {
        if self.session.is_some() {
            return DetectOutcome::default();
        }
        self.stopped = false;
        self.session = Some(Session::open(&frame));
        self.detect(frame)
    }

    /// Run one frame through the recognizers.
    ///
    /// A no-op without an active session, after `stop_detect`, or when
    /// invoked recursively from inside itself.
    pub fn detect(&mut self, frame: InputFrame) -> DetectOutcome {
        let mut outcome = DetectOutcome::default();
        if self.in_detect || self.stopped || self.session.is_none() {
            return outcome;
        }
        self.in_detect = true;

        let mut ev = {
            let session = self.session.as_mut().expect("session checked above");
            session.recalibrate(&frame);
            EnrichedEvent::derive(&session.start, &frame)
        };

        let mut emitter = Emitter::default();
        let mut stop_requested = false;

        for recognizer in self.registry.iter_mut() {
            if !self.config.enabled(recognizer.kind()) {
                continue;
            }

            let session = self.session.as_mut().expect("session held for the walk");

            // The claim moved to a different gesture while this recognizer
            // was mid-gesture: it emits its end event and resets instead
            // of handling the frame.
            if recognizer.triggered() {
                if let Some(own) = recognizer.claim() {
                    if session.claimed != Some(own) {
                        recognizer.relinquish(&ev, &mut emitter);
                        continue;
                    }
                }
            }

            match recognizer.handle(
                &mut ev,
                session,
                self.previous.as_ref(),
                &self.config,
                &mut emitter,
            ) {
                Flow::Continue => {}
                Flow::Stop => {
                    stop_requested = true;
                    break;
                }
            }
        }

        if let Some(session) = self.session.as_mut() {
            session.last_event = Some(ev);
        }

        if emitter.disarm_hold && self.armed_hold.take().is_some() {
            outcome.hold_cancelled = true;
        }
        if let Some(hold_event) = emitter.arm_hold.take() {
            self.hold_serial += 1;
            let token = HoldToken(self.hold_serial);
            self.armed_hold = Some(ArmedHold {
                token,
                event: hold_event,
            });
            outcome.hold_schedule = Some(HoldSchedule {
                token,
                delay_ms: self.config.hold_timeout_ms,
            });
        }

        outcome.events = emitter.events;
        outcome.prevent_default = emitter.prevent_default;

        if stop_requested || frame.kind == InputKind::End {
            self.stop_detect_inner(&mut outcome);
        }

        self.in_detect = false;
        outcome
    }

    /// End the current session immediately.
    ///
    /// Snapshots the session into the previous-session slot and ignores
    /// further frames until the next start. Idempotent: a second call
    /// changes nothing.
    pub fn stop_detect(&mut self) -> DetectOutcome {
        let mut outcome = DetectOutcome::default();
        self.stop_detect_inner(&mut outcome);
        outcome
    }

    fn stop_detect_inner(&mut self, outcome: &mut DetectOutcome) {
        if let Some(session) = self.session.take() {
            self.previous = Some(PreviousSession::from(&session));
        }
        self.stopped = true;
        if self.armed_hold.take().is_some() {
            outcome.hold_cancelled = true;
        }
    }

    /// Deliver a due hold timer.
    ///
    /// Returns the `hold` event only when the token is current and the
    /// session's claim is still Hold — checked at fire time, not at
    /// schedule time, so a gesture recognized in the meantime wins.
    pub fn fire_hold(&mut self, token: HoldToken) -> Option<GestureEvent> {
        if self.armed_hold.as_ref().map(|armed| armed.token) != Some(token) {
            return None;
        }
        if self.session.as_ref().and_then(|s| s.claimed) != Some(Claim::Hold) {
            return None;
        }
        let armed = self.armed_hold.take()?;
        Some(GestureEvent {
            kind: GestureEventKind::Hold,
            data: armed.event,
        })
    }
}

impl std::fmt::Debug for GestureEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureEngine")
            .field("session_active", &self.session.is_some())
            .field("stopped", &self.stopped)
            .field("recognizers", &self.registry.len())
            .finish()
    }
}
