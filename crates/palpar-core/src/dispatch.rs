//! Event dispatch: handler registry and the per-event control capability.

use crate::event::{GestureEvent, GestureEventKind};
use std::collections::HashMap;

/// The three control operations a gesture handler may invoke, threaded
/// alongside the event payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventControl {
    prevent_default: bool,
    stop_propagation: bool,
    stop_detect: bool,
}

impl EventControl {
    /// Suppress the platform default action for the underlying raw event.
    pub fn prevent_default(&mut self) {
        self.prevent_default = true;
    }

    /// Stop invoking further handlers for this event.
    pub fn stop_propagation(&mut self) {
        self.stop_propagation = true;
    }

    /// End the current detection session after this dispatch; useful
    /// right after a swipe was recognized.
    pub fn stop_detect(&mut self) {
        self.stop_detect = true;
    }

    /// Whether a handler requested default suppression.
    #[must_use]
    pub const fn wants_prevent_default(&self) -> bool {
        self.prevent_default
    }

    /// Whether a handler stopped propagation.
    #[must_use]
    pub const fn propagation_stopped(&self) -> bool {
        self.stop_propagation
    }

    /// Whether a handler requested the session to end.
    #[must_use]
    pub const fn wants_stop_detect(&self) -> bool {
        self.stop_detect
    }
}

type GestureHandler = Box<dyn FnMut(&GestureEvent, &mut EventControl)>;

/// Per-surface listener registry.
///
/// Handlers are keyed by event kind and invoked in registration order
/// until one stops propagation. Any-event observers run before the
/// keyed handlers and see every dispatched event; a host environment
/// uses one to re-dispatch gestures as native events.
#[derive(Default)]
pub struct Dispatcher {
    handlers: HashMap<GestureEventKind, Vec<GestureHandler>>,
    observers: Vec<GestureHandler>,
}

impl Dispatcher {
    /// An empty dispatcher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a handler for an event kind.
    pub fn on<F>(&mut self, kind: GestureEventKind, handler: F)
    where
        F: FnMut(&GestureEvent, &mut EventControl) + 'static,
    {
        self.handlers.entry(kind).or_default().push(Box::new(handler));
    }

    /// Bind an observer for every event kind.
    pub fn on_any<F>(&mut self, handler: F)
    where
        F: FnMut(&GestureEvent, &mut EventControl) + 'static,
    {
        self.observers.push(Box::new(handler));
    }

    /// Unbind every handler for an event kind.
    pub fn off(&mut self, kind: GestureEventKind) {
        self.handlers.remove(&kind);
    }

    /// Whether any handler is bound for an event kind.
    #[must_use]
    pub fn has_handlers(&self, kind: GestureEventKind) -> bool {
        self.handlers.get(&kind).is_some_and(|list| !list.is_empty())
    }

    /// Invoke the observers, then the handlers bound for the event's
    /// kind.
    pub fn trigger(&mut self, event: &GestureEvent) -> EventControl {
        let mut control = EventControl::default();
        for observer in &mut self.observers {
            observer(event, &mut control);
        }
        if control.propagation_stopped() {
            return control;
        }
        if let Some(list) = self.handlers.get_mut(&event.kind) {
            for handler in list.iter_mut() {
                handler(event, &mut control);
                if control.propagation_stopped() {
                    break;
                }
            }
        }
        control
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("bound_kinds", &self.handlers.len())
            .finish()
    }
}
