//! Palpar: touch, mouse and pointer gesture recognition for browser
//! applications.
//!
//! The detection engine lives in [`palpar_core`] and is re-exported
//! here; this crate adds the browser bindings: DOM listener wiring,
//! `CustomEvent` dispatch, and the hold timer.
//!
//! # Browser Usage (WASM)
//!
//! ```javascript
//! import init, { Gestures } from './palpar.js';
//!
//! async function main() {
//!     await init();
//!     const gestures = new Gestures('map', '{"drag_lock_to_axis": true}');
//!     document.getElementById('map')
//!         .addEventListener('dragright', (e) => console.log(e.detail));
//! }
//! ```

pub use palpar_core::{
    Axis, Claim, ConfigError, Contact, ContactId, Direction, Dispatcher, Emitter, EnrichedEvent,
    EventControl, Flow, GestureConfig, GestureEngine, GestureEvent, GestureEventKind,
    GestureRegistry, GestureSurface, HoldSchedule, HoldToken, InputEffects, InputFrame, InputKind,
    InputNormalizer, MouseButton, Point, PointerKind, PreviousSession, RawInput, Recognizer,
    RecognizerKind, Session, SessionStart,
};

pub mod browser;
