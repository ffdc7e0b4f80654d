//! Browser runtime for Palpar gesture recognition.
//!
//! This module bridges the platform-independent engine and the DOM:
//! converting `web_sys` input events to the core's raw-input model and
//! dispatching recognized gestures back as `CustomEvent`s.

// WASM-only modules
#[cfg(target_arch = "wasm32")]
pub mod binding;
#[cfg(target_arch = "wasm32")]
pub mod events;

#[cfg(target_arch = "wasm32")]
pub use binding::{Gestures, StopBrowserBehavior};
