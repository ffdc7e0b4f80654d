//! Typed gesture configuration.
//!
//! One field per recognized option, merged from recognizer defaults at
//! bind time. Overrides deserialize on top of the defaults via
//! `#[serde(default)]`, so a caller can supply just the fields it changes.

use crate::recognizer::RecognizerKind;
use serde::{Deserialize, Serialize};

/// Configuration for gesture recognition.
///
/// Defaults match the library's recognizer defaults; numeric fields are
/// validated once at bind time, never during live processing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Enable the touch recognizer.
    pub touch: bool,
    /// Block the default browser action on every frame (makes the bound
    /// element blocking; improves drag and transform tracking).
    pub prevent_default: bool,
    /// Ignore mouse-origin input entirely, so only touch or pen drives
    /// detection.
    pub prevent_mouse_events: bool,

    /// Enable the hold recognizer.
    pub hold: bool,
    /// Time the contact must stay down before `hold` fires (ms).
    pub hold_timeout_ms: f64,
    /// Maximum travel distance before an armed hold is cancelled (px).
    pub hold_threshold: f32,

    /// Enable the tap/doubletap recognizer.
    pub tap: bool,
    /// Maximum contact time for a tap (ms).
    pub tap_max_touch_time_ms: f64,
    /// Maximum travel distance for a tap (px).
    pub tap_max_distance: f32,
    /// Fire `tap` even when the same release also produced `doubletap`.
    pub tap_always: bool,
    /// Maximum distance between two taps for a double tap (px).
    pub doubletap_distance: f32,
    /// Maximum interval between two taps for a double tap (ms).
    pub doubletap_interval_ms: f64,

    /// Enable the swipe recognizer.
    pub swipe: bool,
    /// Maximum touches for a swipe; 0 means unlimited (can conflict with
    /// transform).
    pub swipe_max_touches: usize,
    /// Minimum velocity on either axis for a swipe (px/ms).
    pub swipe_velocity: f32,

    /// Enable the drag recognizer.
    pub drag: bool,
    /// Minimum travel distance before a drag starts (px).
    pub drag_min_distance: f32,
    /// Maximum touches for a drag; 0 means unlimited (can conflict with
    /// transform).
    pub drag_max_touches: usize,
    /// Block the default browser action while dragging horizontally.
    pub drag_block_horizontal: bool,
    /// Block the default browser action while dragging vertically.
    pub drag_block_vertical: bool,
    /// Keep the reported drag direction on the axis the gesture started on.
    pub drag_lock_to_axis: bool,
    /// Travel distance before axis locking engages; locking only once the
    /// distance is large enough makes the detected axis reliable (px).
    pub drag_lock_min_distance: f32,

    /// Enable the transform recognizer.
    pub transform: bool,
    /// Minimum deviation of the scale factor from 1 before a transform
    /// starts.
    pub transform_min_scale: f32,
    /// Minimum rotation before `rotate` fires (degrees).
    pub transform_min_rotation: f32,
    /// Block the default browser action whenever two contacts are down.
    pub transform_always_block: bool,

    /// Enable the release recognizer.
    pub release: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            touch: true,
            prevent_default: false,
            prevent_mouse_events: false,

            hold: true,
            hold_timeout_ms: 500.0,
            hold_threshold: 1.0,

            tap: true,
            tap_max_touch_time_ms: 250.0,
            tap_max_distance: 10.0,
            tap_always: true,
            doubletap_distance: 20.0,
            doubletap_interval_ms: 300.0,

            swipe: true,
            swipe_max_touches: 1,
            swipe_velocity: 0.7,

            drag: true,
            drag_min_distance: 10.0,
            drag_max_touches: 1,
            drag_block_horizontal: false,
            drag_block_vertical: false,
            drag_lock_to_axis: false,
            drag_lock_min_distance: 25.0,

            transform: true,
            transform_min_scale: 0.01,
            transform_min_rotation: 1.0,
            transform_always_block: false,

            release: true,
        }
    }
}

impl GestureConfig {
    /// Whether the given recognizer is enabled by this configuration.
    ///
    /// Custom recognizers are always enabled; disable them by not
    /// registering them.
    #[must_use]
    pub fn enabled(&self, kind: RecognizerKind) -> bool {
        match kind {
            RecognizerKind::Touch => self.touch,
            RecognizerKind::Hold => self.hold,
            RecognizerKind::Tap => self.tap,
            RecognizerKind::Swipe => self.swipe,
            RecognizerKind::Drag => self.drag,
            RecognizerKind::Transform => self.transform,
            RecognizerKind::Release => self.release,
            RecognizerKind::Custom(_) => true,
        }
    }

    /// Validate all numeric options.
    ///
    /// Called at bind time; live gesture processing never validates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::check_ms("hold_timeout_ms", self.hold_timeout_ms)?;
        Self::check_px("hold_threshold", self.hold_threshold)?;
        Self::check_ms("tap_max_touch_time_ms", self.tap_max_touch_time_ms)?;
        Self::check_px("tap_max_distance", self.tap_max_distance)?;
        Self::check_px("doubletap_distance", self.doubletap_distance)?;
        Self::check_ms("doubletap_interval_ms", self.doubletap_interval_ms)?;
        Self::check_px("swipe_velocity", self.swipe_velocity)?;
        Self::check_px("drag_min_distance", self.drag_min_distance)?;
        Self::check_px("drag_lock_min_distance", self.drag_lock_min_distance)?;
        Self::check_px("transform_min_scale", self.transform_min_scale)?;
        Self::check_px("transform_min_rotation", self.transform_min_rotation)?;
        Ok(())
    }

    fn check_ms(field: &'static str, value: f64) -> Result<(), ConfigError> {
        if !value.is_finite() {
            return Err(ConfigError::NotFinite(field));
        }
        if value < 0.0 {
            return Err(ConfigError::Negative(field));
        }
        Ok(())
    }

    fn check_px(field: &'static str, value: f32) -> Result<(), ConfigError> {
        Self::check_ms(field, f64::from(value))
    }
}

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A numeric option is negative.
    Negative(&'static str),
    /// A numeric option is NaN or infinite.
    NotFinite(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negative(field) => write!(f, "option `{field}` must not be negative"),
            Self::NotFinite(field) => write!(f, "option `{field}` must be finite"),
        }
    }
}

impl std::error::Error for ConfigError {}
