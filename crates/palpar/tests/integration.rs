//! Integration tests for the palpar facade.
//!
//! The browser bindings only compile for wasm32; these tests cover the
//! re-exported engine API that native consumers (and the bindings) use.

use palpar::{
    Contact, ContactId, GestureConfig, GestureEventKind, GestureSurface, Point, RawInput,
};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn facade_exposes_the_full_pipeline() {
    let mut surface = GestureSurface::bind(GestureConfig::default()).expect("valid config");
    let log = Rc::new(RefCell::new(Vec::new()));

    for kind in [GestureEventKind::Touch, GestureEventKind::Release] {
        let log = Rc::clone(&log);
        surface.on(kind, move |event, _| {
            log.borrow_mut().push(event.kind);
        });
    }

    surface.input(&RawInput::TouchStart {
        contacts: vec![Contact::new(ContactId(1), Point::new(10.0, 10.0))],
        timestamp_ms: 0.0,
    });
    surface.input(&RawInput::TouchEnd {
        contacts: vec![],
        timestamp_ms: 40.0,
    });

    assert_eq!(
        *log.borrow(),
        vec![GestureEventKind::Touch, GestureEventKind::Release]
    );
}

#[test]
fn facade_config_overrides_parse_from_json() {
    let config: GestureConfig =
        serde_json::from_str(r#"{"prevent_mouse_events": true, "hold_timeout_ms": 750.0}"#)
            .expect("valid overrides");
    assert!(config.prevent_mouse_events);
    assert_eq!(config.hold_timeout_ms, 750.0);
    assert!(GestureSurface::bind(config).is_ok());
}
