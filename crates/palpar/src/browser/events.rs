//! Browser event handling - converts web events to the core's raw input.
//!
//! Supports mouse, touch, and pointer events.

use palpar_core::{Contact, ContactId, InputKind, Point, PointerKind, RawInput};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, PointerEvent, TouchEvent};

/// Parse the DOM `pointerType` string.
pub(crate) fn parse_pointer_kind(value: &str) -> PointerKind {
    match value {
        "mouse" => PointerKind::Mouse,
        "pen" => PointerKind::Pen,
        _ => PointerKind::Touch,
    }
}

fn mouse_button(button: i16) -> palpar_core::MouseButton {
    match button {
        1 => palpar_core::MouseButton::Middle,
        2 => palpar_core::MouseButton::Right,
        3 => palpar_core::MouseButton::Button4,
        4 => palpar_core::MouseButton::Button5,
        _ => palpar_core::MouseButton::Left,
    }
}

/// Convert a `web_sys` MouseEvent to raw input.
pub fn mouse_event_to_raw(event: &MouseEvent, phase: InputKind) -> RawInput {
    let position = Point::new(event.page_x() as f32, event.page_y() as f32);
    let timestamp_ms = event.time_stamp();
    match phase {
        InputKind::Start => RawInput::MouseDown {
            position,
            button: mouse_button(event.button()),
            timestamp_ms,
        },
        InputKind::Move => RawInput::MouseMove {
            position,
            primary_down: event.buttons() & 1 != 0,
            timestamp_ms,
        },
        InputKind::End => RawInput::MouseUp {
            position,
            button: mouse_button(event.button()),
            timestamp_ms,
        },
    }
}

/// Read the active contacts off a `web_sys` TouchEvent.
pub fn touch_event_contacts(event: &TouchEvent) -> Vec<Contact> {
    let touches = event.touches();
    let mut contacts = Vec::with_capacity(touches.length() as usize);
    for i in 0..touches.length() {
        if let Some(touch) = touches.get(i) {
            contacts.push(Contact::new(
                ContactId(touch.identifier() as u32),
                Point::new(touch.page_x() as f32, touch.page_y() as f32),
            ));
        }
    }
    contacts
}

/// Convert a `web_sys` TouchEvent to raw input.
pub fn touch_event_to_raw(event: &TouchEvent, phase: InputKind, cancelled: bool) -> RawInput {
    let contacts = touch_event_contacts(event);
    let timestamp_ms = event.time_stamp();
    match phase {
        InputKind::Start => RawInput::TouchStart {
            contacts,
            timestamp_ms,
        },
        InputKind::Move => RawInput::TouchMove {
            contacts,
            timestamp_ms,
        },
        InputKind::End if cancelled => RawInput::TouchCancel {
            contacts,
            timestamp_ms,
        },
        InputKind::End => RawInput::TouchEnd {
            contacts,
            timestamp_ms,
        },
    }
}

/// Convert a `web_sys` PointerEvent to raw input.
pub fn pointer_event_to_raw(event: &PointerEvent, phase: InputKind, cancelled: bool) -> RawInput {
    let id = ContactId(event.pointer_id() as u32);
    let kind = parse_pointer_kind(&event.pointer_type());
    let timestamp_ms = event.time_stamp();
    let contact = Contact::new(
        id,
        Point::new(event.page_x() as f32, event.page_y() as f32),
    );
    match phase {
        InputKind::Start => RawInput::PointerDown {
            contact,
            kind,
            timestamp_ms,
        },
        InputKind::Move => RawInput::PointerMove {
            contact,
            kind,
            timestamp_ms,
        },
        InputKind::End if cancelled => RawInput::PointerCancel {
            id,
            kind,
            timestamp_ms,
        },
        InputKind::End => RawInput::PointerUp {
            id,
            kind,
            timestamp_ms,
        },
    }
}

/// Convert any incoming DOM event to raw input based on its type string.
///
/// Unknown event types yield `None` and are ignored upstream.
pub fn dom_event_to_raw(event: &web_sys::Event) -> Option<RawInput> {
    let event_type = event.type_();
    match event_type.as_str() {
        "mousedown" | "mousemove" | "mouseup" => {
            let mouse = event.dyn_ref::<MouseEvent>()?;
            let phase = match event_type.as_str() {
                "mousedown" => InputKind::Start,
                "mousemove" => InputKind::Move,
                _ => InputKind::End,
            };
            Some(mouse_event_to_raw(mouse, phase))
        }
        "touchstart" | "touchmove" | "touchend" | "touchcancel" => {
            let touch = event.dyn_ref::<TouchEvent>()?;
            let (phase, cancelled) = match event_type.as_str() {
                "touchstart" => (InputKind::Start, false),
                "touchmove" => (InputKind::Move, false),
                "touchcancel" => (InputKind::End, true),
                _ => (InputKind::End, false),
            };
            Some(touch_event_to_raw(touch, phase, cancelled))
        }
        "pointerdown" | "pointermove" | "pointerup" | "pointercancel" => {
            let pointer = event.dyn_ref::<PointerEvent>()?;
            let (phase, cancelled) = match event_type.as_str() {
                "pointerdown" => (InputKind::Start, false),
                "pointermove" => (InputKind::Move, false),
                "pointercancel" => (InputKind::End, true),
                _ => (InputKind::End, false),
            };
            Some(pointer_event_to_raw(pointer, phase, cancelled))
        }
        _ => None,
    }
}

/// Closure wrapper that keeps a DOM listener alive for the lifetime of a
/// binding.
pub struct ListenerClosure {
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl ListenerClosure {
    /// Wrap a callback for listener registration.
    pub fn new<F>(callback: F) -> Self
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        Self {
            closure: Closure::new(callback),
        }
    }

    /// Get as JS function.
    pub fn as_function(&self) -> &js_sys::Function {
        self.closure.as_ref().unchecked_ref()
    }
}
