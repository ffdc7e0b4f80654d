//! DOM binding: listener wiring, `CustomEvent` dispatch, hold timer.

use super::events::{dom_event_to_raw, ListenerClosure};
use palpar_core::{GestureConfig, GestureEvent, GestureSurface, HoldSchedule, InputEffects};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, CustomEvent, CustomEventInit, EventTarget, HtmlElement};

/// CSS applied to a bound element to keep the browser from competing
/// with gesture detection (text selection, native panning/zooming, tap
/// highlight).
#[derive(Debug, Clone, Copy)]
pub struct StopBrowserBehavior;

impl StopBrowserBehavior {
    const PROPERTIES: [(&'static str, &'static str); 6] = [
        ("user-select", "none"),
        ("-webkit-user-select", "none"),
        ("touch-action", "none"),
        ("-webkit-touch-callout", "none"),
        ("-webkit-user-drag", "none"),
        ("-webkit-tap-highlight-color", "rgba(0,0,0,0)"),
    ];

    /// Apply the style properties to an element.
    pub fn apply(element: &HtmlElement) {
        let style = element.style();
        for (name, value) in Self::PROPERTIES {
            style.set_property(name, value).ok();
        }
    }

    /// Remove the style properties from an element.
    pub fn clear(element: &HtmlElement) {
        let style = element.style();
        for (name, _) in Self::PROPERTIES {
            style.remove_property(name).ok();
        }
    }
}

struct HoldTimer {
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

struct Shared {
    surface: RefCell<GestureSurface>,
    element: HtmlElement,
    hold_timer: RefCell<Option<HoldTimer>>,
}

fn apply_effects(shared: &Rc<Shared>, effects: InputEffects, source: Option<&web_sys::Event>) {
    if effects.prevent_default {
        if let Some(event) = source {
            event.prevent_default();
        }
    }
    if effects.cancel_hold {
        cancel_hold_timer(shared);
    }
    if let Some(schedule) = effects.schedule_hold {
        schedule_hold_timer(shared, schedule);
    }
}

fn cancel_hold_timer(shared: &Rc<Shared>) {
    if let Some(timer) = shared.hold_timer.borrow_mut().take() {
        if let Some(win) = window() {
            win.clear_timeout_with_handle(timer.handle);
        }
    }
}

fn schedule_hold_timer(shared: &Rc<Shared>, schedule: HoldSchedule) {
    cancel_hold_timer(shared);
    let Some(win) = window() else {
        return;
    };

    let callback_shared = Rc::clone(shared);
    let token = schedule.token;
    let closure: Closure<dyn FnMut()> = Closure::new(move || {
        callback_shared.hold_timer.borrow_mut().take();
        // The engine re-checks the session claim at fire time; a stale
        // or superseded timer is a no-op.
        let effects = callback_shared.surface.borrow_mut().fire_hold(token);
        apply_effects(&callback_shared, effects, None);
    });

    match win.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        schedule.delay_ms as i32,
    ) {
        Ok(handle) => {
            *shared.hold_timer.borrow_mut() = Some(HoldTimer {
                handle,
                _closure: closure,
            });
        }
        Err(err) => web_sys::console::warn_1(&err),
    }
}

fn dispatch_custom_event(element: &HtmlElement, event: &GestureEvent) {
    let init = CustomEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    if let Ok(json) = serde_json::to_string(&event.data) {
        init.set_detail(&JsValue::from_str(&json));
    }
    match CustomEvent::new_with_event_init_dict(event.kind.as_str(), &init) {
        Ok(custom) => {
            element.dispatch_event(&custom).ok();
        }
        Err(err) => web_sys::console::warn_1(&err),
    }
}

fn has_pointer_events(win: &web_sys::Window) -> bool {
    js_sys::Reflect::has(win.as_ref(), &JsValue::from_str("onpointerdown")).unwrap_or(false)
}

/// A gesture surface bound to a DOM element.
///
/// Start events are listened for on the element; move and end events on
/// the document, so gestures keep tracking when the pointer leaves the
/// element mid-gesture. Every recognized gesture is re-dispatched on the
/// element as a bubbling `CustomEvent` named after the gesture, with the
/// enriched payload JSON in `detail`.
#[wasm_bindgen]
pub struct Gestures {
    shared: Rc<Shared>,
    listeners: Vec<(EventTarget, &'static str, ListenerClosure)>,
    styled: bool,
}

#[wasm_bindgen]
impl Gestures {
    /// Bind to an element by id, with optional JSON configuration
    /// overrides (unset options keep their defaults).
    #[wasm_bindgen(constructor)]
    pub fn new(element_id: &str, options_json: Option<String>) -> Result<Gestures, JsValue> {
        console_error_panic_hook::set_once();

        let document = window()
            .ok_or("no window")?
            .document()
            .ok_or("no document")?;
        let element = document
            .get_element_by_id(element_id)
            .ok_or_else(|| JsValue::from_str(&format!("element '{element_id}' not found")))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| "element is not an HtmlElement")?;

        let config: GestureConfig = match options_json {
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| JsValue::from_str(&format!("invalid options: {e}")))?,
            None => GestureConfig::default(),
        };

        Self::bind(element, config, true)
    }

    /// Pause or resume detection.
    pub fn enable(&self, enabled: bool) {
        self.shared.surface.borrow_mut().set_enabled(enabled);
    }

    /// End the current detection session immediately.
    pub fn stop_detect(&self) {
        self.shared.surface.borrow_mut().stop_detect();
        cancel_hold_timer(&self.shared);
    }

    /// Remove all listeners and styles. The instance is inert afterward.
    pub fn unbind(&mut self) {
        for (target, name, closure) in self.listeners.drain(..) {
            target
                .remove_event_listener_with_callback(name, closure.as_function())
                .ok();
        }
        cancel_hold_timer(&self.shared);
        if self.styled {
            StopBrowserBehavior::clear(&self.shared.element);
            self.styled = false;
        }
    }
}

impl Gestures {
    /// Bind to an element with a validated configuration.
    ///
    /// Configuration errors surface here, at bind time; live gesture
    /// processing never fails.
    pub fn bind(
        element: HtmlElement,
        config: GestureConfig,
        stop_browser_behavior: bool,
    ) -> Result<Self, JsValue> {
        let surface =
            GestureSurface::bind(config).map_err(|e| JsValue::from_str(&e.to_string()))?;

        if stop_browser_behavior {
            StopBrowserBehavior::apply(&element);
        }

        let shared = Rc::new(Shared {
            surface: RefCell::new(surface),
            element,
            hold_timer: RefCell::new(None),
        });

        {
            let element = shared.element.clone();
            shared
                .surface
                .borrow_mut()
                .on_any(move |event, _| dispatch_custom_event(&element, event));
        }

        let win = window().ok_or("no window")?;
        let document = win.document().ok_or("no document")?;

        let (start_types, follow_types): (&[&'static str], &[&'static str]) =
            if has_pointer_events(&win) {
                (
                    &["pointerdown"],
                    &["pointermove", "pointerup", "pointercancel"],
                )
            } else {
                (
                    &["touchstart", "mousedown"],
                    &[
                        "touchmove",
                        "mousemove",
                        "touchend",
                        "touchcancel",
                        "mouseup",
                    ],
                )
            };

        let mut listeners = Vec::new();
        let element_target: EventTarget = shared.element.clone().into();
        let document_target: EventTarget = document.into();

        for name in start_types {
            listeners.push((element_target.clone(), *name, Self::listener(&shared)));
        }
        for name in follow_types {
            listeners.push((document_target.clone(), *name, Self::listener(&shared)));
        }
        for (target, name, closure) in &listeners {
            target
                .add_event_listener_with_callback(name, closure.as_function())
                .unwrap_or_else(|err| web_sys::console::error_1(&err));
        }

        Ok(Self {
            shared,
            listeners,
            styled: stop_browser_behavior,
        })
    }

    /// Run a closure against the underlying surface, e.g. to bind
    /// Rust-side handlers or register a custom recognizer.
    pub fn with_surface<R>(&self, f: impl FnOnce(&mut GestureSurface) -> R) -> R {
        f(&mut self.shared.surface.borrow_mut())
    }

    fn listener(shared: &Rc<Shared>) -> ListenerClosure {
        let shared = Rc::clone(shared);
        ListenerClosure::new(move |event: web_sys::Event| {
            if let Some(raw) = dom_event_to_raw(&event) {
                let effects = shared.surface.borrow_mut().input(&raw);
                apply_effects(&shared, effects, Some(&event));
            }
        })
    }
}

impl Drop for Gestures {
    fn drop(&mut self) {
        self.unbind();
    }
}
