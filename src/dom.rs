//! Thin web-sys glue shared by the DOM hosts.
//!
//! Requires a browser environment; compiled only with the `hydrate` feature.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, Window};

use crate::error::ScriptError;
use crate::viewport::Bounds;

/// The global `window`.
///
/// # Errors
///
/// Returns `NoBrowser` outside a browser.
pub fn window() -> Result<Window, ScriptError> {
    web_sys::window().ok_or(ScriptError::NoBrowser)
}

/// The global `document`.
///
/// # Errors
///
/// Returns `NoBrowser` when there is no window or document.
pub fn document() -> Result<Document, ScriptError> {
    window()?.document().ok_or(ScriptError::NoBrowser)
}

/// Look up an element by id and cast it to `T`.
///
/// # Errors
///
/// Returns `MissingElement` when the id is absent or names an element of a
/// different type.
pub fn element_by_id<T: JsCast + Clone>(document: &Document, id: &str) -> Result<T, ScriptError> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_ref::<T>().cloned())
        .ok_or_else(|| ScriptError::MissingElement(format!("#{id}")))
}

/// Collect every element matching `selector`.
///
/// # Errors
///
/// Returns `Js` when the selector is invalid.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, ScriptError> {
    let list = document.query_selector_all(selector)?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        if let Some(el) = list.item(index).and_then(|node| node.dyn_ref::<Element>().cloned()) {
            out.push(el);
        }
    }
    Ok(out)
}

/// Attach `handler` to `event` on `target` for the lifetime of the page.
///
/// # Errors
///
/// Returns `Js` when the listener cannot be registered.
pub fn listen<T, F>(target: &T, event: &str, handler: F) -> Result<(), ScriptError>
where
    T: AsRef<EventTarget>,
    F: FnMut(Event) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .as_ref()
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

/// Current `window.innerHeight` in CSS pixels.
///
/// # Errors
///
/// Returns `Js` when the browser refuses the read.
pub fn viewport_height(window: &Window) -> Result<f64, ScriptError> {
    Ok(window.inner_height()?.as_f64().unwrap_or(0.0))
}

/// Vertical extent of `el` relative to the viewport.
#[must_use]
pub fn bounds_of(el: &Element) -> Bounds {
    let rect = el.get_bounding_client_rect();
    Bounds { top: rect.top(), bottom: rect.bottom() }
}

/// Add `class` to `el`, logging when the browser rejects the token.
pub fn add_class(el: &Element, class: &str) {
    if let Err(err) = el.class_list().add_1(class) {
        log::warn!("add class {class:?}: {}", ScriptError::from(err));
    }
}

/// Show a blocking alert.
pub fn alert(window: &Window, message: &str) {
    if let Err(err) = window.alert_with_message(message) {
        log::warn!("alert: {}", ScriptError::from(err));
    }
}

/// Log the outcome of mounting a page unit.
///
/// A missing element is the expected case on pages without that unit and is
/// only logged at debug level.
pub fn report(unit: &str, result: Result<(), ScriptError>) {
    match result {
        Ok(()) => log::debug!("{unit}: mounted"),
        Err(ScriptError::MissingElement(what)) => log::debug!("{unit}: skipped, {what} not on page"),
        Err(err) => log::warn!("{unit}: {err}"),
    }
}
