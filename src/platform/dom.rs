//! Small DOM helpers shared by the browser glue

use wasm_bindgen::JsCast;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, EventTarget, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Window,
};

use crate::error::StarfieldError;
use crate::viewport::Viewport;

pub fn js_error(value: JsValue) -> StarfieldError {
    StarfieldError::Js(format!("{:?}", value))
}

pub fn window() -> Result<Window, StarfieldError> {
    web_sys::window().ok_or_else(|| StarfieldError::MissingElement("window".into()))
}

pub fn document(window: &Window) -> Result<Document, StarfieldError> {
    window
        .document()
        .ok_or_else(|| StarfieldError::MissingElement("document".into()))
}

pub fn element_by_id(document: &Document, id: &str) -> Result<Element, StarfieldError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| StarfieldError::MissingElement(format!("#{id}")))
}

pub fn query(document: &Document, selector: &str) -> Result<Element, StarfieldError> {
    document
        .query_selector(selector)
        .map_err(js_error)?
        .ok_or_else(|| StarfieldError::MissingElement(selector.to_string()))
}

/// Every element matching `selector`; empty when the selector is invalid
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn as_html(element: Element) -> Result<HtmlElement, StarfieldError> {
    let id = element.id();
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| StarfieldError::WrongElementType {
            id,
            expected: "HTML element",
        })
}

pub fn current_viewport(window: &Window) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(
        width as f32,
        height as f32,
        window.device_pixel_ratio() as f32,
    )
}

pub fn add_class(element: &Element, class: &str) {
    if let Err(e) = element.class_list().add_1(class) {
        log::warn!("Could not add class '{}': {:?}", class, e);
    }
}

pub fn remove_class(element: &Element, class: &str) {
    if let Err(e) = element.class_list().remove_1(class) {
        log::warn!("Could not remove class '{}': {:?}", class, e);
    }
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    if on {
        add_class(element, class);
    } else {
        remove_class(element, class);
    }
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        log::warn!("Could not set {}: {:?}", property, e);
    }
}

pub fn smooth_scroll_to(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Attach `handler` for the lifetime of the page
pub fn listen<E>(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) -> Result<(), StarfieldError>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    closure.forget();
    Ok(())
}
