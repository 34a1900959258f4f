//! DOM wiring for the page effects
//!
//! Each effect is independent: a missing element switches that one effect off
//! and the rest still install.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, Window,
};

use super::dom;
use crate::effects::{
    CursorFollower, ElementRect, MobileMenu, SectionTracker, Typewriter, magnetic_offset,
    navbar_scrolled, translate_css,
};
use crate::error::StarfieldError;
use crate::settings::EffectSettings;

/// Install every effect the page has markup for
pub fn install(settings: &EffectSettings) {
    let (window, document) = match dom::window().and_then(|w| dom::document(&w).map(|d| (w, d))) {
        Ok(pair) => pair,
        Err(e) => {
            log::warn!("Page effects disabled: {}", e);
            return;
        }
    };

    let results = [
        ("navbar", navbar(&window, &document, settings.navbar_scroll_threshold)),
        ("cursor", cursor(&window, &document, settings.cursor_easing)),
        ("mobile menu", mobile_menu(&document)),
        ("nav dots", nav_dots(&document, settings.section_visibility)),
        ("typing", typing(&window, &document, settings)),
        ("magnetic buttons", magnetic_buttons(&document, settings.magnetic_strength)),
    ];
    for (name, result) in results {
        match result {
            Ok(()) => log::debug!("{} ready", name),
            Err(e) => log::warn!("{} disabled: {}", name, e),
        }
    }
}

fn navbar(window: &Window, document: &Document, threshold: f64) -> Result<(), StarfieldError> {
    let nav = dom::query(document, "nav")?;
    let win = window.clone();
    dom::listen(window, "scroll", move |_event: web_sys::Event| {
        let y = win.scroll_y().unwrap_or(0.0);
        dom::set_class(&nav, "scrolled", navbar_scrolled(y, threshold));
    })
}

fn cursor(window: &Window, document: &Document, easing: f32) -> Result<(), StarfieldError> {
    let dot = dom::as_html(dom::query(document, ".cursor")?)?;
    let ring = dom::as_html(dom::query(document, ".cursor-follower")?)?;

    let fine_pointer = window
        .match_media("(pointer: fine)")
        .map_err(dom::js_error)?
        .map(|query| query.matches())
        .unwrap_or(false);
    if !fine_pointer {
        dom::set_style(&dot, "display", "none");
        dom::set_style(&ring, "display", "none");
        log::info!("No fine pointer; custom cursor hidden");
        return Ok(());
    }

    let state = Rc::new(RefCell::new(CursorFollower::new(easing)));
    {
        let state = Rc::clone(&state);
        dom::listen(document, "mousemove", move |event: MouseEvent| {
            state
                .borrow_mut()
                .point_to(Vec2::new(event.client_x() as f32, event.client_y() as f32));
        })?;
    }

    for hoverable in dom::query_all(document, "a, button, .cursor-pointer") {
        let grow = ring.clone();
        dom::listen(&hoverable, "mouseenter", move |_event: MouseEvent| {
            dom::add_class(&grow, "cursor-grow");
        })?;
        let shrink = ring.clone();
        dom::listen(&hoverable, "mouseleave", move |_event: MouseEvent| {
            dom::remove_class(&shrink, "cursor-grow");
        })?;
    }

    animate_cursor(window.clone(), state, dot, ring);
    Ok(())
}

fn animate_cursor(
    window: Window,
    state: Rc<RefCell<CursorFollower>>,
    dot: HtmlElement,
    ring: HtmlElement,
) {
    let (pointer, trail) = {
        let mut cursor = state.borrow_mut();
        let trail = cursor.step();
        (cursor.pointer(), trail)
    };
    dom::set_style(&dot, "left", &format!("{}px", pointer.x));
    dom::set_style(&dot, "top", &format!("{}px", pointer.y));
    dom::set_style(&ring, "left", &format!("{}px", trail.x));
    dom::set_style(&ring, "top", &format!("{}px", trail.y));

    let win = window.clone();
    let next = Closure::once_into_js(move |_time: f64| animate_cursor(win, state, dot, ring));
    if let Err(e) = window.request_animation_frame(next.unchecked_ref()) {
        log::warn!("Cursor animation stopped: {:?}", e);
    }
}

/// Elements the mobile menu state is mirrored onto
struct MenuDom {
    menu: Element,
    body: HtmlElement,
    open_icon: Element,
    close_icon: Element,
}

impl MenuDom {
    fn show(&self, open: bool) {
        dom::set_class(&self.menu, "open", open);
        dom::set_class(&self.body, "menu-open", open);
        dom::set_class(&self.open_icon, "hidden", open);
        dom::set_class(&self.close_icon, "hidden", !open);
    }
}

fn mobile_menu(document: &Document) -> Result<(), StarfieldError> {
    let button = dom::element_by_id(document, "mobile-menu-btn")?;
    let view = Rc::new(MenuDom {
        menu: dom::element_by_id(document, "mobile-menu")?,
        body: document
            .body()
            .ok_or_else(|| StarfieldError::MissingElement("body".into()))?,
        open_icon: dom::query(document, ".menu-icon-open")?,
        close_icon: dom::query(document, ".menu-icon-close")?,
    });
    let state = Rc::new(RefCell::new(MobileMenu::default()));

    {
        let (view, state) = (Rc::clone(&view), Rc::clone(&state));
        dom::listen(&button, "click", move |_event: MouseEvent| {
            let open = state.borrow_mut().toggle();
            view.show(open);
        })?;
    }

    for link in dom::query_all(document, ".mobile-link") {
        let (view, state) = (Rc::clone(&view), Rc::clone(&state));
        dom::listen(&link, "click", move |_event: MouseEvent| {
            if state.borrow_mut().link_followed() {
                view.show(false);
            }
        })?;
    }
    Ok(())
}

fn nav_dots(document: &Document, visibility: f64) -> Result<(), StarfieldError> {
    let dots = dom::query_all(document, ".nav-dot");
    let sections = dom::query_all(document, "section");
    if dots.is_empty() || sections.is_empty() {
        return Err(StarfieldError::MissingElement(".nav-dot / section".into()));
    }

    let tracker = Rc::new(RefCell::new(SectionTracker::new()));
    let observed_dots = dots.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let seen: Vec<(String, bool)> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| (entry.target().id(), entry.is_intersecting()))
                .collect();

            let mut tracker = tracker.borrow_mut();
            if let Some(active) = tracker.observe(seen.iter().map(|(id, hit)| (id.as_str(), *hit)))
            {
                for dot in &observed_dots {
                    let current = dot.get_attribute("data-section").as_deref() == Some(active);
                    dom::set_class(dot, "active", current);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(visibility));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(dom::js_error)?;
    callback.forget();
    for section in &sections {
        observer.observe(section);
    }

    for dot in dots {
        let Some(section) = dot.get_attribute("data-section") else {
            continue;
        };
        let doc = document.clone();
        dom::listen(&dot, "click", move |_event: MouseEvent| {
            if let Some(target) = doc.get_element_by_id(&section) {
                dom::smooth_scroll_to(&target);
            }
        })?;
    }
    Ok(())
}

fn typing(
    window: &Window,
    document: &Document,
    settings: &EffectSettings,
) -> Result<(), StarfieldError> {
    let text = dom::query(document, ".typing-cursor")?;
    let Some(writer) = Typewriter::new(settings) else {
        return Err(StarfieldError::InvalidSettings("no phrases to type".into()));
    };
    type_next(window.clone(), text, writer);
    Ok(())
}

fn type_next(window: Window, text: Element, mut writer: Typewriter) {
    let step = writer.step();
    text.set_text_content(Some(&step.text));

    let win = window.clone();
    let next = Closure::once_into_js(move || type_next(win, text, writer));
    let delay = i32::try_from(step.delay_ms).unwrap_or(i32::MAX);
    if let Err(e) =
        window.set_timeout_with_callback_and_timeout_and_arguments_0(next.unchecked_ref(), delay)
    {
        log::warn!("Typing stopped: {:?}", e);
    }
}

fn magnetic_buttons(document: &Document, strength: f32) -> Result<(), StarfieldError> {
    for button in dom::query_all(document, ".magnetic-btn") {
        let button = dom::as_html(button)?;

        let target = button.clone();
        dom::listen(&button, "mousemove", move |event: MouseEvent| {
            let r = target.get_bounding_client_rect();
            let rect = ElementRect {
                left: r.left() as f32,
                top: r.top() as f32,
                width: r.width() as f32,
                height: r.height() as f32,
            };
            let pointer = Vec2::new(event.client_x() as f32, event.client_y() as f32);
            let offset = magnetic_offset(pointer, rect, strength);
            dom::set_style(&target, "transform", &translate_css(offset));
        })?;

        let target = button.clone();
        dom::listen(&button, "mouseleave", move |_event: MouseEvent| {
            dom::set_style(&target, "transform", &translate_css(Vec2::ZERO));
        })?;
    }
    Ok(())
}
