//! Browser scheduler and starfield bootstrap
//!
//! `requestAnimationFrame` and `setTimeout` callbacks hold only a weak
//! reference to the binding and deliver their handle back to it; the binding
//! decides whether the handle is still current.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{MouseEvent, Window};

use super::canvas::CanvasSurface;
use super::dom;
use super::page::DomPage;
use crate::error::StarfieldError;
use crate::schedule::{FrameHandle, Scheduler, TimerEvent, TimerHandle};
use crate::settings::Settings;
use crate::viewport::ViewportBinding;

/// The canvas is optional: without it the reveal still runs
pub type WebBinding = ViewportBinding<Option<CanvasSurface>, BrowserScheduler, DomPage>;

/// Run `f` on the binding unless a callback is already inside it
fn with_binding(binding: &RefCell<WebBinding>, f: impl FnOnce(&mut WebBinding)) {
    match binding.try_borrow_mut() {
        Ok(mut b) => f(&mut b),
        Err(_) => log::warn!("Starfield busy; dropping callback"),
    }
}

/// Same, for callbacks that must not keep the binding alive
fn with_live_binding(target: &Weak<RefCell<WebBinding>>, f: impl FnOnce(&mut WebBinding)) {
    if let Some(binding) = target.upgrade() {
        with_binding(&binding, f);
    }
}

pub struct BrowserScheduler {
    window: Window,
    target: Weak<RefCell<WebBinding>>,
    next_id: u64,
    /// Our handle -> host id, for cancellation
    frames: Rc<RefCell<HashMap<FrameHandle, i32>>>,
    timers: Rc<RefCell<HashMap<TimerHandle, i32>>>,
}

impl BrowserScheduler {
    pub fn new(window: Window, target: Weak<RefCell<WebBinding>>) -> Self {
        Self {
            window,
            target,
            next_id: 0,
            frames: Rc::default(),
            timers: Rc::default(),
        }
    }

    fn allocate(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl Scheduler for BrowserScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.allocate());
        let target = self.target.clone();
        let frames = Rc::clone(&self.frames);

        let callback = Closure::once_into_js(move |_time: f64| {
            frames.borrow_mut().remove(&handle);
            with_live_binding(&target, |b| {
                b.on_frame(handle);
            });
        });

        match self.window.request_animation_frame(callback.unchecked_ref()) {
            Ok(id) => {
                self.frames.borrow_mut().insert(handle, id);
            }
            Err(e) => log::warn!("requestAnimationFrame failed: {:?}", e),
        }
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Some(id) = self.frames.borrow_mut().remove(&handle) {
            let _ = self.window.cancel_animation_frame(id);
        }
    }

    fn set_timer(&mut self, delay_ms: u32, event: TimerEvent) -> TimerHandle {
        let handle = TimerHandle(self.allocate());
        let target = self.target.clone();
        let timers = Rc::clone(&self.timers);

        let callback = Closure::once_into_js(move || {
            timers.borrow_mut().remove(&handle);
            with_live_binding(&target, |b| b.on_timer(handle, event));
        });

        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay)
        {
            Ok(id) => {
                self.timers.borrow_mut().insert(handle, id);
            }
            Err(e) => log::warn!("setTimeout failed: {:?}", e),
        }
        handle
    }

    fn clear_timer(&mut self, handle: TimerHandle) {
        if let Some(id) = self.timers.borrow_mut().remove(&handle) {
            self.window.clear_timeout_with_handle(id);
        }
    }
}

/// Bind the starfield and the reveal orb to the page and start them
///
/// Fails only without a window or document. A missing canvas switches the
/// starfield off and a missing orb switches the reveal off; each works alone.
pub fn start(settings: &Settings) -> Result<Rc<RefCell<WebBinding>>, StarfieldError> {
    let window = dom::window()?;
    let document = dom::document(&window)?;

    let surface = match CanvasSurface::from_id(&document, &settings.viewport.canvas_id) {
        Ok(surface) => Some(surface),
        Err(e) => {
            log::warn!("No starfield: {}", e);
            None
        }
    };
    let page = DomPage::new(&document, &settings.viewport);
    let seed = js_sys::Date::now() as u64;

    let binding = Rc::new_cyclic(|weak: &Weak<RefCell<WebBinding>>| {
        let scheduler = BrowserScheduler::new(window.clone(), weak.clone());
        RefCell::new(ViewportBinding::new(settings, surface, scheduler, page, seed))
    });
    log::info!("Starfield seed: {}", seed);

    binding.borrow_mut().on_ready(dom::current_viewport(&window));

    // Resize
    {
        let target = Rc::clone(&binding);
        let win = window.clone();
        let attached = dom::listen(&window, "resize", move |_event: web_sys::Event| {
            with_binding(&target, |b| b.on_resize(dom::current_viewport(&win)));
        });
        if let Err(e) = attached {
            log::warn!("Resize tracking disabled: {}", e);
        }
    }

    // Orb click
    if let Some(orb) = document.get_element_by_id(&settings.viewport.orb_id) {
        let target = Rc::clone(&binding);
        let attached = dom::listen(&orb, "click", move |_event: MouseEvent| {
            with_binding(&target, |b| {
                b.on_reveal_gesture();
            });
        });
        if let Err(e) = attached {
            log::warn!("Reveal disabled: {}", e);
        }
    }

    Ok(binding)
}
