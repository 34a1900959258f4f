//! Starfield entry point
//!
//! On the web this binds the particle background and page effects to the
//! document. Natively it drives the same binding headlessly and logs what a
//! page would see.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use starfield::Settings;
    use starfield::platform::{self, WebBinding};

    thread_local! {
        // Keeps the binding reachable from the console for debugging
        static BINDING: RefCell<Option<Rc<RefCell<WebBinding>>>> = const { RefCell::new(None) };
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger unavailable: {e}").into());
        }

        log::info!("Starfield starting...");
        let settings = Settings::load();

        match platform::start(&settings) {
            Ok(binding) => BINDING.with(|slot| *slot.borrow_mut() = Some(binding)),
            Err(e) => log::warn!("Starfield disabled: {}", e),
        }

        platform::effects::install(&settings.effects);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Starfield (native) starting...");
    log::info!("Native mode runs headless - serve the wasm build for the page");

    headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Walk the binding through load, a resize burst and the reveal
#[cfg(not(target_arch = "wasm32"))]
fn headless_demo() {
    use starfield::renderer::RecordingSurface;
    use starfield::schedule::ManualScheduler;
    use starfield::viewport::RecordingPage;
    use starfield::{Settings, Viewport, ViewportBinding};

    let settings = Settings::load();
    let mut binding = ViewportBinding::new(
        &settings,
        RecordingSurface::new(),
        ManualScheduler::new(),
        RecordingPage::default(),
        0x5eed,
    );

    binding.on_ready(Viewport::new(1440.0, 900.0, 2.0));
    run_frames(&mut binding, 60);
    log::info!(
        "Desktop: {} particles in {}x{}",
        binding.field().len(),
        binding.field().bounds().width,
        binding.field().bounds().height
    );

    // Rotate a phone a few times; only the last size counts
    for (w, h) in [(390.0, 844.0), (844.0, 390.0), (375.0, 812.0)] {
        binding.on_resize(Viewport::new(w, h, 3.0));
        deliver_timers(&mut binding, 100);
    }
    deliver_timers(&mut binding, settings.viewport.resize_debounce_ms.into());
    run_frames(&mut binding, 30);
    log::info!(
        "Phone: {} particles, generation {}",
        binding.field().len(),
        binding.field().generation()
    );

    if binding.on_reveal_gesture() {
        deliver_timers(&mut binding, settings.viewport.reveal_scroll_ms.into());
    }
    log::info!(
        "Reveal {:?}, page effects {:?}",
        binding.reveal_phase(),
        binding.page().effects
    );

    binding.shutdown();
    log::info!(
        "Stopped after {} frames; {} frame(s) still queued",
        binding.render_loop().ticks(),
        binding.scheduler().pending_frames()
    );

    let sample = &binding.field().particles()[..binding.field().len().min(3)];
    match serde_json::to_string_pretty(sample) {
        Ok(json) => println!("{json}"),
        Err(e) => log::warn!("Could not serialize particles: {}", e),
    }
}

#[cfg(not(target_arch = "wasm32"))]
type DemoBinding = starfield::ViewportBinding<
    starfield::renderer::RecordingSurface,
    starfield::schedule::ManualScheduler,
    starfield::viewport::RecordingPage,
>;

#[cfg(not(target_arch = "wasm32"))]
fn run_frames(binding: &mut DemoBinding, frames: usize) {
    for _ in 0..frames {
        match binding.scheduler_mut().take_frame() {
            Some(handle) => {
                binding.on_frame(handle);
            }
            None => break,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn deliver_timers(binding: &mut DemoBinding, ms: u64) {
    let due = binding.scheduler_mut().advance(ms);
    for (handle, event) in due {
        binding.on_timer(handle, event);
    }
}
