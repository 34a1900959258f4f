//! Browser glue
//!
//! Everything here talks to the DOM and only builds for `wasm32`. The rest of
//! the crate sees the browser through the `Surface`, `Scheduler` and `Page`
//! traits, so native builds and tests never touch it.

#[cfg(target_arch = "wasm32")]
pub mod browser;
#[cfg(target_arch = "wasm32")]
pub mod canvas;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod effects;
#[cfg(target_arch = "wasm32")]
pub mod page;

#[cfg(target_arch = "wasm32")]
pub use browser::{BrowserScheduler, WebBinding, start};
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
#[cfg(target_arch = "wasm32")]
pub use page::DomPage;
