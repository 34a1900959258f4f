//! Starfield - animated background and page effects for a portfolio site
//!
//! Core modules:
//! - `sim`: Particle field (seeding, drift, wrap-around, twinkle)
//! - `render_loop`: Per-frame clear/advance/draw state machine
//! - `viewport`: Ready/resize/reveal lifecycle binding
//! - `schedule`: Frame and timer scheduling seam
//! - `renderer`: Drawing surface abstraction
//! - `effects`: Cursor, typing, magnetic button and navigation logic
//! - `platform`: Browser glue (wasm32 only)
//! - `settings`: Tunables, overridable from the page

pub mod effects;
pub mod error;
pub mod platform;
pub mod render_loop;
pub mod renderer;
pub mod schedule;
pub mod settings;
pub mod sim;
pub mod viewport;

pub use error::StarfieldError;
pub use render_loop::{LoopState, RenderLoop, Scene, TickOutcome};
pub use settings::{Density, Settings};
pub use sim::{Particle, ParticleField};
pub use viewport::{Viewport, ViewportBinding};
