//! Drawing surface abstraction
//!
//! The simulation draws through [`Surface`]; the browser canvas lives in
//! `platform`, the recording surface here.

pub mod recording;
pub mod surface;

pub use recording::{DrawCommand, RecordingSurface};
pub use surface::{Dot, Rgba, Surface, SurfaceSize};
