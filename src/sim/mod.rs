//! Starfield simulation
//!
//! Pure state and stepping. Nothing in here touches the DOM; drawing goes
//! through the [`crate::renderer::Surface`] trait.

pub mod field;
pub mod particle;

pub use field::ParticleField;
pub use particle::{Particle, wrap_coord};
