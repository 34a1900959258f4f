//! In-memory surface that records draw calls
//!
//! Used by the native demo and by tests that need to see what a frame drew.

use super::surface::{Dot, Surface, SurfaceSize};
use crate::error::StarfieldError;
use crate::viewport::Viewport;

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Dot(Dot),
}

/// Surface that keeps the calls of the current frame
#[derive(Debug, Default)]
pub struct RecordingSurface {
    size: SurfaceSize,
    commands: Vec<DrawCommand>,
    /// Simulates the canvas being removed from the document
    pub detached: bool,
    /// Total clears since creation
    pub frames: u64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls recorded since the last clear (the clear included)
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn dots(&self) -> impl Iterator<Item = &Dot> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Dot(dot) => Some(dot),
            DrawCommand::Clear => None,
        })
    }

    pub fn dot_count(&self) -> usize {
        self.dots().count()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn resize(&mut self, viewport: &Viewport) -> Result<SurfaceSize, StarfieldError> {
        if self.detached {
            return Err(StarfieldError::SurfaceDetached);
        }
        self.size = viewport.surface_size();
        Ok(self.size)
    }

    fn clear(&mut self) -> Result<(), StarfieldError> {
        if self.detached {
            return Err(StarfieldError::SurfaceDetached);
        }
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        self.frames += 1;
        Ok(())
    }

    fn fill_dot(&mut self, dot: &Dot) {
        self.commands.push(DrawCommand::Dot(*dot));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Rgba;
    use glam::Vec2;

    #[test]
    fn clear_starts_a_new_frame() {
        let mut surface = RecordingSurface::new();
        let dot = Dot {
            center: Vec2::ZERO,
            radius: 1.0,
            color: Rgba::from_rgb([255, 255, 255], 1.0),
            blur: 0.0,
        };
        surface.clear().unwrap();
        surface.fill_dot(&dot);
        surface.fill_dot(&dot);
        assert_eq!(surface.dot_count(), 2);

        surface.clear().unwrap();
        assert_eq!(surface.commands(), &[DrawCommand::Clear]);
        assert_eq!(surface.frames, 2);
    }

    #[test]
    fn resize_uses_device_pixels() {
        let mut surface = RecordingSurface::new();
        let size = surface.resize(&Viewport::new(375.0, 812.0, 3.0)).unwrap();
        assert_eq!(size, SurfaceSize::new(1125.0, 2436.0));
    }

    #[test]
    fn detached_surface_refuses_work() {
        let mut surface = RecordingSurface {
            detached: true,
            ..Default::default()
        };
        assert!(surface.clear().is_err());
        assert!(surface.resize(&Viewport::new(10.0, 10.0, 1.0)).is_err());
    }
}
