//! 2-D drawing surface seam
//!
//! The particle field only ever clears the surface and fills soft circles, so
//! that is all the trait asks for. The browser implementation wraps a canvas
//! 2-D context; tests use [`super::RecordingSurface`].

use glam::Vec2;

use crate::error::StarfieldError;
use crate::viewport::Viewport;

/// Backing-store size of a surface in device pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Straight-alpha color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub fn from_rgb(rgb: [u8; 3], alpha: f32) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a: alpha,
        }
    }

    /// CSS `rgba()` string, alpha clamped into what the canvas accepts
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            self.r,
            self.g,
            self.b,
            self.a.clamp(0.0, 1.0)
        )
    }
}

/// One filled circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    /// Center in device pixels
    pub center: Vec2,
    /// Radius in device pixels
    pub radius: f32,
    pub color: Rgba,
    /// Shadow blur radius in device pixels (0 = crisp)
    pub blur: f32,
}

/// Something particles can be drawn onto
pub trait Surface {
    /// Current backing-store size
    fn size(&self) -> SurfaceSize;

    /// Match the backing store to a viewport (CSS size × device pixel ratio)
    fn resize(&mut self, viewport: &Viewport) -> Result<SurfaceSize, StarfieldError>;

    /// Clear the whole surface. Fails when the surface can no longer be drawn to.
    fn clear(&mut self) -> Result<(), StarfieldError>;

    fn fill_dot(&mut self, dot: &Dot);
}

/// A surface that may be missing. Drawing on `None` is refused, which keeps
/// the render loop from ever starting.
impl<S: Surface> Surface for Option<S> {
    fn size(&self) -> SurfaceSize {
        self.as_ref().map(Surface::size).unwrap_or_default()
    }

    fn resize(&mut self, viewport: &Viewport) -> Result<SurfaceSize, StarfieldError> {
        match self {
            Some(surface) => surface.resize(viewport),
            None => Err(StarfieldError::NoSurface),
        }
    }

    fn clear(&mut self) -> Result<(), StarfieldError> {
        match self {
            Some(surface) => surface.clear(),
            None => Err(StarfieldError::NoSurface),
        }
    }

    fn fill_dot(&mut self, dot: &Dot) {
        if let Some(surface) = self {
            surface.fill_dot(dot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingSurface;

    #[test]
    fn css_color_clamps_alpha() {
        let color = Rgba::from_rgb([255, 255, 255], 1.004);
        assert_eq!(color.to_css(), "rgba(255, 255, 255, 1.000)");

        let color = Rgba::from_rgb([10, 20, 30], 0.25);
        assert_eq!(color.to_css(), "rgba(10, 20, 30, 0.250)");
    }

    #[test]
    fn absent_surface_refuses_to_draw() {
        let mut surface: Option<RecordingSurface> = None;
        let viewport = Viewport::new(800.0, 600.0, 1.0);

        assert!(matches!(surface.resize(&viewport), Err(StarfieldError::NoSurface)));
        assert!(matches!(surface.clear(), Err(StarfieldError::NoSurface)));
        assert_eq!(surface.size(), SurfaceSize::default());
    }

    #[test]
    fn present_surface_passes_through() {
        let mut surface = Some(RecordingSurface::new());
        let size = surface.resize(&Viewport::new(800.0, 600.0, 2.0)).unwrap();

        assert_eq!(size, SurfaceSize::new(1600.0, 1200.0));
        assert_eq!(surface.size(), size);
        assert!(surface.clear().is_ok());
    }
}
