//! Page lifecycle glue
//!
//! - `binding`: ready/resize/frame/timer callbacks driving field and loop
//! - `reveal`: the one-shot orb reveal sequence
//! - `page`: the DOM effects the binding needs, behind a trait

pub mod binding;
pub mod page;
pub mod reveal;

pub use binding::ViewportBinding;
pub use page::{Page, PageEffect, RecordingPage};
pub use reveal::{RevealPhase, RevealSequence};

use crate::renderer::SurfaceSize;

/// Visible area of the page in CSS pixels plus the display's pixel density
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
}

impl Viewport {
    /// Sanitized viewport; unusable densities fall back to 1
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Self {
        let clean = |v: f32| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        Self {
            width: clean(width),
            height: clean(height),
            device_pixel_ratio: dpr,
        }
    }

    /// Backing-store size: CSS size scaled by density, truncated like a canvas does
    pub fn surface_size(&self) -> SurfaceSize {
        SurfaceSize::new(
            (self.width * self.device_pixel_ratio).floor(),
            (self.height * self.device_pixel_ratio).floor(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_scales_with_density() {
        let vp = Viewport::new(1440.0, 900.0, 1.5);
        assert_eq!(vp.surface_size(), SurfaceSize::new(2160.0, 1350.0));
    }

    #[test]
    fn bad_density_falls_back_to_one() {
        assert_eq!(Viewport::new(10.0, 10.0, 0.0).device_pixel_ratio, 1.0);
        assert_eq!(Viewport::new(10.0, 10.0, f32::NAN).device_pixel_ratio, 1.0);
    }

    #[test]
    fn negative_size_clamps_to_zero() {
        let vp = Viewport::new(-5.0, f32::INFINITY, 2.0);
        assert_eq!(vp.surface_size(), SurfaceSize::default());
    }
}
