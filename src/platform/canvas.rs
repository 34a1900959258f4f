//! Canvas 2-D surface

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use super::dom;
use crate::error::StarfieldError;
use crate::renderer::{Dot, Surface, SurfaceSize};
use crate::viewport::Viewport;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    size: SurfaceSize,
}

impl CanvasSurface {
    /// Look up the canvas by id and take its 2-D context
    pub fn from_id(document: &Document, id: &str) -> Result<Self, StarfieldError> {
        let canvas: HtmlCanvasElement = dom::element_by_id(document, id)?
            .dyn_into()
            .map_err(|_| StarfieldError::WrongElementType {
                id: id.to_string(),
                expected: "canvas",
            })?;

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(dom::js_error)?
            .ok_or(StarfieldError::ContextUnavailable("2d"))?
            .dyn_into()
            .map_err(|_| StarfieldError::ContextUnavailable("2d"))?;

        Ok(Self {
            canvas,
            ctx,
            size: SurfaceSize::default(),
        })
    }

    fn ensure_attached(&self) -> Result<(), StarfieldError> {
        if self.canvas.is_connected() {
            Ok(())
        } else {
            Err(StarfieldError::SurfaceDetached)
        }
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn resize(&mut self, viewport: &Viewport) -> Result<SurfaceSize, StarfieldError> {
        self.ensure_attached()?;

        let size = viewport.surface_size();
        self.canvas.set_width(size.width as u32);
        self.canvas.set_height(size.height as u32);

        // Backing store is in device pixels, layout stays in CSS pixels
        let style = self.canvas.style();
        style
            .set_property("width", &format!("{}px", viewport.width))
            .map_err(dom::js_error)?;
        style
            .set_property("height", &format!("{}px", viewport.height))
            .map_err(dom::js_error)?;

        self.size = size;
        Ok(size)
    }

    fn clear(&mut self) -> Result<(), StarfieldError> {
        self.ensure_attached()?;
        self.ctx
            .clear_rect(0.0, 0.0, self.size.width as f64, self.size.height as f64);
        Ok(())
    }

    fn fill_dot(&mut self, dot: &Dot) {
        let color = dot.color.to_css();
        self.ctx.set_fill_style_str(&color);
        if dot.blur > 0.0 {
            self.ctx.set_shadow_blur(dot.blur as f64);
            self.ctx.set_shadow_color(&color);
        } else {
            self.ctx.set_shadow_blur(0.0);
        }

        self.ctx.begin_path();
        if self
            .ctx
            .arc(
                dot.center.x as f64,
                dot.center.y as f64,
                dot.radius.max(0.0) as f64,
                0.0,
                TAU,
            )
            .is_ok()
        {
            self.ctx.fill();
        }
    }
}
