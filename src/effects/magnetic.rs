//! Magnetic buttons lean toward the pointer

use glam::Vec2;

/// Element box in client coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ElementRect {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Translation for a button with the pointer at `pointer`
pub fn magnetic_offset(pointer: Vec2, rect: ElementRect, strength: f32) -> Vec2 {
    (pointer - rect.center()) * strength
}

/// CSS transform for an offset
pub fn translate_css(offset: Vec2) -> String {
    if offset == Vec2::ZERO {
        return "translate(0, 0)".to_string();
    }
    format!("translate({}px, {}px)", offset.x, offset.y)
}
