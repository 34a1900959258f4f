//! Custom cursor with an eased follower ring

use glam::Vec2;

/// Pointer dot plus a ring that trails it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorFollower {
    pointer: Vec2,
    follower: Vec2,
    easing: f32,
}

impl CursorFollower {
    pub fn new(easing: f32) -> Self {
        Self {
            pointer: Vec2::ZERO,
            follower: Vec2::ZERO,
            easing: easing.clamp(0.0, 1.0),
        }
    }

    pub fn point_to(&mut self, pointer: Vec2) {
        self.pointer = pointer;
    }

    /// Ease the follower toward the pointer by one frame
    pub fn step(&mut self) -> Vec2 {
        self.follower += (self.pointer - self.follower) * self.easing;
        self.follower
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn follower(&self) -> Vec2 {
        self.follower
    }
}
