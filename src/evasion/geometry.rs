// evasion/geometry.rs

use bevy::math::Vec2;

/// A pointer position in viewport coordinates (logical pixels, origin top-left)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

impl PointerSample {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Vec2> for PointerSample {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

/// Bounding box of an element in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ElementBounds {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Build bounds from a center point and a size (how UI layout reports nodes)
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self::new(
            center.x - size.x * 0.5,
            center.y - size.y * 0.5,
            size.x,
            size.y,
        )
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Current viewport dimensions (logical pixels)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Largest allowed displacement on either axis
    pub fn max_offset(&self, fraction: f32) -> f32 {
        self.width.min(self.height).max(0.0) * fraction
    }
}
