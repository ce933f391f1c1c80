use serde::{Deserialize, Serialize};

use super::vec2::Vec2;

/// Axis-aligned rectangle given by its minimum and maximum corners.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Rectangle of the given size whose normalized `pivot` sits on the origin,
    /// the way a UI element lays out around its pivot.
    pub fn from_size_and_pivot(size: Vec2, pivot: Vec2) -> Self {
        let min = -(size * pivot);
        Self::new(min, min + size)
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }

    /// Corner polygon walked from the bottom-left corner, up, across, down.
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.min.x, self.min.y),
            Vec2::new(self.min.x, self.max.y),
            Vec2::new(self.max.x, self.max.y),
            Vec2::new(self.max.x, self.min.y),
        ]
    }
}

/// A sprite's region in texture space, `min` and `max` in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UvRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl UvRect {
    /// The whole texture.
    pub const FULL: Self = Self {
        min: Vec2::ZERO,
        max: Vec2::ONE,
    };

    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(Vec2::new(x, y), Vec2::new(x + width, y + height))
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pivot_rect_is_centred() {
        let rect = Rect::from_size_and_pivot(Vec2::new(100.0, 50.0), Vec2::new(0.5, 0.5));
        assert_eq!(rect.min, Vec2::new(-50.0, -25.0));
        assert_eq!(rect.max, Vec2::new(50.0, 25.0));
        assert_eq!(rect.size(), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn uv_rect_from_xywh() {
        let uv = UvRect::from_xywh(0.25, 0.5, 0.5, 0.25);
        assert_eq!(uv.max, Vec2::new(0.75, 0.75));
        assert_eq!(uv.size(), Vec2::new(0.5, 0.25));
    }
}
