//! Planar math primitives shared by every pipeline stage.

pub mod rect;
pub mod vec2;

pub use rect::{Rect, UvRect};
pub use vec2::Vec2;
