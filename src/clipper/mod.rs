//! Polygon clipping.
//!
//! - [`segment`]: segment-segment intersection with tolerant range checks.
//! - [`intersect`]: approximate intersection of two polygons, and clipping
//!   a polygon to a rectangle built on it.

pub mod intersect;
pub mod segment;

pub use intersect::{clip_to_rect, intersect, intersect_points};
pub use segment::{between, segment_intersection};
