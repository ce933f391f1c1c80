//! Approximate intersection of two polygons.
//!
//! The overlap is assembled as a point cloud: every crossing between an edge
//! of one polygon and an edge of the other, plus every vertex of either
//! polygon lying inside the other. The cloud is then ordered by the convex
//! contour walk.
//!
//! The result is always convex. Intersecting two concave polygons yields the
//! convex hull of their true intersection's points, not the concave region
//! itself. Callers that need exact concave results must not rely on this.

use crate::contour::convex_outside;
use crate::error::GeometryError;
use crate::hit_test::contains;
use crate::math::{Rect, Vec2};
use crate::polygon::{edges, Polygon};

use super::segment::segment_intersection;

/// Cloud points closer than this are merged before the walk.
const MERGE_EPSILON: f32 = 1e-5;

/// Intersect two polygons.
pub fn intersect(a: &Polygon, b: &Polygon) -> Result<Polygon, GeometryError> {
    intersect_points(a.points(), b.points())
}

/// Intersect two raw, implicitly closed vertex lists.
///
/// Either list having fewer than three vertices is an
/// [`GeometryError::InvalidPolygon`]. No overlap, or an overlap with no area
/// (shared edge or corner), is a [`GeometryError::NoIntersection`].
pub fn intersect_points(a: &[Vec2], b: &[Vec2]) -> Result<Polygon, GeometryError> {
    for vertices in [a, b] {
        if vertices.len() < 3 {
            return Err(GeometryError::InvalidPolygon {
                vertices: vertices.len(),
            });
        }
    }

    let mut cloud = Vec::new();
    for (a1, a2) in edges(a) {
        for (b1, b2) in edges(b) {
            if let Some(point) = segment_intersection(a1, a2, b1, b2) {
                cloud.push(point);
            }
        }
    }
    cloud.extend(a.iter().copied().filter(|&p| contains(p, b)));
    cloud.extend(b.iter().copied().filter(|&p| contains(p, a)));

    if cloud.is_empty() {
        return Err(GeometryError::NoIntersection);
    }

    match convex_outside(&merge_close(cloud)) {
        Err(GeometryError::InsufficientPoints { .. }) => Err(GeometryError::NoIntersection),
        result => result,
    }
}

/// Confine a polygon to an axis-aligned rectangle.
pub fn clip_to_rect(vertices: &[Vec2], rect: &Rect) -> Result<Polygon, GeometryError> {
    intersect_points(vertices, &rect.corners())
}

fn merge_close(points: Vec<Vec2>) -> Vec<Vec2> {
    let mut merged: Vec<Vec2> = Vec::with_capacity(points.len());
    for point in points {
        let duplicate = merged
            .iter()
            .any(|q| q.distance_squared(point) <= MERGE_EPSILON * MERGE_EPSILON);
        if !duplicate {
            merged.push(point);
        }
    }
    merged
}
