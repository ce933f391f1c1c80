//! Implicitly closed planar polygon.

use crate::error::GeometryError;
use crate::hit_test;
use crate::math::Vec2;

/// An ordered, implicitly closed sequence of points.
///
/// Guarantees at least three points, no two consecutive points equal
/// (including across the closing edge), and no duplicated closing point.
/// Simplicity (no self-intersection) is not checked; triangulation is only
/// meaningful for simple polygons.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    points: Vec<Vec2>,
}

impl Polygon {
    /// Validate `points` into a polygon.
    ///
    /// Consecutive duplicates and a trailing copy of the first point are
    /// dropped before counting.
    pub fn new(mut points: Vec<Vec2>) -> Result<Self, GeometryError> {
        points.dedup();
        while points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        if points.len() < 3 {
            return Err(GeometryError::InsufficientPoints {
                found: points.len(),
            });
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Vec2> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept for the `len`/`is_empty` pair.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Edges as `(start, end)` pairs, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        edges(&self.points)
    }

    /// Shoelace area; positive for counter-clockwise winding.
    pub fn signed_area(&self) -> f32 {
        signed_area(&self.points)
    }

    pub fn area(&self) -> f32 {
        self.signed_area().abs()
    }

    pub fn contains(&self, point: Vec2) -> bool {
        hit_test::contains(point, &self.points)
    }

    /// Apply `f` to every point, revalidating the result.
    pub fn map(&self, f: impl FnMut(Vec2) -> Vec2) -> Result<Self, GeometryError> {
        Self::new(self.points.iter().copied().map(f).collect())
    }
}

/// Edges of an implicitly closed point list as `(start, end)` pairs.
pub fn edges(points: &[Vec2]) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    let n = points.len();
    (0..n).map(move |i| (points[i], points[(i + 1) % n]))
}

/// Shoelace signed area of an implicitly closed point list.
pub fn signed_area(points: &[Vec2]) -> f32 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f32 = (0..n)
        .map(|i| points[i].cross(points[(i + 1) % n]))
        .sum();
    twice * 0.5
}
