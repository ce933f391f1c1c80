//! Ear-clipping triangulation.
//!
//! An ear is a convex vertex whose triangle with its two neighbours holds no
//! other vertex. Clipping ears one at a time reduces an n-gon to a triangle
//! in n - 3 steps. Each search is O(n) candidates times an O(n) containment
//! check, for O(n³) worst case and close to O(n²) on typical outlines.
//!
//! Ears are searched in three passes, each only tried when the previous one
//! finds nothing:
//!
//! 1. convex vertices with no other vertex inside or on the ear
//! 2. convex vertices with no other vertex strictly inside the ear
//! 3. collinear vertices, clipped as zero-area triangles
//!
//! Computations run in f64 so integer pixel outlines classify exactly.

use super::{Triangle, Triangulator};
use crate::error::GeometryError;
use crate::math::Vec2;
use crate::polygon::Polygon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EarRule {
    Strict,
    Lenient,
    Degenerate,
}

/// Triangulator using the ear-clipping method.
///
/// Handles either winding order. Collinear vertices are kept and end up in
/// zero-area triangles, so the triangle count is always `n - 2`.
#[derive(Debug, Default, Clone, Copy)]
pub struct EarClipTriangulator;

impl EarClipTriangulator {
    /// Creates a new ear-clipping triangulator.
    pub fn new() -> Self {
        EarClipTriangulator
    }
}

impl Triangulator for EarClipTriangulator {
    fn triangulate(&self, polygon: &Polygon) -> Result<Vec<Triangle>, GeometryError> {
        let points = polygon.points();
        let orientation = if polygon.signed_area() >= 0.0 { 1.0 } else { -1.0 };

        let mut remaining: Vec<usize> = (0..points.len()).collect();
        let mut triangles = Vec::with_capacity(points.len().saturating_sub(2));

        while remaining.len() > 3 {
            let ear = [EarRule::Strict, EarRule::Lenient, EarRule::Degenerate]
                .into_iter()
                .find_map(|rule| find_ear(points, &remaining, orientation, rule))
                .ok_or_else(|| {
                    GeometryError::TriangulationFailed(format!(
                        "no ear among {} remaining vertices",
                        remaining.len()
                    ))
                })?;

            let m = remaining.len();
            triangles.push(Triangle::new(
                remaining[(ear + m - 1) % m] as u32,
                remaining[ear] as u32,
                remaining[(ear + 1) % m] as u32,
            ));
            remaining.remove(ear);
        }

        triangles.push(Triangle::new(
            remaining[0] as u32,
            remaining[1] as u32,
            remaining[2] as u32,
        ));
        Ok(triangles)
    }
}

/// 2D cross product of (b - a) and (c - a), in f64.
#[inline]
fn cross(a: Vec2, b: Vec2, c: Vec2) -> f64 {
    let (ax, ay) = (a.x as f64, a.y as f64);
    (b.x as f64 - ax) * (c.y as f64 - ay) - (b.y as f64 - ay) * (c.x as f64 - ax)
}

/// Position of the first ear in `remaining` under `rule`.
fn find_ear(points: &[Vec2], remaining: &[usize], orientation: f64, rule: EarRule) -> Option<usize> {
    (0..remaining.len()).find(|&i| is_ear(points, remaining, i, orientation, rule))
}

/// Whether `remaining[i]` and its two neighbours form an ear under `rule`.
fn is_ear(points: &[Vec2], remaining: &[usize], i: usize, orientation: f64, rule: EarRule) -> bool {
    let m = remaining.len();
    let ia = remaining[(i + m - 1) % m];
    let ib = remaining[i];
    let ic = remaining[(i + 1) % m];
    let (a, b, c) = (points[ia], points[ib], points[ic]);
    let turn = cross(a, b, c) * orientation;

    match rule {
        EarRule::Degenerate => turn == 0.0,
        EarRule::Strict | EarRule::Lenient => {
            if turn <= 0.0 {
                return false;
            }
            let blocked = remaining
                .iter()
                .filter(|&&j| j != ia && j != ib && j != ic)
                .map(|&j| points[j])
                .filter(|&p| p != a && p != b && p != c)
                .any(|p| {
                    let edges = [
                        cross(a, b, p) * orientation,
                        cross(b, c, p) * orientation,
                        cross(c, a, p) * orientation,
                    ];
                    if rule == EarRule::Strict {
                        edges.iter().all(|&e| e >= 0.0)
                    } else {
                        edges.iter().all(|&e| e > 0.0)
                    }
                });
            !blocked
        }
    }
}
