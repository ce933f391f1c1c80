//! Segment-segment intersection with epsilon-tolerant range checks.
//!
//! Coordinates are promoted to f64 so the tolerances below stay meaningful
//! for polygons measured in hundreds of pixels.

use crate::math::Vec2;

/// Segments whose x extent is narrower than this are treated as vertical.
const VERTICAL_EPSILON: f64 = 1e-6;
/// Segments whose slopes differ by less than this are treated as parallel.
const SLOPE_EPSILON: f64 = 1e-6;
/// Slack allowed when checking that a value lies within a segment's extent.
const BETWEEN_EPSILON: f64 = 1e-8;

/// True if `a` lies between `x0` and `x1` (in either order), with a small
/// tolerance at both ends.
pub fn between(a: f64, x0: f64, x1: f64) -> bool {
    let (lo, hi) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
    a > lo - BETWEEN_EPSILON && a < hi + BETWEEN_EPSILON
}

/// Intersection point of segments `p1p2` and `p3p4`, if the segments (not
/// just their lines) cross.
///
/// Parallel segments, including two vertical ones, never intersect here,
/// even when they overlap.
pub fn segment_intersection(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> Option<Vec2> {
    let first_vertical = (p1.x as f64 - p2.x as f64).abs() < VERTICAL_EPSILON;
    let second_vertical = (p3.x as f64 - p4.x as f64).abs() < VERTICAL_EPSILON;

    match (first_vertical, second_vertical) {
        (true, true) => None,
        (true, false) => vertical_crossing(p1, p2, p3, p4),
        (false, true) => vertical_crossing(p3, p4, p1, p2),
        (false, false) => {
            let (x1, y1) = (p1.x as f64, p1.y as f64);
            let (x3, y3) = (p3.x as f64, p3.y as f64);
            let k1 = slope(p1, p2);
            let k2 = slope(p3, p4);
            if (k1 - k2).abs() < SLOPE_EPSILON {
                return None;
            }

            let x = ((y3 - y1) - (k2 * x3 - k1 * x1)) / (k1 - k2);
            let y = k1 * (x - x1) + y1;

            let within = between(x, x1, p2.x as f64) && between(x, x3, p4.x as f64);
            within.then(|| Vec2::new(x as f32, y as f32))
        }
    }
}

fn slope(a: Vec2, b: Vec2) -> f64 {
    (b.y as f64 - a.y as f64) / (b.x as f64 - a.x as f64)
}

/// Crossing of the vertical segment `v1v2` with the non-vertical `s1s2`.
fn vertical_crossing(v1: Vec2, v2: Vec2, s1: Vec2, s2: Vec2) -> Option<Vec2> {
    let x = v1.x as f64;
    if !between(x, s1.x as f64, s2.x as f64) {
        return None;
    }

    let y = slope(s1, s2) * (x - s1.x as f64) + s1.y as f64;
    between(y, v1.y as f64, v2.y as f64).then(|| Vec2::new(x as f32, y as f32))
}
