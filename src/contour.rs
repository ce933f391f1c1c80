//! Contour walks: order an unordered point set into a closed polygon.
//!
//! Both walks start at the leftmost point (lowest on ties) heading up (+y)
//! and repeatedly step to the candidate reached by the smallest unsigned
//! turning angle from the current heading. Whenever the new point continues
//! the previous accepted edge in exactly the same direction, the point in the
//! middle is redundant and is dropped, so straight runs of pixels collapse to
//! their end points.
//!
//! - [`concave_outside`] only looks at nearby candidates (an expanding search
//!   radius) and consumes every point, so it follows dents in the outline.
//! - [`convex_outside`] considers every candidate at each step, which makes it
//!   a gift-wrapping hull walk that returns to its start point.
//!
//! Returned polygons are wound counter-clockwise and start at the walk's
//! starting point.

use crate::error::GeometryError;
use crate::math::Vec2;
use crate::polygon::{signed_area, Polygon};

/// Angles closer than this (in degrees) count as a tie.
const ANGLE_EPSILON: f32 = 1e-4;

/// Tunables for the concave walk.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContourConfig {
    /// Largest squared distance the walk may jump between two points.
    ///
    /// A larger gap means the input is not one connected outline and the
    /// walk fails with [`GeometryError::DisconnectedInput`].
    pub max_search_radius_sq: f32,
}

impl Default for ContourConfig {
    fn default() -> Self {
        Self {
            max_search_radius_sq: 256.0,
        }
    }
}

/// Order a connected outline (e.g. boundary pixels) into a polygon that keeps
/// its concave detail.
///
/// Each step only considers candidates inside the smallest integer squared
/// radius (1, 2, 3, ...) that holds any remaining point. That is the radius
/// a round-by-round expanding search stops at, computed directly from the
/// nearest candidate instead of rescanning once per round.
///
/// One-pixel spikes can strand their tips: the walk passes the spike's base
/// and moves on, and the tips are later found further away than
/// `max_search_radius_sq`. Such outlines fail with
/// [`GeometryError::DisconnectedInput`] instead of producing a
/// self-intersecting polygon.
pub fn concave_outside(
    points: &[Vec2],
    config: &ContourConfig,
) -> Result<Polygon, GeometryError> {
    let mut remaining = sorted_unique(points);
    if remaining.len() < 3 {
        return Err(GeometryError::InsufficientPoints {
            found: remaining.len(),
        });
    }
    let input_len = remaining.len();

    let mut current = remaining.remove(0);
    let mut heading = Vec2::UP;
    let mut ordered = vec![current];

    while !remaining.is_empty() {
        let radius_sq = remaining
            .iter()
            .map(|p| current.distance_squared(*p))
            .fold(f32::INFINITY, f32::min)
            .ceil()
            .max(1.0);
        if radius_sq > config.max_search_radius_sq {
            return Err(GeometryError::DisconnectedInput {
                remaining: remaining.len(),
            });
        }

        let nearby = remaining
            .iter()
            .enumerate()
            .filter(|(_, p)| current.distance_squared(**p) <= radius_sq);
        let index = smallest_turn(current, heading, nearby).ok_or(
            GeometryError::DisconnectedInput {
                remaining: remaining.len(),
            },
        )?;

        let next = remaining.remove(index);
        collapse_collinear(&mut ordered, next);
        ordered.push(next);
        heading = next - current;
        current = next;
    }

    let polygon = close_ring(ordered)?;
    log::debug!(
        "concave walk: {} points -> {} vertices",
        input_len,
        polygon.len()
    );
    Ok(polygon)
}

/// Order any point set into its convex hull, visited in turning-angle order.
///
/// O(n²); meant for small clouds such as clipping results.
pub fn convex_outside(points: &[Vec2]) -> Result<Polygon, GeometryError> {
    let mut remaining = sorted_unique(points);
    if remaining.len() < 3 {
        return Err(GeometryError::InsufficientPoints {
            found: remaining.len(),
        });
    }

    // The start point stays a candidate so the walk can close on it.
    let start = remaining[0];
    let mut current = start;
    let mut heading = Vec2::UP;
    let mut ordered = vec![start];

    for _ in 0..=remaining.len() {
        let candidates = remaining
            .iter()
            .enumerate()
            .filter(|(_, p)| **p != current);
        let index = smallest_turn(current, heading, candidates).ok_or(
            GeometryError::DisconnectedInput {
                remaining: remaining.len(),
            },
        )?;

        let next = remaining[index];
        collapse_collinear(&mut ordered, next);
        if next == start {
            return close_ring(ordered);
        }

        remaining.remove(index);
        ordered.push(next);
        heading = next - current;
        current = next;
    }

    Err(GeometryError::DisconnectedInput {
        remaining: remaining.len(),
    })
}

/// Distinct points sorted by x then y, so the walk's start and tie-breaks do
/// not depend on input order.
fn sorted_unique(points: &[Vec2]) -> Vec<Vec2> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    sorted.dedup();
    sorted
}

/// Index of the candidate with the smallest turn away from `heading`; ties go
/// to the nearer candidate, then to the earlier one.
fn smallest_turn<'a>(
    current: Vec2,
    heading: Vec2,
    candidates: impl Iterator<Item = (usize, &'a Vec2)>,
) -> Option<usize> {
    let mut best: Option<(usize, f32, f32)> = None;

    for (index, &candidate) in candidates {
        let offset = candidate - current;
        let angle = heading.angle_to(offset);
        let distance_sq = offset.magnitude_squared();

        let better = match best {
            None => true,
            Some((_, best_angle, best_distance_sq)) => {
                angle < best_angle - ANGLE_EPSILON
                    || (angle <= best_angle + ANGLE_EPSILON && distance_sq < best_distance_sq)
            }
        };
        if better {
            best = Some((index, angle, distance_sq));
        }
    }

    best.map(|(index, _, _)| index)
}

/// Drop the last accepted point if `next` continues its edge straight on.
fn collapse_collinear(ordered: &mut Vec<Vec2>, next: Vec2) {
    let redundant = match ordered.as_slice() {
        [.., before, last] => (*last - *before).same_direction(next - *before),
        _ => false,
    };
    if redundant {
        ordered.pop();
    }
}

/// Drop collinear points around the implicit closing edge, wind the ring
/// counter-clockwise and validate it.
fn close_ring(mut ordered: Vec<Vec2>) -> Result<Polygon, GeometryError> {
    while ordered.len() >= 3 {
        let n = ordered.len();
        let (before, last, first) = (ordered[n - 2], ordered[n - 1], ordered[0]);
        if (last - before).same_direction(first - before) {
            ordered.pop();
            continue;
        }

        let second = ordered[1];
        if (first - last).same_direction(second - last) {
            ordered.remove(0);
            continue;
        }
        break;
    }

    if signed_area(&ordered) < 0.0 {
        ordered[1..].reverse();
    }
    Polygon::new(ordered)
}
