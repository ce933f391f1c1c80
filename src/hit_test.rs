//! Point-in-polygon classification by ray crossing.
//!
//! A horizontal ray is cast from the test point towards +x and the polygon
//! edges it crosses are counted; an odd count means inside. Each edge is
//! tested against the half-open interval `[min y, max y)`, so a ray passing
//! exactly through a shared vertex is counted once, and horizontal edges
//! are never counted.

use crate::math::Vec2;

/// True if `point` lies inside the implicitly closed polygon `vertices`.
///
/// Runs in O(n). Points exactly on an edge get a fixed, repeatable answer.
/// Fewer than three vertices never contain anything.
pub fn contains(point: Vec2, vertices: &[Vec2]) -> bool {
    let count = vertices.len();
    if count < 3 {
        return false;
    }

    let mut crossings = 0u32;
    for i in 0..count {
        let v1 = vertices[i];
        let v2 = vertices[(i + 1) % count];

        let spans = (v1.y <= point.y && v2.y > point.y) || (v1.y > point.y && v2.y <= point.y);
        if spans {
            let intercept = v1.x + (point.y - v1.y) / (v2.y - v1.y) * (v2.x - v1.x);
            if point.x < intercept {
                crossings += 1;
            }
        }
    }

    crossings & 1 == 1
}

/// Hit test for a point already transformed into the polygon's local space.
pub fn is_point_inside(local_point: Vec2, vertices: &[Vec2]) -> bool {
    contains(local_point, vertices)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, -2.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(0.0, 2.0),
            Vec2::new(-2.0, 0.0),
        ]
    }

    /// An L shape, concave at (1, 1).
    fn ell() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 3.0),
            Vec2::new(1.0, 3.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(3.0, 1.0),
            Vec2::new(3.0, 0.0),
        ]
    }

    #[test]
    fn convex_inside_and_outside() {
        let poly = diamond();
        assert!(contains(Vec2::ZERO, &poly));
        assert!(contains(Vec2::new(0.9, 0.9), &poly));
        assert!(contains(Vec2::new(-1.5, 0.2), &poly));
        assert!(!contains(Vec2::new(1.5, 1.5), &poly));
        assert!(!contains(Vec2::new(-3.0, 0.0), &poly));
        assert!(!contains(Vec2::new(0.0, 2.5), &poly));
    }

    #[test]
    fn ray_through_vertex_counts_once() {
        // The ray from (-1, 0) passes exactly through the vertex (2, 0).
        assert!(contains(Vec2::new(-1.0, 0.0), &diamond()));
        assert!(!contains(Vec2::new(-3.0, 0.0), &diamond()));
    }

    #[test]
    fn concave_notch_is_outside() {
        let poly = ell();
        assert!(contains(Vec2::new(0.5, 2.5), &poly));
        assert!(contains(Vec2::new(2.5, 0.5), &poly));
        assert!(!contains(Vec2::new(2.0, 2.0), &poly));
    }

    #[test]
    fn winding_order_does_not_matter() {
        let mut poly = ell();
        poly.reverse();
        assert!(contains(Vec2::new(0.5, 2.5), &poly));
        assert!(!contains(Vec2::new(2.0, 2.0), &poly));
    }

    #[test]
    fn edge_points_are_stable() {
        let poly = ell();
        let on_edge = Vec2::new(0.0, 1.5);
        let first = is_point_inside(on_edge, &poly);
        for _ in 0..10 {
            assert_eq!(is_point_inside(on_edge, &poly), first);
        }
    }

    #[test]
    fn degenerate_input_contains_nothing() {
        assert!(!contains(Vec2::ZERO, &[]));
        assert!(!contains(Vec2::ZERO, &[Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0)]));
    }
}
