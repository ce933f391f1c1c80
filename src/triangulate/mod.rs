//! Polygon triangulation.
//!
//! Triangulation is pluggable: anything implementing [`Triangulator`] can
//! feed the mask mesh. Two implementations ship with the crate:
//!
//! - [`EarClipTriangulator`]: O(n²) ear clipping, the reference choice for
//!   authored polygons of tens to low hundreds of vertices
//! - [`EarcutTriangulator`]: the `earcutr` port of mapbox's earcut

mod ear_clip;
mod earcut;

pub use ear_clip::EarClipTriangulator;
pub use earcut::EarcutTriangulator;

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::math::Vec2;
use crate::polygon::Polygon;

/// Three indices into a polygon's points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triangle {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl Triangle {
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c }
    }

    pub fn indices(&self) -> [u32; 3] {
        [self.a, self.b, self.c]
    }

    /// Unsigned area of the triangle over `points`, or `None` if an index is
    /// out of range.
    pub fn area(&self, points: &[Vec2]) -> Option<f32> {
        let [a, b, c] = self.indices().map(|i| points.get(i as usize).copied());
        let (a, b, c) = (a?, b?, c?);
        Some(((b - a).cross(c - a) * 0.5).abs())
    }
}

/// Decomposes a simple polygon into triangles.
///
/// Implementations must return triangles whose indices refer to the
/// polygon's points and whose union covers the polygon's interior exactly
/// once; `n - 2` triangles for an `n`-vertex simple polygon.
pub trait Triangulator {
    fn triangulate(&self, polygon: &Polygon) -> Result<Vec<Triangle>, GeometryError>;
}

/// Available triangulation algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriangulatorType {
    /// Ear clipping; keeps the `n - 2` triangle count even with collinear vertices.
    #[default]
    EarClip,
    /// earcut; faster on large polygons, may skip collinear vertices.
    Earcut,
}

impl std::fmt::Display for TriangulatorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TriangulatorType::EarClip => write!(f, "ear-clip"),
            TriangulatorType::Earcut => write!(f, "earcut"),
        }
    }
}

impl std::str::FromStr for TriangulatorType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ear-clip" => Ok(TriangulatorType::EarClip),
            "earcut" => Ok(TriangulatorType::Earcut),
            other => Err(format!(
                "unknown triangulator `{other}` (expected `ear-clip` or `earcut`)"
            )),
        }
    }
}

/// Holds both triangulators and forwards to the selected one.
#[derive(Debug, Default)]
pub struct TriangulatorDispatcher {
    ear_clip: EarClipTriangulator,
    earcut: EarcutTriangulator,
    active: TriangulatorType,
}

impl TriangulatorDispatcher {
    pub fn new(triangulator_type: TriangulatorType) -> Self {
        Self {
            active: triangulator_type,
            ..Self::default()
        }
    }

    pub fn set_type(&mut self, triangulator_type: TriangulatorType) {
        self.active = triangulator_type;
    }

    pub fn active_type(&self) -> TriangulatorType {
        self.active
    }
}

impl Triangulator for TriangulatorDispatcher {
    fn triangulate(&self, polygon: &Polygon) -> Result<Vec<Triangle>, GeometryError> {
        match self.active {
            TriangulatorType::EarClip => self.ear_clip.triangulate(polygon),
            TriangulatorType::Earcut => self.earcut.triangulate(polygon),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_shapes::*;
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn parses_and_displays_types() {
        for ty in [TriangulatorType::EarClip, TriangulatorType::Earcut] {
            assert_eq!(ty.to_string().parse::<TriangulatorType>(), Ok(ty));
        }
        assert!("fan".parse::<TriangulatorType>().is_err());
    }

    #[test]
    fn dispatcher_switches_algorithms() {
        let mut dispatcher = TriangulatorDispatcher::default();
        assert_eq!(dispatcher.active_type(), TriangulatorType::EarClip);

        let poly = ell();
        for ty in [TriangulatorType::EarClip, TriangulatorType::Earcut] {
            dispatcher.set_type(ty);
            let triangles = dispatcher.triangulate(&poly).unwrap();
            assert_relative_eq!(
                triangle_area_sum(&poly, &triangles),
                poly.area(),
                max_relative = 1e-4
            );
        }
    }

    #[test]
    fn triangle_area_checks_indices() {
        let points = [Vec2::new(0.0, 0.0), Vec2::new(2.0, 0.0), Vec2::new(0.0, 2.0)];
        assert_eq!(Triangle::new(0, 1, 2).area(&points), Some(2.0));
        assert_eq!(Triangle::new(0, 1, 3).area(&points), None);
    }
}
