//! Adapter for the `earcutr` crate.

use super::{Triangle, Triangulator};
use crate::error::GeometryError;
use crate::polygon::Polygon;

/// Triangulator backed by `earcutr`.
///
/// Only the covered area is guaranteed. earcut may filter collinear
/// vertices it cannot clip, in which case the triangle count falls short of
/// `n - 2`; use [`EarClipTriangulator`](super::EarClipTriangulator) when the
/// count matters.
#[derive(Debug, Default, Clone, Copy)]
pub struct EarcutTriangulator;

impl EarcutTriangulator {
    /// Creates a new earcut triangulator.
    pub fn new() -> Self {
        EarcutTriangulator
    }
}

impl Triangulator for EarcutTriangulator {
    fn triangulate(&self, polygon: &Polygon) -> Result<Vec<Triangle>, GeometryError> {
        let coords: Vec<f64> = polygon
            .points()
            .iter()
            .flat_map(|p| [p.x as f64, p.y as f64])
            .collect();

        let indices = earcutr::earcut(&coords, &[], 2).map_err(|_| {
            GeometryError::TriangulationFailed("earcut rejected the polygon".to_string())
        })?;
        if indices.len() < 3 || indices.len() % 3 != 0 {
            return Err(GeometryError::TriangulationFailed(format!(
                "earcut returned {} indices",
                indices.len()
            )));
        }

        Ok(indices
            .chunks_exact(3)
            .map(|t| Triangle::new(t[0] as u32, t[1] as u32, t[2] as u32))
            .collect())
    }
}
