//! Vertex streams for drawing a mask.
//!
//! A mask is drawn as a plain indexed triangle list whose texture
//! coordinates are derived from vertex positions, so the sprite shows
//! through the masked shape exactly where it would sit unmasked.

use serde::{Deserialize, Serialize};

use crate::math::{UvRect, Vec2};
use crate::raster::Color;
use crate::triangulate::Triangle;

/// Inputs for [`build_mesh`] taken from the element the mask is drawn on.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeshParams {
    /// The sprite's region of its texture.
    pub uv: UvRect,
    /// Normalized pivot of the target element.
    pub pivot: Vec2,
    /// Size of the target element in local units.
    pub target_size: Vec2,
    /// Tint applied to every vertex.
    pub color: Color,
}

impl Default for MeshParams {
    /// No sprite: an empty UV rect, centred pivot, white tint.
    fn default() -> Self {
        Self {
            uv: UvRect::default(),
            pivot: Vec2::new(0.5, 0.5),
            target_size: Vec2::ONE,
            color: Color::WHITE,
        }
    }
}

/// An indexed triangle list ready for upload.
///
/// `positions`, `uvs` and `colors` are parallel arrays; `indices` holds
/// three entries per triangle.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MaskMesh {
    pub positions: Vec<Vec2>,
    pub uvs: Vec<Vec2>,
    pub colors: Vec<Color>,
    pub indices: Vec<u32>,
}

impl MaskMesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Scale and offset mapping one local axis into texture space.
///
/// A non-positive target extent collapses the axis onto the UV centre.
fn axis_mapping(uv_min: f32, uv_max: f32, target: f32, pivot: f32) -> (f32, f32) {
    let extent = uv_max - uv_min;
    let scale = if target > 0.0 { extent / target } else { 0.0 };
    (scale, uv_min + extent * pivot)
}

/// Build the vertex streams for `vertices` triangulated by `triangles`.
///
/// Each position is kept as is; its texture coordinate is
/// `position * scale + centre` per axis, where `scale` is the UV extent over
/// the target size and `centre` is the UV point under the pivot.
pub fn build_mesh(vertices: &[Vec2], triangles: &[Triangle], params: &MeshParams) -> MaskMesh {
    let (sx, cx) = axis_mapping(
        params.uv.min.x,
        params.uv.max.x,
        params.target_size.x,
        params.pivot.x,
    );
    let (sy, cy) = axis_mapping(
        params.uv.min.y,
        params.uv.max.y,
        params.target_size.y,
        params.pivot.y,
    );

    let uvs = vertices
        .iter()
        .map(|v| Vec2::new(v.x * sx + cx, v.y * sy + cy))
        .collect();

    MaskMesh {
        positions: vertices.to_vec(),
        uvs,
        colors: vec![params.color; vertices.len()],
        indices: triangles.iter().flat_map(|t| t.indices()).collect(),
    }
}
