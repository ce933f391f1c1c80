//! Authored mask shapes.
//!
//! A [`MaskShape`] is the persisted result of authoring: the outline in the
//! mask's local space plus its triangulation. It is produced once, either by
//! tracing a sprite's silhouette or from a hand-drawn path, and then used at
//! runtime for hit testing and mesh building.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::clipper;
use crate::contour::{self, ContourConfig};
use crate::edge::SobelEdgeDetector;
use crate::error::GeometryError;
use crate::hit_test;
use crate::math::{Rect, Vec2};
use crate::mesh::{self, MaskMesh, MeshParams};
use crate::polygon::Polygon;
use crate::raster::RasterImage;
use crate::triangulate::{Triangle, Triangulator};

/// Settings for tracing a mask from an image.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AuthoringConfig {
    pub edge: SobelEdgeDetector,
    pub contour: ContourConfig,
    /// Size of the element the mask is laid over. When set, the traced
    /// outline is scaled from image pixels to this size.
    pub target_size: Option<Vec2>,
}

/// A mask outline and its triangulation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaskShape {
    pub vertices: Vec<Vec2>,
    pub triangles: Vec<Triangle>,
}

impl MaskShape {
    /// Triangulate an already validated outline.
    pub fn from_polygon(
        polygon: Polygon,
        triangulator: &dyn Triangulator,
    ) -> Result<Self, GeometryError> {
        let start = Instant::now();
        let triangles = triangulator.triangulate(&polygon)?;
        log::debug!(
            "triangulated {} vertices into {} triangles in {:?}",
            polygon.len(),
            triangles.len(),
            start.elapsed()
        );
        Ok(Self {
            vertices: polygon.into_points(),
            triangles,
        })
    }

    /// Build a shape from a hand-authored path.
    ///
    /// A closing point equal to the first point is dropped.
    pub fn from_path(
        points: Vec<Vec2>,
        triangulator: &dyn Triangulator,
    ) -> Result<Self, GeometryError> {
        Self::from_polygon(Polygon::new(points)?, triangulator)
    }

    /// Trace the silhouette of `image`.
    ///
    /// The outline is centred so the middle of the image is the origin, then
    /// scaled to `config.target_size` if one is given.
    pub fn from_image(
        image: &RasterImage,
        config: &AuthoringConfig,
        triangulator: &dyn Triangulator,
    ) -> Result<Self, GeometryError> {
        let start = Instant::now();
        let edges = config.edge.detect(image);
        let points = edges.boundary_points();
        log::debug!(
            "edge detection on {}x{}: {} boundary pixels in {:?}",
            image.width(),
            image.height(),
            points.len(),
            start.elapsed()
        );

        let start = Instant::now();
        let outline = contour::concave_outside(&points, &config.contour)?;
        log::debug!("contour walk took {:?}", start.elapsed());

        let half = Vec2::new(image.width() as f32, image.height() as f32) * 0.5;
        let scale = match config.target_size {
            Some(target) if image.width() > 0 && image.height() > 0 => Vec2::new(
                target.x / image.width() as f32,
                target.y / image.height() as f32,
            ),
            _ => Vec2::ONE,
        };
        let local = outline.map(|p| (p - half) * scale)?;

        Self::from_polygon(local, triangulator)
    }

    /// The outline as a validated polygon.
    pub fn polygon(&self) -> Result<Polygon, GeometryError> {
        Polygon::new(self.vertices.clone())
    }

    /// Hit test a point given in the shape's local space.
    pub fn contains(&self, point: Vec2) -> bool {
        hit_test::is_point_inside(point, &self.vertices)
    }

    /// Clip the outline to `rect` and triangulate the result.
    ///
    /// Returns [`GeometryError::NoIntersection`] when the outline misses the
    /// rect; callers usually keep the unclipped shape in that case.
    pub fn clipped_to_rect(
        &self,
        rect: &Rect,
        triangulator: &dyn Triangulator,
    ) -> Result<Self, GeometryError> {
        let start = Instant::now();
        let clipped = clipper::clip_to_rect(&self.vertices, rect)?;
        log::debug!(
            "clipped {} vertices to {} in {:?}",
            self.vertices.len(),
            clipped.len(),
            start.elapsed()
        );
        Self::from_polygon(clipped, triangulator)
    }

    pub fn build_mesh(&self, params: &MeshParams) -> MaskMesh {
        mesh::build_mesh(&self.vertices, &self.triangles, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::UvRect;
    use crate::raster::Color;
    use crate::triangulate::{EarClipTriangulator, TriangulatorDispatcher, TriangulatorType};
    use approx::assert_relative_eq;

    /// Opaque 4x4 block centred in an 8x8 transparent image.
    fn block_image() -> RasterImage {
        RasterImage::from_fn(8, 8, |x, y| {
            if (2..6).contains(&x) && (2..6).contains(&y) {
                Color::WHITE
            } else {
                Color::CLEAR
            }
        })
    }

    #[test]
    fn traces_and_centres_a_block() {
        let shape = MaskShape::from_image(
            &block_image(),
            &AuthoringConfig::default(),
            &EarClipTriangulator::new(),
        )
        .unwrap();

        // Boundary pixel centres run 2..=5, shifted by half the image size.
        assert_eq!(shape.vertices.len(), 4);
        assert_eq!(shape.triangles.len(), 2);
        for v in &shape.vertices {
            assert!(v.x == -2.0 || v.x == 1.0);
            assert!(v.y == -2.0 || v.y == 1.0);
        }
        assert_relative_eq!(shape.polygon().unwrap().area(), 9.0);

        assert!(shape.contains(Vec2::new(-0.5, -0.5)));
        assert!(!shape.contains(Vec2::new(1.5, 0.0)));
        assert!(!shape.contains(Vec2::new(-3.0, -3.0)));
    }

    #[test]
    fn traced_outline_scales_to_target() {
        let config = AuthoringConfig {
            target_size: Some(Vec2::new(16.0, 8.0)),
            ..AuthoringConfig::default()
        };
        let shape = MaskShape::from_image(
            &block_image(),
            &config,
            &TriangulatorDispatcher::new(TriangulatorType::Earcut),
        )
        .unwrap();
        assert_relative_eq!(shape.polygon().unwrap().area(), 18.0);
    }

    #[test]
    fn empty_image_has_no_outline() {
        let img = RasterImage::from_fn(4, 4, |_, _| Color::CLEAR);
        let err = MaskShape::from_image(&img, &AuthoringConfig::default(), &EarClipTriangulator)
            .unwrap_err();
        assert_eq!(err, GeometryError::InsufficientPoints { found: 0 });
    }

    #[test]
    fn path_drops_closing_point() {
        let shape = MaskShape::from_path(
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(0.0, 2.0),
                Vec2::new(2.0, 2.0),
                Vec2::new(2.0, 0.0),
                Vec2::new(0.0, 0.0),
            ],
            &EarClipTriangulator,
        )
        .unwrap();
        assert_eq!(shape.vertices.len(), 4);
        assert_eq!(shape.triangles.len(), 2);

        let err = MaskShape::from_path(vec![Vec2::ZERO, Vec2::ONE], &EarClipTriangulator);
        assert_eq!(err.unwrap_err(), GeometryError::InsufficientPoints { found: 2 });
    }

    #[test]
    fn clipping_to_a_rect() {
        let shape = MaskShape::from_path(
            vec![
                Vec2::new(-2.0, -2.0),
                Vec2::new(-2.0, 1.0),
                Vec2::new(1.0, 1.0),
                Vec2::new(1.0, -2.0),
            ],
            &EarClipTriangulator,
        )
        .unwrap();

        let rect = Rect::new(Vec2::new(-1.0, -1.0), Vec2::new(3.0, 3.0));
        let clipped = shape.clipped_to_rect(&rect, &EarClipTriangulator).unwrap();
        assert_relative_eq!(clipped.polygon().unwrap().area(), 4.0, max_relative = 1e-5);
        assert_eq!(clipped.triangles.len(), clipped.vertices.len() - 2);

        let far = Rect::new(Vec2::new(10.0, 10.0), Vec2::new(12.0, 12.0));
        assert_eq!(
            shape.clipped_to_rect(&far, &EarClipTriangulator).unwrap_err(),
            GeometryError::NoIntersection
        );
    }

    #[test]
    fn mesh_uses_shape_vertices() {
        let shape = MaskShape::from_path(
            vec![Vec2::new(-1.0, -1.0), Vec2::new(0.0, 1.0), Vec2::new(1.0, -1.0)],
            &EarClipTriangulator,
        )
        .unwrap();
        let params = MeshParams {
            uv: UvRect::FULL,
            target_size: Vec2::new(2.0, 2.0),
            ..MeshParams::default()
        };
        let mesh = shape.build_mesh(&params);
        assert_eq!(mesh.positions, shape.vertices);
        assert_eq!(mesh.indices.len(), 3);
        assert_relative_eq!(mesh.uvs[1].y, 1.0);
    }
}
