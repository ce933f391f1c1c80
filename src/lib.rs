//! Polygon masks for sprites.
//!
//! A mask is a simple polygon, usually traced from a sprite's alpha
//! silhouette, that restricts where the sprite is drawn and where it accepts
//! pointer hits. The crate covers the whole geometry pipeline:
//!
//! - [`edge`]: Sobel boundary detection on the alpha channel
//! - [`contour`]: ordering boundary pixels into a polygon
//! - [`hit_test`]: point-in-polygon
//! - [`clipper`]: approximate polygon intersection
//! - [`triangulate`]: pluggable polygon triangulation
//! - [`mesh`]: vertex streams with sprite-derived texture coordinates
//!
//! # Quick Start
//!
//! ```ignore
//! use meshmask::prelude::*;
//!
//! let image = RasterImage::from_file("sprite.png")?;
//! let shape = MaskShape::from_image(&image, &AuthoringConfig::default(), &EarClipTriangulator)?;
//! assert!(shape.contains(Vec2::ZERO));
//! let mesh = shape.build_mesh(&MeshParams::default());
//! ```

pub mod clipper;
pub mod contour;
pub mod edge;
pub mod error;
pub mod hit_test;
pub mod logging;
pub mod math;
pub mod mesh;
pub mod polygon;
pub mod raster;
pub mod shape;
pub mod triangulate;

// Re-export commonly needed types at crate root for convenience
pub use error::GeometryError;
pub use mesh::{build_mesh, MaskMesh, MeshParams};
pub use polygon::Polygon;
pub use raster::{Color, RasterImage};
pub use shape::{AuthoringConfig, MaskShape};
pub use triangulate::{Triangle, Triangulator, TriangulatorDispatcher, TriangulatorType};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use meshmask::prelude::*;
/// ```
pub mod prelude {
    // Authoring
    pub use crate::contour::{concave_outside, convex_outside, ContourConfig};
    pub use crate::edge::{EdgeMap, SobelEdgeDetector};
    pub use crate::raster::{Color, RasterImage};
    pub use crate::shape::{AuthoringConfig, MaskShape};

    // Geometry
    pub use crate::clipper::{clip_to_rect, intersect};
    pub use crate::error::GeometryError;
    pub use crate::hit_test::is_point_inside;
    pub use crate::polygon::Polygon;

    // Math
    pub use crate::math::{Rect, UvRect, Vec2};

    // Triangulation
    pub use crate::triangulate::{
        EarClipTriangulator, EarcutTriangulator, Triangle, Triangulator, TriangulatorDispatcher,
        TriangulatorType,
    };

    // Rendering
    pub use crate::mesh::{build_mesh, MaskMesh, MeshParams};
}
