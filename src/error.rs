//! Error type shared by the geometry stages.

/// Recoverable failures of the geometry pipeline.
///
/// None of these are fatal; callers pick a fallback (for example keeping the
/// unclipped polygon on [`GeometryError::NoIntersection`]).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// Fewer points than the operation needs to form a polygon.
    #[error("not enough points to form a polygon (found {found})")]
    InsufficientPoints { found: usize },

    /// A clipping input is not a polygon.
    #[error("invalid polygon with {vertices} vertices")]
    InvalidPolygon { vertices: usize },

    /// The two clipped polygons do not overlap.
    #[error("polygons do not intersect")]
    NoIntersection,

    /// The contour walk ran out of reachable points before consuming the input.
    #[error("contour walk stalled with {remaining} unreachable points")]
    DisconnectedInput { remaining: usize },

    /// The triangulator could not decompose the polygon.
    #[error("triangulation failed: {0}")]
    TriangulationFailed(String),
}
