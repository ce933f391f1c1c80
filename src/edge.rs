//! Sobel silhouette extraction.
//!
//! The detector binarizes the alpha channel (opaque = 1, transparent = 0)
//! before convolving, so the gradient only responds to the silhouette and
//! never to color detail inside it. A pixel is a boundary pixel when it is
//! opaque itself and either its binarized gradient is strong enough or it
//! sits on the outer edge of the image. The latter keeps the boundary of
//! silhouettes that touch the image border.
//!
//! ```text
//!        | -1  0  1 |          | -1 -2 -1 |
//!   Gx = | -2  0  2 |     Gy = |  0  0  0 |
//!        | -1  0  1 |          |  1  2  1 |
//! ```
//!
//! Kernel rows are `y` offsets -1..=1, columns are `x` offsets -1..=1.

use crate::math::Vec2;
use crate::raster::RasterImage;

const SOBEL_GX: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
const SOBEL_GY: [[i32; 3]; 3] = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Per-pixel "is boundary" flags with the dimensions of the source image.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeMap {
    flags: Vec<bool>,
    width: u32,
    height: u32,
}

impl EdgeMap {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_boundary(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.flags[(y * self.width + x) as usize]
    }

    /// Number of boundary pixels.
    pub fn count(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }

    /// Coordinates of every boundary pixel, column by column.
    pub fn boundary_points(&self) -> Vec<Vec2> {
        let mut points = Vec::with_capacity(self.count());
        for x in 0..self.width {
            for y in 0..self.height {
                if self.is_boundary(x, y) {
                    points.push(Vec2::new(x as f32, y as f32));
                }
            }
        }
        points
    }
}

/// Sobel-based boundary detector over the alpha channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SobelEdgeDetector {
    /// Minimum alpha for a pixel to count as opaque.
    pub alpha_threshold: f32,
    /// A pixel is a boundary pixel when `gx² + gy²` exceeds this.
    pub gradient_threshold: f32,
}

impl Default for SobelEdgeDetector {
    fn default() -> Self {
        Self {
            alpha_threshold: 0.9,
            gradient_threshold: 0.01,
        }
    }
}

impl SobelEdgeDetector {
    pub fn new(alpha_threshold: f32, gradient_threshold: f32) -> Self {
        Self {
            alpha_threshold,
            gradient_threshold,
        }
    }

    #[inline]
    fn is_opaque(&self, image: &RasterImage, x: i32, y: i32) -> bool {
        image.alpha(x, y) >= self.alpha_threshold
    }

    /// Binarized Sobel gradient at (x, y).
    fn gradient(&self, image: &RasterImage, x: i32, y: i32) -> (i32, i32) {
        let mut gx = 0;
        let mut gy = 0;
        for (row, dy) in (-1..=1).enumerate() {
            for (col, dx) in (-1..=1).enumerate() {
                if self.is_opaque(image, x + dx, y + dy) {
                    gx += SOBEL_GX[row][col];
                    gy += SOBEL_GY[row][col];
                }
            }
        }
        (gx, gy)
    }

    pub fn detect(&self, image: &RasterImage) -> EdgeMap {
        let width = image.width();
        let height = image.height();
        let mut flags = vec![false; width as usize * height as usize];

        for y in 0..height {
            for x in 0..width {
                let (xi, yi) = (x as i32, y as i32);
                if !self.is_opaque(image, xi, yi) {
                    continue;
                }

                let on_border = x == 0 || y == 0 || x == width - 1 || y == height - 1;
                let boundary = on_border || {
                    let (gx, gy) = self.gradient(image, xi, yi);
                    (gx * gx + gy * gy) as f32 > self.gradient_threshold
                };
                flags[(y * width + x) as usize] = boundary;
            }
        }

        EdgeMap {
            flags,
            width,
            height,
        }
    }
}
