//! Read-only RGBA raster used as the source of a mask silhouette.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// An RGBA color with components in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const CLEAR: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgba8([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }
}

/// A width × height grid of RGBA samples.
///
/// Pixel `(0, 0)` is the bottom-left sample and `y` grows upwards, the
/// texture-space convention the mask polygons are authored in.
#[derive(Clone, Debug, PartialEq)]
pub struct RasterImage {
    pixels: Vec<Color>,
    width: u32,
    height: u32,
}

impl RasterImage {
    /// Build an image from bottom-up row-major pixels.
    ///
    /// Returns `None` if `pixels.len()` is not `width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Color>) -> Option<Self> {
        if pixels.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            pixels,
            width,
            height,
        })
    }

    /// Build an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Color) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Load an image file (PNG, JPG, etc.).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, image::ImageError> {
        let img = image::open(path)?.to_rgba8();
        Ok(Self::from_rgba8(&img))
    }

    /// Convert a decoded RGBA buffer.
    ///
    /// Decoded images store the top row first; rows are flipped so that
    /// `y = 0` is the bottom row.
    pub fn from_rgba8(img: &image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self::from_fn(width, height, |x, y| {
            Color::from_rgba8(img.get_pixel(x, height - 1 - y).0)
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.pixels[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    /// Alpha at (x, y); samples outside the image are fully transparent.
    #[inline]
    pub fn alpha(&self, x: i32, y: i32) -> f32 {
        self.get_pixel(x, y).map_or(0.0, |c| c.a)
    }
}
