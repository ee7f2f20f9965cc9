//! Sprite - pixel container and render collaborator traits
//!
//! The renderer draws through two small traits: a [`Surface`] it writes
//! pixels to and a [`Texture`] it samples colors from. [`Sprite`] is the
//! concrete in-memory implementation of both, so the library is usable
//! standalone; hosts with their own framebuffer implement the traits
//! instead.
//!
//! # Pixel layout
//!
//! Pixels are packed `0xRRGGBBAA` in a flat row-major buffer:
//! `data[y * width + x]`.

use crate::color;
use crate::error::{Error, Result};

/// Destination pixel sink for warp rendering.
///
/// A warped quad's bounding box may extend past the destination's edges,
/// so implementations must tolerate out-of-bounds coordinates by dropping
/// the write.
pub trait Surface {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Write one pixel. Out-of-bounds coordinates are ignored.
    fn put_pixel(&mut self, x: i32, y: i32, color: u32);
}

/// Read-only source of point samples by normalized texture coordinate.
///
/// (0, 0) addresses the upper-left texel. Behavior outside [0, 1] is
/// implementation-defined; the warp solver can pass mirrored v values up
/// to 1.0 inclusive, and [`Sprite`] clamps those onto the last row.
pub trait Texture {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Sample the color at normalized (u, v).
    fn sample(&self, u: f32, v: f32) -> u32;
}

/// An owned 32-bit RGBA pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl Sprite {
    /// Create a fully transparent sprite.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] when either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            data: vec![color::BLANK; (width * height) as usize],
        })
    }

    /// Create a sprite over an existing row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for zero dimensions, or
    /// [`Error::BufferSizeMismatch`] when the buffer length is not
    /// `width * height`.
    pub fn from_pixels(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = (width * height) as usize;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get a pixel, or `None` outside the sprite.
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(self.data[(y as u32 * self.width + x as u32) as usize])
    }

    /// Set a pixel; writes outside the sprite are dropped.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.data[(y as u32 * self.width + x as u32) as usize] = color;
    }

    /// Raw pixel data, row-major.
    pub fn pixels(&self) -> &[u32] {
        &self.data
    }
}

impl Surface for Sprite {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn put_pixel(&mut self, x: i32, y: i32, color: u32) {
        self.set_pixel(x, y, color);
    }
}

impl Texture for Sprite {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    /// Nearest-texel sampling. The high edge clamps so u = 1.0 still lands
    /// on the last column; coordinates that truncate below zero fall
    /// outside the sprite and sample transparent black.
    fn sample(&self, u: f32, v: f32) -> u32 {
        let x = ((u * self.width as f32) as i32).min(self.width as i32 - 1);
        let y = ((v * self.height as f32) as i32).min(self.height as i32 - 1);
        self.get_pixel(x, y).unwrap_or(color::BLANK)
    }
}

/// A rectangular region view over another texture.
///
/// Normalized coordinates on the view map linearly onto the region's pixel
/// extent within the source: u in [0, 1) covers `[x, x + w)`, v likewise.
/// This is the sampling side of partial-sprite rendering.
///
/// Samples exactly at or beyond 1.0 can read source texels adjacent to the
/// region (subject to the source's own edge behavior); coordinates strictly
/// inside [0, 1) always stay within it.
#[derive(Debug, Clone, Copy)]
pub struct SubTexture<'a, T: Texture> {
    source: &'a T,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
}

impl<'a, T: Texture> SubTexture<'a, T> {
    /// Create a view of the `w` x `h` region of `source` at `(x, y)`, all
    /// in source pixel coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegionOutOfBounds`] when the region has a
    /// non-positive size or extends outside the source.
    pub fn new(source: &'a T, x: f32, y: f32, w: f32, h: f32) -> Result<Self> {
        let src_w = source.width();
        let src_h = source.height();
        if w <= 0.0
            || h <= 0.0
            || x < 0.0
            || y < 0.0
            || x + w > src_w as f32
            || y + h > src_h as f32
        {
            return Err(Error::RegionOutOfBounds {
                x,
                y,
                w,
                h,
                src_w,
                src_h,
            });
        }
        Ok(Self { source, x, y, w, h })
    }
}

impl<T: Texture> Texture for SubTexture<'_, T> {
    fn width(&self) -> u32 {
        self.w as u32
    }

    fn height(&self) -> u32 {
        self.h as u32
    }

    fn sample(&self, u: f32, v: f32) -> u32 {
        let src_w = self.source.width() as f32;
        let src_h = self.source.height() as f32;
        self.source
            .sample((self.x + u * self.w) / src_w, (self.y + v * self.h) / src_h)
    }
}
