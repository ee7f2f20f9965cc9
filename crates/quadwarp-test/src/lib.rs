//! quadwarp-test - Regression test support for quadwarp
//!
//! Provides [`RegParams`], a failure-accounting helper for the `*_reg.rs`
//! regression tests, and procedural sprite builders used in place of image
//! files (the workspace does no file I/O).
//!
//! # Usage
//!
//! ```ignore
//! use quadwarp_test::{RegParams, color_grid};
//!
//! let mut rp = RegParams::new("warp");
//! let src = color_grid(4, 4).unwrap();
//! rp.compare_values(4.0, src.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod params;

pub use params::RegParams;

use quadwarp_core::{Result, Sprite, color};

/// Build a sprite where every texel encodes its own coordinates:
/// red = column, green = row (wrapping at 256).
pub fn color_grid(width: u32, height: u32) -> Result<Sprite> {
    let mut data = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            data.push(color::compose_rgb(x as u8, y as u8, 0));
        }
    }
    Sprite::from_pixels(width, height, data)
}

/// Build a two-color checkerboard sprite with 1-pixel cells.
pub fn checkerboard(width: u32, height: u32, a: u32, b: u32) -> Result<Sprite> {
    let mut data = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            data.push(if (x + y) % 2 == 0 { a } else { b });
        }
    }
    Sprite::from_pixels(width, height, data)
}

/// Build a single-color sprite.
pub fn solid(width: u32, height: u32, color: u32) -> Result<Sprite> {
    Sprite::from_pixels(width, height, vec![color; (width * height) as usize])
}
