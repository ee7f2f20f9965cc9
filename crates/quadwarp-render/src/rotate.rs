//! Rotated and partial sprite drawing
//!
//! Rotation reuses the warp path: build or take a quad, rotate its corner
//! points, and let [`draw_warped`] rasterize the result.

use quadwarp_core::{PointF, Quad, SubTexture, Surface, Texture, quad_from_rect, rotate_points};

use crate::error::RenderResult;
use crate::warp::draw_warped;

/// Options for the rotated-sprite entry points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotateSpriteOptions {
    /// Rotation pivot, in the same absolute coordinate space as the
    /// sprite position (not relative to the sprite).
    pub pivot: PointF,
    /// Per-axis scale applied to the sprite size before rotation.
    pub scale: PointF,
}

impl Default for RotateSpriteOptions {
    fn default() -> Self {
        Self {
            pivot: PointF::new(0.0, 0.0),
            scale: PointF::new(1.0, 1.0),
        }
    }
}

impl RotateSpriteOptions {
    /// Set the rotation pivot.
    pub fn pivot(mut self, x: f32, y: f32) -> Self {
        self.pivot = PointF::new(x, y);
        self
    }

    /// Set the sprite scale.
    pub fn scale(mut self, sx: f32, sy: f32) -> Self {
        self.scale = PointF::new(sx, sy);
        self
    }
}

/// Draw `source` at `pos` rotated by `angle` radians about the origin,
/// unscaled.
///
/// # Errors
///
/// Returns an error when position or angle produce non-finite corners.
pub fn draw_rotated<S, T>(
    surface: &mut S,
    pos: PointF,
    source: &T,
    angle: f32,
) -> RenderResult<()>
where
    S: Surface,
    T: Texture,
{
    draw_rotated_with_options(surface, pos, source, angle, &RotateSpriteOptions::default())
}

/// Draw `source` at `pos`, scaled by `options.scale` and rotated by
/// `angle` radians about `options.pivot`.
pub fn draw_rotated_with_options<S, T>(
    surface: &mut S,
    pos: PointF,
    source: &T,
    angle: f32,
    options: &RotateSpriteOptions,
) -> RenderResult<()>
where
    S: Surface,
    T: Texture,
{
    let w = source.width() as f32 * options.scale.x;
    let h = source.height() as f32 * options.scale.y;
    let quad = quad_from_rect(pos, w, h);
    let rotated = rotate_points(&quad, angle as f64, options.pivot);
    draw_warped(surface, source, &rotated)
}

/// Rotate `quad` about `pivot` by `angle` radians, then draw it warped.
///
/// Exactly the composition of [`rotate_points`] and [`draw_warped`]; it
/// exists as ergonomic sugar and does not diverge numerically from calling
/// the two directly.
pub fn draw_warped_rotated<S, T>(
    surface: &mut S,
    source: &T,
    quad: &Quad,
    angle: f32,
    pivot: PointF,
) -> RenderResult<()>
where
    S: Surface,
    T: Texture,
{
    let rotated = rotate_points(quad, angle as f64, pivot);
    draw_warped(surface, source, &rotated)
}

/// Draw only a sub-rectangle of `source`, rotated like
/// [`draw_rotated_with_options`].
///
/// `region_pos` and `region_size` select the sub-rectangle in source pixel
/// coordinates. The destination rectangle is sized from the region (times
/// `options.scale`), and normalized texture coordinates map onto the
/// region rather than the whole source: u in [0, 1) covers exactly the
/// region's pixel extent.
///
/// # Errors
///
/// Returns an error when the region extends outside the source.
pub fn draw_partial_rotated<S, T>(
    surface: &mut S,
    pos: PointF,
    source: &T,
    angle: f32,
    region_pos: PointF,
    region_size: PointF,
    options: &RotateSpriteOptions,
) -> RenderResult<()>
where
    S: Surface,
    T: Texture,
{
    let region = SubTexture::new(
        source,
        region_pos.x,
        region_pos.y,
        region_size.x,
        region_size.y,
    )?;
    let w = region_size.x * options.scale.x;
    let h = region_size.y * options.scale.y;
    let quad = quad_from_rect(pos, w, h);
    let rotated = rotate_points(&quad, angle as f64, options.pivot);
    draw_warped(surface, &region, &rotated)
}
