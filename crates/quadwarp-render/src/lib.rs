//! quadwarp-render - Warped and rotated sprite drawing
//!
//! This crate renders a rectangular source texture into an arbitrary
//! screen-space quadrilateral:
//!
//! - Inverse bilinear sampling (a per-pixel quadratic solve)
//! - Warped-quad rasterization over the quad's bounding box
//! - Rotated, scaled, and partial sprite adapters built on the warp path
//!
//! The interpolation is bilinear, not projective: it is exact along the
//! quad's edges but not perspective-correct in the interior. Degenerate
//! quads render as an empty region rather than an error.

pub mod error;
pub mod rotate;
pub mod sample;
pub mod warp;

pub use error::{RenderError, RenderResult};
pub use rotate::{
    RotateSpriteOptions, draw_partial_rotated, draw_rotated, draw_rotated_with_options,
    draw_warped_rotated,
};
pub use sample::{NEAR_ZERO, SampledPixel, invert_bilinear, warped_sample};
pub use warp::draw_warped;
