//! Quadwarp - Warped and rotated sprite drawing
//!
//! Renders a rectangular source image into an arbitrary screen-space
//! quadrilateral by inverting the bilinear interpolation per pixel, with
//! rotated-sprite conveniences built on the same path.
//!
//! # Overview
//!
//! - Quad geometry utilities (bounding boxes, centerpoints, rotation)
//! - Inverse bilinear sampling with graceful degeneracy handling
//! - Warped, rotated, scaled, and partial sprite drawing
//!
//! # Example
//!
//! ```
//! use quadwarp::{PointF, Sprite};
//! use quadwarp::render::draw_warped;
//!
//! let src = Sprite::new(2, 2).unwrap();
//! let mut dst = Sprite::new(8, 8).unwrap();
//!
//! // corner order: upper-left, lower-left, lower-right, upper-right
//! let quad = [
//!     PointF::new(1.0, 1.0),
//!     PointF::new(0.0, 7.0),
//!     PointF::new(7.0, 6.0),
//!     PointF::new(6.0, 0.0),
//! ];
//! draw_warped(&mut dst, &src, &quad).unwrap();
//! ```

// Re-export core types (primary data structures used everywhere)
pub use quadwarp_core::*;

// Re-export the renderer as a module
pub use quadwarp_render as render;
