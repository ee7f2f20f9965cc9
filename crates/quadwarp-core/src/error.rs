//! Error types for quadwarp-core
//!
//! Provides a unified error type for the core data structures. Geometric
//! degeneracy is never an error anywhere in the workspace; these variants
//! cover construction-time misuse only.

use thiserror::Error;

/// Quadwarp core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid sprite dimensions
    #[error("invalid sprite dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel buffer length does not match the sprite dimensions
    #[error("pixel buffer length mismatch: expected {expected}, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// A quad needs exactly four corner points
    #[error("wrong point count: expected {expected}, got {actual}")]
    WrongPointCount { expected: usize, actual: usize },

    /// Texture region lies partly or wholly outside its source
    #[error("region at ({x}, {y}) sized {w}x{h} outside source {src_w}x{src_h}")]
    RegionOutOfBounds {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        src_w: u32,
        src_h: u32,
    },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
