//! Error types for quadwarp-render

use thiserror::Error;

/// Errors that can occur while drawing warped sprites
///
/// Degenerate quad geometry is not an error: it renders nothing and
/// returns `Ok`. These variants cover caller misuse only.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] quadwarp_core::Error),

    /// Invalid drawing parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for render operations
pub type RenderResult<T> = Result<T, RenderError>;
