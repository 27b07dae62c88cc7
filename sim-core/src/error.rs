//! Error types for the simulation core.

use std::fmt;

/// Errors raised when the drawing surface cannot host the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceError {
    /// The surface has a zero, negative, or non-finite dimension.
    InvalidSize { width: f32, height: f32 },
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::InvalidSize { width, height } => write!(
                f,
                "Drawing surface of size {}x{} cannot host the simulation",
                width, height
            ),
        }
    }
}

impl std::error::Error for SurfaceError {}
