use std::collections::TryReserveError;
use thiserror::Error;

/// Errors raised while building a scene, a camera or a render.
///
/// Geometric degeneracies are rejected here at construction time so the
/// numeric core never has to produce NaN or infinite colors.
#[derive(Debug, Error)]
pub enum TracerError {
    #[error("sphere radius must be finite and positive, got {0}")]
    InvalidRadius(f64),

    #[error("refraction index must be finite and positive, got {0}")]
    InvalidRefractionIndex(f64),

    #[error("degenerate camera: {0}")]
    DegenerateCamera(&'static str),

    #[error("invalid render settings: {0}")]
    InvalidSettings(&'static str),

    #[error("failed to grow the scene: {0}")]
    Allocation(#[from] TryReserveError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TracerError>;
