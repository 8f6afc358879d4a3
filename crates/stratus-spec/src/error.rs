//! Error types shared across the Stratus crates.

use thiserror::Error;

use crate::request::{MAX_CANVAS_DIM, MIN_CANVAS_DIM};

/// Trait implemented by every Stratus error enum.
///
/// Callers dispatch on the stable `code()` string instead of matching on
/// display text, which is free to change between releases.
pub trait EngineError {
    /// Stable machine-readable error code (e.g. "SPEC_001").
    fn code(&self) -> &'static str;

    /// Error category ("spec" or "poster").
    fn category(&self) -> &'static str;
}

/// Errors from request validation.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Canvas dimension outside the supported range.
    #[error(
        "canvas dimension {0}x{1} outside supported range \
         [{MIN_CANVAS_DIM}, {MAX_CANVAS_DIM}] per axis"
    )]
    CanvasOutOfRange(u32, u32),

    /// Text block font size must be positive.
    #[error("text size_pt must be > 0")]
    ZeroTextSize,
}

impl EngineError for SpecError {
    fn code(&self) -> &'static str {
        match self {
            SpecError::CanvasOutOfRange(_, _) => "SPEC_001",
            SpecError::ZeroTextSize => "SPEC_002",
        }
    }

    fn category(&self) -> &'static str {
        "spec"
    }
}
