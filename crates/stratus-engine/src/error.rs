//! Engine error taxonomy.

use stratus_spec::{EngineError, SpecError};
use thiserror::Error;

/// Errors from poster rendering.
///
/// Every failure here is deterministic given identical inputs; there
/// are no transient failure modes inside the engine. Font
/// unavailability and unclassified weather are deliberately NOT errors
/// (they resolve via fallback and the neutral style respectively).
#[derive(Debug, Error)]
pub enum RenderError {
    /// Invalid request data: bad canvas, zero-sized source image,
    /// out-of-range alpha or stddev.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Request-level validation failure from the spec crate.
    #[error(transparent)]
    Spec(#[from] SpecError),
}

impl RenderError {
    /// Build an [`RenderError::InvalidInput`] value.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl EngineError for RenderError {
    fn code(&self) -> &'static str {
        match self {
            RenderError::InvalidInput(_) => "POSTER_001",
            RenderError::Spec(_) => "POSTER_002",
        }
    }

    fn category(&self) -> &'static str {
        "poster"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(RenderError::invalid_input("x").code(), "POSTER_001");
        let wrapped = RenderError::from(SpecError::ZeroTextSize);
        assert_eq!(wrapped.code(), "POSTER_002");
        assert_eq!(wrapped.category(), "poster");
    }
}
