//! Stratus Poster Composition Engine
//!
//! This crate turns a weather-derived [`StyleDescriptor`] and a canvas
//! size into a fully composited poster raster. Output is byte-identical
//! given the same request and seed.
//!
//! # Pipeline
//!
//! 1. **Background**: vertical accent gradient, flat fill, or a
//!    caller-supplied photograph resized to the canvas
//! 2. **Decorative layer**: seeded scatter of palette shapes plus the
//!    sinusoidal noise band, alpha-composited over the background
//! 3. **Grain + overlay**: per-pixel Gaussian grain and an optional
//!    uniform scrim
//! 4. **Typography**: title and info lines via the font resolution
//!    chain (scalable font or the built-in 5x7 fallback)
//! 5. **Flatten**: alpha discarded, RGB8 bytes handed to the caller
//!
//! # Example
//!
//! ```
//! use stratus_engine::{render_poster, FontResolver, RenderRequest};
//! use stratus_spec::{CanvasSize, StyleDescriptor, TextBlock, WeatherClass};
//!
//! let request = RenderRequest::new(
//!     CanvasSize::new(800, 1000)?,
//!     StyleDescriptor::resolve(WeatherClass::Rain),
//! )
//! .with_title(TextBlock::new("Weather Poster", 55))
//! .with_seed(42);
//!
//! let (poster, report) = render_poster(&request, &FontResolver::fallback())?;
//! assert_eq!(poster.data.len(), 800 * 1000 * 3);
//! assert_eq!(report.seed, 42);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Determinism
//!
//! - All randomness flows through [`PosterRng`] (PCG32); there is no
//!   ambient random state, so concurrent renders do not interfere
//! - Pipeline stages consume independent BLAKE3-derived sub-seeds
//! - Omitting the seed draws one from process entropy and reports it
//!   back, so any poster stays reproducible after the fact
//!
//! # Boundaries
//!
//! The engine performs no network or filesystem I/O. Weather data,
//! photographs, and font bytes arrive already resolved; the finished
//! raster leaves as an opaque RGB8 buffer for the caller to encode.

pub mod background;
pub mod color;
pub mod decor;
pub mod error;
pub mod grain;
pub mod raster;
pub mod render;
pub mod rng;
pub mod typography;

// Re-export main types for convenience
pub use background::{BackgroundSource, SourceImage};
pub use color::Color;
pub use error::RenderError;
pub use grain::{apply_grain, blend_overlay};
pub use raster::PosterBuffer;
pub use render::{compose, render_poster, Overlay, PosterRgb8, RenderOptions, RenderRequest};
pub use rng::PosterRng;
pub use typography::{FontResolver, ResolvedFont};

pub use stratus_spec::StyleDescriptor;
