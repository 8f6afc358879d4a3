//! Stratus Request & Style Library
//!
//! This crate is the declarative boundary of the Stratus poster
//! generator: weather classification, style resolution, request and
//! report types, and their validation. It contains no raster code and
//! no randomness — everything here is pure data and pure functions, so
//! the engine crate can stay deterministic for a given input.
//!
//! # Overview
//!
//! A render starts from a weather signal (a WMO-style code or a
//! free-text condition) which resolves to a [`StyleDescriptor`]:
//!
//! ```
//! use stratus_spec::{StyleDescriptor, WeatherClass, WeatherSignal};
//!
//! // From a classification alone:
//! let style = StyleDescriptor::resolve(WeatherClass::Rain);
//! assert_eq!(style.shape_density, 7);
//!
//! // Or from a full observation (temperature picks the palette
//! // family, wind scales the noise band):
//! let style = StyleDescriptor::resolve_signal(&WeatherSignal {
//!     code: 63,
//!     temperature_c: 5.0,
//!     wind_speed_mps: 2.0,
//! });
//! assert_eq!(style.noise_strength, 8);
//! ```
//!
//! Classification is total: unrecognized input maps to
//! [`WeatherClass::Unknown`] and a neutral style, never an error.
//!
//! # Modules
//!
//! - [`error`]: error types and the [`EngineError`] code trait
//! - [`request`]: canvas and text-block types with validation
//! - [`report`]: bounding boxes and the per-render report
//! - [`style`]: weather classification and style resolution

pub mod error;
pub mod report;
pub mod request;
pub mod style;

pub use error::{EngineError, SpecError};
pub use report::{BoundingBox, RenderReport};
pub use request::{
    Anchor, CanvasSize, TextBlock, MAX_CANVAS_DIM, MIN_CANVAS_DIM, TEXT_MARGIN_PX,
};
pub use style::{PaletteId, StyleDescriptor, WeatherClass, WeatherSignal};
