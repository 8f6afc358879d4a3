//! Pixel-level grain and uniform overlay blending.
//!
//! Both operations are pure `Canvas -> Canvas` transforms with one
//! extra same-sized buffer of memory overhead. They compose in either
//! order with defined results, but the orders are NOT equivalent:
//! grain-then-overlay attenuates the noise by `1 − alpha`, while
//! overlay-then-grain applies full-strength noise to the blended image.

use crate::color::Color;
use crate::error::RenderError;
use crate::raster::PosterBuffer;
use crate::rng::PosterRng;

/// Add zero-mean Gaussian noise to every channel of every pixel.
///
/// `stddev` is expressed in 8-bit channel units (a stddev of 6 moves a
/// channel by ±6/255 on average). Channels saturate at the [0, 255]
/// bounds — they never wrap.
pub fn apply_grain(
    src: &PosterBuffer,
    stddev: f64,
    rng: &mut PosterRng,
) -> Result<PosterBuffer, RenderError> {
    if !stddev.is_finite() || stddev < 0.0 {
        return Err(RenderError::invalid_input(
            "grain stddev must be finite and >= 0",
        ));
    }

    let mut out = src.clone();
    for px in out.data.iter_mut() {
        *px = Color {
            r: (px.r + rng.gen_gaussian(stddev) / 255.0).clamp(0.0, 1.0),
            g: (px.g + rng.gen_gaussian(stddev) / 255.0).clamp(0.0, 1.0),
            b: (px.b + rng.gen_gaussian(stddev) / 255.0).clamp(0.0, 1.0),
            a: px.a,
        };
    }
    Ok(out)
}

/// Alpha-composite a uniform color atop the canvas.
///
/// Standard "over" blending per channel: `out = src·α + dst·(1−α)`,
/// with `alpha` validated to [0, 1]. The destination alpha channel is
/// preserved.
pub fn blend_overlay(
    src: &PosterBuffer,
    overlay: Color,
    alpha: f64,
) -> Result<PosterBuffer, RenderError> {
    if !(0.0..=1.0).contains(&alpha) {
        return Err(RenderError::invalid_input(
            "overlay alpha must be in [0, 1]",
        ));
    }

    let mut out = src.clone();
    for px in out.data.iter_mut() {
        *px = Color {
            r: overlay.r * alpha + px.r * (1.0 - alpha),
            g: overlay.g * alpha + px.g * (1.0 - alpha),
            b: overlay.b * alpha + px.b * (1.0 - alpha),
            a: px.a,
        };
    }
    Ok(out)
}
