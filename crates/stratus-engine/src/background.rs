//! Background layer construction.

use stratus_spec::{CanvasSize, StyleDescriptor};

use crate::color::Color;
use crate::error::RenderError;
use crate::raster::PosterBuffer;

/// An externally decoded photograph, treated as an opaque pixel buffer.
///
/// Decoding (and fetching) is the photo collaborator's job; the engine
/// only resizes and composites.
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes, RGB8 row-major, `width * height * 3` long.
    pub rgb8: Vec<u8>,
}

impl SourceImage {
    /// Build a source image, validating dimensions against the buffer.
    pub fn new(width: u32, height: u32, rgb8: Vec<u8>) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::invalid_input(
                "source image dimensions must be non-zero",
            ));
        }
        let expected = (width as usize) * (height as usize) * 3;
        if rgb8.len() != expected {
            return Err(RenderError::invalid_input(format!(
                "source image buffer length {} does not match {}x{}x3",
                rgb8.len(),
                width,
                height
            )));
        }
        Ok(Self { width, height, rgb8 })
    }

    #[inline]
    fn get(&self, x: u32, y: u32) -> Color {
        let idx = ((y as usize) * (self.width as usize) + x as usize) * 3;
        Color::from_rgb8([self.rgb8[idx], self.rgb8[idx + 1], self.rgb8[idx + 2]])
    }

    /// Sample with bilinear interpolation using normalized coordinates.
    fn sample_bilinear(&self, u: f64, v: f64) -> Color {
        let x = u * (self.width - 1) as f64;
        let y = v * (self.height - 1) as f64;

        let x0 = x.floor() as u32;
        let y0 = y.floor() as u32;
        let x1 = (x0 + 1).min(self.width - 1);
        let y1 = (y0 + 1).min(self.height - 1);

        let fx = x - x.floor();
        let fy = y - y.floor();

        let c0 = self.get(x0, y0).lerp(&self.get(x1, y0), fx);
        let c1 = self.get(x0, y1).lerp(&self.get(x1, y1), fx);
        c0.lerp(&c1, fy)
    }
}

/// Where the poster background comes from.
#[derive(Debug, Clone)]
pub enum BackgroundSource {
    /// Vertical gradient between the style's accent pair.
    Gradient,
    /// Flat fill with one color.
    Solid([u8; 3]),
    /// Externally supplied photograph, resized to the canvas.
    Photo(SourceImage),
}

impl Default for BackgroundSource {
    fn default() -> Self {
        BackgroundSource::Gradient
    }
}

/// Build the base canvas for a render.
///
/// The gradient path interpolates one color per row between
/// `style.accent_a` (row 0) and `style.accent_b` (last row) — O(height)
/// color computations, not O(width·height).
///
/// The photo path resizes the source directly to the canvas size. This
/// does NOT preserve the source aspect ratio; the distortion is a
/// deliberate, documented behavior (aspect handling is a caller
/// concern), not a defect.
pub fn build(
    canvas: CanvasSize,
    style: &StyleDescriptor,
    source: &BackgroundSource,
) -> Result<PosterBuffer, RenderError> {
    if canvas.width == 0 || canvas.height == 0 {
        return Err(RenderError::invalid_input(
            "canvas dimensions must be non-zero",
        ));
    }

    match source {
        BackgroundSource::Gradient => {
            let a = Color::from_rgb8(style.accent_a);
            let b = Color::from_rgb8(style.accent_b);
            let mut buf = PosterBuffer::new(canvas.width, canvas.height, a);
            let denom = (canvas.height - 1).max(1) as f64;
            for y in 0..canvas.height {
                let t = y as f64 / denom;
                buf.fill_row(y, a.lerp(&b, t));
            }
            Ok(buf)
        }
        BackgroundSource::Solid(rgb) => Ok(PosterBuffer::new(
            canvas.width,
            canvas.height,
            Color::from_rgb8(*rgb),
        )),
        BackgroundSource::Photo(image) => {
            if image.width == 0 || image.height == 0 {
                return Err(RenderError::invalid_input(
                    "source image dimensions must be non-zero",
                ));
            }
            let mut buf = PosterBuffer::transparent(canvas.width, canvas.height);
            let dx = (canvas.width - 1).max(1) as f64;
            let dy = (canvas.height - 1).max(1) as f64;
            for y in 0..canvas.height {
                let v = y as f64 / dy;
                for x in 0..canvas.width {
                    let u = x as f64 / dx;
                    buf.set(x, y, image.sample_bilinear(u, v));
                }
            }
            Ok(buf)
        }
    }
}
