//! Pixel buffers and drawing primitives.

use crate::color::Color;

/// A 2D RGBA pixel buffer, row-major.
///
/// The same type serves as the poster canvas (opaque fill) and as a
/// decorative/typographic layer (transparent fill). A buffer is owned
/// exclusively by one render call and discarded afterwards.
#[derive(Debug, Clone)]
pub struct PosterBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (RGBA, row-major).
    pub data: Vec<Color>,
}

impl PosterBuffer {
    /// Create a new buffer filled with a color.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Create a fully transparent layer.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self::new(width, height, Color::transparent())
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Color {
        let idx = (y as usize) * (self.width as usize) + x as usize;
        self.data[idx]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let idx = (y as usize) * (self.width as usize) + x as usize;
        self.data[idx] = color;
    }

    /// Composite a color over the pixel at the given coordinates,
    /// ignoring coordinates outside the buffer.
    #[inline]
    pub fn blend_pixel(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        let blended = color.over(&self.get(x, y));
        self.set(x, y, blended);
    }

    /// Fill an entire row with one color.
    pub fn fill_row(&mut self, y: u32, color: Color) {
        let w = self.width as usize;
        let start = (y as usize) * w;
        self.data[start..start + w].fill(color);
    }

    /// Composite `layer` over this buffer, pixel by pixel.
    ///
    /// The layer must have the same dimensions; an identity (fully
    /// transparent) layer leaves the buffer unchanged.
    pub fn composite_over(&mut self, layer: &PosterBuffer) {
        debug_assert_eq!(self.width, layer.width);
        debug_assert_eq!(self.height, layer.height);
        for (dst, src) in self.data.iter_mut().zip(layer.data.iter()) {
            if src.a > 0.0 {
                *dst = src.over(dst);
            }
        }
    }

    /// Fill an axis-aligned rectangle, blending `color` over content.
    pub fn fill_rect(&mut self, x: i64, y: i64, w: u32, h: u32, color: Color) {
        for py in y..y + i64::from(h) {
            for px in x..x + i64::from(w) {
                self.blend_pixel(px, py, color);
            }
        }
    }

    /// Fill a circle centered at (cx, cy), blending `color` over content.
    pub fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Color) {
        let r2 = radius * radius;
        let y0 = (cy - radius).floor() as i64;
        let y1 = (cy + radius).ceil() as i64;
        let x0 = (cx - radius).floor() as i64;
        let x1 = (cx + radius).ceil() as i64;
        for py in y0..=y1 {
            for px in x0..=x1 {
                let dx = px as f64 + 0.5 - cx;
                let dy = py as f64 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.blend_pixel(px, py, color);
                }
            }
        }
    }

    /// Stroke a polyline with the given width.
    ///
    /// Each segment covers the pixels whose center lies within half the
    /// stroke width of the segment.
    pub fn stroke_polyline(&mut self, points: &[(f64, f64)], width: f64, color: Color) {
        let half = width / 2.0;
        for segment in points.windows(2) {
            let (x1, y1) = segment[0];
            let (x2, y2) = segment[1];

            let min_x = (x1.min(x2) - half).floor() as i64;
            let max_x = (x1.max(x2) + half).ceil() as i64;
            let min_y = (y1.min(y2) - half).floor() as i64;
            let max_y = (y1.max(y2) + half).ceil() as i64;

            for py in min_y..=max_y {
                for px in min_x..=max_x {
                    let cx = px as f64 + 0.5;
                    let cy = py as f64 + 0.5;
                    if segment_distance(cx, cy, x1, y1, x2, y2) <= half {
                        self.blend_pixel(px, py, color);
                    }
                }
            }
        }
    }

    /// Sample with bilinear interpolation using normalized [0, 1]
    /// coordinates.
    pub fn sample_bilinear(&self, u: f64, v: f64) -> Color {
        let x = u * (self.width - 1) as f64;
        let y = v * (self.height - 1) as f64;

        let x0 = x.floor() as u32;
        let y0 = y.floor() as u32;
        let x1 = (x0 + 1).min(self.width - 1);
        let y1 = (y0 + 1).min(self.height - 1);

        let fx = x - x.floor();
        let fy = y - y.floor();

        let c00 = self.get(x0, y0);
        let c10 = self.get(x1, y0);
        let c01 = self.get(x0, y1);
        let c11 = self.get(x1, y1);

        let c0 = c00.lerp(&c10, fx);
        let c1 = c01.lerp(&c11, fx);
        c0.lerp(&c1, fy)
    }

    /// Flatten to 8-bit RGB bytes, discarding alpha.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 3);
        for color in &self.data {
            bytes.extend_from_slice(&color.to_rgb8());
        }
        bytes
    }
}

/// Distance from point (px, py) to the segment (x1, y1)-(x2, y2).
fn segment_distance(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let len2 = dx * dx + dy * dy;
    if len2 <= f64::EPSILON {
        return ((px - x1).powi(2) + (py - y1).powi(2)).sqrt();
    }
    let t = (((px - x1) * dx + (py - y1) * dy) / len2).clamp(0.0, 1.0);
    let nx = x1 + t * dx;
    let ny = y1 + t * dy;
    ((px - nx).powi(2) + (py - ny).powi(2)).sqrt()
}
