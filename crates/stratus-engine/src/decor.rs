//! Decorative layer generation: scattered shapes plus the noise band.

use stratus_spec::{CanvasSize, StyleDescriptor};

use crate::color::Color;
use crate::raster::PosterBuffer;
use crate::rng::PosterRng;

/// Smallest shape extent in pixels.
pub const SHAPE_MIN_EXTENT: u32 = 60;
/// Largest shape extent in pixels.
pub const SHAPE_MAX_EXTENT: u32 = 240;

/// Horizontal sampling step of the noise polyline.
const NOISE_STEP_PX: u32 = 10;
/// Stroke width of the noise polyline.
const NOISE_STROKE_PX: f64 = 3.0;
/// Angular frequency of the sinusoidal component.
const NOISE_FREQ: f64 = 0.04;

/// Generate the decorative layer for one render.
///
/// Scatters `style.shape_density` shapes (circles and rectangles,
/// extents in [`SHAPE_MIN_EXTENT`, `SHAPE_MAX_EXTENT`], colors uniform
/// from the style palette) and draws the sinusoidal noise band
/// `y(x) = h/2 + s·sin(0.04x) + U(−s, s)` sampled every 10 px.
///
/// All randomness comes from `rng`; the same seed reproduces the layer
/// bit-for-bit.
pub fn generate(
    canvas: CanvasSize,
    style: &StyleDescriptor,
    shape_alpha: f64,
    rng: &mut PosterRng,
) -> PosterBuffer {
    let mut layer = PosterBuffer::transparent(canvas.width, canvas.height);
    let palette = style.palette.colors();

    for _ in 0..style.shape_density {
        let w = rng
            .gen_range(SHAPE_MIN_EXTENT..=SHAPE_MAX_EXTENT)
            .min(canvas.width);
        let h = rng
            .gen_range(SHAPE_MIN_EXTENT..=SHAPE_MAX_EXTENT)
            .min(canvas.height);
        let x = rng.gen_range(0..=canvas.width - w);
        let y = rng.gen_range(0..=canvas.height - h);
        let rgb = *rng.pick(palette);
        let color = Color::rgba(
            rgb[0] as f64 / 255.0,
            rgb[1] as f64 / 255.0,
            rgb[2] as f64 / 255.0,
            shape_alpha.clamp(0.0, 1.0),
        );

        if rng.gen_range(0..2) == 0 {
            layer.fill_rect(i64::from(x), i64::from(y), w, h, color);
        } else {
            // Circle inscribed in the sampled extent.
            let radius = f64::from(w.min(h)) / 2.0;
            let cx = f64::from(x) + f64::from(w) / 2.0;
            let cy = f64::from(y) + f64::from(h) / 2.0;
            layer.fill_circle(cx, cy, radius, color);
        }
    }

    draw_noise_band(&mut layer, canvas, style, rng);
    layer
}

fn draw_noise_band(
    layer: &mut PosterBuffer,
    canvas: CanvasSize,
    style: &StyleDescriptor,
    rng: &mut PosterRng,
) {
    let strength = f64::from(style.noise_strength);
    let jitter_bound = i64::from(style.noise_strength);
    let mid = f64::from(canvas.height) / 2.0;
    let color = Color::from_rgb8(*rng.pick(style.palette.colors()));

    let mut points = Vec::with_capacity((canvas.width / NOISE_STEP_PX + 1) as usize);
    let mut x = 0u32;
    while x < canvas.width {
        let jitter = rng.gen_range(-jitter_bound..=jitter_bound) as f64;
        let y = mid + strength * (f64::from(x) * NOISE_FREQ).sin() + jitter;
        points.push((f64::from(x), y));
        x += NOISE_STEP_PX;
    }

    layer.stroke_polyline(&points, NOISE_STROKE_PX, color);
}
