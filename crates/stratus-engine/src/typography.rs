//! Typography: font resolution, measurement, placement, and drawing.
//!
//! The font chain never fails. A caller hands over whatever font bytes
//! its host resolved (or none at all); if they do not parse as a
//! scalable font the layer degrades — silently but deterministically —
//! to the built-in fixed-size 5x7 glyph set. The outcome is an explicit
//! variant callers can inspect, not a caught exception.

mod bitmap;

use fontdue::{Font, FontSettings};
use stratus_spec::{Anchor, BoundingBox, CanvasSize, TextBlock, TEXT_MARGIN_PX};

use crate::color::Color;
use crate::raster::PosterBuffer;

/// Vertical gap between stacked text blocks.
pub const STACK_GAP_PX: i32 = 8;

/// Result of font resolution.
pub enum ResolvedFont {
    /// A scalable font rendered at the requested size.
    Scalable(Font),
    /// The built-in fixed-size 5x7 glyph set.
    Bitmap,
}

/// Resolves the font used by the typography layer.
pub struct FontResolver {
    font: ResolvedFont,
}

impl std::fmt::Debug for FontResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let branch = match self.font {
            ResolvedFont::Scalable(_) => "Scalable",
            ResolvedFont::Bitmap => "Bitmap",
        };
        f.debug_struct("FontResolver").field("font", &branch).finish()
    }
}

impl FontResolver {
    /// Attempt to resolve a scalable font from raw TTF/OTF bytes.
    ///
    /// Unparseable bytes resolve to the bitmap fallback. Identical
    /// inputs resolve identically on every call.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let font = match Font::from_bytes(bytes, FontSettings::default()) {
            Ok(font) => ResolvedFont::Scalable(font),
            Err(_) => ResolvedFont::Bitmap,
        };
        Self { font }
    }

    /// Resolve directly to the bitmap fallback.
    pub fn fallback() -> Self {
        Self {
            font: ResolvedFont::Bitmap,
        }
    }

    /// Which branch the chain resolved to.
    pub fn resolved(&self) -> &ResolvedFont {
        &self.font
    }

    /// True when text will render from the fixed-size glyph set.
    pub fn is_fallback(&self) -> bool {
        matches!(self.font, ResolvedFont::Bitmap)
    }
}

/// Pixel width and height of `text` at `size_pt`, without drawing.
///
/// The bitmap fallback is fixed-size: it ignores `size_pt` (that is
/// the degradation the chain accepts instead of failing).
pub fn measure(font: &FontResolver, text: &str, size_pt: u32) -> (u32, u32) {
    match &font.font {
        ResolvedFont::Scalable(f) => {
            let px = size_pt as f32;
            let mut width = 0.0f32;
            let (mut max_ascent, mut max_descent) = (0i32, 0i32);
            for ch in text.chars() {
                let metrics = f.metrics(ch, px);
                let ascent = metrics.height as i32 + metrics.ymin;
                let descent = -metrics.ymin;
                max_ascent = max_ascent.max(ascent);
                max_descent = max_descent.max(descent);
                width += metrics.advance_width;
            }
            (
                width.ceil().max(0.0) as u32,
                (max_ascent + max_descent).max(0) as u32,
            )
        }
        ResolvedFont::Bitmap => (bitmap::text_width(text), bitmap::GLYPH_HEIGHT),
    }
}

/// Compute the placement of a measured text block on the canvas.
pub fn place(canvas: CanvasSize, block: &TextBlock, text_w: u32, text_h: u32) -> BoundingBox {
    let cw = canvas.width as i32;
    let ch = canvas.height as i32;
    let (tw, th) = (text_w as i32, text_h as i32);

    let (x, y) = match block.anchor {
        Anchor::Centered => {
            let x = (cw - tw) / 2;
            let y = block.y_offset.unwrap_or(ch - th - TEXT_MARGIN_PX);
            (x, y)
        }
        Anchor::TopLeft => (TEXT_MARGIN_PX, TEXT_MARGIN_PX),
        Anchor::BottomLeft => (TEXT_MARGIN_PX, ch - th - TEXT_MARGIN_PX),
        Anchor::BottomRight => (cw - tw - TEXT_MARGIN_PX, ch - th - TEXT_MARGIN_PX),
    };

    BoundingBox {
        x,
        y,
        width: text_w,
        height: text_h,
    }
}

/// Draw a text block at a previously computed bounding box.
///
/// Writes glyph pixels onto the passed canvas (coverage-blended for
/// scalable fonts, opaque cells for the bitmap set); never resizes it.
pub fn draw(canvas: &mut PosterBuffer, font: &FontResolver, block: &TextBlock, bbox: &BoundingBox) {
    let color = Color::from_rgba8(block.color);
    match &font.font {
        ResolvedFont::Scalable(f) => draw_scalable(canvas, f, block, bbox, color),
        ResolvedFont::Bitmap => draw_bitmap(canvas, &block.text, bbox, color),
    }
}

/// Measure, place, and draw a block in one step.
pub fn place_text(
    canvas: &mut PosterBuffer,
    font: &FontResolver,
    block: &TextBlock,
) -> BoundingBox {
    let size = CanvasSize {
        width: canvas.width,
        height: canvas.height,
    };
    let (tw, th) = measure(font, &block.text, block.size_pt);
    let bbox = place(size, block, tw, th);
    draw(canvas, font, block, &bbox);
    bbox
}

fn draw_scalable(
    canvas: &mut PosterBuffer,
    f: &Font,
    block: &TextBlock,
    bbox: &BoundingBox,
    color: Color,
) {
    let px = block.size_pt as f32;

    // Baseline from the tallest ascent in this string, matching measure().
    let mut max_ascent = 0i32;
    for ch in block.text.chars() {
        let metrics = f.metrics(ch, px);
        max_ascent = max_ascent.max(metrics.height as i32 + metrics.ymin);
    }

    let mut cursor = bbox.x as f32;
    for ch in block.text.chars() {
        let (metrics, coverage) = f.rasterize(ch, px);
        let glyph_x = cursor.round() as i64 + i64::from(metrics.xmin);
        let glyph_y =
            i64::from(bbox.y) + i64::from(max_ascent - (metrics.height as i32 + metrics.ymin));

        for gy in 0..metrics.height {
            for gx in 0..metrics.width {
                let cov = coverage[gy * metrics.width + gx];
                if cov == 0 {
                    continue;
                }
                let alpha = color.a * (cov as f64 / 255.0);
                canvas.blend_pixel(
                    glyph_x + gx as i64,
                    glyph_y + gy as i64,
                    Color::rgba(color.r, color.g, color.b, alpha),
                );
            }
        }
        cursor += metrics.advance_width;
    }
}

fn draw_bitmap(canvas: &mut PosterBuffer, text: &str, bbox: &BoundingBox, color: Color) {
    let mut cursor = i64::from(bbox.x);
    for ch in text.chars() {
        let rows = bitmap::glyph_rows(ch);
        for (gy, row) in rows.iter().enumerate() {
            for gx in 0..bitmap::GLYPH_WIDTH {
                let bit = 1u8 << (bitmap::GLYPH_WIDTH - 1 - gx);
                if row & bit != 0 {
                    canvas.blend_pixel(
                        cursor + i64::from(gx),
                        i64::from(bbox.y) + gy as i64,
                        color,
                    );
                }
            }
        }
        cursor += i64::from(bitmap::GLYPH_ADVANCE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas_size(w: u32, h: u32) -> CanvasSize {
        CanvasSize {
            width: w,
            height: h,
        }
    }

    #[test]
    fn garbage_bytes_resolve_to_fallback() {
        let resolver = FontResolver::from_bytes(&[0xde, 0xad, 0xbe, 0xef]);
        assert!(resolver.is_fallback());
        // Same input, same branch.
        assert!(FontResolver::from_bytes(&[0xde, 0xad, 0xbe, 0xef]).is_fallback());
    }

    #[test]
    fn centered_anchor_math() {
        // Canvas width 800, text width 200 -> x = 300.
        let block = TextBlock::new("T", 20).with_y_offset(100);
        let bbox = place(canvas_size(800, 1000), &block, 200, 40);
        assert_eq!(bbox.x, 300);
        assert_eq!(bbox.y, 100);
    }

    #[test]
    fn centered_default_sits_above_bottom_margin() {
        let block = TextBlock::new("T", 20);
        let bbox = place(canvas_size(800, 1000), &block, 200, 40);
        assert_eq!(bbox.y, 1000 - 40 - TEXT_MARGIN_PX);
    }

    #[test]
    fn corner_anchor_insets() {
        let size = canvas_size(800, 600);
        let tl = place(
            size,
            &TextBlock::new("x", 10).with_anchor(Anchor::TopLeft),
            50,
            10,
        );
        assert_eq!((tl.x, tl.y), (40, 40));

        let bl = place(
            size,
            &TextBlock::new("x", 10).with_anchor(Anchor::BottomLeft),
            50,
            10,
        );
        assert_eq!((bl.x, bl.y), (40, 600 - 10 - 40));

        let br = place(
            size,
            &TextBlock::new("x", 10).with_anchor(Anchor::BottomRight),
            50,
            10,
        );
        assert_eq!((br.x, br.y), (800 - 50 - 40, 600 - 10 - 40));
    }

    #[test]
    fn bitmap_measure_is_fixed_size() {
        let font = FontResolver::fallback();
        let (w1, h1) = measure(&font, "RAIN", 12);
        let (w2, h2) = measure(&font, "RAIN", 96);
        assert_eq!((w1, h1), (w2, h2));
        assert_eq!(h1, 7);
        assert_eq!(w1, 4 * 6 - 1);
    }

    #[test]
    fn bitmap_draw_writes_inside_bbox_only() {
        let font = FontResolver::fallback();
        let mut canvas = PosterBuffer::new(100, 40, Color::gray(0.0));
        let block = TextBlock::new("Hi", 10).with_y_offset(10);
        let bbox = place_text(&mut canvas, &font, &block);

        let mut touched = 0u32;
        for y in 0..40u32 {
            for x in 0..100u32 {
                if canvas.get(x, y) != Color::gray(0.0) {
                    touched += 1;
                    assert!((x as i32) >= bbox.x && (x as i32) < bbox.right());
                    assert!((y as i32) >= bbox.y && (y as i32) < bbox.bottom());
                }
            }
        }
        assert!(touched > 0);
    }

    #[test]
    fn draw_never_resizes_canvas() {
        let font = FontResolver::fallback();
        let mut canvas = PosterBuffer::new(50, 20, Color::gray(0.0));
        // Long text overflows horizontally; pixels clip, size stays.
        let block = TextBlock::new("A very long line of text", 10).with_y_offset(5);
        place_text(&mut canvas, &font, &block);
        assert_eq!((canvas.width, canvas.height), (50, 20));
    }
}
