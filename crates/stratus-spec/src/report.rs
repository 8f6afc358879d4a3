//! Render report types returned alongside the finished raster.

use serde::{Deserialize, Serialize};

/// Pixel-space placement of a drawn text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl BoundingBox {
    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }
}

/// Metadata describing how a render actually went.
///
/// Degraded-fidelity conditions are reported here as data — the engine
/// never logs and never raises for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderReport {
    /// Seed the render ran with. Equal to the requested seed when one
    /// was supplied, otherwise the entropy-drawn seed that reproduces
    /// this exact poster.
    pub seed: u32,
    /// True when the typography layer fell back to the built-in
    /// fixed-size glyph set.
    pub font_fallback: bool,
    /// Placement of the title block, when one was drawn.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_box: Option<BoundingBox>,
    /// Placement of the info block, when one was drawn.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info_box: Option<BoundingBox>,
}
