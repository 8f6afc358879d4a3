//! Canvas and text-block request types.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Smallest supported canvas dimension, per axis.
pub const MIN_CANVAS_DIM: u32 = 400;
/// Largest supported canvas dimension, per axis.
pub const MAX_CANVAS_DIM: u32 = 2000;

/// Fixed inset used by corner anchors and the default title placement.
pub const TEXT_MARGIN_PX: i32 = 40;

/// Requested poster dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl CanvasSize {
    /// Build a canvas size, validating the per-axis bound.
    pub fn new(width: u32, height: u32) -> Result<Self, SpecError> {
        let size = Self { width, height };
        size.validate()?;
        Ok(size)
    }

    /// Check both axes against [`MIN_CANVAS_DIM`] / [`MAX_CANVAS_DIM`].
    pub fn validate(&self) -> Result<(), SpecError> {
        let in_range = |d: u32| (MIN_CANVAS_DIM..=MAX_CANVAS_DIM).contains(&d);
        if !in_range(self.width) || !in_range(self.height) {
            return Err(SpecError::CanvasOutOfRange(self.width, self.height));
        }
        Ok(())
    }
}

/// Reference point used to position a text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// Horizontally centered; `y` from the block's offset, defaulting
    /// to the bottom inset.
    Centered,
    /// Fixed-margin inset from the top-left corner.
    TopLeft,
    /// Fixed-margin inset from the bottom-left corner.
    BottomLeft,
    /// Fixed-margin inset from the bottom-right corner.
    BottomRight,
}

/// A single line of text to draw onto the poster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    /// The text to render.
    pub text: String,
    /// Requested size in points (ignored by the bitmap fallback font).
    pub size_pt: u32,
    /// Placement anchor.
    #[serde(default = "default_anchor")]
    pub anchor: Anchor,
    /// Straight-alpha RGBA text color.
    #[serde(default = "default_text_color")]
    pub color: [u8; 4],
    /// Explicit vertical position for `Centered` blocks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_offset: Option<i32>,
}

fn default_anchor() -> Anchor {
    Anchor::Centered
}

fn default_text_color() -> [u8; 4] {
    [0xff, 0xff, 0xff, 0xff]
}

impl TextBlock {
    /// Build a centered white text block.
    pub fn new(text: impl Into<String>, size_pt: u32) -> Self {
        Self {
            text: text.into(),
            size_pt,
            anchor: default_anchor(),
            color: default_text_color(),
            y_offset: None,
        }
    }

    /// Set the placement anchor.
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Set the text color.
    pub fn with_color(mut self, color: [u8; 4]) -> Self {
        self.color = color;
        self
    }

    /// Set an explicit vertical position for `Centered` placement.
    pub fn with_y_offset(mut self, y: i32) -> Self {
        self.y_offset = Some(y);
        self
    }

    /// Validate the block's parameters.
    pub fn validate(&self) -> Result<(), SpecError> {
        if self.size_pt == 0 {
            return Err(SpecError::ZeroTextSize);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn canvas_bounds_enforced() {
        assert!(CanvasSize::new(800, 1000).is_ok());
        assert!(CanvasSize::new(MIN_CANVAS_DIM, MAX_CANVAS_DIM).is_ok());
        assert!(CanvasSize::new(399, 1000).is_err());
        assert!(CanvasSize::new(800, 2001).is_err());
        assert!(CanvasSize::new(0, 0).is_err());
    }

    #[test]
    fn text_block_defaults() {
        let block = TextBlock::new("Weather Poster", 55);
        assert_eq!(block.anchor, Anchor::Centered);
        assert_eq!(block.color, [0xff, 0xff, 0xff, 0xff]);
        assert_eq!(block.y_offset, None);
        assert!(block.validate().is_ok());
    }

    #[test]
    fn zero_size_rejected() {
        assert!(TextBlock::new("x", 0).validate().is_err());
    }

    #[test]
    fn text_block_json_round_trip() {
        let block = TextBlock::new("Seoul | 5°C | Rain", 28)
            .with_anchor(Anchor::BottomLeft)
            .with_color([0, 0, 0, 255]);
        let json = serde_json::to_string(&block).unwrap();
        let back: TextBlock = serde_json::from_str(&json).unwrap();
        assert_eq!(block, back);
    }

    #[test]
    fn anchor_serializes_snake_case() {
        let json = serde_json::to_string(&Anchor::BottomRight).unwrap();
        assert_eq!(json, "\"bottom_right\"");
    }
}
