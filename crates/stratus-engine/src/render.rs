//! The render pipeline: request types, composition order, and the
//! top-level entry point.

use stratus_spec::{BoundingBox, CanvasSize, RenderReport, StyleDescriptor, TextBlock};

use crate::background::{self, BackgroundSource};
use crate::color::Color;
use crate::decor;
use crate::error::RenderError;
use crate::grain;
use crate::raster::PosterBuffer;
use crate::rng::PosterRng;
use crate::typography::{self, FontResolver, STACK_GAP_PX};

/// Uniform scrim composited between grain and typography.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlay {
    /// Overlay color.
    pub color: [u8; 3],
    /// Blend factor in [0, 1].
    pub alpha: f64,
}

/// Knobs of the pipeline that are not weather-derived.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Grain standard deviation in 8-bit channel units.
    pub grain_stddev: f64,
    /// Fill alpha of decorative shapes.
    pub shape_alpha: f64,
    /// Optional uniform overlay; `None` skips the blend.
    pub overlay: Option<Overlay>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            grain_stddev: 6.0,
            shape_alpha: 1.0,
            overlay: Some(Overlay {
                color: [0xff, 0xff, 0xff],
                alpha: 0.05,
            }),
        }
    }
}

/// One complete poster request. Immutable input boundary object.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    /// Poster dimensions.
    pub canvas: CanvasSize,
    /// Resolved visual style.
    pub style: StyleDescriptor,
    /// Background source (gradient by default).
    pub background: BackgroundSource,
    /// Title line, drawn above the info line.
    pub title: Option<TextBlock>,
    /// Info line.
    pub info: Option<TextBlock>,
    /// Reproducibility seed; `None` draws one from process entropy.
    pub seed: Option<u32>,
    /// Pipeline options.
    pub options: RenderOptions,
}

impl RenderRequest {
    /// Build a request with gradient background, no text, and default
    /// options.
    pub fn new(canvas: CanvasSize, style: StyleDescriptor) -> Self {
        Self {
            canvas,
            style,
            background: BackgroundSource::Gradient,
            title: None,
            info: None,
            seed: None,
            options: RenderOptions::default(),
        }
    }

    /// Set the background source.
    pub fn with_background(mut self, background: BackgroundSource) -> Self {
        self.background = background;
        self
    }

    /// Set the title block.
    pub fn with_title(mut self, title: TextBlock) -> Self {
        self.title = Some(title);
        self
    }

    /// Set the info block.
    pub fn with_info(mut self, info: TextBlock) -> Self {
        self.info = Some(info);
        self
    }

    /// Set the reproducibility seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the pipeline options.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    fn validate(&self) -> Result<(), RenderError> {
        self.canvas.validate()?;
        if let Some(block) = &self.title {
            block.validate()?;
        }
        if let Some(block) = &self.info {
            block.validate()?;
        }
        Ok(())
    }
}

/// Finished poster raster: RGB8, row-major, `width * height * 3` bytes.
///
/// Encoding this buffer to PNG or any other transport format is the
/// caller's job; the engine stops at pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosterRgb8 {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes.
    pub data: Vec<u8>,
}

/// Composite a decorative layer and text blocks over a background.
///
/// Fixed order: the layer alpha-blends over the background, then text
/// draws on top; the result is flattened to RGB8 ready for external
/// encoding. Composing an identity (fully transparent) layer with no
/// text returns a raster equal to the background.
pub fn compose(
    background: &PosterBuffer,
    decor_layer: &PosterBuffer,
    texts: &[&TextBlock],
    font: &FontResolver,
) -> Result<(PosterRgb8, Vec<BoundingBox>), RenderError> {
    if background.width != decor_layer.width || background.height != decor_layer.height {
        return Err(RenderError::invalid_input(
            "decorative layer dimensions must match the background",
        ));
    }

    let mut canvas = background.clone();
    canvas.composite_over(decor_layer);

    let mut boxes = Vec::with_capacity(texts.len());
    for block in texts {
        boxes.push(typography::place_text(&mut canvas, font, block));
    }

    let poster = PosterRgb8 {
        width: canvas.width,
        height: canvas.height,
        data: canvas.to_rgb8(),
    };
    Ok((poster, boxes))
}

/// Render a poster from a request.
///
/// Pipeline order is fixed: background → decorative layer composite →
/// grain → overlay → typography → flatten. The whole pipeline is
/// synchronous, in-memory, and free of network and filesystem I/O.
/// Rendering the same request with the same seed reproduces the raster
/// byte-for-byte.
pub fn render_poster(
    request: &RenderRequest,
    font: &FontResolver,
) -> Result<(PosterRgb8, RenderReport), RenderError> {
    request.validate()?;

    let base_seed = match request.seed {
        Some(seed) => seed,
        None => PosterRng::from_entropy().1,
    };

    let mut canvas = background::build(request.canvas, &request.style, &request.background)?;

    let mut decor_rng = PosterRng::new(PosterRng::derive_stage_seed(base_seed, "decor"));
    let layer = decor::generate(
        request.canvas,
        &request.style,
        request.options.shape_alpha,
        &mut decor_rng,
    );
    canvas.composite_over(&layer);

    let mut grain_rng = PosterRng::new(PosterRng::derive_stage_seed(base_seed, "grain"));
    canvas = grain::apply_grain(&canvas, request.options.grain_stddev, &mut grain_rng)?;

    if let Some(overlay) = request.options.overlay {
        canvas = grain::blend_overlay(&canvas, Color::from_rgb8(overlay.color), overlay.alpha)?;
    }

    let (title_box, info_box) = draw_text_blocks(&mut canvas, request, font);

    let poster = PosterRgb8 {
        width: canvas.width,
        height: canvas.height,
        data: canvas.to_rgb8(),
    };
    let report = RenderReport {
        seed: base_seed,
        font_fallback: font.is_fallback(),
        title_box,
        info_box,
    };
    Ok((poster, report))
}

/// Draw title and info, title above info.
///
/// A centered info block with no explicit offset stacks directly below
/// the title's bounding box.
fn draw_text_blocks(
    canvas: &mut PosterBuffer,
    request: &RenderRequest,
    font: &FontResolver,
) -> (Option<BoundingBox>, Option<BoundingBox>) {
    let title_box = request
        .title
        .as_ref()
        .map(|block| typography::place_text(canvas, font, block));

    let info_box = request.info.as_ref().map(|block| {
        let stacks_under_title = matches!(block.anchor, stratus_spec::Anchor::Centered)
            && block.y_offset.is_none()
            && title_box.is_some();
        if stacks_under_title {
            let stacked = block
                .clone()
                .with_y_offset(title_box.unwrap().bottom() + STACK_GAP_PX);
            typography::place_text(canvas, font, &stacked)
        } else {
            typography::place_text(canvas, font, block)
        }
    });

    (title_box, info_box)
}
