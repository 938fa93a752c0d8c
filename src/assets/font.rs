use std::path::Path;

use crate::foundation::error::{FodError, FodResult};
use crate::layout::measure::TextMeasure;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub struct TextBrushRgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl TextBrushRgba8 {
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };
}

/// A single font file registered with Parley, plus the handle `vello_cpu` needs to draw it.
///
/// Also serves as the production [`TextMeasure`]: widths and heights come from shaping the text
/// with this font.
pub struct FontAsset {
    family: String,
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    font: vello_cpu::peniko::FontData,
}

impl FontAsset {
    /// Read and register a font file.
    pub fn load(path: &Path) -> FodResult<Self> {
        let bytes = std::fs::read(path)
            .map_err(|e| FodError::font(format!("read font '{}': {e}", path.display())))?;
        Self::from_bytes(bytes)
    }

    pub fn from_bytes(bytes: Vec<u8>) -> FodResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| FodError::font("no font families registered from font bytes"))?;
        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| FodError::font("registered font family has no name"))?
            .to_string();

        let font = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), 0);
        Ok(Self {
            family,
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            font,
        })
    }

    pub fn family_name(&self) -> &str {
        &self.family
    }

    pub(crate) fn font_data(&self) -> &vello_cpu::peniko::FontData {
        &self.font
    }

    /// Shape `text` as one unbroken line.
    pub fn layout_line(
        &mut self,
        text: &str,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> parley::Layout<TextBrushRgba8> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }
}

impl TextMeasure for FontAsset {
    fn advance(&mut self, text: &str, size_px: f32) -> f32 {
        self.layout_line(text, size_px, TextBrushRgba8::WHITE)
            .lines()
            .map(|line| line.metrics().advance)
            .fold(0.0, f32::max)
    }

    fn reference_height(&mut self, glyph: &str, size_px: f32) -> f32 {
        let layout = self.layout_line(glyph, size_px, TextBrushRgba8::WHITE);
        self.ink_height(&layout).unwrap_or(0.0)
    }
}

impl FontAsset {
    /// Vertical extent of the inked glyphs in `layout`, from the highest outline point to the
    /// lowest. `None` when nothing in the layout has an outline (spaces, empty text).
    fn ink_height(&self, layout: &parley::Layout<TextBrushRgba8>) -> Option<f32> {
        use skrifa::MetadataProvider;

        let font = skrifa::FontRef::from_index(self.font.data.as_ref(), self.font.index).ok()?;
        let mut top = f32::INFINITY;
        let mut bottom = f32::NEG_INFINITY;
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let metrics = font.glyph_metrics(
                    skrifa::instance::Size::new(run.run().font_size()),
                    skrifa::instance::LocationRef::default(),
                );
                for g in run.glyphs() {
                    let Some(b) = metrics.bounds(skrifa::GlyphId::new(g.id)) else {
                        continue;
                    };
                    // Font outlines are y-up; layout offsets are y-down.
                    top = top.min(g.y - b.y_max);
                    bottom = bottom.max(g.y - b.y_min);
                }
            }
        }
        (bottom > top).then_some(bottom - top)
    }
}
