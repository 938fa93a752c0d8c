/// Text metrics needed by the layout search.
///
/// Implementations must be deterministic for a given `(text, size_px)`.
pub trait TextMeasure {
    /// Rendered width of `text` on a single line.
    fn advance(&mut self, text: &str, size_px: f32) -> f32;

    /// Ink height of `glyph` (or any short text): top of the tallest outline to the bottom of
    /// the lowest.
    fn reference_height(&mut self, glyph: &str, size_px: f32) -> f32;
}

impl<T: TextMeasure + ?Sized> TextMeasure for &mut T {
    fn advance(&mut self, text: &str, size_px: f32) -> f32 {
        (**self).advance(text, size_px)
    }

    fn reference_height(&mut self, glyph: &str, size_px: f32) -> f32 {
        (**self).reference_height(glyph, size_px)
    }
}

/// Monospace approximation: every char is `em_ratio * size_px` wide and every glyph is
/// `height_ratio * size_px` tall.
///
/// Useful when no font file is available, e.g. for previews and tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAdvance {
    pub em_ratio: f32,
    pub height_ratio: f32,
}

impl Default for FixedAdvance {
    fn default() -> Self {
        Self {
            em_ratio: 0.5,
            height_ratio: 1.0,
        }
    }
}

impl TextMeasure for FixedAdvance {
    fn advance(&mut self, text: &str, size_px: f32) -> f32 {
        text.chars().count() as f32 * self.em_ratio * size_px
    }

    fn reference_height(&mut self, _glyph: &str, size_px: f32) -> f32 {
        self.height_ratio * size_px
    }
}
