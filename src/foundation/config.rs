use std::path::PathBuf;

/// Default for [`SlideConfig::fallback_fact`].
pub const FALLBACK_FACT: &str = "Fun Fact: Whales are cool.";

/// Layout and rendering constants for a slide.
///
/// Every function that measures, lays out or draws takes a `&SlideConfig`; nothing reads ambient
/// module-level values.
#[derive(Clone, Debug, PartialEq)]
pub struct SlideConfig {
    /// Canvas width in pixels.
    pub canvas_width: u32,
    /// Canvas height in pixels.
    pub canvas_height: u32,
    /// Distance from the canvas edge to the image or text column.
    pub margin: f32,
    /// Bounding box the decorative image is shrunk into (square).
    pub image_box: u32,

    /// Maximum rendered width of a fact line.
    pub text_width: f32,
    /// Largest fact font size tried.
    pub fact_size_max: f32,
    /// Smallest fact font size tried.
    pub fact_size_min: f32,
    /// Decrement between fact font sizes.
    pub fact_size_step: f32,
    /// Facts with more words are rerolled without measuring.
    pub max_words: usize,
    /// Number of replacement facts requested before giving up.
    ///
    /// The first fact is evaluated too, so at most `reroll_limit + 1` candidates are laid out.
    pub reroll_limit: u32,
    /// Fraction of the canvas height the fact block may occupy.
    pub fact_height_ratio: f32,
    /// Extra spacing added to the reference glyph height for each line.
    pub line_gap: f32,
    /// Glyph used to measure line height.
    pub reference_glyph: String,
    /// Fact used when the feed is unreachable and once the reroll budget is exhausted.
    pub fallback_fact: String,
    /// Font size used for [`SlideConfig::fallback_fact`].
    pub fallback_size: f32,

    /// Largest title font size tried.
    pub title_size_max: f32,
    /// Smallest title font size tried.
    pub title_size_min: f32,
    /// Decrement between title font sizes.
    pub title_size_step: f32,
    /// Maximum rendered width of the title.
    pub title_width: f32,
    /// Top offset of the title.
    pub title_y: f32,
    /// Gap between the bottom of the title and the underline.
    pub underline_gap: f32,
    /// Underline stroke thickness.
    pub underline_thickness: f32,

    /// Backgrounds must have a luma strictly below this value.
    pub luma_threshold: f32,
    /// Number of random colors drawn before using [`SlideConfig::fallback_background`].
    pub color_attempts: u32,
    /// Background used when no sampled color is dark enough.
    pub fallback_background: [u8; 3],
}

impl Default for SlideConfig {
    fn default() -> Self {
        Self {
            canvas_width: 960,
            canvas_height: 540,
            margin: 50.0,
            image_box: 400,

            text_width: 400.0,
            fact_size_max: 48.0,
            fact_size_min: 16.0,
            fact_size_step: 2.0,
            max_words: 40,
            reroll_limit: 10,
            fact_height_ratio: 0.6,
            line_gap: 5.0,
            reference_glyph: "A".to_owned(),
            fallback_fact: FALLBACK_FACT.to_owned(),
            fallback_size: 36.0,

            title_size_max: 48.0,
            title_size_min: 16.0,
            title_size_step: 2.0,
            title_width: 400.0,
            title_y: 50.0,
            underline_gap: 18.0,
            underline_thickness: 4.0,

            luma_threshold: 160.0,
            color_attempts: 64,
            fallback_background: [18, 20, 28],
        }
    }
}

impl SlideConfig {
    /// Vertical budget for the wrapped fact block.
    pub fn max_fact_height(&self) -> f32 {
        (self.canvas_height as f32 * self.fact_height_ratio).floor()
    }

    /// Candidate fact font sizes, largest first.
    pub fn fact_sizes(&self) -> impl Iterator<Item = f32> + use<> {
        descending_sizes(self.fact_size_max, self.fact_size_min, self.fact_size_step)
    }

    /// Candidate title font sizes, largest first.
    pub fn title_sizes(&self) -> impl Iterator<Item = f32> + use<> {
        descending_sizes(self.title_size_max, self.title_size_min, self.title_size_step)
    }
}

fn descending_sizes(max: f32, min: f32, step: f32) -> impl Iterator<Item = f32> {
    let step = if step.is_finite() && step > 0.0 { step } else { 1.0 };
    let count = if max >= min {
        ((max - min) / step).floor() as usize + 1
    } else {
        0
    };
    (0..count).map(move |i| max - step * i as f32)
}

/// Filesystem locations used by a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Paths {
    /// TrueType/OpenType font used for every string on the slide.
    pub font: PathBuf,
    /// Directory of transparent decorative PNGs.
    pub images: PathBuf,
    /// Directory slides are written into; created when missing.
    pub output: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            font: PathBuf::from("Anton-Regular.ttf"),
            images: PathBuf::from("fod_images"),
            output: PathBuf::from("output"),
        }
    }
}
