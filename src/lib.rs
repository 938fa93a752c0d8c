//! Fact-of-the-day slide generator.
//!
//! A run fetches a random fact, fits it to the text column of a 960×540 slide (shrinking the
//! font and rerolling the fact when needed), draws it next to a random decorative image on a
//! random dark background, and writes `FOD<MMDDYY>.png`.
//!
//! - [`fit_fact`] is the layout search, driven by any [`FactSource`] and [`TextMeasure`]
//! - [`compose_slide`] rasterizes a laid-out slide
//! - [`generate_slide`] runs the whole pipeline
#![forbid(unsafe_code)]

mod assets;
mod foundation;
mod layout;
mod pipeline;
mod render;
mod source;

pub use crate::assets::font::{FontAsset, TextBrushRgba8};
pub use crate::assets::images::{DecorativeImage, ImageLibrary, fit_within};
pub use crate::foundation::config::{FALLBACK_FACT, Paths, SlideConfig};
pub use crate::foundation::date::{ImageSide, SlideDate};
pub use crate::foundation::error::{FodError, FodResult};
pub use crate::layout::fit::{
    FactLayout, FitOutcome, LayoutOrigin, Rejection, TitleLayout, fallback_layout, fit_fact,
    fit_text, fit_title, layout_at, search_fact_layout,
};
pub use crate::layout::measure::{FixedAdvance, TextMeasure};
pub use crate::layout::wrap::wrap_words;
pub use crate::pipeline::{GeneratedSlide, generate_slide};
pub use crate::render::color::{ColorExhausted, background_color, luma, sample_dark_color};
pub use crate::render::cpu::{SlideContent, SlideFrame, compose_slide};
pub use crate::render::geometry::{SlideGeometry, slide_geometry};
pub use crate::render::output::save_slide;
pub use crate::source::fact::{Fact, FactSource, parse_fact_body};
pub use crate::source::http::{FACT_ENDPOINT, HttpFactSource};
