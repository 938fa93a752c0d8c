use crate::foundation::config::SlideConfig;
use crate::layout::measure::TextMeasure;
use crate::layout::wrap::wrap_words;
use crate::source::fact::{Fact, FactSource};

/// Where a [`FactLayout`] came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutOrigin {
    /// A fetched fact fit within the size bounds.
    Fitted,
    /// The reroll budget ran out and the fixed fallback fact was laid out instead.
    Fallback,
}

/// A fact wrapped into lines at a chosen font size.
#[derive(Clone, Debug, PartialEq)]
pub struct FactLayout {
    pub fact: Fact,
    pub lines: Vec<String>,
    pub font_size: f32,
    /// Vertical distance between consecutive line tops.
    pub line_advance: f32,
    /// `lines.len() * line_advance`, always computed for this layout's own lines.
    pub total_height: f32,
    pub origin: LayoutOrigin,
}

/// Why a single fact could not be laid out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rejection {
    /// More words than allowed; nothing was measured.
    TooManyWords { words: usize, max: usize },
    /// Even the smallest size overflows the vertical budget.
    TooTall { height_at_min: f32, budget: f32 },
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooManyWords { words, max } => write!(f, "fact too long ({words} > {max} words)"),
            Self::TooTall {
                height_at_min,
                budget,
            } => write!(
                f,
                "fact does not fit after scaling ({height_at_min}px > {budget}px)"
            ),
        }
    }
}

/// Result of the bounded reroll search.
#[derive(Clone, Debug, PartialEq)]
pub enum FitOutcome {
    Fitted { layout: FactLayout, rerolls: u32 },
    Exhausted { rerolls: u32 },
}

/// Wrap `fact` at exactly `size_px` and compute its block height.
pub fn layout_at(
    fact: &Fact,
    size_px: f32,
    measure: &mut impl TextMeasure,
    cfg: &SlideConfig,
    origin: LayoutOrigin,
) -> FactLayout {
    let lines = wrap_words(fact.text(), size_px, cfg.text_width, measure);
    let line_advance = measure.reference_height(&cfg.reference_glyph, size_px) + cfg.line_gap;
    let total_height = lines.len() as f32 * line_advance;
    FactLayout {
        fact: fact.clone(),
        lines,
        font_size: size_px,
        line_advance,
        total_height,
        origin,
    }
}

/// Find the largest font size at which `fact` fits the vertical budget.
///
/// Sizes are tried from `fact_size_max` down to `fact_size_min`. Facts over `max_words` are
/// rejected before any measuring.
pub fn fit_text(
    fact: &Fact,
    measure: &mut impl TextMeasure,
    cfg: &SlideConfig,
) -> Result<FactLayout, Rejection> {
    let words = fact.word_count();
    if words > cfg.max_words {
        return Err(Rejection::TooManyWords {
            words,
            max: cfg.max_words,
        });
    }

    let budget = cfg.max_fact_height();
    let mut last_height = f32::INFINITY;
    for size in cfg.fact_sizes() {
        let layout = layout_at(fact, size, measure, cfg, LayoutOrigin::Fitted);
        if layout.total_height <= budget {
            return Ok(layout);
        }
        last_height = layout.total_height;
    }

    Err(Rejection::TooTall {
        height_at_min: last_height,
        budget,
    })
}

/// Pull facts from `source` until one fits, rerolling at most `reroll_limit` times
/// (`reroll_limit + 1` candidates in total).
#[tracing::instrument(skip_all, fields(reroll_limit = cfg.reroll_limit))]
pub fn search_fact_layout(
    source: &mut impl FactSource,
    measure: &mut impl TextMeasure,
    cfg: &SlideConfig,
) -> FitOutcome {
    let mut fact = source.next_fact();
    let mut rerolls = 0u32;
    loop {
        match fit_text(&fact, measure, cfg) {
            Ok(layout) => return FitOutcome::Fitted { layout, rerolls },
            Err(reason) => {
                if rerolls >= cfg.reroll_limit {
                    tracing::info!(%reason, rerolls, "last candidate rejected");
                    return FitOutcome::Exhausted { rerolls };
                }
                tracing::info!(%reason, rerolls, "rerolling");
                fact = source.next_fact();
                rerolls += 1;
            }
        }
    }
}

/// Layout of the configured fallback fact at the fallback size.
pub fn fallback_layout(measure: &mut impl TextMeasure, cfg: &SlideConfig) -> FactLayout {
    let fact = Fact::new(cfg.fallback_fact.as_str());
    layout_at(
        &fact,
        cfg.fallback_size,
        measure,
        cfg,
        LayoutOrigin::Fallback,
    )
}

/// Lay out a fact for the slide, falling back to the fixed fact once rerolls run out.
pub fn fit_fact(
    source: &mut impl FactSource,
    measure: &mut impl TextMeasure,
    cfg: &SlideConfig,
) -> FactLayout {
    match search_fact_layout(source, measure, cfg) {
        FitOutcome::Fitted { layout, .. } => layout,
        FitOutcome::Exhausted { rerolls } => {
            tracing::warn!(
                rerolls,
                "could not find a short-enough fact, using the fallback"
            );
            fallback_layout(measure, cfg)
        }
    }
}

/// Title text at the size chosen by [`fit_title`].
#[derive(Clone, Debug, PartialEq)]
pub struct TitleLayout {
    pub text: String,
    pub font_size: f32,
    pub width: f32,
    pub height: f32,
}

/// Shrink the title until it fits `title_width`; the minimum size is used if nothing fits.
pub fn fit_title(title: &str, measure: &mut impl TextMeasure, cfg: &SlideConfig) -> TitleLayout {
    let size = cfg
        .title_sizes()
        .find(|&size| measure.advance(title, size) <= cfg.title_width)
        .unwrap_or(cfg.title_size_min);
    TitleLayout {
        text: title.to_owned(),
        font_size: size,
        width: measure.advance(title, size),
        height: measure.reference_height(title, size),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/fit.rs"]
mod tests;
