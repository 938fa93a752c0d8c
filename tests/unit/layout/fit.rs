use std::collections::VecDeque;

use super::*;
use crate::foundation::config::FALLBACK_FACT;
use crate::layout::measure::FixedAdvance;

struct Scripted {
    queue: VecDeque<Fact>,
    repeat: Fact,
    calls: u32,
}

impl Scripted {
    fn new(facts: &[&str], repeat: &str) -> Self {
        Self {
            queue: facts.iter().map(|s| Fact::new(*s)).collect(),
            repeat: Fact::new(repeat),
            calls: 0,
        }
    }
}

impl FactSource for Scripted {
    fn next_fact(&mut self) -> Fact {
        self.calls += 1;
        self.queue
            .pop_front()
            .unwrap_or_else(|| self.repeat.clone())
    }
}

#[derive(Default)]
struct Counting {
    inner: FixedAdvance,
    calls: usize,
}

impl TextMeasure for Counting {
    fn advance(&mut self, text: &str, size_px: f32) -> f32 {
        self.calls += 1;
        self.inner.advance(text, size_px)
    }

    fn reference_height(&mut self, glyph: &str, size_px: f32) -> f32 {
        self.calls += 1;
        self.inner.reference_height(glyph, size_px)
    }
}

fn words(n: usize) -> String {
    vec!["word"; n].join(" ")
}

/// Twenty 60-char words: one line each at every size, far taller than the budget.
fn too_tall() -> String {
    vec!["x".repeat(60); 20].join(" ")
}

#[test]
fn short_fact_fits_at_max_size_on_one_line() {
    let cfg = SlideConfig::default();
    let layout = fit_text(&Fact::new("Whales are cool."), &mut FixedAdvance::default(), &cfg)
        .unwrap();
    assert_eq!(layout.font_size, 48.0);
    assert_eq!(layout.lines, vec!["Whales are cool."]);
    assert_eq!(layout.total_height, 53.0);
    assert_eq!(layout.origin, LayoutOrigin::Fitted);
}

#[test]
fn medium_fact_shrinks_but_stays_within_bounds() {
    let cfg = SlideConfig::default();
    let fact = Fact::new(
        "The shortest war in history was between Britain and Zanzibar on August 27, 1896. \
         Zanzibar surrendered after 38 minutes, and the conflict is remembered mostly as a \
         curiosity of colonial history.",
    );
    let layout = fit_text(&fact, &mut FixedAdvance::default(), &cfg).unwrap();
    assert!(layout.font_size >= 16.0 && layout.font_size < 48.0);
    assert!(layout.total_height <= cfg.max_fact_height());
    assert_eq!(
        layout.total_height,
        layout.lines.len() as f32 * layout.line_advance
    );
}

#[test]
fn picks_largest_fitting_size() {
    let cfg = SlideConfig::default();
    let fact = Fact::new(words(30));
    let mut measure = FixedAdvance::default();
    let layout = fit_text(&fact, &mut measure, &cfg).unwrap();
    let bigger = layout_at(
        &fact,
        layout.font_size + cfg.fact_size_step,
        &mut measure,
        &cfg,
        LayoutOrigin::Fitted,
    );
    assert!(layout.font_size == cfg.fact_size_max || bigger.total_height > cfg.max_fact_height());
}

#[test]
fn over_word_limit_is_rejected_without_measuring() {
    let cfg = SlideConfig::default();
    let mut measure = Counting::default();
    let err = fit_text(&Fact::new(words(41)), &mut measure, &cfg).unwrap_err();
    assert_eq!(err, Rejection::TooManyWords { words: 41, max: 40 });
    assert_eq!(measure.calls, 0);
}

#[test]
fn word_limit_is_inclusive() {
    let cfg = SlideConfig::default();
    assert!(fit_text(&Fact::new(words(40)), &mut FixedAdvance::default(), &cfg).is_ok());
}

#[test]
fn too_tall_fact_is_rejected() {
    let cfg = SlideConfig::default();
    let err = fit_text(&Fact::new(too_tall()), &mut FixedAdvance::default(), &cfg).unwrap_err();
    assert!(matches!(err, Rejection::TooTall { budget, .. } if budget == 324.0));
}

#[test]
fn long_fact_triggers_immediate_reroll() {
    let cfg = SlideConfig::default();
    let long = words(41);
    let mut source = Scripted::new(&[long.as_str(), "Whales are cool."], FALLBACK_FACT);
    let outcome = search_fact_layout(&mut source, &mut FixedAdvance::default(), &cfg);
    let FitOutcome::Fitted { layout, rerolls } = outcome else {
        panic!("expected a fitted layout");
    };
    assert_eq!(rerolls, 1);
    assert_eq!(source.calls, 2);
    assert_eq!(layout.fact.text(), "Whales are cool.");
}

#[test]
fn reroll_recovers_after_mixed_failures() {
    let cfg = SlideConfig::default();
    let long = words(50);
    let tall = too_tall();
    let mut source = Scripted::new(
        &[long.as_str(), tall.as_str(), "Octopuses have three hearts."],
        "unused",
    );
    let outcome = search_fact_layout(&mut source, &mut FixedAdvance::default(), &cfg);
    assert!(matches!(outcome, FitOutcome::Fitted { rerolls: 2, .. }));
}

#[test]
fn exhausts_after_exactly_reroll_limit() {
    let cfg = SlideConfig::default();
    let tall = too_tall();
    let mut source = Scripted::new(&[], &tall);
    let outcome = search_fact_layout(&mut source, &mut FixedAdvance::default(), &cfg);
    assert_eq!(outcome, FitOutcome::Exhausted { rerolls: 10 });
    assert_eq!(source.calls, 11);
}

#[test]
fn exhaustion_falls_back_with_fresh_height() {
    let cfg = SlideConfig::default();
    let tall = too_tall();
    let mut source = Scripted::new(&[], &tall);
    let layout = fit_fact(&mut source, &mut FixedAdvance::default(), &cfg);

    assert_eq!(layout.origin, LayoutOrigin::Fallback);
    assert_eq!(layout.fact.text(), FALLBACK_FACT);
    assert_eq!(layout.font_size, 36.0);
    assert_eq!(layout.lines, vec!["Fun Fact: Whales are", "cool."]);
    assert_eq!(layout.line_advance, 41.0);
    assert_eq!(layout.total_height, 82.0);
    assert!(layout.total_height <= cfg.max_fact_height());
}

#[test]
fn fallback_is_independent_of_prior_attempts() {
    let cfg = SlideConfig::default();
    let long = words(45);
    let tall = too_tall();
    let mut a = Scripted::new(&[], &long);
    let mut b = Scripted::new(&[], &tall);
    let la = fit_fact(&mut a, &mut FixedAdvance::default(), &cfg);
    let lb = fit_fact(&mut b, &mut FixedAdvance::default(), &cfg);
    assert_eq!(la, lb);
}

#[test]
fn zero_reroll_limit_evaluates_only_first_fact() {
    let cfg = SlideConfig {
        reroll_limit: 0,
        ..SlideConfig::default()
    };
    let long = words(41);
    let mut source = Scripted::new(&[], &long);
    let outcome = search_fact_layout(&mut source, &mut FixedAdvance::default(), &cfg);
    assert_eq!(outcome, FitOutcome::Exhausted { rerolls: 0 });
    assert_eq!(source.calls, 1);
}

#[test]
fn title_uses_max_size_when_it_fits() {
    let cfg = SlideConfig::default();
    let t = fit_title("FOD 10/18/26:", &mut FixedAdvance::default(), &cfg);
    assert_eq!(t.font_size, 48.0);
    assert_eq!(t.width, 312.0);
}

#[test]
fn title_shrinks_to_width_budget() {
    let cfg = SlideConfig::default();
    let mut wide = FixedAdvance {
        em_ratio: 1.0,
        height_ratio: 1.0,
    };
    let t = fit_title("FOD 10/18/26:", &mut wide, &cfg);
    assert_eq!(t.font_size, 30.0);
    assert_eq!(t.width, 390.0);
    assert_eq!(t.height, 30.0);
}

#[test]
fn title_bottoms_out_at_min_size() {
    let cfg = SlideConfig::default();
    let mut huge = FixedAdvance {
        em_ratio: 10.0,
        height_ratio: 1.0,
    };
    let t = fit_title("FOD 10/18/26:", &mut huge, &cfg);
    assert_eq!(t.font_size, 16.0);
    assert!(t.width > cfg.title_width);
}
