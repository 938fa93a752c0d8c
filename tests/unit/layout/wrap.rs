use super::*;
use crate::layout::measure::FixedAdvance;

fn chars() -> FixedAdvance {
    // One pixel per char at size 1.
    FixedAdvance {
        em_ratio: 1.0,
        height_ratio: 1.0,
    }
}

#[test]
fn short_text_is_one_line() {
    let lines = wrap_words("Whales are cool.", 1.0, 400.0, &mut chars());
    assert_eq!(lines, vec!["Whales are cool."]);
}

#[test]
fn breaks_before_word_that_would_overflow() {
    let lines = wrap_words("aaa bbb ccc ddd", 1.0, 7.0, &mut chars());
    assert_eq!(lines, vec!["aaa bbb", "ccc ddd"]);
}

#[test]
fn line_exactly_at_budget_is_kept() {
    let lines = wrap_words("ab cd ef", 1.0, 5.0, &mut chars());
    assert_eq!(lines, vec!["ab cd", "ef"]);
}

#[test]
fn overlong_word_overflows_its_own_line() {
    let lines = wrap_words("supercalifragilistic is long", 1.0, 8.0, &mut chars());
    assert_eq!(lines, vec!["supercalifragilistic", "is long"]);
    assert!(lines.iter().all(|l| !l.is_empty()));
}

#[test]
fn leading_overlong_word_does_not_emit_empty_line() {
    let lines = wrap_words("abcdefghij k", 1.0, 3.0, &mut chars());
    assert_eq!(lines, vec!["abcdefghij", "k"]);
}

#[test]
fn empty_text_has_no_lines() {
    assert!(wrap_words("   ", 1.0, 10.0, &mut chars()).is_empty());
}

#[test]
fn rejoined_lines_reconstruct_word_sequence() {
    let text = "The  quick brown\tfox jumps over the lazy dog while the cat watches from a sunny \
                windowsill and wonders why anyone would jump over anything at all";
    let words: Vec<&str> = text.split_whitespace().collect();
    for budget in [4.0, 9.0, 17.0, 33.0, 400.0] {
        let lines = wrap_words(text, 1.0, budget, &mut chars());
        let joined = lines.join(" ");
        let rejoined: Vec<&str> = joined.split_whitespace().collect();
        assert_eq!(rejoined, words, "budget {budget}");
        assert!(lines.iter().all(|l| l.trim() == l));
    }
}

#[test]
fn larger_size_never_produces_fewer_lines() {
    let text = "one two three four five six seven eight nine ten eleven twelve";
    let mut measure = FixedAdvance::default();
    let small = wrap_words(text, 16.0, 400.0, &mut measure).len();
    let large = wrap_words(text, 48.0, 400.0, &mut measure).len();
    assert!(large >= small);
}
