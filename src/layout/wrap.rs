use crate::layout::measure::TextMeasure;

/// Greedily pack the words of `text` into lines no wider than `max_width` at `size_px`.
///
/// Words are split on whitespace and rejoined with single spaces. A word wider than the budget
/// gets a line of its own and overflows it; words are never split and no empty lines are
/// produced.
pub fn wrap_words(
    text: &str,
    size_px: f32,
    max_width: f32,
    measure: &mut impl TextMeasure,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }

        let candidate = format!("{line} {word}");
        if measure.advance(&candidate, size_px) <= max_width {
            line = candidate;
        } else {
            lines.push(std::mem::replace(&mut line, word.to_owned()));
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
#[path = "../../tests/unit/layout/wrap.rs"]
mod tests;
