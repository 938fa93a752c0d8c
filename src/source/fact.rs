use serde::Deserialize;

use crate::foundation::error::{FodError, FodResult};

/// A short piece of trivia text.
///
/// Facts are never edited after construction; a reroll replaces the whole value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fact {
    text: String,
}

impl Fact {
    /// Build a fact, replacing backticks with plain apostrophes.
    pub fn new(text: impl Into<String>) -> Self {
        let text: String = text.into();
        Self {
            text: text.replace('`', "'"),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

impl std::fmt::Display for Fact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Something that can hand out facts on demand.
///
/// The layout search pulls a fresh fact every time it rerolls, so implementations are expected
/// to always return *something*; failures are absorbed into a fallback fact.
pub trait FactSource {
    fn next_fact(&mut self) -> Fact;
}

impl<F> FactSource for F
where
    F: FnMut() -> Fact,
{
    fn next_fact(&mut self) -> Fact {
        self()
    }
}

#[derive(Deserialize)]
struct FactPayload {
    text: String,
}

/// Decode a random-fact JSON body (`{"text": "..."}`); other fields are ignored.
pub fn parse_fact_body(body: &str) -> FodResult<Fact> {
    let payload: FactPayload = serde_json::from_str(body)
        .map_err(|e| FodError::fact(format!("decode fact body: {e}")))?;
    if payload.text.trim().is_empty() {
        return Err(FodError::fact("fact text is empty"));
    }
    Ok(Fact::new(payload.text))
}
