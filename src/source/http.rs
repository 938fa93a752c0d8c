use std::time::Duration;

use anyhow::Context as _;

use crate::foundation::config::SlideConfig;
use crate::foundation::error::{FodError, FodResult};
use crate::source::fact::{Fact, FactSource, parse_fact_body};

/// Random-fact feed queried by [`HttpFactSource::default_endpoint`].
pub const FACT_ENDPOINT: &str = "https://uselessfacts.jsph.pl/random.json?language=en";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches facts from a JSON feed over HTTP, one GET per fact.
///
/// Any failure (transport, status, body) is logged and replaced by the fallback fact.
pub struct HttpFactSource {
    client: reqwest::blocking::Client,
    url: String,
    fallback: Fact,
}

impl HttpFactSource {
    pub fn new(url: impl Into<String>, fallback: &str) -> FodResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("fod/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("build http client")?;
        Ok(Self {
            client,
            url: url.into(),
            fallback: Fact::new(fallback),
        })
    }

    /// Source for [`FACT_ENDPOINT`] falling back to `cfg.fallback_fact`.
    pub fn default_endpoint(cfg: &SlideConfig) -> FodResult<Self> {
        Self::new(FACT_ENDPOINT, &cfg.fallback_fact)
    }

    fn try_fetch(&self) -> FodResult<Fact> {
        let body = self
            .client
            .get(&self.url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.text())
            .map_err(|e| FodError::fact(format!("GET {}: {e}", self.url)))?;
        parse_fact_body(&body)
    }

    /// Fetch one fact, never failing.
    #[tracing::instrument(skip(self), fields(url = %self.url))]
    pub fn fetch_fact(&self) -> Fact {
        match self.try_fetch() {
            Ok(fact) => fact,
            Err(e) => {
                tracing::warn!(error = %e, "error fetching fact, using fallback");
                self.fallback.clone()
            }
        }
    }
}

impl FactSource for HttpFactSource {
    fn next_fact(&mut self) -> Fact {
        self.fetch_fact()
    }
}
