//! HTTP-backed URL probing.
//!
//! Fetches a candidate URL with a realistic browser user-agent (some hosts
//! block the default library UA). Two failure shapes need care: hosts that
//! return 200 with a "not found" body, and URLs that picked up trailing
//! sentence punctuation from the surrounding prose. The punctuation retry
//! is a bounded loop over the shrinking candidate.

use anyhow::{Context, Result};
use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;

use scrub_core::UrlProbe;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/96.0.4664.45 Safari/537.36";

const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

/// Punctuation a URL can pick up from surrounding prose.
const TRAILING_PUNCT: [char; 6] = ['.', ':', ';', ',', '?', '>'];

/// Response bodies from hosts that return 200 when they mean 404.
static SOFT_FAILURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        "(?i)^(?:the page you are trying to reach is not available\\. please check the url and try again\\.|the requested article is not currently available on this site\\.)",
    )
    .unwrap()
});

/// Drop exactly one trailing punctuation character, if there is one and
/// something is left. One character per call: a URL whose valid form ends
/// in a period must be probed before the period comes off too.
fn strip_trailing_punct(url: &str) -> Option<&str> {
    let stripped = url.strip_suffix(TRAILING_PUNCT)?;
    (!stripped.is_empty()).then_some(stripped)
}

/// [`UrlProbe`] implementation that actually fetches.
pub struct HttpUrlProbe {
    client: reqwest::blocking::Client,
}

impl HttpUrlProbe {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()
            .context("failed to build http client for url probing")?;
        Ok(Self { client })
    }

    /// One fetch attempt. Non-2xx and soft-failure bodies are errors so the
    /// caller's punctuation retry handles them uniformly.
    fn fetch_ok(&self, url: &str) -> Result<bool> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("status {status}");
        }
        // PDF bodies are not prose; a 2xx is enough.
        if url.contains(".pdf") {
            return Ok(true);
        }
        let body = response.text()?;
        if SOFT_FAILURE.is_match(&body) {
            anyhow::bail!("got a 200 but the body says not found");
        }
        Ok(true)
    }
}

impl UrlProbe for HttpUrlProbe {
    fn is_valid(&self, url: &str) -> bool {
        let mut candidate = url.to_string();
        loop {
            match self.fetch_ok(&candidate) {
                Ok(valid) => return valid,
                Err(e) => {
                    let shorter = strip_trailing_punct(&candidate).map(str::to_string);
                    match shorter {
                        Some(next) => {
                            tracing::debug!(url = %candidate, error = %e, retry = %next, "fetch failed, retrying without trailing punctuation");
                            candidate = next;
                        }
                        None => {
                            tracing::warn!(url = %candidate, error = %e, "bad url with nothing left to strip");
                            return false;
                        }
                    }
                }
            }
        }
    }
}
