//! URL filtering.
//!
//! Models cite URLs that do not exist. The core only extracts URL-shaped
//! substrings and deletes the ones a probe rejects; actually fetching them
//! is network I/O and lives behind the [`UrlProbe`] seam (implemented by
//! `scrub-net`).

use regex::Regex;
use std::sync::LazyLock;

/// Validity oracle for a single URL. Implementations may block on the
/// network; they must never panic and should degrade to `false`.
pub trait UrlProbe: Send + Sync {
    fn is_valid(&self, url: &str) -> bool;
}

/// URL-shaped substrings: scheme up to whitespace or markup delimiters.
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"https?://[^\s<>"')\]]+"#).unwrap());

/// Remove every URL the probe reports invalid, leaving the surrounding
/// text (including whitespace) intact. Absent input passes through.
pub fn url_fixer(text: Option<&str>, probe: &dyn UrlProbe) -> Option<String> {
    let text = text?;

    let mut result = String::with_capacity(text.len());
    let mut cursor = 0;
    for m in URL_PATTERN.find_iter(text) {
        result.push_str(&text[cursor..m.start()]);
        if probe.is_valid(m.as_str()) {
            result.push_str(m.as_str());
        } else {
            tracing::debug!(url = m.as_str(), "dropping unreachable url");
        }
        cursor = m.end();
    }
    result.push_str(&text[cursor..]);
    Some(result)
}
