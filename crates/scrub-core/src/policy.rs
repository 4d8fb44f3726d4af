//! Category rejection policy.
//!
//! Some responses are discarded outright by business rule, before any
//! transformation runs: an appeal that leans on the mental-health parity
//! mandate without the case being about mental health is unusable, and no
//! amount of swapping fixes it.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::category::Category;

/// Why a response was rejected. Distinct from absence so callers can tell
/// "policy said no" apart from "nothing to process".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub reason: &'static str,
}

/// The statute appeal letters keep citing out of context.
static PARITY_CITATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Section\s+1374\.72").unwrap());

const REQUIRED_COMPANION: &str = "mental health";

/// Check the single parameterized rejection rule.
///
/// Both appeal-type categories currently share one rule; the source carried
/// two identical copies, and the intended divergence is unknown, so the rule
/// is shared rather than guessed apart.
pub fn check_rejection(category: Category, text: &str) -> Option<Rejection> {
    if !category.is_appeal() {
        return None;
    }
    if PARITY_CITATION.is_match(text)
        && !text.to_lowercase().contains(REQUIRED_COMPANION)
    {
        tracing::debug!(category = %category, "rejected: parity citation without mental-health context");
        return Some(Rejection {
            reason: "parity citation without mental-health context",
        });
    }
    None
}
