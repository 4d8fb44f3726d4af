//! Cleanup orchestration.
//!
//! The single entry point callers use: given a category label and the raw
//! text, run the rejection policy, trim trailing commentary, fix mispicked
//! acronyms, then apply the substitution engine to a fixpoint. The `json`
//! category routes to the repair ladder instead.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::category::Category;
use crate::engine::apply_swaps;
use crate::json_repair::repair_json;
use crate::policy::check_rejection;
use crate::tla::tla_fixer;
use crate::trim::trim_sections;

/// What cleanup produced. Rejection is deliberately distinct from absence:
/// "policy discarded this" and "there was nothing to process" are different
/// facts, and callers that log or count outcomes need both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "value")]
pub enum CleanupOutcome {
    /// Cleaned text for a text category.
    Text(String),
    /// Parsed value for the `json` category.
    Json(Value),
    /// Discarded by the rejection policy.
    Rejected { reason: String },
    /// The `json` category, but no repair attempt produced a parse.
    Unrepairable,
    /// Absent input.
    Absent,
}

impl CleanupOutcome {
    /// The cleaned text, when the outcome carries one.
    pub fn text(&self) -> Option<&str> {
        match self {
            CleanupOutcome::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn json(&self) -> Option<&Value> {
        match self {
            CleanupOutcome::Json(v) => Some(v),
            _ => None,
        }
    }
}

/// Clean up a model response for the given category label.
///
/// Unrecognized labels fall back to general-only rules. Total: every
/// failure mode is an [`CleanupOutcome`] variant, never a panic.
pub fn cleanup(label: &str, text: Option<&str>) -> CleanupOutcome {
    let Some(text) = text else {
        return CleanupOutcome::Absent;
    };
    let category = Category::from_label(label);

    if category == Category::Json {
        return match repair_json(text) {
            Some(value) => CleanupOutcome::Json(value),
            None => CleanupOutcome::Unrepairable,
        };
    }

    // Rejection is a hard stop, checked before any transformation.
    if let Some(rejection) = check_rejection(category, text) {
        return CleanupOutcome::Rejected {
            reason: rejection.reason.to_string(),
        };
    }

    let trimmed = trim_sections(Some(text));
    let fixed = tla_fixer(trimmed.as_deref());
    match apply_swaps(category, fixed.as_deref()) {
        Some(cleaned) => CleanupOutcome::Text(cleaned),
        // Unreachable in practice: absence was handled above and every
        // stage propagates presence.
        None => CleanupOutcome::Absent,
    }
}
