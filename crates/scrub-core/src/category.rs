//! Response category labels.
//!
//! Callers hand us the label that selected the prompt; the label selects the
//! swap-rule set. Unknown labels degrade to general-only rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ScrubError;

/// Which kind of response the text is, as labeled by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    General,
    PatientHistory,
    Diagnosis,
    Treatment,
    Denial,
    Appeal,
    /// Full appeal letters share the appeal rule set and rejection policy.
    AppealFull,
    Json,
}

impl Category {
    /// Parse a wire label. Unrecognized labels fall back to `General`,
    /// which applies only the shared rule set.
    pub fn from_label(label: &str) -> Self {
        match label {
            "general" => Category::General,
            "patient_history" => Category::PatientHistory,
            "diagnosis" => Category::Diagnosis,
            "treatment" => Category::Treatment,
            "denial" => Category::Denial,
            "appeal" => Category::Appeal,
            "appeal_full" => Category::AppealFull,
            "json" => Category::Json,
            other => {
                tracing::debug!("unknown response category '{}', using general rules", other);
                Category::General
            }
        }
    }

    /// Appeal-type categories are subject to the rejection policy.
    pub fn is_appeal(&self) -> bool {
        matches!(self, Category::Appeal | Category::AppealFull)
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::PatientHistory => "patient_history",
            Category::Diagnosis => "diagnosis",
            Category::Treatment => "treatment",
            Category::Denial => "denial",
            Category::Appeal => "appeal",
            Category::AppealFull => "appeal_full",
            Category::Json => "json",
        }
    }
}

/// Strict parse for callers that want to reject unknown labels instead of
/// falling back to general-only rules.
impl FromStr for Category {
    type Err = ScrubError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "general" | "patient_history" | "diagnosis" | "treatment" | "denial" | "appeal"
            | "appeal_full" | "json" => Ok(Category::from_label(label)),
            other => Err(ScrubError::UnknownCategory(other.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}
