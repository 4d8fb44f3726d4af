//! Trailing-section trimmer.
//!
//! Models append meta-commentary after the useful part of a response: a
//! final "Note:" line, a "Key Compliance Notes" block, a "Why This Works"
//! pitch. Each removal is anchored to end-of-text and applied in a fixed
//! order, each on the output of the previous one.

use regex::Regex;
use std::sync::LazyLock;

/// A line starting with optional bold markers then "Note", through the end.
/// The line may be the very first line, so a response that *is* only a note
/// trims to empty.
static TRAILING_NOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)(?:\A|\n)\s*\**\s*Note.*\z").unwrap());

/// A literal "Key Compliance Notes" marker, through the end.
static COMPLIANCE_NOTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\s*\**\s*Key Compliance Notes.*\z").unwrap());

/// A "Why This Works" heading, through the end.
static WHY_THIS_WORKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\s*#*\**\s*Why This Works.*\z").unwrap());

/// Remove trailing commentary sections. Order matters: each removal shrinks
/// the text that later removals scan.
pub fn trim_sections(text: Option<&str>) -> Option<String> {
    let text = text?;
    let out = TRAILING_NOTE.replace(text, "");
    let out = COMPLIANCE_NOTES.replace(&out, "");
    let out = WHY_THIS_WORKS.replace(&out, "");
    Some(out.into_owned())
}
