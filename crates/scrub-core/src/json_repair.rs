//! Best-effort JSON repair.
//!
//! Models rarely close their JSON records: trailing commas, a missing final
//! brace, an unterminated string, bare identifiers for keys and values,
//! `None` where `null` belongs. The repair is a fixed ladder of
//! transform-then-strict-parse stages, not a grammar: the input is assumed
//! to be near-JSON from a cooperative generator. Total and exception-free;
//! final failure is `None`, never a panic.

use regex::{Captures, Regex};
use serde_json::Value;
use std::sync::LazyLock;

/// Language-idiom null synonyms, as whole words.
static NULL_SYNONYM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:None|undefined)\b").unwrap());

/// Unicode "Other" characters: control, format (zero-width joiners and
/// friends), unassigned. Newlines are kept.
static OTHER_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{C}--\n]").unwrap());

/// Bare identifier key right after an object/element separator.
static BARE_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([{,])\s*([A-Za-z_]\w*)\s*:").unwrap());

/// Bare identifier value (spaces allowed inside) running up to the next
/// separator or closing bracket.
static BARE_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":\s*([A-Za-z_]\w*(?:[ \t]+\w+)*)\s*([,}\]])").unwrap());

/// Bare key and value with the colon between them missing.
static MISSING_COLON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([{,]\s*)([A-Za-z_]\w*)[ \t]+([^",}\]]+)"#).unwrap());

/// Repair a near-JSON record into a parsed value.
///
/// Returns `None` when every repair attempt fails; never panics and never
/// returns an error.
pub fn repair_json(text: &str) -> Option<Value> {
    // Models wrap records in prose; keep only the brace-delimited span when
    // one exists.
    let text = match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    };

    // Normalize: null synonyms, then control and format characters
    // (newlines survive).
    let data = NULL_SYNONYM.replace_all(text, "null");
    let data = OTHER_CHARS.replace_all(&data, "");

    // Clean up the ending: exactly one trailing comma, and a comma that
    // runs straight into a closing brace.
    let mut data = data.trim_end().to_string();
    if let Some(stripped) = data.strip_suffix(',') {
        data = stripped.to_string();
    }
    data = data.replace(",}", "}");

    if let Ok(value) = serde_json::from_str(&data) {
        return Some(value);
    }

    let data = fix_missing_quotes(&data);
    if let Ok(value) = serde_json::from_str(&data) {
        tracing::debug!("json parsed after quoting repair");
        return Some(value);
    }

    // The record usually just lost its final brace, or its final quote and
    // brace; try both endings.
    if let Ok(value) = serde_json::from_str(&format!("{data}}}")) {
        tracing::debug!("json parsed with closing brace appended");
        return Some(value);
    }
    if let Ok(value) = serde_json::from_str(&format!("{data}\"}}")) {
        tracing::debug!("json parsed with closing quote and brace appended");
        return Some(value);
    }

    None
}

/// Quote bare identifier keys and values. `null`, `true` and `false` are
/// left alone.
fn fix_missing_quotes(json: &str) -> String {
    let json = BARE_KEY.replace_all(json, |caps: &Captures| {
        format!("{}\"{}\":", &caps[1], &caps[2])
    });
    BARE_VALUE
        .replace_all(&json, |caps: &Captures| {
            let value = &caps[1];
            if matches!(value, "null" | "true" | "false") {
                caps[0].to_string()
            } else {
                format!(": \"{}\"{}", value, &caps[2])
            }
        })
        .into_owned()
}

/// Insert the colon missing between a bare key and its value. Shipped as a
/// standalone helper; the repair ladder does not call it.
pub fn fix_missing_colons(json: &str) -> String {
    MISSING_COLON
        .replace_all(json, |caps: &Captures| {
            format!("{}\"{}\": {}", &caps[1], &caps[2], &caps[3])
        })
        .into_owned()
}
