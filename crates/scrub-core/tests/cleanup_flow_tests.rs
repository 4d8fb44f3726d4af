//! End-to-end tests for the cleanup pipeline.
//!
//! Exercises the public entry points the way a caller would: category
//! cleanup, JSON repair, reasoning split and URL filtering with a stub
//! probe.

use scrub_core::{
    cleanup, is_well_formed_reasoning, repair_json, split_reasoning, tla_fixer, url_fixer,
    Category, CleanupOutcome, UrlProbe,
};
use serde_json::json;

#[test]
fn cleanup_is_idempotent_per_category() {
    let inputs = [
        (
            "denial",
            "Review findings: The patient requires care... The reviewers determined that coverage applies.",
        ),
        (
            "treatment",
            "The treatment that was denied and being requested is his knee brace.",
        ),
        (
            "appeal",
            "Dear Independent Medical Reviewers, coverage has been approved.",
        ),
    ];
    for (label, input) in inputs {
        let once = match cleanup(label, Some(input)) {
            CleanupOutcome::Text(t) => t,
            other => panic!("expected text for {label}, got {other:?}"),
        };
        let twice = match cleanup(label, Some(&once)) {
            CleanupOutcome::Text(t) => t,
            other => panic!("expected text for {label}, got {other:?}"),
        };
        assert_eq!(once, twice, "cleanup not idempotent for {label}");
    }
}

#[test]
fn note_only_response_cleans_to_empty() {
    let out = cleanup("general", Some("Note that this is irrelevant information."));
    assert_eq!(out, CleanupOutcome::Text(String::new()));
}

#[test]
fn tla_fixer_corrects_every_occurrence() {
    let fixed = tla_fixer(Some("Farts Farts Magic (FFG). FFG is."));
    assert_eq!(fixed.as_deref(), Some("Farts Farts Magic (FFM). FFM is."));
}

#[test]
fn tla_fixer_leaves_correct_acronym_alone() {
    let text = "Approved for Patient J R T (JRT)";
    assert_eq!(tla_fixer(Some(text)).as_deref(), Some(text));
}

#[test]
fn tla_fixer_propagates_absence() {
    assert_eq!(tla_fixer(None), None);
}

#[test]
fn json_repair_handles_truncated_record() {
    let value = repair_json(r#"{"key1": "value1", "key2": "value2","#).unwrap();
    assert_eq!(value, json!({"key1": "value1", "key2": "value2"}));
}

#[test]
fn json_repair_quotes_bare_identifiers() {
    let value = repair_json("{key1: value1, key2: value2}").unwrap();
    assert_eq!(value, json!({"key1": "value1", "key2": "value2"}));
}

#[test]
fn json_repair_gives_up_without_panicking() {
    assert_eq!(repair_json("not json at all"), None);
}

#[test]
fn split_without_tags_returns_whole_answer() {
    let (reasoning, answer) = split_reasoning("no tags here");
    assert_eq!(reasoning, None);
    assert_eq!(answer.as_deref(), Some("no tags here"));
}

#[test]
fn split_with_tags_separates_reasoning_and_answer() {
    let (reasoning, answer) = split_reasoning("<think>inner</think>trailing answer");
    assert!(reasoning.unwrap().contains("inner"));
    assert_eq!(answer.as_deref(), Some("trailing answer"));
}

#[test]
fn well_formedness_requires_balance_and_trailing_text() {
    // Mismatched tag counts.
    assert!(!is_well_formed_reasoning(
        "<think>open twice<think>r</think>a long enough answer"
    ));
    // Balanced, but ten or fewer trailing characters.
    assert!(!is_well_formed_reasoning("<think>r</think>short ans."));
    // Balanced with a real answer.
    assert!(is_well_formed_reasoning(
        "<think>r</think>a sufficiently long answer"
    ));
}

#[test]
fn appeal_rejection_depends_on_companion_phrase() {
    let citing = "Per Section 1374.72 this must be covered.";
    assert!(matches!(
        cleanup("appeal", Some(citing)),
        CleanupOutcome::Rejected { .. }
    ));

    let citing_mental_health =
        "Per Section 1374.72 this mental health treatment must be covered.";
    assert!(matches!(
        cleanup("appeal", Some(citing_mental_health)),
        CleanupOutcome::Text(_)
    ));
}

#[test]
fn rejection_is_distinct_from_absence() {
    let rejected = cleanup("appeal", Some("Per Section 1374.72 this must be covered."));
    let absent = cleanup("appeal", None);
    assert_ne!(rejected, absent);
    assert_eq!(absent, CleanupOutcome::Absent);
}

/// Probe with canned answers, standing in for the network-backed one.
struct StubProbe;

impl UrlProbe for StubProbe {
    fn is_valid(&self, url: &str) -> bool {
        !url.contains("invalidurl.fake")
    }
}

#[test]
fn url_fixer_removes_only_the_unreachable_url() {
    let out = url_fixer(
        Some("Visit https://invalidurl.fake and https://validurl.com for details."),
        &StubProbe,
    )
    .unwrap();
    assert!(!out.contains("https://invalidurl.fake"));
    assert!(out.contains("https://validurl.com"));
}

#[test]
fn outcome_serializes_with_distinct_tags() {
    let rejected = cleanup("appeal", Some("Per Section 1374.72 this must be covered."));
    let encoded = serde_json::to_string(&rejected).unwrap();
    assert!(encoded.contains("rejected"));

    let absent = serde_json::to_string(&CleanupOutcome::Absent).unwrap();
    assert!(absent.contains("absent"));
}

#[test]
fn category_labels_round_trip_through_serde() {
    let encoded = serde_json::to_string(&Category::PatientHistory).unwrap();
    assert_eq!(encoded, "\"patient_history\"");
    let decoded: Category = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, Category::PatientHistory);
}
