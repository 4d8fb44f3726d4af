//! Reasoning/answer splitting.
//!
//! Reasoning models expose their deliberation in `<think>` or `<thinking>`
//! sections before the answer. The split point is the end of the last
//! top-level closing tag, found by a depth-counting scan over the ordered
//! open/close token positions, which handles any self-nesting depth.

const THINK_OPEN: &str = "<think>";
const THINK_CLOSE: &str = "</think>";
const THINKING_OPEN: &str = "<thinking>";
const THINKING_CLOSE: &str = "</thinking>";

const ANSWER_OPEN: &str = "<answer>";
const ANSWER_CLOSE: &str = "</answer>";

/// Minimum number of characters that must follow the last closing tag for
/// the response to count as well-formed.
const MIN_TRAILING: usize = 10;

/// End offsets of every top-level closing tag for one tag spelling.
///
/// Token matching is exact, so `<think>` never fires inside `<thinking>`
/// and `</think>` never fires inside `</thinking>`.
fn top_level_close_ends(text: &str, open: &str, close: &str) -> Vec<usize> {
    let mut events: Vec<(usize, bool)> = text
        .match_indices(open)
        .map(|(pos, _)| (pos, true))
        .chain(text.match_indices(close).map(|(pos, _)| (pos, false)))
        .collect();
    events.sort_unstable_by_key(|(pos, _)| *pos);

    let mut depth = 0usize;
    let mut ends = Vec::new();
    for (pos, is_open) in events {
        if is_open {
            depth += 1;
        } else {
            // A stray close at depth zero still marks a top-level end.
            depth = depth.saturating_sub(1);
            if depth == 0 {
                ends.push(pos + close.len());
            }
        }
    }
    ends
}

fn last_top_level_close(text: &str) -> Option<usize> {
    top_level_close_ends(text, THINK_OPEN, THINK_CLOSE)
        .into_iter()
        .chain(top_level_close_ends(text, THINKING_OPEN, THINKING_CLOSE))
        .max()
}

fn has_any_tag(text: &str) -> bool {
    [THINK_OPEN, THINK_CLOSE, THINKING_OPEN, THINKING_CLOSE]
        .iter()
        .any(|token| text.contains(token))
}

fn strip_think_tokens(text: &str) -> String {
    // Longer spellings first so `</thinking>` is not half-eaten.
    text.replace(THINKING_OPEN, "")
        .replace(THINKING_CLOSE, "")
        .replace(THINK_OPEN, "")
        .replace(THINK_CLOSE, "")
}

/// Split a raw response into (reasoning, answer).
///
/// No tag markers at all means there was no exposed reasoning: the answer is
/// the whole input. Residual tag tokens are stripped from both parts.
pub fn split_reasoning(text: &str) -> (Option<String>, Option<String>) {
    if text.is_empty() {
        return (None, None);
    }

    if !has_any_tag(text) {
        tracing::debug!("no thinking tags found, returning raw answer");
        let answer = text
            .replace(ANSWER_OPEN, "")
            .replace(ANSWER_CLOSE, "")
            .trim()
            .to_string();
        return (None, Some(answer));
    }

    match last_top_level_close(text) {
        Some(end) => {
            let reasoning = strip_think_tokens(&text[..end]).trim().to_string();
            let answer = strip_think_tokens(&text[end..])
                .replace(ANSWER_OPEN, "")
                .replace(ANSWER_CLOSE, "")
                .trim()
                .to_string();
            (Some(reasoning), Some(answer))
        }
        None => {
            // Tags present but never closed at top level: nothing reliable
            // to call reasoning, so hand back the text minus the tokens.
            let answer = strip_think_tokens(text)
                .replace(ANSWER_OPEN, "")
                .replace(ANSWER_CLOSE, "")
                .trim()
                .to_string();
            (None, Some(answer))
        }
    }
}

/// Whether the response has usable reasoning structure: balanced tag counts
/// for both spellings and more than [`MIN_TRAILING`] characters of answer
/// after the last top-level closing tag.
pub fn is_well_formed_reasoning(text: &str) -> bool {
    let think_balanced =
        text.matches(THINK_OPEN).count() == text.matches(THINK_CLOSE).count();
    let thinking_balanced =
        text.matches(THINKING_OPEN).count() == text.matches(THINKING_CLOSE).count();
    if !think_balanced || !thinking_balanced {
        return false;
    }

    match last_top_level_close(text) {
        Some(end) => text[end..].chars().count() > MIN_TRAILING,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_tags_whole_input_is_answer() {
        let (reasoning, answer) = split_reasoning("no tags here");
        assert_eq!(reasoning, None);
        assert_eq!(answer.as_deref(), Some("no tags here"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(split_reasoning(""), (None, None));
    }

    #[test]
    fn test_simple_split() {
        let (reasoning, answer) = split_reasoning("<think>inner</think>trailing answer");
        assert_eq!(reasoning.as_deref(), Some("inner"));
        assert_eq!(answer.as_deref(), Some("trailing answer"));
    }

    #[test]
    fn test_thinking_spelling() {
        let (reasoning, answer) =
            split_reasoning("<thinking>weighing options</thinking>\nThe answer is no.");
        assert_eq!(reasoning.as_deref(), Some("weighing options"));
        assert_eq!(answer.as_deref(), Some("The answer is no."));
    }

    #[test]
    fn test_nested_same_spelling() {
        let (reasoning, answer) = split_reasoning(
            "<think>outer <think>inner</think> more</think>final answer here",
        );
        assert_eq!(reasoning.as_deref(), Some("outer inner more"));
        assert_eq!(answer.as_deref(), Some("final answer here"));
    }

    #[test]
    fn test_deeply_nested() {
        let (reasoning, answer) = split_reasoning(
            "<think>a<think>b<think>c</think>d</think>e</think>done",
        );
        assert_eq!(reasoning.as_deref(), Some("abcde"));
        assert_eq!(answer.as_deref(), Some("done"));
    }

    #[test]
    fn test_multiple_top_level_sections() {
        let (reasoning, answer) =
            split_reasoning("<think>one</think>mid<think>two</think>answer");
        assert_eq!(reasoning.as_deref(), Some("onemidtwo"));
        assert_eq!(answer.as_deref(), Some("answer"));
    }

    #[test]
    fn test_mixed_spellings_last_close_wins() {
        let (reasoning, answer) =
            split_reasoning("<think>a</think><thinking>b</thinking>the answer");
        assert_eq!(reasoning.as_deref(), Some("ab"));
        assert_eq!(answer.as_deref(), Some("the answer"));
    }

    #[test]
    fn test_answer_tags_stripped() {
        let (_, answer) =
            split_reasoning("<think>r</think><answer>the answer</answer>");
        assert_eq!(answer.as_deref(), Some("the answer"));
    }

    #[test]
    fn test_unclosed_tag_yields_no_reasoning() {
        let (reasoning, answer) = split_reasoning("<think>never closed, then text");
        assert_eq!(reasoning, None);
        assert_eq!(answer.as_deref(), Some("never closed, then text"));
    }

    #[test]
    fn test_well_formed() {
        assert!(is_well_formed_reasoning(
            "<think>r</think>a sufficiently long answer"
        ));
    }

    #[test]
    fn test_mismatched_counts_not_well_formed() {
        assert!(!is_well_formed_reasoning(
            "<think><think>r</think>long enough answer text"
        ));
    }

    #[test]
    fn test_short_trailing_not_well_formed() {
        // Exactly ten characters after the close is still too short.
        assert!(!is_well_formed_reasoning("<think>r</think>1234567890"));
        assert!(is_well_formed_reasoning("<think>r</think>12345678901"));
    }

    #[test]
    fn test_trailing_length_counts_characters_not_bytes() {
        // Ten accented characters take twenty bytes but are still too
        // short an answer.
        assert!(!is_well_formed_reasoning("<think>r</think>éééééééééé"));
        assert!(is_well_formed_reasoning("<think>r</think>ééééééééééé"));
    }

    #[test]
    fn test_no_tags_not_well_formed() {
        assert!(!is_well_formed_reasoning("just an answer"));
    }
}
