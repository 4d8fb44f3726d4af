//! Three-letter-acronym repair.
//!
//! Models like to introduce "Some Proper Phrase (SPX)" with a bracketed
//! token that does not match the phrase's initials, then keep using the
//! wrong token. Every mismatched token is rewritten to the acronym computed
//! from the three words.

use regex::Regex;
use std::sync::LazyLock;

/// Three capitalized words followed by a parenthesized 3-letter token.
/// Each word is an initial capital plus at least one word character, so
/// single-letter runs like "J R T" are deliberately not candidates.
static TLA_CANDIDATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z])\w+ ([A-Z])\w+ ([A-Z])\w+ \(([A-Z]{3})\)").unwrap()
});

/// Fix incorrectly picked TLAs. Correct acronyms are left untouched;
/// absent input passes through.
pub fn tla_fixer(text: Option<&str>) -> Option<String> {
    let text = text?;

    // Collect candidates up front; fixing one token must not re-anchor the
    // scan for the others.
    let candidates: Vec<(String, String)> = TLA_CANDIDATE
        .captures_iter(text)
        .map(|caps| {
            let acronym = format!("{}{}{}", &caps[1], &caps[2], &caps[3]);
            (acronym, caps[4].to_string())
        })
        .collect();

    let mut result = text.to_string();
    for (acronym, observed) in candidates {
        if acronym == observed {
            continue;
        }
        // Rewrite every use of the wrong token that follows a sentence
        // boundary, opening parenthesis or space. The regex crate has no
        // lookbehind, so the boundary is captured and re-emitted.
        let wrong = Regex::new(&format!(r"([.( ]){}", regex::escape(&observed)))
            .expect("escaped token is a valid pattern");
        result = wrong
            .replace_all(&result, format!("${{1}}{acronym}"))
            .into_owned();
    }
    Some(result)
}
