//! Swap-rule tables.
//!
//! Each category owns an ordered list of (pattern, replacement) rules; a
//! shared general list is always in effect. Tables are built once at first
//! use and never mutated. Patterns match case-insensitively against the
//! whole text; replacements are literal (never expanded), so placeholder
//! text like `$insurancecompany` survives as-is.

use regex::{NoExpand, Regex};
use std::sync::LazyLock;

use crate::category::Category;

/// One ordered substitution rule.
pub struct SwapRule {
    regex: Regex,
    pattern: &'static str,
    replacement: &'static str,
}

impl SwapRule {
    fn new(pattern: &'static str, replacement: &'static str) -> Self {
        let regex = Regex::new(&format!("(?i){pattern}"))
            .unwrap_or_else(|e| panic!("bad swap pattern {pattern:?}: {e}"));
        Self {
            regex,
            pattern,
            replacement,
        }
    }

    /// The source pattern, used as the identity for merge collisions.
    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    pub fn replacement(&self) -> &'static str {
        self.replacement
    }

    /// Apply this rule everywhere it matches. The replacement is inserted
    /// literally.
    pub fn apply(&self, text: &str) -> String {
        self.regex
            .replace_all(text, NoExpand(self.replacement))
            .into_owned()
    }
}

fn build(rules: &[(&'static str, &'static str)]) -> Vec<SwapRule> {
    rules.iter().map(|(p, r)| SwapRule::new(p, r)).collect()
}

/// Rules applied to every category.
static GENERAL: LazyLock<Vec<SwapRule>> = LazyLock::new(|| {
    build(&[
        (
            "Note that the information is inferred based on the reviewer's findings, but the language used is general rather than directly referencing the reviewer's findings\\.",
            "",
        ),
        (
            "Based on the information provided, the following factors from the patient's history appear to have been relevant in the determination of",
            "",
        ),
        ("Based on the information provided, ", ""),
        (
            "and the reviewer's clinical experience and expertise in treating such cases",
            "",
        ),
        (
            "Please note: This letter is a hypothetical response and does not reflect the actual policies or decisions of any specific insurance company\\. It is intended for illustrative purposes only\\.",
            "",
        ),
        (
            "Please note: This letter is a hypothetical response and does not reflect the actual policies or decisions of any specific insurance company\\. It is intended for informational purposes only and should not be used as a substitute for professional legal or medical advice\\.",
            "",
        ),
        ("a individual", "an individual"),
    ])
});

static PATIENT_HISTORY: LazyLock<Vec<SwapRule>> = LazyLock::new(|| {
    build(&[
        (
            "There is no information provided about the patient's demographic details\\.",
            "",
        ),
        (
            "In summary, the relevant factors of the patient's history include symptoms or findings suggestive of ",
            "",
        ),
        (
            "In summary, the relevant factors of the patient's history include",
            "",
        ),
        ("The relevant factors of the patient's history include:", ""),
        (
            "Based on this information, it can be inferred that the patient's relevant history include",
            "",
        ),
    ])
});

static DIAGNOSIS: LazyLock<Vec<SwapRule>> = LazyLock::new(|| {
    build(&[
        ("The diagnosis is ", ""),
        ("The diagnosis was ", ""),
        ("The diagnosis in this case is ", ""),
        ("the enrollees ", ""),
        (r"^\s*(her|his|their) ", ""),
        ("  ", " "),
    ])
});

static TREATMENT: LazyLock<Vec<SwapRule>> = LazyLock::new(|| {
    build(&[
        (
            "The treatment that was denied and being requested is the authorization and coverage for ",
            "",
        ),
        ("The treatment that was denied and being requested is ", ""),
        (r"\s*The treatment denied was an ", ""),
        (r"\s*The treatment denied is ", ""),
        (r"\s*the enrollees ", ""),
        (r"\s*The treatment denied in this case is ", ""),
        (r"\s*The treatment denied in this case was ", ""),
        (r"\s*The treatment in this case is ", ""),
        (r"\s*The treatment in this case was ", ""),
        (r"\s*The treatment was ", ""),
        (r"\s*The treatment is ", ""),
        (r"^\s*(her|his|their) ", ""),
        (r"\s*The treatment denied was authorization and coverage for ", ""),
        (r"\s*The treatment denied was ", ""),
        ("  ", " "),
    ])
});

static DENIAL: LazyLock<Vec<SwapRule>> = LazyLock::new(|| {
    build(&[
        ("Esteemed Members of the Review Board", "$insurancecompany"),
        (
            "The Health Plans denial was overturned due to the reviewers determining that the requested services were likely to be more beneficial for treatment of the enrollees medical condition than any available standard therapy\\.",
            "",
        ),
        (
            "independent medical review findings were nature of statutory criteria/case summary:",
            "",
        ),
        ("will be overturned.*", ""),
        ("the independent medical reviewer", "we"),
        ("The physician reviewer", "we"),
        ("We always say no to surgeries\\.", ""),
        (
            "The reason was originally denied was",
            "Your request is denied because",
        ),
        ("Therefore, the Health Plans denial should be overturned\\.", ""),
        ("We thank the reviewer for their assessment of this case\\.", ""),
        ("The reviewers determined that", "We do not believe that"),
        ("should be overturned", "should stand."),
        (
            "that denying coverage for this treatment would be inappropriate",
            "we have chosen to deny coverage",
        ),
        ("it is not possible to deny or approve", "we must deny"),
        ("should be granted coverage", "will not be granted coverage"),
        (
            "patient's condition warrants",
            "patient's condition does not warrant",
        ),
        ("deny the denial", "deny the "),
        ("  ", " "),
        ("As an AI language model", ""),
        (r"\.\.\.", "."),
        (r"\.\.", "."),
        ("by our independent medical representative", "by us"),
        ("is medically necessary", "is not medically necessary"),
        ("Review findings: The", ""),
        ("Review findings:", ""),
        ("The physician reviewer found that", "We determined that"),
        (
            "independent medical review has determined",
            "we have determined",
        ),
        (
            "was indicated for this patient",
            "was not indicated for this patient",
        ),
        (
            "the requested .* is appropriate for this patient",
            "the request has been denied for this patient",
        ),
        ("Final Result: The reviewers determined that.*", ""),
        ("reviewers determined that.*", ""),
        ("findings: .* physician reviewers.*", ""),
        ("Thank you for providing me with this information\\.", ""),
        (
            "Consequently, the Health Plan's denial should be overturned\\.",
            "",
        ),
        ("According to recent medical literature,", ""),
        (
            "I hope this letter finds you in good health and high spirits\\.",
            "",
        ),
    ])
});

static APPEAL: LazyLock<Vec<SwapRule>> = LazyLock::new(|| {
    build(&[
        ("Dear Independent Medical Reviewers", "Dear [Insurance Company];"),
        ("coverage has been approved\\.", "coverage should be approved."),
        ("The final determination was that ", ""),
        ("We reviewed the medical records of patients", "In patients"),
        ("We conducted a retrospective cohort", "In a"),
        ("< / FREETEXT > < / ABSTRACT > ▃", ""),
        ("< / FREETEXT >", ""),
        ("< / ABSTRACT >", ""),
        ("  ", " "),
        (r"\.\.", "."),
        (
            "trans men have well-developed jawlines",
            "trans women have well-developed jawlines",
        ),
        (
            "The provided denial was overturned",
            "The denial should be overturned",
        ),
        (
            "Therefore, the provided denial should be upheld\\.",
            "Therefore, the denial should be overturned.",
        ),
        (
            "who is seeking authorization and coverage of",
            "I am seeking authorization and coverage of",
        ),
        (
            "Therefore, it may not be covered by insurance",
            "Regardless, it should be covered",
        ),
        (r"Dear \[Medical Necessity\]", "Dear [Insurance Company],"),
        (
            "to the independent medical review findings",
            "to your decision",
        ),
        ("Thank you for providing me with this information\\.", ""),
        ("The independent medical review findings of.*?:", ""),
        ("According to the independent medical review, ", ""),
        ("Hence,  concluded", ""),
    ])
});

/// The category-specific rule list, if the category has one.
fn category_rules(category: Category) -> Option<&'static [SwapRule]> {
    match category {
        Category::PatientHistory => Some(&PATIENT_HISTORY),
        Category::Diagnosis => Some(&DIAGNOSIS),
        Category::Treatment => Some(&TREATMENT),
        Category::Denial => Some(&DENIAL),
        Category::Appeal | Category::AppealFull => Some(&APPEAL),
        Category::General | Category::Json => None,
    }
}

/// Build the effective rule list for a category: general rules first, then
/// category rules. When two rules share an identical pattern, the later one
/// wins and the earlier one is dropped, so the merge is deterministic.
pub fn effective_rules(category: Category) -> Vec<&'static SwapRule> {
    let mut rules: Vec<&'static SwapRule> = GENERAL.iter().collect();
    if let Some(extra) = category_rules(category) {
        rules.extend(extra.iter());
    }

    let mut merged: Vec<&'static SwapRule> = Vec::with_capacity(rules.len());
    for rule in rules {
        merged.retain(|kept| kept.pattern() != rule.pattern());
        merged.push(rule);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tables_compile() {
        // Touching every table forces regex compilation.
        for category in [
            Category::General,
            Category::PatientHistory,
            Category::Diagnosis,
            Category::Treatment,
            Category::Denial,
            Category::Appeal,
            Category::AppealFull,
        ] {
            assert!(!effective_rules(category).is_empty());
        }
    }

    #[test]
    fn test_general_rules_come_first() {
        let rules = effective_rules(Category::Diagnosis);
        assert_eq!(rules[0].pattern(), GENERAL[0].pattern());
        assert!(rules.len() > GENERAL.len());
    }

    #[test]
    fn test_identical_pattern_last_wins() {
        // "  " appears in several category tables but never twice in one
        // effective list.
        let rules = effective_rules(Category::Treatment);
        let squeeze_count = rules.iter().filter(|r| r.pattern() == "  ").count();
        assert_eq!(squeeze_count, 1);
    }

    #[test]
    fn test_replacement_is_literal() {
        let rules = effective_rules(Category::Denial);
        let rule = rules
            .iter()
            .find(|r| r.pattern() == "Esteemed Members of the Review Board")
            .expect("denial rule present");
        assert_eq!(rule.replacement(), "$insurancecompany");
        let out = rule.apply("Esteemed Members of the Review Board,");
        assert_eq!(out, "$insurancecompany,");
    }

    #[test]
    fn test_case_insensitive_match() {
        let rules = effective_rules(Category::General);
        let rule = rules
            .iter()
            .find(|r| r.pattern() == "Based on the information provided, ")
            .expect("general rule present");
        assert_eq!(rule.apply("based on the information provided, yes"), "yes");
    }
}
