//! Fixpoint substitution engine.
//!
//! One pass applies every effective rule once, in declared order. Because a
//! swap can expose text that another swap matches, passes repeat until a
//! full pass changes nothing. Two rules could in principle rewrite each
//! other's output forever, so the loop is capped and the cap is loud.

use crate::category::Category;
use crate::rules::effective_rules;

/// Upper bound on fixpoint passes. The shipped tables converge in two or
/// three passes; hitting this means a rule pair is fighting.
const MAX_PASSES: usize = 25;

/// Apply the category's effective rule set to `text` until it stops
/// changing. Pure function of the inputs and the static rule table.
pub fn apply_swaps(category: Category, text: Option<&str>) -> Option<String> {
    let text = text?;
    let rules = effective_rules(category);

    let mut current = text.to_string();
    for _pass in 0..MAX_PASSES {
        let mut next = current.clone();
        for rule in &rules {
            next = rule.apply(&next);
        }
        if next == current {
            return Some(current);
        }
        current = next;
    }

    tracing::warn!(
        category = %category,
        passes = MAX_PASSES,
        "substitution engine hit the pass cap without reaching a fixpoint"
    );
    Some(current)
}
