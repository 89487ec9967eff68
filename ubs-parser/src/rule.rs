//! The converted rule value and its normalization
//!
//! A cosmetic filter line boils down to a selector plus the CSS declaration
//! applied to it. Hide rules all share the same literal declaration, which
//! is what lets the generators group them into a single CSS block later.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Declaration carried by every plain hide rule (`domain##selector`).
pub const HIDE_DECLARATION: &str = "display: none !important";

/// A single converted cosmetic rule.
///
/// Equality and ordering are by literal field values; two rules are the
/// same rule exactly when both selector and declaration match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rule {
    pub selector: String,
    pub declaration: String,
}

impl Rule {
    pub fn new(selector: impl Into<String>, declaration: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declaration: declaration.into(),
        }
    }

    /// A plain hide rule for `selector`.
    pub fn hide(selector: impl Into<String>) -> Self {
        Self::new(selector, HIDE_DECLARATION)
    }

    /// Whether this rule hides its target rather than restyling it.
    pub fn is_hide(&self) -> bool {
        self.declaration == HIDE_DECLARATION
    }
}

/// Remove exact duplicates, then order for generated-file readability.
///
/// First occurrence wins. The sort is stable and two-keyed: hide rules
/// before style injections, selectors ascending within each partition.
/// This is a presentation ordering, not a semantic requirement.
pub fn dedupe(rules: &[Rule]) -> Vec<Rule> {
    let mut seen = HashSet::new();
    let mut unique: Vec<Rule> = rules
        .iter()
        .filter(|rule| seen.insert((*rule).clone()))
        .cloned()
        .collect();
    unique.sort_by(|a, b| {
        (!a.is_hide(), &a.selector).cmp(&(!b.is_hide(), &b.selector))
    });
    unique
}
