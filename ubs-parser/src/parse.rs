//! Filter-list scanning
//!
//! Folds per-line classifications into a [`ParseResult`]. The scan is
//! line-oriented, 1-indexed for diagnostics, and order-preserving: domains
//! appear in [`ParseResult::domain_rules`] in first-seen order, and rules
//! under a domain keep the order of the lines that produced them.

use crate::classify::{classify_line, LineClass};
use crate::rule::Rule;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A line that could not be converted, with its 1-indexed position and the
/// reason it was set aside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineIssue {
    pub line: usize,
    pub text: String,
    pub reason: String,
}

impl LineIssue {
    fn new(line: usize, text: &str, reason: &str) -> Self {
        Self {
            line,
            text: text.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Structured form of a filter list.
///
/// Every non-empty, non-comment input line contributes to exactly one of
/// `domain_rules`/`global_rules`, `invalid`, or `skipped`. Duplicate rules
/// are possible here; deduplication happens at generation time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Rules per domain, keyed by the domain text as written (trimmed
    /// only). Insertion order is first appearance in the input and is
    /// semantic: exports iterate domains in this order.
    pub domain_rules: IndexMap<String, Vec<Rule>>,
    /// Rules with no domain restriction.
    pub global_rules: Vec<Rule>,
    /// Lines that looked like cosmetic filters but were malformed.
    pub invalid: Vec<LineIssue>,
    /// Lines recognized as other filter classes, intentionally skipped.
    pub skipped: Vec<LineIssue>,
    /// Number of input lines that produced at least one rule. A line with
    /// N comma-separated domains counts once here but N times in
    /// `domain_rules`.
    pub converted_lines: usize,
}

impl ParseResult {
    /// Whether the input produced any convertible rules at all.
    pub fn is_empty(&self) -> bool {
        self.domain_rules.is_empty() && self.global_rules.is_empty()
    }

    /// Number of style-injection rules across all domains and globals.
    pub fn style_rule_count(&self) -> usize {
        self.domain_rules
            .values()
            .flatten()
            .chain(self.global_rules.iter())
            .filter(|r| !r.is_hide())
            .count()
    }
}

/// Parse raw filter text into a [`ParseResult`].
///
/// Total over all inputs: a malformed line is recorded and the scan moves
/// on. This function never fails.
pub fn parse(raw_text: &str) -> ParseResult {
    let mut result = ParseResult::default();

    for (idx, raw_line) in raw_text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();
        match classify_line(line) {
            LineClass::Ignored => {}
            LineClass::Skipped(reason) => {
                result.skipped.push(LineIssue::new(line_no, line, reason));
            }
            LineClass::Invalid(reason) => {
                result.invalid.push(LineIssue::new(line_no, line, reason));
            }
            LineClass::Rule { domains, rule } => {
                result.converted_lines += 1;
                if domains.is_empty() {
                    result.global_rules.push(rule);
                } else {
                    for domain in domains {
                        result
                            .domain_rules
                            .entry(domain)
                            .or_default()
                            .push(rule.clone());
                    }
                }
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;

    #[test]
    fn test_single_domain_rule() {
        let result = parse("domain.com##.ad");
        assert_eq!(result.domain_rules.len(), 1);
        assert_eq!(result.domain_rules["domain.com"], vec![Rule::hide(".ad")]);
        assert!(result.global_rules.is_empty());
        assert_eq!(result.converted_lines, 1);
    }

    #[test]
    fn test_global_rule() {
        let result = parse("##.global-ad");
        assert!(result.domain_rules.is_empty());
        assert_eq!(result.global_rules, vec![Rule::hide(".global-ad")]);
    }

    #[test]
    fn test_multi_domain_line_fans_out() {
        let result = parse("a.com,b.com##.x");
        assert_eq!(result.domain_rules["a.com"], vec![Rule::hide(".x")]);
        assert_eq!(result.domain_rules["b.com"], vec![Rule::hide(".x")]);
        assert_eq!(result.converted_lines, 1);
    }

    #[test]
    fn test_domain_insertion_order_is_preserved() {
        let result = parse("z.com##.a\na.com##.b\nz.com##.c\nm.com##.d");
        let domains: Vec<_> = result.domain_rules.keys().cloned().collect();
        assert_eq!(domains, vec!["z.com", "a.com", "m.com"]);
        assert_eq!(
            result.domain_rules["z.com"],
            vec![Rule::hide(".a"), Rule::hide(".c")]
        );
    }

    #[test]
    fn test_line_numbers_are_one_indexed() {
        let result = parse("! header\n\nbroken-line\n||ads.example.com^");
        assert_eq!(result.invalid.len(), 1);
        assert_eq!(result.invalid[0].line, 3);
        assert_eq!(result.invalid[0].text, "broken-line");
        assert_eq!(result.invalid[0].reason, "Missing ## separator");
        assert_eq!(result.skipped[0].line, 4);
        assert_eq!(result.skipped[0].reason, "Network filter");
    }

    #[test]
    fn test_network_filters_do_not_reach_rule_outputs() {
        let result = parse("||ads.example.com^");
        assert!(result.is_empty());
        assert!(result.invalid.is_empty());
        assert_eq!(result.skipped.len(), 1);
    }

    #[test]
    fn test_empty_selector_recorded_as_invalid() {
        let result = parse("example.com##");
        assert_eq!(result.invalid[0].reason, "Empty selector");
        assert!(result.is_empty());
    }

    #[test]
    fn test_trailing_comma_inserts_empty_domain_key() {
        // A trailing comma yields a literal empty-string key, not a global
        // rule. Callers must not assume non-empty keys.
        let result = parse("a.com,##.x");
        assert_eq!(result.domain_rules["a.com"], vec![Rule::hide(".x")]);
        assert_eq!(result.domain_rules[""], vec![Rule::hide(".x")]);
        assert!(result.global_rules.is_empty());
    }

    #[test]
    fn test_duplicates_survive_parsing() {
        let result = parse("a.com##.x\na.com##.x");
        assert_eq!(result.domain_rules["a.com"].len(), 2);
    }

    #[test]
    fn test_style_rule_count() {
        let result = parse("a.com##.x\na.com##div:style(color: red)\n##b:style(opacity: 0)");
        assert_eq!(result.style_rule_count(), 2);
    }

    #[test]
    fn test_classification_totality() {
        let input = "\
! comment
a.com##.ad
||net.example.com^
b.com,c.com##.x

broken
@@exception
d.com##
##.global
e.com##div:style(color: red)
f.com##p:style(
g.com$image##.y";
        let result = parse(input);
        let countable = input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('!'))
            .count();
        assert_eq!(
            result.converted_lines + result.invalid.len() + result.skipped.len(),
            countable
        );
    }
}
