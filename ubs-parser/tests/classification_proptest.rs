//! Property-based tests for line classification
//!
//! The core invariant: classification is total. Every non-empty,
//! non-comment line lands in exactly one of the rule / invalid / skipped
//! buckets, and the bucket counts sum to the number of countable lines.

use proptest::prelude::*;
use ubs_parser::parse;

/// Generate plausible single lines from every classification family.
fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Blank lines and comments
        Just(String::new()),
        Just("   ".to_string()),
        "![ -~]{0,20}",
        // Network filters
        "\\|\\|[a-z]{1,8}\\.[a-z]{2,3}\\^?",
        "@@[a-z.]{1,12}",
        "/[a-z*]{1,10}",
        "[a-z]{1,8}\\.[a-z]{2,3}\\$[a-z]{1,6}",
        // Cosmetic hide rules, single and multi domain, and globals
        "[a-z]{1,8}\\.[a-z]{2,3}##\\.[a-z-]{1,10}",
        "[a-z]{1,6}\\.com,[a-z]{1,6}\\.org##\\.[a-z]{1,8}",
        "##\\.[a-z-]{1,10}",
        // Style injections, well-formed and broken
        "[a-z]{1,6}\\.com##[a-z]{1,4}:style\\(color: [a-z]{3,6}\\)",
        "[a-z]{1,6}\\.com##:style\\([a-z]{1,6}\\)",
        "[a-z]{1,6}\\.com##[a-z]{1,4}:style\\(",
        // Malformed cosmetic-looking lines
        "[a-z]{1,8}\\.[a-z]{2,3}##",
        "[a-z ]{1,20}",
        // Arbitrary printable junk
        "[ -~]{0,30}",
    ]
}

fn countable_lines(input: &str) -> usize {
    input
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('!'))
        .count()
}

proptest! {
    #[test]
    fn classification_is_total(lines in prop::collection::vec(line_strategy(), 0..40)) {
        let input = lines.join("\n");
        let result = parse(&input);
        prop_assert_eq!(
            result.converted_lines + result.invalid.len() + result.skipped.len(),
            countable_lines(&input)
        );
    }

    #[test]
    fn parse_never_panics_on_arbitrary_text(input in "\\PC{0,400}") {
        let _ = parse(&input);
    }

    #[test]
    fn dedupe_is_idempotent_over_parsed_rules(lines in prop::collection::vec(line_strategy(), 0..40)) {
        let input = lines.join("\n");
        let result = parse(&input);
        for rules in result.domain_rules.values() {
            let once = ubs_parser::dedupe(rules);
            prop_assert_eq!(ubs_parser::dedupe(&once), once);
        }
        let once = ubs_parser::dedupe(&result.global_rules);
        prop_assert_eq!(ubs_parser::dedupe(&once), once);
    }
}
