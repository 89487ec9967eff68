//! Per-line classification
//!
//! Each input line is classified in isolation by a fixed sequence of
//! checks. The order is load-bearing: network-filter detection runs before
//! the cosmetic split, and `$` options in the domain part invalidate the
//! cosmetic interpretation even when a `##` separator is present.
//!
//! The checks, in order:
//!     1. Blank lines and `!` comments are ignored outright.
//!     2. `||`, `@@` and `/` prefixes mark network filters.
//!     3. With a `##` separator: `$` before the first `##` marks a network
//!        filter carrying options.
//!     4. Without a `##` separator: `$` anywhere or a leading `|` marks a
//!        network filter; anything else is invalid.
//!     5. An empty selector after the separator is invalid.
//!     6. A `:style(...)` wrapper is unwrapped into a style-injection rule;
//!        a malformed wrapper is invalid.
//!     7. Everything else becomes a hide rule.

use crate::rule::Rule;
use once_cell::sync::Lazy;
use regex::Regex;

/// Separator between the domain list and the selector.
const COSMETIC_SEPARATOR: &str = "##";

/// Anchored `selector:style(declaration)` wrapper. The selector group is
/// lazy, so the split happens at the first `:style(`; the declaration runs
/// to the final `)` of the line.
static STYLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?):style\((.+)\)$").expect("style pattern compiles"));

/// Outcome of classifying a single trimmed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// Blank line or `!` comment; recorded nowhere.
    Ignored,
    /// Recognized as a different, unsupported filter class.
    Skipped(&'static str),
    /// Looked like a cosmetic filter but is malformed.
    Invalid(&'static str),
    /// A converted rule and the domains it applies to. An empty domain
    /// list means the rule is global.
    Rule { domains: Vec<String>, rule: Rule },
}

/// Classify one line of filter text.
///
/// Total over all inputs: every line maps to exactly one [`LineClass`].
pub fn classify_line(line: &str) -> LineClass {
    let line = line.trim();
    if line.is_empty() || line.starts_with('!') {
        return LineClass::Ignored;
    }

    if line.starts_with("||") || line.starts_with("@@") || line.starts_with('/') {
        return LineClass::Skipped("Network filter");
    }

    let Some((domains_part, selector_part)) = line.split_once(COSMETIC_SEPARATOR) else {
        if line.contains('$') || line.starts_with('|') {
            return LineClass::Skipped("Network filter");
        }
        return LineClass::Invalid("Missing ## separator");
    };

    // Network-filter options precede cosmetic separators; a `$` in the
    // domain part means the `##` belongs to an option value, not to us.
    if domains_part.contains('$') {
        return LineClass::Skipped("Network filter with options");
    }

    let selector_part = selector_part.trim();
    if selector_part.is_empty() {
        return LineClass::Invalid("Empty selector");
    }

    let rule = if selector_part.contains(":style(") {
        match extract_style(selector_part) {
            Some(rule) => rule,
            None => return LineClass::Invalid("Invalid :style() syntax"),
        }
    } else {
        Rule::hide(selector_part)
    };

    LineClass::Rule {
        domains: split_domains(domains_part),
        rule,
    }
}

/// Unwrap `selector:style(declaration)` into a style-injection rule.
fn extract_style(selector_part: &str) -> Option<Rule> {
    let caps = STYLE_RE.captures(selector_part)?;
    Some(Rule::new(caps[1].trim(), caps[2].trim()))
}

/// Split the domain part on commas, trimming each token.
///
/// Empty tokens (from a trailing comma or a bare `##` prefix) are kept as
/// empty strings; an entirely empty domain part yields no tokens at all.
fn split_domains(domains_part: &str) -> Vec<String> {
    let domains_part = domains_part.trim();
    if domains_part.is_empty() {
        return Vec::new();
    }
    domains_part.split(',').map(|d| d.trim().to_string()).collect()
}
