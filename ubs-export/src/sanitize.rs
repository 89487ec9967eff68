//! Filesystem-safe filename stems
//!
//! Domains come straight from filter text and may carry URL fragments or
//! characters that are invalid in filenames. The stem keeps letters,
//! digits, spaces, `.`, `_` and `-` only. Two domains may sanitize to the
//! same stem; collisions are not resolved here (the later write wins).

/// Derive a filesystem-safe base filename from a domain.
pub fn sanitize(domain: &str) -> String {
    let stripped = domain
        .replacen("www.", "", 1)
        .replacen("https://", "", 1)
        .replacen("http://", "", 1);
    stripped
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_numeric() || matches!(c, ' ' | '.' | '_' | '-'))
        .collect::<String>()
        .trim_end()
        .to_string()
}
