//! The write layer: folder save, ZIP archive, Stylus JSON, preview
//!
//! Folder saves are best-effort: each file is written independently, a
//! failed write is recorded in the summary and the batch continues. ZIP
//! and JSON exports are all-or-nothing: any failure aborts the operation
//! with an [`ExportError`] and no partial artifact is reported.

use crate::error::ExportError;
use crate::sanitize::sanitize;
use crate::stylus::stylus_import;
use crate::usercss::generate_usercss;
use std::fs;
use std::io::Write;
use std::path::Path;
use ubs_parser::{dedupe, ParseResult};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// File name used for the unscoped stylesheet.
pub const GLOBAL_FILE_NAME: &str = "Global_Rules.user.css";

/// Display name used for the unscoped stylesheet.
pub const GLOBAL_STYLE_NAME: &str = "Global Rules";

/// Aggregate counts reported back to the shell after an export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Files written (folder/ZIP export) or style entries produced (JSON
    /// export).
    pub files: usize,
    /// Rules converted, after deduplication.
    pub rules: usize,
    /// Malformed lines in the input.
    pub invalid: usize,
    /// Lines skipped as other filter classes.
    pub skipped: usize,
    /// Per-file failure descriptions from a best-effort folder save.
    pub failures: Vec<String>,
}

impl Summary {
    fn from_parse(parsed: &ParseResult) -> Self {
        Self {
            invalid: parsed.invalid.len(),
            skipped: parsed.skipped.len(),
            ..Self::default()
        }
    }
}

/// File name for a domain's stylesheet.
pub fn domain_file_name(domain: &str) -> String {
    format!("{}.user.css", sanitize(domain))
}

/// Render every output file as `(name, content, rule_count)`.
///
/// Domains keep their first-seen order; the global stylesheet, when
/// present, comes last. Rules are deduplicated per file.
fn rendered_files(parsed: &ParseResult) -> Vec<(String, String, usize)> {
    let mut files = Vec::new();
    for (domain, rules) in &parsed.domain_rules {
        let unique = dedupe(rules);
        let content = generate_usercss(domain, &unique, false);
        files.push((domain_file_name(domain), content, unique.len()));
    }
    if !parsed.global_rules.is_empty() {
        let unique = dedupe(&parsed.global_rules);
        let content = generate_usercss(GLOBAL_STYLE_NAME, &unique, true);
        files.push((GLOBAL_FILE_NAME.to_string(), content, unique.len()));
    }
    files
}

/// Write one `.user.css` file per domain (plus the global stylesheet) into
/// `dir`, best-effort.
///
/// Two domains sanitizing to the same file name are not disambiguated; the
/// later write overwrites the earlier one.
pub fn save_files(dir: &Path, parsed: &ParseResult) -> Result<Summary, ExportError> {
    if parsed.is_empty() {
        return Err(ExportError::NoRules);
    }

    let mut summary = Summary::from_parse(parsed);
    for (name, content, rule_count) in rendered_files(parsed) {
        match fs::write(dir.join(&name), &content) {
            Ok(()) => {
                summary.files += 1;
                summary.rules += rule_count;
            }
            Err(err) => summary.failures.push(format!("{}: {}", name, err)),
        }
    }
    Ok(summary)
}

/// Write all output files into a single deflate-compressed ZIP archive.
pub fn save_zip(path: &Path, parsed: &ParseResult) -> Result<Summary, ExportError> {
    if parsed.is_empty() {
        return Err(ExportError::NoRules);
    }

    let file =
        fs::File::create(path).map_err(|err| ExportError::ArchiveError(err.to_string()))?;
    let mut archive = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut summary = Summary::from_parse(parsed);
    for (name, content, rule_count) in rendered_files(parsed) {
        archive
            .start_file(name, options)
            .map_err(|err| ExportError::ArchiveError(err.to_string()))?;
        archive
            .write_all(content.as_bytes())
            .map_err(|err| ExportError::ArchiveError(err.to_string()))?;
        summary.files += 1;
        summary.rules += rule_count;
    }
    archive
        .finish()
        .map_err(|err| ExportError::ArchiveError(err.to_string()))?;

    Ok(summary)
}

/// Write the Stylus bulk-import JSON document, 2-space indented.
pub fn save_json(path: &Path, parsed: &ParseResult) -> Result<Summary, ExportError> {
    if parsed.is_empty() {
        return Err(ExportError::NoRules);
    }

    let entries = stylus_import(parsed);
    let json = serde_json::to_string_pretty(&entries)
        .map_err(|err| ExportError::SerializationError(err.to_string()))?;
    fs::write(path, json).map_err(|err| ExportError::WriteError(err.to_string()))?;

    let mut summary = Summary::from_parse(parsed);
    summary.files = entries.len() - 1;
    summary.rules = parsed
        .domain_rules
        .values()
        .map(|rules| dedupe(rules).len())
        .sum::<usize>()
        + if parsed.global_rules.is_empty() {
            0
        } else {
            dedupe(&parsed.global_rules).len()
        };
    Ok(summary)
}

/// Build the preview text: the first domain's stylesheet, a marker for the
/// remaining domain files, then the global stylesheet. `None` when there
/// is nothing to show.
pub fn preview(parsed: &ParseResult) -> Option<String> {
    if parsed.is_empty() {
        return None;
    }

    let mut out = String::new();
    if let Some((domain, rules)) = parsed.domain_rules.iter().next() {
        let unique = dedupe(rules);
        out.push_str(&format!("/* === {}.user.css === */\n\n", domain));
        out.push_str(&generate_usercss(domain, &unique, false));
        if parsed.domain_rules.len() > 1 {
            out.push_str(&format!(
                "\n\n/* ... and {} more domain files */\n",
                parsed.domain_rules.len() - 1
            ));
        }
    }
    if !parsed.global_rules.is_empty() {
        if !out.is_empty() {
            out.push_str("\n\n");
        }
        out.push_str(&format!("/* === {} === */\n\n", GLOBAL_FILE_NAME));
        let unique = dedupe(&parsed.global_rules);
        out.push_str(&generate_usercss(GLOBAL_STYLE_NAME, &unique, true));
    }
    Some(out)
}
