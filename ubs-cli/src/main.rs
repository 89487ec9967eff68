//! Command-line shell for the ubs converter
//! Reads a uBlock filter list and converts it into Stylus-compatible
//! UserCSS files or a bulk-import JSON document.
//!
//! Usage:
//!   ubs [INPUT]                        - Parse and print the rule counts
//!   ubs INPUT --out-dir <dir>          - Write one .user.css per domain into <dir>
//!   ubs INPUT --save                   - Same, into the directory remembered from a previous run
//!   ubs INPUT --zip <path>             - Write all files into a ZIP archive
//!   ubs INPUT --json <path>            - Write a Stylus bulk-import JSON document
//!   ubs INPUT --preview                - Print the converted CSS preview
//!
//! INPUT is a file path or `-` for stdin (the default).

use clap::{Arg, ArgAction, Command};
use std::io::Read;
use std::path::PathBuf;
use std::process;
use ubs_config::ToolConfig;
use ubs_export::Summary;
use ubs_parser::ParseResult;

/// File name of the persisted state record under `$HOME`.
const CONFIG_FILE_NAME: &str = ".ubs.json";

fn main() {
    let matches = Command::new("ubs")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert uBlock Origin cosmetic filters (##) into Stylus UserCSS")
        .arg(
            Arg::new("input")
                .help("Filter list file, or '-' for stdin")
                .default_value("-")
                .index(1),
        )
        .arg(
            Arg::new("out-dir")
                .long("out-dir")
                .short('o')
                .value_name("DIR")
                .help("Write one .user.css file per domain into DIR and remember it"),
        )
        .arg(
            Arg::new("save")
                .long("save")
                .action(ArgAction::SetTrue)
                .help("Write the .user.css files into the remembered output directory"),
        )
        .arg(
            Arg::new("zip")
                .long("zip")
                .value_name("PATH")
                .help("Write all converted files into a ZIP archive at PATH"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .value_name("PATH")
                .help("Write a Stylus bulk-import JSON document at PATH"),
        )
        .arg(
            Arg::new("preview")
                .long("preview")
                .action(ArgAction::SetTrue)
                .help("Print the converted CSS preview"),
        )
        .get_matches();

    let input = matches.get_one::<String>("input").unwrap();
    let raw_text = read_input(input).unwrap_or_else(|err| {
        eprintln!("Failed to read {}: {}", input, err);
        process::exit(1);
    });

    let parsed = ubs_parser::parse(&raw_text);

    let out_dir = matches.get_one::<String>("out-dir").map(PathBuf::from);
    let save_requested = out_dir.is_some() || matches.get_flag("save");
    let zip_path = matches.get_one::<String>("zip").map(PathBuf::from);
    let json_path = matches.get_one::<String>("json").map(PathBuf::from);
    let preview_requested = matches.get_flag("preview");

    let mut acted = false;

    if preview_requested {
        handle_preview(&parsed);
        acted = true;
    }
    if save_requested {
        handle_save(&parsed, out_dir);
        acted = true;
    }
    if let Some(path) = zip_path {
        handle_zip(&parsed, &path);
        acted = true;
    }
    if let Some(path) = json_path {
        handle_json(&parsed, &path);
        acted = true;
    }

    if !acted {
        print_stats(&parsed);
    }
}

/// Read the filter text from a file path or stdin (`-`).
fn read_input(input: &str) -> std::io::Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(input)
    }
}

/// Location of the persisted state record, if a home directory is known.
fn config_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE_NAME))
}

/// Handle `--preview`.
fn handle_preview(parsed: &ParseResult) {
    match ubs_export::preview(parsed) {
        Some(text) => println!("{}", text),
        None => {
            eprintln!("No valid ## rules found");
            process::exit(1);
        }
    }
}

/// Handle `--out-dir` / `--save`: folder save plus config persistence.
fn handle_save(parsed: &ParseResult, out_dir: Option<PathBuf>) {
    let config_path = config_path();
    let mut config = config_path
        .as_ref()
        .map(ToolConfig::load)
        .unwrap_or_default();

    let dir = match out_dir.or_else(|| config.output_dir.clone()) {
        Some(dir) => dir,
        None => {
            eprintln!("No output directory: pass --out-dir or save one first");
            process::exit(1);
        }
    };

    let summary = ubs_export::save_files(&dir, parsed).unwrap_or_else(|err| {
        eprintln!("Conversion failed: {}", err);
        process::exit(1);
    });

    for failure in &summary.failures {
        eprintln!("Failed to write {}", failure);
    }
    println!(
        "Created {} files ({} rules) in {}{}",
        summary.files,
        summary.rules,
        dir.display(),
        count_suffix(&summary)
    );

    // Remember the directory for the next run.
    if config.output_dir.as_ref() != Some(&dir) {
        config.output_dir = Some(dir);
        if let Some(path) = config_path {
            if let Err(err) = config.save(&path) {
                eprintln!("Could not persist config: {}", err);
            }
        }
    }
}

/// Handle `--zip`.
fn handle_zip(parsed: &ParseResult, path: &std::path::Path) {
    let summary = ubs_export::save_zip(path, parsed).unwrap_or_else(|err| {
        eprintln!("Export failed: {}", err);
        process::exit(1);
    });
    println!(
        "Exported {} files to {}{}",
        summary.files,
        path.display(),
        count_suffix(&summary)
    );
}

/// Handle `--json`.
fn handle_json(parsed: &ParseResult, path: &std::path::Path) {
    let summary = ubs_export::save_json(path, parsed).unwrap_or_else(|err| {
        eprintln!("Export failed: {}", err);
        process::exit(1);
    });
    println!(
        "Exported {} styles to {}{}",
        summary.files,
        path.display(),
        count_suffix(&summary)
    );
}

/// The " • N invalid • M network filters skipped" tail of a status line.
fn count_suffix(summary: &Summary) -> String {
    let mut suffix = String::new();
    if summary.invalid > 0 {
        suffix.push_str(&format!(" • {} invalid", summary.invalid));
    }
    if summary.skipped > 0 {
        suffix.push_str(&format!(" • {} network filters skipped", summary.skipped));
    }
    suffix
}

/// Print the aggregate counts for the parsed input.
fn print_stats(parsed: &ParseResult) {
    println!("Rules: {}", parsed.converted_lines);
    println!("Domains: {}", parsed.domain_rules.len());
    println!("Global: {}", parsed.global_rules.len());
    println!("Styles: {}", parsed.style_rule_count());
    println!("Skipped: {}", parsed.skipped.len());
    println!("Invalid: {}", parsed.invalid.len());
}
