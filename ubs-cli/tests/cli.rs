//! End-to-end tests for the ubs binary

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const SAMPLE: &str = "\
example.com##.ad
a.com,b.com##.x
##.global-ad
||ads.example.com^
broken-line
";

#[test]
fn stats_are_printed_for_stdin_input() {
    let mut cmd = cargo_bin_cmd!("ubs");
    cmd.write_stdin(SAMPLE);

    cmd.assert()
        .success()
        .stdout(
            predicate::str::contains("Rules: 3")
                .and(predicate::str::contains("Domains: 3"))
                .and(predicate::str::contains("Global: 1"))
                .and(predicate::str::contains("Skipped: 1"))
                .and(predicate::str::contains("Invalid: 1")),
        );
}

#[test]
fn out_dir_save_writes_files_and_remembers_the_directory() {
    let home = tempdir().unwrap();
    let out = tempdir().unwrap();
    let input = home.path().join("filters.txt");
    fs::write(&input, SAMPLE).unwrap();

    let mut cmd = cargo_bin_cmd!("ubs");
    cmd.env("HOME", home.path())
        .arg(&input)
        .arg("--out-dir")
        .arg(out.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Created 4 files"));

    assert!(out.path().join("example.com.user.css").exists());
    assert!(out.path().join("a.com.user.css").exists());
    assert!(out.path().join("b.com.user.css").exists());
    assert!(out.path().join("Global_Rules.user.css").exists());

    let config = fs::read_to_string(home.path().join(".ubs.json")).unwrap();
    assert!(config.contains("output_dir"));
    assert!(config.contains(&out.path().display().to_string()));
}

#[test]
fn save_flag_uses_the_remembered_directory() {
    let home = tempdir().unwrap();
    let out = tempdir().unwrap();
    fs::write(
        home.path().join(".ubs.json"),
        format!(r#"{{"output_dir": "{}"}}"#, out.path().display()),
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("ubs");
    cmd.env("HOME", home.path())
        .arg("-")
        .arg("--save")
        .write_stdin("example.com##.ad\n");

    cmd.assert().success();
    assert!(out.path().join("example.com.user.css").exists());
}

#[test]
fn save_without_a_directory_fails() {
    let home = tempdir().unwrap();

    let mut cmd = cargo_bin_cmd!("ubs");
    cmd.env("HOME", home.path())
        .arg("-")
        .arg("--save")
        .write_stdin("example.com##.ad\n");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No output directory"));
}

#[test]
fn json_export_writes_a_valid_document() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("stylus.json");

    let mut cmd = cargo_bin_cmd!("ubs");
    cmd.arg("-")
        .arg("--json")
        .arg(&path)
        .write_stdin(SAMPLE);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Exported 4 styles"));

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 5);
}

#[test]
fn json_export_to_unwritable_path_fails() {
    let dir = tempdir().unwrap();

    let mut cmd = cargo_bin_cmd!("ubs");
    cmd.arg("-")
        .arg("--json")
        .arg(dir.path().join("missing").join("out.json"))
        .write_stdin("example.com##.ad\n");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Export failed"));
}

#[test]
fn zip_export_writes_an_archive() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("styles.zip");

    let mut cmd = cargo_bin_cmd!("ubs");
    cmd.arg("-").arg("--zip").arg(&path).write_stdin(SAMPLE);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Exported 4 files"));
    assert!(path.exists());
}

#[test]
fn preview_prints_the_first_domain_stylesheet() {
    let mut cmd = cargo_bin_cmd!("ubs");
    cmd.arg("-").arg("--preview").write_stdin(SAMPLE);

    cmd.assert().success().stdout(
        predicate::str::contains("/* === example.com.user.css === */")
            .and(predicate::str::contains("@-moz-document domain(\"example.com\")"))
            .and(predicate::str::contains("more domain files")),
    );
}

#[test]
fn converting_an_input_without_rules_fails() {
    let dir = tempdir().unwrap();

    let mut cmd = cargo_bin_cmd!("ubs");
    cmd.arg("-")
        .arg("--out-dir")
        .arg(dir.path())
        .write_stdin("! only comments\n||network.filter^\n");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no convertible rules"));
}
