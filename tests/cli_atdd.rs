#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const PATHS: [(&str, [&str; 3]); 3] = [
    ("chain", ["creation", "consumption", "feedback"]),
    ("pillars", ["pattern", "structural", "centralization"]),
    ("mirror", ["filtering", "agency", "systemic"]),
];

const RESULT_TYPES: [&str; 6] = [
    "sleepwalker",
    "skeptic",
    "participant",
    "architect",
    "witness",
    "resister",
];

fn faiscism(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("faiscism").expect("binary should compile");
    cmd.env("HOME", root).env_remove("RUST_LOG").arg("--root").arg(root);
    cmd
}

/// Questions 1-3 score the first dimension, 4-6 the second and 7-10 the third.
/// Option `k` (zero-based) awards `k` points.
fn questions_json(dimensions: [&str; 3]) -> String {
    let questions = (1..=10u32)
        .map(|id| {
            let dimension = match id {
                1..=3 => dimensions[0],
                4..=6 => dimensions[1],
                _ => dimensions[2],
            };
            let options = (0..4)
                .map(|points| {
                    format!(r#"{{"text": "option {points}", "scores": {{"{dimension}": {points}}}}}"#)
                })
                .collect::<Vec<_>>();
            format!(
                r#"{{"id": {id}, "text": "Question {id}", "options": [{}]}}"#,
                options.join(",")
            )
        })
        .collect::<Vec<_>>();
    format!("[{}]", questions.join(","))
}

fn write_questions(root: &Path) {
    let content = root.join("site/_data");
    fs::create_dir_all(&content).expect("content dir should be created");
    for (id, dimensions) in PATHS {
        fs::write(
            content.join(format!("{id}_questions.json")),
            questions_json(dimensions),
        )
        .expect("questions should be written");
    }
}

fn write_results(root: &Path) {
    let types = RESULT_TYPES
        .iter()
        .map(|key| {
            format!(
                r#""{key}": {{"name": "Custom {key}", "summary": "s", "description": "d", "hook": "h"}}"#
            )
        })
        .collect::<Vec<_>>();
    fs::write(
        root.join("site/_data/results.json"),
        format!(r#"{{"types": {{{}}}}}"#, types.join(",")),
    )
    .expect("results should be written");
}

fn project() -> TempDir {
    let root = TempDir::new().expect("temp dir should be created");
    write_questions(root.path());
    write_results(root.path());
    root
}

#[test]
fn play_completes_mirror_path_with_result_link() {
    let root = project();
    faiscism(root.path())
        .args(["play", "mirror"])
        .write_stdin("3\n3\n1\n4\n4\n2\n1\n1\n1\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[10/10] Question 10"))
        .stdout(predicate::str::contains("# Custom participant"))
        .stdout(predicate::str::contains("Copy this link: /mirror/result/120/"));
}

#[test]
fn play_suspends_on_eof_and_resumes_later() {
    let root = project();
    faiscism(root.path())
        .args(["play", "chain"])
        .write_stdin("3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("progress saved at /chain/2/"));

    assert!(root.path().join(".faiscism/state.json").exists());

    faiscism(root.path())
        .args(["play", "chain", "--resume"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("[2/10] Question 2"))
        .stdout(predicate::str::contains("[1/10]").not());
}

#[test]
fn play_rejects_resume_with_restart() {
    let root = project();
    faiscism(root.path())
        .args(["play", "chain", "--resume", "--restart"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn play_without_content_is_a_runtime_failure() {
    let root = TempDir::new().expect("temp dir should be created");
    faiscism(root.path())
        .args(["play", "chain"])
        .write_stdin("")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("content not found"));
}

#[test]
fn state_show_and_clear_round_trip() {
    let root = project();
    faiscism(root.path())
        .args(["play", "mirror"])
        .write_stdin("3\n")
        .assert()
        .success();

    faiscism(root.path())
        .args(["state", "show", "mirror"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"filtering\": 2"));

    faiscism(root.path())
        .args(["state", "clear", "mirror"])
        .assert()
        .success()
        .stdout(predicate::str::contains("state cleared: mirror"));

    faiscism(root.path())
        .args(["state", "show", "mirror"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"answers\": []"));
}

#[test]
fn generate_writes_pages_and_manifest() {
    let root = project();
    faiscism(root.path())
        .args(["generate", "--path", "mirror"])
        .assert()
        .success()
        .stdout(predicate::str::contains("scope: create=27 modify=0 unchanged=0"))
        .stdout(predicate::str::contains("generate complete: wrote 27 file(s), 0 unchanged"));

    let page = fs::read_to_string(root.path().join("_site/mirror/result/120/index.json"))
        .expect("result page should exist");
    assert!(page.contains("\"name\": \"Custom participant\""));
    assert!(root.path().join("_site/mirror/permutations.json").exists());
}

#[test]
fn generate_dry_run_writes_nothing() {
    let root = project();
    faiscism(root.path())
        .args(["generate", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("scope: create=81"))
        .stdout(predicate::str::contains("preview: no files were written"));
    assert!(!root.path().join("_site").exists());
}

#[test]
fn check_passes_on_complete_content() {
    let root = project();
    faiscism(root.path())
        .arg("check")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("check: no findings"));
}

#[test]
fn check_warns_without_result_metadata() {
    let root = TempDir::new().expect("temp dir should be created");
    write_questions(root.path());
    faiscism(root.path())
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[WARN] results.missing"));
}

#[test]
fn check_blocks_on_missing_questions() {
    let root = TempDir::new().expect("temp dir should be created");
    faiscism(root.path())
        .arg("check")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("[BLOCKING] content.missing_questions"));
}

#[test]
fn config_file_moves_addresses_and_content() {
    let root = TempDir::new().expect("temp dir should be created");
    fs::write(
        root.path().join("faiscism.toml"),
        r#"
[site]
base_path = "/quiz"
content_dir = "data"
"#,
    )
    .expect("config should be written");

    faiscism(root.path())
        .args(["classify", "chain", "--score", "creation=9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("address: /quiz/chain/result/200/"));

    faiscism(root.path())
        .arg("check")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("data/chain_questions.json"));
}

#[test]
fn invalid_config_is_a_runtime_failure() {
    let root = TempDir::new().expect("temp dir should be created");
    fs::write(
        root.path().join("faiscism.toml"),
        r#"
[[paths]]
id = "solo"
name = "Solo"
dimensions = ["a", "b"]
"#,
    )
    .expect("config should be written");

    faiscism(root.path())
        .args(["permutations", "solo"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("must define exactly 3 dimensions"));
}

#[test]
fn malformed_config_names_the_file() {
    let root = TempDir::new().expect("temp dir should be created");
    fs::write(root.path().join("faiscism.toml"), "[site\nbase_path = ")
        .expect("config should be written");

    faiscism(root.path())
        .arg("check")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config parse error"))
        .stderr(predicate::str::contains("faiscism.toml"));
}
