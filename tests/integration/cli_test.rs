//! Integration tests for the readalong binary

use assert_cmd::Command;
use predicates::prelude::*;

use super::helpers::{fixtures_dir, temp_file, temp_fixture};

/// Command with an empty config so the user's settings never leak in.
fn readalong(config: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("readalong").unwrap();
    cmd.arg("--config").arg(config);
    cmd
}

#[test]
fn index_prints_table() {
    let (_dir, config) = temp_file("config.toml", "");
    let (_fixture_dir, summary) = temp_fixture("summary.md");

    readalong(&config)
        .arg("index")
        .arg(&summary)
        .assert()
        .success()
        .stdout(predicate::str::contains(" 0  [0, 7)  Summary"))
        .stdout(predicate::str::contains("13  [94, 99)  more."))
        .stdout(predicate::str::contains("14 words, 99 characters"));
}

#[test]
fn index_prints_json() {
    let (_dir, config) = temp_file("config.toml", "");

    let output = readalong(&config)
        .arg("index")
        .arg(fixtures_dir().join("summary.md"))
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total_chars"], 99);
    assert_eq!(report["separator_mode"], "between");
    assert_eq!(report["tokens"].as_array().unwrap().len(), 14);
    assert_eq!(report["tokens"][0]["text"], "Summary");
    assert_eq!(report["tokens"][1]["start"], 8);
}

#[test]
fn trailing_separator_mode_from_config() {
    let (_dir, config) = temp_file("config.toml", "[sync]\nseparator_mode = \"trailing\"\n");

    let output = readalong(&config)
        .arg("index")
        .arg(fixtures_dir().join("summary.md"))
        .arg("--json")
        .output()
        .unwrap();

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total_chars"], 100);
    assert_eq!(report["separator_mode"], "trailing");
}

#[test]
fn locate_finds_word() {
    let (_dir, config) = temp_file("config.toml", "");

    readalong(&config)
        .arg("locate")
        .arg(fixtures_dir().join("summary.md"))
        .args(["--time", "50", "--duration", "99"])
        .assert()
        .success()
        .stdout("7\treports\n");
}

#[test]
fn locate_between_words() {
    let (_dir, config) = temp_file("config.toml", "");

    readalong(&config)
        .arg("locate")
        .arg(fixtures_dir().join("summary.md"))
        .args(["--time", "11.5", "--duration", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no word at 00:11"));
}

#[test]
fn seek_prints_word_start() {
    let (_dir, config) = temp_file("config.toml", "");

    readalong(&config)
        .arg("seek")
        .arg(fixtures_dir().join("summary.md"))
        .args(["--word", "11", "--duration", "99"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("75.000\t"));
}

#[test]
fn seek_out_of_range_fails() {
    let (_dir, config) = temp_file("config.toml", "");

    readalong(&config)
        .arg("seek")
        .arg(fixtures_dir().join("summary.md"))
        .args(["--word", "99", "--duration", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn render_wraps_words() {
    let (_dir, config) = temp_file("config.toml", "");

    readalong(&config)
        .arg("render")
        .arg(fixtures_dir().join("summary.md"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"<span class="word" data-word="13">more.</span>"#,
        ))
        .stdout(predicate::str::contains("not spoken"));
}

#[test]
fn missing_file_is_reported() {
    let (_dir, config) = temp_file("config.toml", "");

    readalong(&config)
        .args(["index", "/nonexistent/summary.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn cite_resolves_range() {
    let (_dir, config) = temp_file("config.toml", "");

    readalong(&config)
        .arg("cite")
        .arg(fixtures_dir().join("references.json"))
        .arg("1-3")
        .assert()
        .success()
        .stdout(
            "[1] Page 1: Introduction and motivation\n\
             [2] Page 4: Evaluation results\n\
             [3] Details not found.\n",
        );
}

#[test]
fn cite_rejects_bad_spec() {
    let (_dir, config) = temp_file("config.toml", "");

    readalong(&config)
        .arg("cite")
        .arg(fixtures_dir().join("references.json"))
        .arg("one")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid reference id"));
}

#[test]
fn cite_rejects_huge_range() {
    let (_dir, config) = temp_file("config.toml", "");

    readalong(&config)
        .arg("cite")
        .arg(fixtures_dir().join("references.json"))
        .arg("0-4294967295")
        .assert()
        .failure()
        .stderr(predicate::str::contains("spans more than 10000 ids"));
}

#[test]
fn config_show_prints_effective_settings() {
    let (_dir, config) = temp_file("config.toml", "[sync]\nlookup = \"linear\"\n");

    readalong(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lookup = \"linear\""))
        .stdout(predicate::str::contains("max_consecutive_newlines = 2"));
}

#[test]
fn invalid_config_fails() {
    let (_dir, config) = temp_file("config.toml", "[playback]\ntick_ms = \"soon\"\n");

    readalong(&config)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}

#[test]
fn play_finishes_short_document() {
    let (_dir, config) = temp_file("config.toml", "[playback]\ntick_ms = 10\n");
    let (_doc_dir, doc) = temp_file("doc.md", "Hello world");

    readalong(&config)
        .arg("play")
        .arg(&doc)
        .args(["--duration", "0.3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Finished (2 words)"));
}

#[test]
fn play_empty_document() {
    let (_dir, config) = temp_file("config.toml", "");
    let (_doc_dir, doc) = temp_file("empty.md", "```\nonly code\n```\n");

    readalong(&config)
        .arg("play")
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to read"));
}

#[test]
fn play_from_start_word_never_shows_earlier_words() {
    let (_dir, config) = temp_file("config.toml", "[playback]\ntick_ms = 10\n");
    let (_doc_dir, doc) = temp_file("doc.md", "Hello world");

    readalong(&config)
        .arg("play")
        .arg(&doc)
        .args(["--duration", "0.3", "--start-word", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[7mworld\x1b[0m"))
        .stdout(predicate::str::contains("\x1b[7mHello").not());
}

#[test]
fn play_rejects_out_of_range_start_word() {
    let (_dir, config) = temp_file("config.toml", "");
    let (_doc_dir, doc) = temp_file("doc.md", "Hello world");

    readalong(&config)
        .arg("play")
        .arg(&doc)
        .args(["--duration", "1", "--start-word", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot start at word 5"));
}
