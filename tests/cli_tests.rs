//! End-to-end tests for the `contact-dedup` binary:
//! `find` in every output format, results files, and `compare`.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

const CONTACTS: &str = "\
contactID,name,name1,email,postalZip,address
1,John,Doe,test@example.com,12345,123 Main St
2,John,Doe,test@example.com,12345,123 Main St
3,Jane,Smith,different@example.com,67890,456 Elm St
";

fn dedup_cmd() -> Command {
    Command::cargo_bin("contact-dedup").unwrap()
}

fn write_contacts(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn find_writes_results_csv() {
    let dir = TempDir::new().unwrap();
    let input = write_contacts(dir.path(), "contacts.csv", CONTACTS);
    let output = dir.path().join("results.csv");

    dedup_cmd()
        .args(["find", input.to_str().unwrap(), "-o", output.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Sequential execution time:"));

    let results = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        results,
        "ContactID Source,ContactID Match,Accuracy\n1,2,High\n1,3,Low\n2,3,Low\n"
    );
}

#[test]
fn find_tsv_to_stdout() {
    let dir = TempDir::new().unwrap();
    let input = write_contacts(dir.path(), "contacts.csv", CONTACTS);

    dedup_cmd()
        .args(["find", input.to_str().unwrap(), "--format", "tsv"])
        .assert()
        .success()
        .stdout("ContactID Source\tContactID Match\tAccuracy\n1\t2\tHigh\n1\t3\tLow\n2\t3\tLow\n");
}

#[test]
fn find_json_with_min_accuracy() {
    let dir = TempDir::new().unwrap();
    let input = write_contacts(dir.path(), "contacts.csv", CONTACTS);

    let output = dedup_cmd()
        .args([
            "find",
            input.to_str().unwrap(),
            "--format",
            "json",
            "--min-accuracy",
            "medium",
        ])
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "find failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let json: Value = serde_json::from_slice(&output.stdout).expect("valid JSON from find");
    assert_eq!(json["contacts"], 3);
    assert_eq!(json["pairs_compared"], 3);
    assert_eq!(json["pairs_skipped"], 0);
    assert_eq!(json["min_accuracy"], "Medium");
    assert!(json["elapsed_seconds"].is_number());
    assert_eq!(json["config"]["scoring_weights"]["email_exact"], 50.0);
    assert_eq!(json["config"]["thresholds"]["high"], 80.0);
    assert_eq!(json["config"]["thresholds"]["medium"], 50.0);

    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["ContactID Source"], "1");
    assert_eq!(results[0]["ContactID Match"], "2");
    assert_eq!(results[0]["Accuracy"], "High");
}

#[test]
fn find_text_summary() {
    let dir = TempDir::new().unwrap();
    let input = write_contacts(dir.path(), "contacts.csv", CONTACTS);

    dedup_cmd()
        .args(["find", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pairs compared: 3"))
        .stdout(predicate::str::contains("High: 1  Medium: 0  Low: 2"));
}

#[test]
fn find_semicolon_delimited() {
    let dir = TempDir::new().unwrap();
    let input = write_contacts(
        dir.path(),
        "contacts.csv",
        &CONTACTS.replace(',', ";"),
    );

    dedup_cmd()
        .args([
            "find",
            input.to_str().unwrap(),
            "--delimiter",
            "semicolon",
            "--format",
            "tsv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1\t2\tHigh"));
}

#[test]
fn find_reads_stdin() {
    dedup_cmd()
        .args(["find", "-", "--format", "tsv"])
        .write_stdin(CONTACTS)
        .assert()
        .success()
        .stdout(predicate::str::contains("2\t3\tLow"));
}

#[test]
fn find_reports_skipped_pairs() {
    let dir = TempDir::new().unwrap();
    let input = write_contacts(
        dir.path(),
        "contacts.csv",
        "email,name\na@b.c,Ann\na@b.c,Ann\n",
    );

    dedup_cmd()
        .args(["find", input.to_str().unwrap(), "--format", "tsv"])
        .assert()
        .success()
        .stdout("ContactID Source\tContactID Match\tAccuracy\n")
        .stderr(predicate::str::contains("1 pairs could not be scored"));
}

#[test]
fn find_missing_file_fails() {
    dedup_cmd()
        .args(["find", "/nonexistent/contacts.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read contacts"));
}

#[test]
fn compare_shows_breakdown() {
    let dir = TempDir::new().unwrap();
    let input = write_contacts(dir.path(), "contacts.csv", CONTACTS);

    dedup_cmd()
        .args(["compare", input.to_str().unwrap(), "1", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Email: 50.00 / 50 (exact)"))
        .stdout(predicate::str::contains("Total: 110.00"))
        .stdout(predicate::str::contains("Accuracy: High"));
}

#[test]
fn compare_json() {
    let dir = TempDir::new().unwrap();
    let input = write_contacts(dir.path(), "contacts.csv", CONTACTS);

    let output = dedup_cmd()
        .args(["compare", input.to_str().unwrap(), "1", "3", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["contact_a"]["contactID"], "1");
    assert_eq!(json["contact_b"]["contactID"], "3");
    assert_eq!(json["score"]["accuracy"], "Low");
    assert_eq!(json["score"]["postal_zip"], 0.0);
    assert_eq!(json["weights"]["address"], 30.0);
}

#[test]
fn compare_unknown_id_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_contacts(dir.path(), "contacts.csv", CONTACTS);

    dedup_cmd()
        .args(["compare", input.to_str().unwrap(), "1", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Contact '99' not found"));
}
