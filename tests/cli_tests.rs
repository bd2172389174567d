//! End-to-end tests for the str-profiler binary
//!
//! These drive the compiled CLI against temporary sequence and database
//! files and check the rendered verdicts.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const SEQUENCE: &str = "AGACGGGTTACCATGACTATCTATCTATCTATCTATCTATCTATCTATCACGTACGTACGTATCGAGATAGATAGATAGATAGATCCTCGACTTCGATCGCAATGAATGCCAATAGACAAAA";

const DATABASE_CSV: &str = "name,AGAT,AATG,TATC
Abel,3,7,4
Cain,5,2,8
Seth,5,2,7
";

fn write_temp(suffix: &str, content: &str) -> NamedTempFile {
    let mut temp = NamedTempFile::with_suffix(suffix).expect("Failed to create temp file");
    temp.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    temp.flush().expect("Failed to flush temp file");
    temp
}

fn str_profiler() -> Command {
    Command::cargo_bin("str-profiler").expect("binary should be built")
}

#[test]
fn test_identify_text_output() {
    let sequence = write_temp(".txt", SEQUENCE);
    let database = write_temp(".csv", DATABASE_CSV);

    str_profiler()
        .arg("identify")
        .arg(sequence.path())
        .arg(database.path())
        .assert()
        .success()
        .stdout("Abel innocent\nCain guilty\nSeth innocent\n");
}

#[test]
fn test_identify_guilty_only() {
    let sequence = write_temp(".txt", SEQUENCE);
    let database = write_temp(".csv", DATABASE_CSV);

    str_profiler()
        .args(["identify", "--guilty-only"])
        .arg(sequence.path())
        .arg(database.path())
        .assert()
        .success()
        .stdout("Cain guilty\n");
}

#[test]
fn test_identify_guilty_only_no_match() {
    let sequence = write_temp(".txt", "ACGTACGTACGT");
    let database = write_temp(".csv", DATABASE_CSV);

    str_profiler()
        .args(["identify", "--guilty-only"])
        .arg(sequence.path())
        .arg(database.path())
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("No match"));
}

#[test]
fn test_identify_fasta_from_stdin() {
    let database = write_temp(".csv", DATABASE_CSV);

    // Wrapped FASTA lines are joined before counting
    let (first, second) = SEQUENCE.split_at(60);
    let fasta = format!(">crime_scene\n{first}\n{second}\n");

    str_profiler()
        .args(["identify", "-"])
        .arg(database.path())
        .write_stdin(fasta)
        .assert()
        .success()
        .stdout(predicate::str::contains("Cain guilty"));
}

#[test]
fn test_identify_tsv_database() {
    let sequence = write_temp(".txt", SEQUENCE);
    let database = write_temp(".tsv", "name\tAGAT\tAATG\tTATC\nCain\t5\t2\t8\n");

    str_profiler()
        .arg("identify")
        .arg(sequence.path())
        .arg(database.path())
        .assert()
        .success()
        .stdout("Cain guilty\n");
}

#[test]
fn test_identify_json_output() {
    let sequence = write_temp(".txt", SEQUENCE);
    let database = write_temp(".csv", DATABASE_CSV);

    let output = str_profiler()
        .args(["--format", "json", "identify"])
        .arg(sequence.path())
        .arg(database.path())
        .output()
        .expect("Failed to run binary");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be valid JSON");
    let suspects = json["suspects"].as_array().expect("suspects array");
    assert_eq!(suspects.len(), 3);
    assert_eq!(suspects[1]["name"], "Cain");
    assert_eq!(suspects[1]["verdict"], "guilty");
    assert_eq!(suspects[2]["markers"][2]["observed"], 8);
    assert_eq!(suspects[2]["markers"][2]["matches"], false);
    assert_eq!(json["sequence"]["length"], SEQUENCE.len());

    let md5 = json["sequence"]["md5"].as_str().expect("md5 string");
    assert_eq!(md5.len(), 32);
    assert!(md5.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(json["markers"], serde_json::json!(["AGAT", "AATG", "TATC"]));
    for suspect in suspects {
        for marker in suspect["markers"].as_array().expect("markers array") {
            assert!(marker["matches"].is_boolean());
        }
    }
    assert_eq!(suspects[1]["markers"][0]["matches"], true);
}

#[test]
fn test_identify_tsv_output() {
    let sequence = write_temp(".txt", SEQUENCE);
    let database = write_temp(".csv", DATABASE_CSV);

    str_profiler()
        .args(["--format", "tsv", "identify"])
        .arg(sequence.path())
        .arg(database.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "name\tverdict\tAGAT\tAATG\tTATC\nAbel\tinnocent\t5\t2\t8\n",
        ));
}

#[test]
fn test_identify_verbose_reports_markers() {
    let sequence = write_temp(".txt", SEQUENCE);
    let database = write_temp(".csv", DATABASE_CSV);

    str_profiler()
        .args(["identify", "--verbose"])
        .arg(sequence.path())
        .arg(database.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "TATC: expected 7, observed 8 (MISMATCH)",
        ));
}

#[test]
fn test_identify_ignore_case() {
    let sequence = write_temp(".txt", &SEQUENCE.to_ascii_lowercase());
    let database = write_temp(".csv", DATABASE_CSV);

    str_profiler()
        .args(["identify", "--guilty-only", "--ignore-case"])
        .arg(sequence.path())
        .arg(database.path())
        .assert()
        .success()
        .stdout("Cain guilty\n");
}

#[test]
fn test_identify_ignore_case_reports_case_variant_markers() {
    let sequence = write_temp(".txt", "TTAGATAGATAGATAGATAGATTT");
    let database = write_temp(".csv", "name,AGAT,agat\nEnos,9,5\n");

    str_profiler()
        .args(["--format", "tsv", "identify", "--ignore-case"])
        .arg(sequence.path())
        .arg(database.path())
        .assert()
        .success()
        .stdout("name\tverdict\tAGAT\tagat\nEnos\tinnocent\t5\t5\n");
}

#[test]
fn test_identify_malformed_database() {
    let sequence = write_temp(".txt", SEQUENCE);
    let database = write_temp(".csv", "name,AGAT\nCain,five\n");

    str_profiler()
        .arg("identify")
        .arg(sequence.path())
        .arg(database.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid count"));
}

#[test]
fn test_identify_missing_sequence_file() {
    let database = write_temp(".csv", DATABASE_CSV);

    str_profiler()
        .args(["identify", "/nonexistent/sequence.txt"])
        .arg(database.path())
        .assert()
        .failure();
}

#[test]
fn test_count_text_output() {
    let sequence = write_temp(".txt", SEQUENCE);

    str_profiler()
        .arg("count")
        .arg(sequence.path())
        .args(["AGAT", "AATG", "TATC", "GGGG"])
        .assert()
        .success()
        .stdout("AGAT\t5\nAATG\t2\nTATC\t8\nGGGG\t0\n");
}

#[test]
fn test_count_json_output() {
    let sequence = write_temp(".txt", "CTAGATAGATAGATAGATGACTA");

    let output = str_profiler()
        .args(["-f", "json", "count"])
        .arg(sequence.path())
        .arg("AGAT")
        .output()
        .expect("Failed to run binary");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be valid JSON");
    assert_eq!(json["AGAT"], 4);
}

#[test]
fn test_count_rejects_empty_marker() {
    let sequence = write_temp(".txt", SEQUENCE);

    str_profiler()
        .arg("count")
        .arg(sequence.path())
        .arg("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid marker"));
}
