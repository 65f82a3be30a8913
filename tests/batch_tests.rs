//! Batch calculation tests

mod common;

use common::{viscalc, write_file};
use predicates::prelude::*;
use tempfile::TempDir;

const SAMPLE: &str = "\
product,grade,initial_viscosity,treat_rate
decon-hd,220,200,10
decon-a,68,70,5
decon,46,,10
decon,46,45,150
";

#[test]
fn test_batch_csv_output() {
    let tmp = TempDir::new().unwrap();
    let input = write_file(&tmp, "samples.csv", SAMPLE);

    let output = viscalc().arg("batch").arg(&input).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("product,grade,"));
    assert!(lines[1].contains("computed,195.6,false"));
    assert!(lines[2].contains("computed,61.5,true"));
    assert!(lines[3].contains(",incomplete,"));
    assert!(lines[4].contains(",invalid,"));
    assert!(lines[4].contains("Treat rate must be 0–100%."));
}

#[test]
fn test_batch_from_stdin_json() {
    let output = viscalc()
        .args(["batch", "-", "-o", "json"])
        .write_stdin(SAMPLE)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["state"], "computed");
    assert_eq!(rows[0]["model"], "Decon HD · ISO 220");
    assert_eq!(rows[2]["state"], "incomplete");
    assert!(rows[2]["estimate_cst"].is_null());
}

#[test]
fn test_batch_does_not_reconcile_grades() {
    let output = viscalc()
        .args(["batch", "-"])
        .write_stdin("product,grade,initial_viscosity,treat_rate\ndecon-hd,46,45,10\n")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains(",unmapped,"));
}

#[test]
fn test_batch_tsv_precision() {
    viscalc()
        .args(["batch", "-", "-o", "tsv", "--precision", "2"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("computed\t61.47\ttrue"));
}

#[test]
fn test_batch_missing_file_fails() {
    let tmp = TempDir::new().unwrap();
    viscalc()
        .arg("batch")
        .arg(tmp.path().join("missing.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot open"));
}

#[test]
fn test_batch_malformed_record_fails() {
    viscalc()
        .args(["batch", "-"])
        .write_stdin("product,initial_viscosity\ndecon,45\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid CSV record at line 2"));
}
