//! End-to-end CLI tests for the hd-core binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const FAMILY_CSV: &str = "\
name,mother,father,trait
Harry,Lily,James,
James,,,1
Lily,,,0
";

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn hd_core() -> Command {
    Command::cargo_bin("hd-core").unwrap()
}

#[test]
fn renders_text_report() {
    let data = write_temp(FAMILY_CSV);
    hd_core()
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Harry:"))
        .stdout(predicate::str::contains("  Gene:"))
        .stdout(predicate::str::contains("  Trait:"))
        .stdout(predicate::str::contains("    True: 1.0000"));
}

#[test]
fn renders_json_report() {
    let data = write_temp(FAMILY_CSV);
    let output = hd_core()
        .arg(data.path())
        .args(["--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 3);
    assert!(parsed[0]["gene"].is_array());
}

#[test]
fn missing_data_file_exits_with_data_error() {
    hd_core()
        .arg("/nonexistent/family.csv")
        .assert()
        .failure()
        .code(11)
        .stderr(predicate::str::contains("error[20]"));
}

#[test]
fn invalid_trait_cell_exits_with_data_error() {
    let data = write_temp("name,mother,father,trait\nSolo,,,maybe\n");
    hd_core().arg(data.path()).assert().failure().code(11);
}

#[test]
fn invalid_model_file_exits_with_config_error() {
    let data = write_temp(FAMILY_CSV);
    let model = write_temp("{not valid json}");
    hd_core()
        .arg(data.path())
        .arg("--model")
        .arg(model.path())
        .assert()
        .failure()
        .code(10);
}

#[test]
fn inconsistent_evidence_exits_with_inference_error() {
    // A model under which the trait is impossible, plus an observed
    // trait, leaves no consistent world.
    let data = write_temp("name,mother,father,trait\nSolo,,,1\n");
    let model = write_temp(
        r#"{"gene_prior": [0.96, 0.03, 0.01], "trait_given": [0.0, 0.0, 0.0], "mutation": 0.01}"#,
    );
    hd_core()
        .arg(data.path())
        .arg("--model")
        .arg(model.path())
        .assert()
        .failure()
        .code(12)
        .stderr(predicate::str::contains("no possible world"));
}

#[test]
fn custom_model_overrides_default() {
    // Deterministic model: everyone has one gene regardless of pedigree.
    let data = write_temp("name,mother,father,trait\nSolo,,,\n");
    let model = write_temp(
        r#"{"gene_prior": [0.0, 1.0, 0.0], "trait_given": [0.01, 0.56, 0.65], "mutation": 0.01}"#,
    );
    hd_core()
        .arg(data.path())
        .arg("--model")
        .arg(model.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("    1: 1.0000"));
}

#[test]
fn unknown_format_is_a_usage_error() {
    let data = write_temp(FAMILY_CSV);
    hd_core()
        .arg(data.path())
        .args(["--format", "yaml"])
        .assert()
        .failure()
        .code(2);
}
