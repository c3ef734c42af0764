use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

mod common;

#[test]
fn test_discount_batch_csv() {
    let mut cmd = Command::new(cargo_bin!("pricecalc"));
    cmd.args(["discount", "--input", "tests/fixtures/discounts.csv"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "price,discount_percent,final_price,discounted,error",
        ))
        .stdout(predicate::str::contains("100,20,80,true,"))
        .stdout(predicate::str::contains("100,19.999,100,false,"))
        .stdout(predicate::str::contains("59.99,50,29.995,true,"))
        .stdout(predicate::str::contains("abc,20,,,"));
}

#[test]
fn test_operation_batch_csv() {
    let mut cmd = Command::new(cargo_bin!("pricecalc"));
    cmd.args(["calc", "--input", "tests/fixtures/operations.csv"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("a,b,operator,result,error"))
        .stdout(predicate::str::contains("6,3,+,9,"))
        .stdout(predicate::str::contains("6,3,-,3,"))
        .stdout(predicate::str::contains("6,3,*,18,"))
        .stdout(predicate::str::contains("6,3,/,2,"))
        .stdout(predicate::str::contains("5,0,/,,Division by zero is undefined"))
        .stdout(predicate::str::contains("5,2,%,,"));
}

#[test]
fn test_operation_batch_json() {
    let mut cmd = Command::new(cargo_bin!("pricecalc"));
    cmd.args([
        "calc",
        "--input",
        "tests/fixtures/operations.csv",
        "--format",
        "json",
    ]);

    let output = cmd.output().expect("Failed to execute command");
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[3]["result"], "2");
    assert!(rows[4]["result"].is_null());
    assert_eq!(rows[4]["error"], "Division by zero is undefined");
}

#[test]
fn test_unreadable_rows_are_skipped() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "a, b, operator").unwrap();
    writeln!(file, "1, 1, +").unwrap();
    writeln!(file, "2").unwrap();
    writeln!(file, "2, 2, *").unwrap();

    let mut cmd = Command::new(cargo_bin!("pricecalc"));
    cmd.arg("calc").arg("--input").arg(file.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Skipped 1 unreadable row(s)"))
        .stdout(predicate::str::contains("1,1,+,2,"))
        .stdout(predicate::str::contains("2,2,*,4,"));
}

#[test]
fn test_missing_input_file_fails() {
    let mut cmd = Command::new(cargo_bin!("pricecalc"));
    cmd.args(["discount", "--input", "does/not/exist.csv"]);

    cmd.assert().failure();
}

#[test]
fn test_generated_discount_batch() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("generated.csv");
    common::generate_discount_csv(&path, 200).expect("Failed to generate CSV");

    let mut cmd = Command::new(cargo_bin!("pricecalc"));
    cmd.arg("discount").arg("--input").arg(&path);

    let output = cmd.output().expect("Failed to execute command");
    assert!(output.status.success());

    let mut reader = csv::Reader::from_reader(output.stdout.as_slice());
    let mut discounted = 0;
    for record in reader.records() {
        let record = record.expect("Failed to read record");
        let percent: u32 = record[1].parse().unwrap();
        let is_discounted = &record[3] == "true";
        assert_eq!(is_discounted, percent >= 20, "row {record:?}");
        if is_discounted {
            discounted += 1;
        }
    }
    // Percentages 20..=99 of each block of 100.
    assert_eq!(discounted, 160);
}
