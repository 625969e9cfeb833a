use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("catalogen").expect("binary builds")
}

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("catalogen_cli_{label}_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create temp out dir");
    dir
}

#[test]
fn generates_file_from_count_flag() {
    let out_dir = temp_out_dir("flag");
    cmd()
        .args(["--count", "5", "--out-dir"])
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(contains("Products were generated"));

    let contents = fs::read_to_string(out_dir.join("custom_test.txt")).expect("read output");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "Name, Vendor, Price, Department Rate");
}

#[test]
fn prompts_on_stdin_when_count_is_omitted() {
    let out_dir = temp_out_dir("stdin");
    cmd()
        .arg("--out-dir")
        .arg(&out_dir)
        .write_stdin("3\n")
        .assert()
        .success()
        .stdout(contains("How many products would you like to generate?"));

    let contents = fs::read_to_string(out_dir.join("custom_test.txt")).expect("read output");
    assert_eq!(contents.lines().count(), 4);
}

#[test]
fn rejects_non_numeric_count() {
    let out_dir = temp_out_dir("nan");
    cmd()
        .args(["--count", "abc", "--out-dir"])
        .arg(&out_dir)
        .assert()
        .failure()
        .stderr(contains("not a number"));

    assert!(!out_dir.join("custom_test.txt").exists());
}

#[test]
fn rejects_zero_count() {
    let out_dir = temp_out_dir("zero");
    cmd()
        .args(["--count", "0", "--out-dir"])
        .arg(&out_dir)
        .assert()
        .failure()
        .stderr(contains("too little input"));

    assert!(!out_dir.join("custom_test.txt").exists());
}

#[test]
fn rejects_count_above_the_limit() {
    let out_dir = temp_out_dir("limit");
    cmd()
        .args(["--count", "2000000", "--out-dir"])
        .arg(&out_dir)
        .assert()
        .failure()
        .stderr(contains("too much input"));

    assert!(!out_dir.join("custom_test.txt").exists());
}

#[test]
fn reports_write_failure_with_detail() {
    cmd()
        .args(["--count", "1", "--out-dir", "/nonexistent/catalogen"])
        .assert()
        .failure()
        .stderr(contains("check permissions"));
}
