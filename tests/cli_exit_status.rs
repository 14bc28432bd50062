//! End-to-end checks of the `knapsack` binary: output and exit codes.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn knapsack(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_knapsack"))
        .args(args)
        .output()
        .expect("spawn knapsack")
}

fn scratch_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("knapsack-{}-{name}", std::process::id()))
}

#[test]
fn demo_instance_prints_answer_and_succeeds() {
    let out = knapsack(&[]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "309\n");

    let out = knapsack(&["--rolling"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "309\n");
}

#[test]
fn input_errors_exit_with_two() {
    assert_eq!(knapsack(&["--capacity", "-1"]).status.code(), Some(2));
    assert_eq!(knapsack(&["--weights", "0", "--values", "1"]).status.code(), Some(2));
    assert_eq!(knapsack(&["--weights", "1,2", "--values", "1"]).status.code(), Some(2));
    assert_eq!(knapsack(&["--bogus", "1"]).status.code(), Some(2));
    assert_eq!(knapsack(&["--max-cells", "0"]).status.code(), Some(2));
}

#[test]
fn failed_build_leaves_existing_output_alone() {
    let path = scratch_file("failed-build.csv");
    fs::write(&path, "previous contents\n").unwrap();

    let out = knapsack(&[
        "--format",
        "legacy",
        "--max-cells",
        "1",
        "--output",
        path.to_str().unwrap(),
    ]);
    let kept = fs::read_to_string(&path).unwrap();
    let _ = fs::remove_file(&path);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("resource exhaustion"));
    assert_eq!(kept, "previous contents\n");
}

#[test]
fn successful_build_writes_legacy_file() {
    let path = scratch_file("legacy.csv");
    let out = knapsack(&[
        "--weights",
        "3,2",
        "--values",
        "4,3",
        "--capacity",
        "5",
        "--format",
        "legacy",
        "--output",
        path.to_str().unwrap(),
    ]);
    let written = fs::read_to_string(&path).unwrap();
    let _ = fs::remove_file(&path);

    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty());
    assert_eq!(written, "2,0,0,3,3,3,3\n3,0,0,3,4,4,7\n");
}
