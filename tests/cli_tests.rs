//! Integration tests for the cw CLI
//!
//! These tests run the actual binary and verify output and exit status.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get the binary to test
fn cw_cmd() -> Command {
    Command::cargo_bin("cw").unwrap()
}

fn write_run(dir: &TempDir) -> (String, String) {
    let src = dir.path().join("call-add_norm/inter_30.hic");
    fs::create_dir_all(src.parent().unwrap()).unwrap();
    fs::write(&src, "hic").unwrap();

    let metadata = serde_json::json!({
        "workflowName": "hic",
        "calls": {
            "hic.add_norm": [
                {"shardIndex": -1, "executionStatus": "Done",
                 "outputs": {"output_hic": src}},
            ],
        }
    });
    let metadata_file = dir.path().join("metadata.json");
    fs::write(&metadata_file, metadata.to_string()).unwrap();

    let dest = dir.path().join("outputs");
    fs::create_dir_all(&dest).unwrap();

    (
        metadata_file.to_string_lossy().into_owned(),
        dest.to_string_lossy().into_owned(),
    )
}

#[test]
fn test_help_flag() {
    cw_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cromwell on MGI Compute"))
        .stdout(predicate::str::contains("outputs"));
}

#[test]
fn test_outputs_help_mentions_cromshell() {
    cw_cmd()
        .args(["outputs", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cromshell metadata"));
}

#[test]
fn test_pipelines_lists_encode_hic() {
    cw_cmd()
        .arg("pipelines")
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("encode_hic"))
        .stdout(predicate::str::contains("hic.calculate_stats: stats stats_json"));
}

#[test]
fn test_outputs_known_pipeline() {
    let dir = TempDir::new().unwrap();
    let (metadata_file, dest) = write_run(&dir);

    cw_cmd()
        .args(["outputs", &metadata_file, &dest, "encode_hic"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[INFO] Task <hic.add_norm> files: <output_hic>",
        ))
        .stdout(predicate::str::contains("[INFO] Found 1 of 1 tasks DONE"))
        .stdout(predicate::str::ends_with("[INFO] Done\n"))
        .stderr(predicate::str::contains(
            "[WARN] No task found for <hic.hiccups> ... skipping",
        ));

    assert!(dir.path().join("outputs/add_norm/inter_30.hic").is_file());
}

#[test]
fn test_outputs_missing_metadata_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("metadata.json");

    cw_cmd()
        .env("NO_COLOR", "1")
        .args([
            "outputs",
            missing.to_str().unwrap(),
            dir.path().to_str().unwrap(),
            "encode_hic",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("does not exist!"))
        .stderr(predicate::str::contains("cromshell metadata"));
}

#[test]
fn test_outputs_missing_destination_fails() {
    let dir = TempDir::new().unwrap();
    let (metadata_file, _) = write_run(&dir);
    let missing = dir.path().join("nowhere");

    cw_cmd()
        .args(["outputs", &metadata_file, missing.to_str().unwrap(), "encode_hic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Destination directory"));
}

#[test]
fn test_outputs_unknown_pipeline_fails() {
    let dir = TempDir::new().unwrap();
    let (metadata_file, dest) = write_run(&dir);

    cw_cmd()
        .args(["outputs", &metadata_file, &dest, "unknown"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No such known pipeline <unknown>."));
}

#[test]
fn test_outputs_requires_three_arguments() {
    cw_cmd().args(["outputs", "metadata.json"]).assert().failure();
}
