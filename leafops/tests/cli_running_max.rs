//! CLI tests for `leafops running-max`.
//!
//! Spawns the leafops binary and verifies stdout and exit codes for computed
//! and absent results.

use std::fs;
use std::process::Command;

use leafops::exit_codes;
use leafops::test_support::workspace_with_config;

fn leafops() -> Command {
    Command::new(env!("CARGO_BIN_EXE_leafops"))
}

#[test]
fn running_max_prints_prefix_maxima() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = leafops()
        .current_dir(temp.path())
        .args(["running-max", "3", "1", "4", "1", "5", "9", "2", "6"])
        .output()
        .expect("leafops running-max");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "3 3 4 4 5 9 9 9\n");
}

#[test]
fn running_max_without_values_is_absent() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = leafops()
        .current_dir(temp.path())
        .arg("running-max")
        .output()
        .expect("leafops running-max");

    assert_eq!(output.status.code(), Some(exit_codes::ABSENT));
    assert!(output.stdout.is_empty());
}

#[test]
fn running_max_zero_count_is_absent() {
    let temp = tempfile::tempdir().expect("tempdir");
    let status = leafops()
        .current_dir(temp.path())
        .args(["running-max", "--count", "0", "5", "6"])
        .status()
        .expect("leafops running-max");

    assert_eq!(status.code(), Some(exit_codes::ABSENT));
}

#[test]
fn running_max_reads_file_and_honors_json_output() {
    let (temp, _config) =
        workspace_with_config("[output]\nformat = \"json\"\n").expect("workspace");
    let input = temp.path().join("values.json");
    fs::write(&input, "[-4, -9, 2, 1]\n").expect("write input");

    let output = leafops()
        .current_dir(temp.path())
        .args(["running-max", "--file"])
        .arg(&input)
        .output()
        .expect("leafops running-max");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "[-4,-4,2,2]\n");
}

#[test]
fn running_max_invalid_file_contents_is_invalid() {
    let temp = tempfile::tempdir().expect("tempdir");
    let input = temp.path().join("values.txt");
    fs::write(&input, "1 two 3\n").expect("write input");

    let output = leafops()
        .current_dir(temp.path())
        .args(["running-max", "--file"])
        .arg(&input)
        .output()
        .expect("leafops running-max");

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid integer 'two'"));
}
