use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

const LOOKUP: &str = "dstport,protocol,tag\n443,tcp,sv_P2\n23,tcp,sv_P1\n25,tcp,sv_P1\n";
const FLOW_LOG: &str = "\
2 123456789012 eni-0a1b2c3d 10.0.1.201 198.51.100.2 49153 443 6 25 20000 1620140761 1620140821 ACCEPT OK
2 123456789012 eni-0a1b2c3d 10.0.1.201 198.51.100.2 49153 23 6 25 20000 1620140761 1620140821 ACCEPT OK
not a flow log line
2 123456789012 eni-0a1b2c3d 10.0.1.201 198.51.100.2 49153 25 6 25 20000 1620140761 1620140821 ACCEPT OK
";

fn flowtag(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_flowtag"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .arg("--log-format")
        .arg("json")
        .args(args)
        .output()
        .expect("failed to run flowtag")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn analyze_writes_report_and_exits_zero() {
    // Arrange
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("lookup.csv"), LOOKUP).unwrap();
    fs::write(dir.path().join("flow.log"), FLOW_LOG).unwrap();

    // Act
    let out = flowtag(dir.path(), &["analyze", "lookup.csv", "flow.log", "output.txt"]);

    // Assert
    assert_eq!(out.status.code(), Some(0), "{}", stderr(&out));
    assert!(String::from_utf8_lossy(&out.stdout).contains("Analysis complete"));
    assert!(stderr(&out).contains("skipping invalid line"));

    let report = fs::read_to_string(dir.path().join("output.txt")).unwrap();
    assert!(report.starts_with("Tag Counts:\nTag,Count\nsv_P1,2\nsv_P2,1\n"));
}

#[test]
fn missing_lookup_exits_one() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("flow.log"), FLOW_LOG).unwrap();

    let out = flowtag(dir.path(), &["analyze", "nonexistent.csv", "flow.log", "output.txt"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("lookup file not found"));
    assert!(!dir.path().join("output.txt").exists());
}

#[test]
fn wrong_arity_is_a_usage_error() {
    let dir = tempdir().unwrap();

    let out = flowtag(dir.path(), &["analyze", "lookup.csv"]);

    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn config_file_limit_is_enforced() {
    // Arrange
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("lookup.csv"), LOOKUP).unwrap();
    fs::write(dir.path().join("flow.log"), FLOW_LOG).unwrap();
    fs::write(dir.path().join("flowtag.toml"), "max_input_bytes = 16\n").unwrap();

    // Act
    let out = flowtag(
        dir.path(),
        &[
            "analyze",
            "lookup.csv",
            "flow.log",
            "output.txt",
            "--config",
            "flowtag.toml",
        ],
    );

    // Assert
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("exceeds maximum allowed size"));
    assert!(!dir.path().join("output.txt").exists());
}

#[test]
fn check_reports_table_summary_as_json() {
    // Arrange
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("lookup.csv"), LOOKUP).unwrap();

    // Act
    let out = flowtag(dir.path(), &["check", "lookup.csv", "--json"]);

    // Assert
    assert_eq!(out.status.code(), Some(0), "{}", stderr(&out));
    let summary: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(summary["lookup_entries"], 3);
    assert_eq!(summary["distinct_tags"], 2);
    assert_eq!(summary["protocol_source"], "builtin");
    assert_eq!(summary["protocol_entries"], 3);
}
