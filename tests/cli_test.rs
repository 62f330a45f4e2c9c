/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary and verify command-line behavior
mod common;

use assert_cmd::Command;
use common::{LogDir, RecordLineBuilder};
use predicates::prelude::*;

const REFERENCE_LINE: &str =
    "IN     101    T01    18005551212           09:15    S=125    $00.45    1234    *";

fn logger() -> Command {
    Command::new(env!("CARGO_BIN_EXE_smdr-logger"))
}

#[test]
fn test_cli_help_flag() {
    logger()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Log SMDR call records"))
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--baud"))
        .stdout(predicate::str::contains("--logfile"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_cli_version_flag() {
    logger().arg("--version").assert().success().stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_cli_invalid_option_prints_usage() {
    logger().arg("-x").assert().code(64).stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_missing_port_exits_with_transport_status() {
    let logs = LogDir::new();
    let diag = logs.path().join("diag.txt");

    logger()
        .arg("-p")
        .arg(logs.path().join("no-such-port"))
        .arg("-l")
        .arg(&diag)
        .arg("--base-dir")
        .arg(logs.path())
        .env_remove("RUST_LOG")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to open serial connection"));

    let diagnostics = logs.read(&diag);
    assert!(diagnostics.contains("Starting SMDR processing"));
    assert!(diagnostics.contains("Failed to open serial connection"));
}

#[test]
fn test_cli_once_from_stdin_writes_logs() {
    let logs = LogDir::new();
    let diag = logs.path().join("diag.txt");
    let input = format!(
        "Station Message Detail Recording\n{}\ngarbage data here\n{}\n",
        REFERENCE_LINE,
        RecordLineBuilder::new().call_type("TLC").extension("230").build()
    );

    logger()
        .args(["-p", "-", "--once", "-l"])
        .arg(&diag)
        .arg("--base-dir")
        .arg(logs.path())
        .env_remove("RUST_LOG")
        .write_stdin(input)
        .assert()
        .success();

    let index = logs.read(&logs.index());
    assert_eq!(logs.index_rows(), 1);

    // The logs are named after the host's date; find today's files through the index
    let day = index
        .split("href=\"smdr-")
        .nth(1)
        .and_then(|rest| rest.split(".html").next())
        .expect("index links a daily log")
        .to_string();

    let csv = logs.read(&logs.daily_csv(&day));
    assert_eq!(csv.lines().count(), 4);
    assert!(csv.contains(", IN, 101, 18005551212, , 09:15, 0:02:05, 1234"));
    assert!(csv.contains(", TLC, 230, "));

    let html = logs.read(&logs.daily_html(&day));
    assert!(html.contains("incoming.png"));
    assert!(html.contains("outgoing.png"));

    let diagnostics = logs.read(&diag);
    assert!(diagnostics.contains("Line was garbage data here"));
    assert!(diagnostics.contains("WARN"));
}

#[test]
fn test_cli_debug_flag_logs_records() {
    let logs = LogDir::new();
    let diag = logs.path().join("diag.txt");

    logger()
        .args(["-p", "-", "--once", "-d", "-l"])
        .arg(&diag)
        .arg("--base-dir")
        .arg(logs.path())
        .env_remove("RUST_LOG")
        .write_stdin(format!("{}\n", REFERENCE_LINE))
        .assert()
        .success();

    let diagnostics = logs.read(&diag);
    assert!(diagnostics.contains("Debug logging is ON"));
    assert!(diagnostics.contains("Processed line:"));
}

#[test]
fn test_cli_check_subcommand() {
    let logs = LogDir::new();
    let capture = logs.path().join("capture.txt");
    std::fs::write(
        &capture,
        format!("TYP EXTN TRUNK\n{}\nnot a record\n", REFERENCE_LINE),
    )
    .unwrap();

    logger()
        .arg("check")
        .arg(&capture)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total lines: 3"))
        .stdout(predicate::str::contains("Call records: 1"))
        .stdout(predicate::str::contains("Ignored: 1"))
        .stdout(predicate::str::contains("line 3: not a record"));

    assert!(!logs.path().join("logs").exists());
}

#[test]
fn test_cli_check_missing_file() {
    logger()
        .args(["check", "/nonexistent/capture.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open capture file"));
}
