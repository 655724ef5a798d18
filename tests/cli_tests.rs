//! Integration tests for CLI functionality
//!
//! None of these reach the system bus: every case fails or exits before
//! a connection is opened.

use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

/// Get path to compiled binary
fn mmcli_cdma_bin() -> &'static std::path::Path {
    assert_cmd::cargo::cargo_bin!("mmcli-cdma")
}

/// Test that help flag works and lists the CDMA option group
#[test]
fn test_help_flag() {
    let output = Command::new(mmcli_cdma_bin())
        .arg("--help")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("CDMA options"));
    assert!(stdout.contains("--cdma-activate <CARRIER>"));
}

/// Test that version flag works
#[test]
fn test_version_flag() {
    Command::new(mmcli_cdma_bin())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mmcli-cdma"));
}

/// No action requested at all
#[test]
fn test_no_actions() {
    Command::new(mmcli_cdma_bin())
        .args(["-m", "0"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr("error: no actions specified\n");
}

/// Activation needs a modem
#[test]
fn test_activate_without_modem() {
    Command::new(mmcli_cdma_bin())
        .arg("--cdma-activate=Verizon")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr("error: no modem was specified\n");
}

/// Same check on the asynchronous path
#[test]
fn test_async_activate_without_modem() {
    Command::new(mmcli_cdma_bin())
        .args(["--async", "--cdma-activate", "Verizon"])
        .assert()
        .failure()
        .stderr("error: no modem was specified\n");
}

/// Unparseable modem selector
#[test]
fn test_invalid_modem_string() {
    Command::new(mmcli_cdma_bin())
        .args(["-m", "first", "--cdma-activate=Verizon"])
        .assert()
        .failure()
        .stderr("error: invalid modem string 'first'\n");
}

/// Leading zeros never match a manager object path
#[test]
fn test_modem_index_with_leading_zero() {
    Command::new(mmcli_cdma_bin())
        .args(["-m", "03", "--cdma-activate=Verizon"])
        .assert()
        .failure()
        .stderr("error: invalid modem string '03'\n");
}

/// Giving the activation flag twice is rejected by the parser
#[test]
fn test_repeated_activate() {
    Command::new(mmcli_cdma_bin())
        .args(["-m", "0", "--cdma-activate=Verizon", "--cdma-activate=Sprint"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--cdma-activate"));
}

/// Invalid timeout value
#[test]
fn test_invalid_timeout() {
    Command::new(mmcli_cdma_bin())
        .args(["--timeout", "soon", "-m", "0", "--cdma-activate=Verizon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid"));
}
