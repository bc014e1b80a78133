//! Integration tests for the `pims-maint` CLI binary.
//!
//! These exercise the CLI as a subprocess, verifying exit codes and
//! stdout output. The table subcommands need no running server; `check`
//! is pointed at a dead port and must fail cleanly.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::process::Command;

/// Helper: run pims-maint with args and return (`exit_code`, stdout, stderr).
fn run(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_pims-maint"))
        .args(args)
        .env("PIMS_ADDR", "http://127.0.0.1:19999") // Non-existent server
        .output()
        .expect("failed to execute pims-maint");

    let code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (code, stdout, stderr)
}

// ── Version & help ───────────────────────────────────────────────────

#[test]
fn version_flag_exits_zero() {
    let (code, stdout, _) = run(&["--version"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("pims-maint"), "got: {stdout}");
}

#[test]
fn help_lists_subcommands() {
    let (code, stdout, _) = run(&["--help"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("routes"));
    assert!(stdout.contains("resolve"));
    assert!(stdout.contains("reverse"));
    assert!(stdout.contains("check"));
}

// ── Route table ──────────────────────────────────────────────────────

#[test]
fn routes_prints_the_table() {
    let (code, stdout, _) = run(&["routes"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("/maintenance/"));
    assert!(stdout.contains("/maintenance/{pk}/edit/"));
    assert!(stdout.contains("api_month_events"));
    assert!(stdout.contains("/health"));
}

#[test]
fn resolve_names_the_matched_route() {
    let (code, stdout, _) = run(&["resolve", "/maintenance/42/edit/"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("edit"));
    assert!(stdout.contains("pk=42"));
}

#[test]
fn resolve_miss_exits_nonzero() {
    let (code, _, stderr) = run(&["resolve", "/maintenance/nope/nope/"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("no route matches"));
}

#[test]
fn reverse_builds_the_url() {
    let (code, stdout, _) = run(&["reverse", "api_month_events", "2024", "3"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "/maintenance/api/calendar-month/2024/3/");
}

#[test]
fn reverse_unknown_name_exits_nonzero() {
    let (code, _, stderr) = run(&["reverse", "no_such_route"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown route name"));
}

#[test]
fn reverse_wrong_arity_exits_nonzero() {
    let (code, _, stderr) = run(&["reverse", "edit"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("parameter"));
}

// ── Server check ─────────────────────────────────────────────────────

#[test]
fn check_against_dead_server_fails_cleanly() {
    let (code, _, stderr) = run(&["check"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error"));
}
