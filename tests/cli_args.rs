//! Tests for the clink-cmd binary in print mode.
//!
//! Print mode writes the rewritten command line to stdout instead of
//! starting the shell, so the real binary can be exercised anywhere.

use std::process::{Command, Output};

use clink_cmd::config::{DEFAULT_PAYLOAD, DEFAULT_SHELL, LOG_ENV, PRINT_ENV};

fn clink_cmd(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_clink-cmd"))
        .args(args)
        .env(PRINT_ENV, "1")
        .env_remove(LOG_ENV)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_no_args_starts_interactive_payload() {
    let output = clink_cmd(&[]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim_end(),
        format!(r#"{DEFAULT_SHELL} /S/K "{DEFAULT_PAYLOAD}""#)
    );
}

#[test]
fn test_k_command_is_chained_after_payload() {
    let output = clink_cmd(&["/K", "echo", "hi"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim_end(),
        format!(r#"{DEFAULT_SHELL} /S/K "{DEFAULT_PAYLOAD} && echo hi""#)
    );
}

#[test]
fn test_help_is_forwarded() {
    let output = clink_cmd(&["/?"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), format!("{DEFAULT_SHELL} /?"));
}

// Windows refuses to start a child with a command line this long.
#[cfg(not(windows))]
#[test]
fn test_oversized_command_exits_with_one() {
    let filler = "x".repeat(40_000);
    let output = clink_cmd(&["/C", &filler]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "nothing should be printed");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("character limit"),
        "Expected length error, got: {}",
        stderr
    );
}
