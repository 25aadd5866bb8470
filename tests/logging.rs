//! Tests for file logging setup.

use clink_cmd::logging::init_tracing_to;
use tempfile::TempDir;

#[test]
fn log_file_gets_unique_suffix_and_receives_events() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let base = dir.path().join("clink-cmd.log");

    let path = init_tracing_to(&base).expect("tracing should initialize once");

    let prefix = format!("{}.", base.display());
    assert!(path.starts_with(&prefix), "unexpected log path: {path}");
    assert!(path.ends_with(&format!(".{}", std::process::id())));

    tracing::info!("shim log smoke test");
    let content = std::fs::read_to_string(&path).expect("log file should exist");
    assert!(content.contains("shim log smoke test"));
    assert!(content.contains("INFO"));

    // A second subscriber cannot be installed in the same process.
    assert!(init_tracing_to(&base).is_err());
}
