//! Shared test helpers for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo;
use assert_cmd::Command;
use tempfile::TempDir;

/// Helper to get a viscalc command isolated from the user's config
pub fn viscalc() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("viscalc"));
    cmd.env("XDG_CONFIG_HOME", "/nonexistent/viscalc-tests")
        .env_remove("VISCALC_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// Helper to write a file into a temp directory, returning its path
pub fn write_file(tmp: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = tmp.path().join(name);
    fs::write(&path, content).unwrap();
    path
}
