//! Test support utilities for vaultprops integration tests.
//!
//! The real backend shells out to the az CLI, so integration tests only
//! exercise paths that fail before any az invocation: argument validation
//! and credential validation.

#![allow(dead_code)]

use assert_cmd::Command;
use std::process::Output;
use tempfile::TempDir;

/// Environment variables the binary reads credentials from.
pub const CREDENTIAL_VARS: [&str; 3] =
    ["AZURE_CLIENT_ID", "AZURE_CLIENT_SECRET", "AZURE_TENANT_ID"];

/// Test environment with an isolated temp directory.
///
/// Child processes use `.current_dir()` so tests can safely run in
/// parallel; no process-global state is mutated.
pub struct Test {
    /// Temporary directory for output files
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a vaultprops command with a scrubbed credential environment.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("vaultprops").expect("failed to find vaultprops binary");
        for var in CREDENTIAL_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Path to a file inside the test directory.
    pub fn path(&self, name: &str) -> std::path::PathBuf {
        self.dir.path().join(name)
    }
}

/// Assert the command exited successfully.
pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "expected success, got {:?}\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Assert the command failed with exit code 1.
pub fn assert_failure(output: &Output) {
    assert_eq!(
        output.status.code(),
        Some(1),
        "expected exit code 1\nstdout: {}\nstderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
