//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every helper

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the tokensmith binary built for this test run.
pub fn tokensmith_bin() -> &'static str {
    env!("CARGO_BIN_EXE_tokensmith")
}

/// An isolated config directory; every command it builds points
/// `TOKENSMITH_CONFIG_DIR` at it so tests never touch the real config.
pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    /// Creates an empty config directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Creates a config directory holding `content` as config.toml.
    pub fn with_config(content: &str) -> Self {
        let env = Self::new();
        fs::write(env.config_file(), content).expect("Failed to write config");
        env
    }

    /// The config directory.
    pub fn config_dir(&self) -> &Path {
        self.dir.path()
    }

    /// The config file inside the directory (may not exist yet).
    pub fn config_file(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    /// Builds a command with isolated config and no inherited log filter.
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(tokensmith_bin());
        cmd.env("TOKENSMITH_CONFIG_DIR", self.config_dir());
        cmd.env_remove("RUST_LOG");
        cmd.args(args);
        cmd
    }

    /// Runs a command to completion.
    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("Failed to execute command")
    }
}

/// Runs `args` in a fresh isolated environment.
pub fn run(args: &[&str]) -> Output {
    TestEnv::new().run(args)
}

/// Parses stdout as JSON, failing the test with stderr on error.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).unwrap_or_else(|e| {
        panic!(
            "stdout is not JSON ({e}).\nstdout: {stdout}\nstderr: {}",
            String::from_utf8_lossy(&output.stderr)
        )
    })
}

/// Stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
