//! Shared integration-test harness for running the `confdoc` binary.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

/// Helpers for spawning `confdoc` as a child process.
pub struct ConfdocProcess;

impl ConfdocProcess {
    /// Runs `confdoc` with the given arguments and waits for it to exit.
    ///
    /// Inherited catalog and logging variables are cleared so tests only
    /// see what they pass explicitly.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_command(args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_confdoc"))
            .args(args)
            .env_remove("CONFDOC_CATALOG")
            .env_remove("CONFDOC_LOG_LEVEL")
            .env_remove("CONFDOC_LOG_FORMAT")
            .env_remove("CONFDOC_COLOR")
            .output()
            .expect("failed to spawn confdoc")
    }

    /// Returns the path to a test fixture.
    #[must_use]
    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }
}
