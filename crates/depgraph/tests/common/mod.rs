//! Common test utilities shared across integration tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Path of the depgraph binary built for this test run
pub fn depgraph_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_depgraph"))
}

/// Run the depgraph binary in the specified directory with colors disabled
pub fn run_depgraph_in_dir(dir: &Path, args: &[&str]) -> Output {
    Command::new(depgraph_binary())
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("DEPGRAPH_ASCII")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute depgraph binary")
}

/// Write a manifest file into `dir`, returning its path
pub fn write_manifest(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write manifest");
    path
}
