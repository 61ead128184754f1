//! Shared testing utilities for ordtrack CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `ordtrack` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("ordtrack").expect("Failed to locate ordtrack binary");
        cmd.current_dir(self.work_dir()).env_remove("RUST_LOG");
        cmd
    }

    /// Write an order table file and return its path.
    pub fn write_orders(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir().join(name);
        fs::write(&path, content).expect("Failed to write order file");
        path
    }

    /// Order table with one record per outcome worth testing.
    pub fn write_mixed_orders(&self) -> PathBuf {
        self.write_orders(
            "orders.toml",
            r#"
[orders.AB100]
status = "Processing"
details = "Packing your order."

[orders.AB200]
status = "Cancelled"
details = "Refunded to card."
"#,
        )
    }
}
