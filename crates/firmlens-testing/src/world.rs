//! TestWorld pattern for declarative integration test setup.
//!
//! Creates an isolated temp directory with a dataset CSV and a config
//! file, and runs the `firmlens` binary against them.

use anyhow::Result;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Isolated test environment: a temp dir holding `data.csv` and
/// `firmlens.toml`.
///
/// # Example
/// ```no_run
/// use firmlens_testing::TestWorld;
///
/// let world = TestWorld::with_sample_data();
/// let result = world.run(&["overview"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    dataset_path: PathBuf,
}

impl TestWorld {
    /// Empty environment: config exists but points at a dataset that
    /// has not been written yet.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let dataset_path = temp_dir.path().join("data.csv");
        let config_path = temp_dir.path().join("firmlens.toml");

        let config = fixtures::SAMPLE_CONFIG.replace("{dataset}", &escape(&dataset_path));
        std::fs::write(&config_path, config).expect("Failed to write config");

        Self {
            temp_dir,
            config_path,
            dataset_path,
        }
    }

    /// Environment pre-loaded with the clean sample export.
    pub fn with_sample_data() -> Self {
        let world = Self::new();
        world.write_dataset(fixtures::SAMPLE_CSV);
        world
    }

    pub fn write_dataset(&self, csv: &str) {
        std::fs::write(&self.dataset_path, csv).expect("Failed to write dataset");
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn dataset_path(&self) -> &Path {
        &self.dataset_path
    }

    /// Run `firmlens` with this world's config plus `args`.
    pub fn run(&self, args: &[&str]) -> Result<CommandResult> {
        let mut cmd = Command::cargo_bin("firmlens")?;
        cmd.current_dir(self.temp_dir.path());
        cmd.arg("--config").arg(&self.config_path);
        cmd.args(args);

        let output = cmd.output()?;
        Ok(CommandResult { output })
    }
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Output of one CLI invocation.
pub struct CommandResult {
    output: std::process::Output,
}

impl CommandResult {
    pub fn success(&self) -> bool {
        self.output.status.success()
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).to_string()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).to_string()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout())?)
    }
}

/// TOML basic strings treat backslash as an escape; double them so
/// Windows-style temp paths survive.
fn escape(path: &Path) -> String {
    path.display().to_string().replace('\\', "\\\\")
}
