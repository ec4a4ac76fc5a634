//! TestWorld pattern for declarative integration test setup.
//!
//! Each world owns a temp directory with an empty data directory, so tests
//! never read the developer's own `FOLIO_PATH` or config.

use anyhow::Result;
use assert_cmd::Command;
use folio_types::Project;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use folio_testing::TestWorld;
///
/// let world = TestWorld::new().with_scenario_catalog();
///
/// let result = world.run(&["list", "--filter", "analysis"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
    config_lines: Vec<String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".folio");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
            config_lines: Vec::new(),
        }
    }

    /// Get the data directory path (.folio).
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write `projects` to `catalog.json` and point the config at it.
    pub fn with_catalog(self, projects: &[Project]) -> Self {
        let path = self.data_dir.join("catalog.json");
        fixtures::write_json_catalog(&path, projects).expect("Failed to write catalog");
        self.with_config_line("catalog = \"catalog.json\"")
    }

    /// Use the six-project scenario catalog.
    pub fn with_scenario_catalog(self) -> Self {
        self.with_catalog(&fixtures::scenario_projects())
    }

    /// Append one raw line to `config.toml`.
    ///
    /// Lines must be top-level keys; the file is rewritten on every call.
    pub fn with_config_line(mut self, line: impl Into<String>) -> Self {
        self.config_lines.push(line.into());
        let mut contents = self.config_lines.join("\n");
        contents.push('\n');
        std::fs::write(self.data_dir.join("config.toml"), contents)
            .expect("Failed to write config");
        self
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The caller must provide the base command (e.g., from `cargo_bin_cmd!("folio")`).
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("FOLIO_PATH");
        cmd.env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute `folio` with this environment and capture the result.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("folio")
            .map_err(|e| anyhow::anyhow!("Failed to find folio binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Execute `folio --format json ...` and parse stdout.
    pub fn run_json(&self, args: &[&str]) -> Result<serde_json::Value> {
        let mut full = vec!["--format", "json"];
        full.extend_from_slice(args);

        let result = self.run(&full)?;
        if !result.success() {
            anyhow::bail!("folio {:?} failed: {}", args, result.stderr);
        }
        result.json()
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
