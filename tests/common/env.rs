//! Isolated environment for running the stackctl binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Variables the binary reads that must not leak in from the host
const SCRUBBED_VARS: &[&str] = &[
    "AWS_REGION",
    "AWS_PROFILE",
    "AWS_TEMPLATE_BUCKET",
    "STACK_TEMPLATE",
    "STACKCTL_POLL_INTERVAL_MS",
    "STACKCTL_TIMEOUT_SECS",
    "STACKCTL_COLOR",
    "RUST_LOG",
];

/// Result of running a stackctl command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }
}

/// Temp project directory plus a temp HOME so no user config is picked up
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().unwrap(),
            home_dir: tempfile::tempdir().unwrap(),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_stackctl")),
        }
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write_project_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Project config pointing at `aws_cli` in `region`
    pub fn write_config(&self, region: &str, aws_cli: &Path) {
        self.write_project_file(
            "stackctl.toml",
            &format!(
                "[aws]\nregion = \"{}\"\ncli_path = \"{}\"\n\n[tail]\npoll_interval_ms = 10\n",
                region,
                aws_cli.display()
            ),
        );
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env("TERM", "dumb");
        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = self.command().args(args).output().unwrap();
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
