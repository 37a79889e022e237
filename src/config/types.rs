//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::application::TailOptions;
use crate::error::StackResult;

use super::loader::{self, ConfigWarning};

/// AWS connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwsConfig {
    #[serde(default)]
    pub region: Option<String>,

    #[serde(default)]
    pub profile: Option<String>,

    /// Path or name of the `aws` executable
    #[serde(default = "default_cli")]
    pub cli_path: String,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            region: None,
            profile: None,
            cli_path: default_cli(),
        }
    }
}

fn default_cli() -> String {
    "aws".to_string()
}

/// Defaults for create/update
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DeployConfig {
    /// Bucket templates are published to
    #[serde(default)]
    pub bucket: Option<String>,

    /// Default template path
    #[serde(default)]
    pub template: Option<PathBuf>,
}

/// Event tailing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TailConfig {
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    #[serde(default = "default_grace_window_ms")]
    pub grace_window_ms: u64,

    /// Stop tailing after this many seconds (unbounded if unset)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for TailConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            grace_window_ms: default_grace_window_ms(),
            timeout_secs: None,
        }
    }
}

fn default_poll_interval_ms() -> u64 {
    1000
}

fn default_grace_window_ms() -> u64 {
    2000
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub aws: AwsConfig,

    #[serde(default)]
    pub deploy: DeployConfig,

    #[serde(default)]
    pub tail: TailConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> StackResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> StackResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults, then apply env
    pub fn load_or_default(project_root: Option<&Path>) -> StackResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Tail options derived from `[tail]`
    pub fn tail_options(&self) -> TailOptions {
        TailOptions::default()
            .with_poll_interval(Duration::from_millis(self.tail.poll_interval_ms))
            .with_grace_window(Duration::from_millis(self.tail.grace_window_ms))
            .with_deadline(self.tail.timeout_secs.map(Duration::from_secs))
    }
}
