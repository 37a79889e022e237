//! Configuration module for stackctl
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (AWS_REGION, AWS_TEMPLATE_BUCKET, STACKCTL_*)
//! 3. Project config (./stackctl.toml)
//! 4. User config (<config dir>/stackctl/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{apply_overrides, user_config_path, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{AwsConfig, ColorMode, Config, DeployConfig, OutputConfig, TailConfig};
