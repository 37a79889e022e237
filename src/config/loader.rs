//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{StackError, StackResult};

use super::types::{ColorMode, Config};

/// Project config file, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "stackctl.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> StackResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| StackError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults; env always applies on top
pub fn load_or_default(project_root: Option<&Path>) -> StackResult<(Config, Vec<ConfigWarning>)> {
    if let Some(root) = project_root {
        let project_config = root.join(PROJECT_CONFIG_FILE);
        if project_config.exists() {
            let (config, warnings) = load_with_warnings(&project_config)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    if let Some(user_config) = user_config_path() {
        if user_config.exists() {
            let (config, warnings) = load_with_warnings(&user_config)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// `<config dir>/stackctl/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("stackctl").join("config.toml"))
}

/// Apply environment variable overrides
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok())
}

/// Apply overrides from an arbitrary variable lookup
pub fn apply_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(region) = lookup("AWS_REGION") {
        config.aws.region = Some(region);
    }

    if let Some(profile) = lookup("AWS_PROFILE") {
        config.aws.profile = Some(profile);
    }

    if let Some(bucket) = lookup("AWS_TEMPLATE_BUCKET") {
        config.deploy.bucket = Some(bucket);
    }

    if let Some(template) = lookup("STACK_TEMPLATE") {
        config.deploy.template = Some(PathBuf::from(template));
    }

    if let Some(ms) = lookup("STACKCTL_POLL_INTERVAL_MS").and_then(|v| v.parse().ok()) {
        config.tail.poll_interval_ms = ms;
    }

    if let Some(secs) = lookup("STACKCTL_TIMEOUT_SECS").and_then(|v| v.parse().ok()) {
        config.tail.timeout_secs = Some(secs);
    }

    if let Some(color) = lookup("STACKCTL_COLOR").and_then(|v| ColorMode::parse(&v)) {
        config.output.color = color;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "aws",
        "region",
        "profile",
        "cli_path",
        "deploy",
        "bucket",
        "template",
        "tail",
        "poll_interval_ms",
        "grace_window_ms",
        "timeout_secs",
        "output",
        "color",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
