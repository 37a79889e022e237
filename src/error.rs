//! Error types for stackctl
//!
//! Library code returns `StackError`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for stackctl operations
pub type StackResult<T> = Result<T, StackError>;

/// Main error type for stackctl operations
#[derive(Error, Debug)]
pub enum StackError {
    /// Describe call on a stack that does not exist (or is fully deleted)
    #[error("stack '{name}' does not exist")]
    StackNotFound { name: String },

    /// The blob store could not resolve the bucket location
    #[error("template store unavailable for bucket '{bucket}': {message}")]
    StoreUnavailable { bucket: String, message: String },

    /// The stack disappeared while its events were being tailed
    #[error("stack '{name}' vanished while tailing its events")]
    StackVanished { name: String },

    /// Any other failure reported by a remote collaborator
    #[error("{operation} failed: {message}")]
    RemoteCallFailure { operation: String, message: String },

    /// Template file could not be read or parsed
    #[error("failed to load template {path}: {message}")]
    TemplateLoad { path: PathBuf, message: String },

    /// Tail session stopped by the operator
    #[error("stopped tailing stack '{name}'")]
    TailCancelled { name: String },

    /// Tail session ran past its deadline
    #[error("stack '{name}' did not complete within {}s", waited.as_secs())]
    DeadlineExceeded { name: String, waited: Duration },

    /// A required setting was not supplied by flag, env or config
    #[error("no {setting} configured (use {flag} or set {env})")]
    MissingSetting {
        setting: &'static str,
        flag: &'static str,
        env: &'static str,
    },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StackError {
    /// Shorthand for a `RemoteCallFailure`
    pub fn remote(operation: impl Into<String>, message: impl Into<String>) -> Self {
        StackError::RemoteCallFailure {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Returns true for the "stack does not exist" condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, StackError::StackNotFound { .. })
    }
}
