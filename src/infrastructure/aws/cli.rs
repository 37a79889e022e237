//! AWS CLI runner
//!
//! Runs `aws <service> <command> ... --output json` as a subprocess and parses
//! stdout. Credentials and retries are left to the CLI itself.

use std::ffi::OsString;
use std::process::{Command, Stdio};

use serde_json::Value;

use crate::error::StackError;

/// A failed CLI invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsCliError {
    /// `<service> <command>`, e.g. `cloudformation describe-stacks`
    pub operation: String,
    pub message: String,
}

impl AwsCliError {
    /// The service reported that the named stack does not exist
    ///
    /// Matches `Stack with id <name> does not exist` and
    /// `Stack [<name>] does not exist`, not other missing resources.
    pub fn is_missing_stack(&self) -> bool {
        let after = |marker: &str| self.message.split_once(marker).map(|(_, rest)| rest);
        after("Stack with id ").is_some_and(|rest| rest.contains(" does not exist"))
            || after("Stack [").is_some_and(|rest| rest.contains("] does not exist"))
    }
}

impl From<AwsCliError> for StackError {
    fn from(err: AwsCliError) -> Self {
        StackError::RemoteCallFailure {
            operation: err.operation,
            message: err.message,
        }
    }
}

/// Connection settings for the `aws` executable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsCli {
    program: String,
    region: String,
    profile: Option<String>,
}

impl AwsCli {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            program: "aws".to_string(),
            region: region.into(),
            profile: None,
        }
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_profile(mut self, profile: Option<String>) -> Self {
        self.profile = profile;
        self
    }

    /// Check if the CLI is installed and runnable
    pub fn check_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Full argument list for one call
    pub fn command_args(&self, service: &str, command: &str, args: &[OsString]) -> Vec<OsString> {
        let mut full: Vec<OsString> = vec![service.into(), command.into()];
        full.extend(args.iter().cloned());
        full.push("--region".into());
        full.push(self.region.clone().into());
        if let Some(profile) = &self.profile {
            full.push("--profile".into());
            full.push(profile.clone().into());
        }
        full.push("--output".into());
        full.push("json".into());
        full
    }

    /// Run a call and parse its JSON output; empty output yields `Value::Null`
    pub fn run(&self, service: &str, command: &str, args: &[OsString]) -> Result<Value, AwsCliError> {
        let operation = format!("{} {}", service, command);
        tracing::debug!(%operation, region = %self.region, "invoking aws cli");

        let output = Command::new(&self.program)
            .args(self.command_args(service, command, args))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| AwsCliError {
                operation: operation.clone(),
                message: format!("failed to run '{}': {}", self.program, e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AwsCliError {
                operation,
                message: if stderr.is_empty() {
                    format!("exit code {:?}", output.status.code())
                } else {
                    stderr
                },
            });
        }

        parse_output(&operation, &output.stdout)
    }
}

fn parse_output(operation: &str, stdout: &[u8]) -> Result<Value, AwsCliError> {
    let text = String::from_utf8_lossy(stdout);
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text).map_err(|e| AwsCliError {
        operation: operation.to_string(),
        message: format!("unexpected output: {}", e),
    })
}

/// Shorthand for building an argument list
pub fn args<I, S>(items: I) -> Vec<OsString>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    items.into_iter().map(Into::into).collect()
}
