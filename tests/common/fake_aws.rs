//! A shell script that answers the handful of `aws` calls stackctl makes.
//!
//! Every invocation is appended to a log so tests can assert on the exact
//! arguments that were passed.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

const SCRIPT: &str = r#"#!/bin/sh
printf '%s\n' "$*" >> '__LOG__'
case "$*" in
  --version*)
    echo "aws-cli/2.15.0 fake"
    ;;
  "cloudformation list-stacks "*)
    cat <<'JSON'
{"StackSummaries":[{"StackName":"web","StackStatus":"CREATE_COMPLETE"},{"StackName":"worker","StackStatus":"UPDATE_ROLLBACK_COMPLETE"}]}
JSON
    ;;
  "cloudformation describe-stacks --stack-name web "*)
    cat <<'JSON'
{"Stacks":[{"StackName":"web","StackStatus":"CREATE_COMPLETE","Parameters":[{"ParameterKey":"Env","ParameterValue":"prod"},{"ParameterKey":"Size","ParameterValue":"2"}],"Outputs":[{"OutputKey":"Url","OutputValue":"https://web.example.com","Description":"Public URL"}]}]}
JSON
    ;;
  "cloudformation describe-stacks "*)
    echo "An error occurred (ValidationError) when calling the DescribeStacks operation: Stack with id missing does not exist" >&2
    exit 254
    ;;
  "cloudformation describe-stack-events --stack-name web "*)
    cat <<'JSON'
{"StackEvents":[
{"EventId":"e3","LogicalResourceId":"web","ResourceStatus":"CREATE_COMPLETE","Timestamp":"2099-01-01T00:00:10Z"},
{"EventId":"e2","LogicalResourceId":"Queue","ResourceStatus":"CREATE_COMPLETE","Timestamp":"2099-01-01T00:00:05Z"},
{"EventId":"e1","LogicalResourceId":"web","ResourceStatus":"CREATE_IN_PROGRESS","ResourceStatusReason":"User Initiated","Timestamp":"2099-01-01T00:00:00Z"}
]}
JSON
    ;;
  "s3api put-object "*)
    echo '{"ETag":"\"0123456789abcdef\""}'
    ;;
  "s3api get-bucket-location "*)
    echo '{"LocationConstraint":"eu-west-1"}'
    ;;
  "cloudformation create-stack "*|"cloudformation update-stack "*)
    echo '{"StackId":"arn:aws:cloudformation:eu-west-1:123456789012:stack/fake/1"}'
    ;;
  *)
    echo "unexpected call: $*" >&2
    exit 2
    ;;
esac
"#;

pub struct FakeAws {
    dir: TempDir,
    script: PathBuf,
    log: PathBuf,
}

impl FakeAws {
    pub fn install() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("aws");
        let log = dir.path().join("calls.log");

        fs::write(&script, SCRIPT.replace("__LOG__", &log.display().to_string())).unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        Self { dir, script, log }
    }

    pub fn path(&self) -> &Path {
        &self.script
    }

    /// Logged calls, `--version` checks excluded
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log)
            .unwrap_or_default()
            .lines()
            .filter(|line| !line.starts_with("--version"))
            .map(str::to_string)
            .collect()
    }

    pub fn calls_to(&self, operation: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|line| line.starts_with(operation))
            .collect()
    }
}
