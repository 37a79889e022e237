//! CloudFormation control plane backed by the AWS CLI

use std::ffi::OsString;

use serde::de::DeserializeOwned;

use crate::domain::entities::{StackDescription, StackEvent, StackRequest, StackSummary};
use crate::domain::ports::ControlPlane;
use crate::domain::value_objects::StackStatus;
use crate::error::{StackError, StackResult};

use super::cli::{args, AwsCli, AwsCliError};
use super::dto::{
    DescribeStackEventsResponse, DescribeStacksResponse, ListStacksResponse, ParameterArg,
};

const SERVICE: &str = "cloudformation";

pub struct CloudFormationControlPlane {
    cli: AwsCli,
}

impl CloudFormationControlPlane {
    pub fn new(cli: AwsCli) -> Self {
        Self { cli }
    }

    fn call<T: DeserializeOwned>(&self, command: &str, args: &[OsString]) -> Result<T, AwsCliError> {
        let value = self.cli.run(SERVICE, command, args)?;
        serde_json::from_value(value).map_err(|e| AwsCliError {
            operation: format!("{} {}", SERVICE, command),
            message: format!("unexpected response: {}", e),
        })
    }

    fn submit(&self, command: &str, request: &StackRequest) -> StackResult<()> {
        self.cli
            .run(SERVICE, command, &request_args(request)?)
            .map(|_| ())
            .map_err(|err| map_stack_error(err, &request.stack_name))
    }
}

/// Map a CLI failure, recognizing the not-found answer
fn map_stack_error(err: AwsCliError, name: &str) -> StackError {
    if err.is_missing_stack() {
        StackError::StackNotFound {
            name: name.to_string(),
        }
    } else {
        err.into()
    }
}

/// Arguments of a create-stack / update-stack call
pub fn request_args(request: &StackRequest) -> StackResult<Vec<OsString>> {
    let mut list = args([
        "--stack-name",
        request.stack_name.as_str(),
        "--template-url",
        request.template_url.as_str(),
    ]);

    if !request.parameters.is_empty() {
        let wire: Vec<ParameterArg<'_>> = request.parameters.iter().map(ParameterArg::from).collect();
        list.push("--parameters".into());
        list.push(serde_json::to_string(&wire)?.into());
    }

    if let Some(capabilities) = &request.capabilities {
        list.push("--capabilities".into());
        list.extend(capabilities.iter().map(|c| OsString::from(c.as_str())));
    }

    Ok(list)
}

impl ControlPlane for CloudFormationControlPlane {
    fn list_stacks(&self, filter: &[StackStatus]) -> StackResult<Vec<StackSummary>> {
        let mut list = args(["--stack-status-filter"]);
        list.extend(filter.iter().map(|s| OsString::from(s.as_str())));

        let response: ListStacksResponse = self.call("list-stacks", &list)?;
        Ok(response
            .stack_summaries
            .into_iter()
            .map(StackSummary::from)
            .collect())
    }

    fn describe_stack(&self, name: &str) -> StackResult<StackDescription> {
        let response: DescribeStacksResponse = self
            .call("describe-stacks", &args(["--stack-name", name]))
            .map_err(|err| map_stack_error(err, name))?;

        response
            .stacks
            .into_iter()
            .next()
            .map(StackDescription::from)
            .ok_or_else(|| StackError::StackNotFound {
                name: name.to_string(),
            })
    }

    fn describe_stack_events(&self, name: &str) -> StackResult<Vec<StackEvent>> {
        let response: DescribeStackEventsResponse = self
            .call("describe-stack-events", &args(["--stack-name", name]))
            .map_err(|err| map_stack_error(err, name))?;

        Ok(response
            .stack_events
            .into_iter()
            .map(StackEvent::from)
            .collect())
    }

    fn create_stack(&self, request: &StackRequest) -> StackResult<()> {
        self.submit("create-stack", request)
    }

    fn update_stack(&self, request: &StackRequest) -> StackResult<()> {
        self.submit("update-stack", request)
    }
}
