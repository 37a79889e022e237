//! Wire shapes of the CloudFormation JSON responses and requests

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    ReconciledParameter, StackDescription, StackEvent, StackOutput, StackParameter, StackSummary,
};
use crate::domain::value_objects::StackStatus;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListStacksResponse {
    #[serde(default)]
    pub stack_summaries: Vec<StackSummaryDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StackSummaryDto {
    pub stack_name: String,
    pub stack_status: String,
}

impl From<StackSummaryDto> for StackSummary {
    fn from(dto: StackSummaryDto) -> Self {
        StackSummary {
            name: dto.stack_name,
            status: StackStatus::new(dto.stack_status),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeStacksResponse {
    #[serde(default)]
    pub stacks: Vec<StackDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StackDto {
    pub stack_name: String,
    pub stack_status: String,
    #[serde(default)]
    pub parameters: Vec<ParameterDto>,
    #[serde(default)]
    pub outputs: Vec<OutputDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParameterDto {
    pub parameter_key: String,
    #[serde(default)]
    pub parameter_value: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputDto {
    pub output_key: String,
    #[serde(default)]
    pub output_value: String,
    pub description: Option<String>,
}

impl From<StackDto> for StackDescription {
    fn from(dto: StackDto) -> Self {
        StackDescription {
            name: dto.stack_name,
            status: StackStatus::new(dto.stack_status),
            parameters: dto
                .parameters
                .into_iter()
                .map(|p| StackParameter {
                    key: p.parameter_key,
                    value: p.parameter_value,
                })
                .collect(),
            outputs: dto
                .outputs
                .into_iter()
                .map(|o| StackOutput {
                    key: o.output_key,
                    value: o.output_value,
                    description: o.description,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeStackEventsResponse {
    #[serde(default)]
    pub stack_events: Vec<StackEventDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StackEventDto {
    pub event_id: String,
    pub logical_resource_id: String,
    pub resource_status: String,
    pub resource_status_reason: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl From<StackEventDto> for StackEvent {
    fn from(dto: StackEventDto) -> Self {
        StackEvent {
            event_id: dto.event_id,
            logical_resource_id: dto.logical_resource_id,
            resource_status: dto.resource_status,
            status_reason: dto.resource_status_reason,
            timestamp: dto.timestamp,
        }
    }
}

/// Entry of the `--parameters` argument
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ParameterArg<'a> {
    pub parameter_key: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_value: Option<&'a str>,
    pub use_previous_value: bool,
}

impl<'a> From<&'a ReconciledParameter> for ParameterArg<'a> {
    fn from(param: &'a ReconciledParameter) -> Self {
        ParameterArg {
            parameter_key: param.key(),
            parameter_value: param.value(),
            use_previous_value: param.uses_previous(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BucketLocationResponse {
    pub location_constraint: Option<String>,
}
