//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{
    DeployUseCase, StackQueries, TailOptions, TailUseCase, TemplatePublisher,
};
use crate::config::Config;
use crate::error::{StackError, StackResult};
use crate::infrastructure::{
    AwsCli, CloudFormationControlPlane, FsTemplateLoader, S3BlobStore, SystemClock,
};

/// Type alias for the concrete DeployUseCase with all dependencies
pub type AwsDeployUseCase =
    DeployUseCase<CloudFormationControlPlane, S3BlobStore, FsTemplateLoader, SystemClock>;

/// Type alias for the concrete TailUseCase
pub type AwsTailUseCase = TailUseCase<CloudFormationControlPlane, SystemClock>;

/// Type alias for the concrete StackQueries
pub type AwsStackQueries = StackQueries<CloudFormationControlPlane>;

/// Build the `aws` CLI wrapper from config
///
/// Fails when no region is configured or the executable cannot be run.
pub fn create_aws_cli(config: &Config) -> StackResult<AwsCli> {
    let region = config
        .aws
        .region
        .clone()
        .filter(|r| !r.trim().is_empty())
        .ok_or(StackError::MissingSetting {
            setting: "region",
            flag: "--region",
            env: "AWS_REGION",
        })?;

    let cli = AwsCli::new(region)
        .with_program(config.aws.cli_path.clone())
        .with_profile(config.aws.profile.clone());

    if !cli.check_available() {
        return Err(StackError::remote(
            config.aws.cli_path.clone(),
            "executable not found or not runnable",
        ));
    }

    Ok(cli)
}

pub fn create_stack_queries(config: &Config) -> StackResult<AwsStackQueries> {
    Ok(StackQueries::new(CloudFormationControlPlane::new(
        create_aws_cli(config)?,
    )))
}

/// Create the queries and tail use case backing `events`
///
/// Both share one checked CLI wrapper; the queries answer whether the stack
/// exists before the tail starts.
pub fn create_events_use_cases(
    config: &Config,
    options: TailOptions,
) -> StackResult<(AwsStackQueries, AwsTailUseCase)> {
    let cli = create_aws_cli(config)?;
    let queries = StackQueries::new(CloudFormationControlPlane::new(cli.clone()));
    let tail = TailUseCase::new(CloudFormationControlPlane::new(cli), SystemClock, options);
    Ok((queries, tail))
}

/// Create a deploy use case publishing to `config.deploy.bucket`
pub fn create_deploy_use_case(config: &Config) -> StackResult<AwsDeployUseCase> {
    let bucket = config
        .deploy
        .bucket
        .clone()
        .filter(|b| !b.trim().is_empty())
        .ok_or(StackError::MissingSetting {
            setting: "template bucket",
            flag: "--bucket",
            env: "AWS_TEMPLATE_BUCKET",
        })?;

    let cli = create_aws_cli(config)?;
    let publisher = TemplatePublisher::new(S3BlobStore::new(cli.clone()), bucket);

    Ok(DeployUseCase::new(
        CloudFormationControlPlane::new(cli),
        publisher,
        FsTemplateLoader::new(),
        SystemClock,
    ))
}
