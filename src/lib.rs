//! stackctl - publish, deploy and tail declarative infrastructure stacks
//!
//! stackctl uploads a stack template to a bucket, reconciles the caller's
//! parameter overrides with the values already stored on the stack, submits a
//! create or update request and can follow the stack's event feed until it
//! reaches a terminal status.
//!
//! The crate is layered: `domain` holds pure logic and ports, `application`
//! the use cases, `infrastructure` the AWS CLI, filesystem and output adapters.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    DeployOptions, DeployResult, DeployUseCase, Operation, StackQueries, TailOptions,
    TailOutcome, TailUseCase, TemplatePublisher, TemplateSource,
};
pub use config::Config;
pub use domain::entities::{ReconciledParameter, StackEvent, StackRequest, Template};
pub use domain::services::{build_request, format_event_line, reconcile, EventTail};
pub use domain::value_objects::{Capability, ParameterOverrides, StackStatus};
pub use error::{StackError, StackResult};
