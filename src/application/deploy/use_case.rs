//! Deploy Use Case
//!
//! Orchestrates a create/update:
//! 1. Resolve the template
//! 2. Publish it to the blob store
//! 3. Look up the stack's previous parameters (none if it does not exist)
//! 4. Reconcile parameters and build the request
//! 5. Submit the create/update call
//! 6. Optionally tail the stack's events until it settles
//!
//! This use case is pure orchestration - the decisions live in domain services.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::application::publish::TemplatePublisher;
use crate::application::queries::StackQueries;
use crate::application::tail::TailUseCase;
use crate::domain::entities::Template;
use crate::domain::ports::{
    BlobStore, Clock, ControlPlane, NoopTailSink, TailEventSink, TemplateLoader,
};
use crate::domain::services::{build_request, reconcile};
use crate::error::StackResult;

use super::options::{DeployOptions, Operation, TemplateSource};
use super::result::DeployResult;

/// Deploy use case - parameterized by its ports
pub struct DeployUseCase<CP, BS, TL, C>
where
    CP: ControlPlane,
    BS: BlobStore,
    TL: TemplateLoader,
    C: Clock,
{
    control_plane: CP,
    publisher: TemplatePublisher<BS>,
    loader: TL,
    clock: C,
}

impl<CP, BS, TL, C> DeployUseCase<CP, BS, TL, C>
where
    CP: ControlPlane,
    BS: BlobStore,
    TL: TemplateLoader,
    C: Clock,
{
    pub fn new(control_plane: CP, publisher: TemplatePublisher<BS>, loader: TL, clock: C) -> Self {
        Self {
            control_plane,
            publisher,
            loader,
            clock,
        }
    }

    /// Execute without event reporting (tail events are dropped)
    pub fn execute(&self, options: &DeployOptions) -> StackResult<DeployResult> {
        let running = AtomicBool::new(true);
        self.execute_with_events(options, &running, &NoopTailSink)
    }

    /// Execute, streaming tail events to `sink` when `options.tail` is set
    pub fn execute_with_events(
        &self,
        options: &DeployOptions,
        running: &AtomicBool,
        sink: &dyn TailEventSink,
    ) -> StackResult<DeployResult> {
        let name = options.stack_name.as_str();
        let template = self.resolve_template(&options.template)?;

        let published = self.publisher.publish(&template, name)?;

        let previous = StackQueries::new(&self.control_plane).previous_parameters(name)?;
        let parameters = reconcile(&template.parameter_names(), &options.overrides, &previous);
        tracing::info!(
            stack = name,
            explicit = parameters.iter().filter(|p| !p.uses_previous()).count(),
            reused = parameters.iter().filter(|p| p.uses_previous()).count(),
            "reconciled parameters"
        );

        let request = build_request(name, &published.url, parameters, options.capability);

        match options.operation {
            Operation::Create => self.control_plane.create_stack(&request)?,
            Operation::Update => self.control_plane.update_stack(&request)?,
        }
        tracing::info!(stack = name, operation = %options.operation, "submitted stack request");

        let tail = match &options.tail {
            Some(tail_options) if running.load(Ordering::SeqCst) => {
                let tailer = TailUseCase::new(&self.control_plane, &self.clock, tail_options.clone());
                Some(tailer.run(name, running, sink)?)
            }
            _ => None,
        };

        Ok(DeployResult {
            operation: options.operation,
            template: published,
            request,
            tail,
        })
    }

    fn resolve_template(&self, source: &TemplateSource) -> StackResult<Template> {
        match source {
            TemplateSource::Loaded(template) => Ok(template.clone()),
            TemplateSource::Path(path) => self.loader.load(path),
        }
    }
}
