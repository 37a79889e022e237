//! ControlPlane port - the remote stack orchestration service
//!
//! Implementations talk to the real service (see `infrastructure::aws`) or
//! keep stacks in memory for tests. Calls are remote, asynchronous and
//! eventually consistent on the service side; this trait is blocking.

use crate::domain::entities::{StackDescription, StackEvent, StackRequest, StackSummary};
use crate::domain::value_objects::StackStatus;
use crate::error::StackResult;

/// Abstract stack control plane
pub trait ControlPlane {
    /// List stacks whose status is in `filter`
    fn list_stacks(&self, filter: &[StackStatus]) -> StackResult<Vec<StackSummary>>;

    /// Describe one stack; `StackError::StackNotFound` if it does not exist
    fn describe_stack(&self, name: &str) -> StackResult<StackDescription>;

    /// Full event feed for a stack, most recent first
    fn describe_stack_events(&self, name: &str) -> StackResult<Vec<StackEvent>>;

    fn create_stack(&self, request: &StackRequest) -> StackResult<()>;

    fn update_stack(&self, request: &StackRequest) -> StackResult<()>;
}

impl<T: ControlPlane + ?Sized> ControlPlane for &T {
    fn list_stacks(&self, filter: &[StackStatus]) -> StackResult<Vec<StackSummary>> {
        (**self).list_stacks(filter)
    }

    fn describe_stack(&self, name: &str) -> StackResult<StackDescription> {
        (**self).describe_stack(name)
    }

    fn describe_stack_events(&self, name: &str) -> StackResult<Vec<StackEvent>> {
        (**self).describe_stack_events(name)
    }

    fn create_stack(&self, request: &StackRequest) -> StackResult<()> {
        (**self).create_stack(request)
    }

    fn update_stack(&self, request: &StackRequest) -> StackResult<()> {
        (**self).update_stack(request)
    }
}
