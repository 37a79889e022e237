//! Deploy Result

use crate::application::publish::PublishedTemplate;
use crate::application::tail::TailOutcome;
use crate::domain::entities::StackRequest;

use super::options::Operation;

/// Result of a deploy operation
#[derive(Debug, Clone)]
pub struct DeployResult {
    pub operation: Operation,
    pub template: PublishedTemplate,
    /// The request exactly as submitted
    pub request: StackRequest,
    /// Present when the deploy followed the stack's events
    pub tail: Option<TailOutcome>,
}

impl DeployResult {
    /// True when tailing ended in a rollback status
    pub fn rolled_back(&self) -> bool {
        self.tail
            .as_ref()
            .map(|t| t.final_status.is_rollback())
            .unwrap_or(false)
    }
}
