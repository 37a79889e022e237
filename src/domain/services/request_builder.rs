//! Create/update request construction

use crate::domain::entities::{ReconciledParameter, StackRequest};
use crate::domain::value_objects::Capability;

/// Compose a create/update request.
///
/// Without a capability the field stays absent; it is never an empty list.
pub fn build_request(
    stack_name: &str,
    template_url: &str,
    parameters: Vec<ReconciledParameter>,
    capability: Option<Capability>,
) -> StackRequest {
    StackRequest {
        stack_name: stack_name.to_string(),
        template_url: template_url.to_string(),
        parameters,
        capabilities: capability.map(|c| vec![c]),
    }
}
