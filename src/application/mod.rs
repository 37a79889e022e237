//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `TemplatePublisher` - Upload a template and derive its URL
//! - `StackQueries` - Listing and lookups
//! - `TailUseCase` - Follow a stack's events until it settles
//! - `DeployUseCase` - Publish, reconcile, submit, optionally tail

pub mod deploy;
pub mod publish;
pub mod queries;
pub mod tail;

#[cfg(test)]
pub(crate) mod test_support;

pub use deploy::{DeployOptions, DeployResult, DeployUseCase, Operation, TemplateSource};
pub use publish::{template_key, PublishedTemplate, TemplatePublisher};
pub use queries::StackQueries;
pub use tail::{TailOptions, TailOutcome, TailUseCase, DEFAULT_POLL_INTERVAL};
