//! Domain Entities
//!
//! - `Template` - a loaded stack template
//! - `StackDescription` / `StackSummary` - remote stack state
//! - `StackEvent` - one progress event
//! - `StackRequest` - a create/update request

mod stack;
mod stack_event;
mod stack_request;
mod template;

pub use stack::{
    PreviousParameters, StackDescription, StackOutput, StackParameter, StackSummary,
};
pub use stack_event::StackEvent;
pub use stack_request::{ReconciledParameter, StackRequest};
pub use template::Template;
