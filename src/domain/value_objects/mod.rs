//! Value Objects
//!
//! Small immutable types with no identity of their own.

mod capability;
mod parameter_overrides;
mod stack_status;

pub use capability::Capability;
pub use parameter_overrides::ParameterOverrides;
pub use stack_status::{StackStatus, ALL_STATUSES};
