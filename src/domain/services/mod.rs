//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod event_tail;
mod reconciler;
mod request_builder;

pub use event_tail::{format_event_line, EventTail, DEFAULT_GRACE_WINDOW};
pub use reconciler::reconcile;
pub use request_builder::build_request;
