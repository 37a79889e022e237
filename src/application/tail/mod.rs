//! Tail Module
//!
//! Follows a stack's event feed until the stack settles.
//!
//! - `options` - Poll interval, grace window, deadline (`TailOptions`)
//! - `use_case` - The poll loop (`TailUseCase`, `TailOutcome`)

mod options;
mod use_case;

pub use options::{TailOptions, DEFAULT_POLL_INTERVAL};
pub use use_case::{TailOutcome, TailUseCase};
