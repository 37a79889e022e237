//! Stack status value object
//!
//! The control plane reports status as a free-form string. We keep it verbatim
//! and only interpret the few properties the tool relies on.

use serde::{Deserialize, Serialize};

/// Every status the control plane can report for a stack.
pub const ALL_STATUSES: &[&str] = &[
    "CREATE_IN_PROGRESS",
    "CREATE_FAILED",
    "CREATE_COMPLETE",
    "ROLLBACK_IN_PROGRESS",
    "ROLLBACK_FAILED",
    "ROLLBACK_COMPLETE",
    "DELETE_IN_PROGRESS",
    "DELETE_FAILED",
    "DELETE_COMPLETE",
    "UPDATE_IN_PROGRESS",
    "UPDATE_COMPLETE_CLEANUP_IN_PROGRESS",
    "UPDATE_COMPLETE",
    "UPDATE_ROLLBACK_IN_PROGRESS",
    "UPDATE_ROLLBACK_FAILED",
    "UPDATE_ROLLBACK_COMPLETE_CLEANUP_IN_PROGRESS",
    "UPDATE_ROLLBACK_COMPLETE",
];

const DELETE_COMPLETE: &str = "DELETE_COMPLETE";

/// Remote stack status, e.g. `UPDATE_ROLLBACK_COMPLETE`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StackStatus(String);

impl StackStatus {
    pub fn new(status: impl Into<String>) -> Self {
        Self(status.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Terminal iff the status ends with `COMPLETE`.
    ///
    /// Rollback completions are terminal too; callers that care about the
    /// outcome must inspect [`StackStatus::is_rollback`] themselves.
    pub fn is_terminal(&self) -> bool {
        self.0.ends_with("COMPLETE")
    }

    /// A deleted stack keeps answering describe calls but has no usable state.
    pub fn is_deleted(&self) -> bool {
        self.0 == DELETE_COMPLETE
    }

    pub fn is_rollback(&self) -> bool {
        self.0.contains("ROLLBACK")
    }

    /// Status filter for listing stacks; deleted stacks only with `show_all`.
    pub fn list_filter(show_all: bool) -> Vec<StackStatus> {
        ALL_STATUSES
            .iter()
            .filter(|s| show_all || **s != DELETE_COMPLETE)
            .map(|s| StackStatus::new(*s))
            .collect()
    }
}

impl std::fmt::Display for StackStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StackStatus {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
