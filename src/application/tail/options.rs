//! Tail Options

use std::time::Duration;

use crate::domain::services::DEFAULT_GRACE_WINDOW;

/// Fixed poll interval between describe calls
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Options for a tail session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TailOptions {
    /// Sleep between polls (no backoff)
    pub poll_interval: Duration,
    /// Events this much older than the session start are still reported
    pub grace_window: Duration,
    /// Give up after this long without reaching a terminal status
    pub deadline: Option<Duration>,
}

impl Default for TailOptions {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            grace_window: DEFAULT_GRACE_WINDOW,
            deadline: None,
        }
    }
}

impl TailOptions {
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_grace_window(mut self, window: Duration) -> Self {
        self.grace_window = window;
        self
    }

    pub fn with_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.deadline = deadline;
        self
    }
}
