//! Tail Event Port
//!
//! Observable interface for tail sessions. Enables console output,
//! NDJSON event streams and silent operation.

use chrono::{DateTime, Utc};

use crate::domain::entities::StackEvent;
use crate::domain::value_objects::StackStatus;

/// Event emitted during a tail session
#[derive(Debug, Clone, PartialEq)]
pub enum TailEvent {
    /// Session started; events older than `since` are ignored
    Started { stack: String, since: DateTime<Utc> },

    /// A new stack event, in chronological order
    Event(StackEvent),

    /// Stack reached a terminal status
    Finished { stack: String, status: StackStatus },
}

/// Trait for receiving tail events
pub trait TailEventSink: Send + Sync {
    fn on_event(&self, event: TailEvent);
}

/// No-op event sink for silent operation
pub struct NoopTailSink;

impl TailEventSink for NoopTailSink {
    fn on_event(&self, _event: TailEvent) {}
}
