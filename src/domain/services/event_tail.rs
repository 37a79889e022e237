//! Event tail state machine
//!
//! Decides which events of a polled feed are new for this session. Holds the
//! seen set and the start cutoff; performs no I/O.

use std::collections::HashSet;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::domain::entities::StackEvent;

/// Clock skew tolerance between submitting a change and the first poll
pub const DEFAULT_GRACE_WINDOW: Duration = Duration::from_secs(2);

/// Per-session dedup and time-window filter
#[derive(Debug, Clone)]
pub struct EventTail {
    cutoff: DateTime<Utc>,
    seen: HashSet<String>,
}

impl EventTail {
    pub fn new(session_start: DateTime<Utc>, grace_window: Duration) -> Self {
        let grace = chrono::Duration::from_std(grace_window).unwrap_or(chrono::Duration::zero());
        Self {
            cutoff: session_start - grace,
            seen: HashSet::new(),
        }
    }

    /// Events older than this are never reported
    pub fn cutoff(&self) -> DateTime<Utc> {
        self.cutoff
    }

    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }

    /// Feed one poll result (most recent first, as delivered) and get back the
    /// events to report, oldest first.
    ///
    /// Every examined event is marked seen, including ones dropped for being
    /// older than the cutoff.
    pub fn observe(&mut self, mut feed: Vec<StackEvent>) -> Vec<StackEvent> {
        feed.reverse();
        feed.sort_by_key(|e| e.timestamp);

        let mut fresh = Vec::new();
        for event in feed {
            let is_new = self.seen.insert(event.event_id.clone());
            if is_new && event.timestamp >= self.cutoff {
                fresh.push(event);
            }
        }
        fresh
    }
}

/// `<timestamp> [ <logical id> ] <status>[ - <reason>]`
///
/// The logical id is left-aligned in a 20-column field so statuses line up.
pub fn format_event_line(event: &StackEvent) -> String {
    let mut line = format!(
        "{} [ {:<20} ] {}",
        event
            .timestamp
            .to_rfc3339_opts(SecondsFormat::Millis, true),
        event.logical_resource_id,
        event.resource_status
    );
    if let Some(reason) = &event.status_reason {
        line.push_str(" - ");
        line.push_str(reason);
    }
    line
}
