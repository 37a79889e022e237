//! StackEvent entity - one entry of a stack's progress feed

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A progress event; identity is `event_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackEvent {
    pub event_id: String,
    pub logical_resource_id: String,
    pub resource_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_reason: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl StackEvent {
    pub fn new(
        event_id: impl Into<String>,
        logical_resource_id: impl Into<String>,
        resource_status: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            logical_resource_id: logical_resource_id.into(),
            resource_status: resource_status.into(),
            status_reason: None,
            timestamp,
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.status_reason = Some(reason.into());
        self
    }
}
