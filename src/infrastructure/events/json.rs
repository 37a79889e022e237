//! JSON Tail Sink
//!
//! Outputs tail events as NDJSON for CI/automation consumption.

use crate::domain::ports::{TailEvent, TailEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonTailSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonTailSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl TailEventSink for JsonTailSink {
    fn on_event(&self, event: TailEvent) {
        let json = match event {
            TailEvent::Started { stack, since } => serde_json::json!({
                "event": "start",
                "command": "tail",
                "stack": stack,
                "since": since.to_rfc3339(),
            }),

            TailEvent::Event(event) => serde_json::json!({
                "event": "stack_event",
                "command": "tail",
                "event_id": event.event_id,
                "timestamp": event.timestamp.to_rfc3339(),
                "logical_resource_id": event.logical_resource_id,
                "resource_status": event.resource_status,
                "status_reason": event.status_reason,
            }),

            TailEvent::Finished { stack, status } => serde_json::json!({
                "event": "complete",
                "command": "tail",
                "stack": stack,
                "status": status.as_str(),
                "rollback": status.is_rollback(),
            }),
        };

        self.write_event(json);
    }
}
