//! Console Tail Sink
//!
//! Prints one line per stack event, optionally coloring the status.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crossterm::style::Stylize;

use crate::domain::entities::StackEvent;
use crate::domain::ports::{TailEvent, TailEventSink};
use crate::domain::services::format_event_line;

pub struct ConsoleTailSink {
    writer: Mutex<Box<dyn Write + Send>>,
    color: bool,
    /// Set after the first failed write; a closed stdout stays closed
    broken: AtomicBool,
}

impl ConsoleTailSink {
    pub fn stdout(color: bool) -> Self {
        Self::with_writer(io::stdout(), color)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, color: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            color,
            broken: AtomicBool::new(false),
        }
    }

    fn render(&self, event: &StackEvent) -> String {
        if !self.color {
            return format_event_line(event);
        }

        let status = &event.resource_status;
        let styled = if status.ends_with("FAILED") || status.contains("ROLLBACK") {
            status.as_str().red().to_string()
        } else if status.ends_with("COMPLETE") {
            status.as_str().green().to_string()
        } else {
            status.as_str().yellow().to_string()
        };

        let plain = StackEvent {
            resource_status: styled,
            ..event.clone()
        };
        format_event_line(&plain)
    }

    fn write_line(&self, line: &str) {
        if self.broken.load(Ordering::Relaxed) {
            return;
        }
        let Ok(mut writer) = self.writer.lock() else {
            return;
        };
        let result = writeln!(writer, "{}", line).and_then(|()| writer.flush());
        if let Err(err) = result {
            self.broken.store(true, Ordering::Relaxed);
            tracing::warn!(error = %err, "cannot write stack events to output; further lines are dropped");
        }
    }
}

impl TailEventSink for ConsoleTailSink {
    fn on_event(&self, event: TailEvent) {
        match event {
            TailEvent::Started { stack, since } => {
                tracing::info!(stack = %stack, since = %since, "tailing stack events");
            }
            TailEvent::Event(event) => {
                let line = self.render(&event);
                self.write_line(&line);
            }
            TailEvent::Finished { stack, status } => {
                tracing::info!(stack = %stack, %status, "stack reached terminal status");
            }
        }
    }
}
