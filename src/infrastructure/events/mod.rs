//! Tail Sink Implementations
//!
//! Concrete implementations of TailEventSink:
//! - ConsoleTailSink: one human-readable line per event
//! - JsonTailSink: NDJSON output for CI/automation

mod console;
mod json;

pub use console::ConsoleTailSink;
pub use json::JsonTailSink;
