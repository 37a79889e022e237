pub mod deploy;
pub mod events;
pub mod list;
pub mod lookup;
pub mod template;

use anyhow::Result;
use stackctl::domain::ports::TailEventSink;
use stackctl::domain::value_objects::StackStatus;
use stackctl::infrastructure::{ConsoleTailSink, JsonTailSink};
use stackctl::presentation::output::missing_stack_message;

use crate::ui::context::UiContext;

/// Sink for tail sessions: NDJSON in `--json` mode, plain lines otherwise
pub(crate) fn tail_sink(ui: &UiContext) -> Box<dyn TailEventSink> {
    if ui.json {
        Box::new(JsonTailSink::stdout())
    } else {
        Box::new(ConsoleTailSink::stdout(ui.color))
    }
}

/// Lookup commands report a missing stack instead of failing
pub(crate) fn report_missing_stack(ui: &UiContext, command: &str, name: &str) -> Result<()> {
    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": command,
            "stack": name,
            "exists": false
        }))?;
    } else {
        println!("{}", missing_stack_message(name));
    }
    Ok(())
}

pub(crate) fn warn_on_rollback(name: &str, status: &StackStatus) {
    if status.is_rollback() {
        tracing::warn!(stack = name, status = %status, "stack finished in a rollback state");
    }
}
