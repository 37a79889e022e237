use std::sync::atomic::AtomicBool;
use std::time::Duration;

use anyhow::Result;
use stackctl::config::Config;
use stackctl::presentation::factory;

use super::{report_missing_stack, tail_sink, warn_on_rollback};
use crate::ui::context::UiContext;

pub fn cmd_events(
    config: &Config,
    ui: &UiContext,
    name: &str,
    timeout: Option<u64>,
    running: &AtomicBool,
) -> Result<()> {
    let mut options = config.tail_options();
    if let Some(secs) = timeout {
        options = options.with_deadline(Some(Duration::from_secs(secs)));
    }
    let (queries, tail) = factory::create_events_use_cases(config, options)?;

    match queries.describe(name) {
        Ok(_) => {}
        Err(e) if e.is_not_found() => return report_missing_stack(ui, "events", name),
        Err(e) => return Err(e.into()),
    }

    let sink = tail_sink(ui);
    let outcome = tail.run(name, running, sink.as_ref())?;

    tracing::info!(
        stack = name,
        status = %outcome.final_status,
        events = outcome.events_reported,
        polls = outcome.polls,
        "tail finished"
    );
    warn_on_rollback(name, &outcome.final_status);
    Ok(())
}
