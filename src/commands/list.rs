use std::io::Write;

use anyhow::Result;
use stackctl::config::Config;
use stackctl::domain::entities::StackSummary;
use stackctl::presentation::factory;
use stackctl::presentation::output::summary_row;

use crate::ui::context::UiContext;

pub fn cmd_list(config: &Config, ui: &UiContext, all: bool) -> Result<()> {
    let queries = factory::create_stack_queries(config)?;
    let stacks = queries.list(all)?;

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "list",
            "all": all,
            "stacks": stacks
        }))?;
        return Ok(());
    }

    let mut out = std::io::stdout().lock();
    write_rows(&mut out, &stacks)?;
    Ok(())
}

fn write_rows(out: &mut impl Write, stacks: &[StackSummary]) -> std::io::Result<()> {
    for stack in stacks {
        writeln!(out, "{}", summary_row(stack))?;
    }
    Ok(())
}
