//! `parameters` and `outputs`

use std::io::Write;

use anyhow::Result;
use stackctl::config::Config;
use stackctl::domain::entities::{StackOutput, StackParameter};
use stackctl::presentation::factory;
use stackctl::presentation::output::{output_row, parameter_row};

use super::report_missing_stack;
use crate::ui::context::UiContext;

pub fn cmd_parameters(config: &Config, ui: &UiContext, name: &str) -> Result<()> {
    let queries = factory::create_stack_queries(config)?;
    let parameters = match queries.parameters(name) {
        Ok(parameters) => parameters,
        Err(e) if e.is_not_found() => return report_missing_stack(ui, "parameters", name),
        Err(e) => return Err(e.into()),
    };

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "parameters",
            "stack": name,
            "exists": true,
            "parameters": parameters
        }))?;
        return Ok(());
    }

    write_parameters(&mut std::io::stdout().lock(), &parameters)?;
    Ok(())
}

pub fn cmd_outputs(config: &Config, ui: &UiContext, name: &str, key: Option<&str>) -> Result<()> {
    let queries = factory::create_stack_queries(config)?;
    let outputs = match queries.outputs(name) {
        Ok(outputs) => outputs,
        Err(e) if e.is_not_found() => return report_missing_stack(ui, "outputs", name),
        Err(e) => return Err(e.into()),
    };

    if ui.json {
        let event = match key {
            Some(key) => serde_json::json!({
                "event": "complete",
                "command": "outputs",
                "stack": name,
                "exists": true,
                "key": key,
                "value": find_output(&outputs, key).map(|o| o.value.as_str())
            }),
            None => serde_json::json!({
                "event": "complete",
                "command": "outputs",
                "stack": name,
                "exists": true,
                "outputs": outputs
            }),
        };
        crate::ui::json::emit(event)?;
        return Ok(());
    }

    write_outputs(&mut std::io::stdout().lock(), &outputs, key)?;
    Ok(())
}

fn find_output<'a>(outputs: &'a [StackOutput], key: &str) -> Option<&'a StackOutput> {
    outputs.iter().find(|o| o.key == key)
}

fn write_parameters(out: &mut impl Write, parameters: &[StackParameter]) -> std::io::Result<()> {
    for parameter in parameters {
        writeln!(out, "{}", parameter_row(parameter))?;
    }
    Ok(())
}

fn write_outputs(
    out: &mut impl Write,
    outputs: &[StackOutput],
    key: Option<&str>,
) -> std::io::Result<()> {
    match key {
        // Bare value, for shell substitution; nothing when the key is absent
        Some(key) => {
            if let Some(output) = find_output(outputs, key) {
                writeln!(out, "{}", output.value)?;
            }
        }
        None => {
            for output in outputs {
                writeln!(out, "{}", output_row(output))?;
            }
        }
    }
    Ok(())
}
