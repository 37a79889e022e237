//! `create` / `update` entry point

use std::sync::atomic::AtomicBool;
use std::time::Duration;

use anyhow::Result;
use stackctl::application::{DeployOptions, DeployResult, Operation, TemplateSource};
use stackctl::config::Config;
use stackctl::presentation::factory;
use stackctl::presentation::DeployArgs;

use super::template::resolve_template_path;
use super::{tail_sink, warn_on_rollback};
use crate::ui::context::UiContext;

pub fn cmd_deploy(
    config: &Config,
    ui: &UiContext,
    operation: Operation,
    args: &DeployArgs,
    running: &AtomicBool,
) -> Result<()> {
    let mut config = config.clone();
    if let Some(bucket) = &args.bucket {
        config.deploy.bucket = Some(bucket.clone());
    }

    let options = deploy_options(&config, operation, args)?;
    let use_case = factory::create_deploy_use_case(&config)?;

    let sink = tail_sink(ui);
    let result = use_case.execute_with_events(&options, running, sink.as_ref())?;

    if let Some(outcome) = &result.tail {
        warn_on_rollback(&args.name, &outcome.final_status);
    }

    render_result(ui, &args.name, &result)
}

/// Translate parsed arguments into use case options
pub(crate) fn deploy_options(
    config: &Config,
    operation: Operation,
    args: &DeployArgs,
) -> Result<DeployOptions> {
    let template = resolve_template_path(args.template.as_deref(), config)?;

    let tail = if args.tail {
        let mut options = config.tail_options();
        if let Some(secs) = args.timeout {
            options = options.with_deadline(Some(Duration::from_secs(secs)));
        }
        Some(options)
    } else {
        None
    };

    Ok(
        DeployOptions::new(operation, args.name.clone(), TemplateSource::Path(template))
            .with_overrides(args.overrides())
            .with_capability(args.capability())
            .with_tail(tail),
    )
}

fn render_result(ui: &UiContext, name: &str, result: &DeployResult) -> Result<()> {
    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": result.operation.to_string(),
            "stack": name,
            "template": result.template,
            "request": result.request,
            "tail": result.tail,
            "rolled_back": result.rolled_back()
        }))?;
        return Ok(());
    }

    println!(
        "Submitted {} for stack `{}` (template {})",
        result.operation, name, result.template.url
    );
    if ui.verbose > 0 {
        println!("  sha256: {}", result.template.sha256);
    }
    if let Some(outcome) = &result.tail {
        println!("Final status: {}", outcome.final_status);
    }
    Ok(())
}
