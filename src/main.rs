//! stackctl CLI - publish, deploy and tail declarative infrastructure stacks
//!
//! Usage: stackctl <COMMAND>
//!
//! Commands:
//!   list        List stacks and their status
//!   events      Follow a stack's events until it settles
//!   outputs     Show a stack's outputs
//!   parameters  Show a stack's stored parameters
//!   template    Load a template and print it as JSON
//!   create      Publish a template and create a stack
//!   update      Publish a template and update a stack

mod commands;
mod ui;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stackctl::application::Operation;
use stackctl::config::Config;
use stackctl::presentation::output::print_config_warnings;
use stackctl::presentation::{Cli, Commands};
use stackctl::StackError;

use crate::ui::context::UiContext;

/// Conventional exit status after SIGINT
const EXIT_INTERRUPTED: i32 = 130;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    }) {
        tracing::debug!(error = %e, "could not install Ctrl+C handler");
    }

    let result = match &cli.command {
        Commands::List { all } => commands::list::cmd_list(&config, &ui, *all),
        Commands::Events { name, timeout } => {
            commands::events::cmd_events(&config, &ui, name, *timeout, &running)
        }
        Commands::Outputs { name, key } => {
            commands::lookup::cmd_outputs(&config, &ui, name, key.as_deref())
        }
        Commands::Parameters { name } => commands::lookup::cmd_parameters(&config, &ui, name),
        Commands::Template { path } => {
            commands::template::cmd_template(&config, &ui, path.as_deref())
        }
        Commands::Create(args) => {
            commands::deploy::cmd_deploy(&config, &ui, Operation::Create, args, &running)
        }
        Commands::Update(args) => {
            commands::deploy::cmd_deploy(&config, &ui, Operation::Update, args, &running)
        }
    };

    if let Err(err) = &result {
        if let Some(StackError::TailCancelled { name }) = err.downcast_ref::<StackError>() {
            eprintln!("Stopped following `{}`; the stack operation continues remotely.", name);
            std::process::exit(EXIT_INTERRUPTED);
        }
    }

    result
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
}

/// Merge config sources; CLI flags win over everything loaded from disk or env
fn load_config(cli: &Cli) -> Result<Config> {
    let (mut config, warnings) = match &cli.config {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)?;
            (config.with_env_overrides(), warnings)
        }
        None => {
            let cwd = std::env::current_dir()?;
            Config::load_or_default(Some(&cwd))?
        }
    };
    print_config_warnings(&warnings);

    if let Some(region) = &cli.region {
        config.aws.region = Some(region.clone());
    }
    if let Some(profile) = &cli.profile {
        config.aws.profile = Some(profile.clone());
    }

    Ok(config)
}
