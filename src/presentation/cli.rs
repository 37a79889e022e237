//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --region, --profile) are inherited by all subcommands
//! - `create` and `update` share one argument set
//! - Flags only override; env vars and config files are merged in `Config::load_or_default`

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::domain::value_objects::{Capability, ParameterOverrides};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// stackctl - publish, deploy and tail declarative infrastructure stacks
#[derive(Parser, Debug)]
#[command(name = "stackctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (NDJSON on stdout)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// AWS region (overrides AWS_REGION and config)
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// AWS named profile
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// Read configuration from this file instead of the default locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List stacks and their status
    List {
        /// Include deleted stacks
        #[arg(long)]
        all: bool,
    },

    /// Follow a stack's events until it reaches a terminal status
    Events {
        /// Stack name
        name: String,

        /// Give up after this many seconds
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,
    },

    /// Show a stack's outputs
    Outputs {
        /// Stack name
        name: String,

        /// Print only the value of this output
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Show a stack's stored parameters
    Parameters {
        /// Stack name
        name: String,
    },

    /// Load a template and print it as JSON
    Template {
        /// Template file (defaults to STACK_TEMPLATE or deploy.template)
        path: Option<PathBuf>,
    },

    /// Publish a template and create a new stack
    Create(DeployArgs),

    /// Publish a template and update an existing stack
    Update(DeployArgs),
}

/// Options shared by `create` and `update`
#[derive(Args, Debug, Clone)]
pub struct DeployArgs {
    /// Stack name
    pub name: String,

    /// Template file (defaults to STACK_TEMPLATE or deploy.template)
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Bucket to publish the template to (defaults to AWS_TEMPLATE_BUCKET)
    #[arg(short, long)]
    pub bucket: Option<String>,

    /// Parameter override, repeatable: -p KEY VALUE
    #[arg(
        short = 'p',
        long = "parameter",
        num_args = 2,
        value_names = ["KEY", "VALUE"],
        action = ArgAction::Append
    )]
    pub parameters: Vec<String>,

    /// Acknowledge IAM resources
    #[arg(long, conflicts_with = "named_iam")]
    pub iam: bool,

    /// Acknowledge named IAM resources
    #[arg(long)]
    pub named_iam: bool,

    /// Follow stack events after submitting
    #[arg(long)]
    pub tail: bool,

    /// Stop tailing after this many seconds
    #[arg(long, value_name = "SECS", requires = "tail")]
    pub timeout: Option<u64>,
}

impl DeployArgs {
    /// Collapse `-p` pairs; a repeated key keeps its last value
    pub fn overrides(&self) -> ParameterOverrides {
        ParameterOverrides::from_pairs(
            self.parameters
                .chunks(2)
                .filter(|pair| pair.len() == 2)
                .map(|pair| (pair[0].clone(), pair[1].clone())),
        )
    }

    pub fn capability(&self) -> Option<Capability> {
        if self.named_iam {
            Some(Capability::NamedIam)
        } else if self.iam {
            Some(Capability::Iam)
        } else {
            None
        }
    }
}
