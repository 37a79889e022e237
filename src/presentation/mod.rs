//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Plain-text row formatting
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Output rendering helpers
//!
//! ## Usage
//!
//! ```ignore
//! use stackctl::presentation::factory;
//!
//! let queries = factory::create_stack_queries(&config)?;
//! let stacks = queries.list(false)?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, ColorWhen, Commands, DeployArgs};
pub use factory::{
    create_aws_cli, create_deploy_use_case, create_events_use_cases, create_stack_queries,
};
