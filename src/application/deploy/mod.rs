//! Deploy Module
//!
//! Orchestrates the create/update flow.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`DeployOptions`, `Operation`, `TemplateSource`)
//! - `result` - Result types (`DeployResult`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use stackctl::application::deploy::{DeployOptions, DeployUseCase, TemplateSource};
//!
//! let use_case = DeployUseCase::new(control_plane, publisher, loader, clock);
//! let result = use_case.execute(&DeployOptions::create("web", TemplateSource::Path(path)))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::{DeployOptions, Operation, TemplateSource};
pub use result::DeployResult;
pub use use_case::DeployUseCase;
