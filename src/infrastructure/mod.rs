//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `aws/` - Control plane and blob store via the AWS CLI
//! - `templates/` - Template loaders (JSON, YAML)
//! - `events/` - Tail event sinks (console, NDJSON)
//! - `clock` - System clock

pub mod aws;
pub mod clock;
pub mod events;
pub mod templates;

// Re-export for convenience
pub use aws::{AwsCli, CloudFormationControlPlane, S3BlobStore};
pub use clock::SystemClock;
pub use events::{ConsoleTailSink, JsonTailSink};
pub use templates::FsTemplateLoader;
