//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod blob_store;
pub mod clock;
pub mod control_plane;
pub mod tail_events;
pub mod template_loader;

pub use blob_store::BlobStore;
pub use clock::Clock;
pub use control_plane::ControlPlane;
pub use tail_events::{NoopTailSink, TailEvent, TailEventSink};
pub use template_loader::TemplateLoader;
