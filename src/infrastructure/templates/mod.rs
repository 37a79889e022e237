//! Template loaders

mod fs_loader;

pub use fs_loader::{FsTemplateLoader, TemplateFormat};
