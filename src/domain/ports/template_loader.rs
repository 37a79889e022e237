//! TemplateLoader port - turns a template reference into a `Template`

use std::path::Path;

use crate::domain::entities::Template;
use crate::error::StackResult;

/// Abstract template source
pub trait TemplateLoader {
    fn load(&self, path: &Path) -> StackResult<Template>;
}
