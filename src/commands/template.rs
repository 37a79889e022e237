use std::path::{Path, PathBuf};

use anyhow::Result;
use stackctl::config::Config;
use stackctl::domain::ports::TemplateLoader;
use stackctl::infrastructure::FsTemplateLoader;

use crate::ui::context::UiContext;

/// Template path from the flag, falling back to `STACK_TEMPLATE` / `deploy.template`
pub(crate) fn resolve_template_path(arg: Option<&Path>, config: &Config) -> Result<PathBuf> {
    match arg {
        Some(path) => Ok(path.to_path_buf()),
        None => config.deploy.template.clone().ok_or_else(|| {
            anyhow::anyhow!("no template given (pass a path or set STACK_TEMPLATE)")
        }),
    }
}

pub fn cmd_template(config: &Config, ui: &UiContext, path: Option<&Path>) -> Result<()> {
    let path = resolve_template_path(path, config)?;
    let template = FsTemplateLoader::new().load(&path)?;

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "template",
            "path": path.display().to_string(),
            "description": template.description(),
            "parameters": template.parameter_names(),
            "template": template.to_value()
        }))?;
        return Ok(());
    }

    println!("{}", template.to_pretty_json()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_template_path_prefers_argument() {
        let mut config = Config::default();
        config.deploy.template = Some(PathBuf::from("from-config.yaml"));

        let path = resolve_template_path(Some(Path::new("arg.json")), &config).unwrap();
        assert_eq!(path, PathBuf::from("arg.json"));

        let path = resolve_template_path(None, &config).unwrap();
        assert_eq!(path, PathBuf::from("from-config.yaml"));
    }

    #[test]
    fn resolve_template_path_requires_some_source() {
        let err = resolve_template_path(None, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("STACK_TEMPLATE"));
    }
}
