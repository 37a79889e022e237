//! File system TemplateLoader implementation
//!
//! Picks the parser from the file extension: YAML for `.yaml`/`.yml`,
//! JSON for everything else.
//!
//! YAML short-form intrinsics are expanded to their long form while
//! converting to JSON: `!Ref x` becomes `{"Ref": x}`, `!Condition x` becomes
//! `{"Condition": x}` and any other `!Name x` becomes `{"Fn::Name": x}`.

use std::path::Path;

use serde_json::{Map, Number, Value};
use serde_yaml_ng::Value as YamlValue;

use crate::domain::entities::Template;
use crate::domain::ports::TemplateLoader;
use crate::error::{StackError, StackResult};

/// Template file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateFormat {
    Json,
    Yaml,
}

impl TemplateFormat {
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => TemplateFormat::Yaml,
            _ => TemplateFormat::Json,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FsTemplateLoader;

impl FsTemplateLoader {
    pub fn new() -> Self {
        Self
    }

    /// Parse template text in the given format
    pub fn parse(content: &str, format: TemplateFormat) -> Result<Template, String> {
        let value: Value = match format {
            TemplateFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string())?,
            TemplateFormat::Yaml => {
                let yaml: YamlValue =
                    serde_yaml_ng::from_str(content).map_err(|e| e.to_string())?;
                yaml_to_json(yaml)?
            }
        };
        Template::from_value(value)
    }
}

fn yaml_to_json(yaml: YamlValue) -> Result<Value, String> {
    Ok(match yaml {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(b),
        YamlValue::Number(n) => yaml_number(&n)?,
        YamlValue::String(s) => Value::String(s),
        YamlValue::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(yaml_to_json)
                .collect::<Result<_, _>>()?,
        ),
        YamlValue::Mapping(mapping) => {
            let mut object = Map::new();
            for (key, value) in mapping {
                object.insert(mapping_key(key)?, yaml_to_json(value)?);
            }
            Value::Object(object)
        }
        YamlValue::Tagged(tagged) => {
            let tag = tagged.tag.to_string();
            let name = tag.trim_start_matches('!');
            let value = yaml_to_json(tagged.value)?;
            intrinsic(name, value)
        }
    })
}

fn intrinsic(name: &str, value: Value) -> Value {
    let (key, value) = match name {
        "Ref" | "Condition" => (name.to_string(), value),
        // `!GetAtt Bucket.Arn` is the scalar spelling of `["Bucket", "Arn"]`
        "GetAtt" => match value {
            Value::String(s) => match s.split_once('.') {
                Some((resource, attribute)) => (
                    "Fn::GetAtt".to_string(),
                    Value::Array(vec![resource.into(), attribute.into()]),
                ),
                None => ("Fn::GetAtt".to_string(), Value::String(s)),
            },
            other => ("Fn::GetAtt".to_string(), other),
        },
        _ => (format!("Fn::{}", name), value),
    };
    let mut object = Map::new();
    object.insert(key, value);
    Value::Object(object)
}

fn yaml_number(n: &serde_yaml_ng::Number) -> Result<Value, String> {
    if let Some(i) = n.as_i64() {
        Ok(Value::Number(i.into()))
    } else if let Some(u) = n.as_u64() {
        Ok(Value::Number(u.into()))
    } else {
        n.as_f64()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| format!("unsupported number {}", n))
    }
}

fn mapping_key(key: YamlValue) -> Result<String, String> {
    match key {
        YamlValue::String(s) => Ok(s),
        YamlValue::Bool(b) => Ok(b.to_string()),
        YamlValue::Number(n) => Ok(n.to_string()),
        other => Err(format!("unsupported mapping key {:?}", other)),
    }
}

impl TemplateLoader for FsTemplateLoader {
    fn load(&self, path: &Path) -> StackResult<Template> {
        let load_error = |message: String| StackError::TemplateLoad {
            path: path.to_path_buf(),
            message,
        };

        let content = std::fs::read_to_string(path).map_err(|e| load_error(e.to_string()))?;
        let template = Self::parse(&content, TemplateFormat::from_path(path)).map_err(load_error)?;

        tracing::debug!(
            path = %path.display(),
            parameters = template.parameter_names().len(),
            "loaded template"
        );
        Ok(template)
    }
}
