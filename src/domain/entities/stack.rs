//! Stack entities as reported by the control plane

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::value_objects::StackStatus;

/// Parameter values currently stored on a remote stack
pub type PreviousParameters = BTreeMap<String, String>;

/// One row of a stack listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackSummary {
    pub name: String,
    pub status: StackStatus,
}

/// A stored parameter value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackParameter {
    pub key: String,
    pub value: String,
}

/// A stack output value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackOutput {
    pub key: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Result of describing a single stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackDescription {
    pub name: String,
    pub status: StackStatus,
    pub parameters: Vec<StackParameter>,
    pub outputs: Vec<StackOutput>,
}

impl StackDescription {
    pub fn new(name: impl Into<String>, status: impl Into<StackStatus>) -> Self {
        Self {
            name: name.into(),
            status: status.into(),
            parameters: Vec::new(),
            outputs: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.push(StackParameter {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    pub fn with_output(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.outputs.push(StackOutput {
            key: key.into(),
            value: value.into(),
            description: None,
        });
        self
    }

    /// Stored parameters as a key/value mapping
    pub fn parameter_map(&self) -> PreviousParameters {
        self.parameters
            .iter()
            .map(|p| (p.key.clone(), p.value.clone()))
            .collect()
    }

    pub fn output(&self, key: &str) -> Option<&StackOutput> {
        self.outputs.iter().find(|o| o.key == key)
    }
}
