//! Create/update request entities

use serde::Serialize;

use crate::domain::value_objects::Capability;

/// One parameter entry of a create/update request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ReconciledParameter {
    /// Explicit new value
    Value { key: String, value: String },
    /// Keep whatever the stack currently stores
    UsePrevious { key: String },
}

impl ReconciledParameter {
    pub fn key(&self) -> &str {
        match self {
            ReconciledParameter::Value { key, .. } | ReconciledParameter::UsePrevious { key } => key,
        }
    }

    pub fn uses_previous(&self) -> bool {
        matches!(self, ReconciledParameter::UsePrevious { .. })
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            ReconciledParameter::Value { value, .. } => Some(value),
            ReconciledParameter::UsePrevious { .. } => None,
        }
    }
}

/// A fully built create/update request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackRequest {
    pub stack_name: String,
    pub template_url: String,
    pub parameters: Vec<ReconciledParameter>,
    /// `None` means the field is left out entirely, never an empty list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Vec<Capability>>,
}
