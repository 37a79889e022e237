//! Deploy Options
//!
//! Configuration types for create/update operations.

use std::path::PathBuf;

use crate::application::tail::TailOptions;
use crate::domain::entities::Template;
use crate::domain::value_objects::{Capability, ParameterOverrides};

/// Which mutating call to submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "create"),
            Operation::Update => write!(f, "update"),
        }
    }
}

/// Where the template comes from
#[derive(Debug, Clone)]
pub enum TemplateSource {
    /// Load through the configured `TemplateLoader`
    Path(PathBuf),
    /// Already resolved by the caller
    Loaded(Template),
}

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    pub operation: Operation,
    pub stack_name: String,
    pub template: TemplateSource,
    pub overrides: ParameterOverrides,
    pub capability: Option<Capability>,
    /// Follow the stack's events after submitting
    pub tail: Option<TailOptions>,
}

impl DeployOptions {
    pub fn new(operation: Operation, stack_name: impl Into<String>, template: TemplateSource) -> Self {
        Self {
            operation,
            stack_name: stack_name.into(),
            template,
            overrides: ParameterOverrides::new(),
            capability: None,
            tail: None,
        }
    }

    pub fn create(stack_name: impl Into<String>, template: TemplateSource) -> Self {
        Self::new(Operation::Create, stack_name, template)
    }

    pub fn update(stack_name: impl Into<String>, template: TemplateSource) -> Self {
        Self::new(Operation::Update, stack_name, template)
    }

    pub fn with_overrides(mut self, overrides: ParameterOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn with_capability(mut self, capability: Option<Capability>) -> Self {
        self.capability = capability;
        self
    }

    pub fn with_tail(mut self, tail: Option<TailOptions>) -> Self {
        self.tail = tail;
        self
    }
}
