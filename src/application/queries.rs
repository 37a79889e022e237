//! Read-only stack queries
//!
//! Thin wrappers over the control plane used by the lookup commands and the
//! deploy flow.

use crate::domain::entities::{
    PreviousParameters, StackDescription, StackOutput, StackParameter, StackSummary,
};
use crate::domain::ports::ControlPlane;
use crate::domain::value_objects::StackStatus;
use crate::error::{StackError, StackResult};

pub struct StackQueries<CP: ControlPlane> {
    control_plane: CP,
}

impl<CP: ControlPlane> StackQueries<CP> {
    pub fn new(control_plane: CP) -> Self {
        Self { control_plane }
    }

    /// List stacks; deleted ones only when `show_all`
    pub fn list(&self, show_all: bool) -> StackResult<Vec<StackSummary>> {
        self.control_plane
            .list_stacks(&StackStatus::list_filter(show_all))
    }

    /// Describe a live stack. A fully deleted stack counts as missing.
    pub fn describe(&self, name: &str) -> StackResult<StackDescription> {
        let stack = self.control_plane.describe_stack(name)?;
        if stack.status.is_deleted() {
            return Err(StackError::StackNotFound {
                name: name.to_string(),
            });
        }
        Ok(stack)
    }

    pub fn parameters(&self, name: &str) -> StackResult<Vec<StackParameter>> {
        Ok(self.describe(name)?.parameters)
    }

    pub fn outputs(&self, name: &str) -> StackResult<Vec<StackOutput>> {
        Ok(self.describe(name)?.outputs)
    }

    /// Stored parameter values, or an empty mapping when there is no stack yet.
    ///
    /// Only the not-found condition is recovered; other failures propagate.
    pub fn previous_parameters(&self, name: &str) -> StackResult<PreviousParameters> {
        match self.describe(name) {
            Ok(stack) => Ok(stack.parameter_map()),
            Err(err) if err.is_not_found() => {
                tracing::debug!(stack = name, "no existing stack, starting without previous parameters");
                Ok(PreviousParameters::new())
            }
            Err(err) => Err(err),
        }
    }
}
