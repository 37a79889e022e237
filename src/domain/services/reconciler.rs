//! Parameter reconciliation
//!
//! Pure domain logic merging operator overrides with the values a stack
//! already stores. The result is exactly what gets submitted.

use crate::domain::entities::{PreviousParameters, ReconciledParameter};
use crate::domain::value_objects::ParameterOverrides;

/// Compute the parameter list for a create/update request.
///
/// Keys are the template's declared names (in declared order) followed by
/// override-only keys (in override order). Per key:
/// - explicit override: `Value`, even if the stack stores a value too
/// - no override, stored value: `UsePrevious`
/// - no override, nothing stored: omitted
pub fn reconcile(
    declared: &[String],
    overrides: &ParameterOverrides,
    previous: &PreviousParameters,
) -> Vec<ReconciledParameter> {
    let mut keys: Vec<&str> = Vec::with_capacity(declared.len() + overrides.len());
    for name in declared {
        if !keys.contains(&name.as_str()) {
            keys.push(name);
        }
    }
    for (key, _) in overrides.iter() {
        if !keys.contains(&key) {
            keys.push(key);
        }
    }

    keys.into_iter()
        .filter_map(|key| match overrides.get(key) {
            Some(value) => Some(ReconciledParameter::Value {
                key: key.to_string(),
                value: value.to_string(),
            }),
            None if previous.contains_key(key) => Some(ReconciledParameter::UsePrevious {
                key: key.to_string(),
            }),
            None => None,
        })
        .collect()
}
