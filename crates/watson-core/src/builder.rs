use crate::{ModelError, Result};

/// Take a required builder field, failing with `MissingField` when it was never set
///
/// Builders call this from `build()` for each required field so that
/// construction is all-or-nothing.
pub fn required<T: Clone>(model: &'static str, field: &'static str, value: Option<&T>) -> Result<T> {
    value.cloned().ok_or_else(|| {
        tracing::debug!(model, field, "build rejected: required field not set");
        ModelError::MissingField { model, field }
    })
}
