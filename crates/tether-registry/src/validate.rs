//! Pure runtime-type validation.
//!
//! Invoked before any materialization I/O so a mismatched link fails before
//! expensive work, and again on the returned object as a final check.

use std::any::TypeId;

use crate::error::{RegistryError, RegistryResult};

/// Validate that a resolved object's runtime type matches the expected type.
///
/// Pure and side-effect free. The type names are carried into the error so a
/// broken link can be diagnosed without re-following it.
pub fn validate_object_type(
    expected: TypeId,
    expected_name: &str,
    actual: TypeId,
    actual_name: &str,
) -> RegistryResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(RegistryError::TypeMismatch {
            expected: expected_name.to_string(),
            actual: actual_name.to_string(),
        })
    }
}
