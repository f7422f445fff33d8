//! Length-bounded text fields.

use crate::domain::foundation::{DomainError, ValidationError};

/// Checks that `value` holds at most `max` characters.
pub(crate) fn validate_bounded_text(
    field: &str,
    value: &str,
    max: usize,
) -> Result<(), DomainError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::too_long(field, max, actual).into());
    }
    Ok(())
}
