//! Input validation helpers

use crate::utils::AppError;

/// Body of every missing-field rejection
pub const MISSING_FIELDS: &str = "Missing required fields";

/// Reject the request when any `(field, value)` pair is empty.
///
/// Only the empty string counts as missing; whitespace is a value. The
/// response carries the fixed message, the field names go to the log.
pub fn require_fields(fields: &[(&str, &str)]) -> Result<(), AppError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| *field)
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    tracing::debug!(fields = %missing.join(", "), "Rejected request with missing fields");
    Err(AppError::validation(MISSING_FIELDS))
}
