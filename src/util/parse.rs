use crate::error::AppError;

/// Parses a Discord snowflake stored as a string into a `u64`.
///
/// Ids are persisted as strings (SQLite has no unsigned 64-bit integer);
/// a failure here means a corrupt row, so it surfaces as an internal error.
pub fn parse_snowflake(value: &str) -> Result<u64, AppError> {
    value
        .parse::<u64>()
        .map_err(|e| AppError::InternalError(format!("Failed to parse id '{}': {}", value, e)))
}
