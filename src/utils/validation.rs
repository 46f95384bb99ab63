// Parsing de parâmetros vindos do caller (path/query)

use super::error::AppError;

/// Parses a user id as a base-10 integer.
pub fn parse_user_id(raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::InvalidRequest(format!("The user supplied id: {} was not valid.", raw)))
}

/// Parses the optional stocks threshold.
///
/// `None` and empty strings mean "no threshold". Anything else must be a
/// non-negative integer.
pub fn parse_threshold(raw: Option<&str>) -> Result<Option<i64>, AppError> {
    let raw = match raw {
        None => return Ok(None),
        Some(s) if s.is_empty() => return Ok(None),
        Some(s) => s,
    };

    match raw.trim().parse::<i64>() {
        Ok(value) if value >= 0 => Ok(Some(value)),
        _ => Err(AppError::InvalidRequest(format!(
            "The user supplied threshold: {} was not valid.",
            raw
        ))),
    }
}
