//! Centralized coordinate validation and helper functions.

use std::num::IntErrorKind;

use crate::core::types::MAX_POS;

/// Coordinate validation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("not an integer: '{0}'")]
    NotAnInteger(String),
    #[error("value out of range ({0})")]
    OutOfRange(String),
}

/// Narrow a caller-supplied coordinate to a signed 32-bit position.
///
/// # Examples
///
/// ```
/// use hts_utils::utils::validation::to_coordinate;
///
/// assert_eq!(to_coordinate(100), Some(100));
/// assert_eq!(to_coordinate(1 << 31), None);
/// ```
#[must_use]
pub fn to_coordinate(value: i64) -> Option<i32> {
    i32::try_from(value).ok()
}

/// Parse the integer text of a region coordinate.
///
/// `,` may separate digit groups, so `1,000,000` and `1000000` are
/// equivalent. Leading, trailing or doubled commas are rejected. The result
/// is not narrowed to 32 bits.
///
/// # Errors
///
/// Returns `ValidationError::NotAnInteger` if the text has no digits or
/// contains anything other than an optional sign, digits and commas, or
/// `ValidationError::OutOfRange` if the value does not fit in an `i64`.
pub fn parse_coordinate(text: &str) -> Result<i64, ValidationError> {
    let not_an_integer = || ValidationError::NotAnInteger(text.to_string());

    let unsigned = text.strip_prefix(['-', '+']).unwrap_or(text);
    if text.contains(',')
        && !unsigned
            .split(',')
            .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit()))
    {
        return Err(not_an_integer());
    }

    let digits: String = text.chars().filter(|&c| c != ',').collect();

    digits.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            ValidationError::OutOfRange(text.to_string())
        }
        _ => not_an_integer(),
    })
}

/// A 0-based start must lie in `[0, MAX_POS)`
#[must_use]
pub fn is_valid_start(start: i32) -> bool {
    (0..MAX_POS).contains(&start)
}

/// A half-open stop must lie in `[0, MAX_POS]`
#[must_use]
pub fn is_valid_stop(stop: i32) -> bool {
    (0..=MAX_POS).contains(&stop)
}
