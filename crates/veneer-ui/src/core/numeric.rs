//! Tolerant numeric coercion for values read out of form controls.
//!
//! # Design
//! - Missing, blank, non-numeric and non-finite inputs all collapse to `0`.
//! - Surrounding whitespace is ignored, matching how browsers read `value` attributes.

/// Coerce a raw UI field into a finite number, treating anything unusable as `0`.
#[must_use]
pub fn coerce_number(raw: Option<&str>) -> f64 {
    raw.and_then(parse_finite).unwrap_or(0.0)
}

/// Parse a finite number, returning `None` for blank, malformed or non-finite text.
#[must_use]
pub fn parse_finite(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}
