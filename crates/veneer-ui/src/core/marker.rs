//! Discrete slider markers and their derived "below current value" flag.

use crate::core::numeric::coerce_number;

/// One marker after synchronization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerFlag {
    /// Fixed position of the marker along the range.
    pub position: f64,
    /// `true` when the position is strictly below the current value.
    pub below: bool,
}

impl MarkerFlag {
    /// Derive the flag for a marker at `position` against `current`.
    #[must_use]
    pub const fn derive(position: f64, current: f64) -> Self {
        Self {
            position,
            below: is_below(position, current),
        }
    }
}

/// Strict comparison used for every marker; a marker equal to `current` is not below it.
#[must_use]
pub const fn is_below(position: f64, current: f64) -> bool {
    position < current
}

/// Parse marker positions with the same tolerant coercion used for slider fields.
#[must_use]
pub fn parse_positions<'a, I>(raw: I) -> Vec<f64>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    raw.into_iter().map(coerce_number).collect()
}
