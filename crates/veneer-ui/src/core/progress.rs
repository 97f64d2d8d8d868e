//! Progress ratio computation for the slider fill.

use std::fmt;

/// Percentage of the slider track covered by the current value, always within `[0, 100]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Progress(f64);

impl Progress {
    /// Zero progress, used for degenerate ranges.
    pub const ZERO: Self = Self(0.0);

    /// Compute progress for `current` within `[min, max]`.
    ///
    /// A range where `max <= min` yields [`Progress::ZERO`]. Values outside the
    /// range are clamped to the track ends.
    #[must_use]
    pub const fn from_bounds(current: f64, min: f64, max: f64) -> Self {
        if max <= min {
            return Self::ZERO;
        }
        // Halved operands keep the differences finite across the whole f64 range.
        let span = max / 2.0 - min / 2.0;
        let ratio = (current / 2.0 - min / 2.0) / span * 100.0;
        if !ratio.is_finite() || ratio <= 0.0 {
            return Self::ZERO;
        }
        if ratio >= 100.0 {
            return Self(100.0);
        }
        Self(ratio)
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
