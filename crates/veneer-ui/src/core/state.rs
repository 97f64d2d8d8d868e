//! Plain value objects describing one slider instance.

use crate::core::error::{SliderError, SliderField};
use crate::core::numeric::{coerce_number, parse_finite};

/// Slider fields exactly as read from the control, before coercion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawSlider {
    /// Current value text.
    pub current: Option<String>,
    /// Lower bound text.
    pub min: Option<String>,
    /// Upper bound text.
    pub max: Option<String>,
}

impl RawSlider {
    /// Build a raw snapshot from three present field values.
    #[must_use]
    pub fn new(current: impl Into<String>, min: impl Into<String>, max: impl Into<String>) -> Self {
        Self {
            current: Some(current.into()),
            min: Some(min.into()),
            max: Some(max.into()),
        }
    }

    fn fields(&self) -> [(SliderField, Option<&str>); 3] {
        [
            (SliderField::Current, self.current.as_deref()),
            (SliderField::Min, self.min.as_deref()),
            (SliderField::Max, self.max.as_deref()),
        ]
    }
}

/// Numeric slider state used by [`crate::core::sync::synchronize`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SliderState {
    /// Current value.
    pub current: f64,
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl SliderState {
    /// Construct a state from already-numeric values.
    #[must_use]
    pub const fn new(current: f64, min: f64, max: f64) -> Self {
        Self { current, min, max }
    }

    /// Coerce raw fields, treating anything missing or malformed as `0`.
    #[must_use]
    pub fn from_raw(raw: &RawSlider) -> Self {
        Self {
            current: coerce_number(raw.current.as_deref()),
            min: coerce_number(raw.min.as_deref()),
            max: coerce_number(raw.max.as_deref()),
        }
    }

    /// Parse raw fields strictly.
    ///
    /// # Errors
    /// Returns the first [`SliderError`] found, checking `current`, `min`, then `max`.
    pub fn try_from_raw(raw: &RawSlider) -> Result<Self, SliderError> {
        let mut values = [0.0; 3];
        for (slot, (field, text)) in values.iter_mut().zip(raw.fields()) {
            let text = text
                .filter(|text| !text.trim().is_empty())
                .ok_or(SliderError::Missing { field })?;
            *slot = parse_finite(text).ok_or_else(|| SliderError::NotNumeric {
                field,
                value: text.to_string(),
            })?;
        }
        let [current, min, max] = values;
        Ok(Self { current, min, max })
    }
}
