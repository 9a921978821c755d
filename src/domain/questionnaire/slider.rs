//! Slider value object (1 to 6 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Position of the answer slider between two traits.
///
/// 1 leans fully toward the first trait, 6 fully toward the second.
/// The default of 4 is kept as observed: it is the lower bound of
/// favoring the second trait, not a true midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SliderValue(u8);

impl SliderValue {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;
    pub const DEFAULT: u8 = 4;

    /// Creates a slider value, returning error if outside [1, 6].
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "slider_value",
                Self::MIN as i32,
                Self::MAX as i32,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Points awarded to the first axis of the question's pair.
    pub fn first_axis_points(&self) -> u32 {
        (Self::MAX - self.0) as u32
    }

    /// Points awarded to the second axis of the question's pair.
    pub fn second_axis_points(&self) -> u32 {
        (self.0 - Self::MIN) as u32
    }
}

impl Default for SliderValue {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<u8> for SliderValue {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        SliderValue::new(value)
    }
}

impl From<SliderValue> for u8 {
    fn from(value: SliderValue) -> Self {
        value.0
    }
}

impl fmt::Display for SliderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
