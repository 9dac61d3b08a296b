//! Fraction value object (0.0-1.0 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A finite value between 0.0 and 1.0 inclusive.
///
/// Used for inference confidence and recommendation scores.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Fraction(f64);

impl Fraction {
    pub const ZERO: Self = Self(0.0);

    pub const ONE: Self = Self(1.0);

    /// Creates a new Fraction, clamping to the valid range. NaN becomes zero.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Creates a Fraction, returning error if out of range or not finite.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::invalid_format(
                "fraction",
                format!("{} is outside [0, 1]", value),
            ));
        }
        Ok(Self(value))
    }

    /// Ratio of two counts; zero when the denominator is zero.
    pub fn ratio(numerator: usize, denominator: usize) -> Self {
        if denominator == 0 {
            return Self::ZERO;
        }
        Self::new(numerator as f64 / denominator as f64)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<f64> for Fraction {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Fraction> for f64 {
    fn from(value: Fraction) -> Self {
        value.0
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_new_clamps_to_unit_interval() {
        assert_eq!(Fraction::new(1.7).value(), 1.0);
        assert_eq!(Fraction::new(-0.3).value(), 0.0);
        assert_eq!(Fraction::new(f64::NAN).value(), 0.0);
    }

    #[test]
    fn fraction_try_new_rejects_out_of_range() {
        assert!(Fraction::try_new(0.5).is_ok());
        assert!(Fraction::try_new(1.01).is_err());
        assert!(Fraction::try_new(f64::INFINITY).is_err());
    }

    #[test]
    fn fraction_ratio_handles_zero_denominator() {
        assert_eq!(Fraction::ratio(3, 0), Fraction::ZERO);
        assert_eq!(Fraction::ratio(1, 4).value(), 0.25);
    }

    #[test]
    fn fraction_rejects_out_of_range_json() {
        assert!(serde_json::from_str::<Fraction>("0.9").is_ok());
        assert!(serde_json::from_str::<Fraction>("1.5").is_err());
    }
}
