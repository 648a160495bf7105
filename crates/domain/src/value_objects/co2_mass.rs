//! CO2-equivalent mass value object
//!
//! Holds the exact kilogram figure produced by a trip calculation and knows
//! how to present it: one decimal place, rounded half-up.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::Co2Mass;
//! use rust_decimal::Decimal;
//!
//! let mass = Co2Mass::from_kg(Decimal::new(495_688_644, 7)).expect("non-negative");
//! assert_eq!(mass.to_string(), "49.6");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

use crate::errors::DomainError;

/// A non-negative mass of CO2-equivalent in kilograms
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Co2Mass(Decimal);

impl Co2Mass {
    /// Number of decimal places used for presentation
    pub const DISPLAY_SCALE: u32 = 1;

    /// Create a mass from an exact kilogram value
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if the value is negative.
    pub fn from_kg(kilograms: Decimal) -> Result<Self, DomainError> {
        if kilograms.is_sign_negative() && !kilograms.is_zero() {
            return Err(DomainError::ValidationError(format!(
                "CO2e mass must not be negative, got {kilograms}kg"
            )));
        }
        Ok(Self(kilograms))
    }

    /// The exact, unrounded kilogram value
    #[must_use]
    pub const fn kilograms(self) -> Decimal {
        self.0
    }

    /// Kilograms rounded to one decimal place, halves away from zero
    #[must_use]
    pub fn rounded(self) -> Decimal {
        round_half_up(self.0, Self::DISPLAY_SCALE)
    }
}

/// Round to `scale` decimal places with ties going away from zero
///
/// The result always carries exactly `scale` fractional digits, so `0`
/// rounds to `0.0` at scale 1.
#[must_use]
pub fn round_half_up(value: Decimal, scale: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(scale);
    rounded
}

impl fmt::Display for Co2Mass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rounded())
    }
}
