use std::fmt::{self, Display};

use crate::{Error, Result};

/// A non-negative amount that remembers whether it was specified as a whole number or as a
/// decimal number.
///
/// The distinction only affects rendering: a whole amount renders without a fractional part
/// (`500`), whereas a decimal amount always renders with at least one fractional digit
/// (`500.0`, `12.8`). Data sheets mix both notations and the rendering preserves whichever one
/// was used. Decimals are written in positional notation, never with an exponent.
///
/// Negative zero is stored as zero.
///
/// # Example
///
/// ```
/// use hardware_units::Magnitude;
///
/// assert_eq!(Magnitude::whole(500).to_string(), "500");
/// assert_eq!(Magnitude::decimal(500.0).unwrap().to_string(), "500.0");
/// assert_eq!(Magnitude::decimal(12.8).unwrap().to_string(), "12.8");
///
/// assert!(Magnitude::decimal(-1.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[expect(
    clippy::exhaustive_enums,
    reason = "a number is either whole or decimal, there is no third notation"
)]
pub enum Magnitude {
    /// An amount specified as an integer.
    Whole(u64),

    /// An amount specified as a finite, non-negative decimal number.
    Decimal(f64),
}

impl Magnitude {
    /// Creates a whole-number magnitude.
    #[must_use]
    pub const fn whole(value: u64) -> Self {
        Self::Whole(value)
    }

    /// Creates a decimal magnitude.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMagnitude`] if the value is negative, infinite or NaN.
    pub fn decimal(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::InvalidMagnitude {
                value,
                problem: "amount must be a finite number",
            });
        }

        if value < 0.0 {
            return Err(Error::InvalidMagnitude {
                value,
                problem: "amount must not be negative",
            });
        }

        // Clears the sign of negative zero, the only negative-signed value left at this point.
        Ok(Self::Decimal(value.abs()))
    }

    /// The amount as a floating-point number, regardless of notation.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "hardware quantities are nowhere near 2^53"
    )]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Whole(value) => value as f64,
            Self::Decimal(value) => value,
        }
    }
}

impl From<u32> for Magnitude {
    fn from(value: u32) -> Self {
        Self::Whole(u64::from(value))
    }
}

impl From<u64> for Magnitude {
    fn from(value: u64) -> Self {
        Self::Whole(value)
    }
}

impl TryFrom<f64> for Magnitude {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::decimal(value)
    }
}

impl Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Whole(value) => write!(f, "{value}"),
            Self::Decimal(value) => {
                if value.fract() == 0.0 {
                    write!(f, "{value:.1}")
                } else {
                    write!(f, "{value}")
                }
            }
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn whole_renders_without_fraction() {
        assert_eq!(Magnitude::whole(0).to_string(), "0");
        assert_eq!(Magnitude::whole(2667).to_string(), "2667");
        assert_eq!(Magnitude::from(450_u32).to_string(), "450");
    }

    #[test]
    fn decimal_renders_with_fraction() {
        assert_eq!(Magnitude::decimal(384.0).unwrap().to_string(), "384.0");
        assert_eq!(Magnitude::decimal(3.1).unwrap().to_string(), "3.1");
        assert_eq!(Magnitude::decimal(12.80).unwrap().to_string(), "12.8");
        assert_eq!(Magnitude::decimal(0.0).unwrap().to_string(), "0.0");
    }

    #[test]
    fn extreme_decimals_use_positional_notation() {
        assert_eq!(
            Magnitude::decimal(1e17).unwrap().to_string(),
            "100000000000000000.0"
        );
        assert_eq!(Magnitude::decimal(1e-5).unwrap().to_string(), "0.00001");
    }

    #[test]
    fn negative_zero_is_stored_as_zero() {
        let zero = Magnitude::decimal(-0.0).unwrap();

        assert_eq!(zero.to_string(), "0.0");
        assert!(zero.as_f64().is_sign_positive());
    }

    #[test]
    fn rejects_invalid_decimals() {
        assert!(matches!(
            Magnitude::decimal(-0.5),
            Err(Error::InvalidMagnitude { .. })
        ));
        assert!(Magnitude::decimal(f64::NAN).is_err());
        assert!(Magnitude::decimal(f64::INFINITY).is_err());
        assert!(Magnitude::try_from(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn as_f64_ignores_notation() {
        assert!((Magnitude::whole(8).as_f64() - 8.0).abs() < f64::EPSILON);
        assert!((Magnitude::decimal(8.0).unwrap().as_f64() - 8.0).abs() < f64::EPSILON);
    }
}
