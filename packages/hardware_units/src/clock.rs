use derive_more::derive::{Display, Into};

use crate::{Magnitude, Result};

/// Base and boost clock speed of a processor, in gigahertz.
///
/// The relation between the two values is not validated; a boost clock lower than the base
/// clock is accepted as given.
///
/// Converting into `f64` yields the base clock.
///
/// # Example
///
/// ```
/// use hardware_units::ProcessorClock;
///
/// let clock = ProcessorClock::ghz(3.1, 3.4)?;
/// assert_eq!(clock.to_string(), "3.1 - 3.4 GHz");
///
/// let base: f64 = clock.into();
/// assert!((base - 3.1).abs() < f64::EPSILON);
/// # Ok::<(), hardware_units::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Display, PartialEq)]
#[display("{base} - {boost} GHz")]
pub struct ProcessorClock {
    base: Magnitude,
    boost: Magnitude,
}

impl ProcessorClock {
    /// Creates a processor clock from already-validated magnitudes.
    #[must_use]
    pub const fn new(base: Magnitude, boost: Magnitude) -> Self {
        Self { base, boost }
    }

    /// Creates a processor clock from decimal gigahertz values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMagnitude`][crate::Error::InvalidMagnitude] if either value is
    /// negative or not finite.
    pub fn ghz(base: f64, boost: f64) -> Result<Self> {
        Ok(Self::new(Magnitude::decimal(base)?, Magnitude::decimal(boost)?))
    }

    /// The guaranteed clock speed.
    #[must_use]
    pub const fn base(&self) -> Magnitude {
        self.base
    }

    /// The opportunistic maximum clock speed.
    #[must_use]
    pub const fn boost(&self) -> Magnitude {
        self.boost
    }
}

impl From<ProcessorClock> for f64 {
    fn from(clock: ProcessorClock) -> Self {
        clock.base.as_f64()
    }
}

/// Base clock speed of a graphics processor, in megahertz.
///
/// Converting into `u32` yields the base clock.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Into, PartialEq)]
#[display("{base_mhz}MHz")]
pub struct GraphicsClock {
    base_mhz: u32,
}

impl GraphicsClock {
    /// Creates a graphics clock from the base clock in megahertz.
    #[must_use]
    pub const fn mhz(base_mhz: u32) -> Self {
        Self { base_mhz }
    }

    /// The base clock in megahertz.
    #[cfg_attr(test, mutants::skip)] // Trivial getter.
    #[must_use]
    pub const fn base_mhz(&self) -> u32 {
        self.base_mhz
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn processor_clock_renders_range() {
        let clock = ProcessorClock::ghz(3.1, 3.4).unwrap();
        assert_eq!(clock.to_string(), "3.1 - 3.4 GHz");

        let clock = ProcessorClock::new(Magnitude::whole(3), Magnitude::decimal(4.0).unwrap());
        assert_eq!(clock.to_string(), "3 - 4.0 GHz");
    }

    #[test]
    fn processor_clock_coerces_to_base() {
        let clock = ProcessorClock::ghz(2.5, 4.2).unwrap();
        let base: f64 = clock.into();

        assert!((base - 2.5).abs() < f64::EPSILON);
        assert_eq!(clock.base(), Magnitude::decimal(2.5).unwrap());
        assert_eq!(clock.boost(), Magnitude::decimal(4.2).unwrap());
    }

    #[test]
    fn boost_below_base_is_accepted() {
        let clock = ProcessorClock::ghz(3.4, 3.1).unwrap();
        assert_eq!(clock.to_string(), "3.4 - 3.1 GHz");
    }

    #[test]
    fn processor_clock_rejects_invalid() {
        assert!(ProcessorClock::ghz(-1.0, 3.0).is_err());
        assert!(ProcessorClock::ghz(1.0, f64::NAN).is_err());
    }

    #[test]
    fn graphics_clock() {
        let clock = GraphicsClock::mhz(459);

        assert_eq!(clock.to_string(), "459MHz");
        assert_eq!(u32::from(clock), 459);
        assert_eq!(clock.base_mhz(), 459);
    }
}
