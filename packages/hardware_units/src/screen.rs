use derive_more::derive::{Display, Into};

use crate::{Magnitude, Result};

/// How many times per second a screen redraws its image.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Into, Ord, PartialEq, PartialOrd)]
#[display("{hertz}Hz")]
pub struct RefreshRate {
    hertz: u32,
}

impl RefreshRate {
    /// Creates a refresh rate from a frequency in hertz.
    #[must_use]
    pub const fn hertz(hertz: u32) -> Self {
        Self { hertz }
    }

    /// The frequency in hertz.
    #[cfg_attr(test, mutants::skip)] // Trivial getter.
    #[must_use]
    pub const fn as_hertz(&self) -> u32 {
        self.hertz
    }
}

/// Native pixel resolution of a screen.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[display("{width}x{height}")]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl Resolution {
    /// Creates a resolution from its horizontal and vertical pixel counts.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Horizontal pixel count.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Vertical pixel count.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }
}

/// Diagonal size of a screen, in inches.
#[derive(Clone, Copy, Debug, Display, PartialEq)]
#[display("{inches}\"")]
pub struct ScreenDiagonal {
    inches: Magnitude,
}

impl ScreenDiagonal {
    /// Creates a screen diagonal from a decimal number of inches.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMagnitude`][crate::Error::InvalidMagnitude] if the value is
    /// negative or not finite.
    pub fn inches(inches: f64) -> Result<Self> {
        Ok(Self {
            inches: Magnitude::decimal(inches)?,
        })
    }

    /// The diagonal in inches.
    #[cfg_attr(test, mutants::skip)] // Trivial getter.
    #[must_use]
    pub const fn as_inches(&self) -> Magnitude {
        self.inches
    }
}
