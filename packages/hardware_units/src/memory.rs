use std::str::FromStr;

use derive_more::derive::Display;

use crate::{Error, Magnitude, Result};

/// The scale in which an amount of memory or storage is expressed.
///
/// No conversion between scales is performed - `1024KB` and `1MB` are different values.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[expect(
    clippy::exhaustive_enums,
    reason = "the set of recognized storage scales is closed"
)]
pub enum StorageUnit {
    /// Bytes.
    #[display("B")]
    B,

    /// Kilobytes.
    #[display("KB")]
    KB,

    /// Megabytes.
    #[display("MB")]
    MB,

    /// Gigabytes.
    #[display("GB")]
    GB,

    /// Terabytes.
    #[display("TB")]
    TB,
}

impl FromStr for StorageUnit {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "B" => Ok(Self::B),
            "KB" => Ok(Self::KB),
            "MB" => Ok(Self::MB),
            "GB" => Ok(Self::GB),
            "TB" => Ok(Self::TB),
            _ => Err(Error::unknown_tag("storage unit", tag)),
        }
    }
}

/// An amount of memory or storage, such as the capacity of a drive or the size of a cache.
///
/// Renders as the amount immediately followed by the unit tag.
///
/// # Example
///
/// ```
/// use hardware_units::{MemorySize, StorageUnit};
///
/// let capacity = MemorySize::decimal(480.0, StorageUnit::GB)?;
/// assert_eq!(capacity.to_string(), "480.0GB");
///
/// let transfer = MemorySize::whole(500, StorageUnit::MB);
/// assert_eq!(transfer.to_string(), "500MB");
/// # Ok::<(), hardware_units::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Display, PartialEq)]
#[display("{amount}{unit}")]
pub struct MemorySize {
    amount: Magnitude,
    unit: StorageUnit,
}

impl MemorySize {
    /// Creates a memory size from an already-validated magnitude.
    #[must_use]
    pub const fn new(amount: Magnitude, unit: StorageUnit) -> Self {
        Self { amount, unit }
    }

    /// Creates a memory size with a whole-number amount.
    #[must_use]
    pub const fn whole(amount: u64, unit: StorageUnit) -> Self {
        Self::new(Magnitude::whole(amount), unit)
    }

    /// Creates a memory size with a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMagnitude`] if the amount is negative or not finite.
    pub fn decimal(amount: f64, unit: StorageUnit) -> Result<Self> {
        Ok(Self::new(Magnitude::decimal(amount)?, unit))
    }

    /// The numeric amount, in terms of [`unit()`][Self::unit].
    #[cfg_attr(test, mutants::skip)] // Trivial getter.
    #[must_use]
    pub const fn amount(&self) -> Magnitude {
        self.amount
    }

    /// The scale the amount is expressed in.
    #[cfg_attr(test, mutants::skip)] // Trivial getter.
    #[must_use]
    pub const fn unit(&self) -> StorageUnit {
        self.unit
    }
}

/// Sequential read and write throughput of a storage device, each expressed per second.
#[derive(Clone, Copy, Debug, Display, PartialEq)]
#[display("{read}/s (Read) | {write}/s (Write)")]
pub struct Throughput {
    read: MemorySize,
    write: MemorySize,
}

impl Throughput {
    /// Creates a throughput pair from the amount read and the amount written per second.
    #[must_use]
    pub const fn new(read: MemorySize, write: MemorySize) -> Self {
        Self { read, write }
    }

    /// Amount of data read per second.
    #[must_use]
    pub const fn read(&self) -> MemorySize {
        self.read
    }

    /// Amount of data written per second.
    #[must_use]
    pub const fn write(&self) -> MemorySize {
        self.write
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn unit_tags_round_trip() {
        for unit in [
            StorageUnit::B,
            StorageUnit::KB,
            StorageUnit::MB,
            StorageUnit::GB,
            StorageUnit::TB,
        ] {
            assert_eq!(unit.to_string().parse::<StorageUnit>().unwrap(), unit);
        }
    }

    #[test]
    fn unknown_unit_is_rejected() {
        let error = "PB".parse::<StorageUnit>().unwrap_err();
        assert!(matches!(error, Error::UnknownTag { kind: "storage unit", .. }));

        // Tags are case-sensitive.
        assert!("kb".parse::<StorageUnit>().is_err());
    }

    #[test]
    fn memory_size_rendering() {
        assert_eq!(
            MemorySize::decimal(384.0, StorageUnit::KB).unwrap().to_string(),
            "384.0KB"
        );
        assert_eq!(MemorySize::whole(8, StorageUnit::GB).to_string(), "8GB");
    }

    #[test]
    fn memory_size_rejects_negative() {
        assert!(MemorySize::decimal(-8.0, StorageUnit::GB).is_err());
    }

    #[test]
    fn throughput_rendering() {
        let throughput = Throughput::new(
            MemorySize::whole(500, StorageUnit::MB),
            MemorySize::whole(450, StorageUnit::MB),
        );

        assert_eq!(
            throughput.to_string(),
            "500MB/s (Read) | 450MB/s (Write)"
        );
        assert_eq!(throughput.read().amount(), Magnitude::whole(500));
        assert_eq!(throughput.write().unit(), StorageUnit::MB);
    }
}
