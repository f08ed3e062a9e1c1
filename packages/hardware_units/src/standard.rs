use std::str::FromStr;

use derive_more::derive::Display;

use crate::{Error, MemorySize, Result};

/// Generation of system memory supported by a processor's memory controller.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[expect(
    clippy::exhaustive_enums,
    reason = "the set of recognized memory generations is closed"
)]
pub enum SystemMemoryGeneration {
    /// DDR SDRAM.
    #[display("DDR1")]
    Ddr1,

    /// DDR2 SDRAM.
    #[display("DDR2")]
    Ddr2,

    /// DDR3 SDRAM.
    #[display("DDR3")]
    Ddr3,

    /// DDR4 SDRAM.
    #[display("DDR4")]
    Ddr4,

    /// DDR5 SDRAM.
    #[display("DDR5")]
    Ddr5,
}

impl FromStr for SystemMemoryGeneration {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "DDR1" => Ok(Self::Ddr1),
            "DDR2" => Ok(Self::Ddr2),
            "DDR3" => Ok(Self::Ddr3),
            "DDR4" => Ok(Self::Ddr4),
            "DDR5" => Ok(Self::Ddr5),
            _ => Err(Error::unknown_tag("system memory generation", tag)),
        }
    }
}

/// Generation of dedicated graphics memory.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[expect(
    clippy::exhaustive_enums,
    reason = "the set of recognized memory generations is closed"
)]
pub enum GraphicsMemoryGeneration {
    /// GDDR SDRAM.
    #[display("GDDR1")]
    Gddr1,

    /// GDDR2 SDRAM.
    #[display("GDDR2")]
    Gddr2,

    /// GDDR3 SDRAM.
    #[display("GDDR3")]
    Gddr3,

    /// GDDR4 SDRAM.
    #[display("GDDR4")]
    Gddr4,

    /// GDDR5 SDRAM.
    #[display("GDDR5")]
    Gddr5,
}

impl FromStr for GraphicsMemoryGeneration {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "GDDR1" => Ok(Self::Gddr1),
            "GDDR2" => Ok(Self::Gddr2),
            "GDDR3" => Ok(Self::Gddr3),
            "GDDR4" => Ok(Self::Gddr4),
            "GDDR5" => Ok(Self::Gddr5),
            _ => Err(Error::unknown_tag("graphics memory generation", tag)),
        }
    }
}

/// The system memory a processor can drive: generation, channel count and top supported speed.
///
/// # Example
///
/// ```
/// use hardware_units::{ProcessorMemoryStandard, SystemMemoryGeneration};
///
/// let standard = ProcessorMemoryStandard::new(SystemMemoryGeneration::Ddr4, 2, 2667);
///
/// assert_eq!(
///     standard.to_string(),
///     "DDR4 | 2 memory channels | 2667MHz - maximum memory speed"
/// );
/// ```
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[display("{generation} | {channels} memory channels | {max_speed_mhz}MHz - maximum memory speed")]
pub struct ProcessorMemoryStandard {
    generation: SystemMemoryGeneration,
    channels: u32,
    max_speed_mhz: u32,
}

impl ProcessorMemoryStandard {
    /// Creates a processor memory standard.
    #[must_use]
    pub const fn new(
        generation: SystemMemoryGeneration,
        channels: u32,
        max_speed_mhz: u32,
    ) -> Self {
        Self {
            generation,
            channels,
            max_speed_mhz,
        }
    }

    /// The supported memory generation.
    #[must_use]
    pub const fn generation(&self) -> SystemMemoryGeneration {
        self.generation
    }

    /// The number of independent memory channels.
    #[must_use]
    pub const fn channels(&self) -> u32 {
        self.channels
    }

    /// The highest supported memory speed, in megahertz.
    #[must_use]
    pub const fn max_speed_mhz(&self) -> u32 {
        self.max_speed_mhz
    }
}

/// The dedicated memory of a graphics card: generation, capacity, bus width and bandwidth.
#[derive(Clone, Copy, Debug, Display, PartialEq)]
#[display(
    "{generation} | {size} VRAM | {bus_width_bits}bit memory bus | {bandwidth}/s memory bandwidth"
)]
pub struct GraphicsMemoryStandard {
    generation: GraphicsMemoryGeneration,
    size: MemorySize,
    bus_width_bits: u32,
    bandwidth: MemorySize,
}

impl GraphicsMemoryStandard {
    /// Creates a graphics memory standard. The bandwidth is the amount transferred per second.
    #[must_use]
    pub const fn new(
        generation: GraphicsMemoryGeneration,
        size: MemorySize,
        bus_width_bits: u32,
        bandwidth: MemorySize,
    ) -> Self {
        Self {
            generation,
            size,
            bus_width_bits,
            bandwidth,
        }
    }

    /// The memory generation.
    #[must_use]
    pub const fn generation(&self) -> GraphicsMemoryGeneration {
        self.generation
    }

    /// The amount of video memory.
    #[must_use]
    pub const fn size(&self) -> MemorySize {
        self.size
    }

    /// Width of the memory bus, in bits.
    #[must_use]
    pub const fn bus_width_bits(&self) -> u32 {
        self.bus_width_bits
    }

    /// Peak amount of data transferred per second.
    #[must_use]
    pub const fn bandwidth(&self) -> MemorySize {
        self.bandwidth
    }
}
