use derive_more::derive::{Display, Into};

/// Power draw (thermal design power) in watts.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Into, Ord, PartialEq, PartialOrd)]
#[display("{watts}W")]
pub struct Power {
    watts: u32,
}

impl Power {
    /// Creates a power value from a number of watts.
    #[must_use]
    pub const fn watts(watts: u32) -> Self {
        Self { watts }
    }

    /// The power draw in watts.
    #[cfg_attr(test, mutants::skip)] // Trivial getter.
    #[must_use]
    pub const fn as_watts(&self) -> u32 {
        self.watts
    }
}

/// Number of physical cores on a processor.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Into, Ord, PartialEq, PartialOrd)]
#[display("{count} cores")]
pub struct CoreCount {
    count: u32,
}

impl CoreCount {
    /// Creates a core count.
    #[must_use]
    pub const fn new(count: u32) -> Self {
        Self { count }
    }

    /// The number of cores.
    #[cfg_attr(test, mutants::skip)] // Trivial getter.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.count
    }
}

/// Fabrication process node of a chip, in nanometers.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Into, Ord, PartialEq, PartialOrd)]
#[display("{nanometers}nm")]
pub struct FabricationNode {
    nanometers: u32,
}

impl FabricationNode {
    /// Creates a fabrication node from its feature size in nanometers.
    #[must_use]
    pub const fn nanometers(nanometers: u32) -> Self {
        Self { nanometers }
    }

    /// The feature size in nanometers.
    #[cfg_attr(test, mutants::skip)] // Trivial getter.
    #[must_use]
    pub const fn as_nanometers(&self) -> u32 {
        self.nanometers
    }
}
