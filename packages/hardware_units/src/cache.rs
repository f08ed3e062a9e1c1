use std::fmt;

use derive_more::derive::Display;

use crate::{Error, MemorySize, Result};

/// Position of a cache in the processor cache hierarchy.
///
/// Renders as the bare level number (`1`, `2` or `3`).
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[expect(
    clippy::exhaustive_enums,
    reason = "profiles describe at most three cache levels"
)]
pub enum CacheLevel {
    /// The smallest and fastest cache, closest to the execution units.
    #[display("1")]
    L1,

    /// The intermediate cache level.
    #[display("2")]
    L2,

    /// The largest and slowest cache level, often shared between cores.
    #[display("3")]
    L3,
}

impl CacheLevel {
    /// All cache levels, in hierarchy order.
    pub const ALL: [Self; 3] = [Self::L1, Self::L2, Self::L3];
}

impl TryFrom<u8> for CacheLevel {
    type Error = Error;

    fn try_from(level: u8) -> Result<Self> {
        match level {
            1 => Ok(Self::L1),
            2 => Ok(Self::L2),
            3 => Ok(Self::L3),
            other => Err(Error::InvalidCacheLevel(other)),
        }
    }
}

impl From<CacheLevel> for u8 {
    fn from(level: CacheLevel) -> Self {
        match level {
            CacheLevel::L1 => 1,
            CacheLevel::L2 => 2,
            CacheLevel::L3 => 3,
        }
    }
}

/// A single cache of a given size at a given level of the hierarchy.
#[derive(Clone, Copy, Debug, Display, PartialEq)]
#[display("L{level} - {memory}")]
pub struct CacheEntry {
    memory: MemorySize,
    level: CacheLevel,
}

impl CacheEntry {
    /// Creates a cache entry.
    #[must_use]
    pub const fn new(memory: MemorySize, level: CacheLevel) -> Self {
        Self { memory, level }
    }

    /// The size of the cache.
    #[must_use]
    pub const fn memory(&self) -> MemorySize {
        self.memory
    }

    /// The level of the cache in the hierarchy.
    #[must_use]
    pub const fn level(&self) -> CacheLevel {
        self.level
    }
}

/// The caches of a chip, with at most one cache per level.
///
/// Entries are always kept in level order. Levels without a cache are simply absent - they are
/// skipped when iterating and when rendering, never shown as placeholders.
///
/// Renders as one line per present cache, each line terminated by `\n`. A set without any
/// caches renders as an empty string.
///
/// # Example
///
/// ```
/// use hardware_units::{CacheSet, MemorySize, StorageUnit};
///
/// let caches = CacheSet::new(
///     Some(MemorySize::decimal(384.0, StorageUnit::KB)?),
///     None,
///     Some(MemorySize::decimal(8.0, StorageUnit::MB)?),
/// );
///
/// assert_eq!(caches.to_string(), "L1 - 384.0KB\nL3 - 8.0MB\n");
/// assert_eq!(caches.len(), 2);
/// # Ok::<(), hardware_units::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CacheSet {
    l1: Option<MemorySize>,
    l2: Option<MemorySize>,
    l3: Option<MemorySize>,
}

impl CacheSet {
    /// Creates a cache set from the sizes of the caches at each level, if present.
    ///
    /// The level of each cache is implied by its position.
    #[must_use]
    pub const fn new(
        l1: Option<MemorySize>,
        l2: Option<MemorySize>,
        l3: Option<MemorySize>,
    ) -> Self {
        Self { l1, l2, l3 }
    }

    /// Creates a cache set without any caches.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(None, None, None)
    }

    /// Creates a cache set from entries given in any order, placing each entry by its level.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateCacheLevel`] if two entries share a level.
    pub fn from_entries(entries: impl IntoIterator<Item = CacheEntry>) -> Result<Self> {
        let mut set = Self::empty();

        for entry in entries {
            let slot = set.slot_mut(entry.level());

            if slot.is_some() {
                return Err(Error::DuplicateCacheLevel(entry.level()));
            }

            *slot = Some(entry.memory());
        }

        Ok(set)
    }

    /// The cache at the given level, if present.
    #[must_use]
    pub fn get(&self, level: CacheLevel) -> Option<CacheEntry> {
        let memory = match level {
            CacheLevel::L1 => self.l1,
            CacheLevel::L2 => self.l2,
            CacheLevel::L3 => self.l3,
        };

        memory.map(|memory| CacheEntry::new(memory, level))
    }

    /// Iterates over the present caches in level order.
    pub fn entries(&self) -> impl Iterator<Item = CacheEntry> + '_ {
        CacheLevel::ALL
            .into_iter()
            .filter_map(|level| self.get(level))
    }

    /// The number of present caches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries().count()
    }

    /// Whether no cache is present at any level.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }

    fn slot_mut(&mut self, level: CacheLevel) -> &mut Option<MemorySize> {
        match level {
            CacheLevel::L1 => &mut self.l1,
            CacheLevel::L2 => &mut self.l2,
            CacheLevel::L3 => &mut self.l3,
        }
    }
}

impl fmt::Display for CacheSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.entries() {
            writeln!(f, "{entry}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::StorageUnit;

    fn kb(amount: f64) -> MemorySize {
        MemorySize::decimal(amount, StorageUnit::KB).unwrap()
    }

    #[test]
    fn level_conversions() {
        for level in CacheLevel::ALL {
            assert_eq!(CacheLevel::try_from(u8::from(level)).unwrap(), level);
        }

        assert!(matches!(
            CacheLevel::try_from(0),
            Err(Error::InvalidCacheLevel(0))
        ));
        assert!(CacheLevel::try_from(4).is_err());
    }

    #[test]
    fn entry_rendering() {
        let entry = CacheEntry::new(kb(32.0), CacheLevel::L2);
        assert_eq!(entry.to_string(), "L2 - 32.0KB");
    }

    #[test]
    fn absent_levels_are_omitted() {
        let only_l2 = CacheSet::new(None, Some(kb(32.0)), None);
        let entry = CacheEntry::new(kb(32.0), CacheLevel::L2);

        assert_eq!(only_l2.to_string(), format!("{entry}\n"));
        assert_eq!(only_l2.len(), 1);
        assert_eq!(only_l2.get(CacheLevel::L1), None);
        assert_eq!(only_l2.get(CacheLevel::L2), Some(entry));
    }

    #[test]
    fn empty_renders_as_empty_string() {
        let caches = CacheSet::empty();

        assert_eq!(caches.to_string(), "");
        assert!(caches.is_empty());
        assert_eq!(caches, CacheSet::default());
    }

    #[test]
    fn from_entries_orders_by_level() {
        let caches = CacheSet::from_entries([
            CacheEntry::new(kb(8192.0), CacheLevel::L3),
            CacheEntry::new(kb(384.0), CacheLevel::L1),
        ])
        .unwrap();

        assert_eq!(caches.to_string(), "L1 - 384.0KB\nL3 - 8192.0KB\n");

        let levels = caches.entries().map(|e| e.level()).collect::<Vec<_>>();
        assert_eq!(levels, vec![CacheLevel::L1, CacheLevel::L3]);
    }

    #[test]
    fn from_entries_rejects_duplicate_level() {
        let result = CacheSet::from_entries([
            CacheEntry::new(kb(64.0), CacheLevel::L1),
            CacheEntry::new(kb(32.0), CacheLevel::L1),
        ]);

        assert!(matches!(
            result,
            Err(Error::DuplicateCacheLevel(CacheLevel::L1))
        ));
    }
}
