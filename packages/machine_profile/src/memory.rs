use hardware_units::MemorySize;
use tracing::trace;

use crate::profile::{reject_payload, require_payload};
use crate::{Error, FieldValue, Outcome, Profile, Result, Slot};

pub(crate) const LABEL: &str = "random-access memory";

const FIELD_NAMES: &[&str] = &["ram_size", "ram_written"];

// Distinct from the solid-state storage behaviors so both slots stay addressable in a machine.
const BEHAVIOR_NAMES: &[&str] = &["write_memory", "read_memory"];

/// Static description of installed system memory, plus a single slot of written data.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomAccessMemory {
    size: MemorySize,
    written: Slot,
}

impl RandomAccessMemory {
    /// Creates a memory description with an empty slot.
    #[must_use]
    pub const fn new(size: MemorySize) -> Self {
        Self {
            size,
            written: Slot::empty(),
        }
    }

    /// Installed capacity.
    #[must_use]
    pub const fn size(&self) -> MemorySize {
        self.size
    }

    /// Stores data in the slot, replacing any previous content.
    pub fn write_memory(&mut self, data: impl Into<String>) {
        self.written.write(data);
        trace!(size = %self.size, "slot written");
    }

    /// The slot, empty until the first [`write_memory()`][Self::write_memory].
    #[must_use]
    pub fn read_memory(&self) -> &Slot {
        &self.written
    }
}

impl Profile for RandomAccessMemory {
    fn label(&self) -> &'static str {
        LABEL
    }

    fn field_names(&self) -> &'static [&'static str] {
        FIELD_NAMES
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "ram_size" => Some(FieldValue::measurement(self.size)),
            "ram_written" => Some(FieldValue::from(&self.written)),
            _ => None,
        }
    }

    fn behavior_names(&self) -> &'static [&'static str] {
        BEHAVIOR_NAMES
    }

    fn invoke(&mut self, behavior: &str, payload: Option<String>) -> Result<Outcome> {
        match behavior {
            "write_memory" => {
                self.write_memory(require_payload(behavior, payload)?);
                Ok(Outcome::Stored)
            }
            "read_memory" => {
                reject_payload(behavior, payload.as_deref())?;
                Ok(Outcome::Content(
                    self.read_memory().value().map(str::to_string),
                ))
            }
            _ => Err(Error::UnknownMember(behavior.to_string())),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use hardware_units::StorageUnit;

    use super::*;

    fn ram() -> RandomAccessMemory {
        RandomAccessMemory::new(MemorySize::whole(16, StorageUnit::GB))
    }

    #[test]
    fn slot_round_trip() {
        let mut ram = ram();

        assert_eq!(ram.read_memory().value(), None);
        assert_eq!(ram.field("ram_written"), Some(FieldValue::Absent));

        ram.write_memory("Test 2!");

        assert_eq!(ram.read_memory().value(), Some("Test 2!"));
        assert_eq!(ram.read_memory().to_string(), "Test 2!");
    }

    #[test]
    fn storage_behavior_names_are_not_recognized() {
        let mut ram = ram();

        assert!(matches!(
            ram.invoke("write", Some("x".to_string())),
            Err(Error::UnknownMember(_))
        ));
        assert!(!ram.read_memory().is_written());
    }

    #[test]
    fn slot_access_by_name() {
        let mut ram = ram();

        ram.invoke("write_memory", Some("abc".to_string())).unwrap();

        assert_eq!(
            ram.invoke("read_memory", None).unwrap(),
            Outcome::Content(Some("abc".to_string()))
        );
        assert_eq!(ram.field("ram_size").unwrap().to_string(), "16GB");
    }
}
