use hardware_units::{MemorySize, Throughput};
use tracing::trace;

use crate::profile::{reject_payload, require_payload};
use crate::{Error, FieldValue, Outcome, Profile, Result, Slot};

pub(crate) const LABEL: &str = "solid-state storage";

const FIELD_NAMES: &[&str] = &[
    "ssd_size",
    "ssd_name",
    "ssd_interface",
    "ssd_speed",
    "ssd_written",
];

const BEHAVIOR_NAMES: &[&str] = &["write", "read"];

/// Static description of a solid-state drive, plus a single slot of written data.
///
/// The slot is owned by this instance; clones start with a copy of the content and evolve
/// independently from there.
///
/// # Example
///
/// ```
/// use hardware_units::{MemorySize, StorageUnit, Throughput};
/// use machine_profile::SolidStateStorage;
///
/// let mut ssd = SolidStateStorage::new(
///     "Example SSD",
///     MemorySize::whole(1, StorageUnit::TB),
///     "NVMe",
///     Throughput::new(
///         MemorySize::whole(3500, StorageUnit::MB),
///         MemorySize::whole(3000, StorageUnit::MB),
///     ),
/// );
///
/// assert_eq!(ssd.read().value(), None);
///
/// ssd.write("Test!");
/// assert_eq!(ssd.read().value(), Some("Test!"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SolidStateStorage {
    name: String,
    size: MemorySize,
    interface: String,
    speed: Throughput,
    written: Slot,
}

impl SolidStateStorage {
    /// Creates a drive description with an empty slot.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        size: MemorySize,
        interface: impl Into<String>,
        speed: Throughput,
    ) -> Self {
        Self {
            name: name.into(),
            size,
            interface: interface.into(),
            speed,
            written: Slot::empty(),
        }
    }

    /// Product name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Capacity.
    #[must_use]
    pub fn size(&self) -> MemorySize {
        self.size
    }

    /// Host interface, e.g. `SATA 3.0/2.0`.
    #[must_use]
    pub fn interface(&self) -> &str {
        &self.interface
    }

    /// Sequential read and write throughput.
    #[must_use]
    pub fn speed(&self) -> Throughput {
        self.speed
    }

    /// Stores data in the slot, replacing any previous content.
    pub fn write(&mut self, data: impl Into<String>) {
        self.written.write(data);
        trace!(drive = %self.name, "slot written");
    }

    /// The slot, empty until the first [`write()`][Self::write].
    #[must_use]
    pub fn read(&self) -> &Slot {
        &self.written
    }
}

impl Profile for SolidStateStorage {
    fn label(&self) -> &'static str {
        LABEL
    }

    fn field_names(&self) -> &'static [&'static str] {
        FIELD_NAMES
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        Some(match name {
            "ssd_size" => FieldValue::measurement(self.size),
            "ssd_name" => FieldValue::Text(self.name.clone()),
            "ssd_interface" => FieldValue::Text(self.interface.clone()),
            "ssd_speed" => FieldValue::measurement(self.speed),
            "ssd_written" => FieldValue::from(&self.written),
            _ => return None,
        })
    }

    fn behavior_names(&self) -> &'static [&'static str] {
        BEHAVIOR_NAMES
    }

    fn invoke(&mut self, behavior: &str, payload: Option<String>) -> Result<Outcome> {
        match behavior {
            "write" => {
                self.write(require_payload(behavior, payload)?);
                Ok(Outcome::Stored)
            }
            "read" => {
                reject_payload(behavior, payload.as_deref())?;
                Ok(Outcome::Content(self.read().value().map(str::to_string)))
            }
            _ => Err(Error::UnknownMember(behavior.to_string())),
        }
    }
}
