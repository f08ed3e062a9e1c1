use std::fmt;

use itertools::Itertools;

use crate::{
    CollisionPolicy, Error, FieldValue, GraphicsCard, Monitor, Namespace, Notice, Outcome,
    Processor, Profile, RandomAccessMemory, Result, Slot, SolidStateStorage, graphics, memory,
    monitor, processor, storage,
};

/// Labels of the five profiles of a machine, in composition order.
pub const COMPOSITION_ORDER: [&str; 5] = [
    processor::LABEL,
    graphics::LABEL,
    monitor::LABEL,
    storage::LABEL,
    memory::LABEL,
];

/// One machine composed of a processor, graphics card, monitor, solid-state storage and
/// random-access memory.
///
/// Every field and behavior of every profile is reachable from the machine under its original
/// name, either through the typed delegating methods or by name via [`field()`][Self::field]
/// and [`invoke()`][Self::invoke]. Names are resolved by the machine's [`Namespace`], composed
/// once at construction in [`COMPOSITION_ORDER`].
///
/// The machine owns its profiles. The only state that changes after construction is the
/// content of the two storage slots, and each machine (including each clone) has its own.
///
/// # Example
///
/// ```
/// use machine_profile::catalog;
///
/// let mut machine = catalog::reference_machine()?;
///
/// assert_eq!(machine.calculate().to_string(), "Calculating stuff");
/// assert_eq!(machine.read().to_string(), "None");
///
/// machine.write("Test!");
/// assert_eq!(machine.read().value(), Some("Test!"));
///
/// assert_eq!(machine.field("ssd_written")?.to_string(), "Test!");
/// # Ok::<(), machine_profile::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Machine {
    processor: Processor,
    graphics_card: GraphicsCard,
    monitor: Monitor,
    solid_state_storage: SolidStateStorage,
    random_access_memory: RandomAccessMemory,
    namespace: Namespace,
}

impl Machine {
    /// Starts assembling a machine.
    #[must_use]
    pub fn builder() -> MachineBuilder {
        MachineBuilder::new()
    }

    /// The processor profile.
    #[cfg_attr(test, mutants::skip)] // Trivial getter.
    #[must_use]
    pub fn processor(&self) -> &Processor {
        &self.processor
    }

    /// The graphics card profile.
    #[cfg_attr(test, mutants::skip)] // Trivial getter.
    #[must_use]
    pub fn graphics_card(&self) -> &GraphicsCard {
        &self.graphics_card
    }

    /// The monitor profile.
    #[cfg_attr(test, mutants::skip)] // Trivial getter.
    #[must_use]
    pub fn monitor(&self) -> &Monitor {
        &self.monitor
    }

    /// The solid-state storage profile.
    #[cfg_attr(test, mutants::skip)] // Trivial getter.
    #[must_use]
    pub fn solid_state_storage(&self) -> &SolidStateStorage {
        &self.solid_state_storage
    }

    /// The random-access memory profile.
    #[cfg_attr(test, mutants::skip)] // Trivial getter.
    #[must_use]
    pub fn random_access_memory(&self) -> &RandomAccessMemory {
        &self.random_access_memory
    }

    /// The resolution table mapping every name to its owning profile.
    #[must_use]
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Runs a computation on the processor.
    #[cfg_attr(test, mutants::skip)] // Trivial delegation.
    #[must_use]
    pub fn calculate(&self) -> Notice {
        self.processor.calculate()
    }

    /// Renders a frame on the graphics card.
    #[cfg_attr(test, mutants::skip)] // Trivial delegation.
    #[must_use]
    pub fn render(&self) -> Notice {
        self.graphics_card.render()
    }

    /// Shows a frame on the monitor.
    #[cfg_attr(test, mutants::skip)] // Trivial delegation.
    #[must_use]
    pub fn display(&self) -> Notice {
        self.monitor.display()
    }

    /// Stores data in the solid-state storage slot.
    pub fn write(&mut self, data: impl Into<String>) {
        self.solid_state_storage.write(data);
    }

    /// The solid-state storage slot.
    #[must_use]
    pub fn read(&self) -> &Slot {
        self.solid_state_storage.read()
    }

    /// Stores data in the memory slot.
    pub fn write_memory(&mut self, data: impl Into<String>) {
        self.random_access_memory.write_memory(data);
    }

    /// The memory slot.
    #[must_use]
    pub fn read_memory(&self) -> &Slot {
        self.random_access_memory.read_memory()
    }

    /// Reads a field by name from whichever profile owns the name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownMember`] if no profile defines the name and
    /// [`Error::WrongMemberKind`] if the name is a behavior.
    pub fn field(&self, name: &str) -> Result<FieldValue> {
        self.namespace.field(&self.members(), name)
    }

    /// Invokes a behavior by name on whichever profile owns the name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownMember`] if no profile defines the name,
    /// [`Error::WrongMemberKind`] if the name is a field, and [`Error::PayloadRequired`] or
    /// [`Error::PayloadNotAccepted`] if the payload does not suit the behavior.
    pub fn invoke(&mut self, name: &str, payload: Option<String>) -> Result<Outcome> {
        let mut members: [&mut dyn Profile; 5] = [
            &mut self.processor,
            &mut self.graphics_card,
            &mut self.monitor,
            &mut self.solid_state_storage,
            &mut self.random_access_memory,
        ];

        self.namespace.invoke(&mut members, name, payload)
    }

    fn members(&self) -> [&dyn Profile; 5] {
        [
            &self.processor,
            &self.graphics_card,
            &self.monitor,
            &self.solid_state_storage,
            &self.random_access_memory,
        ]
    }
}

/// Renders a spec sheet: each profile label followed by its fields, one per line. Multi-line
/// values such as cache sets are folded into a single comma-separated line.
impl fmt::Display for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for profile in self.members() {
            writeln!(f, "{}", profile.label())?;

            for name in profile.field_names() {
                let value = profile
                    .field(name)
                    .map(|value| value.to_string().lines().join(", "))
                    .unwrap_or_default();

                if value.is_empty() {
                    writeln!(f, "  {name}:")?;
                } else {
                    writeln!(f, "  {name}: {value}")?;
                }
            }
        }

        Ok(())
    }
}

/// Assembles a [`Machine`] from its five profiles.
///
/// All five profiles are required. The machine is composed under [`CollisionPolicy::Reject`],
/// so every name reachable from the machine belongs to exactly one profile. To compose profiles
/// whose names may collide, use [`Namespace::compose()`] directly.
///
/// The order in which the builder methods are called has no effect on composition order.
#[derive(Clone, Debug, Default)]
pub struct MachineBuilder {
    processor: Option<Processor>,
    graphics_card: Option<GraphicsCard>,
    monitor: Option<Monitor>,
    solid_state_storage: Option<SolidStateStorage>,
    random_access_memory: Option<RandomAccessMemory>,
}

impl MachineBuilder {
    /// Creates a builder without any profiles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the processor profile.
    #[must_use]
    pub fn processor(mut self, processor: Processor) -> Self {
        self.processor = Some(processor);
        self
    }

    /// Sets the graphics card profile.
    #[must_use]
    pub fn graphics_card(mut self, graphics_card: GraphicsCard) -> Self {
        self.graphics_card = Some(graphics_card);
        self
    }

    /// Sets the monitor profile.
    #[must_use]
    pub fn monitor(mut self, monitor: Monitor) -> Self {
        self.monitor = Some(monitor);
        self
    }

    /// Sets the solid-state storage profile.
    #[must_use]
    pub fn solid_state_storage(mut self, solid_state_storage: SolidStateStorage) -> Self {
        self.solid_state_storage = Some(solid_state_storage);
        self
    }

    /// Sets the random-access memory profile.
    #[must_use]
    pub fn random_access_memory(mut self, random_access_memory: RandomAccessMemory) -> Self {
        self.random_access_memory = Some(random_access_memory);
        self
    }

    /// Composes the machine.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingProfile`] if any profile was not supplied and
    /// [`Error::NameCollision`] if two profiles define the same name.
    pub fn build(self) -> Result<Machine> {
        let processor = self
            .processor
            .ok_or(Error::MissingProfile(processor::LABEL))?;
        let graphics_card = self
            .graphics_card
            .ok_or(Error::MissingProfile(graphics::LABEL))?;
        let monitor = self.monitor.ok_or(Error::MissingProfile(monitor::LABEL))?;
        let solid_state_storage = self
            .solid_state_storage
            .ok_or(Error::MissingProfile(storage::LABEL))?;
        let random_access_memory = self
            .random_access_memory
            .ok_or(Error::MissingProfile(memory::LABEL))?;

        let namespace = Namespace::compose(
            &[
                &processor,
                &graphics_card,
                &monitor,
                &solid_state_storage,
                &random_access_memory,
            ],
            CollisionPolicy::Reject,
        )?;

        Ok(Machine {
            processor,
            graphics_card,
            monitor,
            solid_state_storage,
            random_access_memory,
            namespace,
        })
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;
    use crate::{MemberKind, catalog};

    assert_impl_all!(Machine: Send, Sync, Clone);

    #[test]
    fn composition_order_matches_member_order() {
        let machine = catalog::reference_machine().unwrap();

        let labels = machine
            .members()
            .iter()
            .map(|profile| profile.label())
            .collect::<Vec<_>>();

        assert_eq!(labels, COMPOSITION_ORDER);
    }

    #[test]
    fn reference_profiles_do_not_collide() {
        let machine = catalog::reference_machine().unwrap();

        assert!(machine.namespace().shadowed().is_empty());

        let expected_names = machine
            .members()
            .iter()
            .map(|profile| profile.field_names().len() + profile.behavior_names().len())
            .sum::<usize>();
        assert_eq!(machine.namespace().len(), expected_names);
    }

    #[test]
    fn slot_behaviors_resolve_to_distinct_profiles() {
        let machine = catalog::reference_machine().unwrap();
        let namespace = machine.namespace();

        assert_eq!(namespace.resolve("read").unwrap().owner(), storage::LABEL);
        assert_eq!(
            namespace.resolve("read_memory").unwrap().owner(),
            memory::LABEL
        );
        assert_eq!(
            namespace.resolve("write_memory").unwrap().kind(),
            MemberKind::Behavior
        );
    }

    #[test]
    fn missing_profile_is_reported() {
        let result = Machine::builder()
            .processor(catalog::ryzen_3_1200().unwrap())
            .graphics_card(catalog::geforce_8500_gt().unwrap())
            .monitor(catalog::full_hd_monitor().unwrap())
            .random_access_memory(catalog::memory_8gb().unwrap())
            .build();

        assert!(matches!(
            result,
            Err(Error::MissingProfile("solid-state storage"))
        ));
    }

    #[test]
    fn invoke_by_name_reaches_slots() {
        let mut machine = catalog::reference_machine().unwrap();

        machine
            .invoke("write_memory", Some("by name".to_string()))
            .unwrap();

        assert_eq!(machine.read_memory().value(), Some("by name"));
        assert_eq!(machine.read().value(), None);
        assert_eq!(
            machine.invoke("read_memory", None).unwrap(),
            Outcome::Content(Some("by name".to_string()))
        );
    }

    #[test]
    fn field_by_name_rejects_behaviors() {
        let machine = catalog::reference_machine().unwrap();

        assert!(matches!(
            machine.field("calculate"),
            Err(Error::WrongMemberKind { .. })
        ));
        assert!(matches!(
            machine.field("hdd_size"),
            Err(Error::UnknownMember(_))
        ));
    }

    #[test]
    fn machine_composes_by_rejecting_collisions() {
        let machine = catalog::reference_machine().unwrap();

        let rejecting = Namespace::compose(&machine.members(), CollisionPolicy::Reject).unwrap();

        assert_eq!(machine.namespace(), &rejecting);
        assert_eq!(machine.namespace().bindings().count(), machine.namespace().len());
    }

    #[test]
    fn spec_sheet_folds_multi_line_values() {
        let machine = catalog::reference_machine().unwrap();
        let sheet = machine.to_string();

        assert!(sheet.starts_with("processor\n  cpu_speed: 3.1 - 3.4 GHz\n"));
        assert!(sheet.contains("  cpu_cache: L1 - 384.0KB, L2 - 2.0MB, L3 - 8.0MB\n"));
        assert!(sheet.contains("  gpu_cache: L2 - 32.0KB\n"));
        assert!(sheet.contains("  cpu_gpu: None\n"));
        assert!(sheet.ends_with("random-access memory\n  ram_size: 8.0GB\n  ram_written: None\n"));
    }
}
