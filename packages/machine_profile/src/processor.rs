use std::sync::{Arc, Weak};

use hardware_units::{
    CacheSet, CoreCount, FabricationNode, Power, ProcessorClock, ProcessorMemoryStandard,
};
use tracing::debug;

use crate::profile::reject_payload;
use crate::{Error, FieldValue, GraphicsCard, Notice, Outcome, Profile, Result};

pub(crate) const LABEL: &str = "processor";

const FIELD_NAMES: &[&str] = &[
    "cpu_speed",
    "cpu_cores",
    "cpu_technology",
    "cpu_tdp",
    "cpu_cache",
    "cpu_name",
    "cpu_overclockable",
    "cpu_socket",
    "cpu_memory",
    "cpu_gpu",
];

const BEHAVIOR_NAMES: &[&str] = &["calculate"];

/// Static description of a processor.
///
/// A processor may reference an attached (on-package) graphics unit. The reference does not
/// own the graphics card: it is held weakly and the processor reports no attached graphics once
/// the card itself has been dropped.
///
/// Construct via [`Processor::builder()`].
///
/// # Example
///
/// ```
/// use hardware_units::{
///     CoreCount, FabricationNode, Power, ProcessorClock, ProcessorMemoryStandard,
///     SystemMemoryGeneration,
/// };
/// use machine_profile::Processor;
///
/// let processor = Processor::builder()
///     .name("Example CPU")
///     .clock(ProcessorClock::ghz(3.0, 4.0)?)
///     .cores(CoreCount::new(8))
///     .technology(FabricationNode::nanometers(7))
///     .tdp(Power::watts(65))
///     .socket("AM4")
///     .memory(ProcessorMemoryStandard::new(SystemMemoryGeneration::Ddr4, 2, 3200))
///     .build()?;
///
/// assert_eq!(processor.calculate().to_string(), "Calculating stuff");
/// assert!(processor.integrated_graphics().is_none());
/// # Ok::<(), machine_profile::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Processor {
    name: String,
    clock: ProcessorClock,
    cores: CoreCount,
    technology: FabricationNode,
    tdp: Power,
    caches: CacheSet,
    overclockable: bool,
    socket: String,
    memory: ProcessorMemoryStandard,
    integrated_graphics: Option<Weak<GraphicsCard>>,
}

impl Processor {
    /// Starts building a processor description.
    #[must_use]
    pub fn builder() -> ProcessorBuilder {
        ProcessorBuilder::new()
    }

    /// Product name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base and boost clock.
    #[must_use]
    pub fn clock(&self) -> ProcessorClock {
        self.clock
    }

    /// Number of physical cores.
    #[must_use]
    pub fn cores(&self) -> CoreCount {
        self.cores
    }

    /// Fabrication process node.
    #[must_use]
    pub fn technology(&self) -> FabricationNode {
        self.technology
    }

    /// Thermal design power.
    #[must_use]
    pub fn tdp(&self) -> Power {
        self.tdp
    }

    /// On-chip caches.
    #[must_use]
    pub fn caches(&self) -> &CacheSet {
        &self.caches
    }

    /// Whether the processor can be overclocked.
    #[must_use]
    pub fn is_overclockable(&self) -> bool {
        self.overclockable
    }

    /// Socket designation, e.g. `AM4`.
    #[must_use]
    pub fn socket(&self) -> &str {
        &self.socket
    }

    /// The system memory supported by the memory controller.
    #[must_use]
    pub fn memory(&self) -> ProcessorMemoryStandard {
        self.memory
    }

    /// The attached graphics unit, if one was configured and is still alive.
    #[must_use]
    pub fn integrated_graphics(&self) -> Option<Arc<GraphicsCard>> {
        self.integrated_graphics.as_ref().and_then(Weak::upgrade)
    }

    /// Runs a computation. Has no effect on state.
    #[must_use]
    pub fn calculate(&self) -> Notice {
        debug!(processor = %self.name, "calculating");
        Notice::new(LABEL, "Calculating stuff")
    }
}

impl Profile for Processor {
    fn label(&self) -> &'static str {
        LABEL
    }

    fn field_names(&self) -> &'static [&'static str] {
        FIELD_NAMES
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        Some(match name {
            "cpu_speed" => FieldValue::measurement(self.clock),
            "cpu_cores" => FieldValue::measurement(self.cores),
            "cpu_technology" => FieldValue::measurement(self.technology),
            "cpu_tdp" => FieldValue::measurement(self.tdp),
            "cpu_cache" => FieldValue::measurement(self.caches),
            "cpu_name" => FieldValue::Text(self.name.clone()),
            "cpu_overclockable" => FieldValue::Flag(self.overclockable),
            "cpu_socket" => FieldValue::Text(self.socket.clone()),
            "cpu_memory" => FieldValue::measurement(self.memory),
            "cpu_gpu" => self
                .integrated_graphics()
                .map_or(FieldValue::Absent, |graphics| {
                    FieldValue::Text(graphics.name().to_string())
                }),
            _ => return None,
        })
    }

    fn behavior_names(&self) -> &'static [&'static str] {
        BEHAVIOR_NAMES
    }

    fn invoke(&mut self, behavior: &str, payload: Option<String>) -> Result<Outcome> {
        match behavior {
            "calculate" => {
                reject_payload(behavior, payload.as_deref())?;
                Ok(Outcome::Notice(self.calculate()))
            }
            _ => Err(Error::UnknownMember(behavior.to_string())),
        }
    }
}

/// Builder for [`Processor`].
///
/// Name, clock, cores, technology, TDP, socket and memory are required. The processor has no
/// caches, is not overclockable and has no attached graphics unless configured otherwise.
#[derive(Clone, Debug, Default)]
pub struct ProcessorBuilder {
    name: Option<String>,
    clock: Option<ProcessorClock>,
    cores: Option<CoreCount>,
    technology: Option<FabricationNode>,
    tdp: Option<Power>,
    caches: CacheSet,
    overclockable: bool,
    socket: Option<String>,
    memory: Option<ProcessorMemoryStandard>,
    integrated_graphics: Option<Weak<GraphicsCard>>,
}

impl ProcessorBuilder {
    /// Creates a builder with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the product name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the base and boost clock.
    #[must_use]
    pub fn clock(mut self, clock: ProcessorClock) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Sets the number of physical cores.
    #[must_use]
    pub fn cores(mut self, cores: CoreCount) -> Self {
        self.cores = Some(cores);
        self
    }

    /// Sets the fabrication process node.
    #[must_use]
    pub fn technology(mut self, technology: FabricationNode) -> Self {
        self.technology = Some(technology);
        self
    }

    /// Sets the thermal design power.
    #[must_use]
    pub fn tdp(mut self, tdp: Power) -> Self {
        self.tdp = Some(tdp);
        self
    }

    /// Sets the on-chip caches.
    #[must_use]
    pub fn caches(mut self, caches: CacheSet) -> Self {
        self.caches = caches;
        self
    }

    /// Sets whether the processor can be overclocked.
    #[must_use]
    pub fn overclockable(mut self, overclockable: bool) -> Self {
        self.overclockable = overclockable;
        self
    }

    /// Sets the socket designation.
    #[must_use]
    pub fn socket(mut self, socket: impl Into<String>) -> Self {
        self.socket = Some(socket.into());
        self
    }

    /// Sets the supported system memory.
    #[must_use]
    pub fn memory(mut self, memory: ProcessorMemoryStandard) -> Self {
        self.memory = Some(memory);
        self
    }

    /// References an attached graphics unit without taking ownership of it.
    #[must_use]
    pub fn integrated_graphics(mut self, graphics: &Arc<GraphicsCard>) -> Self {
        self.integrated_graphics = Some(Arc::downgrade(graphics));
        self
    }

    /// Builds the processor description.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] naming the first required field that was not set.
    pub fn build(self) -> Result<Processor> {
        Ok(Processor {
            name: required(self.name, "name")?,
            clock: required(self.clock, "clock")?,
            cores: required(self.cores, "cores")?,
            technology: required(self.technology, "technology")?,
            tdp: required(self.tdp, "tdp")?,
            caches: self.caches,
            overclockable: self.overclockable,
            socket: required(self.socket, "socket")?,
            memory: required(self.memory, "memory")?,
            integrated_graphics: self.integrated_graphics,
        })
    }
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or(Error::MissingField {
        profile: LABEL,
        field,
    })
}
