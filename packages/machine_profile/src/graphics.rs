use hardware_units::{CacheSet, FabricationNode, GraphicsClock, GraphicsMemoryStandard, Power};
use tracing::debug;

use crate::profile::reject_payload;
use crate::{Error, FieldValue, Notice, Outcome, Profile, Result};

pub(crate) const LABEL: &str = "graphics card";

const FIELD_NAMES: &[&str] = &[
    "gpu_speed",
    "gpu_technology",
    "gpu_tdp",
    "gpu_cache",
    "gpu_name",
    "gpu_overclockable",
    "gpu_memory",
];

const BEHAVIOR_NAMES: &[&str] = &["render"];

/// Static description of a graphics card.
///
/// Construct via [`GraphicsCard::builder()`].
#[derive(Clone, Debug, PartialEq)]
pub struct GraphicsCard {
    name: String,
    clock: GraphicsClock,
    technology: FabricationNode,
    tdp: Power,
    caches: CacheSet,
    overclockable: bool,
    memory: GraphicsMemoryStandard,
}

impl GraphicsCard {
    /// Starts building a graphics card description.
    #[must_use]
    pub fn builder() -> GraphicsCardBuilder {
        GraphicsCardBuilder::new()
    }

    /// Product name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base clock of the graphics processor.
    #[must_use]
    pub fn clock(&self) -> GraphicsClock {
        self.clock
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

    /// Whether the card can be overclocked.
    #[must_use]
    pub fn is_overclockable(&self) -> bool {
        self.overclockable
    }

    /// Dedicated video memory.
    #[must_use]
    pub fn memory(&self) -> GraphicsMemoryStandard {
        self.memory
    }

    /// Renders a frame. Has no effect on state.
    #[must_use]
    pub fn render(&self) -> Notice {
        debug!(graphics_card = %self.name, "rendering");
        Notice::new(LABEL, "rendering stuff")
    }
}

impl Profile for GraphicsCard {
    fn label(&self) -> &'static str {
        LABEL
    }

    fn field_names(&self) -> &'static [&'static str] {
        FIELD_NAMES
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        Some(match name {
            "gpu_speed" => FieldValue::measurement(self.clock),
            "gpu_technology" => FieldValue::measurement(self.technology),
            "gpu_tdp" => FieldValue::measurement(self.tdp),
            "gpu_cache" => FieldValue::measurement(self.caches),
            "gpu_name" => FieldValue::Text(self.name.clone()),
            "gpu_overclockable" => FieldValue::Flag(self.overclockable),
            "gpu_memory" => FieldValue::measurement(self.memory),
            _ => return None,
        })
    }

    fn behavior_names(&self) -> &'static [&'static str] {
        BEHAVIOR_NAMES
    }

    fn invoke(&mut self, behavior: &str, payload: Option<String>) -> Result<Outcome> {
        match behavior {
            "render" => {
                reject_payload(behavior, payload.as_deref())?;
                Ok(Outcome::Notice(self.render()))
            }
            _ => Err(Error::UnknownMember(behavior.to_string())),
        }
    }
}

/// Builder for [`GraphicsCard`].
///
/// Name, clock, technology, TDP and memory are required. The card has no caches and is not
/// overclockable unless configured otherwise.
#[derive(Clone, Debug, Default)]
pub struct GraphicsCardBuilder {
    name: Option<String>,
    clock: Option<GraphicsClock>,
    technology: Option<FabricationNode>,
    tdp: Option<Power>,
    caches: CacheSet,
    overclockable: bool,
    memory: Option<GraphicsMemoryStandard>,
}

impl GraphicsCardBuilder {
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

    /// Sets the base clock.
    #[must_use]
    pub fn clock(mut self, clock: GraphicsClock) -> Self {
        self.clock = Some(clock);
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

    /// Sets whether the card can be overclocked.
    #[must_use]
    pub fn overclockable(mut self, overclockable: bool) -> Self {
        self.overclockable = overclockable;
        self
    }

    /// Sets the dedicated video memory.
    #[must_use]
    pub fn memory(mut self, memory: GraphicsMemoryStandard) -> Self {
        self.memory = Some(memory);
        self
    }

    /// Builds the graphics card description.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] naming the first required field that was not set.
    pub fn build(self) -> Result<GraphicsCard> {
        Ok(GraphicsCard {
            name: required(self.name, "name")?,
            clock: required(self.clock, "clock")?,
            technology: required(self.technology, "technology")?,
            tdp: required(self.tdp, "tdp")?,
            caches: self.caches,
            overclockable: self.overclockable,
            memory: required(self.memory, "memory")?,
        })
    }
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or(Error::MissingField {
        profile: LABEL,
        field,
    })
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use hardware_units::{GraphicsMemoryGeneration, MemorySize, StorageUnit};

    use super::*;

    fn memory() -> GraphicsMemoryStandard {
        GraphicsMemoryStandard::new(
            GraphicsMemoryGeneration::Gddr5,
            MemorySize::whole(2, StorageUnit::GB),
            128,
            MemorySize::whole(112, StorageUnit::GB),
        )
    }

    fn card() -> GraphicsCard {
        GraphicsCard::builder()
            .name("Test Card")
            .clock(GraphicsClock::mhz(1000))
            .technology(FabricationNode::nanometers(28))
            .tdp(Power::watts(75))
            .memory(memory())
            .build()
            .unwrap()
    }

    #[test]
    fn defaults_for_optional_fields() {
        let card = card();

        assert!(!card.is_overclockable());
        assert!(card.caches().is_empty());
        assert_eq!(card.field("gpu_cache"), Some(FieldValue::measurement("")));
    }

    #[test]
    fn missing_required_field() {
        let result = GraphicsCard::builder()
            .name("Incomplete")
            .clock(GraphicsClock::mhz(1000))
            .build();

        assert!(matches!(
            result,
            Err(Error::MissingField {
                profile: "graphics card",
                field: "technology"
            })
        ));
    }

    #[test]
    fn every_declared_field_resolves() {
        let card = card();

        for name in card.field_names() {
            assert!(card.field(name).is_some(), "field {name} did not resolve");
        }

        assert_eq!(card.field("cpu_speed"), None);
        assert_eq!(
            card.field("gpu_memory").unwrap().to_string(),
            "GDDR5 | 2GB VRAM | 128bit memory bus | 112GB/s memory bandwidth"
        );
    }

    #[test]
    fn render_by_name() {
        let mut card = card();

        let outcome = card.invoke("render", None).unwrap();
        assert_eq!(outcome, Outcome::Notice(Notice::new(LABEL, "rendering stuff")));

        assert!(matches!(
            card.invoke("render", Some("frame".to_string())),
            Err(Error::PayloadNotAccepted(_))
        ));
        assert!(matches!(
            card.invoke("calculate", None),
            Err(Error::UnknownMember(_))
        ));
    }
}
