use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;

use derive_more::derive::Display;
use tracing::{debug, trace, warn};

use crate::{Error, FieldValue, Outcome, Profile, Result};

/// What happens when two profiles in a composition define the same name.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum CollisionPolicy {
    /// Any collision fails the composition with [`Error::NameCollision`].
    #[default]
    Reject,

    /// The profile listed first in composition order wins. Later definitions of the same name
    /// are recorded as [shadowed][Namespace::shadowed] and become unreachable by name.
    FirstWins,
}

/// Whether a name refers to data or to an operation.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[expect(
    clippy::exhaustive_enums,
    reason = "profiles consist of fields and behaviors, nothing else"
)]
pub enum MemberKind {
    /// A field that can be read by name.
    #[display("field")]
    Field,

    /// A behavior that can be invoked by name.
    #[display("behavior")]
    Behavior,
}

/// The profile a name resolves to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Binding {
    name: &'static str,
    kind: MemberKind,
    position: usize,
    owner: &'static str,
}

impl Binding {
    /// The bound name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the name is a field or a behavior.
    #[must_use]
    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    /// Index of the owning profile in composition order.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Label of the owning profile.
    #[must_use]
    pub fn owner(&self) -> &'static str {
        self.owner
    }
}

/// A definition that lost a name collision under [`CollisionPolicy::FirstWins`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Shadowed {
    name: &'static str,
    kind: MemberKind,
    winner: &'static str,
    loser: &'static str,
}

impl Shadowed {
    /// The colliding name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The kind of the definition that was shadowed.
    #[must_use]
    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    /// Label of the profile whose definition the name resolves to.
    #[must_use]
    pub fn winner(&self) -> &'static str {
        self.winner
    }

    /// Label of the profile whose definition is unreachable by name.
    #[must_use]
    pub fn loser(&self) -> &'static str {
        self.loser
    }
}

/// The resolution table of a composition: every field and behavior name of every profile,
/// bound to exactly one owning profile.
///
/// Profiles are visited in the order given. Each name is bound to the first profile that
/// defines it; what happens to any later definition of the same name is decided by the
/// [`CollisionPolicy`]. Fields and behaviors share one namespace, so a field in one profile
/// also collides with a behavior of the same name in another.
///
/// The namespace stores positions, not profiles. Lookups take the same profile list, in the
/// same order, that the namespace was composed from.
///
/// # Example
///
/// ```
/// use machine_profile::{CollisionPolicy, Namespace, Profile, catalog};
///
/// let processor = catalog::ryzen_3_1200()?;
/// let monitor = catalog::full_hd_monitor()?;
/// let profiles: [&dyn Profile; 2] = [&processor, &monitor];
///
/// let namespace = Namespace::compose(&profiles, CollisionPolicy::Reject)?;
///
/// assert_eq!(namespace.resolve("display").unwrap().owner(), "monitor");
/// assert_eq!(
///     namespace.field(&profiles, "cpu_cores")?.to_string(),
///     "4 cores"
/// );
/// # Ok::<(), machine_profile::Error>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Namespace {
    // Sorted by name, which is also the order of the precedence table.
    bindings: BTreeMap<&'static str, Binding>,

    // In the order the collisions were encountered.
    shadowed: Vec<Shadowed>,
}

impl Namespace {
    /// Binds the names of all given profiles, in order.
    ///
    /// # Errors
    ///
    /// Under [`CollisionPolicy::Reject`], returns [`Error::NameCollision`] for the first name
    /// that is defined more than once.
    pub fn compose(profiles: &[&dyn Profile], policy: CollisionPolicy) -> Result<Self> {
        let mut namespace = Self::default();

        for (position, profile) in profiles.iter().enumerate() {
            let fields = profile
                .field_names()
                .iter()
                .map(|name| (*name, MemberKind::Field));
            let behaviors = profile
                .behavior_names()
                .iter()
                .map(|name| (*name, MemberKind::Behavior));

            for (name, kind) in fields.chain(behaviors) {
                namespace.bind(name, kind, position, profile.label(), policy)?;
            }
        }

        debug!(
            profiles = profiles.len(),
            names = namespace.bindings.len(),
            shadowed = namespace.shadowed.len(),
            "composed namespace"
        );

        Ok(namespace)
    }

    fn bind(
        &mut self,
        name: &'static str,
        kind: MemberKind,
        position: usize,
        owner: &'static str,
        policy: CollisionPolicy,
    ) -> Result<()> {
        match self.bindings.entry(name) {
            Entry::Vacant(entry) => {
                trace!(name, %kind, owner, "bound name");

                entry.insert(Binding {
                    name,
                    kind,
                    position,
                    owner,
                });
            }
            Entry::Occupied(entry) => {
                let winner = entry.get().owner;

                match policy {
                    CollisionPolicy::Reject => {
                        warn!(name, first = winner, second = owner, "rejected name collision");

                        return Err(Error::NameCollision {
                            name: name.to_string(),
                            first: winner,
                            second: owner,
                        });
                    }
                    CollisionPolicy::FirstWins => {
                        debug!(name, winner, loser = owner, "name shadowed");

                        self.shadowed.push(Shadowed {
                            name,
                            kind,
                            winner,
                            loser: owner,
                        });
                    }
                }
            }
        }

        Ok(())
    }

    /// The binding for a name, if any profile defines it.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    /// The precedence table: every bound name with its owning profile, sorted by name.
    pub fn bindings(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.values()
    }

    /// Definitions that lost a collision, in the order they were encountered.
    ///
    /// Always empty for a namespace composed under [`CollisionPolicy::Reject`].
    #[must_use]
    pub fn shadowed(&self) -> &[Shadowed] {
        &self.shadowed
    }

    /// Number of bound names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no names are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Reads a field by name from whichever profile the name resolves to.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownMember`] if the name is not bound (or `profiles` does not match
    /// the list the namespace was composed from) and [`Error::WrongMemberKind`] if the name
    /// is a behavior.
    pub fn field(&self, profiles: &[&dyn Profile], name: &str) -> Result<FieldValue> {
        let binding = self.resolve_as(name, MemberKind::Field)?;

        profiles
            .get(binding.position)
            .and_then(|profile| profile.field(name))
            .ok_or_else(|| Error::UnknownMember(name.to_string()))
    }

    /// Invokes a behavior by name on whichever profile the name resolves to.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownMember`] if the name is not bound (or `profiles` does not match
    /// the list the namespace was composed from), [`Error::WrongMemberKind`] if the name is a
    /// field, and any error of the behavior itself.
    pub fn invoke(
        &self,
        profiles: &mut [&mut dyn Profile],
        name: &str,
        payload: Option<String>,
    ) -> Result<Outcome> {
        let binding = self.resolve_as(name, MemberKind::Behavior)?;

        let profile = profiles
            .get_mut(binding.position)
            .ok_or_else(|| Error::UnknownMember(name.to_string()))?;

        profile.invoke(name, payload)
    }

    fn resolve_as(&self, name: &str, expected: MemberKind) -> Result<&Binding> {
        let binding = self
            .resolve(name)
            .ok_or_else(|| Error::UnknownMember(name.to_string()))?;

        if binding.kind != expected {
            return Err(Error::WrongMemberKind {
                name: name.to_string(),
                expected,
                actual: binding.kind,
            });
        }

        Ok(binding)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for binding in self.bindings() {
            writeln!(f, "{} ({}) -> {}", binding.name, binding.kind, binding.owner)?;
        }

        for shadowed in &self.shadowed {
            writeln!(
                f,
                "{} ({}) of {} is shadowed by {}",
                shadowed.name, shadowed.kind, shadowed.loser, shadowed.winner
            )?;
        }

        Ok(())
    }
}
