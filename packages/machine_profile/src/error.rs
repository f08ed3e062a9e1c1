use thiserror::Error;

use crate::MemberKind;

/// Errors that can occur when assembling profiles or resolving names on a machine.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Two profiles define the same field or behavior name and the composition does not
    /// allow one to shadow the other.
    #[error("'{name}' is defined by both the {first} and the {second} profile")]
    NameCollision {
        /// The colliding name.
        name: String,

        /// The profile listed first in composition order.
        first: &'static str,

        /// The profile listed later, whose definition would have been shadowed.
        second: &'static str,
    },

    /// No profile in the composition defines a field or behavior with this name.
    #[error("no field or behavior named '{0}'")]
    UnknownMember(String),

    /// The name resolves to a different kind of member than the caller asked for.
    #[error("'{name}' is a {actual}, not a {expected}")]
    WrongMemberKind {
        /// The resolved name.
        name: String,

        /// What the caller tried to use the name as.
        expected: MemberKind,

        /// What the name actually resolves to.
        actual: MemberKind,
    },

    /// A behavior that stores data was invoked without data to store.
    #[error("behavior '{0}' requires a payload")]
    PayloadRequired(String),

    /// A behavior that takes no input was invoked with a payload.
    #[error("behavior '{0}' does not accept a payload")]
    PayloadNotAccepted(String),

    /// A profile builder was consumed before a required field was set.
    #[error("the {profile} profile is missing required field '{field}'")]
    MissingField {
        /// The profile being built.
        profile: &'static str,

        /// The field that was never set.
        field: &'static str,
    },

    /// A machine builder was consumed before one of the five profiles was supplied.
    #[error("the machine is missing its {0} profile")]
    MissingProfile(&'static str),

    /// A measurement value could not be constructed.
    #[error(transparent)]
    Units(#[from] hardware_units::Error),
}

/// A specialized `Result` type for profile and machine operations, returning the crate's
/// [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;
