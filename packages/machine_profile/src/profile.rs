use std::fmt::Debug;

use crate::{Error, FieldValue, Outcome, Result};

/// A named bundle of fields and behaviors describing one device.
///
/// This is the name-based surface through which a [`Namespace`][crate::Namespace] composes
/// profiles. The five built-in profiles implement it, and so can custom profiles that should
/// take part in a composition.
///
/// Names returned by [`field_names()`][Self::field_names] and
/// [`behavior_names()`][Self::behavior_names] must be accepted by [`field()`][Self::field] and
/// [`invoke()`][Self::invoke] respectively.
///
/// # Example
///
/// ```
/// use machine_profile::{Error, FieldValue, Outcome, Profile, Result};
///
/// #[derive(Debug)]
/// struct Keyboard;
///
/// impl Profile for Keyboard {
///     fn label(&self) -> &'static str {
///         "keyboard"
///     }
///
///     fn field_names(&self) -> &'static [&'static str] {
///         &["keyboard_layout"]
///     }
///
///     fn field(&self, name: &str) -> Option<FieldValue> {
///         (name == "keyboard_layout").then(|| FieldValue::Text("ISO".to_string()))
///     }
///
///     fn behavior_names(&self) -> &'static [&'static str] {
///         &[]
///     }
///
///     fn invoke(&mut self, behavior: &str, _payload: Option<String>) -> Result<Outcome> {
///         Err(Error::UnknownMember(behavior.to_string()))
///     }
/// }
///
/// let keyboard = Keyboard;
/// assert_eq!(keyboard.field("keyboard_layout").unwrap().to_string(), "ISO");
/// ```
pub trait Profile: Debug {
    /// Human-readable label of the profile, used in precedence tables and error messages.
    fn label(&self) -> &'static str;

    /// Names of all fields, in declaration order.
    fn field_names(&self) -> &'static [&'static str];

    /// Current value of the named field, or `None` if this profile has no such field.
    fn field(&self, name: &str) -> Option<FieldValue>;

    /// Names of all behaviors, in declaration order.
    fn behavior_names(&self) -> &'static [&'static str];

    /// Invokes the named behavior.
    ///
    /// Behaviors that store data take the data as `payload`; all others take `None`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownMember`] if this profile has no such behavior, and
    /// [`Error::PayloadRequired`] or [`Error::PayloadNotAccepted`] if the payload does not
    /// match what the behavior expects.
    fn invoke(&mut self, behavior: &str, payload: Option<String>) -> Result<Outcome>;
}

pub(crate) fn reject_payload(behavior: &str, payload: Option<&str>) -> Result<()> {
    match payload {
        None => Ok(()),
        Some(_) => Err(Error::PayloadNotAccepted(behavior.to_string())),
    }
}

pub(crate) fn require_payload(behavior: &str, payload: Option<String>) -> Result<String> {
    payload.ok_or_else(|| Error::PayloadRequired(behavior.to_string()))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn payload_checks() {
        assert!(reject_payload("render", None).is_ok());
        assert!(matches!(
            reject_payload("render", Some("x")),
            Err(Error::PayloadNotAccepted(name)) if name == "render"
        ));

        assert_eq!(require_payload("write", Some("x".to_string())).unwrap(), "x");
        assert!(matches!(
            require_payload("write", None),
            Err(Error::PayloadRequired(name)) if name == "write"
        ));
    }
}
