use std::fmt;

use derive_more::derive::Display;

/// The value of a profile field, as returned by name-based lookups.
///
/// Measurements are carried in their canonical rendering. A field without a value (such as an
/// unwritten storage slot or a missing attached graphics unit) is [`FieldValue::Absent`] and
/// renders as `None`.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
#[non_exhaustive]
pub enum FieldValue {
    /// Free-form text such as a product name or socket designation.
    #[display("{_0}")]
    Text(String),

    /// A yes/no property such as whether the part can be overclocked.
    #[display("{_0}")]
    Flag(bool),

    /// The canonical rendering of a measurement value object.
    #[display("{_0}")]
    Measurement(String),

    /// The field currently has no value.
    #[display("None")]
    Absent,
}

impl FieldValue {
    /// Captures the canonical rendering of a measurement.
    pub fn measurement(value: impl fmt::Display) -> Self {
        Self::Measurement(value.to_string())
    }

    /// Wraps optional text, mapping `None` to [`FieldValue::Absent`].
    #[must_use]
    pub fn from_optional_text(value: Option<&str>) -> Self {
        value.map_or(Self::Absent, |text| Self::Text(text.to_string()))
    }

    /// Whether the field has no value.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// The notification produced by a behavior operation such as [`Processor::calculate()`][1].
///
/// Behaviors have no effect on state; the notice is their only observable output.
/// It renders as the notification message.
///
/// [1]: crate::Processor::calculate
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[display("{message}")]
pub struct Notice {
    source: &'static str,
    message: &'static str,
}

impl Notice {
    pub(crate) const fn new(source: &'static str, message: &'static str) -> Self {
        Self { source, message }
    }

    /// Label of the profile that produced the notice.
    #[cfg_attr(test, mutants::skip)] // Trivial getter.
    #[must_use]
    pub const fn source(&self) -> &'static str {
        self.source
    }

    /// The notification text.
    #[cfg_attr(test, mutants::skip)] // Trivial getter.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.message
    }
}

/// What a behavior invoked by name produced.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Outcome {
    /// A descriptive notification from an operation without side effects.
    Notice(Notice),

    /// The current content of a storage slot, `None` if never written.
    Content(Option<String>),

    /// A payload was stored in a storage slot.
    Stored,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use hardware_units::Power;

    use super::*;

    #[test]
    fn field_value_rendering() {
        assert_eq!(FieldValue::Text("AM4".to_string()).to_string(), "AM4");
        assert_eq!(FieldValue::Flag(true).to_string(), "true");
        assert_eq!(FieldValue::measurement(Power::watts(65)).to_string(), "65W");
        assert_eq!(FieldValue::Absent.to_string(), "None");
    }

    #[test]
    fn optional_text() {
        assert!(FieldValue::from_optional_text(None).is_absent());
        assert_eq!(
            FieldValue::from_optional_text(Some("Test!")),
            FieldValue::Text("Test!".to_string())
        );
    }

    #[test]
    fn notice_renders_message() {
        let notice = Notice::new("processor", "Calculating stuff");

        assert_eq!(notice.to_string(), "Calculating stuff");
        assert_eq!(notice.source(), "processor");
    }
}
