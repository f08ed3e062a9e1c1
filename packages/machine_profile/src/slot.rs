use std::fmt;

use crate::FieldValue;

/// A single mutable storage location owned by a storage-like profile.
///
/// A slot starts out empty. Writing replaces whatever was there before. An empty slot renders
/// as `None`; a written slot renders as its content.
///
/// # Example
///
/// ```
/// use machine_profile::Slot;
///
/// let mut slot = Slot::empty();
/// assert_eq!(slot.value(), None);
/// assert_eq!(slot.to_string(), "None");
///
/// slot.write("Test!");
/// assert_eq!(slot.value(), Some("Test!"));
/// assert_eq!(slot.to_string(), "Test!");
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Slot {
    content: Option<String>,
}

impl Slot {
    /// Creates a slot that has never been written.
    #[must_use]
    pub const fn empty() -> Self {
        Self { content: None }
    }

    /// Replaces the content of the slot.
    pub fn write(&mut self, data: impl Into<String>) {
        self.content = Some(data.into());
    }

    /// The current content, or `None` if the slot was never written.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Whether the slot has been written at least once.
    #[must_use]
    pub fn is_written(&self) -> bool {
        self.content.is_some()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value().unwrap_or("None"))
    }
}

impl From<&Slot> for FieldValue {
    fn from(slot: &Slot) -> Self {
        Self::from_optional_text(slot.value())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let slot = Slot::empty();

        assert!(!slot.is_written());
        assert_eq!(slot.value(), None);
        assert_eq!(slot, Slot::default());
        assert!(FieldValue::from(&slot).is_absent());
    }

    #[test]
    fn write_replaces_content() {
        let mut slot = Slot::empty();

        slot.write("first");
        slot.write(String::from("second"));

        assert!(slot.is_written());
        assert_eq!(slot.value(), Some("second"));
        assert_eq!(
            FieldValue::from(&slot),
            FieldValue::Text("second".to_string())
        );
    }

    #[test]
    fn empty_string_is_still_written() {
        let mut slot = Slot::empty();
        slot.write("");

        assert!(slot.is_written());
        assert_eq!(slot.value(), Some(""));
        assert_eq!(slot.to_string(), "");
    }

    #[test]
    fn clones_are_independent() {
        let mut original = Slot::empty();
        let copy = original.clone();

        original.write("data");

        assert_eq!(copy.value(), None);
    }
}
