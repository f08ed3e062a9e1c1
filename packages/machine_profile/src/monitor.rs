use hardware_units::{RefreshRate, Resolution, ScreenDiagonal};
use tracing::debug;

use crate::profile::reject_payload;
use crate::{Error, FieldValue, Notice, Outcome, Profile, Result};

pub(crate) const LABEL: &str = "monitor";

const FIELD_NAMES: &[&str] = &["monitor_refreshrate", "monitor_resolution", "monitor_size"];

const BEHAVIOR_NAMES: &[&str] = &["display"];

/// Static description of a display device.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Monitor {
    refresh_rate: RefreshRate,
    resolution: Resolution,
    size: ScreenDiagonal,
}

impl Monitor {
    /// Creates a monitor description.
    #[must_use]
    pub const fn new(
        refresh_rate: RefreshRate,
        resolution: Resolution,
        size: ScreenDiagonal,
    ) -> Self {
        Self {
            refresh_rate,
            resolution,
            size,
        }
    }

    /// How often the screen redraws.
    #[must_use]
    pub const fn refresh_rate(&self) -> RefreshRate {
        self.refresh_rate
    }

    /// Native pixel resolution.
    #[must_use]
    pub const fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Diagonal size.
    #[must_use]
    pub const fn size(&self) -> ScreenDiagonal {
        self.size
    }

    /// Shows a frame. Has no effect on state.
    #[must_use]
    pub fn display(&self) -> Notice {
        debug!(resolution = %self.resolution, "displaying");
        Notice::new(LABEL, "displaying stuff")
    }
}

impl Profile for Monitor {
    fn label(&self) -> &'static str {
        LABEL
    }

    fn field_names(&self) -> &'static [&'static str] {
        FIELD_NAMES
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "monitor_refreshrate" => Some(FieldValue::measurement(self.refresh_rate)),
            "monitor_resolution" => Some(FieldValue::measurement(self.resolution)),
            "monitor_size" => Some(FieldValue::measurement(self.size)),
            _ => None,
        }
    }

    fn behavior_names(&self) -> &'static [&'static str] {
        BEHAVIOR_NAMES
    }

    fn invoke(&mut self, behavior: &str, payload: Option<String>) -> Result<Outcome> {
        match behavior {
            "display" => {
                reject_payload(behavior, payload.as_deref())?;
                Ok(Outcome::Notice(self.display()))
            }
            _ => Err(Error::UnknownMember(behavior.to_string())),
        }
    }
}
