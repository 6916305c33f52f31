//! Per-device input gating.

use super::events::InputSource;

/// Which input devices may currently draw.
///
/// Mouse input is always permitted; touch and pen can be switched off
/// independently (e.g. to rest a palm on a tablet while drawing with a pen).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputPolicy {
    pub touch_enabled: bool,
    pub pen_enabled: bool,
}

impl Default for InputPolicy {
    fn default() -> Self {
        Self {
            touch_enabled: true,
            pen_enabled: true,
        }
    }
}

impl InputPolicy {
    pub fn new(touch_enabled: bool, pen_enabled: bool) -> Self {
        Self {
            touch_enabled,
            pen_enabled,
        }
    }

    /// Returns whether events from `source` may start or extend a stroke.
    pub fn permits(&self, source: InputSource) -> bool {
        match source {
            InputSource::Mouse => true,
            InputSource::Touch => self.touch_enabled,
            InputSource::Pen => self.pen_enabled,
        }
    }

    /// Flips touch permission and returns the new value.
    pub fn toggle_touch(&mut self) -> bool {
        self.touch_enabled = !self.touch_enabled;
        self.touch_enabled
    }

    /// Flips pen permission and returns the new value.
    pub fn toggle_pen(&mut self) -> bool {
        self.pen_enabled = !self.pen_enabled;
        self.pen_enabled
    }
}
