//! Generic input event and UI action types.
//!
//! Hosts translate their native pointer/touch callbacks and control widgets
//! into these values and feed them, in arrival order, to
//! [`InputState::dispatch`](super::InputState::dispatch).

use serde::{Deserialize, Serialize};

/// Device class an event originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSource {
    /// Mouse or trackpad (always permitted)
    #[default]
    Mouse,
    /// Stylus / capacitive pen
    Pen,
    /// Finger touch
    Touch,
}

/// Raw input event, positions in display coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum InputEvent {
    PointerDown {
        #[serde(default)]
        device: InputSource,
        x: f64,
        y: f64,
    },
    PointerMove {
        #[serde(default)]
        device: InputSource,
        x: f64,
        y: f64,
    },
    PointerUp {
        #[serde(default)]
        device: InputSource,
    },
    /// Pointer left the canvas; ends the stroke like a release.
    PointerLeave {
        #[serde(default)]
        device: InputSource,
    },
    /// First touch point went down.
    TouchStart { x: f64, y: f64 },
    /// First touch point moved.
    TouchMove { x: f64, y: f64 },
    TouchEnd,
}

/// Stroke phase carried by an [`InputEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Start,
    Move,
    End,
}

impl InputEvent {
    /// Device class used for gating.
    pub fn source(&self) -> InputSource {
        match self {
            InputEvent::PointerDown { device, .. }
            | InputEvent::PointerMove { device, .. }
            | InputEvent::PointerUp { device }
            | InputEvent::PointerLeave { device } => *device,
            InputEvent::TouchStart { .. } | InputEvent::TouchMove { .. } | InputEvent::TouchEnd => {
                InputSource::Touch
            }
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            InputEvent::PointerDown { .. } | InputEvent::TouchStart { .. } => Phase::Start,
            InputEvent::PointerMove { .. } | InputEvent::TouchMove { .. } => Phase::Move,
            InputEvent::PointerUp { .. }
            | InputEvent::PointerLeave { .. }
            | InputEvent::TouchEnd => Phase::End,
        }
    }

    /// Display-space position, if the event carries one.
    pub fn position(&self) -> Option<(f64, f64)> {
        match self {
            InputEvent::PointerDown { x, y, .. }
            | InputEvent::PointerMove { x, y, .. }
            | InputEvent::TouchStart { x, y }
            | InputEvent::TouchMove { x, y } => Some((*x, *y)),
            _ => None,
        }
    }
}

/// Control-panel actions (buttons, pickers, toggles).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Color picker / swatch: `#rrggbb` or a named color
    SetColor { color: String },
    /// Line-width slider
    SetLineWidth { width: f64 },
    /// Paint with the background color
    Eraser,
    ToggleTouch,
    TogglePen,
    Undo,
    Redo,
    Clear,
    /// Export the picture
    Save,
}

/// One unit of work for the dispatcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Command {
    Event(InputEvent),
    Action(Action),
}

impl From<InputEvent> for Command {
    fn from(event: InputEvent) -> Self {
        Command::Event(event)
    }
}

impl From<Action> for Command {
    fn from(action: Action) -> Self {
        Command::Action(action)
    }
}
