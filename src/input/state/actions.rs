use crate::draw::SurfaceError;
use crate::input::events::{Action, Command};
use crate::util;
use log::{info, warn};

use super::{InputState, StrokeState};

/// Accepted line width range in pixels.
const LINE_WIDTH_RANGE: std::ops::RangeInclusive<f64> = 1.0..=100.0;

impl InputState {
    /// Single entry point for everything the host forwards.
    ///
    /// Commands are processed to completion, one at a time, in the order they
    /// are passed in.
    pub fn dispatch(&mut self, command: impl Into<Command>) -> Result<(), SurfaceError> {
        match command.into() {
            Command::Event(event) => self.handle_event(event),
            Command::Action(action) => self.handle_action(action),
        }
    }

    /// Processes a control-panel action.
    ///
    /// An undo or redo that changes the surface, and every clear, abandons
    /// any stroke still in progress so its end event does not commit on top
    /// of the restored surface. An undo or redo with nothing to apply leaves
    /// the open stroke alone.
    pub fn handle_action(&mut self, action: Action) -> Result<(), SurfaceError> {
        match action {
            Action::SetColor { color } => match util::parse_color(&color) {
                Some(parsed) => {
                    self.current_color = parsed;
                    info!("Pen color set to {}", util::color_to_hex(&parsed));
                }
                None => warn!("Ignoring unrecognized color '{color}'"),
            },
            Action::SetLineWidth { width } => self.set_line_width(width),
            Action::Eraser => {
                self.current_color = self.background_color;
                info!("Eraser selected");
            }
            Action::ToggleTouch => {
                let enabled = self.policy.toggle_touch();
                info!("Touch input {}", if enabled { "enabled" } else { "disabled" });
            }
            Action::TogglePen => {
                let enabled = self.policy.toggle_pen();
                info!("Pen input {}", if enabled { "enabled" } else { "disabled" });
            }
            Action::Undo => {
                if self.history.undo(&mut self.surface)? {
                    self.state = StrokeState::Idle;
                    info!("Undo ({} steps left)", self.history.undo_len());
                }
            }
            Action::Redo => {
                if self.history.redo(&mut self.surface)? {
                    self.state = StrokeState::Idle;
                    info!("Redo ({} steps left)", self.history.redo_len());
                }
            }
            Action::Clear => {
                self.state = StrokeState::Idle;
                self.history.clear(&mut self.surface, self.clear_behavior)?;
                info!("Canvas cleared");
            }
            Action::Save => self.request_save(),
        }
        Ok(())
    }

    /// Sets the pen width, clamping to the accepted range.
    pub fn set_line_width(&mut self, width: f64) {
        if !width.is_finite() {
            warn!("Ignoring non-finite line width {width}");
            return;
        }
        let clamped = width.clamp(*LINE_WIDTH_RANGE.start(), *LINE_WIDTH_RANGE.end());
        if clamped != width {
            warn!("Line width {width:.1} out of range, using {clamped:.1}");
        }
        self.current_line_width = clamped;
    }
}
