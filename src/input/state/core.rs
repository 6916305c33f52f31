//! Stroke state machine and application state.

use crate::config::{Config, ExportConfig};
use crate::draw::{Color, Surface, SurfaceError, color::WHITE};
use crate::export::{self, ExportError};
use crate::history::{ClearBehavior, History, HistoryControls};
use crate::input::{mapper::CoordinateMapper, policy::InputPolicy};
use std::path::PathBuf;

/// Current stroke capture state.
///
/// A stroke starts on pointer-down/touch-start and ends on
/// pointer-up/pointer-leave/touch-end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrokeState {
    /// Not drawing - waiting for a start event
    Idle,
    /// Stroke in progress (button or finger held down)
    Drawing {
        /// Last committed X position in canvas pixels
        last_x: f64,
        /// Last committed Y position in canvas pixels
        last_y: f64,
    },
}

/// All drawing session state, owned by the event-processing context.
///
/// Holds the surface, its undo/redo history, the input policy and the active
/// pen. Every input event and UI action goes through
/// [`dispatch`](InputState::dispatch), one at a time, in arrival order.
pub struct InputState {
    /// Raster canvas strokes are painted into
    pub(crate) surface: Surface,
    /// Undo/redo snapshot stacks
    pub(crate) history: History,
    /// Which devices may draw
    pub policy: InputPolicy,
    /// Display to canvas coordinate mapping (fixed until replaced)
    pub(crate) mapper: CoordinateMapper,
    /// Current stroke capture state
    pub state: StrokeState,
    /// Current pen color (set by the color picker or the eraser)
    pub current_color: Color,
    /// Current line width in pixels
    pub current_line_width: f64,
    /// Paper color used by the eraser and the export background
    pub background_color: Color,
    /// How clear interacts with history
    pub clear_behavior: ClearBehavior,
    /// Where saved pictures go
    pub export_config: ExportConfig,
    /// Set by the save action; taken by the front end
    pending_save: bool,
}

impl InputState {
    /// Builds the session from configuration.
    ///
    /// # Errors
    /// Fails only if the Cairo surface cannot be allocated, which leaves
    /// nothing to draw on.
    pub fn from_config(config: &Config) -> Result<Self, SurfaceError> {
        let canvas = &config.canvas;
        let surface = Surface::new(canvas.width, canvas.height)?;
        let mapper = CoordinateMapper::new(
            canvas.width as f64,
            canvas.display_width,
            canvas.offset_x,
            canvas.offset_y,
        );

        log::info!(
            "Canvas {}x{} (scale {:.3})",
            canvas.width,
            canvas.height,
            mapper.scale()
        );

        Ok(Self {
            surface,
            history: History::new(),
            policy: InputPolicy::new(config.input.touch_enabled, config.input.pen_enabled),
            mapper,
            state: StrokeState::Idle,
            current_color: config.drawing.default_color.to_color(),
            current_line_width: config.drawing.default_line_width,
            background_color: config.drawing.background_color.to_color_or(WHITE),
            clear_behavior: config.history.clear_behavior,
            export_config: config.export.clone(),
            pending_save: false,
        })
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Undo/redo control availability; recomputed from the stacks on every call.
    pub fn controls(&self) -> HistoryControls {
        self.history.controls()
    }

    pub fn mapper(&self) -> CoordinateMapper {
        self.mapper
    }

    /// Replaces the coordinate mapper, e.g. after the host resized the canvas.
    ///
    /// The scale is never re-derived automatically.
    pub fn set_mapper(&mut self, mapper: CoordinateMapper) {
        log::debug!("Coordinate scale changed to {:.3}", mapper.scale());
        self.mapper = mapper;
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, StrokeState::Drawing { .. })
    }

    /// Takes and clears a pending save request.
    pub fn take_pending_save(&mut self) -> bool {
        std::mem::take(&mut self.pending_save)
    }

    pub(super) fn request_save(&mut self) {
        self.pending_save = true;
    }

    /// Encodes the surface over the background color as PNG.
    pub fn export_png(&self) -> Result<Vec<u8>, ExportError> {
        export::render_png(&self.surface, self.background_color)
    }

    /// Exports and writes the picture to the configured location.
    pub fn save_picture(&self) -> Result<PathBuf, ExportError> {
        let bytes = self.export_png()?;
        export::save_png(&bytes, &self.export_config)
    }
}
