use crate::draw::SurfaceError;
use crate::input::events::{InputEvent, Phase};
use log::{debug, trace};

use super::{InputState, StrokeState};

impl InputState {
    /// Processes one pointer or touch event.
    ///
    /// # Behavior
    /// - Start (gate permits): anchors a new stroke at the mapped point; nothing is drawn yet
    /// - Move while drawing (gate permits): draws a segment from the last point and advances it
    /// - Move while drawing (gate denies): skipped; the stroke stays open
    /// - End while drawing: returns to Idle and commits the whole surface to history
    /// - End while idle: ignored
    pub fn handle_event(&mut self, event: InputEvent) -> Result<(), SurfaceError> {
        match event.phase() {
            Phase::Start => {
                self.on_stroke_start(event);
                Ok(())
            }
            Phase::Move => self.on_stroke_move(event),
            Phase::End => self.on_stroke_end(),
        }
    }

    fn on_stroke_start(&mut self, event: InputEvent) {
        if !self.policy.permits(event.source()) {
            debug!("Ignoring stroke start from disabled {:?}", event.source());
            return;
        }
        let Some((x, y)) = event.position() else {
            return;
        };

        let (last_x, last_y) = self.mapper.map(x, y);
        self.state = StrokeState::Drawing { last_x, last_y };
        trace!("Stroke started at ({last_x:.1}, {last_y:.1})");
    }

    fn on_stroke_move(&mut self, event: InputEvent) -> Result<(), SurfaceError> {
        // Checked on every move so disabling a device stops an open stroke at once.
        if !self.policy.permits(event.source()) {
            return Ok(());
        }
        let StrokeState::Drawing { last_x, last_y } = self.state else {
            return Ok(());
        };
        let Some((x, y)) = event.position() else {
            return Ok(());
        };

        let (new_x, new_y) = self.mapper.map(x, y);
        self.surface.stroke_segment(
            (last_x, last_y),
            (new_x, new_y),
            self.current_color,
            self.current_line_width,
        )?;
        self.state = StrokeState::Drawing {
            last_x: new_x,
            last_y: new_y,
        };
        Ok(())
    }

    fn on_stroke_end(&mut self) -> Result<(), SurfaceError> {
        if !self.is_drawing() {
            return Ok(());
        }
        self.state = StrokeState::Idle;
        self.history.commit(&self.surface)?;
        debug!("Stroke committed ({} undo steps)", self.history.undo_len());
        Ok(())
    }
}
