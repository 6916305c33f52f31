//! Snapshot-based undo/redo history.
//!
//! Every completed stroke pushes a full copy of the surface onto the undo
//! stack. Undo moves the newest snapshot to the redo stack and restores the
//! one beneath it (or blanks the surface when nothing is left); redo moves it
//! back. Any fresh commit invalidates the redo stack.

use crate::draw::{Snapshot, Surface, SurfaceError};
use log::debug;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How a clear interacts with the history stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ClearBehavior {
    /// Drop both stacks; the clear itself cannot be undone.
    #[default]
    Discard,
    /// Record the blank surface as a new undo step and keep redo untouched.
    CommitBlank,
}

/// Availability of the undo/redo controls, derived from the stack sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistoryControls {
    pub can_undo: bool,
    pub can_redo: bool,
}

/// Undo and redo stacks of surface snapshots (most recent last).
#[derive(Debug, Default)]
pub struct History {
    undo: Vec<Snapshot>,
    redo: Vec<Snapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Snapshots on the undo stack, oldest first.
    pub fn undo_stack(&self) -> &[Snapshot] {
        &self.undo
    }

    /// Snapshots on the redo stack, oldest first.
    pub fn redo_stack(&self) -> &[Snapshot] {
        &self.redo
    }

    pub fn controls(&self) -> HistoryControls {
        HistoryControls {
            can_undo: !self.undo.is_empty(),
            can_redo: !self.redo.is_empty(),
        }
    }

    /// Records the current surface as a new undo step and drops redo history.
    pub fn commit(&mut self, surface: &Surface) -> Result<(), SurfaceError> {
        let snapshot = surface.snapshot()?;
        self.undo.push(snapshot);
        self.redo.clear();
        debug!("History commit: undo={}, redo=0", self.undo.len());
        Ok(())
    }

    /// Steps back one snapshot.
    ///
    /// Returns `Ok(false)` without touching anything when there is nothing to undo.
    pub fn undo(&mut self, surface: &mut Surface) -> Result<bool, SurfaceError> {
        // Restore first so a failed restore leaves both stacks untouched.
        match self.undo.len() {
            0 => return Ok(false),
            1 => surface.clear()?,
            len => surface.restore(&self.undo[len - 2])?,
        }
        if let Some(undone) = self.undo.pop() {
            self.redo.push(undone);
        }

        debug!(
            "History undo: undo={}, redo={}",
            self.undo.len(),
            self.redo.len()
        );
        Ok(true)
    }

    /// Re-applies the most recently undone snapshot.
    ///
    /// Returns `Ok(false)` without touching anything when there is nothing to redo.
    pub fn redo(&mut self, surface: &mut Surface) -> Result<bool, SurfaceError> {
        let Some(snapshot) = self.redo.last() else {
            return Ok(false);
        };
        surface.restore(snapshot)?;
        if let Some(snapshot) = self.redo.pop() {
            self.undo.push(snapshot);
        }

        debug!(
            "History redo: undo={}, redo={}",
            self.undo.len(),
            self.redo.len()
        );
        Ok(true)
    }

    /// Blanks the surface and updates the stacks according to `behavior`.
    pub fn clear(
        &mut self,
        surface: &mut Surface,
        behavior: ClearBehavior,
    ) -> Result<(), SurfaceError> {
        surface.clear()?;
        match behavior {
            ClearBehavior::Discard => {
                self.undo.clear();
                self.redo.clear();
            }
            ClearBehavior::CommitBlank => {
                self.undo.push(surface.snapshot()?);
            }
        }
        debug!(
            "History clear ({:?}): undo={}, redo={}",
            behavior,
            self.undo.len(),
            self.redo.len()
        );
        Ok(())
    }
}
