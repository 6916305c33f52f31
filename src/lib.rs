//! Library exports for the inkpad drawing core.
//!
//! A freehand raster canvas: stroke capture with per-device input gating,
//! snapshot-based undo/redo, and opaque PNG export. Hosts feed events and
//! control actions to [`InputState::dispatch`](input::InputState::dispatch).

pub mod config;
pub mod draw;
pub mod export;
pub mod history;
pub mod input;
pub mod replay;
pub mod util;

pub use config::Config;
pub use input::InputState;
