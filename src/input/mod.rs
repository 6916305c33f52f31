//! Input handling and stroke state machine.
//!
//! This module translates host pointer/touch events and control actions into
//! drawing operations. It maps display coordinates to canvas pixels, gates
//! events by device, and runs the stroke state machine that feeds history.

pub mod events;
pub mod mapper;
pub mod policy;
pub mod state;

// Re-export commonly used types at module level
pub use events::{Action, Command, InputEvent, InputSource, Phase};
pub use mapper::CoordinateMapper;
pub use policy::InputPolicy;
pub use state::{InputState, StrokeState};
