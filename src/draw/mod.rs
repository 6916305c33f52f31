//! Raster drawing primitives (Cairo-based).
//!
//! This module defines the core drawing types:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Surface`]: the mutable pixel buffer strokes are painted into
//! - [`Snapshot`]: immutable copies of the surface used by history

pub mod color;
pub mod snapshot;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use snapshot::Snapshot;
pub use surface::{Surface, SurfaceError};

// Re-export color constants for public API
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
