mod actions;
mod core;
mod stroke;
#[cfg(test)]
mod tests;

pub use self::core::{InputState, StrokeState};
