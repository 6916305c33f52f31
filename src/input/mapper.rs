//! Display-to-canvas coordinate mapping.

use log::warn;

/// Converts display (CSS) coordinates into canvas pixel coordinates.
///
/// The scale factor is `backing_width / displayed_width`, computed once at
/// construction. It is not re-derived when the display size changes; hosts
/// that resize must build a new mapper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    offset_x: f64,
    offset_y: f64,
    scale: f64,
}

impl Default for CoordinateMapper {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            scale: 1.0,
        }
    }
}

impl CoordinateMapper {
    /// Builds a mapper for a canvas whose backing store is `backing_width`
    /// pixels wide but rendered `displayed_width` units wide at the given
    /// on-screen offset.
    pub fn new(backing_width: f64, displayed_width: f64, offset_x: f64, offset_y: f64) -> Self {
        let scale = backing_width / displayed_width;
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            warn!(
                "Cannot derive scale from backing width {backing_width} and displayed width {displayed_width}; using 1.0"
            );
            1.0
        };

        Self {
            offset_x,
            offset_y,
            scale,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Maps a display-space position to canvas pixels.
    pub fn map(&self, x: f64, y: f64) -> (f64, f64) {
        (
            (x - self.offset_x) * self.scale,
            (y - self.offset_y) * self.scale,
        )
    }
}
