//! Raster drawing surface backed by a Cairo image surface.

use super::color::Color;
use super::snapshot::Snapshot;
use thiserror::Error;

/// Errors raised while touching the surface's pixel buffer.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Surface buffer unavailable: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("Invalid surface size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    #[error("Snapshot is {found_width}x{found_height}, surface is {width}x{height}")]
    SizeMismatch {
        width: i32,
        height: i32,
        found_width: i32,
        found_height: i32,
    },
}

/// The full drawable raster area.
///
/// Starts fully transparent ("blank"). Strokes are drawn straight into the
/// pixel buffer; no vector representation is kept.
pub struct Surface {
    image: cairo::ImageSurface,
}

impl Surface {
    /// Allocates a blank ARGB32 surface.
    ///
    /// Failing here means there is no drawing context at all, which callers
    /// treat as fatal.
    pub fn new(width: i32, height: i32) -> Result<Self, SurfaceError> {
        if width <= 0 || height <= 0 {
            return Err(SurfaceError::InvalidSize { width, height });
        }
        let image = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        Ok(Self { image })
    }

    pub fn width(&self) -> i32 {
        self.image.width()
    }

    pub fn height(&self) -> i32 {
        self.image.height()
    }

    /// Underlying Cairo surface, for compositing.
    pub fn image(&self) -> &cairo::ImageSurface {
        &self.image
    }

    /// Resets every pixel to transparent.
    pub fn clear(&mut self) -> Result<(), SurfaceError> {
        let ctx = cairo::Context::new(&self.image)?;
        ctx.set_operator(cairo::Operator::Clear);
        ctx.paint()?;
        Ok(())
    }

    /// Draws one straight segment of a stroke.
    ///
    /// Coordinates are canvas pixels; anything outside the surface is clipped
    /// by Cairo.
    pub fn stroke_segment(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        color: Color,
        line_width: f64,
    ) -> Result<(), SurfaceError> {
        let ctx = cairo::Context::new(&self.image)?;
        color.apply(&ctx);
        ctx.set_line_width(line_width);
        ctx.set_line_cap(cairo::LineCap::Round);
        ctx.set_line_join(cairo::LineJoin::Round);
        ctx.move_to(from.0, from.1);
        ctx.line_to(to.0, to.1);
        ctx.stroke()?;
        Ok(())
    }

    /// Copies the current pixels into a new [`Snapshot`].
    pub fn snapshot(&self) -> Result<Snapshot, SurfaceError> {
        let mut copy = Vec::new();
        self.image.with_data(|data| copy.extend_from_slice(data))?;
        Ok(Snapshot::new(
            self.width(),
            self.height(),
            self.image.stride(),
            copy.into_boxed_slice(),
        ))
    }

    /// Overwrites the pixels with the contents of `snapshot`.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), SurfaceError> {
        if snapshot.width() != self.width()
            || snapshot.height() != self.height()
            || snapshot.stride() != self.image.stride()
        {
            return Err(SurfaceError::SizeMismatch {
                width: self.width(),
                height: self.height(),
                found_width: snapshot.width(),
                found_height: snapshot.height(),
            });
        }
        let mut data = self.image.data()?;
        data.copy_from_slice(snapshot.data());
        Ok(())
    }

    /// Returns true if the surface holds exactly the pixels of `snapshot`.
    pub fn matches(&self, snapshot: &Snapshot) -> Result<bool, SurfaceError> {
        let mut equal = false;
        self.image
            .with_data(|data| equal = data == snapshot.data())?;
        Ok(equal)
    }

    /// Returns true if no pixel has been painted.
    pub fn is_blank(&self) -> Result<bool, SurfaceError> {
        let mut blank = false;
        self.image
            .with_data(|data| blank = data.iter().all(|byte| *byte == 0))?;
        Ok(blank)
    }

    /// Reads one pixel as premultiplied `[a, r, g, b]`, or `None` when out of range.
    pub fn pixel(&self, x: i32, y: i32) -> Result<Option<[u8; 4]>, SurfaceError> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return Ok(None);
        }
        let offset = (y * self.image.stride() + x * 4) as usize;
        let mut pixel = None;
        self.image.with_data(|data| {
            if let Some(bytes) = data.get(offset..offset + 4) {
                let value = u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
                pixel = Some([
                    (value >> 24) as u8,
                    (value >> 16) as u8,
                    (value >> 8) as u8,
                    value as u8,
                ]);
            }
        })?;
        Ok(pixel)
    }
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}
