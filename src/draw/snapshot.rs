//! Immutable pixel copies of the drawing surface.

/// Full-resolution copy of a [`Surface`](super::Surface) at one instant.
///
/// Snapshots are created by [`Surface::snapshot`](super::Surface::snapshot) and
/// are never mutated afterwards. They intentionally do not implement `Clone`:
/// history moves them between the undo and redo stacks.
#[derive(Debug, PartialEq, Eq)]
pub struct Snapshot {
    width: i32,
    height: i32,
    stride: i32,
    data: Box<[u8]>,
}

impl Snapshot {
    pub(crate) fn new(width: i32, height: i32, stride: i32, data: Box<[u8]>) -> Self {
        Self {
            width,
            height,
            stride,
            data,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Bytes per row, including Cairo's row padding.
    pub fn stride(&self) -> i32 {
        self.stride
    }

    /// Raw premultiplied ARGB32 bytes in Cairo's native layout.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns true if every pixel is fully transparent.
    pub fn is_blank(&self) -> bool {
        self.data.iter().all(|byte| *byte == 0)
    }
}
