//! Picture export: flatten the drawing onto an opaque background and save it.

use crate::config::ExportConfig;
use crate::draw::{Color, Surface, SurfaceError};
use crate::util;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while exporting the picture.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Surface error: {0}")]
    Surface(#[from] SurfaceError),

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] cairo::IoError),

    #[error("Failed to save picture: {0}")]
    Save(#[from] std::io::Error),
}

/// Composites `surface` over `background` and encodes the result as PNG.
///
/// Areas never drawn on are transparent in the surface; in the output they
/// show the background, so the exported image is fully opaque as long as
/// `background` is.
pub fn render_png(surface: &Surface, background: Color) -> Result<Vec<u8>, ExportError> {
    let flattened = flatten(surface, background)?;
    let mut bytes = Vec::new();
    flattened.write_to_png(&mut bytes)?;
    log::debug!(
        "Encoded {}x{} picture ({} bytes)",
        surface.width(),
        surface.height(),
        bytes.len()
    );
    Ok(bytes)
}

/// Returns a new image surface holding `surface` painted over `background`.
pub fn flatten(surface: &Surface, background: Color) -> Result<cairo::ImageSurface, ExportError> {
    let target =
        cairo::ImageSurface::create(cairo::Format::ARgb32, surface.width(), surface.height())?;
    {
        let ctx = cairo::Context::new(&target)?;
        background.apply(&ctx);
        ctx.paint()?;
        ctx.set_source_surface(surface.image(), 0.0, 0.0)?;
        ctx.paint()?;
    }
    target.flush();
    Ok(target)
}

/// Ensure the export directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    let directory = util::expand_tilde(directory);
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(&directory)?;
    }
    Ok(directory)
}

/// Writes encoded picture bytes to `<directory>/<filename>`, replacing any
/// previous export.
pub fn save_png(image_data: &[u8], config: &ExportConfig) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(&config.directory)?;
    let file_path = directory.join(&config.filename);

    log::info!(
        "Saving picture to: {} ({} bytes)",
        file_path.display(),
        image_data.len()
    );
    fs::write(&file_path, image_data)?;

    Ok(file_path)
}
