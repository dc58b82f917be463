use std::path::Path;

use ag_core::error::CoreError;
use ag_core::frame::FrameBuffer;
use anyhow::{Context, Result};
use image::ImageError;

/// Charge une image depuis le disque (PNG, JPEG, BMP, GIF).
///
/// # Errors
/// Returns [`CoreError::FileNotFound`] if `path` does not exist and
/// [`CoreError::UnsupportedFormat`] if it cannot be decoded; I/O errors are
/// passed through. All carry the path as context.
///
/// # Example
/// ```no_run
/// use ag_source::image::load_image;
/// use std::path::Path;
/// let frame = load_image(Path::new("photo.jpg")).unwrap();
/// ```
pub fn load_image(path: &Path) -> Result<FrameBuffer> {
    if !path.exists() {
        return Err(CoreError::FileNotFound {
            path: path.display().to_string(),
        }
        .into());
    }

    let img = image::open(path)
        .map_err(|e| match e {
            ImageError::IoError(io) => anyhow::Error::new(io),
            other => CoreError::UnsupportedFormat {
                format: other.to_string(),
            }
            .into(),
        })
        .with_context(|| format!("Impossible de charger {}", path.display()))?;

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    log::info!("Image chargée : {} ({width} x {height})", path.display());
    Ok(FrameBuffer {
        data: rgba.into_raw(),
        width,
        height,
    })
}
