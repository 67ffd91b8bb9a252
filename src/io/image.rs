//! Exemplar decoding and canvas export

use crate::io::error::{Result, SynthesisError};
use image::RgbImage;
use std::path::Path;

/// Load an exemplar image and convert it to 8-bit RGB
///
/// Any format the `image` crate can decode is accepted; alpha is discarded.
///
/// # Errors
///
/// Returns [`SynthesisError::ImageLoad`] if the file cannot be opened or
/// decoded
pub fn load_source<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| SynthesisError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    Ok(img.to_rgb8())
}

/// Save a synthesized canvas, format chosen from the file extension
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn export_canvas<P: AsRef<Path>>(canvas: &RgbImage, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| SynthesisError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    canvas
        .save(output_path)
        .map_err(|e| SynthesisError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
