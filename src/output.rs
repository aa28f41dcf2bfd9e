//! PNG output.
//!
//! Encoding is delegated to the `image` crate; this module only adapts its
//! errors.

use image::RgbaImage;
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

use crate::error::{GeoheatError, Result};

/// Encode the heatmap as PNG bytes
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, image::ImageFormat::Png)
        .map_err(|e| GeoheatError::ImageGeneration {
            message: format!("Failed to encode PNG: {}", e),
        })?;

    let bytes = buffer.into_inner();
    debug!(bytes = bytes.len(), "Encoded PNG");
    Ok(bytes)
}

/// Write the heatmap to `path` as PNG
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let bytes = encode_png(image)?;
    std::fs::write(path, bytes)?;
    debug!(path = %path.display(), "Wrote PNG");
    Ok(())
}
