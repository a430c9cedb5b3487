// SPDX-License-Identifier: MPL-2.0

//! Source photo loading
//!
//! Reads image files asynchronously and decodes them off the async runtime,
//! producing the RGBA bitmaps the editor works on.

use crate::errors::LoadError;
use image::RgbaImage;
use std::path::Path;
use tracing::debug;

/// Load and decode a source photo
///
/// The file is read with async I/O and decoded in a blocking task.
pub async fn load_image(path: impl AsRef<Path>) -> Result<RgbaImage, LoadError> {
    let path = path.as_ref().to_path_buf();
    let bytes = tokio::fs::read(&path).await.map_err(LoadError::from)?;
    debug!(path = ?path, len = bytes.len(), "Read source image");

    tokio::task::spawn_blocking(move || {
        let img = image::load_from_memory(&bytes).map_err(|e| LoadError::Decode(e.to_string()))?;
        Ok(img.to_rgba8())
    })
    .await
    .map_err(|e| LoadError::Decode(format!("decode task failed: {}", e)))?
}
