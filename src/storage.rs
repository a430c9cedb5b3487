// SPDX-License-Identifier: MPL-2.0

//! Storage utilities for exported photos

use crate::errors::AppError;
use chrono::Local;
use image::RgbaImage;
use std::path::PathBuf;
use tracing::info;

/// Default directory for exported photos (~/Pictures/darkroom)
pub fn default_export_dir() -> PathBuf {
    dirs::picture_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("darkroom")
}

/// Write the rendered image to disk
///
/// Without an explicit path the image lands in the default export directory
/// under a timestamped name. Encoding runs in a blocking task.
pub async fn export_image(image: RgbaImage, output: Option<PathBuf>) -> Result<PathBuf, AppError> {
    let path = output.unwrap_or_else(|| {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        default_export_dir().join(format!("FILTERED_{}.png", timestamp))
    });

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let save_path = path.clone();
    tokio::task::spawn_blocking(move || image.save(&save_path))
        .await
        .map_err(|e| AppError::Storage(format!("export task failed: {}", e)))?
        .map_err(|e| AppError::Storage(e.to_string()))?;

    info!(path = %path.display(), "Exported image");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_default_export_dir_ends_with_app_name() {
        assert!(default_export_dir().ends_with("darkroom"));
    }

    #[tokio::test]
    async fn test_export_to_explicit_path() {
        let path = std::env::temp_dir().join("darkroom_storage_export_test.png");
        let image = RgbaImage::from_fn(2, 2, |_, _| Rgba([1, 2, 3, 255]));

        let written = export_image(image, Some(path.clone())).await.unwrap();
        assert_eq!(written, path);
        assert!(path.exists());

        let _ = std::fs::remove_file(&path);
    }
}
