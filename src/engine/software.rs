// SPDX-License-Identifier: GPL-3.0-only

//! Software render engine
//!
//! CPU implementation of the built-in filter kinds over RGBA bitmaps.
//! Separable kernels (blur, unsharp mask) delegate to `image::imageops`;
//! the per-pixel effects are plain loops.

use super::{FilterParams, RenderEngine};
use crate::errors::RenderError;
use crate::filters::FilterKind;
use image::{Rgba, RgbaImage, imageops};

// Fallback values used when the editor leaves a slot unset, comparable to
// the stock defaults of the platform filters these kinds are modeled on.
const DEFAULT_CRYSTALLIZE_RADIUS: f64 = 20.0;
const DEFAULT_EDGE_INTENSITY: f64 = 1.0;
const DEFAULT_BLUR_RADIUS: f64 = 10.0;
const DEFAULT_PIXELLATE_SCALE: f64 = 8.0;
const DEFAULT_SEPIA_INTENSITY: f64 = 1.0;
const DEFAULT_UNSHARP_INTENSITY: f64 = 0.5;
const DEFAULT_UNSHARP_RADIUS: f64 = 2.5;
const DEFAULT_VIGNETTE_INTENSITY: f64 = 0.0;
const DEFAULT_VIGNETTE_RADIUS: f64 = 1.0;

/// CPU filter engine
#[derive(Debug, Clone, Copy, Default)]
pub struct SoftwareEngine;

impl SoftwareEngine {
    /// Create a new software engine
    pub fn new() -> Self {
        Self
    }
}

impl RenderEngine for SoftwareEngine {
    fn render(
        &self,
        source: &RgbaImage,
        kind: FilterKind,
        params: &FilterParams,
    ) -> Result<RgbaImage, RenderError> {
        if source.width() == 0 || source.height() == 0 {
            return Err(RenderError::NoOutput);
        }

        let output = match kind {
            FilterKind::Crystallize => {
                crystallize(source, params.radius.unwrap_or(DEFAULT_CRYSTALLIZE_RADIUS))
            }
            FilterKind::Edges => edges(source, params.intensity.unwrap_or(DEFAULT_EDGE_INTENSITY)),
            FilterKind::GaussianBlur => {
                gaussian_blur(source, params.radius.unwrap_or(DEFAULT_BLUR_RADIUS))
            }
            FilterKind::Pixellate => {
                pixellate(source, params.scale.unwrap_or(DEFAULT_PIXELLATE_SCALE))
            }
            FilterKind::SepiaTone => {
                sepia_tone(source, params.intensity.unwrap_or(DEFAULT_SEPIA_INTENSITY))
            }
            FilterKind::UnsharpMask => unsharp_mask(
                source,
                params.intensity.unwrap_or(DEFAULT_UNSHARP_INTENSITY),
                params.radius.unwrap_or(DEFAULT_UNSHARP_RADIUS),
            ),
            FilterKind::Vignette => vignette(
                source,
                params.intensity.unwrap_or(DEFAULT_VIGNETTE_INTENSITY),
                params.radius.unwrap_or(DEFAULT_VIGNETTE_RADIUS),
            ),
        };

        if output.width() != source.width() || output.height() != source.height() {
            return Err(RenderError::Materialize(format!(
                "output dimensions {}x{} do not match source {}x{}",
                output.width(),
                output.height(),
                source.width(),
                source.height()
            )));
        }

        Ok(output)
    }
}

/// Gaussian blur with the pixel radius mapped to a kernel sigma
fn gaussian_blur(source: &RgbaImage, radius: f64) -> RgbaImage {
    // Kernel extent is roughly three sigmas
    let sigma = (radius / 3.0) as f32;
    if sigma < 0.01 {
        return source.clone();
    }
    imageops::blur(source, sigma)
}

/// Unsharp mask: sharpen, then blend with the original by intensity
fn unsharp_mask(source: &RgbaImage, intensity: f64, radius: f64) -> RgbaImage {
    let intensity = intensity.clamp(0.0, 1.0);
    if intensity <= 0.0 {
        return source.clone();
    }

    let sigma = ((radius / 3.0) as f32).max(0.01);
    let sharpened = imageops::unsharpen(source, sigma, 0);

    let mut output = source.clone();
    for (x, y, pixel) in output.enumerate_pixels_mut() {
        let sharp = sharpened.get_pixel(x, y);
        for c in 0..3 {
            pixel[c] = lerp_u8(pixel[c], sharp[c], intensity);
        }
    }
    output
}

/// Sepia tone via the standard tint matrix, blended by intensity
fn sepia_tone(source: &RgbaImage, intensity: f64) -> RgbaImage {
    let intensity = intensity.clamp(0.0, 1.0);
    if intensity <= 0.0 {
        return source.clone();
    }

    let mut output = source.clone();
    for pixel in output.pixels_mut() {
        let r = pixel[0] as f64;
        let g = pixel[1] as f64;
        let b = pixel[2] as f64;

        let sr = (0.393 * r + 0.769 * g + 0.189 * b).min(255.0);
        let sg = (0.349 * r + 0.686 * g + 0.168 * b).min(255.0);
        let sb = (0.272 * r + 0.534 * g + 0.131 * b).min(255.0);

        pixel[0] = lerp_u8(pixel[0], sr as u8, intensity);
        pixel[1] = lerp_u8(pixel[1], sg as u8, intensity);
        pixel[2] = lerp_u8(pixel[2], sb as u8, intensity);
    }
    output
}

/// Darken pixels towards the image corners
///
/// The radius parameter is the pixel extent of the falloff band measured
/// inward from the corner distance.
fn vignette(source: &RgbaImage, intensity: f64, radius: f64) -> RgbaImage {
    let intensity = intensity.clamp(0.0, 1.0);
    let (width, height) = source.dimensions();
    let cx = (width as f64 - 1.0) / 2.0;
    let cy = (height as f64 - 1.0) / 2.0;
    let max_dist = (cx * cx + cy * cy).sqrt();

    let band_start = (max_dist - radius).max(0.0);
    let band = max_dist - band_start;
    if intensity <= 0.0 || band <= f64::EPSILON {
        return source.clone();
    }

    let mut output = source.clone();
    for (x, y, pixel) in output.enumerate_pixels_mut() {
        let dx = x as f64 - cx;
        let dy = y as f64 - cy;
        let dist = (dx * dx + dy * dy).sqrt();

        let falloff = ((dist - band_start) / band).clamp(0.0, 1.0);
        let keep = 1.0 - intensity * falloff;
        for c in 0..3 {
            pixel[c] = (pixel[c] as f64 * keep).round() as u8;
        }
    }
    output
}

/// Replace each scale-sized block with its top-left sample
fn pixellate(source: &RgbaImage, scale: f64) -> RgbaImage {
    let block = (scale.round() as u32).max(1);
    if block == 1 {
        return source.clone();
    }

    let (width, height) = source.dimensions();
    let mut output = RgbaImage::new(width, height);
    for (x, y, pixel) in output.enumerate_pixels_mut() {
        let bx = (x / block) * block;
        let by = (y / block) * block;
        *pixel = *source.get_pixel(bx.min(width - 1), by.min(height - 1));
    }
    output
}

/// Replace each radius-sized cell with its average color
fn crystallize(source: &RgbaImage, radius: f64) -> RgbaImage {
    let cell = (radius.round() as u32).max(1);
    if cell == 1 {
        return source.clone();
    }

    let (width, height) = source.dimensions();
    let mut output = RgbaImage::new(width, height);

    let mut cy = 0;
    while cy < height {
        let mut cx = 0;
        let cell_h = cell.min(height - cy);
        while cx < width {
            let cell_w = cell.min(width - cx);

            let mut sum = [0u64; 4];
            for y in cy..cy + cell_h {
                for x in cx..cx + cell_w {
                    let pixel = source.get_pixel(x, y);
                    for c in 0..4 {
                        sum[c] += pixel[c] as u64;
                    }
                }
            }

            let count = (cell_w * cell_h) as u64;
            let mean = Rgba([
                (sum[0] / count) as u8,
                (sum[1] / count) as u8,
                (sum[2] / count) as u8,
                (sum[3] / count) as u8,
            ]);
            for y in cy..cy + cell_h {
                for x in cx..cx + cell_w {
                    output.put_pixel(x, y, mean);
                }
            }

            cx += cell;
        }
        cy += cell;
    }
    output
}

/// Sobel edge magnitude per channel, scaled by intensity
fn edges(source: &RgbaImage, intensity: f64) -> RgbaImage {
    let intensity = intensity.clamp(0.0, 1.0);
    let (width, height) = source.dimensions();

    // Border pixels have no full neighborhood and stay black
    let mut output = RgbaImage::new(width, height);
    for (x, y, pixel) in output.enumerate_pixels_mut() {
        pixel[3] = source.get_pixel(x, y)[3];
    }
    if width < 3 || height < 3 {
        return output;
    }

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let mut pixel = *output.get_pixel(x, y);
            for c in 0..3 {
                let sample = |dx: i32, dy: i32| {
                    source.get_pixel((x as i32 + dx) as u32, (y as i32 + dy) as u32)[c] as f64
                };

                let gx = sample(1, -1) + 2.0 * sample(1, 0) + sample(1, 1)
                    - sample(-1, -1)
                    - 2.0 * sample(-1, 0)
                    - sample(-1, 1);
                let gy = sample(-1, 1) + 2.0 * sample(0, 1) + sample(1, 1)
                    - sample(-1, -1)
                    - 2.0 * sample(0, -1)
                    - sample(1, -1);

                let magnitude = (gx * gx + gy * gy).sqrt() * intensity;
                pixel[c] = magnitude.min(255.0) as u8;
            }
            output.put_pixel(x, y, pixel);
        }
    }
    output
}

fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_image(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x * 16) as u8, (y * 16) as u8, 128, 255])
        })
    }

    fn flat_image(width: u32, height: u32, value: u8) -> RgbaImage {
        RgbaImage::from_fn(width, height, |_, _| Rgba([value, value, value, 255]))
    }

    #[test]
    fn test_rejects_empty_source() {
        let engine = SoftwareEngine::new();
        let empty = RgbaImage::new(0, 0);
        let result = engine.render(&empty, FilterKind::SepiaTone, &FilterParams::default());
        assert!(matches!(result, Err(RenderError::NoOutput)));
    }

    #[test]
    fn test_sepia_zero_intensity_is_identity() {
        let source = gradient_image(8, 8);
        assert_eq!(sepia_tone(&source, 0.0), source);
    }

    #[test]
    fn test_sepia_full_intensity_tints_warm() {
        let source = flat_image(8, 8, 128);
        let output = sepia_tone(&source, 1.0);
        let pixel = output.get_pixel(4, 4);
        // Sepia pushes red above blue
        assert!(pixel[0] > pixel[2]);
        assert_eq!(pixel[3], 255);
    }

    #[test]
    fn test_blur_zero_radius_is_identity() {
        let source = gradient_image(8, 8);
        assert_eq!(gaussian_blur(&source, 0.0), source);
    }

    #[test]
    fn test_pixellate_produces_uniform_blocks() {
        let source = gradient_image(16, 16);
        let output = pixellate(&source, 4.0);
        let anchor = output.get_pixel(0, 0);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(output.get_pixel(x, y), anchor);
            }
        }
        assert_ne!(output.get_pixel(4, 0), anchor);
    }

    #[test]
    fn test_crystallize_averages_cells() {
        let source = gradient_image(16, 16);
        let output = crystallize(&source, 4.0);
        assert_eq!(output.get_pixel(0, 0), output.get_pixel(3, 3));
        assert_eq!(output.dimensions(), source.dimensions());
    }

    #[test]
    fn test_vignette_darkens_corners_not_center() {
        let source = flat_image(33, 33, 200);
        let output = vignette(&source, 1.0, 200.0);
        let center = output.get_pixel(16, 16);
        let corner = output.get_pixel(0, 0);
        assert!(corner[0] < center[0]);
        assert_eq!(center[0], 200);
    }

    #[test]
    fn test_edges_flat_image_is_black() {
        let source = flat_image(8, 8, 170);
        let output = edges(&source, 1.0);
        let pixel = output.get_pixel(4, 4);
        assert_eq!([pixel[0], pixel[1], pixel[2]], [0, 0, 0]);
        assert_eq!(pixel[3], 255);
    }

    #[test]
    fn test_unsharp_zero_intensity_is_identity() {
        let source = gradient_image(8, 8);
        assert_eq!(unsharp_mask(&source, 0.0, 50.0), source);
    }
}
