// SPDX-License-Identifier: GPL-3.0-only

//! Render engine boundary
//!
//! The editor talks to the filter engine through [`RenderEngine`], handing it
//! a source bitmap, a filter kind, and up to three named scalar parameters.
//! The trait seam keeps the pipeline testable against a fake engine and the
//! actual pixel work swappable.

pub mod software;

pub use software::SoftwareEngine;

use crate::errors::RenderError;
use crate::filters::FilterKind;
use image::RgbaImage;

/// Scalar parameters handed to the engine
///
/// Only slots the active filter kind accepts are ever populated; an engine
/// must ignore slots it did not ask for.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FilterParams {
    /// Effect strength in [0, 1]
    pub intensity: Option<f64>,
    /// Pixel radius in [0, 200]
    pub radius: Option<f64>,
    /// Block scale in [0, 10]
    pub scale: Option<f64>,
}

/// Executes the actual pixel transformation
pub trait RenderEngine {
    /// Apply `kind` to `source` with the given parameters
    ///
    /// Returns the rendered bitmap, or a [`RenderError`] when the engine
    /// produces no output or the output cannot be materialized.
    fn render(
        &self,
        source: &RgbaImage,
        kind: FilterKind,
        params: &FilterParams,
    ) -> Result<RgbaImage, RenderError>;
}
