// SPDX-License-Identifier: GPL-3.0-only

//! Editing session state and the filter pipeline core
//!
//! [`Editor`] owns the currently selected filter, its two slider settings,
//! and the source/output bitmaps. Every mutation re-renders synchronously,
//! so the output always reflects the current (source, filter, settings)
//! triple; there is no stale-output state.
//!
//! All state is confined to the caller's thread. The only asynchronous
//! collaborator is the photo picker, which is fenced with a monotonic load
//! generation so a stale load can never overwrite a newer source.

use image::RgbaImage;
use tracing::{debug, warn};

use crate::constants::{RADIUS_SCALE, SCALE_FACTOR};
use crate::engine::{FilterParams, RenderEngine};
use crate::filters::{FilterKind, FilterSettings, ParamSlot};
use crate::review::FilterUsageCounter;

/// Token tying an in-flight source load to the editor state that started it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadGeneration(u64);

/// Editing session over a render engine
pub struct Editor<E: RenderEngine> {
    engine: E,
    filter: FilterKind,
    settings: FilterSettings,
    source: Option<RgbaImage>,
    output: Option<RgbaImage>,
    load_generation: u64,
    review: FilterUsageCounter,
}

impl<E: RenderEngine> Editor<E> {
    /// Create an editor with a default review counter
    pub fn new(engine: E) -> Self {
        Self::with_review_counter(engine, FilterUsageCounter::default())
    }

    /// Create an editor with an injected review counter
    pub fn with_review_counter(engine: E, review: FilterUsageCounter) -> Self {
        Self {
            engine,
            filter: FilterKind::default(),
            settings: FilterSettings::default(),
            source: None,
            output: None,
            load_generation: 0,
            review,
        }
    }

    /// The active filter
    pub fn filter(&self) -> FilterKind {
        self.filter
    }

    /// The current slider settings
    pub fn settings(&self) -> FilterSettings {
        self.settings
    }

    /// The rendered image, absent until the first successful render
    pub fn output(&self) -> Option<&RgbaImage> {
        self.output.as_ref()
    }

    /// Whether a source image has been set
    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    /// Sliders, the filter menu and sharing are enabled once output exists
    pub fn controls_enabled(&self) -> bool {
        self.output.is_some()
    }

    /// Filter changes recorded so far (for persisting across sessions)
    pub fn filter_change_count(&self) -> u32 {
        self.review.count()
    }

    /// Replace the source image and render at the filter's defaults
    ///
    /// The previous output is cleared so a stale result is never shown for
    /// the new photo.
    pub fn set_source(&mut self, image: RgbaImage) {
        debug!(width = image.width(), height = image.height(), "Source image set");
        self.source = Some(image);
        self.output = None;
        self.settings = FilterSettings::default();
        self.render();
    }

    /// Replace the active filter and render at its default settings
    ///
    /// Counts as a filter-change event for the review prompt.
    pub fn select_filter(&mut self, kind: FilterKind) {
        self.filter = kind;
        self.settings = FilterSettings::default();
        let count = self.review.increment();
        debug!(filter = kind.display_name(), count, "Filter selected");
        self.render();
    }

    /// Replace the slider settings and re-render
    pub fn update_settings(&mut self, settings: FilterSettings) {
        self.settings = settings.clamped();
        self.render();
    }

    /// Start a source load, invalidating any load still in flight
    pub fn begin_load(&mut self) -> LoadGeneration {
        self.load_generation += 1;
        LoadGeneration(self.load_generation)
    }

    /// Complete a source load
    ///
    /// Results from a superseded generation are discarded, and a picker that
    /// produced no image is a silent no-op; the displayed output is never
    /// replaced by a failed or stale load.
    pub fn finish_load(&mut self, generation: LoadGeneration, image: Option<RgbaImage>) {
        if generation.0 != self.load_generation {
            debug!(
                stale = generation.0,
                current = self.load_generation,
                "Discarding stale source load"
            );
            return;
        }
        let Some(image) = image else {
            return;
        };
        self.set_source(image);
    }

    /// Render the current triple, replacing the output on success
    ///
    /// Without a source this is a no-op. An engine failure keeps the
    /// previous output unchanged rather than showing a broken image.
    pub fn render(&mut self) {
        let Some(source) = &self.source else {
            return;
        };

        let params = self.params();
        match self.engine.render(source, self.filter, &params) {
            Ok(image) => self.output = Some(image),
            Err(e) => {
                warn!(
                    error = %e,
                    filter = self.filter.display_name(),
                    "Render failed, keeping previous output"
                );
            }
        }
    }

    /// Map the generic sliders onto the slots the active filter accepts
    fn params(&self) -> FilterParams {
        let mut params = FilterParams::default();
        if self.filter.accepts(ParamSlot::Intensity) {
            params.intensity = Some(self.settings.intensity);
        }
        if self.filter.accepts(ParamSlot::Radius) {
            params.radius = Some(self.settings.radius * RADIUS_SCALE);
        }
        if self.filter.accepts(ParamSlot::Scale) {
            params.scale = Some(self.settings.intensity * SCALE_FACTOR);
        }
        params
    }
}
