// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

/// Maps the normalized radius slider [0, 1] onto the engine's pixel-radius range.
pub const RADIUS_SCALE: f64 = 200.0;

/// Maps the normalized intensity slider [0, 1] onto the engine's scale range.
///
/// Filters with a "scale" notion derive it from the intensity slider rather
/// than a dedicated control.
pub const SCALE_FACTOR: f64 = 10.0;

/// Number of filter changes after which the review prompt fires.
pub const REVIEW_THRESHOLD: u32 = 5;

/// Default slider position for intensity.
pub const DEFAULT_INTENSITY: f64 = 0.5;

/// Default slider position for radius.
pub const DEFAULT_RADIUS: f64 = 0.5;

/// Application information utilities
pub mod app_info {
    /// Get the application version from build-time environment
    pub fn version() -> &'static str {
        env!("GIT_VERSION")
    }
}
