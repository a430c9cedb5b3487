// SPDX-License-Identifier: GPL-3.0-only

//! Filter catalog
//!
//! The fixed set of built-in filter kinds, the abstract parameter slots each
//! kind exposes, and the user-adjustable filter settings.

use crate::constants::{DEFAULT_INTENSITY, DEFAULT_RADIUS};
use serde::{Deserialize, Serialize};

/// Abstract knobs a filter kind may or may not expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamSlot {
    /// Effect strength, passed through unscaled in [0, 1]
    Intensity,
    /// Pixel radius, scaled to the engine's [0, 200] range
    Radius,
    /// Block scale in [0, 10], derived from the intensity slider
    Scale,
}

impl ParamSlot {
    /// Lowercase label for UI/CLI output
    pub fn label(&self) -> &'static str {
        match self {
            ParamSlot::Intensity => "intensity",
            ParamSlot::Radius => "radius",
            ParamSlot::Scale => "scale",
        }
    }
}

/// Built-in filter kinds
///
/// Each variant carries its accepted parameter slots as static data; the
/// editor only populates the slots a kind declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterKind {
    /// Polygonal color cells (radius = cell size)
    Crystallize,
    /// Edge detection (intensity = edge gain)
    Edges,
    /// Gaussian blur (radius = blur extent in pixels)
    GaussianBlur,
    /// Square pixel blocks (scale = block size)
    Pixellate,
    /// Warm brownish tint (intensity = tint strength)
    #[default]
    SepiaTone,
    /// Sharpening via unsharp mask (intensity + radius)
    UnsharpMask,
    /// Darkened edges (intensity + radius)
    Vignette,
}

impl FilterKind {
    /// All filter kinds in menu order
    pub const ALL: [FilterKind; 7] = [
        FilterKind::Crystallize,
        FilterKind::Edges,
        FilterKind::GaussianBlur,
        FilterKind::Pixellate,
        FilterKind::SepiaTone,
        FilterKind::UnsharpMask,
        FilterKind::Vignette,
    ];

    /// Get display name for the filter
    pub fn display_name(&self) -> &'static str {
        match self {
            FilterKind::Crystallize => "Crystallize",
            FilterKind::Edges => "Edges",
            FilterKind::GaussianBlur => "Gaussian Blur",
            FilterKind::Pixellate => "Pixellate",
            FilterKind::SepiaTone => "Sepia Tone",
            FilterKind::UnsharpMask => "Unsharp Mask",
            FilterKind::Vignette => "Vignette",
        }
    }

    /// Kebab-case identifier used on the command line
    pub fn slug(&self) -> &'static str {
        match self {
            FilterKind::Crystallize => "crystallize",
            FilterKind::Edges => "edges",
            FilterKind::GaussianBlur => "gaussian-blur",
            FilterKind::Pixellate => "pixellate",
            FilterKind::SepiaTone => "sepia-tone",
            FilterKind::UnsharpMask => "unsharp-mask",
            FilterKind::Vignette => "vignette",
        }
    }

    /// The parameter slots this kind accepts
    pub fn param_slots(&self) -> &'static [ParamSlot] {
        match self {
            FilterKind::Crystallize => &[ParamSlot::Radius],
            FilterKind::Edges => &[ParamSlot::Intensity],
            FilterKind::GaussianBlur => &[ParamSlot::Radius],
            FilterKind::Pixellate => &[ParamSlot::Scale],
            FilterKind::SepiaTone => &[ParamSlot::Intensity],
            FilterKind::UnsharpMask => &[ParamSlot::Intensity, ParamSlot::Radius],
            FilterKind::Vignette => &[ParamSlot::Intensity, ParamSlot::Radius],
        }
    }

    /// Check whether this kind accepts the given slot
    pub fn accepts(&self, slot: ParamSlot) -> bool {
        self.param_slots().contains(&slot)
    }
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for FilterKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.to_ascii_lowercase();
        FilterKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == needle)
            .ok_or_else(|| {
                let known: Vec<&str> = FilterKind::ALL.iter().map(|k| k.slug()).collect();
                format!("unknown filter '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}

/// User-adjustable filter settings
///
/// Both values are normalized slider positions; the editor scales them onto
/// the ranges the engine expects. Lives for one editing session only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterSettings {
    /// Effect intensity in [0, 1]
    pub intensity: f64,
    /// Effect radius in [0, 1]
    pub radius: f64,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            intensity: DEFAULT_INTENSITY,
            radius: DEFAULT_RADIUS,
        }
    }
}

impl FilterSettings {
    /// Clamp both values into [0, 1]
    pub fn clamped(self) -> Self {
        Self {
            intensity: self.intensity.clamp(0.0, 1.0),
            radius: self.radius.clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_slug_round_trip() {
        for kind in FilterKind::ALL {
            assert_eq!(FilterKind::from_str(kind.slug()), Ok(kind));
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!(FilterKind::from_str("posterize").is_err());
    }

    #[test]
    fn test_settings_clamped() {
        let settings = FilterSettings {
            intensity: 1.8,
            radius: -0.2,
        }
        .clamped();
        assert_eq!(settings.intensity, 1.0);
        assert_eq!(settings.radius, 0.0);
    }
}
