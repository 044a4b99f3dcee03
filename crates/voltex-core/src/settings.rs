//! Render settings for volumetric previews.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Upper bound of the density slider range exposed by host UIs.
pub const MAX_DENSITY: f32 = 5.0;

/// Raymarch quality tier: the number of samples taken along each ray.
///
/// The tiers are a closed set so host dropdowns can enumerate them; lower
/// tiers trade visible banding for speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SampleQuality {
    /// 16 samples.
    Q16,
    /// 32 samples.
    Q32,
    /// 64 samples (default).
    #[default]
    Q64,
    /// 128 samples.
    Q128,
    /// 256 samples.
    Q256,
    /// 512 samples.
    Q512,
}

impl SampleQuality {
    /// All tiers in ascending order, for host dropdowns.
    pub const ALL: [SampleQuality; 6] = [
        SampleQuality::Q16,
        SampleQuality::Q32,
        SampleQuality::Q64,
        SampleQuality::Q128,
        SampleQuality::Q256,
        SampleQuality::Q512,
    ];

    /// Returns the number of raymarch samples for this tier.
    #[must_use]
    pub fn samples(self) -> u32 {
        match self {
            SampleQuality::Q16 => 16,
            SampleQuality::Q32 => 32,
            SampleQuality::Q64 => 64,
            SampleQuality::Q128 => 128,
            SampleQuality::Q256 => 256,
            SampleQuality::Q512 => 512,
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SampleQuality::Q16 => "16",
            SampleQuality::Q32 => "32",
            SampleQuality::Q64 => "64",
            SampleQuality::Q128 => "128",
            SampleQuality::Q256 => "256",
            SampleQuality::Q512 => "512",
        }
    }

    /// Converts from a u32 index (used in UI dropdowns) to `SampleQuality`.
    /// Order: 0=16, 1=32, 2=64, 3=128, 4=256, 5=512.
    #[must_use]
    #[allow(clippy::match_same_arms)] // 2 and _ both map to Q64 (default) intentionally
    pub fn from_index(index: u32) -> Self {
        match index {
            0 => SampleQuality::Q16,
            1 => SampleQuality::Q32,
            2 => SampleQuality::Q64,
            3 => SampleQuality::Q128,
            4 => SampleQuality::Q256,
            5 => SampleQuality::Q512,
            _ => SampleQuality::Q64, // Default
        }
    }

    /// Converts to a u32 index (used in UI dropdowns).
    #[must_use]
    pub fn to_index(self) -> u32 {
        match self {
            SampleQuality::Q16 => 0,
            SampleQuality::Q32 => 1,
            SampleQuality::Q64 => 2,
            SampleQuality::Q128 => 3,
            SampleQuality::Q256 => 4,
            SampleQuality::Q512 => 5,
        }
    }

    /// Looks up the tier matching an exact sample count, if any.
    #[must_use]
    pub fn from_samples(samples: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.samples() == samples)
    }
}

/// Per-render settings for a volumetric preview.
///
/// Rebuilt by the host for every frame; serializable so hosts can persist
/// a user's preview preferences between sessions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Camera distance from the cube center.
    ///
    /// The historical default is 6.5; `fit_distance` in the render crate
    /// derives a distance from the field of view and bounding sphere
    /// instead, for callers that want the view to fill the frame.
    pub distance: f32,

    /// Raymarch quality tier.
    pub quality: SampleQuality,

    /// Linear multiplier applied to sampled opacity.
    ///
    /// Host sliders expose [0, `MAX_DENSITY`]; the renderer itself
    /// tolerates any finite value.
    pub density: f32,

    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            distance: 6.5,
            quality: SampleQuality::default(),
            density: 1.0,
            fov_degrees: 30.0,
        }
    }
}

impl RenderSettings {
    /// Returns the density clamped to the host slider range [0, `MAX_DENSITY`].
    #[must_use]
    pub fn clamped_density(&self) -> f32 {
        self.density.clamp(0.0, MAX_DENSITY)
    }

    /// Sets the density, clamped to the host slider range.
    pub fn set_density(&mut self, density: f32) {
        self.density = density.clamp(0.0, MAX_DENSITY);
    }

    /// Serializes the settings to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserializes settings from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
