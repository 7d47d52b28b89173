use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use tracing::warn;

pub const BRIGHTNESS_RANGE: RangeInclusive<i32> = 50..=150;
pub const CONTRAST_RANGE: RangeInclusive<i32> = 50..=150;
pub const SATURATION_RANGE: RangeInclusive<i32> = 0..=200;
pub const BLUR_RADIUS_RANGE: RangeInclusive<i32> = 0..=10;
pub const SHARPNESS_RANGE: RangeInclusive<i32> = 50..=150;

/// Neutral value for the percentage controls.
pub const NEUTRAL: i32 = 100;

/// Named adjustment preset.
///
/// Deserialization is total: any name that isn't recognized becomes
/// [`PresetId::None`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum PresetId {
    #[default]
    None,
    Vintage,
    Vivid,
    Cool,
    Warm,
    BlackAndWhite,
    Professional,
    /// Explicit slider values, no preset override and no color cast.
    Custom,
}

impl PresetId {
    pub const ALL: [PresetId; 8] = [
        PresetId::None,
        PresetId::Vintage,
        PresetId::Vivid,
        PresetId::Cool,
        PresetId::Warm,
        PresetId::BlackAndWhite,
        PresetId::Professional,
        PresetId::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PresetId::None => "none",
            PresetId::Vintage => "vintage",
            PresetId::Vivid => "vivid",
            PresetId::Cool => "cool",
            PresetId::Warm => "warm",
            PresetId::BlackAndWhite => "blackwhite",
            PresetId::Professional => "professional",
            PresetId::Custom => "custom",
        }
    }

    /// Look up a preset by name, case-insensitively. Unknown names fall
    /// back to `None` so the pipeline stays total.
    pub fn from_name(name: &str) -> Self {
        let lower = name.trim().to_ascii_lowercase();
        match lower.as_str() {
            "none" | "" => PresetId::None,
            "vintage" => PresetId::Vintage,
            "vivid" => PresetId::Vivid,
            "cool" => PresetId::Cool,
            "warm" => PresetId::Warm,
            "blackwhite" | "black_and_white" | "bw" => PresetId::BlackAndWhite,
            "professional" => PresetId::Professional,
            "custom" => PresetId::Custom,
            _ => {
                warn!(name, "unknown preset, using none");
                PresetId::None
            }
        }
    }

    /// Presets that override the numeric controls when applied.
    pub fn is_named(self) -> bool {
        !matches!(self, PresetId::None | PresetId::Custom)
    }
}

impl fmt::Display for PresetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for PresetId {
    fn from(name: String) -> Self {
        PresetId::from_name(&name)
    }
}

impl From<PresetId> for &'static str {
    fn from(preset: PresetId) -> Self {
        preset.as_str()
    }
}

/// One snapshot of the adjustment controls.
///
/// Percentages are integers with 100 as neutral. Values outside the
/// documented ranges are clamped by [`normalized`](Self::normalized),
/// never rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjustmentParameters {
    /// Brightness percentage, 50..=150.
    pub brightness: i32,
    /// Contrast percentage, 50..=150.
    pub contrast: i32,
    /// Saturation percentage, 0..=200.
    pub saturation: i32,
    /// Blur radius in pixels, 0..=10.
    pub blur_radius: i32,
    /// Sharpness percentage, 50..=150.
    pub sharpness: i32,
    pub preset: PresetId,
}

impl Default for AdjustmentParameters {
    fn default() -> Self {
        Self {
            brightness: NEUTRAL,
            contrast: NEUTRAL,
            saturation: NEUTRAL,
            blur_radius: 0,
            sharpness: NEUTRAL,
            preset: PresetId::None,
        }
    }
}

impl AdjustmentParameters {
    /// Copy with every numeric field clamped to its range.
    pub fn normalized(&self) -> Self {
        Self {
            brightness: clamp_to(self.brightness, &BRIGHTNESS_RANGE),
            contrast: clamp_to(self.contrast, &CONTRAST_RANGE),
            saturation: clamp_to(self.saturation, &SATURATION_RANGE),
            blur_radius: clamp_to(self.blur_radius, &BLUR_RADIUS_RANGE),
            sharpness: clamp_to(self.sharpness, &SHARPNESS_RANGE),
            preset: self.preset,
        }
    }
}

pub(crate) fn clamp_to(value: i32, range: &RangeInclusive<i32>) -> i32 {
    value.clamp(*range.start(), *range.end())
}
