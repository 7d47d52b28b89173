use serde::{Deserialize, Serialize};

use crate::params::{AdjustmentParameters, PresetId};

/// Fixed per-channel offset added to every pixel after the compositing pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorCast {
    pub r: i16,
    pub g: i16,
    pub b: i16,
}

impl ColorCast {
    pub const fn new(r: i16, g: i16, b: i16) -> Self {
        Self { r, g, b }
    }

    pub fn is_empty(&self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }
}

/// Values a named preset forces onto the controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PresetValues {
    /// `None` leaves the current brightness alone.
    pub brightness: Option<i32>,
    pub contrast: i32,
    pub saturation: i32,
    pub sharpness: i32,
    pub cast: Option<ColorCast>,
}

impl PresetValues {
    const fn new(
        brightness: Option<i32>,
        contrast: i32,
        saturation: i32,
        sharpness: i32,
        cast: Option<ColorCast>,
    ) -> Self {
        Self {
            brightness,
            contrast,
            saturation,
            sharpness,
            cast,
        }
    }

    /// Overwrite the preset-controlled fields of `params`. Blur is never
    /// touched by a preset.
    pub fn apply_to(&self, params: &mut AdjustmentParameters) {
        if let Some(brightness) = self.brightness {
            params.brightness = brightness;
        }
        params.contrast = self.contrast;
        params.saturation = self.saturation;
        params.sharpness = self.sharpness;
    }
}

/// Table entry for a named preset, or `None` for `None`/`Custom`.
pub fn preset_values(preset: PresetId) -> Option<PresetValues> {
    let values = match preset {
        PresetId::None | PresetId::Custom => return None,
        PresetId::Vintage => {
            PresetValues::new(Some(110), 90, 80, 100, Some(ColorCast::new(20, 10, -20)))
        }
        PresetId::Vivid => PresetValues::new(Some(105), 110, 130, 100, None),
        PresetId::Cool => {
            PresetValues::new(Some(100), 105, 110, 100, Some(ColorCast::new(-10, 0, 15)))
        }
        PresetId::Warm => {
            PresetValues::new(Some(105), 105, 115, 100, Some(ColorCast::new(15, 5, -10)))
        }
        PresetId::BlackAndWhite => PresetValues::new(None, 110, 0, 100, None),
        PresetId::Professional => PresetValues::new(Some(105), 108, 105, 110, None),
    };
    Some(values)
}

/// Concrete parameters for `preset`, starting from neutral.
///
/// `None` and `Custom` resolve to the neutral set. Black & white keeps
/// the neutral brightness since it doesn't define one.
pub fn resolve_preset(preset: PresetId) -> AdjustmentParameters {
    let mut params = AdjustmentParameters {
        preset,
        ..Default::default()
    };
    if let Some(values) = preset_values(preset) {
        values.apply_to(&mut params);
    }
    params
}

/// Color cast associated with `preset`, if any.
pub fn color_cast(preset: PresetId) -> Option<ColorCast> {
    preset_values(preset)
        .and_then(|v| v.cast)
        .filter(|cast| !cast.is_empty())
}
