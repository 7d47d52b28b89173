use tracing::debug;

use crate::params::{
    AdjustmentParameters, BLUR_RADIUS_RANGE, BRIGHTNESS_RANGE, CONTRAST_RANGE, PresetId,
    SATURATION_RANGE, SHARPNESS_RANGE, clamp_to,
};
use crate::preset::preset_values;

/// Edit input from a front end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    PresetSelected(PresetId),
    BrightnessChanged(i32),
    ContrastChanged(i32),
    SaturationChanged(i32),
    BlurChanged(i32),
    SharpnessChanged(i32),
    Reset,
}

/// Current control values plus the preset state machine.
///
/// Selecting a named preset overwrites the controls it defines. Touching
/// any individual control afterwards moves the state to
/// [`PresetId::Custom`], which drops the preset's color cast while keeping
/// the values it set. Every transition is accepted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditSession {
    params: AdjustmentParameters,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing values. They are clamped on the way in, and a
    /// named preset's table values replace the fields it controls so the
    /// session holds what `render` would use.
    pub fn with_params(params: AdjustmentParameters) -> Self {
        let mut params = params.normalized();
        if let Some(values) = preset_values(params.preset) {
            values.apply_to(&mut params);
        }
        Self { params }
    }

    pub fn preset(&self) -> PresetId {
        self.params.preset
    }

    /// Immutable snapshot to hand to the renderer.
    pub fn snapshot(&self) -> AdjustmentParameters {
        self.params
    }

    pub fn update(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::PresetSelected(preset) => self.apply_preset(preset),
            SessionEvent::BrightnessChanged(v) => self.set_brightness(v),
            SessionEvent::ContrastChanged(v) => self.set_contrast(v),
            SessionEvent::SaturationChanged(v) => self.set_saturation(v),
            SessionEvent::BlurChanged(v) => self.set_blur_radius(v),
            SessionEvent::SharpnessChanged(v) => self.set_sharpness(v),
            SessionEvent::Reset => self.reset(),
        }
    }

    pub fn apply_preset(&mut self, preset: PresetId) {
        debug!(from = %self.params.preset, to = %preset, "preset selected");
        match preset {
            PresetId::None => self.reset(),
            PresetId::Custom => self.params.preset = PresetId::Custom,
            named => {
                if let Some(values) = preset_values(named) {
                    values.apply_to(&mut self.params);
                }
                self.params.preset = named;
            }
        }
    }

    /// Back to neutral controls and no preset.
    pub fn reset(&mut self) {
        self.params = AdjustmentParameters::default();
    }

    pub fn set_brightness(&mut self, value: i32) {
        self.params.brightness = clamp_to(value, &BRIGHTNESS_RANGE);
        self.escape_to_custom();
    }

    pub fn set_contrast(&mut self, value: i32) {
        self.params.contrast = clamp_to(value, &CONTRAST_RANGE);
        self.escape_to_custom();
    }

    pub fn set_saturation(&mut self, value: i32) {
        self.params.saturation = clamp_to(value, &SATURATION_RANGE);
        self.escape_to_custom();
    }

    pub fn set_blur_radius(&mut self, value: i32) {
        self.params.blur_radius = clamp_to(value, &BLUR_RADIUS_RANGE);
        self.escape_to_custom();
    }

    pub fn set_sharpness(&mut self, value: i32) {
        self.params.sharpness = clamp_to(value, &SHARPNESS_RANGE);
        self.escape_to_custom();
    }

    fn escape_to_custom(&mut self) {
        self.params.preset = PresetId::Custom;
    }
}
