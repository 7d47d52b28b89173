pub mod module;
pub mod modules;

use tracing::debug;

use crate::error::Result;
use crate::image_buf::RasterImage;
use crate::params::AdjustmentParameters;
use crate::preset::{ColorCast, preset_values};
use module::ProcessingModule;

/// Processing pipeline that chains modules together.
///
/// ```text
/// Source -> Brightness/Contrast/Saturation/Blur -> Color Cast -> Sharpen -> Output
/// ```
///
/// Each module takes ownership of the RGBA8 buffer and hands back a buffer
/// of identical dimensions.
pub struct Pipeline {
    modules: Vec<Box<dyn ProcessingModule>>,
}

/// Fully resolved values a render runs with: clamped, with any named
/// preset already folded in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderSettings {
    pub brightness: i32,
    pub contrast: i32,
    pub saturation: i32,
    pub blur_radius: i32,
    pub sharpness: i32,
    pub cast: Option<ColorCast>,
}

impl RenderSettings {
    pub fn resolve(params: &AdjustmentParameters) -> Self {
        let mut params = params.normalized();
        let mut cast = None;
        if let Some(values) = preset_values(params.preset) {
            values.apply_to(&mut params);
            cast = values.cast.filter(|c| !c.is_empty());
        }
        Self {
            brightness: params.brightness,
            contrast: params.contrast,
            saturation: params.saturation,
            blur_radius: params.blur_radius,
            sharpness: params.sharpness,
            cast,
        }
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self::resolve(&AdjustmentParameters::default())
    }
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            modules: vec![
                Box::new(modules::Adjust),
                Box::new(modules::ColorCastShift),
                Box::new(modules::Sharpen),
            ],
        }
    }

    /// Render `source` with `params`. The source is validated up front and
    /// never mutated; the result is a freshly owned buffer.
    pub fn render(
        &self,
        source: &RasterImage,
        params: &AdjustmentParameters,
    ) -> Result<RasterImage> {
        source.validate()?;
        let settings = RenderSettings::resolve(params);
        debug!(
            width = source.width,
            height = source.height,
            preset = %params.preset,
            ?settings,
            "rendering"
        );
        self.process_cpu(source.clone(), &settings)
    }

    /// Run every module over an owned input with already resolved settings.
    pub fn process_cpu(&self, input: RasterImage, settings: &RenderSettings) -> Result<RasterImage> {
        let mut current = input;
        for module in &self.modules {
            debug!(module = module.name(), "processing");
            current = module.process_cpu(current, settings)?;
        }
        Ok(current)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
