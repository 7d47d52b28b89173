use crate::error::Result;
use crate::image_buf::RasterImage;
use crate::pipeline::RenderSettings;
use crate::pipeline::module::ProcessingModule;

/// Shifts R, G and B by the active preset's fixed offsets.
pub struct ColorCastShift;

impl ProcessingModule for ColorCastShift {
    fn name(&self) -> &str {
        "color_cast"
    }

    fn process_cpu(&self, mut input: RasterImage, settings: &RenderSettings) -> Result<RasterImage> {
        let Some(cast) = settings.cast.filter(|c| !c.is_empty()) else {
            return Ok(input);
        };

        let deltas = [cast.r, cast.g, cast.b];
        for pixel in input.data.chunks_exact_mut(4) {
            for (v, delta) in pixel.iter_mut().zip(deltas) {
                *v = (*v as i16).saturating_add(delta).clamp(0, 255) as u8;
            }
        }
        Ok(input)
    }
}
