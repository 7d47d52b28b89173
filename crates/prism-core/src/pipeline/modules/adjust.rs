use crate::error::Result;
use crate::image_buf::RasterImage;
use crate::pipeline::RenderSettings;
use crate::pipeline::module::ProcessingModule;

use super::blur::gaussian_blur;

/// Contrast pivots around the middle of the 8-bit range.
const MID: f32 = 127.5;

/// Luma weights of the compositing saturate matrix.
const SAT_WEIGHTS: [f32; 3] = [0.213, 0.715, 0.072];

/// Brightness, contrast and saturation as one compositing pass, followed
/// by an optional Gaussian blur.
pub struct Adjust;

impl ProcessingModule for Adjust {
    fn name(&self) -> &str {
        "adjust"
    }

    fn process_cpu(&self, mut input: RasterImage, settings: &RenderSettings) -> Result<RasterImage> {
        let composite = Composite::new(settings);
        let radius = settings.blur_radius.max(0) as u32;
        if composite.is_identity() && radius == 0 {
            return Ok(input);
        }

        if radius == 0 {
            for pixel in input.data.chunks_exact_mut(4) {
                let rgb = composite.apply([pixel[0] as f32, pixel[1] as f32, pixel[2] as f32]);
                write_rgb(pixel, rgb);
            }
            return Ok(input);
        }

        // Blur reads neighbors, so keep the composited values in float
        // until the blur is done and quantize once.
        let mut plane: Vec<[f32; 3]> = input
            .data
            .chunks_exact(4)
            .map(|p| composite.apply([p[0] as f32, p[1] as f32, p[2] as f32]))
            .collect();
        gaussian_blur(
            &mut plane,
            input.width as usize,
            input.height as usize,
            radius as f32,
        );
        for (pixel, rgb) in input.data.chunks_exact_mut(4).zip(&plane) {
            write_rgb(pixel, *rgb);
        }
        Ok(input)
    }
}

/// Per-pixel factors. A `None` step is neutral and skipped.
struct Composite {
    brightness: Option<f32>,
    contrast: Option<f32>,
    saturation: Option<[[f32; 3]; 3]>,
}

impl Composite {
    fn new(settings: &RenderSettings) -> Self {
        let factor = |percent: i32| (percent != 100).then(|| percent as f32 / 100.0);
        Self {
            brightness: factor(settings.brightness),
            contrast: factor(settings.contrast),
            saturation: factor(settings.saturation).map(saturate_matrix),
        }
    }

    fn is_identity(&self) -> bool {
        self.brightness.is_none() && self.contrast.is_none() && self.saturation.is_none()
    }

    /// Brightness -> contrast -> saturation, clamping after each step the
    /// way a filter chain does.
    fn apply(&self, mut rgb: [f32; 3]) -> [f32; 3] {
        if let Some(b) = self.brightness {
            rgb = rgb.map(|v| clamp_channel(v * b));
        }
        if let Some(c) = self.contrast {
            rgb = rgb.map(|v| clamp_channel((v - MID) * c + MID));
        }
        if let Some(m) = &self.saturation {
            rgb = m.map(|row| clamp_channel(row[0] * rgb[0] + row[1] * rgb[1] + row[2] * rgb[2]));
        }
        rgb
    }
}

fn saturate_matrix(s: f32) -> [[f32; 3]; 3] {
    let [wr, wg, wb] = SAT_WEIGHTS;
    [
        [wr + (1.0 - wr) * s, wg - wg * s, wb - wb * s],
        [wr - wr * s, wg + (1.0 - wg) * s, wb - wb * s],
        [wr - wr * s, wg - wg * s, wb + (1.0 - wb) * s],
    ]
}

fn clamp_channel(v: f32) -> f32 {
    v.clamp(0.0, 255.0)
}

fn write_rgb(pixel: &mut [u8], rgb: [f32; 3]) {
    for (dst, v) in pixel.iter_mut().zip(rgb) {
        *dst = clamp_channel(v).round() as u8;
    }
}
