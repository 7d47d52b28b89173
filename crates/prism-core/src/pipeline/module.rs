use crate::error::Result;
use crate::image_buf::RasterImage;
use crate::pipeline::RenderSettings;

/// A single step in the processing pipeline.
pub trait ProcessingModule: Send + Sync {
    fn name(&self) -> &str;
    fn process_cpu(&self, input: RasterImage, settings: &RenderSettings) -> Result<RasterImage>;
}
