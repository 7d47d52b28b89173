//! Deterministic RGBA8 adjustment pipeline: brightness, contrast,
//! saturation, blur, preset color casts and a 3x3 sharpen.

pub mod error;
pub mod image_buf;
pub mod params;
pub mod pipeline;
pub mod preset;
pub mod session;

pub use error::{Error, Result};
pub use image_buf::RasterImage;
pub use params::{AdjustmentParameters, PresetId};
pub use pipeline::Pipeline;
pub use preset::{ColorCast, color_cast, resolve_preset};
pub use session::{EditSession, SessionEvent};

/// Render `source` with `params` through the default pipeline.
///
/// The source is left untouched; the result is a new buffer of the same
/// dimensions.
pub fn render(source: &RasterImage, params: &AdjustmentParameters) -> Result<RasterImage> {
    Pipeline::new().render(source, params)
}
