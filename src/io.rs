use std::path::Path;

use anyhow::{Context, Result};
use image::imageops::FilterType;
use tracing::{debug, info};

use prism_core::RasterImage;

/// Decode an image file to RGBA8, optionally resizing so the longest
/// edge fits within `max_edge` pixels.
pub fn load_image(path: &Path, max_edge: Option<u32>) -> Result<RasterImage> {
    info!(?path, "loading image file");
    let t0 = std::time::Instant::now();

    let img =
        image::open(path).with_context(|| format!("failed to open image: {}", path.display()))?;
    debug!(
        elapsed_ms = t0.elapsed().as_millis(),
        width = img.width(),
        height = img.height(),
        "image decode"
    );

    let img = match max_edge {
        Some(max) if img.width().max(img.height()) > max => {
            let resized = img.resize(max, max, FilterType::Triangle);
            debug!(
                width = resized.width(),
                height = resized.height(),
                "preview resize"
            );
            resized
        }
        _ => img,
    };

    // Source alpha is dropped: every pixel the pipeline sees is opaque.
    let mut rgba = img.into_rgba8();
    for pixel in rgba.pixels_mut() {
        pixel.0[3] = 255;
    }
    RasterImage::try_from(rgba)
        .with_context(|| format!("unusable image dimensions: {}", path.display()))
}

/// Encode as PNG regardless of the extension on `path`.
pub fn save_png(img: RasterImage, path: &Path) -> Result<()> {
    let (width, height) = (img.width, img.height);
    img.into_rgba_image()?
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("failed to write PNG: {}", path.display()))?;
    info!(?path, width, height, "saved");
    Ok(())
}
