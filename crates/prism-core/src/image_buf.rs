use image::RgbaImage;

use crate::error::{Error, Result};

/// 8-bit RGBA raster.
///
/// Pixel data is stored row-major as interleaved RGBARGBA... with alpha
/// fully opaque for every image this crate produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    /// Flat pixel data: [R, G, B, A, R, G, B, A, ...].
    pub data: Vec<u8>,
}

impl RasterImage {
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        check_dimensions(width, height, data.len())?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A `width` x `height` image with every pixel set to `rgba`.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self> {
        let len = expected_len(width, height).ok_or(Error::InvalidDimensions {
            width,
            height,
            len: 0,
        })?;
        let data = rgba.iter().copied().cycle().take(len).collect();
        Self::from_data(width, height, data)
    }

    /// Re-check the buffer invariant. Fields are public, so the pipeline
    /// runs this before touching any pixel.
    pub fn validate(&self) -> Result<()> {
        check_dimensions(self.width, self.height, self.data.len())
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Byte offset of pixel (x, y).
    pub fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.offset(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Hand the pixels over to the `image` crate for encoding or display.
    pub fn into_rgba_image(self) -> Result<RgbaImage> {
        let (width, height, len) = (self.width, self.height, self.data.len());
        RgbaImage::from_raw(width, height, self.data).ok_or(Error::InvalidDimensions {
            width,
            height,
            len,
        })
    }
}

impl TryFrom<RgbaImage> for RasterImage {
    type Error = Error;

    fn try_from(img: RgbaImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        Self::from_data(width, height, img.into_raw())
    }
}

fn expected_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(4)
}

fn check_dimensions(width: u32, height: u32, len: usize) -> Result<()> {
    match expected_len(width, height) {
        Some(expected) if width > 0 && height > 0 && expected == len => Ok(()),
        _ => Err(Error::InvalidDimensions { width, height, len }),
    }
}
