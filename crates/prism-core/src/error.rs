#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid dimensions: {width}x{height} RGBA needs a non-empty grid of width*height*4 bytes, got {len}")]
    InvalidDimensions { width: u32, height: u32, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
