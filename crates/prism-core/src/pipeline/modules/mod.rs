mod adjust;
mod blur;
mod color_cast;
mod sharpen;

pub use adjust::Adjust;
pub use color_cast::ColorCastShift;
pub use sharpen::Sharpen;
