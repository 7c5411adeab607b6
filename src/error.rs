use thiserror::Error;

/// Errors returned while building a histogram or configuring an analysis.
#[derive(Debug, Error)]
pub enum Error {
    /// The RGBA sample buffer doesn't hold a whole number of pixels.
    #[error("malformed pixel samples: length {len} is not a multiple of 4")]
    MalformedSamples { len: usize },

    #[error("sample buffer of length {len} does not match a {width}x{height} RGBA image")]
    DimensionMismatch { width: u32, height: u32, len: usize },

    #[error("invalid option: {0}")]
    InvalidOption(String),

    #[error("region {x},{y} {width}x{height} lies outside the {image_width}x{image_height} image")]
    RegionOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        image_width: u32,
        image_height: u32,
    },

    #[error(transparent)]
    Image(#[from] image::ImageError),
}
