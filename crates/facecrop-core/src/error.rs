//! Error types for pixel-level transform operations.

use thiserror::Error;

/// Error types for warp, region and resize operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransformError {
    /// The source frame has no pixels.
    #[error("Image is empty")]
    EmptyImage,

    /// The pixel buffer length does not match the frame dimensions.
    #[error("Pixel buffer of {actual} bytes does not match {width}x{height} RGB image")]
    BufferMismatch {
        width: u32,
        height: u32,
        actual: usize,
    },

    /// The requested rectangle is not fully inside the image.
    #[error(
        "Region {width}x{height} at ({x}, {y}) is outside image bounds ({image_width}x{image_height})"
    )]
    RegionOutOfBounds {
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        image_width: u32,
        image_height: u32,
    },

    /// The affine matrix has no inverse, so it cannot be resampled.
    #[error("Affine transform is singular")]
    SingularTransform,

    /// Target dimensions are zero.
    #[error("Invalid target dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}
