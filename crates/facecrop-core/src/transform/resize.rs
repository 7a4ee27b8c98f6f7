//! Exact-size resizing using the `image` crate's algorithms.

use serde::{Deserialize, Serialize};

use crate::error::TransformError;
use crate::frame::Frame;

/// Interpolation filter for resize operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationFilter {
    /// Fast bilinear interpolation.
    #[default]
    Bilinear,
    /// High-quality Lanczos3 interpolation.
    Lanczos3,
}

impl InterpolationFilter {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            InterpolationFilter::Bilinear => image::imageops::FilterType::Triangle,
            InterpolationFilter::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Resize an image to exact dimensions.
///
/// # Errors
///
/// Returns `TransformError::InvalidDimensions` for a zero target dimension,
/// or a buffer error if the source frame cannot be converted.
pub fn resize(
    image: &Frame,
    width: u32,
    height: u32,
    filter: InterpolationFilter,
) -> Result<Frame, TransformError> {
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidDimensions { width, height });
    }

    image.validate()?;

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let rgb_image = image.to_rgb_image()?;
    let resized = image::imageops::resize(&rgb_image, width, height, filter.to_image_filter());

    Ok(Frame::from_rgb_image(resized))
}
