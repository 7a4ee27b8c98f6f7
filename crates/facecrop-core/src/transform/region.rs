//! Pixel-rectangle extraction.
//!
//! Unlike a clamping crop, the rectangle here must lie entirely inside the
//! image; anything else is reported as `RegionOutOfBounds`.

use crate::error::TransformError;
use crate::frame::Frame;

/// Copy the `width` x `height` rectangle whose top-left corner is (`x`, `y`).
///
/// # Errors
///
/// - `RegionOutOfBounds` if the origin is negative, the extent is empty,
///   or the rectangle extends past the right or bottom edge
/// - `EmptyImage` / `BufferMismatch` if the source frame is invalid
pub fn extract_region(
    image: &Frame,
    x: i64,
    y: i64,
    width: i64,
    height: i64,
) -> Result<Frame, TransformError> {
    image.validate()?;

    let fits = x >= 0
        && y >= 0
        && width > 0
        && height > 0
        && x
            .checked_add(width)
            .is_some_and(|right| right <= image.width as i64)
        && y
            .checked_add(height)
            .is_some_and(|bottom| bottom <= image.height as i64);
    if !fits {
        return Err(TransformError::RegionOutOfBounds {
            x,
            y,
            width,
            height,
            image_width: image.width,
            image_height: image.height,
        });
    }

    let (x, y) = (x as usize, y as usize);
    let (out_width, out_height) = (width as usize, height as usize);
    let src_stride = image.width as usize * 3;
    let row_bytes = out_width * 3;

    let mut pixels = Vec::with_capacity(row_bytes * out_height);

    // Copy pixel data row by row
    for row in 0..out_height {
        let start = (y + row) * src_stride + x * 3;
        pixels.extend_from_slice(&image.pixels[start..start + row_bytes]);
    }

    Ok(Frame::new(out_width as u32, out_height as u32, pixels))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
