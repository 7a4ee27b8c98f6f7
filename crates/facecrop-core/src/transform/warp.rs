//! Affine warping with bilinear interpolation.
//!
//! The warp uses inverse mapping: for each pixel in the output image we map
//! its coordinates back through the inverted transform and blend the four
//! source pixels around that location.
//!
//! Output pixels whose source falls outside the image are black.

use super::affine::AffineTransform;
use crate::error::TransformError;
use crate::frame::Frame;
use crate::geometry::Point;

/// Tolerance for source coordinates that land a rounding error past an edge.
const EDGE_EPSILON: f64 = 1e-6;

/// Warp `image` through `transform` into an `out_width` x `out_height` canvas.
///
/// # Errors
///
/// - `EmptyImage` / `BufferMismatch` if the source frame is invalid
/// - `InvalidDimensions` if the output canvas is empty
/// - `SingularTransform` if the transform cannot be inverted
pub fn warp_affine(
    image: &Frame,
    transform: &AffineTransform,
    out_width: u32,
    out_height: u32,
) -> Result<Frame, TransformError> {
    image.validate()?;
    if out_width == 0 || out_height == 0 {
        return Err(TransformError::InvalidDimensions {
            width: out_width,
            height: out_height,
        });
    }

    // Fast path: identity onto a same-sized canvas
    if transform.is_identity() && out_width == image.width && out_height == image.height {
        return Ok(image.clone());
    }

    let inverse = transform
        .inverse()
        .filter(AffineTransform::is_finite)
        .ok_or(TransformError::SingularTransform)?;

    let mut output = Frame::black(out_width, out_height);
    let row_bytes = out_width as usize * 3;

    for (dst_y, row) in output.pixels.chunks_exact_mut(row_bytes).enumerate() {
        for (dst_x, px) in row.chunks_exact_mut(3).enumerate() {
            let src = inverse.apply(Point::new(dst_x as f64, dst_y as f64));
            if let Some(rgb) = sample_bilinear(image, src) {
                px.copy_from_slice(&rgb);
            }
        }
    }

    Ok(output)
}

/// Channel values at integer coordinates, widened for blending.
#[inline]
fn texel(image: &Frame, px: usize, py: usize) -> [f64; 3] {
    let idx = (py * image.width as usize + px) * 3;
    let p = &image.pixels[idx..idx + 3];
    [p[0] as f64, p[1] as f64, p[2] as f64]
}

/// Blend the four pixels around `at`, or `None` when `at` lies outside the image.
///
/// Neighbours past the last row or column collapse onto the edge pixel, so a
/// sample exactly on a pixel returns that pixel unchanged.
fn sample_bilinear(image: &Frame, at: Point) -> Option<[u8; 3]> {
    let max_x = (image.width - 1) as f64;
    let max_y = (image.height - 1) as f64;

    let inside = (-EDGE_EPSILON..=max_x + EDGE_EPSILON).contains(&at.x)
        && (-EDGE_EPSILON..=max_y + EDGE_EPSILON).contains(&at.y);
    if !inside {
        return None;
    }

    let x = at.x.clamp(0.0, max_x);
    let y = at.y.clamp(0.0, max_y);

    let (x0, y0) = (x.floor() as usize, y.floor() as usize);
    let x1 = (x0 + 1).min(image.width as usize - 1);
    let y1 = (y0 + 1).min(image.height as usize - 1);
    let (fx, fy) = (x - x0 as f64, y - y0 as f64);

    let top = lerp(texel(image, x0, y0), texel(image, x1, y0), fx);
    let bottom = lerp(texel(image, x0, y1), texel(image, x1, y1), fx);
    let blended = lerp(top, bottom, fy);

    Some(blended.map(|v| v.clamp(0.0, 255.0).round() as u8))
}

#[inline]
fn lerp(a: [f64; 3], b: [f64; 3], t: f64) -> [f64; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}
