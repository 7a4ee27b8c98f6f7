//! Rotation, rotate/scale and translation warps.
//!
//! All angles are in degrees, positive = counter-clockwise on screen.
//! Every operation here resamples with bilinear interpolation.

use super::affine::AffineTransform;
use super::warp::warp_affine;
use crate::error::TransformError;
use crate::frame::Frame;
use crate::geometry::Point;

/// Parameters for [`scale_rotate_translate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SrtTransform {
    /// Move `center` onto `new_center` without rotating or scaling.
    Translate { center: Point, new_center: Point },
    /// Rotate by `angle_degrees` and scale by `scale` about `center`.
    RotateScale {
        angle_degrees: f64,
        center: Point,
        scale: f64,
    },
}

/// Rotate an image about its center.
///
/// The output is a square canvas whose side equals the longer side of the
/// input. The canvas is anchored at the top-left corner, so a rotated
/// non-square image is not re-centered; uncovered pixels are black.
///
/// # Errors
///
/// Only fails for an invalid source frame; any angle is accepted.
pub fn rotate(image: &Frame, angle_degrees: f64) -> Result<Frame, TransformError> {
    image.validate()?;

    let length = image.longer_side();
    let center = Point::new(image.width as f64 / 2.0, image.height as f64 / 2.0);
    let matrix = AffineTransform::rotation(center, angle_degrees, 1.0);

    warp_affine(image, &matrix, length, length)
}

/// Rotate by `angle_degrees` and scale by `scale`, both about `center`.
///
/// The output keeps the input's dimensions.
pub fn rotate_scale(
    image: &Frame,
    angle_degrees: f64,
    center: Point,
    scale: f64,
) -> Result<Frame, TransformError> {
    let matrix = AffineTransform::rotation(center, angle_degrees, scale);
    warp_affine(image, &matrix, image.width, image.height)
}

/// Translate the image so that `center` lands on `new_center`.
///
/// The affine map is fitted through three non-collinear points anchored at
/// each center. The output keeps the input's dimensions.
pub fn translate(image: &Frame, center: Point, new_center: Point) -> Result<Frame, TransformError> {
    let src = [center, center.shifted(1.0, 0.0), center.shifted(0.0, 1.0)];
    let dst = [
        new_center,
        new_center.shifted(1.0, 0.0),
        new_center.shifted(0.0, 1.0),
    ];
    let matrix = AffineTransform::from_triangles(src, dst).ok_or(TransformError::SingularTransform)?;

    warp_affine(image, &matrix, image.width, image.height)
}

/// Apply either a translation or a rotate/scale, as described by `transform`.
pub fn scale_rotate_translate(
    image: &Frame,
    transform: SrtTransform,
) -> Result<Frame, TransformError> {
    match transform {
        SrtTransform::Translate { center, new_center } => translate(image, center, new_center),
        SrtTransform::RotateScale {
            angle_degrees,
            center,
            scale,
        } => rotate_scale(image, angle_degrees, center, scale),
    }
}
