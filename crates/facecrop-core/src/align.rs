//! Face normalisation from eye landmarks.
//!
//! A face is aligned in four steps:
//! 1. Compute the eye-line angle and the scale that maps the inter-eye
//!    distance onto the crop width minus its horizontal margins
//! 2. Rotate the image about the left eye so both eyes share a row
//! 3. Cut the scaled crop rectangle around the left eye
//! 4. Resize the cut to the requested crop size
//!
//! [`crop_face`] reports why a face was rejected; [`crop`] logs the reason
//! and returns `None` for callers that simply skip the face.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::TransformError;
use crate::frame::Frame;
use crate::geometry::{distance, eye_alignment_angle, Offset, Point, Size};
use crate::transform::{
    extract_region, resize, scale_rotate_translate, AffineTransform, InterpolationFilter,
    SrtTransform,
};

/// Crops narrower or shorter than this many pixels are rejected.
pub const MIN_CROP_EXTENT: f64 = 50.0;

/// Why a face could not be cropped.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AlignError {
    /// The crop rectangle in the source image is below the minimum extent.
    #[error("Crop extent {width:.1}x{height:.1} is below the {min} px minimum")]
    TooSmall { width: f64, height: f64, min: f64 },

    /// The crop rectangle is not fully inside the rotated image.
    #[error("Crop rectangle is outside the aligned image: {0}")]
    OutOfBounds(TransformError),

    /// The landmarks or crop parameters do not define a usable crop.
    #[error("Degenerate crop geometry: {0}")]
    Degenerate(String),

    /// Unexpected failure while warping, cutting or resizing.
    #[error(transparent)]
    Transform(#[from] TransformError),
}

impl AlignError {
    /// True for geometric rejections, false for internal faults.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, AlignError::Transform(_))
    }
}

/// Crop parameters for a batch of faces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropConfig {
    /// Margin around the eyes, as a fraction of the crop size.
    pub offset: Offset,
    /// Output size in pixels.
    pub crop_size: Size,
    /// Minimum crop extent in the source image, in pixels.
    pub min_extent: f64,
    /// Interpolation used for the final resize.
    pub filter: InterpolationFilter,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            offset: Offset::default(),
            crop_size: Size::default(),
            min_extent: MIN_CROP_EXTENT,
            filter: InterpolationFilter::Bilinear,
        }
    }
}

/// Crop placement computed from a pair of eye landmarks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropGeometry {
    /// Pivot of the levelling rotation.
    pub left_eye: Point,
    /// Eye-line angle in radians, `-atan2(dy, dx)`.
    pub angle: f64,
    /// Source pixels per output pixel.
    pub scale: f64,
    /// Top-left corner of the crop rectangle in the rotated image.
    pub origin: Point,
    /// Extent of the crop rectangle in the rotated image.
    pub extent: Size,
}

impl CropGeometry {
    /// Counter-clockwise rotation in degrees that levels the eyes.
    pub fn level_degrees(&self) -> f64 {
        (-self.angle).to_degrees()
    }

    /// The levelling rotation as an affine transform.
    pub fn rotation(&self) -> AffineTransform {
        AffineTransform::rotation(self.left_eye, self.level_degrees(), 1.0)
    }
}

impl CropConfig {
    pub fn new(offset: Offset, crop_size: Size) -> Self {
        Self {
            offset,
            crop_size,
            ..Self::default()
        }
    }

    /// Compute where the face will be cut from, without touching pixels.
    pub fn geometry(&self, left_eye: Point, right_eye: Point) -> Result<CropGeometry, AlignError> {
        let size = self.crop_size;
        let max_side = u32::MAX as f64;
        let usable = (1.0..=max_side).contains(&size.width)
            && (1.0..=max_side).contains(&size.height);
        if !usable {
            return Err(AlignError::Degenerate(format!(
                "crop size {}x{} must be between 1x1 and {max_side}x{max_side}",
                size.width, size.height
            )));
        }
        if !self.min_extent.is_finite() {
            return Err(AlignError::Degenerate(format!(
                "minimum extent {} is not finite",
                self.min_extent
            )));
        }
        if !left_eye.is_finite() || !right_eye.is_finite() {
            return Err(AlignError::Degenerate(
                "eye landmarks must be finite".to_string(),
            ));
        }

        let (offset_x, offset_y) = self.offset.to_pixels(size);
        let reference = size.width - 2.0 * offset_x;
        if reference <= 0.0 {
            return Err(AlignError::Degenerate(format!(
                "horizontal offset {} leaves no room between the eyes",
                self.offset.x
            )));
        }

        let angle = eye_alignment_angle(left_eye, right_eye);
        let scale = distance(left_eye, right_eye) / reference;

        let origin = Point::new(left_eye.x - scale * offset_x, left_eye.y - scale * offset_y);
        let extent = size.scaled(scale);
        if !origin.is_finite() || !extent.width.is_finite() || !extent.height.is_finite() {
            return Err(AlignError::Degenerate(format!(
                "crop rectangle is not finite (scale {})",
                scale
            )));
        }

        Ok(CropGeometry {
            left_eye,
            angle,
            scale,
            origin,
            extent,
        })
    }

    /// Align and crop a face.
    ///
    /// On success the returned frame has exactly `crop_size` dimensions.
    pub fn crop(
        &self,
        image: &Frame,
        left_eye: Point,
        right_eye: Point,
    ) -> Result<Frame, AlignError> {
        let geometry = self.geometry(left_eye, right_eye)?;

        tracing::debug!(
            "Face crop: angle={:.4} rad, scale={:.4}, origin=({:.1}, {:.1}), extent={:.1}x{:.1}",
            geometry.angle,
            geometry.scale,
            geometry.origin.x,
            geometry.origin.y,
            geometry.extent.width,
            geometry.extent.height
        );

        if geometry.extent.width < self.min_extent || geometry.extent.height < self.min_extent {
            return Err(AlignError::TooSmall {
                width: geometry.extent.width,
                height: geometry.extent.height,
                min: self.min_extent,
            });
        }

        // Only rotation is applied here; the scale is folded into the crop rectangle
        let aligned = scale_rotate_translate(
            image,
            SrtTransform::RotateScale {
                angle_degrees: geometry.level_degrees(),
                center: left_eye,
                scale: 1.0,
            },
        )?;

        let region = extract_region(
            &aligned,
            geometry.origin.x as i64,
            geometry.origin.y as i64,
            geometry.extent.width as i64,
            geometry.extent.height as i64,
        )
        .map_err(|err| match err {
            TransformError::RegionOutOfBounds { .. } => AlignError::OutOfBounds(err),
            other => AlignError::Transform(other),
        })?;

        let out = resize(
            &region,
            self.crop_size.width as u32,
            self.crop_size.height as u32,
            self.filter,
        )?;

        Ok(out)
    }
}

/// Align and crop a face using the default minimum extent and filter.
pub fn crop_face(
    image: &Frame,
    left_eye: Point,
    right_eye: Point,
    offset: Offset,
    crop_size: Size,
) -> Result<Frame, AlignError> {
    CropConfig::new(offset, crop_size).crop(image, left_eye, right_eye)
}

/// Like [`crop_face`], but logs the failure and returns `None`.
pub fn crop(
    image: &Frame,
    left_eye: Point,
    right_eye: Point,
    offset: Offset,
    crop_size: Size,
) -> Option<Frame> {
    match crop_face(image, left_eye, right_eye, offset, crop_size) {
        Ok(frame) => Some(frame),
        Err(err) => {
            tracing::warn!("Skipping face crop: {}", err);
            None
        }
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Property: a successful crop always has exactly the requested size.
        #[test]
        fn prop_successful_crop_has_crop_size(
            lx in 20.0f64..140.0,
            ly in 20.0f64..140.0,
            dx in 10.0f64..120.0,
            dy in -40.0f64..40.0,
            (cw, ch) in (60u32..=120, 60u32..=120),
        ) {
            let img = Frame::black(240, 240);
            let size = Size::new(cw as f64, ch as f64);
            let left = Point::new(lx, ly);
            let right = Point::new(lx + dx, ly + dy);

            match crop_face(&img, left, right, Offset::new(0.2, 0.25), size) {
                Ok(frame) => {
                    prop_assert_eq!(frame.width, cw);
                    prop_assert_eq!(frame.height, ch);
                }
                Err(err) => prop_assert!(err.is_rejection(), "unexpected fault: {err}"),
            }
        }

        /// Property: crops below the minimum extent are always rejected.
        #[test]
        fn prop_small_extent_rejected(
            dx in 1.0f64..20.0,
            dy in -5.0f64..5.0,
        ) {
            let img = Frame::black(300, 300);
            let left = Point::new(150.0, 150.0);
            let right = Point::new(150.0 + dx, 150.0 + dy);

            // Reference width is 120px, so any distance under 30px gives an extent under 50px
            let result = crop(&img, left, right, Offset::new(0.2, 0.2), Size::new(200.0, 200.0));
            prop_assert!(result.is_none());
        }
    }
}
