//! Facecrop Core - face alignment geometry
//!
//! This crate provides the geometric helpers used to normalise face images
//! before recognition: rotation, scale/rotate/translate warps, and cropping
//! a face to a fixed size from its two eye landmarks.

pub mod align;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod transform;

pub use align::{crop, crop_face, AlignError, CropConfig, CropGeometry, MIN_CROP_EXTENT};
pub use error::TransformError;
pub use frame::Frame;
pub use geometry::{distance, eye_alignment_angle, Offset, Point, Size};
pub use transform::{
    rotate, rotate_scale, scale_rotate_translate, translate, AffineTransform,
    InterpolationFilter, SrtTransform,
};
