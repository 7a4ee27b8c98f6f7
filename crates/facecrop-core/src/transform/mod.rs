//! Geometric image transforms: affine warps, rotation, region extraction
//! and resizing.
//!
//! # Coordinate System
//!
//! - Coordinates are in pixels, origin at the top-left corner, y down
//! - Rotation angles are in degrees, positive = counter-clockwise
//! - Out-of-image samples are filled with black

mod affine;
mod region;
mod resize;
mod rotation;
mod warp;

pub use affine::AffineTransform;
pub use region::extract_region;
pub use resize::{resize, InterpolationFilter};
pub use rotation::{rotate, rotate_scale, scale_rotate_translate, translate, SrtTransform};
pub use warp::warp_affine;
