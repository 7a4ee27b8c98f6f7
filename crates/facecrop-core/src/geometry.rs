//! Point, size and offset descriptors plus the scalar helpers built on them.
//!
//! Coordinates are in pixels with the origin at the top-left corner and
//! y growing downwards.

use serde::{Deserialize, Serialize};

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset this point by (dx, dy).
    pub fn shifted(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Target extent of an image, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Uniformly scale both dimensions.
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(200.0, 200.0)
    }
}

/// Fractional margin, expressed as a proportion of the crop size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Margin in whole pixels for the given crop size (floored).
    pub fn to_pixels(self, size: Size) -> (f64, f64) {
        (
            (self.x * size.width).floor(),
            (self.y * size.height).floor(),
        )
    }
}

impl Default for Offset {
    fn default() -> Self {
        Self::new(0.2, 0.2)
    }
}

/// Euclidean distance between two points.
pub fn distance(p1: Point, p2: Point) -> f64 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    (dx * dx + dy * dy).sqrt()
}

/// Angle in radians of the eye line, negated: `-atan2(dy, dx)`.
///
/// Zero when both eyes sit on the same row. Rotating the image
/// counter-clockwise by `-angle` about the left eye levels the eyes.
pub fn eye_alignment_angle(left_eye: Point, right_eye: Point) -> f64 {
    let dx = right_eye.x - left_eye.x;
    let dy = right_eye.y - left_eye.y;
    -dy.atan2(dx)
}
