//! 2x3 affine matrices.
//!
//! A transform maps a source pixel coordinate to a destination one:
//! ```text
//! [a b c]     [x]     [x']
//! [d e f]  ×  [y]  =  [y']
//!             [1]
//! ```
//!
//! Rotation matrices follow the usual image-processing layout: positive
//! angles rotate counter-clockwise on screen (y pointing down).

use crate::geometry::Point;

/// Determinants smaller than this are treated as singular.
const SINGULAR_EPSILON: f64 = 1e-12;

/// A 2x3 affine transform, stored row-major as `[a, b, c, d, e, f]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    pub m: [f64; 6],
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineTransform {
    pub fn new(m: [f64; 6]) -> Self {
        Self { m }
    }

    pub fn identity() -> Self {
        Self::new([1.0, 0.0, 0.0, 0.0, 1.0, 0.0])
    }

    /// Rotation by `angle_degrees` combined with uniform `scale`, both about `center`.
    pub fn rotation(center: Point, angle_degrees: f64, scale: f64) -> Self {
        let angle_rad = angle_degrees.to_radians();
        let alpha = scale * angle_rad.cos();
        let beta = scale * angle_rad.sin();

        Self::new([
            alpha,
            beta,
            (1.0 - alpha) * center.x - beta * center.y,
            -beta,
            alpha,
            beta * center.x + (1.0 - alpha) * center.y,
        ])
    }

    /// The unique affine transform mapping each `src[i]` onto `dst[i]`.
    ///
    /// Returns `None` when the source points are collinear.
    pub fn from_triangles(src: [Point; 3], dst: [Point; 3]) -> Option<Self> {
        // Edge vectors of both triangles, relative to their first vertex
        let (u1x, u1y) = (src[1].x - src[0].x, src[1].y - src[0].y);
        let (u2x, u2y) = (src[2].x - src[0].x, src[2].y - src[0].y);
        let (v1x, v1y) = (dst[1].x - dst[0].x, dst[1].y - dst[0].y);
        let (v2x, v2y) = (dst[2].x - dst[0].x, dst[2].y - dst[0].y);

        let det = u1x * u2y - u2x * u1y;
        if det.abs() < SINGULAR_EPSILON {
            return None;
        }

        let a = (v1x * u2y - v2x * u1y) / det;
        let b = (v2x * u1x - v1x * u2x) / det;
        let d = (v1y * u2y - v2y * u1y) / det;
        let e = (v2y * u1x - v1y * u2x) / det;
        let c = dst[0].x - (a * src[0].x + b * src[0].y);
        let f = dst[0].y - (d * src[0].x + e * src[0].y);

        Some(Self::new([a, b, c, d, e, f]))
    }

    /// Inverse transform, or `None` if the linear part is singular.
    pub fn inverse(&self) -> Option<Self> {
        let [a, b, c, d, e, f] = self.m;
        let det = a * e - b * d;
        if det.abs() < SINGULAR_EPSILON || !det.is_finite() {
            return None;
        }

        let ia = e / det;
        let ib = -b / det;
        let id = -d / det;
        let ie = a / det;

        Some(Self::new([
            ia,
            ib,
            -(ia * c + ib * f),
            id,
            ie,
            -(id * c + ie * f),
        ]))
    }

    /// Map a point through the transform.
    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        let [a, b, c, d, e, f] = self.m;
        Point::new(a * p.x + b * p.y + c, d * p.x + e * p.y + f)
    }

    pub fn is_identity(&self) -> bool {
        let id = Self::identity();
        self.m
            .iter()
            .zip(id.m.iter())
            .all(|(x, y)| (x - y).abs() < 1e-12)
    }

    pub fn is_finite(&self) -> bool {
        self.m.iter().all(|v| v.is_finite())
    }
}
