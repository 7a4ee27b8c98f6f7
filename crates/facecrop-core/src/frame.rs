//! Owned RGB pixel buffer shared by all transforms.

use crate::error::TransformError;

/// An RGB image owned by the caller.
///
/// Transforms borrow a `Frame` and return a newly allocated one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    /// Length should be width * height * 3.
    pub pixels: Vec<u8>,
}

impl Frame {
    /// Create a new Frame with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * 3,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a black frame.
    pub fn black(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u8; width as usize * height as usize * 3],
        }
    }

    /// Create a Frame from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a Frame from any image the `image` crate can represent.
    pub fn from_dynamic(img: &image::DynamicImage) -> Self {
        Self::from_rgb_image(img.to_rgb8())
    }

    /// Convert to an image::RgbImage for further processing.
    pub fn to_rgb_image(&self) -> Result<image::RgbImage, TransformError> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone()).ok_or(
            TransformError::BufferMismatch {
                width: self.width,
                height: self.height,
                actual: self.pixels.len(),
            },
        )
    }

    /// Check that the buffer length matches the dimensions.
    pub fn validate(&self) -> Result<(), TransformError> {
        if self.is_empty() {
            return Err(TransformError::EmptyImage);
        }
        if self.pixels.len() != self.width as usize * self.height as usize * 3 {
            return Err(TransformError::BufferMismatch {
                width: self.width,
                height: self.height,
                actual: self.pixels.len(),
            });
        }
        Ok(())
    }

    /// Length of the longer side.
    pub fn longer_side(&self) -> u32 {
        self.width.max(self.height)
    }

    /// RGB value at (x, y), or None outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        self.pixels
            .get(idx..idx + 3)
            .map(|p| [p[0], p[1], p[2]])
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_creation() {
        let pixels = vec![0u8; 100 * 50 * 3];
        let frame = Frame::new(100, 50, pixels);

        assert_eq!(frame.width, 100);
        assert_eq!(frame.height, 50);
        assert_eq!(frame.longer_side(), 100);
        assert!(!frame.is_empty());
        assert!(frame.validate().is_ok());
    }

    #[test]
    fn test_frame_empty() {
        let frame = Frame::new(0, 0, vec![]);
        assert!(frame.is_empty());
        assert_eq!(frame.validate(), Err(TransformError::EmptyImage));
    }

    #[test]
    fn test_buffer_mismatch_detected() {
        let frame = Frame {
            width: 4,
            height: 4,
            pixels: vec![0u8; 10],
        };
        assert!(matches!(
            frame.validate(),
            Err(TransformError::BufferMismatch { actual: 10, .. })
        ));
        assert!(frame.to_rgb_image().is_err());
    }

    #[test]
    fn test_pixel_lookup() {
        let mut frame = Frame::black(3, 2);
        // row 1, column 2
        let idx = (frame.width as usize + 2) * 3;
        frame.pixels[idx] = 10;
        frame.pixels[idx + 1] = 20;
        frame.pixels[idx + 2] = 30;

        assert_eq!(frame.pixel(2, 1), Some([10, 20, 30]));
        assert_eq!(frame.pixel(0, 0), Some([0, 0, 0]));
        assert_eq!(frame.pixel(3, 0), None);
        assert_eq!(frame.pixel(0, 2), None);
    }

    #[test]
    fn test_rgb_image_conversion() {
        let img = image::RgbImage::from_fn(5, 4, |x, y| image::Rgb([x as u8, y as u8, 7]));
        let frame = Frame::from_rgb_image(img.clone());
        assert_eq!((frame.width, frame.height), (5, 4));
        assert_eq!(frame.pixel(3, 2), Some([3, 2, 7]));

        let back = frame.to_rgb_image().unwrap();
        assert_eq!(back, img);
    }

    #[test]
    fn test_from_dynamic_drops_alpha() {
        let rgba = image::RgbaImage::from_pixel(2, 2, image::Rgba([9, 8, 7, 128]));
        let frame = Frame::from_dynamic(&image::DynamicImage::ImageRgba8(rgba));
        assert_eq!(frame.pixels.len(), 2 * 2 * 3);
        assert_eq!(frame.pixel(1, 1), Some([9, 8, 7]));
    }
}
