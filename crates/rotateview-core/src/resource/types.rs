//! Core types for image resources.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Size;

/// Integer handle identifying an image resource.
pub type ResourceId = i32;

/// Error types for image resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// No resource is registered under the handle.
    #[error("Unknown image resource: {0}")]
    UnknownResource(ResourceId),

    /// The bytes are not in a recognized image format.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image data is corrupted or incomplete.
    #[error("Corrupted or incomplete image data: {0}")]
    CorruptedFile(String),

    /// The image decoded to zero pixels, or a zero target size was requested.
    #[error("Image has no pixels")]
    EmptyImage,
}

/// Filter type for scaling a resource to its laid-out size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Nearest neighbor (fastest, blocky).
    Nearest,
    /// Bilinear (fast, smooth enough while dragging).
    #[default]
    Bilinear,
    /// Lanczos3 (slowest, sharpest).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// EXIF orientation tag, read from registered JPEGs so their intrinsic
/// size is the size they are displayed at.
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExifOrientation {
    /// 1, and any value outside 1-8.
    #[default]
    Normal,
    /// 2
    FlipHorizontal,
    /// 3
    Rotate180,
    /// 4
    FlipVertical,
    /// 5: flip horizontal + rotate 270 CW.
    Transpose,
    /// 6
    Rotate90CW,
    /// 7: flip horizontal + rotate 90 CW.
    Transverse,
    /// 8
    Rotate270CW,
}

impl From<u32> for ExifOrientation {
    fn from(value: u32) -> Self {
        match value {
            2 => ExifOrientation::FlipHorizontal,
            3 => ExifOrientation::Rotate180,
            4 => ExifOrientation::FlipVertical,
            5 => ExifOrientation::Transpose,
            6 => ExifOrientation::Rotate90CW,
            7 => ExifOrientation::Transverse,
            8 => ExifOrientation::Rotate270CW,
            _ => ExifOrientation::Normal,
        }
    }
}

/// A decoded image with RGB pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width * height * 3) as usize,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// A `width` x `height` image filled with one color.
    pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let pixels = rgb
            .iter()
            .copied()
            .cycle()
            .take((width * height * 3) as usize)
            .collect();
        Self::new(width, height, pixels)
    }

    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Intrinsic size, used to lay the image out.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}
