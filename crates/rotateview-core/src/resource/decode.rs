//! Decoding of registered image bytes, with EXIF orientation applied.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageReader};

use super::{DecodedImage, ExifOrientation, ResourceError};

/// Decode PNG or JPEG bytes into an upright RGB image.
///
/// The EXIF orientation is applied before returning, so `width`/`height`
/// are the displayed dimensions. This matters for layout: a portrait photo
/// stored sideways must still be hinged as a portrait image.
///
/// # Errors
///
/// Returns `ResourceError::InvalidFormat` if the format cannot be guessed,
/// `ResourceError::CorruptedFile` if decoding fails, and
/// `ResourceError::EmptyImage` if the image has no pixels.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, ResourceError> {
    let orientation = read_orientation(bytes);

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| ResourceError::CorruptedFile(e.to_string()))?;
    if reader.format().is_none() {
        return Err(ResourceError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| ResourceError::CorruptedFile(e.to_string()))?;

    let decoded = DecodedImage::from_rgb_image(apply_orientation(img, orientation).into_rgb8());
    if decoded.is_empty() {
        return Err(ResourceError::EmptyImage);
    }
    Ok(decoded)
}

/// Read the EXIF orientation tag, defaulting to `Normal` when absent.
pub fn read_orientation(bytes: &[u8]) -> ExifOrientation {
    let mut cursor = Cursor::new(bytes);
    Reader::new()
        .read_from_container(&mut cursor)
        .ok()
        .and_then(|exif| {
            exif.get_field(Tag::Orientation, In::PRIMARY)
                .and_then(|field| field.value.get_uint(0))
        })
        .map(ExifOrientation::from)
        .unwrap_or_default()
}

fn apply_orientation(img: DynamicImage, orientation: ExifOrientation) -> DynamicImage {
    match orientation {
        ExifOrientation::Normal => img,
        ExifOrientation::FlipHorizontal => img.fliph(),
        ExifOrientation::Rotate180 => img.rotate180(),
        ExifOrientation::FlipVertical => img.flipv(),
        ExifOrientation::Transpose => img.rotate90().fliph(),
        ExifOrientation::Rotate90CW => img.rotate90(),
        ExifOrientation::Transverse => img.rotate270().fliph(),
        ExifOrientation::Rotate270CW => img.rotate270(),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::io::Cursor;

    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

    /// Encode a `width` x `height` image with a left-to-right gradient.
    pub fn encoded(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, _| {
            Rgb([(x * 255 / width.max(1)) as u8, 64, 200])
        });
        let mut bytes = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img)
            .write_to(&mut bytes, format)
            .expect("encode fixture");
        bytes.into_inner()
    }

    pub fn png(width: u32, height: u32) -> Vec<u8> {
        encoded(width, height, ImageFormat::Png)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageFormat;

    #[test]
    fn test_decode_png() {
        let img = decode_image(&fixtures::png(40, 20)).unwrap();
        assert_eq!(img.width, 40);
        assert_eq!(img.height, 20);
        assert_eq!(img.pixels.len(), 40 * 20 * 3);
    }

    #[test]
    fn test_decode_jpeg() {
        let img = decode_image(&fixtures::encoded(16, 32, ImageFormat::Jpeg)).unwrap();
        assert_eq!((img.width, img.height), (16, 32));
    }

    #[test]
    fn test_decode_garbage() {
        let result = decode_image(&[0x00, 0x01, 0x02, 0x03]);
        assert!(matches!(result, Err(ResourceError::InvalidFormat)));
    }

    #[test]
    fn test_decode_empty_bytes() {
        assert!(decode_image(&[]).is_err());
    }

    #[test]
    fn test_decode_truncated_png() {
        let bytes = fixtures::png(40, 20);
        let result = decode_image(&bytes[..bytes.len() / 2]);
        assert!(matches!(result, Err(ResourceError::CorruptedFile(_))));
    }

    #[test]
    fn test_orientation_without_exif() {
        assert_eq!(read_orientation(&fixtures::png(4, 4)), ExifOrientation::Normal);
        assert_eq!(read_orientation(&[]), ExifOrientation::Normal);
    }

    #[test]
    fn test_apply_orientation_swaps_dimensions() {
        let img = DynamicImage::new_rgb8(40, 20);
        let rotated = apply_orientation(img.clone(), ExifOrientation::Rotate90CW);
        assert_eq!((rotated.width(), rotated.height()), (20, 40));

        let flipped = apply_orientation(img, ExifOrientation::FlipHorizontal);
        assert_eq!((flipped.width(), flipped.height()), (40, 20));
    }
}
