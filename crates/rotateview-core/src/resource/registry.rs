//! Handle-to-image registry.
//!
//! Plays the role of the host's resource table: the widget only ever holds
//! integer handles, and looks them up here when it needs pixels or an
//! intrinsic size. Handle [`PLACEHOLDER_IMAGE`] is always present.

use std::collections::HashMap;

use super::{decode_image, DecodedImage, FilterType, ResourceError, ResourceId};
use crate::geometry::Size;

/// Handle of the built-in placeholder icon.
pub const PLACEHOLDER_IMAGE: ResourceId = 0;

/// Side of the square placeholder icon.
pub const PLACEHOLDER_SIDE: u32 = 48;

const PLACEHOLDER_COLOR: [u8; 3] = [0x3d, 0xdc, 0x84];

/// Registered images by handle.
#[derive(Debug, Clone)]
pub struct ResourceRegistry {
    images: HashMap<ResourceId, DecodedImage>,
}

impl Default for ResourceRegistry {
    fn default() -> Self {
        let mut images = HashMap::new();
        images.insert(
            PLACEHOLDER_IMAGE,
            DecodedImage::solid(PLACEHOLDER_SIDE, PLACEHOLDER_SIDE, PLACEHOLDER_COLOR),
        );
        Self { images }
    }
}

impl ResourceRegistry {
    /// Create a registry holding only the placeholder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an already decoded image, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::EmptyImage` if the image has no pixels.
    pub fn register(&mut self, id: ResourceId, image: DecodedImage) -> Result<Size, ResourceError> {
        if image.is_empty() {
            return Err(ResourceError::EmptyImage);
        }
        let size = image.size();
        self.images.insert(id, image);
        Ok(size)
    }

    /// Decode PNG/JPEG bytes and register them under `id`.
    ///
    /// On error the previous registration for `id`, if any, is kept.
    pub fn register_bytes(&mut self, id: ResourceId, bytes: &[u8]) -> Result<Size, ResourceError> {
        let image = decode_image(bytes)?;
        self.register(id, image)
    }

    /// Remove a registration. The placeholder cannot be removed.
    pub fn unregister(&mut self, id: ResourceId) -> Option<DecodedImage> {
        if id == PLACEHOLDER_IMAGE {
            return None;
        }
        self.images.remove(&id)
    }

    pub fn contains(&self, id: ResourceId) -> bool {
        self.images.contains_key(&id)
    }

    /// Look up an image.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::UnknownResource` if nothing is registered under `id`.
    pub fn get(&self, id: ResourceId) -> Result<&DecodedImage, ResourceError> {
        self.images
            .get(&id)
            .ok_or(ResourceError::UnknownResource(id))
    }

    /// Intrinsic size of a registered image.
    pub fn intrinsic_size(&self, id: ResourceId) -> Result<Size, ResourceError> {
        self.get(id).map(DecodedImage::size)
    }

    /// Scale a registered image to exactly `size`.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::UnknownResource` for unknown handles and
    /// `ResourceError::EmptyImage` for a zero target size.
    pub fn render(
        &self,
        id: ResourceId,
        size: Size,
        filter: FilterType,
    ) -> Result<DecodedImage, ResourceError> {
        scale_to(self.get(id)?, size, filter)
    }
}

/// Scale an image to exact dimensions.
pub fn scale_to(
    image: &DecodedImage,
    size: Size,
    filter: FilterType,
) -> Result<DecodedImage, ResourceError> {
    if size.is_empty() {
        return Err(ResourceError::EmptyImage);
    }

    // Fast path: already the right size
    if image.size() == size {
        return Ok(image.clone());
    }

    let rgb = image
        .to_rgb_image()
        .ok_or_else(|| ResourceError::CorruptedFile("Pixel buffer size mismatch".to_string()))?;
    let scaled = image::imageops::resize(&rgb, size.width, size.height, filter.to_image_filter());

    Ok(DecodedImage::from_rgb_image(scaled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::fixtures;

    #[test]
    fn test_placeholder_always_present() {
        let registry = ResourceRegistry::new();
        assert!(registry.contains(PLACEHOLDER_IMAGE));
        assert_eq!(
            registry.intrinsic_size(PLACEHOLDER_IMAGE).unwrap(),
            Size::square(PLACEHOLDER_SIDE)
        );
    }

    #[test]
    fn test_placeholder_cannot_be_removed() {
        let mut registry = ResourceRegistry::new();
        assert!(registry.unregister(PLACEHOLDER_IMAGE).is_none());
        assert!(registry.contains(PLACEHOLDER_IMAGE));
    }

    #[test]
    fn test_register_bytes() {
        let mut registry = ResourceRegistry::new();
        let size = registry.register_bytes(7, &fixtures::png(30, 60)).unwrap();

        assert_eq!(size, Size::new(30, 60));
        assert_eq!(registry.intrinsic_size(7).unwrap(), Size::new(30, 60));
    }

    #[test]
    fn test_register_bad_bytes_keeps_previous() {
        let mut registry = ResourceRegistry::new();
        registry.register_bytes(7, &fixtures::png(30, 60)).unwrap();

        assert!(registry.register_bytes(7, b"not an image").is_err());
        assert_eq!(registry.intrinsic_size(7).unwrap(), Size::new(30, 60));
    }

    #[test]
    fn test_register_empty_image() {
        let mut registry = ResourceRegistry::new();
        let result = registry.register(3, DecodedImage::new(0, 0, vec![]));
        assert!(matches!(result, Err(ResourceError::EmptyImage)));
        assert!(!registry.contains(3));
    }

    #[test]
    fn test_unknown_resource() {
        let registry = ResourceRegistry::new();
        assert!(matches!(
            registry.get(99),
            Err(ResourceError::UnknownResource(99))
        ));
    }

    #[test]
    fn test_unregister() {
        let mut registry = ResourceRegistry::new();
        registry
            .register(5, DecodedImage::solid(2, 2, [0, 0, 0]))
            .unwrap();
        assert!(registry.unregister(5).is_some());
        assert!(!registry.contains(5));
    }

    #[test]
    fn test_render_scales() {
        let registry = ResourceRegistry::new();
        let frame = registry
            .render(PLACEHOLDER_IMAGE, Size::new(100, 100), FilterType::Bilinear)
            .unwrap();

        assert_eq!(frame.size(), Size::new(100, 100));
        assert_eq!(frame.pixels.len(), 100 * 100 * 3);
        // Solid color survives scaling
        assert_eq!(&frame.pixels[..3], &PLACEHOLDER_COLOR);
    }

    #[test]
    fn test_render_same_size_fast_path() {
        let registry = ResourceRegistry::new();
        let frame = registry
            .render(
                PLACEHOLDER_IMAGE,
                Size::square(PLACEHOLDER_SIDE),
                FilterType::Lanczos3,
            )
            .unwrap();
        assert_eq!(&frame, registry.get(PLACEHOLDER_IMAGE).unwrap());
    }

    #[test]
    fn test_render_zero_size() {
        let registry = ResourceRegistry::new();
        let result = registry.render(PLACEHOLDER_IMAGE, Size::new(0, 10), FilterType::Nearest);
        assert!(matches!(result, Err(ResourceError::EmptyImage)));
    }

    #[test]
    fn test_render_unknown() {
        let registry = ResourceRegistry::new();
        let result = registry.render(1, Size::new(10, 10), FilterType::Nearest);
        assert!(matches!(result, Err(ResourceError::UnknownResource(1))));
    }
}
