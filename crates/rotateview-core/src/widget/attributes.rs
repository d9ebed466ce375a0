//! Construction-time attributes.

use serde::{Deserialize, Serialize};

use crate::resource::{ResourceId, PLACEHOLDER_IMAGE};

/// Attributes a host supplies when creating a widget.
///
/// Every field is optional when deserializing; missing fields fall back to
/// their defaults, so `{}` and `{"angle": 30}` are both valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RotateViewAttributes {
    /// Initial angle in whole degrees.
    pub angle: i32,
    /// Initial image handle.
    pub image: ResourceId,
}

impl Default for RotateViewAttributes {
    fn default() -> Self {
        Self {
            angle: 0,
            image: PLACEHOLDER_IMAGE,
        }
    }
}

impl RotateViewAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_angle(mut self, angle: i32) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_image(mut self, image: ResourceId) -> Self {
        self.image = image;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let attrs = RotateViewAttributes::new();
        assert_eq!(attrs.angle, 0);
        assert_eq!(attrs.image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_builders() {
        let attrs = RotateViewAttributes::new().with_angle(60).with_image(3);
        assert_eq!(attrs.angle, 60);
        assert_eq!(attrs.image, 3);
    }
}
