//! What the host has to draw.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::layout::ImageLayout;
use crate::resource::{ResourceId, PLACEHOLDER_IMAGE};

/// Draw state of the widget after the last event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualState {
    /// Image currently displayed.
    pub image: ResourceId,
    /// Geometry from the last layout pass, `None` until first measured.
    pub layout: Option<ImageLayout>,
    /// Rotation applied to the image, in whole degrees about [`pivot`](Self::pivot).
    pub rotation: i32,
}

impl Default for VisualState {
    fn default() -> Self {
        Self {
            image: PLACEHOLDER_IMAGE,
            layout: None,
            rotation: 0,
        }
    }
}

impl VisualState {
    /// Rotation pivot in the image's local coordinates.
    ///
    /// Before the first layout there is no hinge yet, so the image origin is
    /// used.
    pub fn pivot(&self) -> Point {
        self.layout.map_or(Point::ORIGIN, |layout| layout.pivot)
    }

    pub fn is_laid_out(&self) -> bool {
        self.layout.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;

    #[test]
    fn test_default_pivot_is_origin() {
        let visual = VisualState::default();
        assert!(!visual.is_laid_out());
        assert_eq!(visual.pivot(), Point::ORIGIN);
    }

    #[test]
    fn test_pivot_from_layout() {
        let layout = ImageLayout::compute(Size::new(400, 400), Size::new(50, 100)).unwrap();
        let visual = VisualState {
            layout: Some(layout),
            ..Default::default()
        };
        assert_eq!(visual.pivot(), Point::new(50, 200));
    }
}
