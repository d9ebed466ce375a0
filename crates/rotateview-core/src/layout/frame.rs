//! Image, wrapper, pivot and center computation for one container size.

use serde::{Deserialize, Serialize};

use super::LayoutError;
use crate::geometry::{Orientation, Point, Size};

/// Where everything goes for a given container size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageLayout {
    /// Laid-out image size.
    pub image: Size,
    /// Top-left of the image inside the wrapper.
    pub image_offset: Point,
    /// Square wrapper the image sweeps inside.
    pub wrapper: Size,
    /// Hinge point in the image's local coordinates.
    pub pivot: Point,
    /// Center of the wrapper in wrapper coordinates. Touches are measured
    /// against this point.
    pub center: Point,
    /// Orientation of the laid-out image.
    pub orientation: Orientation,
}

impl ImageLayout {
    /// Lay out an image of `intrinsic` size inside a container of `parent` size.
    ///
    /// The image height becomes half the container's smaller side and the
    /// width follows the same scale factor, truncated to whole pixels.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::EmptyContainer` if `parent` has no area,
    /// `LayoutError::EmptyImage` if `intrinsic` has no area, and
    /// `LayoutError::Collapsed` if the scaled image would be empty, and
    /// `LayoutError::TooLarge` if the wrapper side would not fit in `i32`.
    pub fn compute(parent: Size, intrinsic: Size) -> Result<Self, LayoutError> {
        if parent.is_empty() {
            return Err(LayoutError::EmptyContainer {
                width: parent.width,
                height: parent.height,
            });
        }
        if intrinsic.is_empty() {
            return Err(LayoutError::EmptyImage);
        }

        let image = scale_image(parent, intrinsic);
        if image.is_empty() {
            return Err(LayoutError::Collapsed {
                width: parent.width,
                height: parent.height,
            });
        }

        let orientation = image.orientation();
        let long_axis = match orientation {
            Orientation::Portrait => image.height,
            Orientation::Landscape => image.width,
        };
        // The wrapper side must fit in i32 pixel coordinates
        let side = i32::try_from(long_axis)
            .ok()
            .and_then(|axis| axis.checked_mul(2))
            .ok_or(LayoutError::TooLarge {
                width: parent.width,
                height: parent.height,
            })?;
        let wrapper = Size::square(side as u32);
        let center = Point::new(side / 2, side / 2);

        // Both sides are at most the long axis, which fits
        let (w, h) = (image.width as i32, image.height as i32);
        let (pivot, image_offset) = match orientation {
            // Hinged at the bottom center, image standing on the wrapper center
            Orientation::Portrait => (Point::new(w / 2, h), Point::new(center.x - w / 2, 0)),
            // Hinged at the inner side edge, image lying left of the wrapper center
            Orientation::Landscape => (Point::new(w, h / 2), Point::new(0, center.y - h / 2)),
        };

        Ok(Self {
            image,
            image_offset,
            wrapper,
            pivot,
            center,
            orientation,
        })
    }

    /// The pivot expressed in wrapper coordinates.
    pub fn pivot_in_wrapper(&self) -> Point {
        Point::new(
            self.image_offset.x + self.pivot.x,
            self.image_offset.y + self.pivot.y,
        )
    }
}

/// Scale `intrinsic` so its height is half of the container's smaller side.
fn scale_image(parent: Size, intrinsic: Size) -> Size {
    let height = parent.smaller_side() / 2;
    let ratio = height as f64 / intrinsic.height as f64;
    let width = (intrinsic.width as f64 * ratio) as u32;
    Size::new(width, height)
}
