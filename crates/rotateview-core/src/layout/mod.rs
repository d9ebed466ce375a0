//! Layout of the image and its rotation wrapper.
//!
//! The host reports container bounds; this module turns them into an
//! [`ImageLayout`] (image size, wrapper size, pivot and center) and decides
//! which bound notifications actually warrant a relayout.
//!
//! # Geometry
//!
//! ```text
//!   portrait                 landscape
//!   +-------+---+-------+    +---------------+---------------+
//!   |       |img|       |    |               |               |
//!   |       |   |       |    +------img------P               |
//!   |       +-P-+       |    |               |               |
//!   |                   |    |               |               |
//!   |                   |    |               |               |
//!   +-------------------+    +-------------------------------+
//! ```
//!
//! `P` is the pivot. The wrapper is a square twice the image's long axis, so
//! the pivot always lands on the wrapper center and the image can sweep a
//! full circle without clipping.

mod adapter;
mod frame;

pub use adapter::LayoutAdapter;
pub use frame::ImageLayout;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Size;

/// Error types for layout computation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// The container has no area yet.
    #[error("Container has no area: {width}x{height}")]
    EmptyContainer { width: u32, height: u32 },

    /// The image to lay out has no intrinsic size.
    #[error("Image has no intrinsic size")]
    EmptyImage,

    /// The container is too small to give the image any pixels.
    #[error("Container {width}x{height} is too small to lay out the image")]
    Collapsed { width: u32, height: u32 },

    /// The wrapper would not fit in pixel coordinates.
    #[error("Container {width}x{height} is too large to lay out the image")]
    TooLarge { width: u32, height: u32 },
}

/// Edges of the container as reported by the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Bounds of a `width` x `height` box at the origin. Sizes past
    /// `i32::MAX` saturate.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(
            0,
            0,
            i32::try_from(width).unwrap_or(i32::MAX),
            i32::try_from(height).unwrap_or(i32::MAX),
        )
    }

    /// True for the all-zero bounds some toolkits report before measuring.
    pub fn is_unmeasured(&self) -> bool {
        self.left == 0 && self.top == 0 && self.right == 0 && self.bottom == 0
    }

    /// Size of the bounds. Inverted edges clamp to zero.
    pub fn size(&self) -> Size {
        Size::new(
            span(self.left, self.right),
            span(self.top, self.bottom),
        )
    }
}

/// Distance from `start` to `end`, zero when inverted. Any two `i32` edges
/// are at most `u32::MAX` apart.
fn span(start: i32, end: i32) -> u32 {
    let distance = i64::from(end) - i64::from(start);
    u32::try_from(distance.max(0)).unwrap_or(u32::MAX)
}
