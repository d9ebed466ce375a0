//! Image resources the widget can display.
//!
//! Images are registered under integer handles, decoded once with the
//! `image` crate, and looked up by handle when the widget needs their
//! intrinsic size (for layout) or pixels (for drawing).

mod decode;
mod registry;
mod types;

pub use decode::{decode_image, read_orientation};
pub use registry::{scale_to, ResourceRegistry, PLACEHOLDER_IMAGE, PLACEHOLDER_SIDE};
pub use types::{DecodedImage, ExifOrientation, FilterType, ResourceError, ResourceId};

#[cfg(test)]
pub(crate) use decode::fixtures;
