//! RotateView Core - drag-to-rotate image widget
//!
//! This crate holds everything about the widget that does not depend on a
//! particular UI toolkit: touch-to-angle geometry, layout of the image and
//! its rotation wrapper, image resources, and the widget state machine that
//! a host drives with bounds and pointer events.

pub mod geometry;
pub mod layout;
pub mod resource;
pub mod widget;

pub use geometry::{angle_for_touch, quadrant_for_point, Orientation, Point, Quadrant, Size};
pub use layout::{Bounds, ImageLayout, LayoutAdapter, LayoutError};
pub use resource::{
    DecodedImage, FilterType, ResourceError, ResourceId, ResourceRegistry, PLACEHOLDER_IMAGE,
};
pub use widget::{
    PointerAction, PointerEvent, RotateView, RotateViewAttributes, RotationListener, VisualState,
};
