//! Touch geometry: points, sizes, orientation and the angle engine.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner, Y grows downward
//! - Coordinates are whole pixels (`i32`), matching the host's truncated
//!   pointer samples
//! - Angles are in degrees, positive = clockwise on screen

mod angle;
mod quadrant;

pub use angle::{angle_for_touch, raw_angle};
pub use quadrant::{quadrant_for_point, Quadrant};

use serde::{Deserialize, Serialize};

/// A point in some local pixel coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other` as `(dx, dy)`.
    ///
    /// Widened to `i64` so points at opposite ends of the `i32` range
    /// cannot overflow.
    #[inline]
    pub fn delta_from(self, other: Point) -> (i64, i64) {
        (
            i64::from(self.x) - i64::from(other.x),
            i64::from(self.y) - i64::from(other.y),
        )
    }
}

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A square of the given side.
    pub fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// True if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The smaller of width and height.
    pub fn smaller_side(&self) -> u32 {
        self.width.min(self.height)
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::of(self.width, self.height)
    }
}

/// Image orientation. Decides which edge of the image is the hinge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// Height >= width; hinged at the bottom edge.
    #[default]
    Portrait,
    /// Width > height; hinged at a side edge.
    Landscape,
}

impl Orientation {
    /// Classify a width/height pair. Squares count as portrait.
    pub fn of(width: u32, height: u32) -> Self {
        if height >= width {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }

    #[inline]
    pub fn is_portrait(self) -> bool {
        self == Orientation::Portrait
    }
}
