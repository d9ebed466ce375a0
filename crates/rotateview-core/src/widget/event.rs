//! Single-pointer input events.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Phase of a pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerAction {
    Down,
    Move,
    Up,
    /// The host took the pointer away (e.g. the browser started a scroll).
    Cancel,
}

/// A pointer sample in the wrapper's local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    pub fn new(action: PointerAction, x: f32, y: f32) -> Self {
        Self { action, x, y }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Down, x, y)
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Move, x, y)
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Up, x, y)
    }

    /// Sample position truncated toward zero to whole pixels.
    pub fn position(&self) -> Point {
        Point::new(self.x as i32, self.y as i32)
    }
}
