//! Sign-based quadrant classification of a touch relative to a reference point.

use super::Point;

/// One of the four screen quadrants around a reference point.
///
/// Screen coordinates grow downward, so "upper" means `dy < 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Upper-right, including both axes through the reference point.
    First,
    /// Upper-left.
    Second,
    /// Lower-left, including the left half of the horizontal axis.
    Third,
    /// Lower-right, excluding the horizontal axis.
    Fourth,
}

impl Quadrant {
    /// Degrees added to the raw `atan2` angle for touches in this quadrant.
    ///
    /// The second quadrant gets an extra full turn so its results land in
    /// (270, 360) instead of going negative.
    pub fn offset_degrees(self) -> f64 {
        match self {
            Quadrant::Second => 270.0 + 180.0,
            Quadrant::First | Quadrant::Third | Quadrant::Fourth => 90.0,
        }
    }
}

/// Find the quadrant of `position` relative to `pivot`.
///
/// Checks are evaluated in order; the first match wins:
///
/// ```text
/// dx >= 0 && dy <= 0  -> First
/// dx <  0 && dy <  0  -> Second
/// dx <  0 && dy >= 0  -> Third
/// otherwise           -> Fourth
/// ```
pub fn quadrant_for_point(position: Point, pivot: Point) -> Quadrant {
    let (dx, dy) = position.delta_from(pivot);

    if dx >= 0 && dy <= 0 {
        Quadrant::First
    } else if dx < 0 && dy < 0 {
        Quadrant::Second
    } else if dx < 0 {
        Quadrant::Third
    } else {
        Quadrant::Fourth
    }
}
