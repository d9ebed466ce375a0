//! Touch position to rotation angle.
//!
//! The angle is measured from the reference point to the touch, then shifted
//! per quadrant so that a touch straight above the reference reads 0° and
//! angles grow clockwise. Landscape images are hinged on a side edge, which
//! adds a flat quarter turn.
//!
//! ```text
//! raw   = degrees(atan2(y - py, x - px))          // (-180, 180]
//! angle = raw + quadrant offset (+90 or +450)
//! angle += 90 if landscape
//! ```
//!
//! The result is not wrapped: portrait angles fall in [0, 360) and
//! landscape angles in [90, 450).

use super::{quadrant_for_point, Orientation, Point};

/// Raw angle of `position` around `pivot` in degrees, range (-180, 180].
#[inline]
pub fn raw_angle(position: Point, pivot: Point) -> f64 {
    let (dx, dy) = position.delta_from(pivot);
    (dy as f64).atan2(dx as f64).to_degrees()
}

/// Compute the rotation angle for a touch at `position` around `pivot`.
///
/// # Arguments
///
/// * `position` - Touch position in the wrapper's local coordinates
/// * `pivot` - Reference point the image rotates about
/// * `orientation` - Orientation of the laid-out image
///
/// # Returns
///
/// The angle in degrees. Pure: identical inputs always give the same result.
pub fn angle_for_touch(position: Point, pivot: Point, orientation: Orientation) -> f64 {
    let angle = raw_angle(position, pivot) + quadrant_for_point(position, pivot).offset_degrees();

    match orientation {
        Orientation::Portrait => angle,
        Orientation::Landscape => angle + 90.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Quadrant;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_raw_angle_directions() {
        assert_close(raw_angle(Point::new(10, 0), Point::ORIGIN), 0.0);
        assert_close(raw_angle(Point::new(0, 10), Point::ORIGIN), 90.0);
        assert_close(raw_angle(Point::new(-10, 0), Point::ORIGIN), 180.0);
        assert_close(raw_angle(Point::new(0, -10), Point::ORIGIN), -90.0);
    }

    #[test]
    fn test_first_quadrant_example() {
        let position = Point::new(10, -10);
        assert_close(raw_angle(position, Point::ORIGIN), -45.0);
        assert_close(
            angle_for_touch(position, Point::ORIGIN, Orientation::Portrait),
            45.0,
        );
        assert_close(
            angle_for_touch(position, Point::ORIGIN, Orientation::Landscape),
            135.0,
        );
    }

    #[test]
    fn test_second_quadrant_example() {
        let position = Point::new(-10, -10);
        assert_close(raw_angle(position, Point::ORIGIN), -135.0);
        assert_close(
            angle_for_touch(position, Point::ORIGIN, Orientation::Portrait),
            315.0,
        );
        assert_close(
            angle_for_touch(position, Point::ORIGIN, Orientation::Landscape),
            405.0,
        );
    }

    #[test]
    fn test_third_and_fourth_quadrants() {
        // Lower-left: raw 135 -> 225
        assert_close(
            angle_for_touch(Point::new(-10, 10), Point::ORIGIN, Orientation::Portrait),
            225.0,
        );
        // Lower-right: raw 45 -> 135
        assert_close(
            angle_for_touch(Point::new(10, 10), Point::ORIGIN, Orientation::Portrait),
            135.0,
        );
    }

    #[test]
    fn test_cardinal_touches_portrait() {
        let pivot = Point::new(100, 100);
        let up = angle_for_touch(Point::new(100, 20), pivot, Orientation::Portrait);
        let right = angle_for_touch(Point::new(180, 100), pivot, Orientation::Portrait);
        let down = angle_for_touch(Point::new(100, 180), pivot, Orientation::Portrait);
        let left = angle_for_touch(Point::new(20, 100), pivot, Orientation::Portrait);

        assert_close(up, 0.0);
        assert_close(right, 90.0);
        assert_close(down, 180.0);
        assert_close(left, 270.0);
    }

    #[test]
    fn test_touch_on_pivot() {
        // atan2(0, 0) is 0, first quadrant
        assert_close(
            angle_for_touch(Point::new(5, 5), Point::new(5, 5), Orientation::Portrait),
            90.0,
        );
    }

    #[test]
    fn test_far_touches_keep_their_quadrant() {
        let pivot = Point::new(200, 200);
        // Saturated pointer samples from the host
        let left = angle_for_touch(Point::new(i32::MIN, 210), pivot, Orientation::Portrait);
        let right = angle_for_touch(Point::new(i32::MAX, 200), pivot, Orientation::Portrait);
        let up = angle_for_touch(Point::new(200, i32::MIN), pivot, Orientation::Landscape);

        assert!((left - 270.0).abs() < 1e-6, "left was {}", left);
        assert_close(right, 90.0);
        assert_close(up, 90.0);
        assert_eq!(
            quadrant_for_point(Point::new(i32::MIN, i32::MIN), Point::new(i32::MAX, i32::MAX)),
            Quadrant::Second
        );
    }

    #[test]
    fn test_pure_function() {
        let position = Point::new(37, -211);
        let pivot = Point::new(-4, 19);
        let first = angle_for_touch(position, pivot, Orientation::Landscape);
        for _ in 0..10 {
            assert_eq!(angle_for_touch(position, pivot, Orientation::Landscape), first);
        }
    }
}
