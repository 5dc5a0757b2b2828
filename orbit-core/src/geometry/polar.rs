//! Polar placement on a clock face
//!
//! Clock convention: angle zero is straight up from the pivot, the
//! horizontal offset follows `sin` and the vertical offset follows `-cos`.

use super::{Angle, Point, Rect, Size};

/// Top-left corner of an element of `size` whose center sits on the circle
/// of `radius` around `pivot` at `angle`
pub fn position_on_circle(angle: Angle, radius: u32, pivot: Point, size: Size) -> Point {
    let theta = angle.radians();
    let radius = radius as f32;

    let dx = libm::roundf(radius * libm::sinf(theta)) as i32;
    let dy = libm::roundf(radius * libm::cosf(theta)) as i32;

    Point::new(
        pivot.x + dx - (size.width / 2) as i32,
        pivot.y - dy - (size.height / 2) as i32,
    )
}

/// Frame for an element of `size` placed on the circle
pub fn place_on_circle(angle: Angle, radius: u32, pivot: Point, size: Size) -> Rect {
    Rect::from_parts(position_on_circle(angle, radius, pivot, size), size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::TRIG_MAX_ANGLE;
    use proptest::prelude::*;

    const PIVOT: Point = Point::new(72, 84);
    const RADIUS: u32 = 60;

    #[test]
    fn test_compass_points() {
        let zero = Size::zero();
        assert_eq!(
            position_on_circle(Angle::from_degrees(0), RADIUS, PIVOT, zero),
            Point::new(72, 24)
        );
        assert_eq!(
            position_on_circle(Angle::from_degrees(90), RADIUS, PIVOT, zero),
            Point::new(132, 84)
        );
        assert_eq!(
            position_on_circle(Angle::from_degrees(180), RADIUS, PIVOT, zero),
            Point::new(72, 144)
        );
        assert_eq!(
            position_on_circle(Angle::from_degrees(270), RADIUS, PIVOT, zero),
            Point::new(12, 84)
        );
    }

    #[test]
    fn test_element_is_centered_on_circle() {
        let size = Size::new(20, 21);
        let top = position_on_circle(Angle::ZERO, RADIUS, PIVOT, size);
        assert_eq!(top, Point::new(62, 14));

        let rect = place_on_circle(Angle::ZERO, RADIUS, PIVOT, size);
        assert_eq!(rect.origin, top);
        assert_eq!(rect.size, size);
    }

    #[test]
    fn test_minute_positions_match_double_precision() {
        for minute in 0..60 {
            let point = position_on_circle(Angle::from_minute(minute), RADIUS, PIVOT, Size::zero());

            let theta = minute as f64 / 60.0 * core::f64::consts::TAU;
            let expected_x = PIVOT.x as f64 + RADIUS as f64 * theta.sin();
            let expected_y = PIVOT.y as f64 - RADIUS as f64 * theta.cos();

            assert!(
                (point.x as f64 - expected_x).abs() <= 1.0,
                "minute {} x drifted: {} vs {}",
                minute,
                point.x,
                expected_x
            );
            assert!(
                (point.y as f64 - expected_y).abs() <= 1.0,
                "minute {} y drifted: {} vs {}",
                minute,
                point.y,
                expected_y
            );
        }
    }

    #[test]
    fn test_deterministic() {
        let angle = Angle::from_minute(37);
        let size = Size::new(20, 20);
        assert_eq!(
            position_on_circle(angle, RADIUS, PIVOT, size),
            position_on_circle(angle, RADIUS, PIVOT, size)
        );
    }

    proptest! {
        #[test]
        fn prop_point_stays_on_circle(raw in 0u32..TRIG_MAX_ANGLE) {
            let point = position_on_circle(Angle::new(raw as i64), RADIUS, PIVOT, Size::zero());
            let dx = (point.x - PIVOT.x) as f64;
            let dy = (point.y - PIVOT.y) as f64;
            let distance = (dx * dx + dy * dy).sqrt();
            prop_assert!((distance - RADIUS as f64).abs() <= 1.0, "distance {}", distance);
        }

        #[test]
        fn prop_direction_follows_clock_convention(raw in 0u32..TRIG_MAX_ANGLE) {
            let angle = Angle::new(raw as i64);
            let point = position_on_circle(angle, RADIUS, PIVOT, Size::zero());
            let theta = angle.radians() as f64;
            // Signs only need to agree away from the axes, where rounding can land on zero
            if theta.sin().abs() > 0.05 {
                prop_assert_eq!((point.x - PIVOT.x).signum() as f64, theta.sin().signum());
            }
            if theta.cos().abs() > 0.05 {
                prop_assert_eq!((PIVOT.y - point.y).signum() as f64, theta.cos().signum());
            }
        }
    }
}
