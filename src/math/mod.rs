pub mod intersect_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// An ordered list of points, open or closed (`first == last`).
pub type PolyLine = Vec<Point2>;

/// Tolerance for determinants and other near-zero denominators.
pub const TOLERANCE: f64 = 1e-10;

/// Tolerance for comparing coordinates and degree values.
pub const EPSILON: f64 = 1e-5;

/// How far past 360 an arc length may drift before construction fails.
pub const ARC_LENGTH_SLACK: f64 = 0.1;

/// Maximum rotation between two angles that still compare as relaxed-equal.
pub const RELAXED_DEG_TOLERANCE: f64 = 0.1;

/// Returns whether two scalars are within [`EPSILON`] of each other.
#[must_use]
pub fn equals_delta(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Returns whether two points coincide within [`EPSILON`] on both axes.
#[must_use]
pub fn points_coincide(a: &Point2, b: &Point2) -> bool {
    (a - b).amax() < EPSILON
}

/// Removes points that coincide with an earlier point, keeping first-seen order.
#[must_use]
pub fn dedup_points(points: &[Point2]) -> Vec<Point2> {
    let mut unique: Vec<Point2> = Vec::with_capacity(points.len());
    for p in points {
        if !unique.iter().any(|u| points_coincide(u, p)) {
            unique.push(*p);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_keeps_first_seen() {
        let pts = [
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
            Point2::new(1.0 + EPSILON / 10.0, 1.0),
        ];
        let unique = dedup_points(&pts);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0], Point2::new(1.0, 1.0));
    }

    #[test]
    fn coincide_is_per_axis() {
        assert!(points_coincide(&Point2::new(0.0, 0.0), &Point2::new(1e-7, -1e-7)));
        assert!(!points_coincide(&Point2::new(0.0, 0.0), &Point2::new(0.0, 1e-3)));
    }
}
