use super::{Point2, Vector2, TOLERANCE};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
) -> Option<(f64, f64)> {
    let cross = d1.x * d2.y - d1.y * d2.x;
    if cross.abs() < TOLERANCE {
        return None;
    }
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let t = (dx * d2.y - dy * d2.x) / cross;
    let u = (dx * d1.y - dy * d1.x) / cross;
    Some((t, u))
}

/// Intersection of the infinite line `origin + t * dir` with the segment `a → b`.
///
/// Segment endpoints count as hits. Returns `None` when the line is parallel
/// to the segment or misses it.
#[must_use]
pub fn line_segment_intersect_2d(
    origin: &Point2,
    dir: &Vector2,
    a: &Point2,
    b: &Point2,
) -> Option<Point2> {
    let db = b - a;
    let (_, u) = line_line_intersect_2d(origin, dir, a, &db)?;
    if (-TOLERANCE..=1.0 + TOLERANCE).contains(&u) {
        Some(point_at(a, &db, u.clamp(0.0, 1.0)))
    } else {
        None
    }
}

/// Bounded segment-segment intersection in 2D.
///
/// Returns `(intersection_point, t, u)` where `t` and `u` are in `[0, 1]`.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<(Point2, f64, f64)> {
    let da = a1 - a0;
    let db = b1 - b0;
    let (t, u) = line_line_intersect_2d(a0, &da, b0, &db)?;

    // Use a small epsilon to include endpoints.
    let eps = TOLERANCE;
    if t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps {
        let t_clamped = t.clamp(0.0, 1.0);
        Some((point_at(a0, &da, t_clamped), t_clamped, u.clamp(0.0, 1.0)))
    } else {
        None
    }
}

/// Linear interpolation: `origin + dir * t`.
#[must_use]
pub fn point_at(origin: &Point2, dir: &Vector2, t: f64) -> Point2 {
    origin + dir * t
}

/// Parameters `t` at which the line `origin + t * dir` meets a circle.
///
/// Returns no roots for a miss, one for a tangent, two (ascending) otherwise.
#[must_use]
pub fn circle_line_params_2d(
    center: &Point2,
    radius: f64,
    origin: &Point2,
    dir: &Vector2,
) -> Vec<f64> {
    let a = dir.norm_squared();
    if a < TOLERANCE * TOLERANCE {
        return Vec::new();
    }

    // Substitute the parametric line into the circle equation:
    // |origin + t*dir - center|² = r²
    let f = origin - center;
    let b = 2.0 * f.dot(dir);
    let c = f.norm_squared() - radius * radius;
    let discriminant = b * b - 4.0 * a * c;

    if discriminant < -TOLERANCE {
        return Vec::new();
    }
    let disc_sqrt = discriminant.max(0.0).sqrt();

    if disc_sqrt < TOLERANCE * 100.0 {
        // Tangent case: single root.
        vec![-b / (2.0 * a)]
    } else {
        vec![(-b - disc_sqrt) / (2.0 * a), (-b + disc_sqrt) / (2.0 * a)]
    }
}

/// Points where the segment `a → b` crosses or touches a circle.
#[must_use]
pub fn circle_segment_intersect_2d(
    center: &Point2,
    radius: f64,
    a: &Point2,
    b: &Point2,
) -> Vec<Point2> {
    let dir = b - a;
    circle_line_params_2d(center, radius, a, &dir)
        .into_iter()
        .filter(|t| (-TOLERANCE..=1.0 + TOLERANCE).contains(t))
        .map(|t| point_at(a, &dir, t.clamp(0.0, 1.0)))
        .collect()
}

/// How two circles relate to each other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CircleCircleIntersection {
    /// The boundaries cross at exactly two points.
    Overlapping(Point2, Point2),
    /// Same centre and radius; no discrete intersection points.
    Coincident,
    /// The first circle lies inside the second (internal tangency included).
    Contained,
    /// The first circle encloses the second (internal tangency included).
    Container,
    /// The circles are apart or touch from outside.
    SeparateOrExternallyTangent,
}

/// Classifies two circles and computes their crossing points.
///
/// Circle 1: centre `c1`, radius `r1`. Circle 2: centre `c2`, radius `r2`.
#[must_use]
pub fn circle_circle_intersect_2d(
    c1: &Point2,
    r1: f64,
    c2: &Point2,
    r2: f64,
) -> CircleCircleIntersection {
    let delta = c2 - c1;
    let dist_sq = delta.norm_squared();
    let dist = dist_sq.sqrt();

    if dist < TOLERANCE && (r1 - r2).abs() < TOLERANCE {
        return CircleCircleIntersection::Coincident;
    }
    if dist >= r1 + r2 - TOLERANCE {
        return CircleCircleIntersection::SeparateOrExternallyTangent;
    }
    if dist <= (r1 - r2).abs() + TOLERANCE {
        return if r1 > r2 {
            CircleCircleIntersection::Container
        } else {
            CircleCircleIntersection::Contained
        };
    }

    // Distance from c1 along the line c1→c2 to the radical line.
    let a = (dist_sq + r1 * r1 - r2 * r2) / (2.0 * dist);
    let h = (r1 * r1 - a * a).max(0.0).sqrt();

    // Midpoint on the radical line.
    let mid = c1 + delta * (a / dist);

    // Perpendicular direction.
    let perp = Vector2::new(-delta.y, delta.x) / dist;

    CircleCircleIntersection::Overlapping(mid + perp * h, mid - perp * h)
}
