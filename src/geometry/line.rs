use crate::math::intersect_2d::{
    line_line_intersect_2d, line_segment_intersect_2d, point_at, segment_segment_intersect_2d,
};
use crate::math::{points_coincide, Point2, PolyLine, Vector2, EPSILON, TOLERANCE};

use super::Deg;

/// An infinite line through `origin` with direction `slope`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    origin: Point2,
    slope: Deg,
}

impl Line {
    /// Creates a line through `origin` with direction `slope`.
    #[must_use]
    pub fn new(origin: Point2, slope: Deg) -> Self {
        Self { origin, slope }
    }

    /// The line through two points, pointing from `p1` towards `p2`.
    #[must_use]
    pub fn through(p1: &Point2, p2: &Point2) -> Self {
        Self::new(*p1, Deg::of_vector(&(p2 - p1)))
    }

    /// Returns the point the line passes through.
    #[must_use]
    pub fn origin(&self) -> &Point2 {
        &self.origin
    }

    /// Returns the direction angle.
    #[must_use]
    pub fn slope(&self) -> Deg {
        self.slope
    }

    /// Unit direction vector.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.slope.unit_vector()
    }

    /// Returns the point `dist` units along the direction from the origin.
    #[must_use]
    pub fn point_at_dist(&self, dist: f64) -> Point2 {
        point_at(&self.origin, &self.direction(), dist)
    }

    /// Signed distance of the projection of `p` along the line's direction.
    #[must_use]
    pub fn project(&self, p: &Point2) -> f64 {
        (p - self.origin).dot(&self.direction())
    }

    /// The perpendicular through the same origin.
    #[must_use]
    pub fn normal(&self, clockwise: bool) -> Self {
        let rotation = if clockwise { -Deg::QUARTER } else { Deg::QUARTER };
        Self::new(self.origin, self.slope + rotation)
    }

    /// Returns the smaller angle between the two directions, in degrees.
    #[must_use]
    pub fn angle_between(&self, other: &Line) -> f64 {
        self.slope
            .rotation(other.slope, super::RotationDirection::EitherDirection)
    }

    /// Returns `true` if the lines run in the same or opposite direction.
    #[must_use]
    pub fn is_parallel(&self, other: &Line) -> bool {
        self.slope.is_parallel_with(other.slope, false)
    }

    /// Where the two lines cross, or `None` if they are parallel.
    #[must_use]
    pub fn intersection(&self, other: &Line) -> Option<Point2> {
        let dir = self.direction();
        let (t, _) = line_line_intersect_2d(&self.origin, &dir, &other.origin, &other.direction())?;
        Some(point_at(&self.origin, &dir, t))
    }

    /// Where the line crosses `segment`; endpoints count.
    #[must_use]
    pub fn segment_intersection(&self, segment: &Segment) -> Option<Point2> {
        line_segment_intersect_2d(&self.origin, &self.direction(), &segment.p1, &segment.p2)
    }

    /// Where the line crosses the horizontal `y = y`.
    #[must_use]
    pub fn intersects_y(&self, y: f64) -> Option<Point2> {
        self.intersection(&Line::new(Point2::new(0.0, y), Deg::HORIZONTAL))
    }

    /// Where the line crosses the vertical `x = x`.
    #[must_use]
    pub fn intersects_x(&self, x: f64) -> Option<Point2> {
        self.intersection(&Line::new(Point2::new(x, 0.0), Deg::VERTICAL))
    }

    /// Returns the line moved by `delta`.
    #[must_use]
    pub fn translated(&self, delta: &Vector2) -> Self {
        Self::new(self.origin + delta, self.slope)
    }
}

/// A straight segment from `p1` to `p2`. Direction matters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    p1: Point2,
    p2: Point2,
}

impl Segment {
    /// Creates a segment from `p1` to `p2`.
    #[must_use]
    pub fn new(p1: Point2, p2: Point2) -> Self {
        Self { p1, p2 }
    }

    /// A segment of `length` starting at `p1` in direction `slope`.
    #[must_use]
    pub fn from_slope(p1: Point2, slope: Deg, length: f64) -> Self {
        Self::new(p1, p1 + slope.unit_vector() * length)
    }

    /// Returns the start point.
    #[must_use]
    pub fn p1(&self) -> &Point2 {
        &self.p1
    }

    /// Returns the end point.
    #[must_use]
    pub fn p2(&self) -> &Point2 {
        &self.p2
    }

    /// Returns both end points, start first.
    #[must_use]
    pub fn points(&self) -> [Point2; 2] {
        [self.p1, self.p2]
    }

    /// Returns the segment as a two-point polyline.
    #[must_use]
    pub fn to_polyline(&self) -> PolyLine {
        vec![self.p1, self.p2]
    }

    /// `p2 - p1`.
    #[must_use]
    pub fn vector(&self) -> Vector2 {
        self.p2 - self.p1
    }

    /// Returns the length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.vector().norm()
    }

    /// Returns `true` if both end points coincide.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length() < TOLERANCE
    }

    /// Returns the direction from `p1` to `p2`.
    #[must_use]
    pub fn slope(&self) -> Deg {
        Deg::of_vector(&self.vector())
    }

    /// Returns the midpoint.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        self.point_at_percent(0.5)
    }

    /// Returns the point at fraction `t` of the way from `p1` to `p2`.
    #[must_use]
    pub fn point_at_percent(&self, t: f64) -> Point2 {
        point_at(&self.p1, &self.vector(), t)
    }

    /// Returns the infinite line carrying the segment.
    #[must_use]
    pub fn to_line(&self) -> Line {
        Line::new(self.p1, self.slope())
    }

    /// Returns the segment with its end points swapped.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self::new(self.p2, self.p1)
    }

    /// Returns the segment moved by `delta`.
    #[must_use]
    pub fn translated(&self, delta: &Vector2) -> Self {
        Self::new(self.p1 + delta, self.p2 + delta)
    }

    /// Whether `c` lies on the segment, endpoints included.
    #[must_use]
    pub fn contains_point(&self, c: &Point2) -> bool {
        let d = self.vector();
        let len_sq = d.norm_squared();
        if len_sq < TOLERANCE * TOLERANCE {
            return points_coincide(&self.p1, c);
        }
        let offset = c - self.p1;
        let cross = offset.x * d.y - offset.y * d.x;
        if cross.abs() / len_sq.sqrt() > EPSILON {
            return false;
        }
        let dot = offset.dot(&d);
        dot >= 0.0 && dot <= len_sq
    }

    /// Where the two segments cross, endpoints included.
    #[must_use]
    pub fn intersection(&self, other: &Segment) -> Option<Point2> {
        segment_segment_intersect_2d(&self.p1, &self.p2, &other.p1, &other.p2).map(|(p, _, _)| p)
    }

    /// The shared part of two collinear segments, oriented like `self`.
    ///
    /// Returns `None` when the segments are not collinear, do not overlap,
    /// or only touch at a point.
    #[must_use]
    pub fn overlap_with(&self, other: &Segment) -> Option<Segment> {
        let d = self.vector();
        let len_sq = d.norm_squared();
        if len_sq < TOLERANCE * TOLERANCE {
            return None;
        }
        let len = len_sq.sqrt();

        let off_line = |q: &Point2| {
            let offset = q - self.p1;
            (offset.x * d.y - offset.y * d.x).abs() / len > EPSILON
        };
        if off_line(&other.p1) || off_line(&other.p2) {
            return None;
        }

        // Parameters along self; 0 at p1, 1 at p2. Keep the exact endpoint
        // that produced each bound.
        let param = |q: &Point2| (q - self.p1).dot(&d) / len_sq;
        let a = (param(&other.p1), other.p1);
        let b = (param(&other.p2), other.p2);
        let (other_lo, other_hi) = if a.0 <= b.0 { (a, b) } else { (b, a) };

        let lo = if other_lo.0 > 0.0 { other_lo } else { (0.0, self.p1) };
        let hi = if other_hi.0 < 1.0 { other_hi } else { (1.0, self.p2) };

        if (hi.0 - lo.0) * len < EPSILON {
            return None;
        }
        Some(Segment::new(lo.1, hi.1))
    }

    /// Flips the segment if it points against `reference`.
    #[must_use]
    pub fn reoriented_like(&self, reference: &Segment) -> Self {
        if self.vector().dot(&reference.vector()) < 0.0 {
            self.flipped()
        } else {
            *self
        }
    }
}
