use std::f64::consts::TAU;

use crate::error::{GeometryError, OperationError, Result};
use crate::math::intersect_2d::{
    circle_circle_intersect_2d, circle_line_params_2d, circle_segment_intersect_2d, point_at,
    CircleCircleIntersection,
};
use crate::math::{equals_delta, points_coincide, Point2, PolyLine, Vector2, EPSILON};

use super::{Arc, BoundRect, Deg, Maskable, Segment};

/// A circle in the plane.
///
/// The radius is never negative. A zero radius is allowed and describes an
/// empty circle that still has a position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    origin: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NegativeRadius`] if `radius` is negative or NaN.
    pub fn new(origin: Point2, radius: f64) -> Result<Self> {
        if radius.is_nan() || radius < 0.0 {
            return Err(GeometryError::NegativeRadius(radius).into());
        }
        Ok(Self { origin, radius })
    }

    /// Creates a circle centred on the origin.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NegativeRadius`] if `radius` is negative or NaN.
    pub fn with_radius(radius: f64) -> Result<Self> {
        Self::new(Point2::origin(), radius)
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn origin(&self) -> &Point2 {
        &self.origin
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the diameter of the circle.
    #[must_use]
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    /// Returns the circumference of the circle.
    #[must_use]
    pub fn circumference(&self) -> f64 {
        TAU * self.radius
    }

    /// Returns the squared radius.
    #[must_use]
    pub fn radius_squared(&self) -> f64 {
        self.radius * self.radius
    }

    /// The square that encloses the circle.
    #[must_use]
    pub fn bounds(&self) -> BoundRect {
        let half = Vector2::new(self.radius, self.radius);
        BoundRect::from_parts(self.origin - half, self.diameter(), self.diameter())
    }

    /// Returns `true` if the radius is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.radius <= 0.0
    }

    /// Whether both circles share an origin and radius.
    #[must_use]
    pub fn is_same_circle(&self, other: &Circle) -> bool {
        points_coincide(&self.origin, &other.origin) && equals_delta(self.radius, other.radius)
    }

    /// Returns the angle of `p` as seen from the center.
    #[must_use]
    pub fn angle_at_point(&self, p: &Point2) -> Deg {
        Deg::of_vector(&(p - self.origin))
    }

    /// Returns the boundary point at `angle`.
    #[must_use]
    pub fn point_at_angle(&self, angle: Deg) -> Point2 {
        self.point_at_rad(angle.rad())
    }

    /// Returns the boundary point at `rad` radians.
    #[must_use]
    pub fn point_at_rad(&self, rad: f64) -> Point2 {
        self.origin + Vector2::new(rad.cos(), rad.sin()) * self.radius
    }

    /// Whether `p` lies on the boundary. Always false for an empty circle.
    #[must_use]
    pub fn is_on_circle(&self, p: &Point2) -> bool {
        !self.is_empty() && equals_delta((p - self.origin).norm(), self.radius)
    }

    /// Whether `p` lies inside or on the boundary. Always false for an empty circle.
    #[must_use]
    pub fn is_in_circle(&self, p: &Point2) -> bool {
        !self.is_empty() && (p - self.origin).norm() <= self.radius + EPSILON
    }

    /// Scales the circle about `anchor`. The radius follows `scale.x`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NegativeRadius`] if `scale.x` is negative.
    pub fn scaled(&self, scale: &Vector2, anchor: &Point2) -> Result<Self> {
        let origin = anchor + (self.origin - anchor).component_mul(scale);
        Self::new(origin, self.radius * scale.x)
    }

    /// Returns the circle moved by `delta`.
    #[must_use]
    pub fn translated(&self, delta: &Vector2) -> Self {
        Self {
            origin: self.origin + delta,
            radius: self.radius,
        }
    }

    /// Points around the boundary about `step` apart, as a closed polyline.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] if `step` is not positive.
    pub fn walk(&self, step: f64) -> Result<PolyLine> {
        Arc::full(*self).walk(step)
    }

    /// Points where the boundary crosses or touches `segment`.
    #[must_use]
    pub fn segment_intersections(&self, segment: &Segment) -> Vec<Point2> {
        circle_segment_intersect_2d(&self.origin, self.radius, segment.p1(), segment.p2())
    }

    /// Classifies how this circle meets `other`.
    #[must_use]
    pub fn intersect(&self, other: &Circle) -> CircleCircleIntersection {
        circle_circle_intersect_2d(&self.origin, self.radius, &other.origin, other.radius)
    }

    /// The arc of this circle that lies outside `other`.
    ///
    /// Empty when this circle is inside (or identical to) `other`, full when
    /// the circles are apart or `other` is enclosed.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvariantViolated`] if neither arc between the
    /// two crossing points lies outside `other`.
    pub fn outside_arc(&self, other: &Circle) -> Result<Arc> {
        match self.intersect(other) {
            CircleCircleIntersection::Overlapping(p1, p2) => {
                self.pick_crossing_arc(&p1, &p2, |arc| !other.is_in_circle(&arc.point_at_bisector()))
            }
            CircleCircleIntersection::Coincident | CircleCircleIntersection::Contained => {
                Ok(Arc::empty_at(Deg::HORIZONTAL, *self))
            }
            CircleCircleIntersection::Container
            | CircleCircleIntersection::SeparateOrExternallyTangent => Ok(Arc::full(*self)),
        }
    }

    /// The arc of this circle that lies inside `other`.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvariantViolated`] if neither arc between the
    /// two crossing points lies inside `other`.
    pub fn inside_arc(&self, other: &Circle) -> Result<Arc> {
        match self.intersect(other) {
            CircleCircleIntersection::Overlapping(p1, p2) => {
                self.pick_crossing_arc(&p1, &p2, |arc| other.is_in_circle(&arc.point_at_bisector()))
            }
            CircleCircleIntersection::Coincident | CircleCircleIntersection::Contained => {
                Ok(Arc::full(*self))
            }
            CircleCircleIntersection::Container
            | CircleCircleIntersection::SeparateOrExternallyTangent => {
                Ok(Arc::empty_at(Deg::HORIZONTAL, *self))
            }
        }
    }

    fn pick_crossing_arc(
        &self,
        p1: &Point2,
        p2: &Point2,
        keep: impl Fn(&Arc) -> bool,
    ) -> Result<Arc> {
        [
            Arc::from_points(p1, p2, *self),
            Arc::from_points(p2, p1, *self),
        ]
        .into_iter()
        .find(|arc| keep(arc))
        .ok_or_else(|| {
            OperationError::InvariantViolated(format!(
                "no arc of {self:?} between {p1} and {p2} matches the requested side"
            ))
            .into()
        })
    }
}

impl Maskable for Circle {
    fn contains(&self, p: &Point2) -> bool {
        (p - self.origin).norm_squared() <= self.radius_squared()
    }

    fn bound_segment(&self, segment: &Segment) -> Option<Segment> {
        if self.contains(segment.p1()) && self.contains(segment.p2()) {
            return Some(*segment);
        }

        let dir = segment.vector();
        let roots = circle_line_params_2d(&self.origin, self.radius, segment.p1(), &dir);
        let [t0, t1] = roots[..] else {
            return None;
        };

        let lo = t0.max(0.0);
        let hi = t1.min(1.0);
        if (hi - lo) * segment.length() < EPSILON {
            return None;
        }

        let start = if t0 > 0.0 { point_at(segment.p1(), &dir, lo) } else { *segment.p1() };
        let end = if t1 < 1.0 { point_at(segment.p1(), &dir, hi) } else { *segment.p2() };
        Some(Segment::new(start, end))
    }
}
