use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::{
    equals_delta, Point2, PolyLine, Vector2, ARC_LENGTH_SLACK, EPSILON, TOLERANCE,
};

use super::{Circle, Deg, RotationDirection};

/// Upper bound on the number of steps [`Arc::walk`] takes.
pub const MAX_WALK_STEPS: f64 = 1_000_000.0;

/// A clockwise interval on the boundary of a circle.
///
/// The arc starts at `start` and covers `length` degrees in the direction of
/// increasing angle. `length` is always within `[0, 360]`: zero is an empty
/// arc anchored at `start`, 360 is the whole circle.
///
/// Arcs are plain values; every transformation returns a new arc.
#[derive(Debug, Clone, Copy)]
pub struct Arc {
    start: Deg,
    length: f64,
    circle: Circle,
}

impl Arc {
    /// Creates a new arc.
    ///
    /// Lengths that overshoot `[0, 360]` by no more than
    /// [`ARC_LENGTH_SLACK`] are clamped.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ArcTooLong`] or
    /// [`GeometryError::NegativeArcLength`] when `length` lies further outside
    /// `[0, 360]`, and [`GeometryError::ParameterOutOfRange`] for NaN.
    pub fn new(start: Deg, length: f64, circle: Circle) -> Result<Self> {
        if length.is_nan() {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "length",
                value: length,
                min: 0.0,
                max: Deg::WHOLE,
            }
            .into());
        }
        if length > Deg::WHOLE + ARC_LENGTH_SLACK {
            return Err(GeometryError::ArcTooLong(length).into());
        }
        if length < -ARC_LENGTH_SLACK {
            return Err(GeometryError::NegativeArcLength(length).into());
        }
        Ok(Self::from_parts(start, length, circle))
    }

    /// Builds an arc from a length already known to be in range, clamping
    /// rounding noise.
    pub(crate) fn from_parts(start: Deg, length: f64, circle: Circle) -> Self {
        Self {
            start,
            length: length.clamp(0.0, Deg::WHOLE),
            circle,
        }
    }

    /// The whole circle, starting at 0°.
    #[must_use]
    pub fn full(circle: Circle) -> Self {
        Self::from_parts(Deg::HORIZONTAL, Deg::WHOLE, circle)
    }

    /// A zero-length arc at `start`.
    #[must_use]
    pub fn empty_at(start: Deg, circle: Circle) -> Self {
        Self::from_parts(start, 0.0, circle)
    }

    /// The clockwise arc from `start` to `end`.
    ///
    /// Equal angles give an empty arc, never a full one.
    #[must_use]
    pub fn from_degs(start: Deg, end: Deg, circle: Circle) -> Self {
        Self::from_parts(start, start.rotation(end, RotationDirection::Clockwise), circle)
    }

    /// The clockwise arc between the angles of two points seen from the
    /// circle's origin.
    #[must_use]
    pub fn from_points(start: &Point2, end: &Point2, circle: Circle) -> Self {
        Self::from_degs(circle.angle_at_point(start), circle.angle_at_point(end), circle)
    }

    /// Returns the start angle.
    #[must_use]
    pub fn start(&self) -> Deg {
        self.start
    }

    /// Clockwise length in degrees.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns the base circle.
    #[must_use]
    pub fn circle(&self) -> &Circle {
        &self.circle
    }

    /// Returns the center of the base circle.
    #[must_use]
    pub fn origin(&self) -> &Point2 {
        self.circle.origin()
    }

    /// Returns the radius of the base circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.circle.radius()
    }

    /// `start + length`, normalized.
    #[must_use]
    pub fn end(&self) -> Deg {
        self.start + self.length
    }

    /// `start + length` without wrapping; may exceed 360.
    #[must_use]
    pub fn end_unbound(&self) -> f64 {
        self.start.value() + self.length
    }

    /// Whether the arc wraps past 0°.
    #[must_use]
    pub fn crosses_zero(&self) -> bool {
        self.end_unbound() > Deg::WHOLE
    }

    /// Returns `true` if the arc has no length.
    #[must_use]
    pub fn is_size_zero(&self) -> bool {
        self.length <= 0.0
    }

    /// Returns `true` if the arc covers the whole circle.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.length >= Deg::WHOLE
    }

    /// The angle halfway along the arc.
    #[must_use]
    pub fn angle_bisector(&self) -> Deg {
        self.start + self.length / 2.0
    }

    /// Returns the boundary point halfway along the arc.
    #[must_use]
    pub fn point_at_bisector(&self) -> Point2 {
        self.circle.point_at_angle(self.angle_bisector())
    }

    /// Returns the boundary point at the start angle.
    #[must_use]
    pub fn start_point(&self) -> Point2 {
        self.circle.point_at_angle(self.start)
    }

    /// Returns the boundary point at the end angle.
    #[must_use]
    pub fn end_point(&self) -> Point2 {
        self.circle.point_at_angle(self.end())
    }

    /// Length of the arc along the boundary.
    #[must_use]
    pub fn arc_length(&self) -> f64 {
        self.circle.circumference() * self.length / Deg::WHOLE
    }

    /// Whether `angle` lies on the arc. Both ends are included.
    #[must_use]
    pub fn contains_deg(&self, angle: Deg) -> bool {
        if self.is_size_zero() {
            return false;
        }
        if self.is_full() {
            return true;
        }
        if angle == self.start || angle == self.end() {
            return true;
        }
        if angle.value() > self.start.value() {
            angle.value() < self.end_unbound()
        } else {
            self.crosses_zero() && self.end().value() > angle.value()
        }
    }

    /// Whether `other` lies entirely on this arc.
    #[must_use]
    pub fn contains_arc(&self, other: &Arc) -> bool {
        if self.is_size_zero() {
            return false;
        }
        if self.is_full() {
            return true;
        }
        if other.is_full() {
            return false;
        }
        let to_start = self.start.rotation(other.start, RotationDirection::Clockwise);
        let to_end = self.start.rotation(other.end(), RotationDirection::Clockwise);
        to_start <= to_end && to_end <= self.length + EPSILON
    }

    /// The parts of the boundary covered by both arcs.
    ///
    /// Returns up to two arcs; two only when the arcs overlap at both ends
    /// (each wraps into the other). Arcs on different circles never overlap.
    #[must_use]
    pub fn overlap(&self, other: &Arc) -> Vec<Arc> {
        if !self.circle.is_same_circle(&other.circle) || self.is_size_zero() || other.is_size_zero()
        {
            return Vec::new();
        }
        if self.contains_arc(other) {
            return vec![*other];
        }
        if other.contains_arc(self) {
            return vec![*self];
        }

        let (first, second) = if other.end().value() < self.end().value() {
            (other, self)
        } else {
            (self, other)
        };

        let mut overlaps = if second.contains_deg(first.start) && second.contains_deg(first.end()) {
            vec![
                Arc::from_degs(second.start, first.end(), self.circle),
                Arc::from_degs(first.start, second.end(), self.circle),
            ]
        } else if first.contains_deg(second.start) {
            vec![Arc::from_degs(second.start, first.end(), self.circle)]
        } else if first.contains_deg(second.end()) {
            vec![Arc::from_degs(first.start, second.end(), self.circle)]
        } else {
            Vec::new()
        };

        overlaps.retain(|arc| !arc.is_size_zero());
        overlaps.sort_by(|a, b| a.start.value().total_cmp(&b.start.value()));
        overlaps
    }

    /// This arc with `other` cut out of it.
    #[must_use]
    pub fn minus(&self, other: &Arc) -> Vec<Arc> {
        let mut rest = self.minus_unfiltered(other);
        rest.retain(|arc| !arc.is_size_zero());
        rest
    }

    fn minus_unfiltered(&self, other: &Arc) -> Vec<Arc> {
        let circle = self.circle;
        if self.overlap(other).is_empty() {
            return vec![*self];
        }
        if other.contains_arc(self) {
            return Vec::new();
        }
        if self.is_full() {
            return vec![Arc::from_parts(
                other.end(),
                Deg::WHOLE - other.length,
                circle,
            )];
        }
        if self.contains_arc(other) {
            return vec![
                Arc::from_degs(self.start, other.start, circle),
                Arc::from_degs(other.end(), self.end(), circle),
            ];
        }

        let covers_start = other.contains_deg(self.start);
        let covers_end = other.contains_deg(self.end());
        match (covers_start, covers_end) {
            (true, true) => vec![Arc::from_degs(other.end(), other.start, circle)],
            (true, false) => vec![Arc::from_degs(other.end(), self.end(), circle)],
            (false, true) => vec![Arc::from_degs(self.start, other.start, circle)],
            (false, false) => {
                tracing::debug!(arc = %self, other = %other, "overlapping arcs share no endpoint");
                vec![*self]
            }
        }
    }

    /// Subtracts every arc of `others` in turn.
    #[must_use]
    pub fn minus_all(&self, others: &[Arc]) -> Vec<Arc> {
        let initial: Vec<Arc> = if self.is_size_zero() {
            Vec::new()
        } else {
            vec![*self]
        };
        others.iter().fold(initial, |remaining, other| {
            remaining
                .iter()
                .flat_map(|arc| arc.minus(other))
                .collect()
        })
    }

    /// Grows the arc by `amount` degrees at both ends.
    ///
    /// A negative amount shrinks it. The result saturates to a full circle
    /// or to an empty arc at the current bisector.
    #[must_use]
    pub fn expand_deg(&self, amount: f64) -> Self {
        let length = self.length + 2.0 * amount;
        if length >= Deg::WHOLE {
            Self::from_parts(self.start - amount, Deg::WHOLE, self.circle)
        } else if length <= 0.0 {
            Self::empty_at(self.angle_bisector(), self.circle)
        } else {
            Self::from_parts(self.start - amount, length, self.circle)
        }
    }

    /// Grows the arc by `pixels` of boundary distance at both ends.
    #[must_use]
    pub fn expand_pixels(&self, pixels: f64) -> Self {
        let circumference = self.circle.circumference();
        if circumference < TOLERANCE {
            return *self;
        }
        self.expand_deg(pixels / circumference * Deg::WHOLE)
    }

    /// Returns the arc with its start turned by `amount` degrees.
    #[must_use]
    pub fn rotated(&self, amount: f64) -> Self {
        Self {
            start: self.start + amount,
            ..*self
        }
    }

    /// Mirrors the arc across the horizontal through its origin.
    #[must_use]
    pub fn flipped_vertically(&self) -> Self {
        Self {
            start: -self.end(),
            ..*self
        }
    }

    /// Scales the underlying circle about `anchor`; the angles are kept.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NegativeRadius`] if `scale.x` is negative.
    pub fn scaled(&self, scale: &Vector2, anchor: &Point2) -> Result<Self> {
        Ok(Self {
            circle: self.circle.scaled(scale, anchor)?,
            ..*self
        })
    }

    /// Returns the arc with its circle moved by `delta`.
    #[must_use]
    pub fn translated(&self, delta: &Vector2) -> Self {
        Self {
            circle: self.circle.translated(delta),
            ..*self
        }
    }

    /// Points along the arc about `step` units of boundary apart, both ends
    /// included. A full arc yields a closed polyline.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] if `step` is not a
    /// positive number, or so small that the walk would take more than
    /// [`MAX_WALK_STEPS`] steps.
    pub fn walk(&self, step: f64) -> Result<PolyLine> {
        if step.is_nan() || step <= 0.0 {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "step",
                value: step,
                min: TOLERANCE,
                max: f64::INFINITY,
            }
            .into());
        }
        if self.is_size_zero() {
            return Ok(vec![self.start_point()]);
        }
        let steps = (self.arc_length() / step).ceil();
        if steps > MAX_WALK_STEPS {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "step",
                value: step,
                min: self.arc_length() / MAX_WALK_STEPS,
                max: f64::INFINITY,
            }
            .into());
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let n = (steps as usize).max(1);
        let first = self.start_point();
        let mut points: PolyLine = (0..n)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let fraction = i as f64 / n as f64;
                self.circle
                    .point_at_angle(self.start + self.length * fraction)
            })
            .collect();
        points.push(if self.is_full() {
            first
        } else {
            self.end_point()
        });
        Ok(points)
    }
}

impl PartialEq for Arc {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
            && equals_delta(self.length, other.length)
            && self.circle.is_same_circle(&other.circle)
    }
}

impl fmt::Display for Arc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Arc({} +{} on r={} at {})",
            self.start,
            self.length,
            self.circle.radius(),
            self.circle.origin()
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn unit() -> Circle {
        Circle::with_radius(1.0).unwrap()
    }

    fn a(start: f64, length: f64) -> Arc {
        Arc::new(Deg::new(start), length, unit()).unwrap()
    }

    fn on(circle: Circle) -> Arc {
        Arc::new(Deg::new(5.0), 5.0, circle).unwrap()
    }

    #[test]
    fn constructors() {
        let five = Circle::with_radius(5.0).unwrap();
        let arc = Arc::new(Deg::new(90.0), 10.0, five).unwrap();
        assert_eq!(arc.start(), Deg::new(90.0));
        assert!((arc.length() - 10.0).abs() < 1e-12);
        assert_eq!(*arc.origin(), Point2::origin());
        assert!((arc.radius() - 5.0).abs() < 1e-12);

        let full = Arc::full(five);
        assert_eq!(full.start(), Deg::new(0.0));
        assert!(full.is_full());

        let by_degs = Arc::from_degs(Deg::new(90.0), Deg::new(100.0), five);
        assert!((by_degs.length() - 10.0).abs() < 1e-9);
        let wrapping = Arc::from_degs(Deg::new(90.0), Deg::new(50.0), five);
        assert!((wrapping.length() - 320.0).abs() < 1e-9);
    }

    #[test]
    fn from_points() {
        let five = Circle::with_radius(5.0).unwrap();
        let up = Point2::new(0.0, 5.0);
        let down = Point2::new(0.0, -5.0);

        let arc = Arc::from_points(&down, &up, five);
        assert_eq!(arc.start(), Deg::new(270.0));
        assert!((arc.length() - 180.0).abs() < 1e-9);

        let arc = Arc::from_points(&up, &down, five);
        assert_eq!(arc.start(), Deg::new(90.0));
        assert!((arc.length() - 180.0).abs() < 1e-9);

        assert!(Arc::from_points(&up, &up, five).is_size_zero());
    }

    #[test]
    fn length_bounds() {
        assert!(matches!(
            Arc::new(Deg::new(0.0), 400.0, unit()),
            Err(crate::SketchGeomError::Geometry(GeometryError::ArcTooLong(_)))
        ));
        assert!(matches!(
            Arc::new(Deg::new(0.0), -5.0, unit()),
            Err(crate::SketchGeomError::Geometry(GeometryError::NegativeArcLength(_)))
        ));
        assert!(Arc::new(Deg::new(0.0), f64::NAN, unit()).is_err());
        assert!(Arc::new(Deg::new(0.0), 360.05, unit()).unwrap().is_full());
        assert!(Arc::new(Deg::new(0.0), -0.05, unit()).unwrap().is_size_zero());
    }

    #[test]
    fn bisector_and_end() {
        for (start, length, bisector, end) in [
            (0.0, 360.0, 180.0, 0.0),
            (0.0, 180.0, 90.0, 180.0),
            (0.0, 90.0, 45.0, 90.0),
            (0.0, 0.0, 0.0, 0.0),
            (350.0, 20.0, 0.0, 10.0),
            (350.0, 10.0, 355.0, 0.0),
            (350.0, 5.0, 352.5, 355.0),
        ] {
            let arc = a(start, length);
            assert_eq!(arc.angle_bisector(), Deg::new(bisector), "bisector of {arc}");
            assert_eq!(arc.end(), Deg::new(end), "end of {arc}");
        }
    }

    #[test]
    fn contains_deg() {
        let d = Deg::new;
        assert!(a(10.0, 10.0).contains_deg(d(11.0)));
        assert!(a(10.0, 10.0).contains_deg(d(10.0)));
        assert!(a(10.0, 10.0).contains_deg(d(20.0)));
        assert!(!a(90.0, 100.0).contains_deg(d(85.0)));
        assert!(!a(90.0, 100.0).contains_deg(d(200.0)));

        let full = Arc::full(unit());
        for v in [0.0, 20.0, 359.0] {
            assert!(full.contains_deg(d(v)));
        }

        assert!(!a(10.0, 0.0).contains_deg(d(20.0)));
        assert!(!a(10.0, 0.0).contains_deg(d(10.0)));

        for v in [0.0, 351.0, 9.0, 10.0, 350.0] {
            assert!(a(350.0, 20.0).contains_deg(d(v)), "350+20 should contain {v}");
        }
        assert!(!a(350.0, 20.0).contains_deg(d(349.0)));
        assert!(!a(350.0, 20.0).contains_deg(d(11.0)));
    }

    #[test]
    fn contains_arc() {
        assert!(a(10.0, 10.0).contains_arc(&a(11.0, 1.0)));
        assert!(a(10.0, 10.0).contains_arc(&a(10.0, 1.0)));
        assert!(a(10.0, 10.0).contains_arc(&a(19.0, 1.0)));
        assert!(a(10.0, 10.0).contains_arc(&a(10.0, 10.0)));
        assert!(a(10.0, 10.0).contains_arc(&a(11.0, 8.0)));
        assert!(!a(10.0, 10.0).contains_arc(&a(11.0, 10.0)));
        assert!(!a(10.0, 10.0).contains_arc(&a(9.0, 10.0)));
        assert!(!a(10.0, 10.0).contains_arc(&a(9.0, 1.0)));

        assert!(a(350.0, 350.0).contains_arc(&a(80.0, 120.0)));
        assert!(a(10.0, 355.0).contains_arc(&a(80.0, 120.0)));
        assert!(a(90.0, 355.0).contains_arc(&a(350.0, 20.0)));
        assert!(a(90.0, 355.0).contains_arc(&a(350.0, 5.0)));
        assert!(!a(90.0, 355.0).contains_arc(&a(80.0, 120.0)));

        assert!(!a(170.0, 190.0).contains_arc(&a(0.0, 360.0)));
        assert!(!a(170.0, 190.0).contains_arc(&a(1.0, 360.0)));
    }

    #[test]
    fn overlap_needs_same_circle() {
        let small_origin = Circle::with_radius(1.0).unwrap();
        let large_origin = Circle::with_radius(5.0).unwrap();
        let small_one = Circle::new(Point2::new(1.0, 1.0), 1.0).unwrap();
        let large_one = Circle::new(Point2::new(1.0, 1.0), 5.0).unwrap();

        for (x, y) in [
            (small_origin, large_origin),
            (large_origin, small_origin),
            (small_origin, small_one),
            (small_origin, large_one),
            (small_one, small_origin),
            (small_one, large_one),
            (large_one, small_one),
        ] {
            assert!(on(x).overlap(&on(y)).is_empty());
        }
    }

    #[test]
    fn overlap_when_separate_or_touching() {
        for (x, y) in [
            (a(5.0, 5.0), a(11.0, 5.0)),
            (a(5.0, 5.0), a(10.0, 5.0)),
            (a(10.0, 350.0), a(0.0, 10.0)),
            (a(350.0, 20.0), a(20.0, 10.0)),
            (a(350.0, 20.0), a(10.0, 10.0)),
        ] {
            assert!(x.overlap(&y).is_empty(), "{x} ∩ {y}");
            assert!(y.overlap(&x).is_empty(), "{y} ∩ {x}");
        }
    }

    #[test]
    fn overlap_identical_and_empty() {
        assert_eq!(a(5.0, 5.0).overlap(&a(5.0, 5.0)), vec![a(5.0, 5.0)]);
        assert_eq!(a(359.0, 50.0).overlap(&a(359.0, 50.0)), vec![a(359.0, 50.0)]);
        assert!(a(5.0, 0.0).overlap(&a(5.0, 5.0)).is_empty());
        assert!(a(5.0, 5.0).overlap(&a(5.0, 0.0)).is_empty());
        assert!(a(5.0, 0.0).overlap(&a(5.0, 0.0)).is_empty());
    }

    #[test]
    fn overlap_when_one_covers_other() {
        for (small, large) in [
            (a(5.0, 5.0), a(4.0, 7.0)),
            (a(355.0, 3.0), a(350.0, 20.0)),
            (a(0.0, 3.0), a(350.0, 20.0)),
            (a(355.0, 7.0), a(350.0, 20.0)),
        ] {
            assert_eq!(small.overlap(&large), vec![small]);
            assert_eq!(large.overlap(&small), vec![small]);
        }
    }

    #[test]
    fn overlap_partial() {
        assert_eq!(a(4.0, 4.0).overlap(&a(5.0, 7.0)), vec![a(5.0, 3.0)]);
        assert_eq!(a(5.0, 7.0).overlap(&a(4.0, 5.0)), vec![a(5.0, 4.0)]);
        assert_eq!(a(350.0, 20.0).overlap(&a(0.0, 13.0)), vec![a(0.0, 10.0)]);
        assert_eq!(a(140.0, 260.0).overlap(&a(115.0, 31.0)), vec![a(140.0, 6.0)]);
    }

    #[test]
    fn overlap_wrapping_around() {
        assert!(a(0.0, 180.0).overlap(&a(180.0, 180.0)).is_empty());
        assert_eq!(a(0.0, 180.0).overlap(&a(180.0, 190.0)), vec![a(0.0, 10.0)]);
        assert_eq!(
            a(0.0, 180.0).overlap(&a(170.0, 200.0)),
            vec![a(0.0, 10.0), a(170.0, 10.0)]
        );
        assert_eq!(
            a(170.0, 200.0).overlap(&a(0.0, 180.0)),
            vec![a(0.0, 10.0), a(170.0, 10.0)]
        );
        assert_eq!(
            a(170.0, 190.0).overlap(&Arc::full(unit())),
            vec![a(170.0, 190.0)]
        );
        assert_eq!(
            a(4.0, 20.0).overlap(&a(15.0, 355.0)),
            vec![a(4.0, 6.0), a(15.0, 9.0)]
        );
        assert_eq!(
            a(15.0, 355.0).overlap(&a(4.0, 20.0)),
            vec![a(4.0, 6.0), a(15.0, 9.0)]
        );
    }

    #[test]
    fn minus_complete_overlap() {
        for (x, y) in [
            (a(10.0, 10.0), a(0.0, 40.0)),
            (a(10.0, 10.0), a(10.0, 10.0)),
            (a(10.0, 10.0), a(10.0, 20.0)),
            (a(10.0, 10.0), a(0.0, 20.0)),
            (a(10.0, 0.0), a(0.0, 20.0)),
            (a(20.0, 0.0), a(0.0, 20.0)),
            (a(355.0, 10.0), a(354.0, 12.0)),
        ] {
            assert!(x.minus(&y).is_empty(), "{x} - {y}");
        }
    }

    #[test]
    fn minus_without_overlap() {
        assert_eq!(a(10.0, 10.0).minus(&a(30.0, 10.0)), vec![a(10.0, 10.0)]);
        assert_eq!(a(10.0, 10.0).minus(&a(30.0, 335.0)), vec![a(10.0, 10.0)]);
        assert_eq!(a(355.0, 10.0).minus(&a(30.0, 10.0)), vec![a(355.0, 10.0)]);
    }

    #[test]
    fn minus_partial() {
        assert_eq!(a(10.0, 20.0).minus(&a(20.0, 10.0)), vec![a(10.0, 10.0)]);
        assert_eq!(a(10.0, 20.0).minus(&a(20.0, 30.0)), vec![a(10.0, 10.0)]);
        assert_eq!(a(10.0, 20.0).minus(&a(350.0, 25.0)), vec![a(15.0, 15.0)]);
        assert_eq!(a(0.0, 180.0).minus(&a(170.0, 200.0)), vec![a(10.0, 160.0)]);
    }

    #[test]
    fn minus_all_sequential() {
        assert_eq!(a(10.0, 20.0).minus_all(&[a(20.0, 10.0)]), vec![a(10.0, 10.0)]);
        assert_eq!(a(10.0, 360.0).minus_all(&[a(20.0, 10.0)]), vec![a(30.0, 350.0)]);
        assert_eq!(
            a(10.0, 360.0).minus_all(&[a(20.0, 10.0), a(30.0, 10.0)]),
            vec![a(40.0, 340.0)]
        );
        assert_eq!(
            a(10.0, 360.0).minus_all(&[a(20.0, 10.0), a(40.0, 10.0)]),
            vec![a(30.0, 10.0), a(50.0, 330.0)]
        );
        assert_eq!(
            a(10.0, 360.0).minus_all(&[a(20.0, 10.0), a(40.0, 10.0), a(80.0, 100.0)]),
            vec![a(30.0, 10.0), a(50.0, 30.0), a(180.0, 200.0)]
        );
        assert!(a(10.0, 0.0).minus_all(&[]).is_empty());
    }

    #[test]
    fn expand() {
        assert_eq!(a(0.0, 10.0).expand_deg(0.0), a(0.0, 10.0));
        assert_eq!(a(0.0, 10.0).expand_deg(1.0), a(359.0, 12.0));
        assert_eq!(a(0.0, 10.0).expand_deg(-1.0), a(1.0, 8.0));
        assert_eq!(a(0.0, 10.0).expand_deg(-5.0), a(5.0, 0.0));
        assert_eq!(a(0.0, 10.0).expand_deg(-8.0), a(5.0, 0.0));
        assert_eq!(a(0.0, 90.0).expand_deg(270.0), a(90.0, 360.0));
    }

    #[test]
    fn expand_by_boundary_distance() {
        let circle = Circle::with_radius(180.0 / std::f64::consts::PI).unwrap();
        // Circumference is 360, so one unit of boundary is one degree.
        let arc = Arc::new(Deg::new(10.0), 10.0, circle).unwrap();
        assert_eq!(arc.expand_pixels(2.0), Arc::new(Deg::new(8.0), 14.0, circle).unwrap());
    }

    #[test]
    fn transforms() {
        let arc = a(350.0, 20.0);
        assert_eq!(arc.rotated(15.0), a(5.0, 20.0));
        assert_eq!(arc.flipped_vertically(), a(350.0, 20.0));
        assert_eq!(a(10.0, 30.0).flipped_vertically(), a(320.0, 30.0));

        let moved = arc.translated(&Vector2::new(2.0, 3.0));
        assert_eq!(*moved.origin(), Point2::new(2.0, 3.0));
        let grown = arc.scaled(&Vector2::new(3.0, 3.0), &Point2::origin()).unwrap();
        assert!((grown.radius() - 3.0).abs() < 1e-12);
        assert_eq!(grown.start(), arc.start());
    }

    #[test]
    fn walk_covers_arc() {
        let quarter = Arc::new(Deg::new(0.0), 90.0, Circle::with_radius(10.0).unwrap()).unwrap();
        let points = quarter.walk(1.0).unwrap();
        assert_eq!(points.len(), 17);
        assert_abs_diff_eq!(points[0], Point2::new(10.0, 0.0), epsilon = 1e-9);
        assert_abs_diff_eq!(points[16], Point2::new(0.0, 10.0), epsilon = 1e-9);
        for p in &points {
            assert!((p.coords.norm() - 10.0).abs() < 1e-9);
        }

        assert_eq!(a(10.0, 0.0).walk(1.0).unwrap().len(), 1);
        assert!(quarter.walk(-1.0).is_err());
    }

    #[test]
    fn walk_rejects_step_below_floor() {
        let err = unit().walk(1e-12).unwrap_err();
        assert!(matches!(
            err,
            crate::SketchGeomError::Geometry(GeometryError::ParameterOutOfRange { parameter: "step", .. })
        ));
        assert!(Arc::full(unit()).walk(1e-12).is_err());

        let finest = 2.0 * std::f64::consts::PI / MAX_WALK_STEPS;
        assert!(Arc::full(unit()).walk(finest * 1.001).is_ok());
    }
}
