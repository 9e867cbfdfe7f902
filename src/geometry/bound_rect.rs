use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::{dedup_points, equals_delta, Point2, PolyLine, Vector2, EPSILON};

use super::{Line, Maskable, Segment};

/// An axis-aligned rectangle.
///
/// Screen orientation: y grows downward, so `bottom = top + height`.
/// Width and height are never negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundRect {
    top_left: Point2,
    width: f64,
    height: f64,
}

impl BoundRect {
    /// Creates a new rectangle.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NegativeDimension`] if `width` or `height` is
    /// negative or NaN.
    pub fn new(top_left: Point2, width: f64, height: f64) -> Result<Self> {
        check_dimension("width", width)?;
        check_dimension("height", height)?;
        Ok(Self::from_parts(top_left, width, height))
    }

    pub(crate) fn from_parts(top_left: Point2, width: f64, height: f64) -> Self {
        debug_assert!(width >= 0.0 && height >= 0.0);
        Self {
            top_left,
            width,
            height,
        }
    }

    /// A rectangle of the given size at the origin.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NegativeDimension`] for a negative size.
    pub fn from_size(width: f64, height: f64) -> Result<Self> {
        Self::new(Point2::origin(), width, height)
    }

    /// # Errors
    ///
    /// Returns [`GeometryError::NegativeDimension`] if `bottom_right` lies
    /// above or left of `top_left`.
    pub fn from_corners(top_left: &Point2, bottom_right: &Point2) -> Result<Self> {
        let size = bottom_right - top_left;
        Self::new(*top_left, size.x, size.y)
    }

    /// The rectangle spanned by two arbitrary corners.
    #[must_use]
    pub fn from_corners_safe(a: &Point2, b: &Point2) -> Self {
        let min = a.inf(b);
        let max = a.sup(b);
        Self::from_parts(min, max.x - min.x, max.y - min.y)
    }

    /// # Errors
    ///
    /// Returns [`GeometryError::NegativeDimension`] for a negative size.
    pub fn centered(center: &Point2, width: f64, height: f64) -> Result<Self> {
        Self::new(center - Vector2::new(width, height) / 2.0, width, height)
    }

    /// Returns the top-left corner.
    #[must_use]
    pub fn top_left(&self) -> &Point2 {
        &self.top_left
    }

    /// Returns the width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the size as a `(width, height)` vector.
    #[must_use]
    pub fn size(&self) -> Vector2 {
        Vector2::new(self.width, self.height)
    }

    /// Returns the y coordinate of the top edge.
    #[must_use]
    pub fn top(&self) -> f64 {
        self.top_left.y
    }

    /// Returns the x coordinate of the left edge.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.top_left.x
    }

    /// Returns the y coordinate of the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top_left.y + self.height
    }

    /// Returns the x coordinate of the right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.top_left.x + self.width
    }

    /// Returns the top-right corner.
    #[must_use]
    pub fn top_right(&self) -> Point2 {
        Point2::new(self.right(), self.top())
    }

    /// Returns the bottom-left corner.
    #[must_use]
    pub fn bottom_left(&self) -> Point2 {
        Point2::new(self.left(), self.bottom())
    }

    /// Returns the bottom-right corner.
    #[must_use]
    pub fn bottom_right(&self) -> Point2 {
        Point2::new(self.right(), self.bottom())
    }

    /// Returns the center of the rect.
    #[must_use]
    pub fn center(&self) -> Point2 {
        self.top_left + self.size() / 2.0
    }

    /// Returns the area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns the top edge, left to right.
    #[must_use]
    pub fn top_segment(&self) -> Segment {
        Segment::new(self.top_left, self.top_right())
    }

    /// Returns the bottom edge, left to right.
    #[must_use]
    pub fn bottom_segment(&self) -> Segment {
        Segment::new(self.bottom_left(), self.bottom_right())
    }

    /// Returns the left edge, top to bottom.
    #[must_use]
    pub fn left_segment(&self) -> Segment {
        Segment::new(self.top_left, self.bottom_left())
    }

    /// Returns the right edge, top to bottom.
    #[must_use]
    pub fn right_segment(&self) -> Segment {
        Segment::new(self.top_right(), self.bottom_right())
    }

    /// Top, bottom, left, right.
    #[must_use]
    pub fn segments(&self) -> [Segment; 4] {
        [
            self.top_segment(),
            self.bottom_segment(),
            self.left_segment(),
            self.right_segment(),
        ]
    }

    /// Returns the corners clockwise from the top-left.
    #[must_use]
    pub fn points_clockwise(&self) -> [Point2; 4] {
        [
            self.top_left,
            self.top_right(),
            self.bottom_right(),
            self.bottom_left(),
        ]
    }

    /// The outline as a closed polyline.
    #[must_use]
    pub fn to_polyline(&self) -> PolyLine {
        let mut outline = self.points_clockwise().to_vec();
        outline.push(self.top_left);
        outline
    }

    /// Whether `p` is inside or on the border.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        (self.top()..=self.bottom()).contains(&p.y) && (self.left()..=self.right()).contains(&p.x)
    }

    /// Returns `true` if every point lies in the rect.
    #[must_use]
    pub fn contains_all(&self, points: &[Point2]) -> bool {
        points.iter().all(|p| self.contains(p))
    }

    fn is_top(&self, line: &Line) -> bool {
        equals_delta(line.origin().y, self.top()) && line.slope().is_horizontal()
    }

    fn is_bottom(&self, line: &Line) -> bool {
        equals_delta(line.origin().y, self.bottom()) && line.slope().is_horizontal()
    }

    fn is_left(&self, line: &Line) -> bool {
        equals_delta(line.origin().x, self.left()) && line.slope().is_vertical()
    }

    fn is_right(&self, line: &Line) -> bool {
        equals_delta(line.origin().x, self.right()) && line.slope().is_vertical()
    }

    /// The part of an infinite line that lies within the rectangle.
    ///
    /// Lines running along an edge give that edge. Otherwise the line has to
    /// cross the border at exactly two distinct points; the result runs
    /// between them in the line's direction. Corner touches and misses give
    /// `None`.
    #[must_use]
    pub fn bound_line(&self, line: &Line) -> Option<Segment> {
        if self.is_top(line) {
            return Some(self.top_segment());
        }
        if self.is_bottom(line) {
            return Some(self.bottom_segment());
        }
        if self.is_left(line) {
            return Some(self.left_segment());
        }
        if self.is_right(line) {
            return Some(self.right_segment());
        }

        let hits: Vec<Point2> = self
            .segments()
            .iter()
            .filter_map(|edge| line.segment_intersection(edge))
            .collect();
        let mut hits = dedup_points(&hits);
        if hits.len() != 2 {
            tracing::trace!(
                crossings = hits.len(),
                rect = %self,
                "line does not cross rect at two points"
            );
            return None;
        }

        hits.sort_by(|a, b| line.project(a).total_cmp(&line.project(b)));
        Some(Segment::new(hits[0], hits[1]))
    }

    /// The part of `segment` inside the rectangle, oriented like `segment`.
    #[must_use]
    pub fn bound_segment(&self, segment: &Segment) -> Option<Segment> {
        if self.contains(segment.p1())
            && self.rough_dist_from_sides(segment.p1()) > segment.length() + EPSILON
        {
            return Some(*segment);
        }

        self.bound_line(&segment.to_line())?
            .overlap_with(segment)
            .map(|bounded| bounded.reoriented_like(segment))
    }

    fn rough_dist_from_sides(&self, p: &Point2) -> f64 {
        (p.x - self.left())
            .abs()
            .min((p.x - self.right()).abs())
            .min((p.y - self.top()).abs())
            .min((p.y - self.bottom()).abs())
    }

    /// The overlapping area, or `None` if the rectangles only touch or are
    /// apart.
    #[must_use]
    pub fn bounds_intersection(&self, other: &BoundRect) -> Option<BoundRect> {
        if self.right() <= other.left() || other.right() <= self.left() {
            return None;
        }
        if self.bottom() <= other.top() || other.bottom() <= self.top() {
            return None;
        }
        let top_left = self.top_left.sup(&other.top_left);
        let bottom_right = self.bottom_right().inf(&other.bottom_right());
        Some(Self::from_corners_safe(&top_left, &bottom_right))
    }

    /// The smallest rectangle covering both.
    #[must_use]
    pub fn union_bound(&self, other: &BoundRect) -> BoundRect {
        let top_left = self.top_left.inf(&other.top_left);
        let bottom_right = self.bottom_right().sup(&other.bottom_right());
        Self::from_corners_safe(&top_left, &bottom_right)
    }

    /// Grows every side outward by `amount`; negative amounts shrink.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NegativeDimension`] when shrinking past zero.
    pub fn expand(&self, amount: &Vector2) -> Result<Self> {
        Self::new(
            self.top_left - amount,
            self.width + 2.0 * amount.x,
            self.height + 2.0 * amount.y,
        )
    }

    /// # Errors
    ///
    /// Returns [`GeometryError::NegativeDimension`] when shrinking past zero.
    pub fn shrink(&self, amount: &Vector2) -> Result<Self> {
        self.expand(&-amount)
    }

    /// Returns the smallest rect covering both `self` and `p`.
    #[must_use]
    pub fn expand_to_include(&self, p: &Point2) -> Self {
        if self.contains(p) {
            return *self;
        }
        Self::from_corners_safe(&self.top_left.inf(p), &self.bottom_right().sup(p))
    }

    /// Returns the rect moved by `delta`.
    #[must_use]
    pub fn translated(&self, delta: &Vector2) -> Self {
        Self {
            top_left: self.top_left + delta,
            ..*self
        }
    }

    /// Scales about `anchor`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NegativeDimension`] for a negative scale.
    pub fn scaled(&self, scale: &Vector2, anchor: &Point2) -> Result<Self> {
        Self::new(
            anchor + (self.top_left - anchor).component_mul(scale),
            self.width * scale.x,
            self.height * scale.y,
        )
    }

    /// Returns a rect of the same size centered on `center`.
    #[must_use]
    pub fn recentered(&self, center: &Point2) -> Self {
        self.translated(&(center - self.center()))
    }

    /// The point at fractions `(px, py)` of the width and height.
    #[must_use]
    pub fn point_at(&self, px: f64, py: f64) -> Point2 {
        self.top_left + Vector2::new(self.width * px, self.height * py)
    }
}

fn check_dimension(dimension: &'static str, value: f64) -> Result<()> {
    if value.is_nan() || value < 0.0 {
        return Err(GeometryError::NegativeDimension { dimension, value }.into());
    }
    Ok(())
}

impl Maskable for BoundRect {
    fn contains(&self, p: &Point2) -> bool {
        BoundRect::contains(self, p)
    }

    fn bound_segment(&self, segment: &Segment) -> Option<Segment> {
        BoundRect::bound_segment(self, segment)
    }
}

impl fmt::Display for BoundRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BoundRect(top={}, left={}, bottom={}, right={})",
            self.top(),
            self.left(),
            self.bottom(),
            self.right()
        )
    }
}
