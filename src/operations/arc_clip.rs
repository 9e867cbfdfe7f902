use crate::geometry::{Arc, BoundRect, Circle};
use crate::math::{dedup_points, Point2};

/// Splits a circle into arcs at the points where it crosses a rectangle's
/// border.
///
/// Points where the circle only touches the border are ignored. Each
/// resulting arc lies entirely inside or entirely outside the rectangle.
pub struct SplitCircleAtRect {
    circle: Circle,
    rect: BoundRect,
}

impl SplitCircleAtRect {
    /// Creates a new split of `circle` at the border of `rect`.
    #[must_use]
    pub fn new(circle: Circle, rect: BoundRect) -> Self {
        Self { circle, rect }
    }

    /// Executes the split, returning arcs sorted by start angle.
    ///
    /// A circle that never crosses the border comes back whole.
    #[must_use]
    pub fn execute(&self) -> Vec<Arc> {
        let hits: Vec<Point2> = self
            .rect
            .segments()
            .iter()
            .flat_map(|edge| self.circle.segment_intersections(edge))
            .collect();
        let mut hits = dedup_points(&hits);
        if hits.is_empty() {
            return vec![Arc::full(self.circle)];
        }
        hits.sort_by(|a, b| {
            let angle = |p: &Point2| self.circle.angle_at_point(p).value();
            angle(a).total_cmp(&angle(b))
        });

        let n = hits.len();
        let crossings: Vec<Point2> = (0..n)
            .filter(|&i| {
                let prev = &hits[(i + n - 1) % n];
                let next = &hits[(i + 1) % n];
                let crossing = !self.is_tangent(prev, &hits[i], next);
                if !crossing {
                    tracing::debug!(point = %hits[i], rect = %self.rect, "dropping tangent point");
                }
                crossing
            })
            .map(|i| hits[i])
            .collect();

        if crossings.len() < 2 {
            return vec![Arc::full(self.circle)];
        }

        let m = crossings.len();
        let mut arcs: Vec<Arc> = (0..m)
            .map(|i| Arc::from_points(&crossings[(i + m - 1) % m], &crossings[i], self.circle))
            .collect();
        arcs.sort_by(|a, b| a.start().value().total_cmp(&b.start().value()));
        arcs
    }

    /// Whether the arcs on both sides of `point` are on the same side of the
    /// rectangle.
    fn is_tangent(&self, prev: &Point2, point: &Point2, next: &Point2) -> bool {
        let before = Arc::from_points(prev, point, self.circle);
        let after = Arc::from_points(point, next, self.circle);
        self.rect.contains(&before.point_at_bisector()) == self.rect.contains(&after.point_at_bisector())
    }
}

/// Which side of a rectangle to keep when clipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipSide {
    Inside,
    Outside,
}

/// Clips an arc to one side of a rectangle.
pub struct ClipArcToRect {
    arc: Arc,
    rect: BoundRect,
    side: ClipSide,
}

impl ClipArcToRect {
    /// Creates a new clip of `arc` to `side` of `rect`.
    #[must_use]
    pub fn new(arc: Arc, rect: BoundRect, side: ClipSide) -> Self {
        Self { arc, rect, side }
    }

    /// Clips a whole circle.
    #[must_use]
    pub fn circle(circle: Circle, rect: BoundRect, side: ClipSide) -> Self {
        Self::new(Arc::full(circle), rect, side)
    }

    /// Executes the clip, returning the pieces of the arc on the requested
    /// side.
    #[must_use]
    pub fn execute(&self) -> Vec<Arc> {
        let keep_inside = self.side == ClipSide::Inside;
        SplitCircleAtRect::new(*self.arc.circle(), self.rect)
            .execute()
            .into_iter()
            .filter(|piece| self.rect.contains(&piece.point_at_bisector()) == keep_inside)
            .flat_map(|piece| self.arc.overlap(&piece))
            .collect()
    }
}
