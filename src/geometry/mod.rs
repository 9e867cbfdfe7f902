mod angle;
mod arc;
mod bound_rect;
mod circle;
mod line;

pub use angle::{lock_to_360, Deg, RotationDirection};
pub use arc::{Arc, MAX_WALK_STEPS};
pub use bound_rect::BoundRect;
pub use circle::Circle;
pub use line::{Line, Segment};

use crate::math::{Point2, PolyLine, EPSILON};
use crate::operations::ContinuousMaskedShape;

/// A region of the plane that can classify points and clip segments to
/// itself.
pub trait Maskable {
    /// Whether `p` is inside the region or on its border.
    fn contains(&self, p: &Point2) -> bool;

    /// The part of `segment` inside the region, oriented like `segment`.
    ///
    /// Returns `None` when nothing but isolated points are inside.
    fn bound_segment(&self, segment: &Segment) -> Option<Segment>;

    /// The parts of `segment` outside the region.
    fn diff_segment(&self, segment: &Segment) -> Vec<Segment> {
        let Some(bounded) = self.bound_segment(segment) else {
            return vec![*segment];
        };
        [
            Segment::new(*segment.p1(), *bounded.p1()),
            Segment::new(*bounded.p2(), *segment.p2()),
        ]
        .into_iter()
        .filter(|part| part.length() >= EPSILON)
        .collect()
    }

    /// The pieces of a polyline inside the region.
    fn intersection_polyline(&self, points: &[Point2]) -> Vec<PolyLine> {
        ContinuousMaskedShape::new(points, self).to_bound_points(true)
    }

    /// The pieces of a polyline outside the region.
    fn diff_polyline(&self, points: &[Point2]) -> Vec<PolyLine> {
        ContinuousMaskedShape::new(points, self).to_bound_points(false)
    }
}

impl<M: Maskable + ?Sized> Maskable for &M {
    fn contains(&self, p: &Point2) -> bool {
        (**self).contains(p)
    }

    fn bound_segment(&self, segment: &Segment) -> Option<Segment> {
        (**self).bound_segment(segment)
    }
}
