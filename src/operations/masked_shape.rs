use crate::geometry::{Maskable, Segment};
use crate::math::{points_coincide, Point2, PolyLine};

/// A maximal run of consecutive points on the same side of a mask.
///
/// Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ContinuousPoints {
    is_in_bound: bool,
    points: PolyLine,
}

impl ContinuousPoints {
    /// Starts a run at `first`.
    #[must_use]
    pub fn new(is_in_bound: bool, first: Point2) -> Self {
        Self {
            is_in_bound,
            points: vec![first],
        }
    }

    /// Returns `true` if the run lies inside the mask.
    #[must_use]
    pub fn is_in_bound(&self) -> bool {
        self.is_in_bound
    }

    /// Returns the points of the run.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns the first point of the run.
    #[must_use]
    pub fn first(&self) -> &Point2 {
        &self.points[0]
    }

    /// Returns the last point of the run.
    #[must_use]
    pub fn last(&self) -> &Point2 {
        &self.points[self.points.len() - 1]
    }

    fn push(&mut self, p: Point2) {
        self.points.push(p);
    }

    /// This run followed by `other`, with a shared seam point kept once.
    #[must_use]
    pub fn combined_with(&self, other: &ContinuousPoints) -> Self {
        let skip = usize::from(points_coincide(self.last(), other.first()));
        let mut points = self.points.clone();
        points.extend_from_slice(&other.points[skip..]);
        Self {
            is_in_bound: self.is_in_bound,
            points,
        }
    }
}

/// Whether a polyline is closed: more than two points with the last on the
/// first.
#[must_use]
pub fn is_cyclical(points: &[Point2]) -> bool {
    match points {
        [first, .., last] if points.len() > 2 => points_coincide(first, last),
        _ => false,
    }
}

/// Groups `points` into runs of the same mask classification.
///
/// For a closed polyline whose first and last runs agree, those two runs are
/// one run across the seam; it is stored first.
#[must_use]
pub fn split_in_bounds<M: Maskable + ?Sized>(mask: &M, points: &[Point2]) -> Vec<ContinuousPoints> {
    let mut runs: Vec<ContinuousPoints> = Vec::new();
    for p in points {
        let inside = mask.contains(p);
        match runs.last_mut() {
            Some(run) if run.is_in_bound == inside => run.push(*p),
            _ => runs.push(ContinuousPoints::new(inside, *p)),
        }
    }

    let seam_joins = match runs.as_slice() {
        [first, .., last] => first.is_in_bound == last.is_in_bound,
        _ => false,
    };
    if seam_joins && is_cyclical(points) {
        if let Some(last) = runs.pop() {
            runs[0] = last.combined_with(&runs[0]);
        }
    }
    runs
}

/// A polyline split into runs inside and outside a mask.
///
/// Rebuilds the clipped pieces on either side, with the boundary crossings
/// between runs interpolated in.
#[derive(Debug, Clone)]
pub struct ContinuousMaskedShape<M: Maskable> {
    bound: M,
    runs: Vec<ContinuousPoints>,
    cyclical: bool,
}

impl<M: Maskable> ContinuousMaskedShape<M> {
    /// Splits `points` against `bound`.
    #[must_use]
    pub fn new(points: &[Point2], bound: M) -> Self {
        let runs = split_in_bounds(&bound, points);
        Self {
            bound,
            runs,
            cyclical: is_cyclical(points),
        }
    }

    /// Returns the runs in order.
    #[must_use]
    pub fn runs(&self) -> &[ContinuousPoints] {
        &self.runs
    }

    /// Returns the mask.
    #[must_use]
    pub fn bound(&self) -> &M {
        &self.bound
    }

    /// Returns `true` if the input polyline was closed.
    #[must_use]
    pub fn is_cyclical(&self) -> bool {
        self.cyclical
    }

    /// Returns the first run, if any.
    #[must_use]
    pub fn first(&self) -> Option<&ContinuousPoints> {
        self.runs.first()
    }

    /// Returns the last run, if any.
    #[must_use]
    pub fn last(&self) -> Option<&ContinuousPoints> {
        self.runs.last()
    }

    /// The pieces on one side of the mask: inside for `bound_inside`,
    /// outside otherwise.
    ///
    /// Each piece is extended to where the polyline crosses the mask's
    /// border. The open ends of an open polyline are never extended.
    #[must_use]
    pub fn to_bound_points(&self, bound_inside: bool) -> Vec<PolyLine> {
        self.runs
            .iter()
            .enumerate()
            .filter(|(_, run)| run.is_in_bound == bound_inside)
            .map(|(i, run)| {
                let mut piece = Vec::with_capacity(run.points.len() + 2);
                if let Some(prev) = self.neighbour_before(i) {
                    piece.extend(
                        self.boundary_crossing(prev.last(), prev.is_in_bound, run.first())
                            .filter(|c| !points_coincide(c, run.first())),
                    );
                }
                piece.extend_from_slice(&run.points);
                if let Some(next) = self.neighbour_after(i) {
                    piece.extend(
                        self.boundary_crossing(run.last(), run.is_in_bound, next.first())
                            .filter(|c| !points_coincide(c, run.last())),
                    );
                }
                piece
            })
            .collect()
    }

    fn neighbour_before(&self, i: usize) -> Option<&ContinuousPoints> {
        match i.checked_sub(1) {
            Some(prev) => self.runs.get(prev),
            None if self.cyclical && self.runs.len() > 1 => self.runs.last(),
            None => None,
        }
    }

    fn neighbour_after(&self, i: usize) -> Option<&ContinuousPoints> {
        match self.runs.get(i + 1) {
            Some(next) => Some(next),
            None if self.cyclical && self.runs.len() > 1 => self.runs.first(),
            None => None,
        }
    }

    /// Where the step `a → b` passes the border: the end of its clipped
    /// portion that is not `a` (when `a` is inside) or not `b`.
    ///
    /// A step that only touches the border has no clipped portion; the
    /// touching endpoint is the crossing then.
    fn boundary_crossing(&self, a: &Point2, a_inside: bool, b: &Point2) -> Option<Point2> {
        let step = Segment::new(*a, *b);
        if let Some(clipped) = self.bound.bound_segment(&step) {
            return Some(if a_inside { *clipped.p2() } else { *clipped.p1() });
        }
        let touching = if a_inside { a } else { b };
        if self.bound.contains(touching) {
            return Some(*touching);
        }
        tracing::trace!(from = %a, to = %b, "no boundary crossing between runs");
        None
    }
}
