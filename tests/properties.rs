#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use sketch_geom::geometry::{Arc, BoundRect, Circle, Deg, Line};
use sketch_geom::math::{Point2, Vector2};
use sketch_geom::operations::ContinuousMaskedShape;

fn unit() -> Circle {
    Circle::with_radius(1.0).unwrap()
}

/// Arcs on the unit circle with whole-degree starts and lengths in `1..360`.
fn unit_arc() -> impl Strategy<Value = Arc> {
    (0u16..360, 1u16..360)
        .prop_map(|(start, length)| Arc::new(Deg::new(start.into()), length.into(), unit()).unwrap())
}

proptest! {
    #[test]
    fn deg_is_always_normalized(v in -1e6f64..1e6) {
        let d = Deg::new(v);
        prop_assert!((0.0..360.0).contains(&d.value()));
    }

    #[test]
    fn angle_round_trip_projects_onto_boundary(
        ox in -50.0f64..50.0,
        oy in -50.0f64..50.0,
        r in 0.1f64..20.0,
        px in -100.0f64..100.0,
        py in -100.0f64..100.0,
    ) {
        let circle = Circle::new(Point2::new(ox, oy), r).unwrap();
        let p = Point2::new(px, py);
        let offset = p - circle.origin();
        prop_assume!(offset.norm() > 1e-3);

        let projected = circle.origin() + offset.normalize() * r;
        let round_trip = circle.point_at_angle(circle.angle_at_point(&p));
        prop_assert!((round_trip - projected).norm() < 1e-9);
    }

    #[test]
    fn arc_contains_its_start_but_not_just_before(start in 0.0f64..360.0, length in 0.1f64..359.0) {
        let arc = Arc::new(Deg::new(start), length, unit()).unwrap();
        prop_assert!(arc.contains_deg(arc.start()));
        prop_assert!(!arc.contains_deg(arc.start() - 0.01));
    }

    #[test]
    fn full_arc_contains_everything(start in 0.0f64..360.0, angle in 0.0f64..360.0, r in 0.0f64..10.0) {
        let circle = Circle::with_radius(r).unwrap();
        let arc = Arc::new(Deg::new(start), 360.0, circle).unwrap();
        prop_assert!(arc.contains_deg(Deg::new(angle)));
    }

    #[test]
    fn overlap_is_commutative(a in unit_arc(), b in unit_arc()) {
        let ab = a.overlap(&b);
        let ba = b.overlap(&a);
        prop_assert_eq!(ab.len(), ba.len());
        for arc in &ab {
            prop_assert!(ba.contains(arc), "{} missing from {:?}", arc, ba);
        }
    }

    #[test]
    fn minus_of_disjoint_arc_is_identity(
        start in 0u16..360,
        first in 1u16..170,
        gap in 1u16..10,
        second in 1u16..170,
    ) {
        let a = Arc::new(Deg::new(start.into()), first.into(), unit()).unwrap();
        let b_start = Deg::new(f64::from(start + first + gap));
        let b = Arc::new(b_start, second.into(), unit()).unwrap();
        prop_assert_eq!(a.minus(&b), vec![a]);
    }

    #[test]
    fn line_missing_rect_is_unbounded(
        w in 0.1f64..100.0,
        h in 0.1f64..100.0,
        theta in 0.0f64..360.0,
        clearance in 0.5f64..100.0,
    ) {
        let rect = BoundRect::new(Point2::new(-3.0, 7.0), w, h).unwrap();
        let normal = Deg::new(theta).unit_vector();
        let circumradius = Vector2::new(w, h).norm() / 2.0;
        let origin = rect.center() + normal * (circumradius + clearance);
        let line = Line::new(origin, Deg::new(theta).perpendicular());
        prop_assert!(rect.bound_line(&line).is_none());
    }

    #[test]
    fn masked_shape_fully_inside_round_trips(
        coords in prop::collection::vec((1.0f64..99.0, 1.0f64..99.0), 1..20),
    ) {
        let rect = BoundRect::new(Point2::origin(), 100.0, 100.0).unwrap();
        let points: Vec<Point2> = coords.into_iter().map(|(x, y)| Point2::new(x, y)).collect();
        let shape = ContinuousMaskedShape::new(&points, rect);
        prop_assert_eq!(shape.to_bound_points(true), vec![points.clone()]);
        prop_assert!(shape.to_bound_points(false).is_empty());
    }
}
