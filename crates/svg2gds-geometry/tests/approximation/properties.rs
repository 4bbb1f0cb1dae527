use proptest::prelude::*;
use svg2gds_geometry::transform::{flip_y, scale_to_width};
use svg2gds_geometry::{
    subdivide_fixed, AdaptiveRefiner, ArcSegment, BoundingBox, Point, Polygon, Segment,
};

fn coord() -> impl Strategy<Value = f64> {
    -1000.0..1000.0f64
}

fn point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

fn segment() -> impl Strategy<Value = Segment> {
    prop_oneof![
        (point(), point()).prop_map(|(s, e)| Segment::line(s, e)),
        (point(), point(), point()).prop_map(|(s, c, e)| Segment::quadratic(s, c, e)),
        (point(), point(), point(), point())
            .prop_map(|(s, c1, c2, e)| Segment::cubic(s, c1, c2, e)),
        (
            point(),
            point(),
            0.0..500.0f64,
            0.0..500.0f64,
            -180.0..180.0f64,
            any::<bool>(),
            any::<bool>()
        )
            .prop_map(|(start, end, rx, ry, rotation, large_arc, sweep)| {
                Segment::Arc(ArcSegment {
                    start,
                    end,
                    rx,
                    ry,
                    rotation,
                    large_arc,
                    sweep,
                })
            }),
    ]
}

fn polygons() -> impl Strategy<Value = Vec<Polygon>> {
    prop::collection::vec(
        prop::collection::vec(point(), 1..20).prop_map(|pts| Polygon::new(pts, false).unwrap()),
        1..5,
    )
}

proptest! {
    #[test]
    fn prop_fixed_single_step_is_endpoints(seg in segment()) {
        let points = subdivide_fixed(&seg.prepare(), 1).unwrap();
        prop_assert_eq!(points, vec![seg.start(), seg.end()]);
    }

    #[test]
    fn prop_fixed_step_count(seg in segment(), steps in 1u32..64) {
        let points = subdivide_fixed(&seg.prepare(), steps).unwrap();
        prop_assert_eq!(points.len(), steps as usize + 1);
        prop_assert!(points.iter().all(Point::is_finite));
    }

    #[test]
    fn prop_adaptive_exact_endpoints(seg in segment(), max_error in 0.001..10.0f64) {
        let refinement = AdaptiveRefiner::new(max_error).unwrap().approximate(&seg.prepare());
        prop_assert_eq!(refinement.points.first().copied(), Some(seg.start()));
        prop_assert_eq!(refinement.points.last().copied(), Some(seg.end()));
    }

    #[test]
    fn prop_adaptive_monotonic(seg in segment(), max_error in 0.01..10.0f64, shrink in 0.05..1.0f64) {
        let prepared = seg.prepare();
        let coarse = AdaptiveRefiner::new(max_error).unwrap().approximate(&prepared);
        let fine = AdaptiveRefiner::new(max_error * shrink).unwrap().approximate(&prepared);
        prop_assert!(fine.points.len() >= coarse.points.len());
    }

    #[test]
    fn prop_adaptive_line_two_points(start in point(), end in point(), max_error in 1e-6..10.0f64) {
        let refinement = AdaptiveRefiner::new(max_error)
            .unwrap()
            .approximate(&Segment::line(start, end).prepare());
        prop_assert_eq!(refinement.points, vec![start, end]);
    }

    #[test]
    fn prop_scale_reaches_desired_width(mut polys in polygons(), width in 0.1..10_000.0f64) {
        let measured = BoundingBox::from_polygons(&polys).unwrap().width();
        prop_assume!(measured > 1.0);

        scale_to_width(&mut polys, width).unwrap();
        let scaled = BoundingBox::from_polygons(&polys).unwrap().width();
        prop_assert!((scaled - width).abs() <= width * 1e-9);
    }

    #[test]
    fn prop_double_flip_is_identity(polys in polygons()) {
        let mut flipped = polys.clone();
        flip_y(&mut flipped);
        flip_y(&mut flipped);
        prop_assert_eq!(flipped, polys);
    }
}
