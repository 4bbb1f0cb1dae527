use svg2gds_core::{BoundingBox, GeometryError, Point, Polygon};

fn polygon(points: &[(f64, f64)], closed: bool) -> Polygon {
    Polygon::new(points.iter().copied().map(Point::from).collect(), closed).unwrap()
}

#[test]
fn test_bounding_box_spans_all_polygons() {
    let polygons = vec![
        polygon(&[(0.0, 0.0), (4.0, 1.0), (2.0, 3.0)], true),
        polygon(&[(-5.0, 2.0), (-1.0, 7.5)], false),
    ];
    let bbox = BoundingBox::from_polygons(&polygons).unwrap();

    assert_eq!(bbox.min_x, -5.0);
    assert_eq!(bbox.max_x, 4.0);
    assert_eq!(bbox.min_y, 0.0);
    assert_eq!(bbox.max_y, 7.5);
    assert_eq!(bbox.width(), 9.0);
    assert_eq!(bbox.center(), Point::new(-0.5, 3.75));
}

#[test]
fn test_no_polygons_no_bounding_box() {
    assert_eq!(BoundingBox::from_polygons(&[]), None);
}

#[test]
fn test_vertical_run_is_degenerate() {
    let polygons = vec![polygon(&[(3.0, 0.0), (3.0, 8.0)], false)];
    let bbox = BoundingBox::from_polygons(&polygons).unwrap();
    assert!(bbox.is_degenerate_width());
    assert_eq!(bbox.height(), 8.0);
}

#[test]
fn test_map_points_keeps_order() {
    let mut poly = polygon(&[(1.0, 1.0), (2.0, 3.0), (1.0, 1.0)], true);
    poly.map_points(|p| Point::new(p.x * 2.0, -p.y));

    assert_eq!(
        poly.points(),
        &[
            Point::new(2.0, -1.0),
            Point::new(4.0, -3.0),
            Point::new(2.0, -1.0)
        ]
    );
    assert!(poly.is_closed());
}

#[test]
fn test_path_errors_chain_to_root_cause() {
    let err = GeometryError::malformed_segment(2, "control1 is not finite").in_path(4);
    assert_eq!(
        err.to_string(),
        "Path 4: Malformed segment 2: control1 is not finite"
    );
    assert!(matches!(
        err.root_cause(),
        GeometryError::MalformedSegment { segment: 2, .. }
    ));
}
