use svg2gds_geometry::{
    ApproximationConfig, BoundingBox, Converter, GeometryError, Path, PathAssembler, Point,
    Segment, TransformConfig,
};

fn arch() -> Path {
    Path::from(vec![Segment::cubic(
        Point::new(0.0, 0.0),
        Point::new(0.0, 10.0),
        Point::new(10.0, 10.0),
        Point::new(10.0, 0.0),
    )])
}

fn unit_transform() -> TransformConfig {
    TransformConfig {
        desired_width: None,
        flip_y: false,
        center_on_origin: false,
    }
}

#[test]
fn test_cubic_fixed_four_steps() {
    let converter = Converter::new(ApproximationConfig::fixed(4), unit_transform()).unwrap();
    let conversion = converter.convert(&[arch()]).unwrap();

    assert_eq!(conversion.polygons.len(), 1);
    let polygon = &conversion.polygons[0];
    assert_eq!(polygon.len(), 5);
    assert_eq!(polygon.first(), Point::new(0.0, 0.0));
    assert_eq!(polygon.last(), Point::new(10.0, 0.0));
}

#[test]
fn test_cubic_adaptive_coarse_vs_fine() {
    let coarse = PathAssembler::new(&ApproximationConfig::adaptive(0.5))
        .unwrap()
        .assemble(&arch())
        .unwrap();
    let fine = PathAssembler::new(&ApproximationConfig::adaptive(0.01))
        .unwrap()
        .assemble(&arch())
        .unwrap();

    assert!(coarse.polygons[0].len() < fine.polygons[0].len());
}

#[test]
fn test_closed_square_scaled_to_five() {
    let square = Path::builder()
        .move_to(Point::new(0.0, 0.0))
        .line_to(Point::new(10.0, 0.0))
        .line_to(Point::new(10.0, 10.0))
        .line_to(Point::new(0.0, 10.0))
        .close()
        .build();

    let converter = Converter::new(
        ApproximationConfig::fixed(1),
        TransformConfig {
            desired_width: Some(5.0),
            ..unit_transform()
        },
    )
    .unwrap();
    let conversion = converter.convert(&[square]).unwrap();

    let bbox = conversion.bounds.unwrap();
    assert_eq!(bbox.width(), 5.0);
    assert_eq!(bbox.height(), 5.0);
    assert_eq!(conversion.scale_factor, 0.5);
    assert!(conversion.polygons[0].is_closed());
}

#[test]
fn test_vertical_line_cannot_be_scaled() {
    let line = Path::from(vec![Segment::line(
        Point::new(2.0, 0.0),
        Point::new(2.0, 8.0),
    )]);
    let mut polygons = PathAssembler::new(&ApproximationConfig::fixed(2))
        .unwrap()
        .assemble(&line)
        .unwrap()
        .polygons;
    let before = polygons.clone();

    let err = svg2gds_geometry::transform::scale_to_width(&mut polygons, 5.0).unwrap_err();
    assert!(matches!(err, GeometryError::DegenerateBoundingBox { .. }));
    assert_eq!(polygons, before);

    let converter = Converter::new(
        ApproximationConfig::fixed(2),
        TransformConfig {
            desired_width: Some(5.0),
            ..unit_transform()
        },
    )
    .unwrap();
    let err = converter.convert(&[line]).unwrap_err();
    assert!(matches!(err, GeometryError::DegenerateBoundingBox { width } if width == 0.0));
}

#[test]
fn test_mixed_document_flipped() {
    let path = Path::builder()
        .move_to(Point::new(0.0, 0.0))
        .line_to(Point::new(20.0, 0.0))
        .arc_to(10.0, 10.0, 0.0, false, true, Point::new(0.0, 0.0))
        .close()
        .move_to(Point::new(5.0, 2.0))
        .quadratic_to(Point::new(10.0, 6.0), Point::new(15.0, 2.0))
        .build();

    let converter = Converter::new(
        ApproximationConfig::adaptive(0.05),
        TransformConfig {
            desired_width: Some(40.0),
            flip_y: true,
            center_on_origin: false,
        },
    )
    .unwrap();
    let conversion = converter.convert(&[path]).unwrap();

    assert_eq!(conversion.polygons.len(), 2);
    assert_eq!(conversion.scale_factor, 2.0);
    let bbox: BoundingBox = conversion.bounds.unwrap();
    assert!((bbox.width() - 40.0).abs() < 1e-9);
    // Flipped after scaling: the half disc now lies below the x axis
    assert!(bbox.max_y <= 1e-9);
    assert_eq!(conversion.stats.depth_limited, 0);
}
