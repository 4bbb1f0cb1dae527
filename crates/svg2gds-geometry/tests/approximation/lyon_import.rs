use lyon::math::point;
use svg2gds_geometry::{ApproximationConfig, Converter, Path, Point, TransformConfig};

#[test]
fn test_lyon_paths_convert_to_closed_polygons() {
    // Rounded tab built with the lyon builder, as importers produce it
    let mut builder = lyon::path::Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.line_to(point(10.0, 0.0));
    builder.quadratic_bezier_to(point(12.0, 0.0), point(12.0, 2.0));
    builder.line_to(point(12.0, 6.0));
    builder.cubic_bezier_to(point(12.0, 8.0), point(0.0, 8.0), point(0.0, 6.0));
    builder.close();
    let lyon_path = builder.build();

    let path = Path::from_lyon(&lyon_path);
    assert_eq!(path.segment_count(), 4);

    let converter = Converter::new(
        ApproximationConfig::fixed(8),
        TransformConfig {
            desired_width: Some(24.0),
            flip_y: false,
            center_on_origin: false,
        },
    )
    .unwrap();
    let conversion = converter.convert(&[path]).unwrap();

    assert_eq!(conversion.polygons.len(), 1);
    let polygon = &conversion.polygons[0];
    assert!(polygon.is_closed());
    assert_eq!(polygon.first(), Point::new(0.0, 0.0));
    assert_eq!(polygon.last(), Point::new(0.0, 0.0));
    assert_eq!(conversion.scale_factor, 2.0);
}
