use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn circle_radius_scales_with_progress() {
    let shape = Shape::circle(100.0);
    let anchor = Point::new(50.0, 60.0);
    match shape.geometry(anchor, 0.25) {
        Geometry::Circle(c) => {
            assert_eq!(c.center, anchor);
            assert!(approx(c.radius, 25.0));
        }
        other => panic!("unexpected geometry {other:?}"),
    }
}

#[test]
fn rounded_rectangle_grows_from_anchor() {
    let shape = Shape::rounded_rectangle(60.0, 40.0, 10.0);
    let anchor = Point::new(100.0, 100.0);

    let half = shape.geometry(anchor, 0.5);
    let bb = half.bounding_box();
    assert!(approx(bb.x0, 85.0));
    assert!(approx(bb.x1, 115.0));
    assert!(approx(bb.y0, 90.0));
    assert!(approx(bb.y1, 110.0));

    let full = shape.geometry(anchor, 1.0).bounding_box();
    assert!(approx(full.width(), 60.0));
    assert!(approx(full.height(), 40.0));
    assert!(approx(full.center().x, 100.0));
}

#[test]
fn zero_progress_is_degenerate_and_full_progress_is_not() {
    let anchor = Point::new(10.0, 10.0);
    for shape in [
        Shape::circle(30.0),
        Shape::rounded_rectangle(20.0, 20.0, 10.0),
    ] {
        assert!(shape.geometry(anchor, 0.0).is_empty(), "{shape:?}");
        assert!(!shape.geometry(anchor, 1.0).is_empty(), "{shape:?}");
        assert!(shape.geometry(anchor, 1.0).contains(anchor));
    }
}

#[test]
fn progress_outside_unit_range_is_clamped() {
    let shape = Shape::circle(10.0);
    let over = shape.geometry(Point::ORIGIN, 3.0).bounding_box();
    assert!(approx(over.width(), 20.0));
    assert!(shape.geometry(Point::ORIGIN, -1.0).is_empty());
}

#[test]
fn custom_path_is_scaled_about_anchor() {
    let mut path = BezPath::new();
    path.move_to((-10.0, -10.0));
    path.line_to((10.0, -10.0));
    path.line_to((10.0, 10.0));
    path.line_to((-10.0, 10.0));
    path.close_path();

    let shape = Shape::custom(path);
    let bb = shape.geometry(Point::new(50.0, 50.0), 0.5).bounding_box();
    assert!(approx(bb.x0, 45.0));
    assert!(approx(bb.x1, 55.0));
    assert!(approx(bb.y0, 45.0));
    assert!(approx(bb.y1, 55.0));
}

#[test]
fn default_is_circle_100_with_default_timing() {
    let s = Shape::default();
    assert_eq!(s.kind, ShapeKind::Circle { radius: 100.0 });
    assert_eq!(s.duration, DEFAULT_SHAPE_DURATION);
    assert_eq!(s.ease, DEFAULT_SHAPE_EASE);
}

#[test]
fn validate_rejects_negative_dimensions() {
    assert!(Shape::circle(-1.0).validate().is_err());
    assert!(Shape::rounded_rectangle(10.0, f64::NAN, 1.0).validate().is_err());
    assert!(Shape::custom(BezPath::new()).validate().is_err());
    assert!(Shape::rounded_rectangle(10.0, 10.0, 1.0).validate().is_ok());
}
