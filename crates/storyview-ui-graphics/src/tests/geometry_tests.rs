use super::*;

#[test]
fn identity_layer_keeps_bounds() {
    let rect = Rect::from_size(Size::new(390.0, 844.0));
    let layer = GraphicsLayer::default();
    assert!(layer.is_identity());
    assert_eq!(layer.transform_rect(rect), rect);
}

#[test]
fn layer_scales_about_center_then_translates() {
    let rect = Rect::from_size(Size::new(400.0, 800.0));
    let layer = GraphicsLayer {
        scale: 0.5,
        translation_x: 10.0,
        translation_y: 100.0,
        ..GraphicsLayer::default()
    };

    let transformed = layer.transform_rect(rect);

    assert_eq!(transformed.width, 200.0);
    assert_eq!(transformed.height, 400.0);
    assert_eq!(transformed.x, 110.0);
    assert_eq!(transformed.y, 300.0);
}

#[test]
fn uniform_shape_rounds_every_corner() {
    let radii = RoundedCornerShape::uniform(24.0).radii();
    assert_eq!(radii, CornerRadii::uniform(24.0));
    assert_eq!(radii.top_left, 24.0);
    assert_eq!(radii.bottom_right, 24.0);
}

#[test]
fn rect_contains_its_edges_and_center() {
    let rect = Rect::from_size(Size::new(400.0, 800.0));
    assert_eq!(rect.center(), Point::new(200.0, 400.0));
    assert!(rect.contains(0.0, 0.0));
    assert!(rect.contains(400.0, 800.0));
    assert!(!rect.contains(400.5, 10.0));
}

#[test]
fn point_arithmetic() {
    let a = Point::new(3.0, 4.0);
    let b = Point::new(1.0, 1.0);
    assert_eq!(a - b, Point::new(2.0, 3.0));
    assert_eq!(a + b, Point::new(4.0, 5.0));
    assert_eq!(a.distance(), 5.0);
    assert!(!Point::new(f32::NAN, 0.0).is_finite());
}
