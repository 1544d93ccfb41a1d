use approx::assert_relative_eq;

use wasted_core::geometry::{fit_contain, Rect, Vec2, ViewportSize};
use wasted_core::viewport::Transform;

#[test]
fn test_pan_bounds() {
    let size = ViewportSize::new(400.0, 300.0);
    assert_eq!(size.pan_bounds(1.0), Vec2::ZERO);
    assert_eq!(size.pan_bounds(3.0), Vec2::new(400.0, 300.0));
    assert_eq!(size.pan_bounds(0.5), Vec2::ZERO);
}

#[test]
fn test_fit_contain_keeps_aspect() {
    let fitted = fit_contain(ViewportSize::new(1400.0, 1400.0), ViewportSize::new(400.0, 300.0));
    assert_relative_eq!(fitted.width, 300.0);
    assert_relative_eq!(fitted.height, 300.0);

    let fitted = fit_contain(ViewportSize::new(200.0, 100.0), ViewportSize::new(400.0, 300.0));
    assert_relative_eq!(fitted.width, 400.0);
    assert_relative_eq!(fitted.height, 200.0);

    assert_eq!(
        fit_contain(ViewportSize::new(0.0, 10.0), ViewportSize::new(400.0, 300.0)),
        ViewportSize::default()
    );
}

#[test]
fn test_transform_apply_scales_about_center_then_translates() {
    let viewport = Rect {
        min: Vec2::new(100.0, 50.0),
        size: ViewportSize::new(400.0, 300.0),
    };
    let t = Transform {
        scale: 2.0,
        offset: Vec2::new(30.0, -10.0),
        transition: None,
    };
    let rect = t.apply(viewport, ViewportSize::new(1000.0, 1000.0));
    assert_relative_eq!(rect.size.width, 600.0);
    assert_relative_eq!(rect.size.height, 600.0);
    let center = rect.center();
    assert_relative_eq!(center.x, 330.0);
    assert_relative_eq!(center.y, 190.0);
    assert_relative_eq!(rect.max().x - rect.min.x, 600.0);
}

#[test]
fn test_vec2_clamp_symmetric() {
    let v = Vec2::new(-50.0, 8.0).clamp_symmetric(Vec2::new(20.0, 20.0));
    assert_eq!(v, Vec2::new(-20.0, 8.0));
}
