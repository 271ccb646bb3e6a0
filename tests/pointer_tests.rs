// Host-side tests for magnetic, tilt and mouse-parallax trackers.

mod common;

use common::approx;
use glam::DVec2;
use site_core::*;

fn button() -> Rect {
    Rect::new(100.0, 200.0, 200.0, 50.0)
}

#[test]
fn magnetic_pulls_toward_pointer() {
    let mut pull = MagneticPull::new(20.0);
    // Right edge, vertical center: half a width from the center.
    let p = pull.on_move(DVec2::new(300.0, 225.0), &button());
    assert!(approx(p.x, 10.0));
    assert!(approx(p.y, 0.0));
    assert_eq!(pull.transform(), "translate(10px, 0px)");
}

#[test]
fn magnetic_is_bounded_by_box_ratio_inside_the_box() {
    let mut pull = MagneticPull::default();
    let rect = button();
    for (x, y) in [(100.0, 200.0), (300.0, 250.0), (180.0, 210.0)] {
        let p = pull.on_move(DVec2::new(x, y), &rect);
        assert!(p.x.abs() <= DEFAULT_MAGNETIC_STRENGTH / 2.0 + 1e-9);
        assert!(p.y.abs() <= DEFAULT_MAGNETIC_STRENGTH / 2.0 + 1e-9);
    }
}

#[test]
fn leave_resets_every_tracker_to_neutral() {
    let rect = button();
    let far = DVec2::new(5000.0, -5000.0);

    let mut pull = MagneticPull::new(50.0);
    pull.on_move(far, &rect);
    assert_eq!(pull.on_leave(), DVec2::ZERO);

    let mut tilt = Tilt::new(15.0, false);
    tilt.on_move(far, &rect);
    assert_eq!(tilt.on_leave(), DVec2::ZERO);
    assert_eq!(tilt.glare(), Glare::default());

    let mut layer = MouseParallax::new(40.0);
    layer.on_move(far, &rect);
    assert_eq!(layer.on_leave(), DVec2::ZERO);
}

#[test]
fn tilt_rotates_toward_pointer() {
    let mut tilt = Tilt::new(8.0, false);
    let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
    // Top-right corner: pitch back, yaw right.
    let r = tilt.on_move(DVec2::new(200.0, 0.0), &rect);
    assert!(approx(r.x, 8.0));
    assert!(approx(r.y, 8.0));
    // Bottom-left corner: the opposite.
    let r = tilt.on_move(DVec2::new(0.0, 100.0), &rect);
    assert!(approx(r.x, -8.0));
    assert!(approx(r.y, -8.0));
}

#[test]
fn tilt_center_is_flat() {
    let mut tilt = Tilt::default();
    let rect = Rect::new(50.0, 50.0, 300.0, 200.0);
    let r = tilt.on_move(rect.center(), &rect);
    assert!(approx(r.x.abs(), 0.0));
    assert!(approx(r.y.abs(), 0.0));
    assert!(approx(tilt.glare().intensity, 0.0));
    assert!(approx(tilt.glare().x_pct, 50.0));
}

#[test]
fn tilt_transform_strings() {
    let mut tilt = Tilt::new(10.0, false);
    assert_eq!(
        tilt.transform(),
        "perspective(1000px) rotateX(0deg) rotateY(0deg) scale3d(1, 1, 1)"
    );
    tilt.on_move(DVec2::new(100.0, 0.0), &Rect::new(0.0, 0.0, 100.0, 100.0));
    assert_eq!(
        tilt.transform(),
        "perspective(1000px) rotateX(10deg) rotateY(10deg) scale3d(1.02, 1.02, 1.02)"
    );
    tilt.on_leave();
    assert_eq!(
        tilt.transform(),
        "perspective(1000px) rotateX(0deg) rotateY(0deg) scale3d(1, 1, 1)"
    );
}

#[test]
fn glare_is_strongest_at_corners() {
    let mut tilt = Tilt::default();
    let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
    tilt.on_move(DVec2::new(100.0, 100.0), &rect);
    let g = tilt.glare();
    assert!(approx(g.intensity, 1.0));
    assert!(approx(g.x_pct, 100.0));
    assert!(approx(g.y_pct, 100.0));
}

#[test]
fn disabled_tilt_ignores_pointer() {
    let mut tilt = Tilt::new(8.0, true);
    assert_eq!(
        tilt.on_move(DVec2::new(0.0, 0.0), &Rect::new(0.0, 0.0, 10.0, 10.0)),
        DVec2::ZERO
    );
}

#[test]
fn degenerate_box_gives_neutral_output() {
    let empty = Rect::new(10.0, 10.0, 0.0, 0.0);
    let mut pull = MagneticPull::default();
    assert_eq!(pull.on_move(DVec2::new(50.0, 50.0), &empty), DVec2::ZERO);
    let mut tilt = Tilt::default();
    assert_eq!(tilt.on_move(DVec2::new(50.0, 50.0), &empty), DVec2::ZERO);
}

#[test]
fn tilt_returns_to_neutral_when_box_collapses() {
    let mut tilt = Tilt::default();
    tilt.on_move(DVec2::new(200.0, 0.0), &Rect::new(0.0, 0.0, 200.0, 100.0));
    assert_ne!(tilt.rotation(), DVec2::ZERO);

    let rotation = tilt.on_move(DVec2::new(200.0, 0.0), &Rect::default());
    assert_eq!(rotation, DVec2::ZERO);
    assert_eq!(tilt.glare(), Glare::default());
    assert_eq!(
        tilt.transform(),
        "perspective(1000px) rotateX(0deg) rotateY(0deg) scale3d(1, 1, 1)"
    );
}

#[test]
fn disabled_tilt_ignores_degenerate_box() {
    let mut tilt = Tilt::new(8.0, true);
    assert_eq!(tilt.on_move(DVec2::new(5.0, 5.0), &Rect::default()), DVec2::ZERO);
    assert_eq!(tilt.glare(), Glare::default());
}

#[test]
fn mouse_parallax_scales_by_intensity() {
    let mut layer = MouseParallax::default();
    let rect = Rect::new(0.0, 0.0, 400.0, 400.0);
    let p = layer.on_move(DVec2::new(400.0, 0.0), &rect);
    assert!(approx(p.x, DEFAULT_MOUSE_PARALLAX_INTENSITY / 2.0));
    assert!(approx(p.y, -DEFAULT_MOUSE_PARALLAX_INTENSITY / 2.0));
}

#[test]
fn pointer_configs_from_attributes() {
    let (tilt, errors) = Tilt::from_attributes(|name| match name {
        "data-tilt-max" => Some("12".to_string()),
        "data-tilt-disabled" => Some(String::new()),
        _ => None,
    });
    assert!(errors.is_empty());
    assert!(tilt.is_disabled());

    let (_, errors) = MagneticPull::from_attributes(|name| {
        (name == "data-magnetic-strength").then(|| "strong".to_string())
    });
    assert_eq!(
        errors,
        vec![ConfigError::InvalidNumber {
            attr: "data-magnetic-strength".into(),
            value: "strong".into()
        }]
    );
}

#[test]
fn rect_helpers() {
    let r = Rect::new(10.0, 20.0, 100.0, 40.0);
    assert_eq!(r.center(), DVec2::new(60.0, 40.0));
    assert!(Rect::default().is_degenerate());
}
