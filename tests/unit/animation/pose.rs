use super::*;

fn receded() -> ContentPose {
    ContentPose {
        scale: 0.95,
        opacity: 0.0,
        rotate_y_deg: 5.0,
        translate_y_px: 0.0,
    }
}

#[test]
fn lerp_endpoints_are_exact() {
    let a = ContentPose::RESTING;
    let b = receded();
    assert_eq!(ContentPose::lerp(&a, &b, 0.0), a);
    assert_eq!(ContentPose::lerp(&a, &b, 1.0), b);
}

#[test]
fn lerp_midpoint() {
    let mid = ContentPose::lerp(&ContentPose::RESTING, &receded(), 0.5);
    assert!((mid.scale - 0.975).abs() < 1e-12);
    assert!((mid.opacity - 0.5).abs() < 1e-12);
    assert!((mid.rotate_y_deg - 2.5).abs() < 1e-12);
}

#[test]
fn opacity_stays_in_unit_range_on_overshoot() {
    let p = ContentPose::lerp(&ContentPose::RESTING, &receded(), -0.5);
    assert_eq!(p.opacity, 1.0);
}

#[test]
fn default_is_resting() {
    assert!(ContentPose::default().is_resting());
    assert!(!receded().is_resting());
}

#[test]
fn css_transform_lists_all_components() {
    assert_eq!(
        receded().to_css_transform(),
        "translateY(0px) scale(0.95) rotateY(5deg)"
    );
}

#[test]
fn partial_json_fills_resting_fields() {
    let p: ContentPose = serde_json::from_str(r#"{ "opacity": 0.0 }"#).unwrap();
    assert_eq!(p.scale, 1.0);
    assert_eq!(p.opacity, 0.0);
}
