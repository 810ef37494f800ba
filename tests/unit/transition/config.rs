use super::*;

#[test]
fn defaults_match_the_site_timings() {
    let cfg = TransitionConfig::default();
    assert_eq!(cfg.band_count, 5);
    assert_eq!(cfg.exit.overlay.duration_s, 0.5);
    assert_eq!(cfg.exit.overlay.stagger_s, 0.05);
    assert_eq!(cfg.exit.content.pose.scale, 0.95);
    assert_eq!(cfg.exit.content.pose.rotate_y_deg, 5.0);
    assert_eq!(cfg.enter.content.pose.rotate_y_deg, -5.0);
    assert_eq!(cfg.enter.content.duration_s, 0.6);
    assert_eq!(cfg.enter.content_offset_s, -0.3);
    assert_eq!(cfg.interrupt, InterruptPolicy::QueueLatest);
    cfg.validate().unwrap();
}

#[test]
fn subtle_preset_is_valid() {
    TransitionConfig::subtle().validate().unwrap();
}

#[test]
fn empty_json_yields_defaults() {
    let cfg = TransitionConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, TransitionConfig::default());
}

#[test]
fn partial_json_overrides_sections() {
    let cfg = TransitionConfig::from_json_str(
        r#"{
            "band_count": 8,
            "reveal": "Retract",
            "interrupt": "DropWhileBusy",
            "enter": { "content_offset_s": -0.1 }
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.band_count, 8);
    assert_eq!(cfg.reveal, RevealMode::Retract);
    assert_eq!(cfg.interrupt, InterruptPolicy::DropWhileBusy);
    assert_eq!(cfg.enter.content_offset_s, -0.1);
    assert_eq!(cfg.enter.content.duration_s, 0.6);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = TransitionConfig::from_json_str(r#"{ "bands": 3 }"#).unwrap_err();
    assert!(matches!(err, PagewipeError::Serde(_)));
}

#[test]
fn misspelled_nested_keys_are_rejected() {
    let err = TransitionConfig::from_json_str(
        r#"{ "exit": { "overlay": {
            "duration_s": 0.5, "stagger_s": 0.05, "ease": "OutCubic", "durration_s": 9
        } } }"#,
    )
    .unwrap_err();
    assert!(matches!(err, PagewipeError::Serde(_)));

    let err = TransitionConfig::from_json_str(
        r#"{ "enter": { "content": {
            "duration_s": 0.6, "ease": "OutCubic", "pose": { "scale": 0.9, "opactiy": 0.0 }
        } } }"#,
    )
    .unwrap_err();
    assert!(matches!(err, PagewipeError::Serde(_)));
}

#[test]
fn validation_catches_bad_values() {
    let mut cfg = TransitionConfig::default();
    cfg.band_count = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = TransitionConfig::default();
    cfg.exit.overlay.duration_s = -1.0;
    assert!(cfg.validate().is_err());

    let mut cfg = TransitionConfig::default();
    cfg.enter.overlay.stagger_s = f64::NAN;
    assert!(cfg.validate().is_err());

    let mut cfg = TransitionConfig::default();
    cfg.enter.content_offset_s = 0.1;
    assert!(cfg.validate().is_err());

    let mut cfg = TransitionConfig::default();
    cfg.exit.content.pose.opacity = 1.5;
    assert!(cfg.validate().is_err());

    let mut cfg = TransitionConfig::default();
    cfg.enter.content.pose.scale = 0.0;
    assert!(cfg.validate().is_err());

    let mut cfg = TransitionConfig::default();
    cfg.exit.content.ease = Ease::CubicBezier {
        x1: -0.5,
        y1: 0.0,
        x2: 0.5,
        y2: 1.0,
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn json_round_trip_preserves_config() {
    let cfg = TransitionConfig::subtle();
    let s = serde_json::to_string_pretty(&cfg).unwrap();
    assert_eq!(TransitionConfig::from_json_str(&s).unwrap(), cfg);
}
