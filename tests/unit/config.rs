use super::*;

#[test]
fn defaults_match_the_reference_card() {
    let cfg = CardConfig::default();
    assert_eq!(cfg.render.watermark, "Created with Cardsmith");
    assert_eq!(cfg.render.layout.min_font_px, 14.0);
    assert_eq!(cfg.render.layout.max_attempts, 20);
    assert_eq!(cfg.animation.frame_count, 30);
    assert_eq!(cfg.animation.frame_delay_ms, 100);
    assert_eq!(cfg.gif.repeat, None);
    cfg.validate().unwrap();
}

#[test]
fn partial_json_keeps_defaults() {
    let cfg = CardConfig::from_reader(
        r#"{ "animation": { "frame_count": 12 }, "render": { "layout": { "line_height": 1.2 } } }"#
            .as_bytes(),
    )
    .unwrap();
    assert_eq!(cfg.animation.frame_count, 12);
    assert_eq!(cfg.animation.frame_delay_ms, 100);
    assert_eq!(cfg.render.layout.line_height, 1.2);
    assert_eq!(cfg.render.layout.shrink_ratio, 0.9);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = CardConfig::from_reader(r#"{ "render": { "colour": 1 } }"#.as_bytes()).unwrap_err();
    assert!(matches!(err, CardError::Validation(_)));
}

#[test]
fn missing_file_is_a_validation_error() {
    let err = CardConfig::from_path("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("open config JSON"));
}

#[test]
fn env_overrides_apply_and_bad_values_are_ignored() {
    let mut cfg = CardConfig::default();
    cfg.apply_vars(|key| match key {
        "CARDSMITH_SEED" => Some("42".to_owned()),
        "CARDSMITH_FRAME_COUNT" => Some("not-a-number".to_owned()),
        "CARDSMITH_FRAME_DELAY_MS" => Some("0".to_owned()),
        "CARDSMITH_WATERMARK" => Some(String::new()),
        _ => None,
    });
    assert_eq!(cfg.render.seed, Some(42));
    assert_eq!(cfg.animation.seed, Some(42));
    assert_eq!(cfg.animation.frame_count, 30);
    assert_eq!(cfg.animation.frame_delay_ms, 100);
    assert_eq!(cfg.render.watermark, "");
}

#[test]
fn validate_rejects_degenerate_values() {
    let mut cfg = CardConfig::default();
    cfg.animation.frame_count = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = CardConfig::default();
    cfg.render.layout.shrink_ratio = 1.0;
    assert!(cfg.validate().is_err());

    let mut cfg = CardConfig::default();
    cfg.render.layout.min_font_px = -1.0;
    assert!(cfg.validate().is_err());

    let mut cfg = CardConfig::default();
    cfg.gif.speed = 0;
    assert!(cfg.validate().is_err());
}
