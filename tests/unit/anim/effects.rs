use super::*;

#[test]
fn tags_parse_case_insensitively() {
    assert_eq!("Sparkles".parse::<Effect>().unwrap(), Effect::Sparkles);
    assert_eq!(" confetti ".parse::<Effect>().unwrap(), Effect::Confetti);
    assert_eq!("3D".parse::<Effect>().unwrap(), Effect::Depth);
    assert_eq!("glow".parse::<Effect>().unwrap(), Effect::Glow);
    assert!(matches!("smoke".parse::<Effect>(), Err(CardError::Validation(_))));
}

#[test]
fn tag_round_trips_through_display() {
    for e in [Effect::Sparkles, Effect::Confetti, Effect::Depth, Effect::Glow] {
        assert_eq!(e.to_string().parse::<Effect>().unwrap(), e);
    }
    assert_eq!(serde_json::to_string(&Effect::Depth).unwrap(), "\"3d\"");
}

#[test]
fn unknown_tags_are_skipped() {
    let set = EffectSet::from_tags(["sparkles", "fireworks", "glow", "sparkles"]);
    assert_eq!(
        set,
        EffectSet {
            sparkles: true,
            glow: true,
            ..EffectSet::default()
        }
    );
    assert!(EffectSet::from_tags(["nope"]).is_empty());
    assert!(EffectSet::new(&[Effect::Confetti]).confetti);
}
