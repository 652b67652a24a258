use super::*;

#[test]
fn default_entry_is_first_and_modern() {
    assert_eq!(styles()[0].id, DEFAULT_TEMPLATE);
    assert_eq!(default_style().id, "modern");
}

#[test]
fn catalog_holds_every_template_once() {
    let ids: Vec<_> = template_ids().collect();
    assert_eq!(ids.len(), 36);
    let mut dedup = ids.clone();
    dedup.sort_unstable();
    dedup.dedup();
    assert_eq!(dedup.len(), ids.len());
    for id in ["minimal", "galaxy", "neonCity", "vintagePostcard", "spring"] {
        assert!(is_known(id), "{id}");
    }
}

#[test]
fn every_descriptor_has_a_palette() {
    for d in styles() {
        assert!(!d.palette().is_empty(), "{} has an empty palette", d.id);
        assert_eq!(resolve_style(d.id).id, d.id);
    }
}

#[test]
fn unknown_ids_fall_back_to_modern() {
    let d = resolve_style("unknown-id-xyz");
    assert_eq!(d.id, "modern");
    assert_eq!(d.kind(), BackgroundKind::FlatGradient);
    assert_eq!(d.decoration, Decoration::Geometric);
    assert_eq!(resolve_style("").id, "modern");
}

#[test]
fn scene_variants_follow_the_background() {
    assert_eq!(resolve_style("ocean").background.scene_variant(), Some("ocean"));
    assert_eq!(resolve_style("tokyo").background.scene_variant(), Some("tokyo"));
    assert_eq!(resolve_style("aurora").kind(), BackgroundKind::Space);
    assert_eq!(resolve_style("minimal").background.scene_variant(), None);
    assert_eq!(resolve_style("minimal").kind(), BackgroundKind::Plain);
}

#[test]
fn descriptors_serialize_with_kind_tags() {
    let v = serde_json::to_value(resolve_style("mountains")).unwrap();
    assert_eq!(v["id"], "mountains");
    assert_eq!(v["background"]["kind"], "nature-scene");
    assert_eq!(v["background"]["scene"], "mountains");
    assert_eq!(v["background"]["snow_caps"], true);
    assert_eq!(v["font"], "playfair-display");
    assert_eq!(v["primary_text"], "#ffffff");
}
