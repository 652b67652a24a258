use super::*;
use crate::catalog::resolve_style;
use crate::test_support::{Op, RecordingSurface};

fn decorate(id: &str, occasion: Option<&str>) -> RecordingSurface {
    let mut s = RecordingSurface::portrait();
    let mut rng = Rng64::new(3);
    paint_decorations(&mut s, resolve_style(id), CardSize::PORTRAIT, occasion, &mut rng).unwrap();
    s
}

#[test]
fn occasion_table_maps_known_tags() {
    assert_eq!(Glyph::for_occasion("birthday"), Glyph::Cake);
    assert_eq!(Glyph::for_occasion(" Love "), Glyph::Heart);
    assert_eq!(Glyph::for_occasion("thanks"), Glyph::FoldedHands);
    assert_eq!(Glyph::for_occasion("congrats"), Glyph::PartyPopper);
    assert_eq!(Glyph::for_occasion("graduation"), Glyph::Mortarboard);
    assert_eq!(Glyph::for_occasion("holiday"), Glyph::Tree);
    assert_eq!(Glyph::for_occasion("anniversary"), Glyph::Sparkle);
}

#[test]
fn geometric_cluster_is_translucent_and_additive() {
    let s = decorate("modern", None);
    let fills = s.fills();
    assert_eq!(fills.len(), 4);
    for (_, paint) in fills {
        assert_eq!(paint, &Paint::Solid(Rgba8::WHITE.with_alpha(0.1)));
    }
    assert!(!s.ops.iter().any(|op| matches!(op, Op::Reset(_))));
}

#[test]
fn ornamental_draws_four_corner_strokes() {
    let s = decorate("vintage", None);
    let strokes: Vec<_> = s
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::Stroke { bounds, .. } => Some(*bounds),
            _ => None,
        })
        .collect();
    assert_eq!(strokes.len(), 4);
    assert!(strokes.iter().all(|b| b.x0 >= 0.0 && b.x1 <= 1080.0));
}

#[test]
fn templates_without_decoration_only_draw_the_glyph() {
    assert!(decorate("galaxy", None).ops.is_empty());
    assert!(decorate("galaxy", Some("   ")).ops.is_empty());
    let s = decorate("galaxy", Some("love"));
    assert!(matches!(s.ops.first(), Some(Op::Save)));
    assert!(matches!(s.ops.get(1), Some(Op::Concat(_))));
    assert!(s.save_depth_is_balanced());
}

#[test]
fn every_glyph_paints_inside_its_box() {
    for glyph in [
        Glyph::Cake,
        Glyph::Heart,
        Glyph::FoldedHands,
        Glyph::PartyPopper,
        Glyph::Mortarboard,
        Glyph::Tree,
        Glyph::Sparkle,
    ] {
        let mut s = RecordingSurface::portrait();
        glyphs::paint_glyph(&mut s, glyph, Point::new(0.0, 0.0), 2.0).unwrap();
        for op in &s.ops {
            if let Op::Fill { bounds, .. } | Op::Stroke { bounds, .. } = op {
                assert!(
                    bounds.x0 >= -1.0 && bounds.x1 <= 1.0 && bounds.y0 >= -1.0 && bounds.y1 <= 1.0,
                    "{glyph:?} {bounds:?}"
                );
            }
        }
    }
}
