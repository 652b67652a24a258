use super::*;
use crate::CardError;
use crate::surface::{CpuSurface, FontBook};
use crate::test_support::{Op, RecordingSurface};

fn render(req: &RenderRequest) -> (RecordingSurface, RenderOutcome) {
    let mut s = RecordingSurface::portrait();
    let outcome = CardRenderer::default().render(&mut s, req).unwrap();
    (s, outcome)
}

fn last_text(s: &RecordingSurface) -> (&str, Point) {
    let texts = s.texts();
    let (text, _, at) = texts.last().copied().unwrap();
    (text, at)
}

#[test]
fn stages_run_in_order_and_end_with_the_watermark() {
    let req = RenderRequest::new("modern", "Happy Birthday!").with_occasion("birthday");
    let (s, outcome) = render(&req);
    assert!(matches!(s.ops.first(), Some(Op::Reset(size)) if *size == CardSize::PORTRAIT));
    assert!(matches!(s.ops.get(1), Some(Op::Fill { .. })));
    assert!(!outcome.fallback_card);
    assert!(!outcome.simplified_text);
    assert_eq!(outcome.template, "modern");

    let (text, at) = last_text(&s);
    assert_eq!(text, "Created with Cardsmith");
    assert_eq!(at, Point::new(540.0, 1580.0));

    // Every fill precedes the first message line.
    let first_text = s.ops.iter().position(|op| matches!(op, Op::Text { .. })).unwrap();
    assert!(!s.ops[first_text..].iter().any(|op| matches!(op, Op::Fill { .. })));
    assert!(s.save_depth_is_balanced());
}

#[test]
fn unknown_template_renders_the_default() {
    let (_, outcome) = render(&RenderRequest::new("unknown-id-xyz", "Hello"));
    assert_eq!(outcome.template, "modern");
    assert!(!outcome.template_known);
    assert!(!outcome.fallback_card);
}

#[test]
fn background_failure_paints_the_fallback_card() {
    let mut s = RecordingSurface::portrait();
    s.fail_fills = 1;
    let outcome = CardRenderer::default()
        .render(&mut s, &RenderRequest::new("galaxy", ""))
        .unwrap();
    assert!(outcome.fallback_card);
    let resets = s.ops.iter().filter(|op| matches!(op, Op::Reset(_))).count();
    assert_eq!(resets, 2);
    match s.fills().first() {
        Some((_, Paint::Linear { stops, .. })) => {
            assert_eq!(stops[0].color, Rgba8::hex(0x8B5CF6));
            assert_eq!(stops[1].color, Rgba8::hex(0xEC4899));
        }
        other => panic!("unexpected fallback fill {other:?}"),
    }
    assert_eq!(s.texts().len(), 1);
    assert_eq!(last_text(&s).0, "Your Card");
}

#[test]
fn fallback_failure_propagates() {
    let mut s = RecordingSurface::portrait();
    s.fail_fills = 2;
    let err = CardRenderer::default()
        .render(&mut s, &RenderRequest::new("galaxy", "Hi"))
        .unwrap_err();
    assert!(matches!(err, CardError::Compositing(_)));
}

#[test]
fn text_painting_failure_is_recovered_by_the_fallback_card() {
    let mut s = RecordingSurface::portrait();
    s.fail_text = 1;
    let outcome = CardRenderer::default()
        .render(&mut s, &RenderRequest::new("minimal", "Hello"))
        .unwrap();
    assert!(outcome.fallback_card);
    assert_eq!(last_text(&s).0, "Hello");
}

#[test]
fn fit_failure_uses_the_simplified_layout() {
    let size = CardSize::new(300, 10).unwrap();
    let req = RenderRequest::new("minimal", "Hello there")
        .with_recipient("Sam")
        .with_size(size);
    let mut s = RecordingSurface::new(size);
    let outcome = CardRenderer::default().render(&mut s, &req).unwrap();
    assert!(outcome.simplified_text);
    assert!(!outcome.fallback_card);
    assert!(outcome.layout.simplified);
    assert!(s.texts().iter().all(|(text, _, _)| !text.starts_with("Dear")));
}

#[test]
fn same_request_paints_the_same_ops() {
    let req = RenderRequest::new("butterflies", "Fly high").with_occasion("congrats");
    let (a, oa) = render(&req);
    let (b, ob) = render(&req);
    assert_eq!(oa.seed, ob.seed);
    assert_eq!(a.ops, b.ops);

    let (c, _) = render(&RenderRequest::new("butterflies", "Fly higher"));
    assert_ne!(a.ops, c.ops);
}

#[test]
fn configured_seed_overrides_the_derived_one() {
    let renderer = CardRenderer::new(RenderConfig {
        seed: Some(7),
        ..RenderConfig::default()
    });
    let mut s = RecordingSurface::portrait();
    let outcome = renderer
        .render(&mut s, &RenderRequest::new("abstractArt", "x"))
        .unwrap();
    assert_eq!(outcome.seed, 7);
}

#[test]
fn empty_watermark_is_skipped() {
    let renderer = CardRenderer::new(RenderConfig {
        watermark: String::new(),
        ..RenderConfig::default()
    });
    let mut s = RecordingSurface::portrait();
    renderer
        .render(&mut s, &RenderRequest::new("minimal", "Only me"))
        .unwrap();
    assert_eq!(s.texts().len(), 1);
}

#[test]
fn unusable_surface_is_reported() {
    let size = CardSize::new(8, 8).unwrap();
    let mut s = CpuSurface::with_fonts(size, FontBook::estimated()).unwrap();
    let req = RenderRequest::new("modern", "Hi").with_size(CardSize {
        width: 70_000,
        height: 10,
    });
    let err = CardRenderer::default().render(&mut s, &req).unwrap_err();
    assert!(matches!(err, CardError::SurfaceUnavailable(_)));
}

#[test]
fn derived_seed_depends_on_every_input() {
    let base = RenderRequest::new("modern", "Hi");
    let seeds = [
        base.derived_seed(),
        RenderRequest::new("vintage", "Hi").derived_seed(),
        RenderRequest::new("modern", "Hi!").derived_seed(),
        base.clone()
            .with_size(CardSize::new(300, 450).unwrap())
            .derived_seed(),
    ];
    for i in 0..seeds.len() {
        for j in i + 1..seeds.len() {
            assert_ne!(seeds[i], seeds[j]);
        }
    }
    // Recipient and occasion do not move decorative placement.
    assert_eq!(base.clone().with_recipient("Al").derived_seed(), seeds[0]);
}
