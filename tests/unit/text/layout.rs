use super::*;
use crate::catalog::resolve_style;
use crate::test_support::{Op, RecordingSurface};

fn lines_fit(s: &mut RecordingSurface, layout: &LayoutResult) -> bool {
    layout
        .lines
        .iter()
        .all(|l| s.measure_text(l, &layout.font).unwrap() <= layout.max_width)
}

#[test]
fn single_line_is_centered_in_the_card() {
    let mut s = RecordingSurface::portrait();
    let cfg = LayoutConfig::default();
    let minimal = resolve_style("minimal");
    let layout =
        layout_and_paint(&mut s, "Hi there", minimal, CardSize::PORTRAIT, None, &cfg).unwrap();
    assert_eq!(layout.lines.len(), 1);
    assert_eq!(layout.font_size(), 115.0);
    assert!((layout.max_width - 792.0).abs() < 1e-9);
    let expected = 1620.0 / 2.0 - 115.0 * 1.4 / 2.0 + 115.0 / 2.0;
    assert!((layout.start_y - expected).abs() < 1e-9);

    let texts = s.texts();
    assert_eq!(texts.len(), 1);
    assert_eq!(texts[0].0, "Hi there");
    assert_eq!(texts[0].2.x, 540.0);
    assert!(texts[0].1.bold);
}

#[test]
fn salutation_is_painted_first_and_pushes_the_message_down() {
    let mut s = RecordingSurface::portrait();
    let cfg = LayoutConfig::default();
    let descriptor = resolve_style("romantic");
    let layout = layout_and_paint(
        &mut s,
        "Thinking of you",
        descriptor,
        CardSize::PORTRAIT,
        Some("  Alex "),
        &cfg,
    )
    .unwrap();
    let sal = layout.salutation.clone().unwrap();
    assert_eq!(sal.text, "Dear Alex,");
    assert_eq!(sal.font.size, 86.0);
    assert!(sal.font.italic);
    assert!((sal.at.y - 324.0).abs() < 1e-9);
    assert_eq!(sal.color, descriptor.secondary_text);
    assert!((layout.start_y - (324.0 + 172.0 + layout.font_size())).abs() < 1e-9);

    match s.ops.first() {
        Some(Op::Text { text, .. }) => assert_eq!(text, "Dear Alex,"),
        other => panic!("unexpected first op {other:?}"),
    }
}

#[test]
fn blank_recipient_means_no_salutation() {
    let mut s = RecordingSurface::portrait();
    let layout = compute_layout(
        &mut s,
        "Hello",
        resolve_style("modern"),
        CardSize::PORTRAIT,
        Some("   "),
        &LayoutConfig::default(),
    )
    .unwrap();
    assert!(layout.salutation.is_none());
}

#[test]
fn lines_never_exceed_the_text_box() {
    let cfg = LayoutConfig::default();
    let long_word = "a".repeat(400);
    let many_words = vec!["celebrate"; 300].join(" ");
    let messages = ["", "Happy Birthday!", long_word.as_str(), many_words.as_str()];
    for (w, h) in [(1080, 1620), (300, 450), (37, 90), (2000, 400)] {
        let size = CardSize::new(w, h).unwrap();
        for message in messages {
            let mut s = RecordingSurface::new(size);
            let galaxy = resolve_style("galaxy");
            match compute_layout(&mut s, message, galaxy, size, Some("Kim"), &cfg) {
                Ok(layout) => assert!(lines_fit(&mut s, &layout), "{w}x{h} {message:.20}"),
                // Too little height for a salutation is recovered by the simplified layout.
                Err(_) => {
                    let layout = compute_simple(&mut s, message, size, &cfg).unwrap();
                    assert!(lines_fit(&mut s, &layout), "{w}x{h} {message:.20}");
                }
            }
        }
    }
}

#[test]
fn empty_message_occupies_one_line() {
    let mut s = RecordingSurface::portrait();
    let layout = layout_and_paint(
        &mut s,
        "",
        resolve_style("modern"),
        CardSize::PORTRAIT,
        None,
        &LayoutConfig::default(),
    )
    .unwrap();
    assert_eq!(layout.lines, vec![String::new()]);
    assert_eq!(s.texts().len(), 1);
}

#[test]
fn layout_is_recomputed_identically() {
    let cfg = LayoutConfig::default();
    let message = "May your days be merry and bright, and may all your Christmases be white";
    let mut s = RecordingSurface::portrait();
    let a = compute_layout(&mut s, message, resolve_style("winter"), CardSize::PORTRAIT, None, &cfg)
        .unwrap();
    let b = compute_layout(&mut s, message, resolve_style("winter"), CardSize::PORTRAIT, None, &cfg)
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn simple_layout_is_white_middle_anchored_sans() {
    let mut s = RecordingSurface::portrait();
    let layout =
        paint_simple(&mut s, "Hello world", CardSize::PORTRAIT, &LayoutConfig::default()).unwrap();
    assert!(layout.simplified);
    assert!(layout.salutation.is_none());
    assert_eq!(layout.font.size, 48.0);
    assert_eq!(layout.font.family, crate::surface::FontFamily::SansSerif);
    match s.ops.first() {
        Some(Op::Text { baseline, paint, .. }) => {
            assert_eq!(*baseline, TextBaseline::Middle);
            assert_eq!(*paint, Paint::Solid(Rgba8::WHITE));
        }
        other => panic!("unexpected op {other:?}"),
    }
}

#[test]
fn painting_errors_surface_as_layout_errors() {
    let mut s = RecordingSurface::portrait();
    s.fail_text = 1;
    let err = layout_and_paint(
        &mut s,
        "Hello",
        resolve_style("modern"),
        CardSize::PORTRAIT,
        None,
        &LayoutConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, CardError::Layout(_)));
}

#[test]
fn very_long_message_stays_on_the_card() {
    let cfg = LayoutConfig::default();
    let message = ["congratulations"; 1500].join(" ");
    for recipient in [None, Some("Robin")] {
        let size = CardSize::PORTRAIT;
        let mut s = RecordingSurface::new(size);
        let galaxy = resolve_style("galaxy");
        let layout = compute_layout(&mut s, &message, galaxy, size, recipient, &cfg).unwrap();
        assert!(layout.font_size() < cfg.min_font_px);
        assert!(lines_fit(&mut s, &layout));
        for i in 0..layout.lines.len() {
            let y = layout.line_anchor(i).y;
            assert!((0.0..=size.h()).contains(&y), "line {i} at {y}");
        }
    }
}
