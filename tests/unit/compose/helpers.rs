use super::*;
use crate::test_support::RecordingSurface;

#[test]
fn wave_samples_span_the_width() {
    let wave = Wave::sine(100.0, 20.0, 0.01, 0.0, 30.0);
    let pts = wave.samples(100.0);
    assert_eq!(pts.first().map(|p| p.x), Some(0.0));
    assert_eq!(pts.last().map(|p| p.x), Some(100.0));
    assert!(pts.iter().all(|p| (80.0..=120.0).contains(&p.y)));
}

#[test]
fn wave_with_bad_step_still_samples_both_ends() {
    for step in [0.0, -5.0, f64::NAN] {
        let pts = Wave::sine(10.0, 1.0, 1.0, 0.0, step).samples(50.0);
        assert_eq!(pts.len(), 2);
    }
}

#[test]
fn ridge_peaks_stay_within_amplitude() {
    let wave = Wave::sine(500.0, 80.0, 0.02, 0.3, 5.0).ridge();
    for p in wave.samples(1080.0) {
        assert!(p.y >= 420.0 - 1e-9 && p.y <= 580.0 + 1e-9);
    }
    // Zero of sin is a peak.
    assert!((wave.y_at(-0.3 / 0.02) - 420.0).abs() < 1e-9);
}

#[test]
fn wave_path_closes_against_the_chosen_edge() {
    let size = CardSize::new(200, 400).unwrap();
    let wave = Wave::sine(200.0, 10.0, 0.05, 0.0, 10.0);
    let bottom = kurbo::Shape::bounding_box(&wave_path(&wave, size, Edge::Bottom));
    assert_eq!(bottom.y1, 400.0);
    assert!(bottom.y0 >= 190.0 - 1e-9);
    let top = kurbo::Shape::bounding_box(&wave_path(&wave, size, Edge::Top));
    assert_eq!(top.y0, 0.0);
    assert!(top.y1 <= 210.0 + 1e-9);
}

#[test]
fn scatter_places_inside_the_area_and_restores_alpha() {
    let mut s = RecordingSurface::portrait();
    let mut rng = Rng64::new(9);
    let colors = [Rgba8::BLACK];
    let area = Rect::new(10.0, 20.0, 30.0, 40.0);
    let spec = Scatter {
        count: 50,
        colors: &colors,
        size: (1.0, 2.0),
        alpha: 0.4,
        area,
    };
    let mut seen = 0;
    scatter(&mut s, &mut rng, &spec, |_, _, p| {
        assert!(area.contains(p.at));
        assert!((1.0..2.0).contains(&p.size));
        assert_eq!(p.color, Rgba8::BLACK);
        seen += 1;
        Ok(())
    })
    .unwrap();
    assert_eq!(seen, 50);
    assert!(s.save_depth_is_balanced());
}

#[test]
fn shapes_are_centered_on_the_anchor() {
    let mut rng = Rng64::new(1);
    for kind in [
        ShapeKind::Circle,
        ShapeKind::Square,
        ShapeKind::Triangle,
        ShapeKind::Diamond,
    ] {
        let path = shape_path(kind, Point::new(50.0, 50.0), 20.0, &mut rng);
        let b = kurbo::Shape::bounding_box(&path);
        assert!((b.center().x - 50.0).abs() < 0.25, "{kind:?}");
        assert!((b.width() - 20.0).abs() < 0.25, "{kind:?}");
    }
}

#[test]
fn non_finite_geometry_is_a_compositing_error() {
    let mut s = RecordingSurface::portrait();
    let wave = Wave::sine(f64::NAN, 1.0, 1.0, 0.0, 10.0);
    let err = s
        .fill(&wave_path(&wave, CardSize::PORTRAIT, Edge::Bottom), &Paint::Solid(Rgba8::BLACK))
        .unwrap_err();
    assert!(matches!(err, crate::CardError::Compositing(_)));
}
