use super::*;

#[test]
fn even_stops_cover_unit_interval() {
    let stops = even_stops(&[Rgba8::WHITE, Rgba8::BLACK, Rgba8::WHITE]);
    let offsets: Vec<f64> = stops.iter().map(|s| s.offset).collect();
    assert_eq!(offsets, vec![0.0, 0.5, 1.0]);
}

#[test]
fn degenerate_gradients_collapse_to_solid() {
    let p = Paint::linear_even(Point::ZERO, Point::new(1.0, 1.0), &[Rgba8::WHITE]);
    assert_eq!(p, Paint::Solid(Rgba8::WHITE));
    let p = Paint::radial_even(Point::ZERO, 0.0, 4.0, &[]);
    assert_eq!(p, Paint::Solid(Rgba8::TRANSPARENT));
}

#[test]
fn faded_scales_every_stop() {
    let p = Paint::linear_even(
        Point::ZERO,
        Point::new(0.0, 10.0),
        &[Rgba8::WHITE, Rgba8::BLACK],
    )
    .faded(0.5);
    let Paint::Linear { stops, .. } = p else {
        panic!("expected linear paint");
    };
    assert!(stops.iter().all(|s| s.color.a == 128));
}

#[test]
fn font_families_have_generic_fallbacks() {
    assert_eq!(FontFamily::Inter.generic(), GenericFamily::SansSerif);
    assert_eq!(FontFamily::PlayfairDisplay.generic(), GenericFamily::Serif);
    assert_eq!(FontFamily::Caveat.generic(), GenericFamily::Cursive);
    assert_eq!(FontFamily::SansSerif.preferred_name(), None);
    let f = FontSpec::new(FontFamily::BebasNeue, 12.0).bold().italic();
    assert!(f.bold && f.italic);
    assert_eq!(f.with_size(3.0).size, 3.0);
}

#[test]
fn non_finite_paths_are_detected() {
    let mut p = BezPath::new();
    p.move_to((0.0, 0.0));
    p.line_to((1.0, 1.0));
    assert!(path_is_finite(&p));
    p.line_to((f64::NAN, 1.0));
    assert!(!path_is_finite(&p));
}
