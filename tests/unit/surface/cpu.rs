use super::*;
use crate::foundation::core::Rect;

fn surface(w: u32, h: u32) -> CpuSurface {
    CpuSurface::with_fonts(CardSize::new(w, h).unwrap(), FontBook::estimated()).unwrap()
}

fn close(a: [u8; 4], b: [u8; 4], tol: i32) -> bool {
    a.iter()
        .zip(b.iter())
        .all(|(x, y)| (i32::from(*x) - i32::from(*y)).abs() <= tol)
}

#[test]
fn rejects_oversized_and_empty_surfaces() {
    let err = CpuSurface::with_fonts(
        CardSize {
            width: 70_000,
            height: 10,
        },
        FontBook::estimated(),
    )
    .unwrap_err();
    assert!(matches!(err, CardError::SurfaceUnavailable(_)));

    let mut s = surface(4, 4);
    let err = s
        .reset(CardSize {
            width: 0,
            height: 4,
        })
        .unwrap_err();
    assert!(matches!(err, CardError::SurfaceUnavailable(_)));
}

#[test]
fn solid_fill_covers_pixels() {
    let mut s = surface(16, 16);
    s.fill_rect(Rect::new(0.0, 0.0, 16.0, 16.0), &Paint::Solid(Rgba8::rgb(255, 0, 0)))
        .unwrap();
    let f = s.snapshot().unwrap();
    assert_eq!(f.pixel(8, 8), Some([255, 0, 0, 255]));
    assert!(f.premultiplied);
}

#[test]
fn alpha_is_scoped_by_save_restore() {
    let mut s = surface(8, 8);
    s.save();
    s.set_alpha(0.5);
    s.fill_rect(Rect::new(0.0, 0.0, 4.0, 8.0), &Paint::Solid(Rgba8::WHITE))
        .unwrap();
    s.restore();
    s.fill_rect(Rect::new(4.0, 0.0, 8.0, 8.0), &Paint::Solid(Rgba8::WHITE))
        .unwrap();
    let f = s.snapshot().unwrap();
    let left = f.pixel(1, 4).unwrap();
    assert!(close(left, [128, 128, 128, 128], 2), "{left:?}");
    assert_eq!(f.pixel(6, 4), Some([255, 255, 255, 255]));
}

#[test]
fn concat_translates_geometry() {
    let mut s = surface(8, 8);
    s.concat(Affine::translate((4.0, 0.0)));
    s.fill_rect(Rect::new(0.0, 0.0, 4.0, 8.0), &Paint::Solid(Rgba8::BLACK))
        .unwrap();
    let f = s.snapshot().unwrap();
    assert_eq!(f.pixel(1, 1).map(|p| p[3]), Some(0));
    assert_eq!(f.pixel(6, 1), Some([0, 0, 0, 255]));
}

#[test]
fn vertical_gradient_darkens_downward() {
    let mut s = surface(4, 64);
    let paint = Paint::linear_even(
        Point::new(0.0, 0.0),
        Point::new(0.0, 64.0),
        &[Rgba8::WHITE, Rgba8::BLACK],
    );
    s.fill_rect(Rect::new(0.0, 0.0, 4.0, 64.0), &paint).unwrap();
    let f = s.snapshot().unwrap();
    let top = f.pixel(2, 2).unwrap();
    let bottom = f.pixel(2, 61).unwrap();
    assert!(top[0] > 200 && bottom[0] < 55, "{top:?} {bottom:?}");
}

#[test]
fn screen_blend_lightens() {
    let mut s = surface(8, 8);
    let full = Rect::new(0.0, 0.0, 8.0, 8.0);
    s.fill_rect(full, &Paint::Solid(Rgba8::rgb(255, 0, 0))).unwrap();
    s.set_blend(BlendMode::Screen);
    s.fill_rect(full, &Paint::Solid(Rgba8::rgb(0, 255, 0))).unwrap();
    let px = s.snapshot().unwrap().pixel(4, 4).unwrap();
    assert!(close(px, [255, 255, 0, 255], 2), "{px:?}");
}

#[test]
fn non_finite_geometry_is_a_compositing_error() {
    let mut s = surface(8, 8);
    let err = s
        .fill_rect(
            Rect::new(0.0, 0.0, f64::INFINITY, 8.0),
            &Paint::Solid(Rgba8::WHITE),
        )
        .unwrap_err();
    assert!(matches!(err, CardError::Compositing(_)));

    let mut p = BezPath::new();
    p.move_to((0.0, 0.0));
    p.line_to((8.0, 8.0));
    let err = s
        .stroke(&p, &Paint::Solid(Rgba8::WHITE), &LineStyle::solid(0.0))
        .unwrap_err();
    assert!(matches!(err, CardError::Compositing(_)));
}

#[test]
fn draw_frame_reproduces_snapshot() {
    let mut a = surface(12, 12);
    a.fill_rect(Rect::new(0.0, 0.0, 6.0, 12.0), &Paint::Solid(Rgba8::rgb(10, 200, 30)))
        .unwrap();
    let base = a.snapshot().unwrap();

    let mut b = surface(12, 12);
    b.draw_frame(&base).unwrap();
    let copy = b.snapshot().unwrap();
    assert_eq!(copy.pixel(2, 2), base.pixel(2, 2));
    assert_eq!(copy.pixel(9, 9), base.pixel(9, 9));

    let wrong = FrameRGBA::transparent(CardSize::new(3, 3).unwrap());
    assert!(b.draw_frame(&wrong).is_err());
}

#[test]
fn text_without_faces_is_measured_but_not_painted() {
    let mut s = surface(64, 32);
    let font = FontSpec::new(crate::surface::FontFamily::Inter, 12.0);
    assert!(s.measure_text("hi", &font).unwrap() > 0.0);
    s.fill_text(
        "hi",
        &font,
        Point::new(32.0, 16.0),
        TextAlign::Center,
        TextBaseline::Middle,
        &Paint::Solid(Rgba8::WHITE),
    )
    .unwrap();
    let f = s.snapshot().unwrap();
    assert!(f.data.iter().all(|b| *b == 0));
}

#[test]
fn reset_clears_content_and_state() {
    let mut s = surface(8, 8);
    s.set_alpha(0.1);
    s.fill_rect(Rect::new(0.0, 0.0, 8.0, 8.0), &Paint::Solid(Rgba8::WHITE))
        .unwrap();
    s.reset(CardSize::new(8, 8).unwrap()).unwrap();
    s.fill_rect(Rect::new(0.0, 0.0, 8.0, 8.0), &Paint::Solid(Rgba8::BLACK))
        .unwrap();
    let f = s.snapshot().unwrap();
    assert_eq!(f.pixel(4, 4), Some([0, 0, 0, 255]));
}
