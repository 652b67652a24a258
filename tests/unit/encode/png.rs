use super::*;
use crate::foundation::core::CardSize;

#[test]
fn writes_straight_alpha_rgba() {
    let mut f = FrameRGBA::transparent(CardSize::new(3, 2).unwrap());
    // Premultiplied half-transparent red.
    f.data[..4].copy_from_slice(&[128, 0, 0, 128]);
    let bytes = encode_png(&f).unwrap();
    let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (3, 2));
    let px = img.get_pixel(0, 0).0;
    assert_eq!(px[3], 128);
    assert!(px[0] >= 254);
    assert_eq!(img.get_pixel(2, 1).0, [0, 0, 0, 0]);
}

#[test]
fn rejects_a_truncated_buffer() {
    let mut f = FrameRGBA::transparent(CardSize::new(3, 2).unwrap());
    f.data.pop();
    assert!(matches!(encode_png(&f), Err(CardError::Validation(_))));
}
