use super::*;
use crate::anim::effects::Effect;
use crate::foundation::core::CardSize;
use crate::surface::{CpuSurface, FontBook};
use crate::test_support::{Op, RecordingSurface};

fn solid_base(size: CardSize, rgba: [u8; 4]) -> FrameRGBA {
    let mut f = FrameRGBA::transparent(size);
    for px in f.data.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
    f
}

#[test]
fn returns_the_configured_frame_count() {
    let size = CardSize::PORTRAIT;
    let base = solid_base(size, [10, 20, 30, 255]);
    let mut s = RecordingSurface::new(size);
    let effects = EffectSet::new(&[Effect::Sparkles, Effect::Confetti]);
    let frames = generate_frames(&mut s, &base, effects, &AnimationConfig::default());
    assert_eq!(frames.len(), 30);
    // Each frame starts from the base image.
    let blits = s.ops.iter().filter(|op| matches!(op, Op::Frame(d) if *d == base.digest())).count();
    assert_eq!(blits, 30);
}

#[test]
fn failing_frame_is_replaced_by_the_base() {
    let size = CardSize::new(40, 60).unwrap();
    let base = solid_base(size, [1, 2, 3, 255]);
    let mut s = RecordingSurface::new(size);
    s.fail_fills = 1;
    let cfg = AnimationConfig {
        frame_count: 4,
        ..AnimationConfig::default()
    };
    let frames = generate_frames(&mut s, &base, EffectSet::new(&[Effect::Glow]), &cfg);
    assert_eq!(frames.len(), 4);
    assert_eq!(frames[0], base);
    // The recording surface snapshots as transparent, so later frames differ from the base.
    assert!(frames[1..].iter().all(|f| *f != base));
}

#[test]
fn unusable_input_yields_the_base_alone() {
    let size = CardSize::new(4, 4).unwrap();
    let mut broken = solid_base(size, [0, 0, 0, 255]);
    broken.data.truncate(10);
    let mut s = RecordingSurface::new(size);
    let cfg = AnimationConfig::default();
    let frames = generate_frames(&mut s, &broken, EffectSet::default(), &cfg);
    assert_eq!(frames, vec![broken.clone()]);

    let err = generate_frames_with(&mut s, &broken, EffectSet::default(), &cfg).unwrap_err();
    assert!(matches!(err, CardError::Validation(_)));

    let base = solid_base(size, [0, 0, 0, 255]);
    let zero = AnimationConfig {
        frame_count: 0,
        ..AnimationConfig::default()
    };
    assert_eq!(generate_frames(&mut s, &base, EffectSet::default(), &zero).len(), 1);
}

#[test]
fn consecutive_frames_are_distinct_composites() {
    let size = CardSize::new(270, 405).unwrap();
    let base = solid_base(size, [40, 40, 90, 255]);
    let mut s = CpuSurface::with_fonts(size, FontBook::estimated()).unwrap();
    let cfg = AnimationConfig {
        frame_count: 8,
        ..AnimationConfig::default()
    };
    let effects = EffectSet::new(&[Effect::Sparkles, Effect::Confetti]);
    let frames = generate_frames(&mut s, &base, effects, &cfg);
    assert_eq!(frames.len(), 8);
    for pair in frames.windows(2) {
        assert_ne!(pair[0].digest(), pair[1].digest());
    }
    assert!(frames.iter().all(|f| f.size() == size && *f != base));
}

#[test]
fn no_effects_reproduces_the_base() {
    let size = CardSize::new(16, 16).unwrap();
    let base = solid_base(size, [200, 100, 50, 255]);
    let mut s = CpuSurface::with_fonts(size, FontBook::estimated()).unwrap();
    let cfg = AnimationConfig {
        frame_count: 3,
        ..AnimationConfig::default()
    };
    for frame in generate_frames(&mut s, &base, EffectSet::default(), &cfg) {
        assert_eq!(frame.pixel(8, 8), base.pixel(8, 8));
    }
}
