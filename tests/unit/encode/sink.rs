use super::*;
use crate::foundation::core::CardSize;

fn frame(w: u32, h: u32, fill: u8) -> FrameRGBA {
    let mut f = FrameRGBA::transparent(CardSize::new(w, h).unwrap());
    f.data.fill(fill);
    f
}

#[test]
fn frames_arrive_in_display_order() {
    let frames: Vec<_> = (0..5).map(|i| frame(4, 6, i * 10)).collect();
    let mut sink = InMemorySink::new();
    write_frames(&frames, 80, &mut sink).unwrap();
    assert!(sink.finished);
    assert_eq!(
        sink.config(),
        Some(SinkConfig {
            width: 4,
            height: 6,
            frame_delay_ms: 80
        })
    );
    let idx: Vec<u32> = sink.frames.iter().map(|(i, _)| *i).collect();
    assert_eq!(idx, vec![0, 1, 2, 3, 4]);
    assert_eq!(sink.frames[3].1, frames[3]);
}

#[test]
fn rejects_empty_mixed_or_zero_delay_input() {
    let mut sink = InMemorySink::new();
    assert!(matches!(write_frames(&[], 100, &mut sink), Err(CardError::Encode(_))));
    assert!(matches!(
        write_frames(&[frame(2, 2, 0)], 0, &mut sink),
        Err(CardError::Encode(_))
    ));
    let mixed = [frame(2, 2, 0), frame(3, 2, 0)];
    assert!(matches!(write_frames(&mixed, 100, &mut sink), Err(CardError::Encode(_))));
    assert!(!sink.finished);
}
