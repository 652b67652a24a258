use super::*;
use crate::surface::FontFamily;
use crate::test_support::RecordingSurface;

fn portrait_params() -> FitParams {
    FitParams {
        base_size: 32.0 * 1080.0 / 300.0,
        min_size: 14.0,
        shrink_ratio: 0.9,
        max_attempts: 20,
        line_height: 1.4,
        max_width: 1080.0 - 2.0 * 144.0,
        max_height: 0.6 * 1620.0,
    }
}

fn font() -> FontSpec {
    FontSpec::new(FontFamily::Inter, 1.0).bold()
}

#[test]
fn short_message_keeps_the_base_size() {
    let mut s = RecordingSurface::portrait();
    let fit = fit_text(&mut s, "Happy Birthday!", font(), &portrait_params()).unwrap();
    assert_eq!(fit.font_size, 115.0);
    assert_eq!(fit.lines, vec!["Happy".to_owned(), "Birthday!".to_owned()]);
    assert_eq!(fit.attempts, 0);
    assert!(!fit.squeezed);
}

#[test]
fn long_message_shrinks_to_the_floor_and_still_fits() {
    let message = vec!["congratulations"; 300].join(" ");
    let mut s = RecordingSurface::portrait();
    let params = portrait_params();
    let fit = fit_text(&mut s, &message, font(), &params).unwrap();
    assert_eq!(fit.font_size, 14.0);
    assert!(fit.attempts <= params.max_attempts);
    let spec = font().with_size(fit.font_size);
    for line in &fit.lines {
        assert!(s.measure_text(line, &spec).unwrap() <= params.max_width);
    }
}

#[test]
fn sizes_follow_the_shrink_ladder() {
    let mut s = RecordingSurface::portrait();
    let params = FitParams {
        max_height: 200.0,
        ..portrait_params()
    };
    let fit = fit_text(&mut s, "one two three four five six", font(), &params).unwrap();
    // 115 -> 103 -> 92 -> 82 -> 73 ...; every accepted size is a rung of the ladder.
    let mut rung = 115.0_f64;
    for _ in 0..fit.attempts {
        rung = (rung * 0.9).floor();
    }
    assert_eq!(fit.font_size, rung.max(14.0));
    assert!(fit.lines.len() as f64 * fit.font_size * 1.4 <= 200.0);
}

#[test]
fn search_is_idempotent() {
    let message = "Wishing you a wonderful year full of laughter, friends and cake";
    let mut s = RecordingSurface::portrait();
    let a = fit_text(&mut s, message, font(), &portrait_params()).unwrap();
    let b = fit_text(&mut s, message, font(), &portrait_params()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn oversized_word_is_squeezed_below_the_floor() {
    let mut s = RecordingSurface::portrait();
    let params = FitParams {
        base_size: 32.0,
        max_width: 100.0,
        ..portrait_params()
    };
    let word = "x".repeat(50);
    let fit = fit_text(&mut s, &word, font(), &params).unwrap();
    assert!(fit.squeezed);
    assert!(fit.font_size < 14.0);
    assert_eq!(fit.lines, vec![word.clone()]);
    assert!(s.measure_text(&word, &font().with_size(fit.font_size)).unwrap() <= 100.0);
}

#[test]
fn empty_message_is_one_line_at_the_base_size() {
    let mut s = RecordingSurface::portrait();
    let fit = fit_text(&mut s, "", font(), &portrait_params()).unwrap();
    assert_eq!(fit.lines, vec![String::new()]);
    assert_eq!(fit.font_size, 115.0);
}

#[test]
fn invalid_bounds_are_layout_errors() {
    let mut s = RecordingSurface::portrait();
    for params in [
        FitParams {
            max_width: 0.0,
            ..portrait_params()
        },
        FitParams {
            max_height: f64::NAN,
            ..portrait_params()
        },
        FitParams {
            shrink_ratio: 1.5,
            ..portrait_params()
        },
    ] {
        let err = fit_text(&mut s, "hi", font(), &params).unwrap_err();
        assert!(matches!(err, CardError::Layout(_)));
    }
}

#[test]
fn block_taller_than_the_box_shrinks_below_the_floor() {
    let message = ["congratulations"; 1500].join(" ");
    let mut s = RecordingSurface::portrait();
    let params = portrait_params();
    let fit = fit_text(&mut s, &message, font(), &params).unwrap();
    assert!(fit.squeezed);
    assert!(fit.font_size < params.min_size);
    assert!(fit.lines.len() as f64 * fit.font_size * params.line_height <= params.max_height);
    assert_eq!(fit.lines.join(" "), message);
    let spec = font().with_size(fit.font_size);
    for line in &fit.lines {
        assert!(s.measure_text(line, &spec).unwrap() <= params.max_width);
    }
}

#[test]
fn hard_breaks_alone_can_force_a_height_squeeze() {
    let message = ["a"; 200].join("\n");
    let mut s = RecordingSurface::portrait();
    let params = portrait_params();
    let fit = fit_text(&mut s, &message, font(), &params).unwrap();
    assert_eq!(fit.lines.len(), 200);
    assert!(fit.squeezed);
    assert!(200.0 * fit.font_size * params.line_height <= params.max_height);
}
