use super::*;
use crate::surface::FontFamily;
use crate::test_support::RecordingSurface;

fn font() -> FontSpec {
    // 10px per character on the recording surface.
    FontSpec::new(FontFamily::Inter, 20.0)
}

fn wrap(text: &str, max_width: f64) -> Vec<String> {
    let mut s = RecordingSurface::portrait();
    wrap_words(&mut s, text, &font(), max_width).unwrap()
}

#[test]
fn fills_lines_greedily() {
    assert_eq!(
        wrap("aa bb cc dd", 50.0),
        vec!["aa bb".to_owned(), "cc dd".to_owned()]
    );
    assert_eq!(wrap("aa bb cc dd", 1000.0), vec!["aa bb cc dd".to_owned()]);
}

#[test]
fn empty_text_is_one_empty_line() {
    assert_eq!(wrap("", 100.0), vec![String::new()]);
    assert_eq!(wrap("   ", 100.0), vec![String::new()]);
}

#[test]
fn long_word_sits_alone_unbroken() {
    assert_eq!(
        wrap("a supercalifragilistic b", 50.0),
        vec!["a".to_owned(), "supercalifragilistic".to_owned(), "b".to_owned()]
    );
}

#[test]
fn newlines_force_breaks_and_spaces_collapse() {
    assert_eq!(
        wrap("Happy   Birthday!\n\nLove,  Sam", 1000.0),
        vec![
            "Happy Birthday!".to_owned(),
            String::new(),
            "Love, Sam".to_owned()
        ]
    );
}

#[test]
fn widest_line_measures_every_line() {
    let mut s = RecordingSurface::portrait();
    let lines = vec!["ab".to_owned(), "abcd".to_owned(), String::new()];
    assert_eq!(widest_line(&mut s, &lines, &font()).unwrap(), 40.0);
}
