use crate::foundation::error::CardResult;
use crate::surface::{FontSpec, TextMeasure};

/// Greedy word wrap.
///
/// Words are appended to the current line while the measured line stays within `max_width`.
/// A `'\n'` forces a break, runs of whitespace collapse to one space, and a word wider than
/// `max_width` on its own is kept whole on its own line. Always returns at least one line; an
/// empty paragraph produces an empty line.
pub fn wrap_words<M: TextMeasure + ?Sized>(
    measure: &mut M,
    text: &str,
    font: &FontSpec,
    max_width: f64,
) -> CardResult<Vec<String>> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }
            let candidate = format!("{current} {word}");
            if measure.measure_text(&candidate, font)? > max_width {
                lines.push(std::mem::replace(&mut current, word.to_owned()));
            } else {
                current = candidate;
            }
        }
        lines.push(current);
    }
    Ok(lines)
}

/// Widest measured line.
pub(crate) fn widest_line<M: TextMeasure + ?Sized>(
    measure: &mut M,
    lines: &[String],
    font: &FontSpec,
) -> CardResult<f64> {
    let mut widest = 0.0_f64;
    for line in lines {
        widest = widest.max(measure.measure_text(line, font)?);
    }
    Ok(widest)
}

#[cfg(test)]
#[path = "../../tests/unit/text/wrap.rs"]
mod tests;
