use crate::foundation::error::{CardError, CardResult};
use crate::surface::{FontSpec, TextMeasure};
use crate::text::wrap::{widest_line, wrap_words};

/// Bounded proportional squeezes after the search; measurement is near-linear in size.
const SQUEEZE_ROUNDS: usize = 8;
/// Bounded height squeezes; each round re-wraps, so line counts move in steps.
const HEIGHT_ROUNDS: usize = 64;

/// Inputs of the font-fit search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitParams {
    /// First size tried, in pixels. Floored to a whole pixel.
    pub base_size: f64,
    /// Floor of the search.
    pub min_size: f64,
    /// Shrink factor per failed attempt, in `(0, 1)`.
    pub shrink_ratio: f64,
    /// Maximum number of shrinks.
    pub max_attempts: u32,
    /// Line advance as a multiple of the font size.
    pub line_height: f64,
    /// Width no line may exceed.
    pub max_width: f64,
    /// Height the whole block should fit in.
    pub max_height: f64,
}

impl FitParams {
    fn validate(&self) -> CardResult<()> {
        let checks = [
            ("base size", self.base_size),
            ("min size", self.min_size),
            ("line height", self.line_height),
            ("max width", self.max_width),
            ("max height", self.max_height),
        ];
        for (name, v) in checks {
            if !v.is_finite() || v <= 0.0 {
                return Err(CardError::layout(format!("{name} must be finite and > 0, got {v}")));
            }
        }
        if !(self.shrink_ratio > 0.0 && self.shrink_ratio < 1.0) {
            return Err(CardError::layout(format!(
                "shrink ratio must be in (0, 1), got {}",
                self.shrink_ratio
            )));
        }
        Ok(())
    }
}

/// Outcome of [`fit_text`].
#[derive(Clone, Debug, PartialEq)]
pub struct Fit {
    /// Chosen font size.
    pub font_size: f64,
    /// Wrapped lines at that size.
    pub lines: Vec<String>,
    /// Number of shrinks the search performed.
    pub attempts: u32,
    /// The block was shrunk below the search result so it fits the height and every line fits
    /// the width.
    pub squeezed: bool,
}

/// Find the largest size on the shrink ladder at which `text` wraps into the box.
///
/// The size sequence is `floor(base)`, then `floor(prev * shrink_ratio)` per attempt, stopping at
/// the first size that fits both the width and the height, at `max_attempts`, or when it would
/// drop below `min_size` (clamped to the floor). If the block is still taller than `max_height`
/// at the floor, or a single word is wider than the box, the size keeps shrinking below the
/// floor until the block fits the box.
pub fn fit_text<M: TextMeasure + ?Sized>(
    measure: &mut M,
    text: &str,
    font: FontSpec,
    params: &FitParams,
) -> CardResult<Fit> {
    params.validate()?;

    let mut size = params.base_size.floor().max(params.min_size);
    let mut attempts = 0;
    while attempts < params.max_attempts {
        let spec = font.with_size(size);
        let lines = wrap_words(measure, text, &spec, params.max_width)?;
        let total = lines.len() as f64 * size * params.line_height;
        if total <= params.max_height && widest_line(measure, &lines, &spec)? <= params.max_width {
            break;
        }
        size = (size * params.shrink_ratio).floor();
        attempts += 1;
        if size < params.min_size {
            size = params.min_size;
            break;
        }
    }

    let (size, lines, shrunk) = squeeze_to_height(measure, text, font, size, params)?;
    let (spec, narrowed) =
        squeeze_to_width(measure, &lines, font.with_size(size), params.max_width)?;
    let squeezed = shrunk || narrowed;

    tracing::debug!(
        font_size = spec.size,
        lines = lines.len(),
        attempts,
        squeezed,
        "font fit"
    );
    Ok(Fit {
        font_size: spec.size,
        lines,
        attempts,
        squeezed,
    })
}

/// Shrink and re-wrap until the wrapped block is no taller than `params.max_height`.
fn squeeze_to_height<M: TextMeasure + ?Sized>(
    measure: &mut M,
    text: &str,
    font: FontSpec,
    size: f64,
    params: &FitParams,
) -> CardResult<(f64, Vec<String>, bool)> {
    let mut size = size;
    let mut lines = wrap_words(measure, text, &font.with_size(size), params.max_width)?;
    let mut squeezed = false;
    for _ in 0..HEIGHT_ROUNDS {
        let total = lines.len() as f64 * size * params.line_height;
        if total <= params.max_height {
            return Ok((size, lines, squeezed));
        }
        // Height grows roughly with the square of the size once lines wrap.
        size *= (params.max_height / total).sqrt().min(0.99);
        squeezed = true;
        lines = wrap_words(measure, text, &font.with_size(size), params.max_width)?;
    }
    if lines.len() as f64 * size * params.line_height > params.max_height {
        return Err(CardError::layout("text does not fit the available height"));
    }
    Ok((size, lines, squeezed))
}

/// Shrink `font` proportionally until every line of `lines` measures within `max_width`.
///
/// Returns the font unchanged (and `false`) when the lines already fit.
pub(crate) fn squeeze_to_width<M: TextMeasure + ?Sized>(
    measure: &mut M,
    lines: &[String],
    font: FontSpec,
    max_width: f64,
) -> CardResult<(FontSpec, bool)> {
    let mut spec = font;
    let mut squeezed = false;
    for _ in 0..SQUEEZE_ROUNDS {
        let widest = widest_line(measure, lines, &spec)?;
        if widest <= max_width {
            return Ok((spec, squeezed));
        }
        spec = spec.with_size(spec.size * max_width / widest * 0.999);
        squeezed = true;
    }
    if widest_line(measure, lines, &spec)? > max_width {
        return Err(CardError::layout("text does not fit the available width"));
    }
    Ok((spec, squeezed))
}

#[cfg(test)]
#[path = "../../tests/unit/text/fit.rs"]
mod tests;
