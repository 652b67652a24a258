use crate::catalog::StyleDescriptor;
use crate::config::LayoutConfig;
use crate::foundation::core::{CardSize, Point, Rgba8};
use crate::foundation::error::{CardError, CardResult};
use crate::surface::{FontFamily, FontSpec, Paint, Surface, TextAlign, TextBaseline, TextMeasure};
use crate::text::fit::{FitParams, fit_text, squeeze_to_width};
use crate::text::wrap::wrap_words;

/// Salutation baseline and top of the text region, as a fraction of the card height.
const TEXT_TOP_RATIO: f64 = 0.2;

/// The "Dear {name}," line above the message.
#[derive(Clone, Debug, PartialEq)]
pub struct Salutation {
    /// Rendered text.
    pub text: String,
    /// Italic font, possibly squeezed to fit the width.
    pub font: FontSpec,
    /// Baseline anchor (horizontally centered).
    pub at: Point,
    /// Text color.
    pub color: Rgba8,
}

/// A computed text block, ready to paint.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutResult {
    /// Font of every message line.
    pub font: FontSpec,
    /// Wrapped lines, top to bottom.
    pub lines: Vec<String>,
    /// Anchor y of the first line.
    pub start_y: f64,
    /// Distance between consecutive line anchors.
    pub line_height: f64,
    /// Horizontal center of every line.
    pub center_x: f64,
    /// Width no line exceeds.
    pub max_width: f64,
    /// Vertical anchor of each line.
    pub baseline: TextBaseline,
    /// Message color.
    pub color: Rgba8,
    /// Salutation, when a recipient was given.
    pub salutation: Option<Salutation>,
    /// Shrinks performed by the fit search; zero for the simplified layout.
    pub attempts: u32,
    /// Produced by the simplified single-pass layout.
    pub simplified: bool,
}

impl LayoutResult {
    /// Chosen message font size.
    pub fn font_size(&self) -> f64 {
        self.font.size
    }

    /// Anchor of line `i`.
    pub fn line_anchor(&self, i: usize) -> Point {
        Point::new(self.center_x, self.start_y + i as f64 * self.line_height)
    }

    /// Paint the salutation and every line.
    pub fn paint(&self, s: &mut dyn Surface) -> CardResult<()> {
        if let Some(sal) = &self.salutation {
            s.fill_text(
                &sal.text,
                &sal.font,
                sal.at,
                TextAlign::Center,
                TextBaseline::Alphabetic,
                &Paint::Solid(sal.color),
            )?;
        }
        let paint = Paint::Solid(self.color);
        for (i, line) in self.lines.iter().enumerate() {
            s.fill_text(
                line,
                &self.font,
                self.line_anchor(i),
                TextAlign::Center,
                self.baseline,
                &paint,
            )?;
        }
        Ok(())
    }
}

/// Horizontal text bounds for a card width.
fn text_box(size: CardSize, cfg: &LayoutConfig) -> CardResult<(f64, f64)> {
    let padding = cfg.padding_ratio * size.w();
    let max_width = size.w() - 2.0 * padding;
    if !max_width.is_finite() || max_width <= 0.0 {
        return Err(CardError::layout(format!(
            "no horizontal room for text at width {}",
            size.width
        )));
    }
    Ok((size.w() / 2.0, max_width))
}

/// Whole-pixel size when at least one pixel, so tiny cards keep a usable font.
fn floor_px(v: f64) -> f64 {
    if v >= 1.0 { v.floor() } else { v }
}

/// Fit `message` (and the optional salutation) for `descriptor` on a card of `size`.
pub fn compute_layout<M: TextMeasure + ?Sized>(
    measure: &mut M,
    message: &str,
    descriptor: &StyleDescriptor,
    size: CardSize,
    recipient: Option<&str>,
    cfg: &LayoutConfig,
) -> CardResult<LayoutResult> {
    let (center_x, max_width) = text_box(size, cfg)?;
    let top = TEXT_TOP_RATIO * size.h();
    let max_height = cfg.height_budget_ratio * size.h();

    let salutation = match recipient.map(str::trim).filter(|r| !r.is_empty()) {
        Some(name) => {
            let text = format!("Dear {name},");
            let px = floor_px(cfg.salutation_font_ratio * size.w());
            let font = FontSpec::new(descriptor.font, px).italic();
            let (font, _) =
                squeeze_to_width(measure, std::slice::from_ref(&text), font, max_width)?;
            Some(Salutation {
                text,
                font,
                at: Point::new(center_x, top),
                color: descriptor.secondary_text,
            })
        }
        None => None,
    };
    // The message starts two salutation lines below the salutation baseline.
    let reserved = salutation.as_ref().map_or(0.0, |s| 2.0 * s.font.size);

    let params = FitParams {
        base_size: cfg.base_font_ratio * size.w(),
        min_size: cfg.min_font_px,
        shrink_ratio: cfg.shrink_ratio,
        max_attempts: cfg.max_attempts,
        line_height: cfg.line_height,
        max_width,
        max_height: max_height - reserved,
    };
    let fit = fit_text(measure, message, FontSpec::new(descriptor.font, 1.0).bold(), &params)?;
    let line_height = fit.font_size * cfg.line_height;
    let start_y = if salutation.is_some() {
        top + reserved + fit.font_size
    } else {
        centered_start(size, fit.lines.len(), line_height, fit.font_size)
    };

    Ok(LayoutResult {
        font: FontSpec::new(descriptor.font, fit.font_size).bold(),
        lines: fit.lines,
        start_y,
        line_height,
        center_x,
        max_width,
        baseline: TextBaseline::Alphabetic,
        color: descriptor.primary_text,
        salutation,
        attempts: fit.attempts,
        simplified: false,
    })
}

fn centered_start(size: CardSize, lines: usize, line_height: f64, font_size: f64) -> f64 {
    size.h() / 2.0 - lines as f64 * line_height / 2.0 + font_size / 2.0
}

/// Fit and paint the message in the descriptor's font and colors.
#[tracing::instrument(skip(s, message, descriptor, cfg), fields(template = descriptor.id))]
pub fn layout_and_paint(
    s: &mut dyn Surface,
    message: &str,
    descriptor: &StyleDescriptor,
    size: CardSize,
    recipient: Option<&str>,
    cfg: &LayoutConfig,
) -> CardResult<LayoutResult> {
    let layout = compute_layout(&mut *s, message, descriptor, size, recipient, cfg)?;
    layout.paint(s)?;
    Ok(layout)
}

/// Single-pass layout: white sans-serif at a fixed readable size, wrapped and centered.
///
/// No salutation and no size search; the font only shrinks when a single word is wider than the
/// text box.
pub fn compute_simple<M: TextMeasure + ?Sized>(
    measure: &mut M,
    message: &str,
    size: CardSize,
    cfg: &LayoutConfig,
) -> CardResult<LayoutResult> {
    let (center_x, max_width) = text_box(size, cfg)?;
    let font = FontSpec::new(FontFamily::SansSerif, cfg.simple_font_px * size.scale());
    let lines = wrap_words(measure, message, &font, max_width)?;
    let (font, _) = squeeze_to_width(measure, &lines, font, max_width)?;
    let line_height = font.size * cfg.line_height;
    Ok(LayoutResult {
        font,
        start_y: centered_start(size, lines.len(), line_height, font.size),
        lines,
        line_height,
        center_x,
        max_width,
        baseline: TextBaseline::Middle,
        color: Rgba8::WHITE,
        salutation: None,
        attempts: 0,
        simplified: true,
    })
}

/// Compute and paint the simplified layout.
pub fn paint_simple(
    s: &mut dyn Surface,
    message: &str,
    size: CardSize,
    cfg: &LayoutConfig,
) -> CardResult<LayoutResult> {
    let layout = compute_simple(&mut *s, message, size, cfg)?;
    layout.paint(s)?;
    Ok(layout)
}

#[cfg(test)]
#[path = "../../tests/unit/text/layout.rs"]
mod tests;
