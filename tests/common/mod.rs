#![allow(dead_code)]

use cardsmith::surface::{BlendMode, FontSpec, LineStyle, Paint, TextAlign, TextBaseline};
use cardsmith::{
    Affine, BezPath, CardResult, CardSize, CpuSurface, FontBook, FrameRGBA, Point, Surface,
    TextMeasure,
};

/// One `fill_text` call.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawnText {
    pub text: String,
    pub font: FontSpec,
    pub at: Point,
    pub align: TextAlign,
}

/// Surface wrapper that logs text draws and resets, painting through to `inner`.
pub struct TextLog<S> {
    pub inner: S,
    pub texts: Vec<DrawnText>,
    pub resets: usize,
}

impl<S: Surface> TextLog<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            texts: Vec::new(),
            resets: 0,
        }
    }

    /// Measured width of every logged line, using the surface's own metrics.
    pub fn widths(&mut self) -> Vec<(String, f64)> {
        let texts = self.texts.clone();
        texts
            .into_iter()
            .map(|t| {
                let w = self.inner.measure_text(&t.text, &t.font).unwrap();
                (t.text, w)
            })
            .collect()
    }
}

impl<S: Surface> TextMeasure for TextLog<S> {
    fn measure_text(&mut self, text: &str, font: &FontSpec) -> CardResult<f64> {
        self.inner.measure_text(text, font)
    }
}

impl<S: Surface> Surface for TextLog<S> {
    fn size(&self) -> CardSize {
        self.inner.size()
    }

    fn reset(&mut self, size: CardSize) -> CardResult<()> {
        self.texts.clear();
        self.resets += 1;
        self.inner.reset(size)
    }

    fn save(&mut self) {
        self.inner.save();
    }

    fn restore(&mut self) {
        self.inner.restore();
    }

    fn concat(&mut self, t: Affine) {
        self.inner.concat(t);
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.inner.set_alpha(alpha);
    }

    fn set_blend(&mut self, mode: BlendMode) {
        self.inner.set_blend(mode);
    }

    fn fill(&mut self, path: &BezPath, paint: &Paint) -> CardResult<()> {
        self.inner.fill(path, paint)
    }

    fn stroke(&mut self, path: &BezPath, paint: &Paint, style: &LineStyle) -> CardResult<()> {
        self.inner.stroke(path, paint, style)
    }

    fn fill_text(
        &mut self,
        text: &str,
        font: &FontSpec,
        at: Point,
        align: TextAlign,
        baseline: TextBaseline,
        paint: &Paint,
    ) -> CardResult<()> {
        self.texts.push(DrawnText {
            text: text.to_owned(),
            font: *font,
            at,
            align,
        });
        self.inner.fill_text(text, font, at, align, baseline, paint)
    }

    fn draw_frame(&mut self, frame: &FrameRGBA) -> CardResult<()> {
        self.inner.draw_frame(frame)
    }

    fn snapshot(&mut self) -> CardResult<FrameRGBA> {
        self.inner.snapshot()
    }
}

/// CPU surface with estimated metrics, so results do not depend on installed fonts.
pub fn cpu(size: CardSize) -> CpuSurface {
    CpuSurface::with_fonts(size, FontBook::estimated()).unwrap()
}

pub fn logged(size: CardSize) -> TextLog<CpuSurface> {
    TextLog::new(cpu(size))
}

/// `width - 2 * padding` for the default layout configuration.
pub fn max_text_width(size: CardSize) -> f64 {
    let padding = 40.0 * size.width as f64 / 300.0;
    size.width as f64 - 2.0 * padding
}

pub fn words(n: usize) -> String {
    const POOL: [&str; 8] = [
        "wishing", "you", "a", "wonderful", "year", "full", "of", "joy",
    ];
    (0..n).map(|i| POOL[i % POOL.len()]).collect::<Vec<_>>().join(" ")
}
