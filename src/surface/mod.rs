//! Drawing surface seam.
//!
//! Every compositing stage paints through [`Surface`], a canvas-style API with a save/restore
//! state stack (transform, alpha, blend mode). [`CpuSurface`] is the production implementation
//! backed by `vello_cpu`; tests substitute recording surfaces.

/// `vello_cpu` surface implementation.
pub mod cpu;
pub(crate) mod fonts;
/// Rendered pixel buffers.
pub mod frame;

use crate::foundation::core::{Affine, BezPath, CardSize, Point, Rect, Rgba8};
use crate::foundation::error::CardResult;

pub use cpu::CpuSurface;
pub use fonts::FontBook;
pub use frame::FrameRGBA;

/// One color stop of a gradient; `offset` is in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient axis.
    pub offset: f64,
    /// Stop color.
    pub color: Rgba8,
}

/// Fill or stroke paint.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    /// Single color.
    Solid(Rgba8),
    /// Linear gradient between two points in user space.
    Linear {
        /// Axis start.
        start: Point,
        /// Axis end.
        end: Point,
        /// Ordered stops.
        stops: Vec<GradientStop>,
    },
    /// Two-point radial gradient in user space.
    Radial {
        /// Start circle center.
        start_center: Point,
        /// Start circle radius.
        start_radius: f64,
        /// End circle center.
        end_center: Point,
        /// End circle radius.
        end_radius: f64,
        /// Ordered stops.
        stops: Vec<GradientStop>,
    },
}

impl Paint {
    /// Linear gradient with `colors` spread evenly from `start` to `end`.
    ///
    /// A single color degenerates to a solid paint.
    pub fn linear_even(start: Point, end: Point, colors: &[Rgba8]) -> Self {
        match colors {
            [] => Self::Solid(Rgba8::TRANSPARENT),
            [c] => Self::Solid(*c),
            _ => Self::Linear {
                start,
                end,
                stops: even_stops(colors),
            },
        }
    }

    /// Concentric radial gradient with `colors` spread evenly from `r0` to `r1`.
    pub fn radial_even(center: Point, r0: f64, r1: f64, colors: &[Rgba8]) -> Self {
        match colors {
            [] => Self::Solid(Rgba8::TRANSPARENT),
            [c] => Self::Solid(*c),
            _ => Self::Radial {
                start_center: center,
                start_radius: r0,
                end_center: center,
                end_radius: r1,
                stops: even_stops(colors),
            },
        }
    }

    /// Paint with every color's alpha multiplied by `k`.
    pub fn faded(&self, k: f64) -> Self {
        let fade_stops = |stops: &[GradientStop]| -> Vec<GradientStop> {
            stops
                .iter()
                .map(|s| GradientStop {
                    offset: s.offset,
                    color: s.color.fade(k),
                })
                .collect()
        };
        match self {
            Self::Solid(c) => Self::Solid(c.fade(k)),
            Self::Linear { start, end, stops } => Self::Linear {
                start: *start,
                end: *end,
                stops: fade_stops(stops),
            },
            Self::Radial {
                start_center,
                start_radius,
                end_center,
                end_radius,
                stops,
            } => Self::Radial {
                start_center: *start_center,
                start_radius: *start_radius,
                end_center: *end_center,
                end_radius: *end_radius,
                stops: fade_stops(stops),
            },
        }
    }
}

impl From<Rgba8> for Paint {
    fn from(c: Rgba8) -> Self {
        Self::Solid(c)
    }
}

/// Evenly spaced stops: stop `i` of `n` sits at `i / (n - 1)`.
pub fn even_stops(colors: &[Rgba8]) -> Vec<GradientStop> {
    let last = colors.len().saturating_sub(1).max(1) as f64;
    colors
        .iter()
        .enumerate()
        .map(|(i, c)| GradientStop {
            offset: i as f64 / last,
            color: *c,
        })
        .collect()
}

/// Stroke parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct LineStyle {
    /// Stroke width in user-space units.
    pub width: f64,
    /// Dash pattern (on, off, ...); empty for solid lines.
    pub dash: Vec<f64>,
}

impl LineStyle {
    /// Solid stroke of the given width.
    pub fn solid(width: f64) -> Self {
        Self {
            width,
            dash: Vec::new(),
        }
    }

    /// Dashed stroke of the given width.
    pub fn dashed(width: f64, dash: &[f64]) -> Self {
        Self {
            width,
            dash: dash.to_vec(),
        }
    }
}

/// Compositing operator for subsequent draws.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlendMode {
    /// Source-over.
    #[default]
    Normal,
    /// Screen blend (lightens).
    Screen,
}

/// Horizontal text anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    /// Anchor at the left edge.
    Left,
    /// Anchor at the horizontal center.
    #[default]
    Center,
    /// Anchor at the right edge.
    Right,
}

/// Vertical text anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextBaseline {
    /// Alphabetic baseline.
    #[default]
    Alphabetic,
    /// Middle of the em box.
    Middle,
    /// Top of the em box.
    Top,
}

/// Generic family used when a preferred family is not installed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenericFamily {
    /// Sans-serif.
    SansSerif,
    /// Serif.
    Serif,
    /// Handwriting / script.
    Cursive,
    /// Display / decorative.
    Display,
}

/// Font family a template asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    /// Inter, falls back to sans-serif.
    Inter,
    /// Playfair Display, falls back to serif.
    PlayfairDisplay,
    /// Dancing Script, falls back to cursive.
    DancingScript,
    /// Caveat, falls back to cursive.
    Caveat,
    /// Bebas Neue, falls back to display.
    BebasNeue,
    /// Plain sans-serif with no preferred face.
    SansSerif,
}

impl FontFamily {
    /// Installed family name to look for first, if any.
    pub fn preferred_name(self) -> Option<&'static str> {
        match self {
            Self::Inter => Some("Inter"),
            Self::PlayfairDisplay => Some("Playfair Display"),
            Self::DancingScript => Some("Dancing Script"),
            Self::Caveat => Some("Caveat"),
            Self::BebasNeue => Some("Bebas Neue"),
            Self::SansSerif => None,
        }
    }

    /// Generic fallback family.
    pub fn generic(self) -> GenericFamily {
        match self {
            Self::Inter | Self::SansSerif => GenericFamily::SansSerif,
            Self::PlayfairDisplay => GenericFamily::Serif,
            Self::DancingScript | Self::Caveat => GenericFamily::Cursive,
            Self::BebasNeue => GenericFamily::Display,
        }
    }
}

/// Resolved font request for one text draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSpec {
    /// Requested family.
    pub family: FontFamily,
    /// Size in pixels.
    pub size: f64,
    /// Bold weight.
    pub bold: bool,
    /// Italic style.
    pub italic: bool,
}

impl FontSpec {
    /// Regular-weight upright font.
    pub fn new(family: FontFamily, size: f64) -> Self {
        Self {
            family,
            size,
            bold: false,
            italic: false,
        }
    }

    /// Same font with bold weight.
    pub fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    /// Same font with italic style.
    pub fn italic(self) -> Self {
        Self {
            italic: true,
            ..self
        }
    }

    /// Same font at another size.
    pub fn with_size(self, size: f64) -> Self {
        Self { size, ..self }
    }
}

/// Text width measurement, the only capability the font-fit search needs.
pub trait TextMeasure {
    /// Advance width of `text` set in `font`, in pixels.
    fn measure_text(&mut self, text: &str, font: &FontSpec) -> CardResult<f64>;
}

/// A 2D-paintable surface.
///
/// State (transform, alpha, blend) is pushed with [`Surface::save`] and popped with
/// [`Surface::restore`]. Draw calls fail with [`crate::CardError::Compositing`] on non-finite
/// geometry; sizing fails with [`crate::CardError::SurfaceUnavailable`].
pub trait Surface: TextMeasure {
    /// Current surface size.
    fn size(&self) -> CardSize;

    /// Resize, clear to transparent and drop all saved state.
    fn reset(&mut self, size: CardSize) -> CardResult<()>;

    /// Push a copy of the current state.
    fn save(&mut self);

    /// Pop the last saved state; no-op when the stack is empty.
    fn restore(&mut self);

    /// Post-multiply the current transform by `t`.
    fn concat(&mut self, t: Affine);

    /// Set the global alpha in `[0, 1]` for subsequent draws.
    fn set_alpha(&mut self, alpha: f64);

    /// Set the blend mode for subsequent draws.
    fn set_blend(&mut self, mode: BlendMode);

    /// Fill `path` with `paint` (non-zero winding).
    fn fill(&mut self, path: &BezPath, paint: &Paint) -> CardResult<()>;

    /// Stroke `path` with `paint`.
    fn stroke(&mut self, path: &BezPath, paint: &Paint, style: &LineStyle) -> CardResult<()>;

    /// Draw a single line of text anchored at `at`.
    fn fill_text(
        &mut self,
        text: &str,
        font: &FontSpec,
        at: Point,
        align: TextAlign,
        baseline: TextBaseline,
        paint: &Paint,
    ) -> CardResult<()>;

    /// Blit a full frame at the origin, ignoring the current transform.
    fn draw_frame(&mut self, frame: &FrameRGBA) -> CardResult<()>;

    /// Read back the painted pixels.
    fn snapshot(&mut self) -> CardResult<FrameRGBA>;

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, paint: &Paint) -> CardResult<()> {
        let mut path = BezPath::new();
        path.move_to((rect.x0, rect.y0));
        path.line_to((rect.x1, rect.y0));
        path.line_to((rect.x1, rect.y1));
        path.line_to((rect.x0, rect.y1));
        path.close_path();
        self.fill(&path, paint)
    }

    /// Stroke an axis-aligned rectangle.
    fn stroke_rect(&mut self, rect: Rect, paint: &Paint, style: &LineStyle) -> CardResult<()> {
        let mut path = BezPath::new();
        path.move_to((rect.x0, rect.y0));
        path.line_to((rect.x1, rect.y0));
        path.line_to((rect.x1, rect.y1));
        path.line_to((rect.x0, rect.y1));
        path.close_path();
        self.stroke(&path, paint, style)
    }
}

pub(crate) fn path_is_finite(path: &BezPath) -> bool {
    use kurbo::PathEl;

    let ok = |p: &Point| p.x.is_finite() && p.y.is_finite();
    path.elements().iter().all(|el| match el {
        PathEl::MoveTo(p) | PathEl::LineTo(p) => ok(p),
        PathEl::QuadTo(a, b) => ok(a) && ok(b),
        PathEl::CurveTo(a, b, c) => ok(a) && ok(b) && ok(c),
        PathEl::ClosePath => true,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/surface/mod.rs"]
mod tests;
