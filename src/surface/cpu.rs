use std::sync::Arc;

use vello_cpu::peniko::color::PremulRgba8;

use crate::foundation::core::{Affine, BezPath, CardSize, Point, Rgba8};
use crate::foundation::error::{CardError, CardResult};
use crate::surface::fonts::FontBook;
use crate::surface::frame::{FrameRGBA, premultiply_rgba8_in_place};
use crate::surface::{
    BlendMode, FontSpec, LineStyle, Paint, Surface, TextAlign, TextBaseline, TextMeasure,
    path_is_finite,
};

#[derive(Clone, Copy, Debug)]
struct DrawState {
    transform: Affine,
    alpha: f64,
    blend: BlendMode,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            alpha: 1.0,
            blend: BlendMode::Normal,
        }
    }
}

/// CPU surface powered by `vello_cpu`.
///
/// Surfaces are limited to `u16` dimensions; anything larger (or zero) is reported as
/// [`CardError::SurfaceUnavailable`].
pub struct CpuSurface {
    ctx: vello_cpu::RenderContext,
    size: CardSize,
    state: DrawState,
    stack: Vec<DrawState>,
    fonts: FontBook,
}

impl std::fmt::Debug for CpuSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuSurface")
            .field("size", &self.size)
            .field("depth", &self.stack.len())
            .field("fonts", &self.fonts)
            .finish()
    }
}

impl CpuSurface {
    /// Create a surface using the system fonts.
    pub fn new(size: CardSize) -> CardResult<Self> {
        Self::with_fonts(size, FontBook::system())
    }

    /// Create a surface with an explicit font book.
    pub fn with_fonts(size: CardSize, fonts: FontBook) -> CardResult<Self> {
        let (w, h) = dims_u16(size)?;
        Ok(Self {
            ctx: vello_cpu::RenderContext::new(w, h),
            size,
            state: DrawState::default(),
            stack: Vec::new(),
            fonts,
        })
    }

    /// Mutable access to the font book.
    pub fn fonts_mut(&mut self) -> &mut FontBook {
        &mut self.fonts
    }

    fn prepare(&mut self, transform: Affine, paint: &Paint) {
        self.ctx.set_transform(affine_to_cpu(transform));
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx
            .set_blend_mode(vello_cpu::peniko::BlendMode::default());
        let paint = if self.state.alpha < 1.0 {
            paint.faded(self.state.alpha)
        } else {
            paint.clone()
        };
        match paint {
            Paint::Solid(c) => self.ctx.set_paint(color_to_cpu(c)),
            Paint::Linear { start, end, stops } => {
                let g = vello_cpu::peniko::Gradient::new_linear(
                    point_to_cpu(start),
                    point_to_cpu(end),
                )
                .with_stops(stops_to_cpu(&stops).as_slice());
                self.ctx.set_paint(g);
            }
            Paint::Radial {
                start_center,
                start_radius,
                end_center,
                end_radius,
                stops,
            } => {
                let g = vello_cpu::peniko::Gradient::new_two_point_radial(
                    point_to_cpu(start_center),
                    start_radius as f32,
                    point_to_cpu(end_center),
                    end_radius as f32,
                )
                .with_stops(stops_to_cpu(&stops).as_slice());
                self.ctx.set_paint(g);
            }
        }
    }

    fn with_blend(&mut self, f: impl FnOnce(&mut vello_cpu::RenderContext)) {
        match self.state.blend {
            BlendMode::Normal => f(&mut self.ctx),
            BlendMode::Screen => {
                self.ctx.push_blend_layer(vello_cpu::peniko::BlendMode::new(
                    vello_cpu::peniko::Mix::Screen,
                    vello_cpu::peniko::Compose::SrcOver,
                ));
                f(&mut self.ctx);
                self.ctx.pop_layer();
            }
        }
    }
}

impl TextMeasure for CpuSurface {
    fn measure_text(&mut self, text: &str, font: &FontSpec) -> CardResult<f64> {
        self.fonts.measure(text, font)
    }
}

impl Surface for CpuSurface {
    fn size(&self) -> CardSize {
        self.size
    }

    fn reset(&mut self, size: CardSize) -> CardResult<()> {
        let (w, h) = dims_u16(size)?;
        if self.ctx.width() == w && self.ctx.height() == h {
            self.ctx.reset();
        } else {
            self.ctx = vello_cpu::RenderContext::new(w, h);
        }
        self.size = size;
        self.state = DrawState::default();
        self.stack.clear();
        Ok(())
    }

    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        if let Some(s) = self.stack.pop() {
            self.state = s;
        }
    }

    fn concat(&mut self, t: Affine) {
        self.state.transform *= t;
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.state.alpha = if alpha.is_finite() {
            alpha.clamp(0.0, 1.0)
        } else {
            0.0
        };
    }

    fn set_blend(&mut self, mode: BlendMode) {
        self.state.blend = mode;
    }

    fn fill(&mut self, path: &BezPath, paint: &Paint) -> CardResult<()> {
        if !path_is_finite(path) {
            return Err(CardError::compositing("fill path has non-finite coordinates"));
        }
        self.prepare(self.state.transform, paint);
        let p = bezpath_to_cpu(path);
        self.with_blend(|ctx| ctx.fill_path(&p));
        Ok(())
    }

    fn stroke(&mut self, path: &BezPath, paint: &Paint, style: &LineStyle) -> CardResult<()> {
        if !path_is_finite(path) {
            return Err(CardError::compositing(
                "stroke path has non-finite coordinates",
            ));
        }
        if !style.width.is_finite() || style.width <= 0.0 {
            return Err(CardError::compositing(format!(
                "stroke width must be finite and > 0, got {}",
                style.width
            )));
        }
        self.prepare(self.state.transform, paint);
        let mut stroke = vello_cpu::kurbo::Stroke::new(style.width);
        if !style.dash.is_empty() {
            stroke = stroke.with_dashes(0.0, style.dash.iter().copied());
        }
        self.ctx.set_stroke(stroke);
        let p = bezpath_to_cpu(path);
        self.with_blend(|ctx| ctx.stroke_path(&p));
        Ok(())
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
        if !at.x.is_finite() || !at.y.is_finite() {
            return Err(CardError::compositing("text anchor is not finite"));
        }
        let line = self.fonts.shape(text, font)?;
        let Some(font_data) = line.font.clone() else {
            self.fonts.note_unpainted();
            return Ok(());
        };

        let dx = match align {
            TextAlign::Left => 0.0,
            TextAlign::Center => -line.width / 2.0,
            TextAlign::Right => -line.width,
        };
        let dy = match baseline {
            TextBaseline::Alphabetic => 0.0,
            TextBaseline::Middle => (line.ascent - line.descent) / 2.0,
            TextBaseline::Top => line.ascent,
        };

        let t = self.state.transform * Affine::translate((at.x + dx, at.y + dy));
        self.prepare(t, paint);
        let size = line.size;
        let glyphs = line.glyphs;
        self.with_blend(|ctx| {
            ctx.glyph_run(&font_data)
                .font_size(size)
                .fill_glyphs(glyphs.into_iter());
        });
        Ok(())
    }

    fn draw_frame(&mut self, frame: &FrameRGBA) -> CardResult<()> {
        frame.validate()?;
        if frame.size() != self.size {
            return Err(CardError::validation(format!(
                "frame is {}x{} but surface is {}x{}",
                frame.width, frame.height, self.size.width, self.size.height
            )));
        }
        let pixmap = if frame.premultiplied {
            pixmap_from_premul_bytes(&frame.data, frame.width, frame.height)?
        } else {
            let mut bytes = frame.data.clone();
            premultiply_rgba8_in_place(&mut bytes);
            pixmap_from_premul_bytes(&bytes, frame.width, frame.height)?
        };
        let paint = vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        };
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx
            .set_blend_mode(vello_cpu::peniko::BlendMode::default());
        self.ctx.set_paint(paint);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            self.size.w(),
            self.size.h(),
        ));
        Ok(())
    }

    fn snapshot(&mut self) -> CardResult<FrameRGBA> {
        let (w, h) = dims_u16(self.size)?;
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        Ok(FrameRGBA {
            width: self.size.width,
            height: self.size.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn dims_u16(size: CardSize) -> CardResult<(u16, u16)> {
    if size.width == 0 || size.height == 0 {
        return Err(CardError::surface(format!(
            "surface size must be positive, got {}x{}",
            size.width, size.height
        )));
    }
    let w: u16 = size.width.try_into().map_err(|_| {
        CardError::surface(format!("surface width {} exceeds u16", size.width))
    })?;
    let h: u16 = size.height.try_into().map_err(|_| {
        CardError::surface(format!("surface height {} exceeds u16", size.height))
    })?;
    Ok((w, h))
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn stops_to_cpu(stops: &[crate::surface::GradientStop]) -> Vec<vello_cpu::peniko::ColorStop> {
    stops
        .iter()
        .map(|s| vello_cpu::peniko::ColorStop {
            offset: s.offset.clamp(0.0, 1.0) as f32,
            color: color_to_cpu(s.color).into(),
        })
        .collect()
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3))
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> CardResult<vello_cpu::Pixmap> {
    let (w, h) = dims_u16(CardSize { width, height })?;
    // Pixmap stores PremulRgba8; bytes are already premultiplied.
    let pixels = bytes
        .chunks_exact(4)
        .map(|px| PremulRgba8::from_u8_array([px[0], px[1], px[2], px[3]]))
        .collect::<Vec<_>>();
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true))
}

#[cfg(test)]
#[path = "../../tests/unit/surface/cpu.rs"]
mod tests;
