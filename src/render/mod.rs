//! Card renderer: the single entry point that paints a finished card onto a [`Surface`].
//!
//! Stages run strictly in order: reset, background, decorations, text, watermark. A failing
//! decorative stage is replaced by the fallback card; a failing text fit is replaced by the
//! simplified layout. Only an unusable surface escapes as an error.

use crate::catalog::{StyleDescriptor, is_known, resolve_style};
use crate::compose::helpers::diagonal_gradient;
use crate::compose::paint_background;
use crate::config::RenderConfig;
use crate::decor::paint_decorations;
use crate::foundation::core::{CardSize, Point, Rgba8};
use crate::foundation::error::CardResult;
use crate::foundation::math::{Fnv1a64, Rng64};
use crate::surface::{FontFamily, FontSpec, FrameRGBA, Paint, Surface, TextAlign, TextBaseline};
use crate::text::fit::squeeze_to_width;
use crate::text::{LayoutResult, compute_layout, compute_simple};

const FALLBACK_COLORS: [Rgba8; 2] = [Rgba8::hex(0x8B5CF6), Rgba8::hex(0xEC4899)];
const FALLBACK_MESSAGE: &str = "Your Card";

/// What to render.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RenderRequest {
    /// Message body; treated as opaque text.
    pub message: String,
    /// Recipient for the "Dear ..." salutation.
    #[serde(default)]
    pub recipient: Option<String>,
    /// Occasion tag selecting the glyph.
    #[serde(default)]
    pub occasion: Option<String>,
    /// Template id; unknown ids render with the default template.
    pub template: String,
    /// Output size.
    pub size: CardSize,
}

impl RenderRequest {
    /// Portrait request for `template` carrying `message`.
    pub fn new(template: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            recipient: None,
            occasion: None,
            template: template.into(),
            size: CardSize::PORTRAIT,
        }
    }

    /// Set the recipient.
    pub fn with_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = Some(recipient.into());
        self
    }

    /// Set the occasion tag.
    pub fn with_occasion(mut self, occasion: impl Into<String>) -> Self {
        self.occasion = Some(occasion.into());
        self
    }

    /// Set the output size.
    pub fn with_size(mut self, size: CardSize) -> Self {
        self.size = size;
        self
    }

    /// Seed derived from template, message and size, so an unchanged card renders identically.
    pub fn derived_seed(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_str(&self.template);
        h.write_str(&self.message);
        h.write_u32(self.size.width);
        h.write_u32(self.size.height);
        h.finish()
    }
}

/// Report of one render call.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOutcome {
    /// Template that was actually painted.
    pub template: &'static str,
    /// Whether the requested id was in the catalog.
    pub template_known: bool,
    /// Seed used for decorative randomness.
    pub seed: u64,
    /// The background or decorations failed and the fallback card was painted instead.
    pub fallback_card: bool,
    /// The font-fit search failed and the simplified layout was painted.
    pub simplified_text: bool,
    /// Text block that was painted.
    pub layout: LayoutResult,
}

/// Paints cards. Holds configuration only; surfaces are borrowed per call.
#[derive(Clone, Debug, Default)]
pub struct CardRenderer {
    config: RenderConfig,
}

impl CardRenderer {
    /// Renderer with the given configuration.
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render `req` onto `s`, resizing and clearing it first.
    ///
    /// Returns [`crate::CardError::SurfaceUnavailable`] when the surface cannot be sized, or the
    /// fallback card's own error when even that cannot be painted.
    #[tracing::instrument(
        skip(self, s, req),
        fields(template = %req.template, width = req.size.width, height = req.size.height)
    )]
    pub fn render(&self, s: &mut dyn Surface, req: &RenderRequest) -> CardResult<RenderOutcome> {
        let size = req.size;
        s.reset(size)?;

        let descriptor = resolve_style(&req.template);
        let seed = self.config.seed.unwrap_or_else(|| req.derived_seed());

        match self.paint_card(s, descriptor, req, seed) {
            Ok((layout, simplified_text)) => Ok(RenderOutcome {
                template: descriptor.id,
                template_known: is_known(&req.template),
                seed,
                fallback_card: false,
                simplified_text,
                layout,
            }),
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    template = descriptor.id,
                    "card failed, painting fallback card"
                );
                s.reset(size)?;
                let layout = self.paint_fallback_card(s, &req.message, size)?;
                Ok(RenderOutcome {
                    template: descriptor.id,
                    template_known: is_known(&req.template),
                    seed,
                    fallback_card: true,
                    simplified_text: true,
                    layout,
                })
            }
        }
    }

    /// Render and read back the pixels.
    pub fn render_frame(
        &self,
        s: &mut dyn Surface,
        req: &RenderRequest,
    ) -> CardResult<(FrameRGBA, RenderOutcome)> {
        let outcome = self.render(s, req)?;
        Ok((s.snapshot()?, outcome))
    }

    fn paint_card(
        &self,
        s: &mut dyn Surface,
        descriptor: &StyleDescriptor,
        req: &RenderRequest,
        seed: u64,
    ) -> CardResult<(LayoutResult, bool)> {
        let size = req.size;
        let mut rng = Rng64::new(seed);
        paint_background(s, descriptor, size, &mut rng)?;
        paint_decorations(s, descriptor, size, req.occasion.as_deref(), &mut rng)?;

        let cfg = &self.config.layout;
        let recipient = req.recipient.as_deref();
        let (layout, simplified) =
            match compute_layout(&mut *s, &req.message, descriptor, size, recipient, cfg) {
                Ok(layout) => (layout, false),
                Err(err) => {
                    tracing::warn!(error = %err, "font fit failed, using simplified layout");
                    (compute_simple(&mut *s, &req.message, size, cfg)?, true)
                }
            };
        layout.paint(s)?;
        self.paint_watermark(s, size)?;
        Ok((layout, simplified))
    }

    /// Small translucent credit line at the bottom center.
    fn paint_watermark(&self, s: &mut dyn Surface, size: CardSize) -> CardResult<()> {
        let text = self.config.watermark.trim();
        if text.is_empty() {
            return Ok(());
        }
        let k = size.scale();
        let lines = [text.to_owned()];
        let font = FontSpec::new(FontFamily::SansSerif, 14.0 * k);
        let (font, _) = squeeze_to_width(&mut *s, &lines, font, size.w())?;
        s.fill_text(
            text,
            &font,
            Point::new(size.w() / 2.0, size.h() - 40.0 * k),
            TextAlign::Center,
            TextBaseline::Alphabetic,
            &Paint::Solid(Rgba8::WHITE.with_alpha(0.3)),
        )
    }

    /// Two-color diagonal gradient with the message (or a placeholder) centered on it.
    fn paint_fallback_card(
        &self,
        s: &mut dyn Surface,
        message: &str,
        size: CardSize,
    ) -> CardResult<LayoutResult> {
        s.fill_rect(size.rect(), &diagonal_gradient(size, &FALLBACK_COLORS))?;
        let message = if message.trim().is_empty() {
            FALLBACK_MESSAGE
        } else {
            message
        };
        let layout = compute_simple(&mut *s, message, size, &self.config.layout)?;
        layout.paint(s)?;
        Ok(layout)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/mod.rs"]
mod tests;
