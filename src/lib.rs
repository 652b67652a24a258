//! Cardsmith renders greeting cards on a CPU canvas.
//!
//! A card is a styled background from a fixed template catalog, a decoration overlay with an
//! occasion glyph, a fitted text block and a watermark. Rendering degrades instead of failing:
//!
//! - Resolve a [`StyleDescriptor`] with [`resolve_style`] (unknown ids fall back to `modern`)
//! - Paint a [`RenderRequest`] through [`CardRenderer::render`] onto any [`Surface`]
//! - Overlay particle effects with [`generate_frames`] and export with [`encode_gif`] or
//!   [`encode_png`]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod foundation;

/// Particle overlays and frame sequences.
pub mod anim;
/// Template catalog.
pub mod catalog;
/// Background routines.
pub mod compose;
/// Crate configuration.
pub mod config;
/// Decoration clusters and occasion glyphs.
pub mod decor;
/// GIF and PNG export.
pub mod encode;
/// Card orchestration.
pub mod render;
/// Drawing surface seam and the CPU implementation.
pub mod surface;
/// Wrapping, font fitting and text placement.
pub mod text;

pub use crate::foundation::color::parse_hex;
pub use crate::foundation::core::{Affine, BezPath, CardSize, Point, Rect, Rgba8, Vec2};
pub use crate::foundation::error::{CardError, CardResult};
pub use crate::foundation::math::Rng64;

pub use crate::anim::{Effect, EffectSet, generate_frames, generate_frames_with};
pub use crate::catalog::{StyleDescriptor, resolve_style, template_ids};
pub use crate::config::{AnimationConfig, CardConfig, GifConfig, LayoutConfig, RenderConfig};
pub use crate::encode::{FrameSink, GifSink, InMemorySink, SinkConfig, encode_gif, encode_png};
pub use crate::render::{CardRenderer, RenderOutcome, RenderRequest};
pub use crate::surface::{CpuSurface, FontBook, FrameRGBA, Surface, TextMeasure};
pub use crate::text::LayoutResult;

#[cfg(test)]
#[path = "../tests/unit/support.rs"]
pub(crate) mod test_support;
