//! Background compositor.
//!
//! One routine per [`Background`] variant. Routines only draw; they never read pixels back, and
//! all randomness comes from the caller's [`Rng64`], so a fixed seed reproduces a background
//! exactly.

mod artistic;
pub(crate) mod helpers;
mod modern;
mod nature;
mod pattern;
mod postcard;
mod retro;
mod seasonal;
mod space;

use crate::catalog::{Background, StyleDescriptor};
use crate::foundation::core::CardSize;
use crate::foundation::error::CardResult;
use crate::foundation::math::Rng64;
use crate::surface::Surface;

/// Paint the full background for `descriptor` onto `s`.
#[tracing::instrument(
    skip(s, descriptor, rng),
    fields(template = descriptor.id, kind = ?descriptor.kind())
)]
pub fn paint_background(
    s: &mut dyn Surface,
    descriptor: &StyleDescriptor,
    size: CardSize,
    rng: &mut Rng64,
) -> CardResult<()> {
    match &descriptor.background {
        Background::FlatGradient { colors } => artistic::flat_gradient(s, colors, size),
        Background::Plain { color, border } => artistic::plain(s, *color, *border, size),
        Background::Watercolor { colors } => artistic::watercolor(s, colors, size, rng),
        Background::OilPainting { base, accents } => {
            artistic::oil_painting(s, *base, accents, size, rng)
        }
        Background::Sketch { paper, ink } => artistic::sketch(s, *paper, *ink, size, rng),
        Background::Abstract { colors, shapes } => {
            artistic::abstract_shapes(s, colors, shapes, size, rng)
        }
        Background::RetroPattern { colors } => retro::retro_pattern(s, colors, size, rng),
        Background::ArtDeco { background, gold } => retro::art_deco(s, *background, *gold, size),
        Background::VintagePostcard { paper, stamp } => {
            retro::vintage_postcard(s, *paper, *stamp, size, rng)
        }
        Background::Polaroid { paper } => retro::polaroid(s, *paper, size),
        Background::NatureScene(scene) => nature::paint(s, scene, size, rng),
        Background::Space(scene) => space::paint(s, scene, size, rng),
        Background::Pattern(scene) => pattern::paint(s, scene, size, rng),
        Background::Postcard(scene) => postcard::paint(s, scene, size),
        Background::Modern(scene) => modern::paint(s, scene, size, rng),
        Background::Seasonal(scene) => seasonal::paint(s, scene, size, rng),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/mod.rs"]
mod tests;
