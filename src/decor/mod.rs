//! Decoration layer: one translucent overlay cluster plus the occasion glyph.
//!
//! Cluster geometry is authored against a 300px-wide design and scaled by `width / 300`.

mod glyphs;

pub use glyphs::Glyph;

use std::f64::consts::PI;

use crate::catalog::{Decoration, StyleDescriptor};
use crate::compose::helpers::{circle, curve, ellipse, polygon};
use crate::foundation::core::{CardSize, Point, Rgba8};
use crate::foundation::error::CardResult;
use crate::foundation::math::Rng64;
use crate::surface::{LineStyle, Paint, Surface};

const DESIGN_WIDTH: f64 = 300.0;

/// Paint the descriptor's decoration cluster and, when `occasion` is given, its glyph.
#[tracing::instrument(skip(s, descriptor, rng), fields(template = descriptor.id))]
pub fn paint_decorations(
    s: &mut dyn Surface,
    descriptor: &StyleDescriptor,
    size: CardSize,
    occasion: Option<&str>,
    rng: &mut Rng64,
) -> CardResult<()> {
    let k = size.w() / DESIGN_WIDTH;
    match descriptor.decoration {
        Decoration::Geometric => geometric(s, size, k)?,
        Decoration::Ornamental => ornamental(s, size, k)?,
        Decoration::Floral => floral(s, size, k, rng)?,
        Decoration::None => {}
    }
    if let Some(occasion) = occasion.filter(|o| !o.trim().is_empty()) {
        let glyph = Glyph::for_occasion(occasion);
        let unit = size.scale();
        glyphs::paint_glyph(s, glyph, Point::new(size.w() / 2.0, 100.0 * unit), 56.0 * unit)?;
    }
    Ok(())
}

fn geometric(s: &mut dyn Surface, size: CardSize, k: f64) -> CardResult<()> {
    let (w, h) = (size.w(), size.h());
    let paint = Paint::Solid(Rgba8::WHITE.with_alpha(0.1));
    for (x, y, r) in [
        (50.0 * k, 100.0 * k, 30.0 * k),
        (w - 60.0 * k, h - 150.0 * k, 40.0 * k),
        (w / 2.0, 150.0 * k, 20.0 * k),
    ] {
        s.fill(&circle(Point::new(x, y), r), &paint)?;
    }
    s.fill(
        &polygon(&[
            Point::new(w - 50.0 * k, 80.0 * k),
            Point::new(w - 30.0 * k, 120.0 * k),
            Point::new(w - 70.0 * k, 120.0 * k),
        ]),
        &paint,
    )
}

/// Curled flourish in each corner, bending toward the card's center.
fn ornamental(s: &mut dyn Surface, size: CardSize, k: f64) -> CardResult<()> {
    let (w, h) = (size.w(), size.h());
    let inset = 30.0 * k;
    let reach = 20.0 * k;
    let paint = Paint::Solid(Rgba8::WHITE.with_alpha(0.3));
    let style = LineStyle::solid(2.0 * k);
    for (x, y) in [(inset, inset), (w - inset, inset), (inset, h - inset), (w - inset, h - inset)] {
        let dx = if x < w / 2.0 { reach } else { -reach };
        let dy = if y < h / 2.0 { reach } else { -reach };
        let corner = Point::new(x, y);
        s.stroke(
            &curve(corner, Point::new(x + dx, y), Point::new(x + dx, y + dy)),
            &paint,
            &style,
        )?;
    }
    Ok(())
}

/// Three leaf ellipses at fixed anchors with random tilt.
fn floral(s: &mut dyn Surface, size: CardSize, k: f64, rng: &mut Rng64) -> CardResult<()> {
    let (w, h) = (size.w(), size.h());
    let paint = Paint::Solid(Rgba8::WHITE.with_alpha(0.15));
    for (x, y) in [
        (60.0 * k, 120.0 * k),
        (w - 80.0 * k, h - 200.0 * k),
        (100.0 * k, h - 150.0 * k),
    ] {
        let tilt = rng.range(0.0, PI);
        s.fill(&ellipse(Point::new(x, y), 20.0 * k, 35.0 * k, tilt), &paint)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/decor/mod.rs"]
mod tests;
