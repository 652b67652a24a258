use std::f64::consts::PI;

use crate::compose::helpers::{Scatter, circle, fill_canvas, scatter, segment, with_alpha};
use crate::foundation::core::{CardSize, Point, Rect, Rgba8};
use crate::foundation::error::CardResult;
use crate::foundation::math::Rng64;
use crate::surface::{LineStyle, Paint, Surface};

const SPECKLE: [Rgba8; 2] = [Rgba8::hex(0x8B7355), Rgba8::hex(0xA0522D)];
const POSTCARD_BORDER: Rgba8 = Rgba8::hex(0x8B4513);
const STAMP_BORDER: Rgba8 = Rgba8::hex(0xDC143C);
const PHOTO_AREA: Rgba8 = Rgba8::hex(0xF5F5F5);
const SHADOW: Rgba8 = Rgba8::rgba(0, 0, 0, 51);

/// Ten translucent circles per palette color over a pale wash of the first color.
pub(crate) fn retro_pattern(
    s: &mut dyn Surface,
    colors: &[Rgba8],
    size: CardSize,
    rng: &mut Rng64,
) -> CardResult<()> {
    let k = size.scale();
    let wash = colors.first().map_or(Rgba8::WHITE, |c| c.lighten(0.85));
    fill_canvas(s, &Paint::Solid(wash))?;
    for &color in colors {
        let one = [color];
        let pass = Scatter {
            count: 10,
            colors: &one,
            size: (30.0 * k, 100.0 * k),
            alpha: 0.7,
            area: size.rect(),
        };
        scatter(s, rng, &pass, |s, _, p| {
            s.fill(&circle(p.at, p.size), &Paint::Solid(p.color))
        })?;
    }
    Ok(())
}

/// Row of five gold ray fans below the top edge.
pub(crate) fn art_deco(
    s: &mut dyn Surface,
    background: Rgba8,
    gold: Rgba8,
    size: CardSize,
) -> CardResult<()> {
    let k = size.scale();
    fill_canvas(s, &Paint::Solid(background))?;
    let fans = 5;
    let pitch = size.w() / f64::from(fans);
    let radius = 100.0 * k;
    let style = LineStyle::solid(2.0 * k);
    with_alpha(s, 0.6, |s| {
        for i in 0..fans {
            let center = Point::new(pitch * f64::from(i) + pitch / 2.0, size.h() * 0.2);
            for ray in 0..8 {
                let angle = f64::from(ray) * PI / 8.0;
                let tip = center + kurbo::Vec2::from_angle(angle) * radius;
                s.stroke(&segment(center, tip), &Paint::Solid(gold), &style)?;
            }
        }
        Ok(())
    })
}

/// Speckled paper, dashed border and an optional stamp box.
pub(crate) fn vintage_postcard(
    s: &mut dyn Surface,
    paper: Rgba8,
    stamp: bool,
    size: CardSize,
    rng: &mut Rng64,
) -> CardResult<()> {
    let k = size.scale();
    fill_canvas(s, &Paint::Solid(paper))?;
    let dot = 2.0 * k.max(0.5);
    with_alpha(s, 0.1, |s| {
        for _ in 0..1000 {
            let x = rng.range(0.0, size.w());
            let y = rng.range(0.0, size.h());
            let color = if rng.next_f64() > 0.5 { SPECKLE[0] } else { SPECKLE[1] };
            s.fill_rect(Rect::new(x, y, x + dot, y + dot), &Paint::Solid(color))?;
        }
        Ok(())
    })?;

    s.stroke_rect(
        size.rect().inset(-30.0 * k),
        &Paint::Solid(POSTCARD_BORDER),
        &LineStyle::dashed(8.0 * k, &[20.0 * k, 10.0 * k]),
    )?;

    if stamp {
        let x0 = size.w() - 150.0 * k;
        let stamp = Rect::new(x0, 50.0 * k, x0 + 100.0 * k, 170.0 * k);
        s.fill_rect(stamp, &Paint::Solid(Rgba8::WHITE))?;
        s.stroke_rect(stamp, &Paint::Solid(STAMP_BORDER), &LineStyle::solid(3.0 * k))?;
    }
    Ok(())
}

/// Instant-photo frame: paper, recessed photo area, offset shadow and the white print.
pub(crate) fn polaroid(s: &mut dyn Surface, paper: Rgba8, size: CardSize) -> CardResult<()> {
    let k = size.scale();
    let (w, h) = (size.w(), size.h());
    fill_canvas(s, &Paint::Solid(paper))?;
    s.fill_rect(
        Rect::new(50.0 * k, 50.0 * k, w - 50.0 * k, h - 150.0 * k),
        &Paint::Solid(PHOTO_AREA),
    )?;
    let print = Rect::new(40.0 * k, 40.0 * k, w - 40.0 * k, h - 140.0 * k);
    s.fill_rect(print + kurbo::Vec2::new(5.0 * k, 5.0 * k), &Paint::Solid(SHADOW))?;
    s.fill_rect(print, &Paint::Solid(Rgba8::WHITE))
}
