use crate::catalog::ShapeKind;
use crate::compose::helpers::{
    Scatter, curve, diagonal_gradient, fill_canvas, glow, scatter, segment, shape_path, with_alpha,
};
use crate::foundation::core::{CardSize, Point, Rgba8, Vec2};
use crate::foundation::error::{CardError, CardResult};
use crate::foundation::math::Rng64;
use crate::surface::{LineStyle, Paint, Surface};

const MINIMAL_BORDER: Rgba8 = Rgba8::hex(0xdfe6e9);

pub(crate) fn flat_gradient(
    s: &mut dyn Surface,
    colors: &[Rgba8],
    size: CardSize,
) -> CardResult<()> {
    if colors.is_empty() {
        return Err(CardError::compositing("gradient background needs at least one color"));
    }
    fill_canvas(s, &diagonal_gradient(size, colors))
}

pub(crate) fn plain(
    s: &mut dyn Surface,
    color: Rgba8,
    border: bool,
    size: CardSize,
) -> CardResult<()> {
    fill_canvas(s, &Paint::Solid(color))?;
    if border {
        let k = size.scale();
        let inset = 15.0 * k;
        s.stroke_rect(
            size.rect().inset(-inset),
            &Paint::Solid(MINIMAL_BORDER),
            &LineStyle::solid(3.0 * k),
        )?;
    }
    Ok(())
}

pub(crate) fn watercolor(
    s: &mut dyn Surface,
    colors: &[Rgba8],
    size: CardSize,
    rng: &mut Rng64,
) -> CardResult<()> {
    let k = size.scale();
    fill_canvas(s, &Paint::Solid(Rgba8::WHITE))?;
    with_alpha(s, 0.15, |s| {
        for &color in colors {
            let at = Point::new(rng.range(0.0, size.w()), rng.range(0.0, size.h()));
            let radius = rng.range(200.0, 500.0) * k;
            fill_canvas(s, &glow(at, radius, color))?;
        }
        Ok(())
    })
}

pub(crate) fn oil_painting(
    s: &mut dyn Surface,
    base: Rgba8,
    accents: &[Rgba8],
    size: CardSize,
    rng: &mut Rng64,
) -> CardResult<()> {
    let k = size.scale();
    fill_canvas(s, &Paint::Solid(base))?;
    with_alpha(s, 0.6, |s| {
        for &color in accents {
            let style = LineStyle::solid(rng.range(15.0, 35.0) * k);
            for _ in 0..20 {
                let a = Point::new(rng.range(0.0, size.w()), rng.range(0.0, size.h()));
                let b = a + Vec2::new(rng.range(-100.0, 100.0) * k, rng.range(-100.0, 100.0) * k);
                let bend = Vec2::new(rng.range(-25.0, 25.0) * k, rng.range(-25.0, 25.0) * k);
                let control = a.midpoint(b) + bend;
                s.stroke(&curve(a, control, b), &Paint::Solid(color), &style)?;
            }
        }
        Ok(())
    })
}

pub(crate) fn sketch(
    s: &mut dyn Surface,
    paper: Rgba8,
    ink: Rgba8,
    size: CardSize,
    rng: &mut Rng64,
) -> CardResult<()> {
    let k = size.scale();
    fill_canvas(s, &Paint::Solid(paper))?;
    with_alpha(s, 0.1, |s| {
        for _ in 0..100 {
            let style = LineStyle::solid(rng.range(0.5, 2.0) * k.max(0.5));
            let a = Point::new(rng.range(0.0, size.w()), rng.range(0.0, size.h()));
            let b = Point::new(rng.range(0.0, size.w()), rng.range(0.0, size.h()));
            s.stroke(&segment(a, b), &Paint::Solid(ink), &style)?;
        }
        Ok(())
    })
}

pub(crate) fn abstract_shapes(
    s: &mut dyn Surface,
    colors: &[Rgba8],
    shapes: &[ShapeKind],
    size: CardSize,
    rng: &mut Rng64,
) -> CardResult<()> {
    let k = size.scale();
    fill_canvas(s, &Paint::Solid(Rgba8::WHITE))?;
    for &color in colors {
        let one = [color];
        let pass = Scatter {
            count: 1,
            colors: &one,
            size: (100.0 * k, 300.0 * k),
            alpha: 0.7,
            area: size.rect(),
        };
        scatter(s, rng, &pass, |s, rng, p| {
            let kind = rng.pick(shapes).copied().unwrap_or(ShapeKind::Circle);
            s.fill(&shape_path(kind, p.at, p.size, rng), &Paint::Solid(p.color))
        })?;
    }
    Ok(())
}
