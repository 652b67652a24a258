use crate::catalog::SpaceScene;
use crate::compose::helpers::{
    Edge, Wave, circle, diagonal_gradient, ellipse, fill_canvas, glow, star_speckle,
    vertical_gradient, wave_path, with_alpha,
};
use crate::foundation::core::{CardSize, Point, Rect, Rgba8};
use crate::foundation::error::CardResult;
use crate::foundation::math::Rng64;
use crate::surface::{LineStyle, Paint, Surface, even_stops};

const NIGHT: [Rgba8; 2] = [Rgba8::hex(0x000428), Rgba8::hex(0x004e92)];

pub(crate) fn paint(
    s: &mut dyn Surface,
    scene: &SpaceScene,
    size: CardSize,
    rng: &mut Rng64,
) -> CardResult<()> {
    let k = size.scale();
    match scene {
        SpaceScene::Galaxy {
            background,
            stars,
            nebula,
        } => {
            fill_canvas(s, &Paint::Solid(*background))?;
            if *stars {
                star_speckle(s, rng, 200, size.rect(), 2.0 * k, (0.3, 1.0))?;
            }
            nebula_glow(s, nebula, size)
        }
        SpaceScene::Cosmos { colors, planets } => {
            fill_canvas(s, &diagonal_gradient(size, colors))?;
            star_speckle(s, rng, 120, size.rect(), 1.5 * k, (0.2, 0.8))?;
            if *planets {
                paint_planets(s, colors, size, rng)?;
            }
            Ok(())
        }
        SpaceScene::Aurora { colors } => aurora(s, colors, size, rng),
    }
}

/// Low-opacity radial glows stepping diagonally across the canvas.
fn nebula_glow(s: &mut dyn Surface, nebula: &[Rgba8], size: CardSize) -> CardResult<()> {
    let k = size.scale();
    with_alpha(s, 0.2, |s| {
        for (i, &color) in nebula.iter().enumerate() {
            let t = 0.3 + 0.2 * i as f64;
            let center = Point::new(size.w() * t, size.h() * t);
            fill_canvas(s, &glow(center, 300.0 * k, color))?;
        }
        Ok(())
    })
}

fn paint_planets(
    s: &mut dyn Surface,
    colors: &[Rgba8],
    size: CardSize,
    rng: &mut Rng64,
) -> CardResult<()> {
    let k = size.scale();
    let ring = LineStyle::solid(3.0 * k);
    for i in 0..3 {
        let base = colors
            .get(i % colors.len().max(1))
            .copied()
            .unwrap_or(Rgba8::WHITE)
            .lighten(0.35);
        let r = rng.range(30.0, 90.0) * k;
        let center = Point::new(rng.range(r, size.w() - r), rng.range(r, size.h() * 0.5));
        let body = Paint::Radial {
            start_center: center - kurbo::Vec2::new(r * 0.3, r * 0.3),
            start_radius: 0.0,
            end_center: center,
            end_radius: r,
            stops: even_stops(&[base.lighten(0.6), base, base.lerp(Rgba8::BLACK, 0.4)]),
        };
        s.fill(&circle(center, r), &body)?;
        if i % 2 == 0 {
            let tilt = rng.range(-0.5, 0.5);
            s.stroke(
                &ellipse(center, r * 1.8, r * 0.45, tilt),
                &Paint::Solid(Rgba8::WHITE.with_alpha(0.4)),
                &ring,
            )?;
        }
    }
    Ok(())
}

/// Night gradient, translucent curtains hanging from the top edge, then a sparse star field.
fn aurora(
    s: &mut dyn Surface,
    colors: &[Rgba8],
    size: CardSize,
    rng: &mut Rng64,
) -> CardResult<()> {
    let k = size.scale();
    let (w, h) = (size.w(), size.h());
    fill_canvas(s, &vertical_gradient(0.0, h, &NIGHT))?;

    with_alpha(s, 0.3, |s| {
        for (i, &color) in colors.iter().enumerate() {
            let band = Paint::linear_even(
                Point::ZERO,
                Point::new(w, h / 2.0),
                &[color.with_alpha(0.0), color, color.with_alpha(0.0)],
            );
            let curtain = Wave::sine(h * 0.3, 100.0 * k, 0.01 / k, i as f64, 30.0 * k);
            s.fill(&wave_path(&curtain, size, Edge::Top), &band)?;
        }
        Ok(())
    })?;

    star_speckle(s, rng, 100, Rect::new(0.0, 0.0, w, h / 2.0), 2.0 * k, (0.5, 1.0))
}
