use std::f64::consts::TAU;

use crate::catalog::SeasonalScene;
use crate::compose::helpers::{
    Edge, Scatter, Wave, circle, diagonal_gradient, ellipse, fill_canvas, petals, scatter,
    snowflake, thin_line, wave_path, with_alpha,
};
use crate::foundation::core::{CardSize, Point, Rgba8};
use crate::foundation::error::CardResult;
use crate::foundation::math::Rng64;
use crate::surface::{Paint, Surface};

const AUTUMN_LEAVES: [Rgba8; 4] = [
    Rgba8::hex(0xD2691E),
    Rgba8::hex(0xFF8C00),
    Rgba8::hex(0xFF7F50),
    Rgba8::hex(0x8B4513),
];
const BLOSSOMS: [Rgba8; 3] = [
    Rgba8::hex(0xFFB6C1),
    Rgba8::hex(0xFFC0CB),
    Rgba8::hex(0xFF69B4),
];
const BLOSSOM_CENTER: Rgba8 = Rgba8::hex(0xFFD700);

pub(crate) fn paint(
    s: &mut dyn Surface,
    scene: &SeasonalScene,
    size: CardSize,
    rng: &mut Rng64,
) -> CardResult<()> {
    let k = size.scale();
    match scene {
        SeasonalScene::Autumn { colors, leaves } => {
            fill_canvas(s, &diagonal_gradient(size, colors))?;
            if !*leaves {
                return Ok(());
            }
            let pass = Scatter {
                count: 30,
                colors: &AUTUMN_LEAVES,
                size: (20.0 * k, 50.0 * k),
                alpha: 0.7,
                area: size.rect(),
            };
            scatter(s, rng, &pass, |s, rng, p| {
                let turn = rng.range(0.0, TAU);
                s.fill(
                    &ellipse(p.at, p.size / 2.0, p.size, turn),
                    &Paint::Solid(p.color),
                )
            })
        }
        SeasonalScene::Winter {
            background,
            colors,
            snowflakes,
        } => {
            fill_canvas(s, &Paint::Solid(*background))?;
            for (i, &color) in colors.iter().enumerate() {
                let layer = i as f64;
                let drift = Wave::sine(
                    size.h() * (0.8 + 0.06 * layer),
                    15.0 * k,
                    0.005 / k,
                    layer * 1.7,
                    20.0 * k,
                );
                with_alpha(s, 0.6, |s| {
                    s.fill(&wave_path(&drift, size, Edge::Bottom), &Paint::Solid(color))
                })?;
            }
            if *snowflakes {
                let style = thin_line(k);
                for _ in 0..100 {
                    let at = Point::new(rng.range(0.0, size.w()), rng.range(0.0, size.h()));
                    let r = rng.range(4.0, 12.0) * k;
                    let alpha = rng.range(0.4, 1.0);
                    with_alpha(s, alpha, |s| {
                        s.stroke(&snowflake(at, r), &Paint::Solid(Rgba8::WHITE), &style)
                    })?;
                }
            }
            Ok(())
        }
        SeasonalScene::Spring { colors, blossoms } => {
            fill_canvas(s, &diagonal_gradient(size, colors))?;
            if !*blossoms {
                return Ok(());
            }
            let pass = Scatter {
                count: 40,
                colors: &BLOSSOMS,
                size: (15.0 * k, 35.0 * k),
                alpha: 0.6,
                area: size.rect(),
            };
            scatter(s, rng, &pass, |s, _, p| {
                let paint = Paint::Solid(p.color);
                for petal in petals(p.at, 5, p.size) {
                    s.fill(&petal, &paint)?;
                }
                s.fill(&circle(p.at, p.size / 6.0), &Paint::Solid(BLOSSOM_CENTER))
            })
        }
    }
}
