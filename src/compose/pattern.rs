use std::f64::consts::{PI, TAU};

use crate::catalog::PatternScene;
use crate::compose::helpers::{
    Scatter, circle, diagonal_gradient, ellipse, fill_canvas, petals, rotate_about, scatter,
    segment, with_alpha,
};
use crate::foundation::core::{CardSize, Point, Rgba8, Vec2};
use crate::foundation::error::CardResult;
use crate::foundation::math::Rng64;
use crate::surface::{LineStyle, Paint, Surface};

const FLOWER_CENTER: Rgba8 = Rgba8::hex(0xFFD700);
const LEAF_GREENS: [Rgba8; 4] = [
    Rgba8::hex(0x228B22),
    Rgba8::hex(0x3CB371),
    Rgba8::hex(0x2E8B57),
    Rgba8::hex(0x006400),
];
const LEAF_VEIN: Rgba8 = Rgba8::rgba(0, 100, 0, 77);

pub(crate) fn paint(
    s: &mut dyn Surface,
    scene: &PatternScene,
    size: CardSize,
    rng: &mut Rng64,
) -> CardResult<()> {
    let k = size.scale();
    match scene {
        PatternScene::Butterflies { background, colors } => {
            fill_canvas(s, &Paint::Solid(*background))?;
            let pass = Scatter {
                count: 15,
                colors,
                size: (30.0 * k, 70.0 * k),
                alpha: 0.6,
                area: size.rect(),
            };
            scatter(s, rng, &pass, |s, _, p| {
                let half = p.size / 2.0;
                let paint = Paint::Solid(p.color);
                s.fill(
                    &ellipse(p.at - Vec2::new(half, 0.0), half, p.size / 3.0, PI / 6.0),
                    &paint,
                )?;
                s.fill(
                    &ellipse(p.at + Vec2::new(half, 0.0), half, p.size / 3.0, -PI / 6.0),
                    &paint,
                )
            })
        }
        PatternScene::Flowers { background, colors } => {
            fill_canvas(s, &Paint::Solid(*background))?;
            let pass = Scatter {
                count: 20,
                colors,
                size: (30.0 * k, 70.0 * k),
                alpha: 0.5,
                area: size.rect(),
            };
            scatter(s, rng, &pass, |s, rng, p| {
                let n = 5 + rng.index(3);
                let paint = Paint::Solid(p.color);
                for petal in petals(p.at, n, p.size) {
                    s.fill(&petal, &paint)?;
                }
                with_alpha(s, 0.8, |s| {
                    s.fill(&circle(p.at, p.size / 5.0), &Paint::Solid(FLOWER_CENTER))
                })
            })
        }
        PatternScene::Leaves { colors } => {
            fill_canvas(s, &diagonal_gradient(size, colors))?;
            let pass = Scatter {
                count: 25,
                colors: &LEAF_GREENS,
                size: (30.0 * k, 80.0 * k),
                alpha: 0.4,
                area: size.rect(),
            };
            let vein = LineStyle::solid(k.max(0.5));
            scatter(s, rng, &pass, |s, rng, p| {
                let turn = rng.range(0.0, TAU);
                s.save();
                s.concat(rotate_about(p.at, turn));
                let out = leaf(s, p.at, p.size, p.color, &vein);
                s.restore();
                out
            })
        }
    }
}

fn leaf(
    s: &mut dyn Surface,
    at: Point,
    size: f64,
    color: Rgba8,
    vein: &LineStyle,
) -> CardResult<()> {
    s.fill(&ellipse(at, size / 3.0, size, 0.0), &Paint::Solid(color))?;
    s.stroke(
        &segment(at - Vec2::new(0.0, size), at + Vec2::new(0.0, size)),
        &Paint::Solid(LEAF_VEIN),
        vein,
    )
}
