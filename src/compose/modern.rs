use crate::catalog::{ModernScene, ShapeKind};
use crate::compose::helpers::{
    Scatter, diagonal_gradient, fill_canvas, polygon, scatter, segment, shape_path, with_alpha,
};
use crate::foundation::core::{BezPath, CardSize, Point, Rgba8};
use crate::foundation::error::CardResult;
use crate::foundation::math::Rng64;
use crate::surface::{LineStyle, Paint, Surface};

const GRID_SHAPES: [ShapeKind; 4] = [
    ShapeKind::Circle,
    ShapeKind::Square,
    ShapeKind::Triangle,
    ShapeKind::Diamond,
];
const MEMPHIS_SHAPES: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Square, ShapeKind::Triangle];

pub(crate) fn paint(
    s: &mut dyn Surface,
    scene: &ModernScene,
    size: CardSize,
    rng: &mut Rng64,
) -> CardResult<()> {
    match scene {
        ModernScene::Geometric { colors } => {
            fill_canvas(s, &Paint::Solid(Rgba8::WHITE))?;
            tile_grid(s, colors, size, rng)
        }
        ModernScene::Memphis { background, shapes } => {
            fill_canvas(s, &Paint::Solid(*background))?;
            memphis(s, shapes, size, rng)
        }
        ModernScene::MinimalistGold { background, accent } => {
            fill_canvas(s, &Paint::Solid(*background))?;
            gold_rules(s, *accent, size)
        }
        ModernScene::NeonGrid { colors, neon } => {
            fill_canvas(s, &diagonal_gradient(size, colors))?;
            neon_grid(s, neon.first().copied().unwrap_or(Rgba8::WHITE), size)
        }
    }
}

/// One random primitive per 60px cell.
fn tile_grid(
    s: &mut dyn Surface,
    colors: &[Rgba8],
    size: CardSize,
    rng: &mut Rng64,
) -> CardResult<()> {
    let cell = 60.0 * size.scale();
    with_alpha(s, 0.3, |s| {
        let mut x = 0.0;
        while x < size.w() {
            let mut y = 0.0;
            while y < size.h() {
                let color = rng.pick(colors).copied().unwrap_or(Rgba8::WHITE);
                let kind = GRID_SHAPES[rng.index(GRID_SHAPES.len())];
                let center = Point::new(x + cell / 2.0, y + cell / 2.0);
                let extent = if kind == ShapeKind::Circle {
                    cell * 2.0 / 3.0
                } else {
                    cell / 2.0
                };
                s.fill(&shape_path(kind, center, extent, rng), &Paint::Solid(color))?;
                y += cell;
            }
            x += cell;
        }
        Ok(())
    })
}

fn memphis(
    s: &mut dyn Surface,
    shapes: &[Rgba8],
    size: CardSize,
    rng: &mut Rng64,
) -> CardResult<()> {
    let k = size.scale();
    for &color in shapes {
        let one = [color];
        let pass = Scatter {
            count: 1,
            colors: &one,
            size: (50.0 * k, 150.0 * k),
            alpha: 0.8,
            area: size.rect(),
        };
        scatter(s, rng, &pass, |s, rng, p| {
            let kind = MEMPHIS_SHAPES[rng.index(MEMPHIS_SHAPES.len())];
            s.fill(&shape_path(kind, p.at, p.size, rng), &Paint::Solid(p.color))
        })?;
    }
    Ok(())
}

/// Double gold rules near the top and bottom edges, each with a center diamond.
fn gold_rules(s: &mut dyn Surface, accent: Rgba8, size: CardSize) -> CardResult<()> {
    let k = size.scale();
    let (w, h) = (size.w(), size.h());
    let inset = 80.0 * k;
    let paint = Paint::Solid(accent);
    for y in [h * 0.12, h * 0.88] {
        s.stroke(
            &segment(Point::new(inset, y), Point::new(w - inset, y)),
            &paint,
            &LineStyle::solid(2.0 * k),
        )?;
        let y2 = y + if y < h / 2.0 { 8.0 * k } else { -8.0 * k };
        s.stroke(
            &segment(Point::new(inset * 1.5, y2), Point::new(w - inset * 1.5, y2)),
            &paint,
            &LineStyle::solid(k.max(0.5)),
        )?;
        let d = 10.0 * k;
        s.fill(
            &polygon(&[
                Point::new(w / 2.0, y - d),
                Point::new(w / 2.0 + d, y),
                Point::new(w / 2.0, y + d),
                Point::new(w / 2.0 - d, y),
            ]),
            &paint,
        )?;
    }
    Ok(())
}

/// 50px grid, stroked once wide and faint for the glow and once thin.
fn neon_grid(s: &mut dyn Surface, neon: Rgba8, size: CardSize) -> CardResult<()> {
    let k = size.scale();
    let pitch = 50.0 * k;
    let mut grid = BezPath::new();
    let mut x = 0.0;
    while x < size.w() {
        grid.move_to((x, 0.0));
        grid.line_to((x, size.h()));
        x += pitch;
    }
    let mut y = 0.0;
    while y < size.h() {
        grid.move_to((0.0, y));
        grid.line_to((size.w(), y));
        y += pitch;
    }
    let paint = Paint::Solid(neon);
    with_alpha(s, 0.15, |s| s.stroke(&grid, &paint, &LineStyle::solid(4.0 * k)))?;
    with_alpha(s, 0.5, |s| s.stroke(&grid, &paint, &LineStyle::solid(k.max(0.5))))
}
