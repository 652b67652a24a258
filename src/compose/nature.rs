use std::f64::consts::PI;

use crate::catalog::NatureScene;
use crate::compose::helpers::{
    Edge, Wave, circle, fill_canvas, polygon, segment, vertical_gradient, wave_path, with_alpha,
};
use crate::foundation::core::{BezPath, CardSize, Point, Rect, Rgba8};
use crate::foundation::error::CardResult;
use crate::foundation::math::Rng64;
use crate::surface::{GradientStop, LineStyle, Paint, Surface};

const SKY: Rgba8 = Rgba8::hex(0x87CEEB);
const SKY_HAZE: Rgba8 = Rgba8::hex(0x98D8C8);
const SKY_PEACH: Rgba8 = Rgba8::hex(0xFFE5B4);
const RIVER_BED: Rgba8 = Rgba8::hex(0x4682B4);
const SUN: Rgba8 = Rgba8::hex(0xFFD700);
const DUNE: Rgba8 = Rgba8::hex(0xCD853F);

pub(crate) fn paint(
    s: &mut dyn Surface,
    scene: &NatureScene,
    size: CardSize,
    rng: &mut Rng64,
) -> CardResult<()> {
    match scene {
        NatureScene::Forest { colors, misty } => forest(s, colors, *misty, size, rng),
        NatureScene::River { colors, flow } => river(s, colors, *flow, size),
        NatureScene::Mountains { layers, snow_caps } => mountains(s, layers, *snow_caps, size, rng),
        NatureScene::Sunset {
            colors,
            sun,
            silhouette,
        } => sunset(s, colors, *sun, *silhouette, size),
        NatureScene::Ocean { waves, horizon } => ocean(s, waves, *horizon, size),
        NatureScene::Desert { colors, dunes } => desert(s, colors, *dunes, size),
    }
}

fn sky(s: &mut dyn Surface, to_y: f64, colors: &[Rgba8]) -> CardResult<()> {
    fill_canvas(s, &vertical_gradient(0.0, to_y, colors))
}

fn forest(
    s: &mut dyn Surface,
    colors: &[Rgba8],
    misty: bool,
    size: CardSize,
    rng: &mut Rng64,
) -> CardResult<()> {
    let k = size.scale();
    let (w, h) = (size.w(), size.h());
    sky(s, h / 2.0, &[SKY, SKY_HAZE])?;

    for (i, &color) in colors.iter().enumerate() {
        let layer = i as f64;
        let ground = Wave::sine(h * (0.72 + 0.06 * layer), 18.0 * k, 0.004 / k, layer, 20.0 * k);
        let alpha = (0.8 - 0.1 * layer).max(0.2);
        with_alpha(s, alpha, |s| {
            let paint = Paint::Solid(color);
            s.fill(&wave_path(&ground, size, Edge::Bottom), &paint)?;
            let mut x = -50.0 * k;
            while x < w + 50.0 * k {
                let root = ground.y_at(x.clamp(0.0, w)) + 10.0 * k;
                let tree = rng.range(150.0, 350.0) * k;
                s.fill(
                    &polygon(&[
                        Point::new(x, root),
                        Point::new(x - 20.0 * k, root - tree),
                        Point::new(x, root - tree - 50.0 * k),
                        Point::new(x + 20.0 * k, root - tree),
                    ]),
                    &paint,
                )?;
                x += rng.range(40.0, 100.0) * k;
            }
            Ok(())
        })?;
    }

    if misty {
        with_alpha(s, 0.3, |s| {
            s.fill_rect(Rect::new(0.0, h * 0.7, w, h), &Paint::Solid(Rgba8::WHITE))
        })?;
    }
    Ok(())
}

/// Valley gradient with a river running top to bottom.
///
/// The river is vertical, so its course is a `Wave` sampled along y with the offset read as x.
/// `wave_path` only closes horizontal waves against the top or bottom edge, so the band is
/// built here from the transposed samples, widening toward the viewer.
fn river(s: &mut dyn Surface, colors: &[Rgba8], flow: bool, size: CardSize) -> CardResult<()> {
    let k = size.scale();
    let (w, h) = (size.w(), size.h());
    fill_canvas(
        s,
        &Paint::Linear {
            start: Point::ZERO,
            end: Point::new(0.0, h),
            stops: vec![
                GradientStop {
                    offset: 0.0,
                    color: SKY,
                },
                GradientStop {
                    offset: 0.4,
                    color: SKY_HAZE,
                },
                GradientStop {
                    offset: 1.0,
                    color: RIVER_BED,
                },
            ],
        },
    )?;
    if !flow || colors.is_empty() {
        return Ok(());
    }

    let river_w = w * 0.4;
    let left = (w - river_w) / 2.0;
    let course = Wave::sine(w / 2.0, 30.0 * k, 0.01 / k, 0.0, 50.0 * k);
    let half_width = |y: f64| river_w / 2.0 * (0.12 + 0.88 * (y / h).clamp(0.0, 1.0));
    let center = course.samples(h);
    let mut edge: Vec<Point> = center
        .iter()
        .map(|p| Point::new(p.y + half_width(p.x), p.x))
        .collect();
    edge.extend(
        center
            .iter()
            .rev()
            .map(|p| Point::new(p.y - half_width(p.x), p.x)),
    );
    let paint = Paint::linear_even(Point::new(left, 0.0), Point::new(left + river_w, h), colors);
    with_alpha(s, 0.7, |s| s.fill(&polygon(&edge), &paint))
}

fn mountains(
    s: &mut dyn Surface,
    layers: &[Rgba8],
    snow_caps: bool,
    size: CardSize,
    rng: &mut Rng64,
) -> CardResult<()> {
    let k = size.scale();
    let (w, h) = (size.w(), size.h());
    sky(s, h * 0.6, &[SKY, SKY_PEACH])?;

    for (i, &color) in layers.iter().enumerate() {
        let layer = i as f64;
        let peaks = 3.0 + rng.index(3) as f64;
        let ridge = Wave::sine(
            h * (0.3 + 0.1 * layer) + 40.0 * k,
            rng.range(60.0, 100.0) * k,
            peaks * PI / w,
            rng.range(0.0, PI),
            8.0 * k,
        )
        .ridge();
        s.fill(&wave_path(&ridge, size, Edge::Bottom), &Paint::Solid(color))?;

        if snow_caps && i < 2 {
            let cap = snow_cap(&ridge, w, 45.0 * k);
            with_alpha(s, 0.9, |s| s.fill(&cap, &Paint::Solid(Rgba8::WHITE)))?;
        }
    }
    Ok(())
}

/// Jagged white cap hugging the highest peak of `ridge`.
fn snow_cap(ridge: &Wave, width: f64, half: f64) -> BezPath {
    let peak = ridge
        .samples(width)
        .into_iter()
        .fold(Point::new(width / 2.0, f64::INFINITY), |best, p| {
            if p.y < best.y { p } else { best }
        });
    let left = Point::new(peak.x - half, ridge.y_at(peak.x - half));
    let right = Point::new(peak.x + half, ridge.y_at(peak.x + half));
    let drop = ((left.y + right.y) / 2.0 - peak.y).max(0.0);
    polygon(&[
        left,
        peak,
        right,
        Point::new(peak.x + half * 0.4, peak.y + drop * 0.7),
        Point::new(peak.x, peak.y + drop * 0.45),
        Point::new(peak.x - half * 0.4, peak.y + drop * 0.7),
    ])
}

fn sunset(
    s: &mut dyn Surface,
    colors: &[Rgba8],
    sun: bool,
    silhouette: Rgba8,
    size: CardSize,
) -> CardResult<()> {
    let k = size.scale();
    let (w, h) = (size.w(), size.h());
    sky(s, h, colors)?;

    if sun {
        let center = Point::new(w / 2.0, h * 0.6);
        let r = 80.0 * k;
        with_alpha(s, 0.8, |s| s.fill(&circle(center, r), &Paint::Solid(SUN)))?;
        fill_canvas(
            s,
            &Paint::radial_even(center, r, 2.0 * r, &[SUN.with_alpha(0.3), SUN.with_alpha(0.0)]),
        )?;
    }

    let hills = Wave::sine(h * 0.82, 25.0 * k, 0.006 / k, 1.3, 20.0 * k);
    s.fill(&wave_path(&hills, size, Edge::Bottom), &Paint::Solid(silhouette))
}

fn ocean(s: &mut dyn Surface, waves: &[Rgba8], horizon: bool, size: CardSize) -> CardResult<()> {
    let k = size.scale();
    let (w, h) = (size.w(), size.h());
    sky(s, h / 2.0, &[SKY, SKY_HAZE])?;

    for (i, &color) in waves.iter().enumerate() {
        let layer = i as f64;
        let wave = Wave::sine(h / 2.0 + 50.0 * k * layer, 20.0 * k, 0.01 / k, layer, 20.0 * k);
        s.fill(&wave_path(&wave, size, Edge::Bottom), &Paint::Solid(color))?;
    }

    if horizon {
        s.stroke(
            &segment(Point::new(0.0, h / 2.0), Point::new(w, h / 2.0)),
            &Paint::Solid(SUN),
            &LineStyle::solid(2.0 * k),
        )?;
    }
    Ok(())
}

fn desert(s: &mut dyn Surface, colors: &[Rgba8], dunes: bool, size: CardSize) -> CardResult<()> {
    let k = size.scale();
    let h = size.h();
    sky(s, h, colors)?;
    if !dunes {
        return Ok(());
    }
    let shade = colors.last().copied().unwrap_or(DUNE);
    with_alpha(s, 0.8, |s| {
        for i in 0..3 {
            let layer = f64::from(i);
            let dune = Wave::sine(h * (0.6 + 0.15 * layer), 40.0 * k, 0.005 / k, layer, 50.0 * k);
            let color = DUNE.lerp(shade, layer * 0.25);
            s.fill(&wave_path(&dune, size, Edge::Bottom), &Paint::Solid(color))?;
        }
        Ok(())
    })
}
