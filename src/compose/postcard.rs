use std::f64::consts::PI;

use crate::catalog::{Landmark, PostcardScene};
use crate::compose::helpers::{circle, diagonal_gradient, ellipse, fill_canvas, polygon};
use crate::foundation::core::{BezPath, CardSize, Point, Rect, Rgba8};
use crate::foundation::error::CardResult;
use crate::surface::{LineStyle, Paint, Surface};

const FRAME: Rgba8 = Rgba8::hex(0x8B7355);
const SNOW: Rgba8 = Rgba8::rgba(255, 255, 255, 128);
const PALM_LEAF: Rgba8 = Rgba8::rgba(0, 128, 0, 102);
const BEACH_SUN: Rgba8 = Rgba8::rgba(255, 215, 0, 128);

/// `(left, width, height)` as fractions of the canvas.
const SKYLINE: [(f64, f64, f64); 8] = [
    (0.10, 0.08, 0.50),
    (0.20, 0.06, 0.60),
    (0.30, 0.10, 0.70),
    (0.45, 0.05, 0.80),
    (0.55, 0.08, 0.65),
    (0.65, 0.07, 0.55),
    (0.75, 0.09, 0.60),
    (0.85, 0.06, 0.50),
];

pub(crate) fn paint(s: &mut dyn Surface, scene: &PostcardScene, size: CardSize) -> CardResult<()> {
    let k = size.scale();
    fill_canvas(s, &diagonal_gradient(size, &scene.colors))?;
    let ink = Paint::Solid(scene.ink);
    match scene.landmark {
        Landmark::EiffelTower => {
            s.stroke(&eiffel_tower(size), &ink, &LineStyle::solid(3.0 * k))?;
        }
        Landmark::MountFuji => {
            let (w, h) = (size.w(), size.h());
            s.fill(
                &polygon(&[
                    Point::new(w * 0.2, h * 0.8),
                    Point::new(w * 0.5, h * 0.4),
                    Point::new(w * 0.8, h * 0.8),
                ]),
                &ink,
            )?;
            s.fill(
                &polygon(&[
                    Point::new(w * 0.4, h * 0.5),
                    Point::new(w * 0.5, h * 0.4),
                    Point::new(w * 0.6, h * 0.5),
                ]),
                &Paint::Solid(SNOW),
            )?;
        }
        Landmark::Skyline => {
            let (w, h) = (size.w(), size.h());
            for (x, bw, bh) in SKYLINE {
                s.fill_rect(Rect::new(w * x, h * (1.0 - bh), w * (x + bw), h), &ink)?;
            }
        }
        Landmark::PalmBeach => palm_beach(s, &ink, size)?,
    }
    s.stroke_rect(
        size.rect().inset(-20.0 * k),
        &Paint::Solid(FRAME),
        &LineStyle::solid(10.0 * k),
    )
}

/// Two legs meeting at the top with crossbars where the legs are spread.
fn eiffel_tower(size: CardSize) -> BezPath {
    let k = size.scale();
    let (cx, h) = (size.w() / 2.0, size.h());
    let (top, base) = (h * 0.2, h * 0.8);
    let spread = |y: f64| 100.0 * k * (y - top) / (base - top);

    let mut path = BezPath::new();
    for side in [-1.0, 1.0] {
        path.move_to((cx, top));
        path.line_to((cx + side * spread(base), base));
    }
    for y in [h * 0.5, h * 0.68] {
        let half = spread(y) + 10.0 * k;
        path.move_to((cx - half, y));
        path.line_to((cx + half, y));
    }
    path
}

fn palm_beach(s: &mut dyn Surface, trunk: &Paint, size: CardSize) -> CardResult<()> {
    let k = size.scale();
    let (w, h) = (size.w(), size.h());
    s.fill_rect(Rect::new(w * 0.8, h * 0.5, w * 0.8 + 30.0 * k, h * 0.8), trunk)?;
    for i in 0..5 {
        let angle = f64::from(i) / 5.0 * PI - PI / 2.0;
        let c = Point::new(
            w * 0.8 + 15.0 * k + angle.cos() * 50.0 * k,
            h * 0.5 + angle.sin() * 30.0 * k,
        );
        s.fill(&ellipse(c, 60.0 * k, 20.0 * k, angle), &Paint::Solid(PALM_LEAF))?;
    }
    s.fill(
        &circle(Point::new(w * 0.2, h * 0.2), 60.0 * k),
        &Paint::Solid(BEACH_SUN),
    )
}
