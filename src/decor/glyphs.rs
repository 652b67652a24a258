use std::f64::consts::{FRAC_PI_2, PI};

use crate::compose::helpers::{circle, ellipse, polygon, segment};
use crate::foundation::core::{Affine, BezPath, Point, Rgba8};
use crate::foundation::error::CardResult;
use crate::surface::{LineStyle, Paint, Surface};

/// Occasion icon drawn above the message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Glyph {
    /// Birthday cake with a candle.
    Cake,
    /// Heart.
    Heart,
    /// Folded hands.
    FoldedHands,
    /// Party popper.
    PartyPopper,
    /// Graduation cap.
    Mortarboard,
    /// Holiday tree.
    Tree,
    /// Four-point sparkle, used for every other occasion.
    Sparkle,
}

impl Glyph {
    /// Glyph for an occasion tag; unknown tags get [`Glyph::Sparkle`].
    pub fn for_occasion(occasion: &str) -> Self {
        match occasion.trim().to_ascii_lowercase().as_str() {
            "birthday" => Self::Cake,
            "love" => Self::Heart,
            "thanks" => Self::FoldedHands,
            "congrats" => Self::PartyPopper,
            "graduation" => Self::Mortarboard,
            "holiday" => Self::Tree,
            _ => Self::Sparkle,
        }
    }
}

fn solid(hex: u32) -> Paint {
    Paint::Solid(Rgba8::hex(hex))
}

fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> BezPath {
    polygon(&[
        Point::new(x0, y0),
        Point::new(x1, y0),
        Point::new(x1, y1),
        Point::new(x0, y1),
    ])
}

/// Draw `glyph` centered at `center` inside a square of side `extent`.
///
/// Glyph geometry is authored in a unit box spanning `[-1, 1]` on both axes.
pub(crate) fn paint_glyph(
    s: &mut dyn Surface,
    glyph: Glyph,
    center: Point,
    extent: f64,
) -> CardResult<()> {
    s.save();
    s.concat(Affine::translate(center.to_vec2()) * Affine::scale(extent / 2.0));
    let out = match glyph {
        Glyph::Cake => cake(s),
        Glyph::Heart => heart(s),
        Glyph::FoldedHands => folded_hands(s),
        Glyph::PartyPopper => party_popper(s),
        Glyph::Mortarboard => mortarboard(s),
        Glyph::Tree => tree(s),
        Glyph::Sparkle => sparkle(s),
    };
    s.restore();
    out
}

fn cake(s: &mut dyn Surface) -> CardResult<()> {
    s.fill(&rect(-0.8, 0.0, 0.8, 0.9), &solid(0xF8BBD0))?;
    s.fill(&rect(-0.8, -0.1, 0.8, 0.15), &solid(0xFFFFFF))?;
    for x in [-0.5, 0.0, 0.5] {
        s.fill(&circle(Point::new(x, 0.15), 0.12), &solid(0xFFFFFF))?;
    }
    s.fill(&rect(-0.08, -0.6, 0.08, -0.1), &solid(0x64B5F6))?;
    s.fill(&ellipse(Point::new(0.0, -0.75), 0.1, 0.17, 0.0), &solid(0xFFB300))
}

fn heart(s: &mut dyn Surface) -> CardResult<()> {
    let mut p = BezPath::new();
    p.move_to((0.0, 0.9));
    p.curve_to((-0.3, 0.6), (-1.0, 0.2), (-0.95, -0.3));
    p.curve_to((-0.9, -0.85), (-0.2, -0.95), (0.0, -0.45));
    p.curve_to((0.2, -0.95), (0.9, -0.85), (0.95, -0.3));
    p.curve_to((1.0, 0.2), (0.3, 0.6), (0.0, 0.9));
    p.close_path();
    s.fill(&p, &solid(0xE53935))
}

fn folded_hands(s: &mut dyn Surface) -> CardResult<()> {
    let skin = solid(0xFFCC80);
    for side in [-1.0, 1.0] {
        s.fill(
            &ellipse(Point::new(side * 0.22, 0.0), 0.25, 0.85, -side * 0.18),
            &skin,
        )?;
    }
    s.stroke(
        &segment(Point::new(0.0, -0.75), Point::new(0.0, 0.8)),
        &solid(0xE0A060),
        &LineStyle::solid(0.05),
    )
}

fn party_popper(s: &mut dyn Surface) -> CardResult<()> {
    s.fill(
        &polygon(&[
            Point::new(-0.9, 0.9),
            Point::new(-0.55, -0.2),
            Point::new(0.2, 0.55),
        ]),
        &solid(0xFFB300),
    )?;
    let bits = [
        (0.1, -0.6, 0xE91E63),
        (0.55, -0.35, 0x42A5F5),
        (0.7, 0.1, 0x66BB6A),
        (0.3, -0.1, 0xAB47BC),
        (-0.1, -0.85, 0x26C6DA),
    ];
    for (x, y, color) in bits {
        s.fill(&circle(Point::new(x, y), 0.09), &solid(color))?;
    }
    s.stroke(
        &segment(Point::new(0.35, -0.8), Point::new(0.8, -0.55)),
        &solid(0xE91E63),
        &LineStyle::solid(0.06),
    )
}

fn mortarboard(s: &mut dyn Surface) -> CardResult<()> {
    let dark = solid(0x263238);
    s.fill(&rect(-0.45, -0.05, 0.45, 0.45), &dark)?;
    s.fill(
        &polygon(&[
            Point::new(0.0, -0.7),
            Point::new(1.0, -0.25),
            Point::new(0.0, 0.2),
            Point::new(-1.0, -0.25),
        ]),
        &dark,
    )?;
    let gold = solid(0xFFC107);
    s.stroke(
        &segment(Point::new(0.0, -0.25), Point::new(0.7, 0.0)),
        &gold,
        &LineStyle::solid(0.05),
    )?;
    s.stroke(
        &segment(Point::new(0.7, 0.0), Point::new(0.7, 0.55)),
        &gold,
        &LineStyle::solid(0.05),
    )?;
    s.fill(&circle(Point::new(0.7, 0.6), 0.08), &gold)
}

fn tree(s: &mut dyn Surface) -> CardResult<()> {
    s.fill(&rect(-0.12, 0.65, 0.12, 0.95), &solid(0x6D4C41))?;
    let green = solid(0x2E7D32);
    for (top, half, bottom) in [(-0.6, 0.45, -0.05), (-0.3, 0.6, 0.3), (0.0, 0.75, 0.68)] {
        s.fill(
            &polygon(&[
                Point::new(0.0, top),
                Point::new(half, bottom),
                Point::new(-half, bottom),
            ]),
            &green,
        )?;
    }
    s.fill(&star(Point::new(0.0, -0.72), 0.2, 0.09, 5), &solid(0xFFD600))
}

fn sparkle(s: &mut dyn Surface) -> CardResult<()> {
    s.fill(&star(Point::new(-0.1, 0.1), 0.85, 0.2, 4), &solid(0xFFD54F))?;
    s.fill(&star(Point::new(0.6, -0.6), 0.35, 0.09, 4), &solid(0xFFE082))
}

/// `points`-pointed star with the first point straight up.
fn star(center: Point, outer: f64, inner: f64, points: usize) -> BezPath {
    let n = points.max(2) * 2;
    let vertices: Vec<Point> = (0..n)
        .map(|i| {
            let r = if i % 2 == 0 { outer } else { inner };
            let angle = i as f64 * PI / points.max(2) as f64 - FRAC_PI_2;
            center + kurbo::Vec2::from_angle(angle) * r
        })
        .collect();
    polygon(&vertices)
}

