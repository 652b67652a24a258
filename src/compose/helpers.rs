use std::f64::consts::{PI, TAU};

use kurbo::Shape;

use crate::catalog::ShapeKind;
use crate::foundation::core::{Affine, BezPath, CardSize, Point, Rect, Rgba8};
use crate::foundation::error::CardResult;
use crate::foundation::math::Rng64;
use crate::surface::{LineStyle, Paint, Surface};

const TOLERANCE: f64 = 0.01;

/// Diagonal gradient from the top-left to the bottom-right corner.
pub(crate) fn diagonal_gradient(size: CardSize, colors: &[Rgba8]) -> Paint {
    Paint::linear_even(Point::ZERO, Point::new(size.w(), size.h()), colors)
}

/// Vertical gradient from `y0` to `y1`.
pub(crate) fn vertical_gradient(y0: f64, y1: f64, colors: &[Rgba8]) -> Paint {
    Paint::linear_even(Point::new(0.0, y0), Point::new(0.0, y1), colors)
}

/// Radial glow from `color` at the center to transparent at `radius`.
pub(crate) fn glow(center: Point, radius: f64, color: Rgba8) -> Paint {
    Paint::radial_even(center, 0.0, radius, &[color, color.with_alpha(0.0)])
}

pub(crate) fn fill_canvas(s: &mut dyn Surface, paint: &Paint) -> CardResult<()> {
    let rect = s.size().rect();
    s.fill_rect(rect, paint)
}

/// Run `draw` with the global alpha set to `alpha`, restoring state afterwards even on error.
pub(crate) fn with_alpha(
    s: &mut dyn Surface,
    alpha: f64,
    draw: impl FnOnce(&mut dyn Surface) -> CardResult<()>,
) -> CardResult<()> {
    s.save();
    s.set_alpha(alpha);
    let out = draw(s);
    s.restore();
    out
}

pub(crate) fn circle(center: Point, radius: f64) -> BezPath {
    kurbo::Circle::new(center, radius.max(0.0)).to_path(TOLERANCE)
}

pub(crate) fn ellipse(center: Point, rx: f64, ry: f64, rotation: f64) -> BezPath {
    kurbo::Ellipse::new(center, (rx.max(0.0), ry.max(0.0)), rotation).to_path(TOLERANCE)
}

pub(crate) fn polygon(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut it = points.iter();
    if let Some(first) = it.next() {
        path.move_to(*first);
        for p in it {
            path.line_to(*p);
        }
        path.close_path();
    }
    path
}

pub(crate) fn segment(a: Point, b: Point) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(a);
    path.line_to(b);
    path
}

/// Primitive `kind` of overall extent `size` centered at `center`.
///
/// `Organic` draws from `rng`; every other kind is deterministic.
pub(crate) fn shape_path(kind: ShapeKind, center: Point, size: f64, rng: &mut Rng64) -> BezPath {
    let r = size / 2.0;
    let Point { x, y } = center;
    match kind {
        ShapeKind::Circle => circle(center, r),
        ShapeKind::Square => polygon(&[
            Point::new(x - r, y - r),
            Point::new(x + r, y - r),
            Point::new(x + r, y + r),
            Point::new(x - r, y + r),
        ]),
        ShapeKind::Triangle => polygon(&[
            Point::new(x, y - r),
            Point::new(x - r, y + r),
            Point::new(x + r, y + r),
        ]),
        ShapeKind::Diamond => polygon(&[
            Point::new(x, y - r),
            Point::new(x + r, y),
            Point::new(x, y + r),
            Point::new(x - r, y),
        ]),
        ShapeKind::Organic => {
            let points: Vec<Point> = (0..6)
                .map(|i| {
                    let angle = f64::from(i) / 6.0 * TAU;
                    let radius = r + rng.range(0.0, size / 4.0);
                    Point::new(x + angle.cos() * radius, y + angle.sin() * radius)
                })
                .collect();
            polygon(&points)
        }
    }
}

/// Which canvas edge a wave silhouette is closed against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Edge {
    Top,
    Bottom,
}

/// Shape of the periodic term of a [`Wave`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Profile {
    /// Smooth sinusoid.
    Sine,
    /// Sharp peaks pointing up (`2|sin| - 1`), for mountain ridges.
    Ridge,
}

/// A horizontally swept, sinusoidally perturbed line:
/// `y(x) = baseline + amplitude * f(x * frequency + phase)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Wave {
    pub(crate) baseline: f64,
    pub(crate) amplitude: f64,
    pub(crate) frequency: f64,
    pub(crate) phase: f64,
    pub(crate) step: f64,
    pub(crate) profile: Profile,
}

impl Wave {
    pub(crate) fn sine(
        baseline: f64,
        amplitude: f64,
        frequency: f64,
        phase: f64,
        step: f64,
    ) -> Self {
        Self {
            baseline,
            amplitude,
            frequency,
            phase,
            step,
            profile: Profile::Sine,
        }
    }

    pub(crate) fn ridge(self) -> Self {
        Self {
            profile: Profile::Ridge,
            ..self
        }
    }

    pub(crate) fn y_at(&self, x: f64) -> f64 {
        let t = (x * self.frequency + self.phase).sin();
        let f = match self.profile {
            Profile::Sine => t,
            Profile::Ridge => 2.0 * t.abs() - 1.0,
        };
        self.baseline + self.amplitude * f
    }

    /// Sample points from `x = 0` to `x = width` inclusive.
    pub(crate) fn samples(&self, width: f64) -> Vec<Point> {
        let step = if self.step.is_finite() && self.step > 0.0 {
            self.step
        } else {
            width.max(1.0)
        };
        let n = (width / step).ceil().max(1.0) as usize;
        (0..=n)
            .map(|i| {
                let x = (i as f64 * step).min(width);
                Point::new(x, self.y_at(x))
            })
            .collect()
    }
}

/// Filled silhouette between `wave` and one canvas edge.
///
/// Every layered terrain scene goes through this helper.
pub(crate) fn wave_path(wave: &Wave, size: CardSize, edge: Edge) -> BezPath {
    let edge_y = match edge {
        Edge::Top => 0.0,
        Edge::Bottom => size.h(),
    };
    let mut path = BezPath::new();
    path.move_to((0.0, edge_y));
    for p in wave.samples(size.w()) {
        path.line_to(p);
    }
    path.line_to((size.w(), edge_y));
    path.close_path();
    path
}

/// Parameters of one scatter pass.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Scatter<'a> {
    pub(crate) count: usize,
    pub(crate) colors: &'a [Rgba8],
    /// Size range `[lo, hi)`.
    pub(crate) size: (f64, f64),
    pub(crate) alpha: f64,
    pub(crate) area: Rect,
}

/// One randomly placed item of a scatter pass.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Placement {
    pub(crate) at: Point,
    pub(crate) size: f64,
    pub(crate) color: Rgba8,
}

/// Place `count` items uniformly in `area` with random size and palette color, drawing each at
/// the pass alpha.
pub(crate) fn scatter(
    s: &mut dyn Surface,
    rng: &mut Rng64,
    spec: &Scatter<'_>,
    mut draw: impl FnMut(&mut dyn Surface, &mut Rng64, Placement) -> CardResult<()>,
) -> CardResult<()> {
    with_alpha(s, spec.alpha, |s| {
        for _ in 0..spec.count {
            let at = Point::new(
                rng.range(spec.area.x0, spec.area.x1),
                rng.range(spec.area.y0, spec.area.y1),
            );
            let size = rng.range(spec.size.0, spec.size.1);
            let color = rng.pick(spec.colors).copied().unwrap_or(Rgba8::WHITE);
            draw(
                s,
                rng,
                Placement {
                    at,
                    size,
                    color,
                },
            )?;
        }
        Ok(())
    })
}

/// Many tiny white dots with per-dot opacity in `alpha`.
pub(crate) fn star_speckle(
    s: &mut dyn Surface,
    rng: &mut Rng64,
    count: usize,
    area: Rect,
    max_radius: f64,
    alpha: (f64, f64),
) -> CardResult<()> {
    for _ in 0..count {
        let at = Point::new(rng.range(area.x0, area.x1), rng.range(area.y0, area.y1));
        let r = rng.range(0.0, max_radius);
        let a = rng.range(alpha.0, alpha.1);
        s.fill(&circle(at, r), &Paint::Solid(Rgba8::WHITE.with_alpha(a)))?;
    }
    Ok(())
}

/// Quadratic stroke from `a` to `b` bending through `control`.
pub(crate) fn curve(a: Point, control: Point, b: Point) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(a);
    path.quad_to(control, b);
    path
}

/// `n` petal ellipses arranged around `center`, each pointing outward.
pub(crate) fn petals(center: Point, n: usize, size: f64) -> Vec<BezPath> {
    (0..n)
        .map(|j| {
            let angle = j as f64 / n as f64 * TAU;
            let c = center + kurbo::Vec2::from_angle(angle) * (size / 3.0);
            ellipse(c, size / 3.0, size / 2.0, angle)
        })
        .collect()
}

/// Six spokes with short branches, stroked.
pub(crate) fn snowflake(center: Point, size: f64) -> BezPath {
    let mut path = BezPath::new();
    for i in 0..6 {
        let angle = f64::from(i) * PI / 3.0;
        let dir = kurbo::Vec2::from_angle(angle);
        let tip = center + dir * size;
        path.move_to(center);
        path.line_to(tip);
        let mid = center + dir * (size * 0.6);
        for side in [-1.0, 1.0] {
            let branch = kurbo::Vec2::from_angle(angle + side * PI / 4.0) * (size * 0.3);
            path.move_to(mid);
            path.line_to(mid + branch);
        }
    }
    path
}

pub(crate) fn thin_line(width: f64) -> LineStyle {
    LineStyle::solid(width.max(0.5))
}

/// Rotate about `center`.
pub(crate) fn rotate_about(center: Point, angle: f64) -> Affine {
    Affine::rotate_about(angle, center)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/helpers.rs"]
mod tests;
