//! Particle state as pure functions of the frame index.
//!
//! Particles are seeded once per animation job. Lengths are authored at the 1080px reference
//! width and scaled with the card.

use std::f64::consts::TAU;

use crate::compose::helpers::circle;
use crate::config::AnimationConfig;
use crate::foundation::core::{Affine, CardSize, Point, Rect, Rgba8};
use crate::foundation::error::CardResult;
use crate::foundation::math::{Rng64, noise01};
use crate::surface::{BlendMode, GradientStop, Paint, Surface};

const SPARKLE_COLORS: [Rgba8; 4] = [
    Rgba8::hex(0xFFD700),
    Rgba8::hex(0xFFFFFF),
    Rgba8::hex(0xFF69B4),
    Rgba8::hex(0x87CEEB),
];

const CONFETTI_COLORS: [Rgba8; 6] = [
    Rgba8::hex(0xFF6B6B),
    Rgba8::hex(0x4ECDC4),
    Rgba8::hex(0x45B7D1),
    Rgba8::hex(0xFFA07A),
    Rgba8::hex(0x98D8C8),
    Rgba8::hex(0xFFD93D),
];

/// Distance above the top edge where confetti (re)enters, and below the bottom where it leaves.
const CONFETTI_MARGIN: f64 = 20.0;

/// A point light that pulses and drifts around its anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sparkle {
    /// Rest position.
    pub anchor: Point,
    /// Disc radius.
    pub radius: f64,
    /// Peak opacity.
    pub opacity: f64,
    /// Phase offset of pulse and drift.
    pub phase: f64,
    /// Disc color.
    pub color: Rgba8,
}

impl Sparkle {
    fn seed(rng: &mut Rng64, size: CardSize) -> Self {
        let k = size.scale();
        Self {
            anchor: Point::new(rng.range(0.0, size.w()), rng.range(0.0, size.h())),
            radius: rng.range(2.0, 6.0) * k,
            opacity: rng.next_f64(),
            phase: rng.range(0.0, TAU),
            color: SPARKLE_COLORS[rng.index(SPARKLE_COLORS.len())],
        }
    }

    /// Opacity at `frame`, pulsing between 0 and the peak.
    pub fn alpha_at(&self, frame: u32) -> f64 {
        let pulse = (f64::from(frame) * 0.1 + self.phase).sin() * 0.5 + 0.5;
        self.opacity * pulse
    }

    /// Position at `frame`; drifts up to 20 by 10 reference pixels around the anchor.
    pub fn position_at(&self, frame: u32, size: CardSize) -> Point {
        let k = size.scale();
        let t = f64::from(frame) * 0.05 + self.phase;
        Point::new(
            self.anchor.x + t.sin() * 20.0 * k,
            self.anchor.y + t.cos() * 10.0 * k,
        )
    }
}

/// A paper rectangle falling at constant speed, swaying and spinning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Confetti {
    /// Horizontal position of the first pass.
    pub x: f64,
    /// Vertical position before frame 0.
    pub y: f64,
    /// Rectangle width.
    pub width: f64,
    /// Rectangle height.
    pub height: f64,
    /// Fill color; the gradient runs to a lighter tint of it.
    pub color: Rgba8,
    /// Fall per frame.
    pub speed: f64,
    /// Rotation before frame 0, in degrees.
    pub rotation: f64,
    /// Rotation per frame, in degrees.
    pub spin: f64,
    /// Sway frequency multiplier.
    pub sway_speed: f64,
    /// Sway amplitude.
    pub sway_amount: f64,
    /// Seeds the horizontal position of later passes.
    pub lane_seed: u64,
}

impl Confetti {
    fn seed(rng: &mut Rng64, size: CardSize) -> Self {
        let k = size.scale();
        let margin = CONFETTI_MARGIN * k;
        Self {
            x: rng.range(0.0, size.w()),
            y: rng.range(-margin, size.h() + margin),
            width: rng.range(5.0, 15.0) * k,
            height: rng.range(10.0, 25.0) * k,
            color: CONFETTI_COLORS[rng.index(CONFETTI_COLORS.len())],
            speed: rng.range(2.0, 5.0) * k,
            rotation: rng.range(0.0, 360.0),
            spin: rng.range(-5.0, 5.0),
            sway_speed: rng.range(1.0, 3.0),
            sway_amount: rng.range(10.0, 40.0) * k,
            lane_seed: rng.next_u64(),
        }
    }

    /// Distance travelled since entering the loop, and the number of completed passes.
    fn travel(&self, frame: u32, size: CardSize) -> (f64, u64) {
        let margin = CONFETTI_MARGIN * size.scale();
        let span = size.h() + 2.0 * margin;
        let travelled = self.y + margin + self.speed * (f64::from(frame) + 1.0);
        let passes = (travelled / span).floor().max(0.0) as u64;
        (travelled.rem_euclid(span), passes)
    }

    /// Vertical position at `frame`. Pieces leaving below the card re-enter above it.
    pub fn y_at(&self, frame: u32, size: CardSize) -> f64 {
        let margin = CONFETTI_MARGIN * size.scale();
        self.travel(frame, size).0 - margin
    }

    /// Horizontal position at `frame`, including sway. Each re-entry picks a new lane.
    pub fn x_at(&self, frame: u32, size: CardSize) -> f64 {
        let (_, passes) = self.travel(frame, size);
        let lane = if passes == 0 {
            self.x
        } else {
            noise01(self.lane_seed, passes) * size.w()
        };
        lane + (f64::from(frame) * 0.05 * self.sway_speed).sin() * self.sway_amount
    }

    /// Rotation at `frame`, in degrees.
    pub fn rotation_at(&self, frame: u32) -> f64 {
        self.rotation + self.spin * (f64::from(frame) + 1.0)
    }
}

/// All particles of one animation job.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParticleField {
    /// Sparkles, empty unless selected.
    pub sparkles: Vec<Sparkle>,
    /// Confetti, empty unless selected.
    pub confetti: Vec<Confetti>,
}

impl ParticleField {
    /// Seed particles for the selected effects.
    pub fn seed(
        size: CardSize,
        cfg: &AnimationConfig,
        sparkles: bool,
        confetti: bool,
        rng: &mut Rng64,
    ) -> Self {
        let mut field = Self::default();
        if sparkles {
            let mut r = rng.fork();
            field.sparkles = (0..cfg.sparkle_count)
                .map(|_| Sparkle::seed(&mut r, size))
                .collect();
        }
        if confetti {
            let mut r = rng.fork();
            field.confetti = (0..cfg.confetti_count)
                .map(|_| Confetti::seed(&mut r, size))
                .collect();
        }
        field
    }
}

pub(crate) fn paint_sparkles(
    s: &mut dyn Surface,
    sparkles: &[Sparkle],
    frame: u32,
    size: CardSize,
) -> CardResult<()> {
    for sparkle in sparkles {
        let at = sparkle.position_at(frame, size);
        s.save();
        s.set_alpha(sparkle.alpha_at(frame));
        let out = s
            .fill(&circle(at, sparkle.radius), &Paint::Solid(sparkle.color))
            .and_then(|()| s.fill(&circle(at, sparkle.radius * 0.3), &Paint::Solid(Rgba8::WHITE)));
        s.restore();
        out?;
    }
    Ok(())
}

pub(crate) fn paint_confetti(
    s: &mut dyn Surface,
    confetti: &[Confetti],
    frame: u32,
    size: CardSize,
) -> CardResult<()> {
    for piece in confetti {
        let center = Point::new(piece.x_at(frame, size), piece.y_at(frame, size));
        let (w, h) = (piece.width, piece.height);
        let body = Rect::new(-w / 2.0, -h / 2.0, w / 2.0, h / 2.0);
        let shine = Rect::new(-w / 2.0, -h / 2.0, -w / 2.0 + w / 3.0, h / 2.0);
        let paint = Paint::linear_even(
            Point::ZERO,
            Point::new(w, h),
            &[piece.color, piece.color.lighten(0.2)],
        );
        s.save();
        s.concat(
            Affine::translate(center.to_vec2())
                * Affine::rotate(piece.rotation_at(frame).to_radians()),
        );
        let out = s
            .fill_rect(body, &paint)
            .and_then(|()| s.fill_rect(shine, &Paint::Solid(Rgba8::WHITE.with_alpha(0.3))));
        s.restore();
        out?;
    }
    Ok(())
}

/// Tilt of the depth cue at `frame`, in `[-0.2, 0.2]`.
pub fn depth_tilt(frame: u32, frame_count: u32) -> f64 {
    let n = f64::from(frame_count.max(1));
    (f64::from(frame) / n * TAU).sin() * 0.2
}

/// Shade the edge turning away from the viewer; the base image itself is untouched.
pub(crate) fn paint_depth(
    s: &mut dyn Surface,
    frame: u32,
    frame_count: u32,
    size: CardSize,
) -> CardResult<()> {
    let tilt = depth_tilt(frame, frame_count);
    if tilt.abs() <= 0.01 {
        return Ok(());
    }
    let shade = Rgba8::BLACK.with_alpha(tilt.abs() * 1.5);
    let (from, to) = if tilt > 0.0 {
        (Point::new(0.0, 0.0), Point::new(size.w() / 2.0, 0.0))
    } else {
        (Point::new(size.w(), 0.0), Point::new(size.w() / 2.0, 0.0))
    };
    let paint = Paint::linear_even(from, to, &[shade, shade.with_alpha(0.0)]);
    s.fill_rect(size.rect(), &paint)
}

/// Glow strength at `frame`, in `[0.12, 0.3]`.
pub fn glow_alpha(frame: u32) -> f64 {
    ((f64::from(frame) * 0.1).sin() * 0.3 + 0.7) * 0.3
}

pub(crate) fn paint_glow(s: &mut dyn Surface, frame: u32, size: CardSize) -> CardResult<()> {
    let center = Point::new(size.w() / 2.0, size.h() / 2.0);
    let paint = Paint::Radial {
        start_center: center,
        start_radius: 0.0,
        end_center: center,
        end_radius: size.w() / 2.0,
        stops: vec![
            GradientStop {
                offset: 0.0,
                color: Rgba8::WHITE,
            },
            GradientStop {
                offset: 0.5,
                color: Rgba8::hex(0xFFEB3B),
            },
            GradientStop {
                offset: 1.0,
                color: Rgba8::TRANSPARENT,
            },
        ],
    };
    s.save();
    s.set_blend(BlendMode::Screen);
    s.set_alpha(glow_alpha(frame));
    let out = s.fill_rect(size.rect(), &paint);
    s.restore();
    out
}

#[cfg(test)]
#[path = "../../tests/unit/anim/particles.rs"]
mod tests;
