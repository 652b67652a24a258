use crate::foundation::error::{CardError, CardResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Target card dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct CardSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl CardSize {
    /// Canonical portrait card size.
    pub const PORTRAIT: Self = Self {
        width: 1080,
        height: 1620,
    };

    /// Create a validated size; both dimensions must be positive.
    pub fn new(width: u32, height: u32) -> CardResult<Self> {
        if width == 0 || height == 0 {
            return Err(CardError::surface(format!(
                "card size must be positive, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Width as `f64`.
    pub fn w(self) -> f64 {
        f64::from(self.width)
    }

    /// Height as `f64`.
    pub fn h(self) -> f64 {
        f64::from(self.height)
    }

    /// Scale factor against the 1080px reference width used by background routines.
    pub fn scale(self) -> f64 {
        self.w() / 1080.0
    }

    /// Full card rectangle.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.w(), self.h())
    }
}

/// Straight-alpha RGBA8 color.
///
/// Serialized as a `#RRGGBB` / `#RRGGBBAA` hex string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (straight, not premultiplied).
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Opaque color from channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from channels including alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a `0xRRGGBB` literal.
    pub const fn hex(v: u32) -> Self {
        Self::rgb((v >> 16) as u8, (v >> 8) as u8, v as u8)
    }

    /// Same color with alpha replaced by `alpha` in `[0, 1]`.
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            a: unit_to_u8(alpha),
            ..self
        }
    }

    /// Same color with alpha multiplied by `k` in `[0, 1]`.
    pub fn fade(self, k: f64) -> Self {
        Self {
            a: unit_to_u8(f64::from(self.a) / 255.0 * k),
            ..self
        }
    }

    /// Mix toward white by `amount` in `[0, 1]`.
    pub fn lighten(self, amount: f64) -> Self {
        let t = amount.clamp(0.0, 1.0);
        let up = |c: u8| -> u8 {
            let c = f64::from(c);
            (c + (255.0 - c) * t).round().clamp(0.0, 255.0) as u8
        };
        Self {
            r: up(self.r),
            g: up(self.g),
            b: up(self.b),
            a: self.a,
        }
    }

    /// Linear interpolation between two colors, including alpha.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        };
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when not opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

pub(crate) fn unit_to_u8(x: f64) -> u8 {
    if !x.is_finite() {
        return 0;
    }
    (x.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
