use crate::foundation::core::CardSize;
use crate::foundation::error::{CardError, CardResult};
use crate::foundation::math::{Fnv1a64, mul_div255_u8};

/// A rendered frame as RGBA8 pixels.
///
/// Frames produced by [`crate::CpuSurface`] are premultiplied alpha; the `premultiplied` flag
/// keeps that explicit at API boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Fully transparent premultiplied frame.
    pub fn transparent(size: CardSize) -> Self {
        Self {
            width: size.width,
            height: size.height,
            data: vec![0; (size.width as usize) * (size.height as usize) * 4],
            premultiplied: true,
        }
    }

    /// Frame dimensions.
    pub fn size(&self) -> CardSize {
        CardSize {
            width: self.width,
            height: self.height,
        }
    }

    /// Check that `data` holds exactly `width * height` pixels.
    pub fn validate(&self) -> CardResult<()> {
        let expected = (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(4);
        if self.width == 0 || self.height == 0 || self.data.len() != expected {
            return Err(CardError::validation(format!(
                "frame {}x{} has {} bytes, expected {expected}",
                self.width,
                self.height,
                self.data.len()
            )));
        }
        Ok(())
    }

    /// Pixel at `(x, y)` as stored, `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Straight-alpha copy of the pixel data.
    pub fn to_straight_rgba(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        if self.premultiplied {
            unpremultiply_rgba8_in_place(&mut out);
        }
        out
    }

    /// Stable 64-bit digest of dimensions and pixel bytes.
    pub fn digest(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_u32(self.width);
        h.write_u32(self.height);
        h.write_bytes(&self.data);
        h.finish()
    }
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        px[0] = mul_div255_u8(u16::from(px[0]), a);
        px[1] = mul_div255_u8(u16::from(px[1]), a);
        px[2] = mul_div255_u8(u16::from(px[2]), a);
    }
}

pub(crate) fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u32::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        if a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}
