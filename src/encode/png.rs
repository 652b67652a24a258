use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::foundation::error::{CardError, CardResult};
use crate::surface::FrameRGBA;

/// Encode one frame as a straight-alpha PNG.
pub fn encode_png(frame: &FrameRGBA) -> CardResult<Vec<u8>> {
    frame.validate()?;
    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(
            &frame.to_straight_rgba(),
            frame.width,
            frame.height,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| CardError::encode(format!("png: {e}")))?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
