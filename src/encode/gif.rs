use std::io::Write;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};

use crate::config::GifConfig;
use crate::encode::sink::{FrameSink, SinkConfig, write_frames};
use crate::foundation::error::{CardError, CardResult};
use crate::surface::FrameRGBA;

/// Streams frames into an animated GIF.
///
/// The trailer is written when the sink ends (or is dropped), so the writer only holds a
/// complete file after [`FrameSink::end`].
pub struct GifSink<W: Write> {
    encoder: Option<GifEncoder<W>>,
    repeat: Repeat,
    cfg: Option<SinkConfig>,
}

impl<W: Write> GifSink<W> {
    /// Sink writing to `writer` with the given quantizer settings.
    pub fn new(writer: W, gif: &GifConfig) -> CardResult<Self> {
        gif.validate()?;
        let repeat = match gif.repeat {
            Some(n) => Repeat::Finite(n),
            None => Repeat::Infinite,
        };
        Ok(Self {
            encoder: Some(GifEncoder::new_with_speed(writer, gif.speed)),
            repeat,
            cfg: None,
        })
    }

    fn encoder(&mut self) -> CardResult<&mut GifEncoder<W>> {
        self.encoder
            .as_mut()
            .ok_or_else(|| CardError::encode("gif sink already finished"))
    }
}

impl<W: Write> FrameSink for GifSink<W> {
    fn begin(&mut self, cfg: SinkConfig) -> CardResult<()> {
        if cfg.width > u32::from(u16::MAX) || cfg.height > u32::from(u16::MAX) {
            return Err(CardError::encode(format!(
                "gif frames are limited to 65535px, got {}x{}",
                cfg.width, cfg.height
            )));
        }
        let repeat = self.repeat;
        self.encoder()?
            .set_repeat(repeat)
            .map_err(|e| CardError::encode(format!("gif repeat: {e}")))?;
        self.cfg = Some(cfg);
        Ok(())
    }

    fn push_frame(&mut self, idx: u32, frame: &FrameRGBA) -> CardResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| CardError::encode("push_frame before begin"))?;
        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(CardError::encode(format!(
                "frame {idx} is {}x{}, sink expects {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        let img = RgbaImage::from_raw(frame.width, frame.height, frame.to_straight_rgba())
            .ok_or_else(|| CardError::encode(format!("frame {idx} has a short pixel buffer")))?;
        let delay = Delay::from_numer_denom_ms(cfg.frame_delay_ms, 1);
        self.encoder()?
            .encode_frame(Frame::from_parts(img, 0, 0, delay))
            .map_err(|e| CardError::encode(format!("gif frame {idx}: {e}")))
    }

    fn end(&mut self) -> CardResult<()> {
        // Dropping the encoder writes the trailer.
        self.encoder.take();
        self.cfg = None;
        Ok(())
    }
}

/// Encode `frames` as an animated GIF with a constant per-frame delay.
#[tracing::instrument(skip(frames, gif), fields(frames = frames.len()))]
pub fn encode_gif(
    frames: &[FrameRGBA],
    frame_delay_ms: u32,
    gif: &GifConfig,
) -> CardResult<Vec<u8>> {
    let mut out = Vec::new();
    {
        let mut sink = GifSink::new(&mut out, gif)?;
        write_frames(frames, frame_delay_ms, &mut sink)?;
    }
    tracing::debug!(bytes = out.len(), "gif encoded");
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
