use crate::foundation::error::{CardError, CardResult};
use crate::surface::FrameRGBA;

/// Configuration handed to a [`FrameSink`] before the first frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SinkConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Display time of every frame.
    pub frame_delay_ms: u32,
}

/// Consumer of an animation, frame by frame.
///
/// Ordering contract: `push_frame` is called with indices `0, 1, 2, ...` in display order,
/// between one `begin` and one `end`.
pub trait FrameSink {
    /// Start a sequence.
    fn begin(&mut self, cfg: SinkConfig) -> CardResult<()>;
    /// Append frame `idx`.
    fn push_frame(&mut self, idx: u32, frame: &FrameRGBA) -> CardResult<()>;
    /// Finish the sequence.
    fn end(&mut self) -> CardResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    /// Frames in display order.
    pub frames: Vec<(u32, FrameRGBA)>,
    /// Whether `end` was called.
    pub finished: bool,
}

impl InMemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration of the current sequence.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> CardResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: u32, frame: &FrameRGBA) -> CardResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> CardResult<()> {
        self.finished = true;
        Ok(())
    }
}

/// Stream `frames` into `sink` with a constant delay. All frames must share the first frame's
/// size.
pub fn write_frames(
    frames: &[FrameRGBA],
    frame_delay_ms: u32,
    sink: &mut dyn FrameSink,
) -> CardResult<()> {
    let Some(first) = frames.first() else {
        return Err(CardError::encode("no frames to encode"));
    };
    if frame_delay_ms == 0 {
        return Err(CardError::encode("frame delay must be > 0"));
    }
    sink.begin(SinkConfig {
        width: first.width,
        height: first.height,
        frame_delay_ms,
    })?;
    for (idx, frame) in frames.iter().enumerate() {
        if frame.size() != first.size() {
            return Err(CardError::encode(format!(
                "frame {idx} is {}x{}, expected {}x{}",
                frame.width, frame.height, first.width, first.height
            )));
        }
        let idx = u32::try_from(idx).map_err(|_| CardError::encode("too many frames"))?;
        sink.push_frame(idx, frame)?;
    }
    sink.end()
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
