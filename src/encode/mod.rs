//! Still and animated image export.

/// Animated GIF sink.
pub mod gif;
/// PNG still export.
pub mod png;
/// Frame sink trait and in-memory sink.
pub mod sink;

pub use gif::{GifSink, encode_gif};
pub use png::encode_png;
pub use sink::{FrameSink, InMemorySink, SinkConfig, write_frames};
