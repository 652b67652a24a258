//! Animated frame generation: particle overlays composited over an already rendered card.

/// Effect tags.
pub mod effects;
/// Frame sequence generation with per-frame recovery.
pub mod frames;
/// Particle state and overlay painting.
pub mod particles;

pub use effects::{Effect, EffectSet};
pub use frames::{generate_frames, generate_frames_with};
pub use particles::{Confetti, ParticleField, Sparkle};
