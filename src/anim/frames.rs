use crate::anim::effects::EffectSet;
use crate::anim::particles::{
    ParticleField, paint_confetti, paint_depth, paint_glow, paint_sparkles,
};
use crate::config::AnimationConfig;
use crate::foundation::error::{CardError, CardResult};
use crate::foundation::math::Rng64;
use crate::surface::{FrameRGBA, Surface};

/// Particle seed used when the configuration does not fix one.
const DEFAULT_PARTICLE_SEED: u64 = 0x5EED_CA2D;

/// Build `cfg.frame_count` frames of `effects` over `base`, compositing on `s`.
///
/// A frame whose overlay fails is replaced by an unmodified copy of `base`. Errors are returned
/// only when the job cannot start at all (invalid base, unusable surface, bad configuration).
pub fn generate_frames_with(
    s: &mut dyn Surface,
    base: &FrameRGBA,
    effects: EffectSet,
    cfg: &AnimationConfig,
) -> CardResult<Vec<FrameRGBA>> {
    cfg.validate()?;
    base.validate()?;
    let size = base.size();
    s.reset(size)?;

    let mut rng = Rng64::new(cfg.seed.unwrap_or(DEFAULT_PARTICLE_SEED));
    let field = ParticleField::seed(size, cfg, effects.sparkles, effects.confetti, &mut rng);

    let mut frames = Vec::with_capacity(cfg.frame_count as usize);
    for frame in 0..cfg.frame_count {
        let built = compose_frame(s, base, effects, &field, frame, cfg.frame_count)
            .map_err(|e| CardError::frame(format!("frame {frame}: {e}")));
        match built {
            Ok(f) => frames.push(f),
            Err(err) => {
                tracing::warn!(frame, error = %err, "frame failed, using the base image");
                frames.push(base.clone());
            }
        }
    }
    Ok(frames)
}

/// Like [`generate_frames_with`], but never fails: if the job cannot start, the result is the
/// base frame alone.
#[tracing::instrument(
    skip(s, base, cfg),
    fields(width = base.width, height = base.height, frames = cfg.frame_count)
)]
pub fn generate_frames(
    s: &mut dyn Surface,
    base: &FrameRGBA,
    effects: EffectSet,
    cfg: &AnimationConfig,
) -> Vec<FrameRGBA> {
    match generate_frames_with(s, base, effects, cfg) {
        Ok(frames) if !frames.is_empty() => frames,
        Ok(_) => vec![base.clone()],
        Err(err) => {
            tracing::warn!(error = %err, "frame generation failed, returning the base frame");
            vec![base.clone()]
        }
    }
}

fn compose_frame(
    s: &mut dyn Surface,
    base: &FrameRGBA,
    effects: EffectSet,
    field: &ParticleField,
    frame: u32,
    frame_count: u32,
) -> CardResult<FrameRGBA> {
    let size = base.size();
    s.reset(size)?;
    s.draw_frame(base)?;
    if effects.depth {
        paint_depth(s, frame, frame_count, size)?;
    }
    paint_sparkles(s, &field.sparkles, frame, size)?;
    paint_confetti(s, &field.confetti, frame, size)?;
    if effects.glow {
        paint_glow(s, frame, size)?;
    }
    let out = s.snapshot()?;
    if out.size() != size {
        return Err(CardError::frame(format!(
            "surface produced {}x{} for a {}x{} base",
            out.width, out.height, base.width, base.height
        )));
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/anim/frames.rs"]
mod tests;
