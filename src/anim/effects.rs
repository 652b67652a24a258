use std::fmt;
use std::str::FromStr;

use crate::foundation::error::CardError;

/// Overlay effect of an animated card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    /// Pulsing point lights.
    Sparkles,
    /// Falling, spinning paper rectangles.
    Confetti,
    /// Oscillating edge shading suggesting a tilt.
    #[serde(rename = "3d")]
    Depth,
    /// Pulsing screen-blended radial glow.
    Glow,
}

impl Effect {
    /// Tag used on the command line and in requests.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Sparkles => "sparkles",
            Self::Confetti => "confetti",
            Self::Depth => "3d",
            Self::Glow => "glow",
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Effect {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sparkles" | "sparkle" => Ok(Self::Sparkles),
            "confetti" => Ok(Self::Confetti),
            "3d" => Ok(Self::Depth),
            "glow" => Ok(Self::Glow),
            other => Err(CardError::validation(format!("unknown effect '{other}'"))),
        }
    }
}

/// Selected effects. Painting order is fixed (depth, sparkles, confetti, glow) regardless of the
/// order tags were given in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EffectSet {
    /// Sparkles selected.
    pub sparkles: bool,
    /// Confetti selected.
    pub confetti: bool,
    /// Depth cue selected.
    pub depth: bool,
    /// Glow selected.
    pub glow: bool,
}

impl EffectSet {
    /// Set containing exactly `effects`.
    pub fn new(effects: &[Effect]) -> Self {
        let mut set = Self::default();
        for e in effects {
            set.insert(*e);
        }
        set
    }

    /// Build from free-form tags; unknown tags are skipped with a warning.
    pub fn from_tags<'a>(tags: impl IntoIterator<Item = &'a str>) -> Self {
        let mut set = Self::default();
        for tag in tags {
            match tag.parse::<Effect>() {
                Ok(e) => set.insert(e),
                Err(err) => tracing::warn!(tag, error = %err, "skipping effect tag"),
            }
        }
        set
    }

    /// Add one effect.
    pub fn insert(&mut self, effect: Effect) {
        match effect {
            Effect::Sparkles => self.sparkles = true,
            Effect::Confetti => self.confetti = true,
            Effect::Depth => self.depth = true,
            Effect::Glow => self.glow = true,
        }
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/anim/effects.rs"]
mod tests;
