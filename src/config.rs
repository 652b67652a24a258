//! Engine settings.
//!
//! Everything has a default matching the reference card; a JSON file may override any subset
//! and `CARDSMITH_*` environment variables are applied last.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{CardError, CardResult};

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CardConfig {
    /// Still-card rendering.
    pub render: RenderConfig,
    /// Animated frame generation.
    pub animation: AnimationConfig,
    /// GIF encoder.
    pub gif: GifConfig,
}

/// Still-card rendering settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Watermark stamped bottom-center; empty disables it.
    pub watermark: String,
    /// Fixed seed for decorative randomness. When absent the seed is derived from the request.
    pub seed: Option<u64>,
    /// Text layout tuning.
    pub layout: LayoutConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            watermark: "Created with Cardsmith".to_owned(),
            seed: None,
            layout: LayoutConfig::default(),
        }
    }
}

/// Text layout tuning. Ratios are fractions of the card width unless noted.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Horizontal padding on each side.
    pub padding_ratio: f64,
    /// Vertical budget for the text block, as a fraction of the card height.
    pub height_budget_ratio: f64,
    /// Starting message font size.
    pub base_font_ratio: f64,
    /// Salutation font size.
    pub salutation_font_ratio: f64,
    /// Smallest size the fit search will try, in pixels.
    pub min_font_px: f64,
    /// Factor applied to the font size after each failed attempt.
    pub shrink_ratio: f64,
    /// Upper bound on fit attempts.
    pub max_attempts: u32,
    /// Line advance as a multiple of the font size.
    pub line_height: f64,
    /// Simplified-layout font size at the 1080px reference width.
    pub simple_font_px: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            padding_ratio: 40.0 / 300.0,
            height_budget_ratio: 0.6,
            base_font_ratio: 32.0 / 300.0,
            salutation_font_ratio: 24.0 / 300.0,
            min_font_px: 14.0,
            shrink_ratio: 0.9,
            max_attempts: 20,
            line_height: 1.4,
            simple_font_px: 48.0,
        }
    }
}

impl LayoutConfig {
    /// Reject values the fit search cannot work with.
    pub fn validate(&self) -> CardResult<()> {
        let positive = [
            ("base_font_ratio", self.base_font_ratio),
            ("salutation_font_ratio", self.salutation_font_ratio),
            ("min_font_px", self.min_font_px),
            ("line_height", self.line_height),
            ("simple_font_px", self.simple_font_px),
        ];
        for (name, v) in positive {
            if !v.is_finite() || v <= 0.0 {
                return Err(CardError::validation(format!("layout.{name} must be > 0, got {v}")));
            }
        }
        if !(self.padding_ratio.is_finite() && (0.0..0.5).contains(&self.padding_ratio)) {
            return Err(CardError::validation(format!(
                "layout.padding_ratio must be in [0, 0.5), got {}",
                self.padding_ratio
            )));
        }
        if !(self.height_budget_ratio > 0.0 && self.height_budget_ratio <= 1.0) {
            return Err(CardError::validation(format!(
                "layout.height_budget_ratio must be in (0, 1], got {}",
                self.height_budget_ratio
            )));
        }
        if !(self.shrink_ratio > 0.0 && self.shrink_ratio < 1.0) {
            return Err(CardError::validation(format!(
                "layout.shrink_ratio must be in (0, 1), got {}",
                self.shrink_ratio
            )));
        }
        if self.max_attempts == 0 {
            return Err(CardError::validation("layout.max_attempts must be > 0"));
        }
        Ok(())
    }
}

/// Animated frame generation settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    /// Frames per animation.
    pub frame_count: u32,
    /// Display time of each frame.
    pub frame_delay_ms: u32,
    /// Particle seed; when absent a fixed default is used so animations are reproducible.
    pub seed: Option<u64>,
    /// Sparkle particles per frame.
    pub sparkle_count: usize,
    /// Confetti pieces per animation.
    pub confetti_count: usize,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_count: 30,
            frame_delay_ms: 100,
            seed: None,
            sparkle_count: 20,
            confetti_count: 30,
        }
    }
}

impl AnimationConfig {
    /// Reject empty or frozen animations.
    pub fn validate(&self) -> CardResult<()> {
        if self.frame_count == 0 {
            return Err(CardError::validation("animation.frame_count must be > 0"));
        }
        if self.frame_delay_ms == 0 {
            return Err(CardError::validation("animation.frame_delay_ms must be > 0"));
        }
        Ok(())
    }
}

/// GIF encoder settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GifConfig {
    /// NeuQuant speed, `1..=30`; lower is slower and more accurate.
    pub speed: i32,
    /// Loop count; `None` loops forever.
    pub repeat: Option<u16>,
}

impl Default for GifConfig {
    fn default() -> Self {
        Self {
            speed: 10,
            repeat: None,
        }
    }
}

impl GifConfig {
    /// Reject quantizer speeds the encoder does not accept.
    pub fn validate(&self) -> CardResult<()> {
        if !(1..=30).contains(&self.speed) {
            return Err(CardError::validation(format!(
                "gif.speed must be in 1..=30, got {}",
                self.speed
            )));
        }
        Ok(())
    }
}

impl CardConfig {
    /// Parse a configuration from a JSON reader. Missing fields take their defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> CardResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| CardError::validation(format!("parse config JSON: {e}")))
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CardResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            CardError::validation(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Apply `CARDSMITH_*` overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_vars(|key| std::env::var(key).ok());
    }

    /// Apply overrides from `lookup`. Unparseable values are ignored with a warning.
    pub fn apply_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(seed) = parse_var::<u64>(&lookup, "CARDSMITH_SEED") {
            self.render.seed = Some(seed);
            self.animation.seed = Some(seed);
        }
        if let Some(n) = parse_var::<u32>(&lookup, "CARDSMITH_FRAME_COUNT").filter(|&n| n > 0) {
            self.animation.frame_count = n;
        }
        if let Some(ms) = parse_var::<u32>(&lookup, "CARDSMITH_FRAME_DELAY_MS").filter(|&n| n > 0) {
            self.animation.frame_delay_ms = ms;
        }
        if let Some(text) = lookup("CARDSMITH_WATERMARK") {
            self.render.watermark = text;
        }
    }

    /// Validate every section.
    pub fn validate(&self) -> CardResult<()> {
        self.render.layout.validate()?;
        self.animation.validate()?;
        self.gif.validate()
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparseable environment override");
            None
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
