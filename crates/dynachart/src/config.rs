//! Animation configuration

use std::time::Duration;

use dynachart_core::{Error, Palette, Result, DEFAULT_STEPS};

/// Default pause between frames, in milliseconds
pub const DEFAULT_DELAY_MS: u64 = 300;

/// Settings for an animation run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct AnimationConfig {
    /// Frames per column-to-column transition (at least 1, default 3)
    pub steps_per_transition: u32,
    /// Pause after each frame, in milliseconds (default 300)
    pub delay_ms: u64,
    /// Point colors, cycled by row
    pub palette: Palette,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            steps_per_transition: DEFAULT_STEPS,
            delay_ms: DEFAULT_DELAY_MS,
            palette: Palette::default(),
        }
    }
}

impl AnimationConfig {
    /// Set the frames per transition
    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps_per_transition = steps;
        self
    }

    /// Set the pause between frames
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Set the point colors
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Pause between frames
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Check the settings before a run
    pub fn validate(&self) -> Result<()> {
        if self.steps_per_transition < 1 {
            return Err(Error::InvalidStepCount(self.steps_per_transition));
        }
        if self.palette.is_empty() {
            return Err(Error::EmptyPalette);
        }
        Ok(())
    }
}
