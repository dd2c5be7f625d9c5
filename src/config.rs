//! Game configuration.
//!
//! There are no user-facing knobs: `GameConfig::default()` is what the
//! binary plays. Tests build smaller streets through the same type.

use crate::core::constants::*;
use crate::error::ConfigError;
use std::time::Duration;

/// Smallest street that still has a start row distinct from the far wall.
pub const MIN_WIDTH: usize = 1;
pub const MIN_HEIGHT: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub initial_interval: Duration,
    /// Pause between detecting a collision and applying the loss reset.
    pub loss_grace: Duration,
    pub frame_interval: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: STREET_WIDTH,
            height: STREET_HEIGHT,
            initial_interval: Duration::from_millis(INITIAL_TICK_INTERVAL_MS),
            loss_grace: Duration::from_millis(LOSS_GRACE_MS),
            frame_interval: Duration::from_millis(FRAME_INTERVAL_MS),
        }
    }
}

impl GameConfig {
    /// Config with the default timings and the given street size.
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_WIDTH {
            return Err(ConfigError::TooNarrow {
                min: MIN_WIDTH,
                value: self.width,
            });
        }
        if self.height < MIN_HEIGHT {
            return Err(ConfigError::TooShort {
                min: MIN_HEIGHT,
                value: self.height,
            });
        }
        if self.initial_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.frame_interval.is_zero() {
            return Err(ConfigError::ZeroFrameInterval);
        }
        Ok(())
    }

    /// Number of advances applied before the street becomes visible.
    pub fn warmup_passes(&self) -> usize {
        self.width * WARMUP_PASSES_PER_COLUMN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_fixed_constants() {
        let config = GameConfig::default();
        assert_eq!(config.width, 80);
        assert_eq!(config.height, 12);
        assert_eq!(config.initial_interval, Duration::from_millis(1000));
        assert_eq!(config.loss_grace, Duration::from_millis(50));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_warmup_is_three_passes_per_column() {
        assert_eq!(GameConfig::default().warmup_passes(), 240);
        assert_eq!(GameConfig::with_size(10, 4).warmup_passes(), 30);
    }

    #[test]
    fn test_rejects_degenerate_streets() {
        assert_eq!(
            GameConfig::with_size(0, 12).validate(),
            Err(ConfigError::TooNarrow { min: 1, value: 0 })
        );
        assert_eq!(
            GameConfig::with_size(80, 1).validate(),
            Err(ConfigError::TooShort { min: 2, value: 1 })
        );
    }

    #[test]
    fn test_rejects_zero_intervals() {
        let mut config = GameConfig::default();
        config.initial_interval = Duration::ZERO;
        assert_eq!(config.validate(), Err(ConfigError::ZeroTickInterval));

        let mut config = GameConfig::default();
        config.frame_interval = Duration::ZERO;
        assert_eq!(config.validate(), Err(ConfigError::ZeroFrameInterval));
    }
}
