//! Match Configuration
//!
//! Tuning knobs for combat resolution, the hit-reaction effect, and the pose
//! animator. Defaults mirror the values the game shipped with; a config is
//! validated once before a match starts, and the simulation itself never
//! errors after that.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error raised by [`MatchConfig::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A duration that must be strictly positive was zero or negative.
    #[error("{name} must be > 0 (got {value})")]
    NonPositiveDuration {
        /// Which field was rejected
        name: &'static str,
        /// Offending value
        value: f32,
    },

    /// The hit reaction must flash at least once.
    #[error("flash_count must be >= 1")]
    ZeroFlashCount,

    /// Punch range must be strictly positive.
    #[error("punch_range must be > 0 (got {0})")]
    NonPositiveRange(f32),
}

/// Configuration for the hit-reaction effect.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ReactionConfig {
    /// Total effect duration in seconds
    pub duration: f32,
    /// Instantaneous displacement applied away from the attacker at start
    pub knockback_distance: f32,
    /// Number of full flashes (each flash is one off + one on step)
    pub flash_count: u32,
    /// Maximum shake offset magnitude per axis, before decay
    pub shake_intensity: f32,
}

impl Default for ReactionConfig {
    fn default() -> Self {
        Self {
            duration: 0.5,
            knockback_distance: 0.4,
            flash_count: 3,
            shake_intensity: 0.06,
        }
    }
}

/// Configuration for a match.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Horizontal movement speed in units per second
    pub move_speed: f32,
    /// Maximum distance at which a punch can land (and a block engages)
    pub punch_range: f32,
    /// Exponential approach rate for pose scale smoothing
    pub visual_smoothing: f32,
    /// Pose animation frame rate
    pub animation_fps: f32,
    /// Seconds the punching pose is held after an attack attempt
    pub punch_duration: f32,
    /// Seconds a fighter stays dazed after taking a hit
    pub daze_duration: f32,
    /// Hits taken before a fighter is downed and the match ends
    pub max_hits_to_down: u32,
    /// Countdown length before the match goes live, in ticks
    pub countdown_ticks: u32,
    /// Hit-reaction effect tuning
    pub reaction: ReactionConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            move_speed: 6.0,
            punch_range: 1.2,
            visual_smoothing: 12.0,
            animation_fps: 3.33,
            punch_duration: 0.35,
            daze_duration: 0.9,
            max_hits_to_down: 5,
            countdown_ticks: 180, // 3 seconds at 60 Hz
            reaction: ReactionConfig::default(),
        }
    }
}

impl MatchConfig {
    /// Validate the configuration.
    ///
    /// Rejects values that would break the simulation's invariants (a
    /// zero-length reaction would divide by zero in the flash interval,
    /// a non-positive range makes every attack whiff forever).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reaction.duration <= 0.0 {
            return Err(ConfigError::NonPositiveDuration {
                name: "reaction.duration",
                value: self.reaction.duration,
            });
        }
        if self.punch_duration <= 0.0 {
            return Err(ConfigError::NonPositiveDuration {
                name: "punch_duration",
                value: self.punch_duration,
            });
        }
        if self.reaction.flash_count == 0 {
            return Err(ConfigError::ZeroFlashCount);
        }
        if self.punch_range <= 0.0 {
            return Err(ConfigError::NonPositiveRange(self.punch_range));
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(MatchConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_non_positive_reaction_duration() {
        let mut config = MatchConfig::default();
        config.reaction.duration = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveDuration {
                name: "reaction.duration",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_zero_flash_count() {
        let mut config = MatchConfig::default();
        config.reaction.flash_count = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroFlashCount));
    }

    #[test]
    fn test_rejects_non_positive_punch_range() {
        let mut config = MatchConfig::default();
        config.punch_range = -1.0;
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveRange(-1.0)));
    }
}
