//! Scoring configuration.
//!
//! The rules read their constants from a `ScoringConfig` instead of
//! hardcoding them. The defaults are the standard straight pool values.

use serde::{Deserialize, Serialize};

/// Balls in a full rack.
pub const RACK_SIZE: u8 = 15;

/// Constants used by the scoring rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Balls on the table after a (re-)rack.
    pub rack_size: u8,

    /// Penalty for a foul on the very first event of the match.
    pub opening_foul_penalty: i64,

    /// Penalty for an ordinary foul.
    pub foul_penalty: i64,

    /// Penalty applied once a player's consecutive foul count reaches
    /// `repeat_foul_threshold`, and on every further consecutive foul.
    pub repeat_foul_penalty: i64,

    /// Consecutive fouls needed before `repeat_foul_penalty` applies.
    pub repeat_foul_threshold: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            rack_size: RACK_SIZE,
            opening_foul_penalty: -2,
            foul_penalty: -1,
            repeat_foul_penalty: -15,
            repeat_foul_threshold: 3,
        }
    }
}

impl ScoringConfig {
    /// Create a config with the standard values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rack size.
    #[must_use]
    pub fn with_rack_size(mut self, rack_size: u8) -> Self {
        self.rack_size = rack_size;
        self
    }

    /// Set the opening foul penalty.
    #[must_use]
    pub fn with_opening_foul_penalty(mut self, penalty: i64) -> Self {
        self.opening_foul_penalty = penalty;
        self
    }

    /// Set the ordinary foul penalty.
    #[must_use]
    pub fn with_foul_penalty(mut self, penalty: i64) -> Self {
        self.foul_penalty = penalty;
        self
    }

    /// Set the penalty and threshold for repeated consecutive fouls.
    #[must_use]
    pub fn with_repeat_foul(mut self, threshold: u32, penalty: i64) -> Self {
        self.repeat_foul_threshold = threshold;
        self.repeat_foul_penalty = penalty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScoringConfig::default();
        assert_eq!(config.rack_size, 15);
        assert_eq!(config.opening_foul_penalty, -2);
        assert_eq!(config.foul_penalty, -1);
        assert_eq!(config.repeat_foul_penalty, -15);
        assert_eq!(config.repeat_foul_threshold, 3);
    }

    #[test]
    fn test_builder() {
        let config = ScoringConfig::new()
            .with_rack_size(9)
            .with_opening_foul_penalty(-3)
            .with_foul_penalty(-2)
            .with_repeat_foul(2, -10);

        assert_eq!(config.rack_size, 9);
        assert_eq!(config.opening_foul_penalty, -3);
        assert_eq!(config.foul_penalty, -2);
        assert_eq!(config.repeat_foul_threshold, 2);
        assert_eq!(config.repeat_foul_penalty, -10);
    }

    #[test]
    fn test_serialization() {
        let config = ScoringConfig::new().with_rack_size(10);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ScoringConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ScoringConfig = serde_json::from_str(r#"{"foul_penalty": -5}"#).unwrap();
        assert_eq!(config.foul_penalty, -5);
        assert_eq!(config.rack_size, RACK_SIZE);
    }
}
