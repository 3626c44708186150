//! Foul penalties.

use rustc_hash::FxHashMap;

use crate::core::{GameEvent, PlayerId, ScoringConfig, Scoreboard};

use super::rule::ScoringRule;

/// Penalizes fouls, escalating for consecutive fouls by the same player.
///
/// Each player has their own streak. Only the acting player's streak is
/// touched by an event, so an opponent's turn in between does not break it.
///
/// | foul                                   | penalty (default) |
/// |----------------------------------------|-------------------|
/// | streak reaches the threshold or beyond | -15               |
/// | first event of the whole match         | -2                |
/// | any other                              | -1                |
///
/// The streak is not reset by the repeat penalty: every further consecutive
/// foul costs the repeat penalty again. The opening penalty looks at the
/// event's position in the log, not at the player's first turn.
#[derive(Clone, Debug)]
pub struct FoulRule {
    opening_penalty: i64,
    penalty: i64,
    repeat_penalty: i64,
    repeat_threshold: u32,
}

#[derive(Default)]
struct FoulTally {
    score: i64,
    consecutive: u32,
}

impl Default for FoulRule {
    fn default() -> Self {
        Self::with_config(&ScoringConfig::default())
    }
}

impl FoulRule {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: &ScoringConfig) -> Self {
        Self {
            opening_penalty: config.opening_foul_penalty,
            penalty: config.foul_penalty,
            repeat_penalty: config.repeat_foul_penalty,
            repeat_threshold: config.repeat_foul_threshold,
        }
    }
}

impl ScoringRule for FoulRule {
    fn apply(&self, events: &[GameEvent]) -> Scoreboard {
        let mut tallies: FxHashMap<PlayerId, FoulTally> = FxHashMap::default();

        for (position, event) in events.iter().enumerate() {
            let tally = tallies.entry(event.player).or_default();

            if !event.is_foul() {
                tally.consecutive = 0;
                continue;
            }

            tally.consecutive += 1;
            tally.score += if tally.consecutive >= self.repeat_threshold {
                self.repeat_penalty
            } else if position == 0 {
                self.opening_penalty
            } else {
                self.penalty
            };
        }

        tallies
            .into_iter()
            .map(|(player, tally)| (player, tally.score))
            .collect()
    }

    fn name(&self) -> &str {
        "fouls"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: PlayerId = PlayerId::new(0);
    const B: PlayerId = PlayerId::new(1);

    #[test]
    fn test_opening_foul_costs_two() {
        let board = FoulRule::new().apply(&[GameEvent::foul(A, 15)]);
        assert_eq!(board.get_score(A), Some(-2));
    }

    #[test]
    fn test_later_foul_costs_one() {
        let board = FoulRule::new().apply(&[GameEvent::new(A, 10), GameEvent::foul(B, 9)]);
        assert_eq!(board.get_score(A), Some(0));
        assert_eq!(board.get_score(B), Some(-1));
    }

    #[test]
    fn test_three_consecutive_fouls() {
        let events = [
            GameEvent::new(A, 10),
            GameEvent::foul(B, 9),
            GameEvent::safety(A, 10),
            GameEvent::foul(B, 9),
            GameEvent::safety(A, 10),
            GameEvent::foul(B, 9),
        ];

        let board = FoulRule::new().apply(&events);
        assert_eq!(board.get_score(A), Some(0));
        assert_eq!(board.get_score(B), Some(-17));
    }

    #[test]
    fn test_streak_keeps_escalating() {
        let events = [
            GameEvent::new(A, 10),
            GameEvent::foul(B, 10),
            GameEvent::foul(B, 10),
            GameEvent::foul(B, 10),
            GameEvent::foul(B, 10),
        ];

        let board = FoulRule::new().apply(&events);
        assert_eq!(board.get_score(B), Some(-1 - 1 - 15 - 15));
    }

    #[test]
    fn test_own_non_foul_resets_streak() {
        let events = [
            GameEvent::new(A, 10),
            GameEvent::foul(B, 10),
            GameEvent::foul(B, 10),
            GameEvent::new(B, 8),
            GameEvent::foul(B, 8),
        ];

        let board = FoulRule::new().apply(&events);
        assert_eq!(board.get_score(B), Some(-3));
    }

    #[test]
    fn test_opening_is_global_position() {
        // B's first turn is not the first event of the match.
        let events = [GameEvent::foul(A, 15), GameEvent::foul(B, 15)];

        let board = FoulRule::new().apply(&events);
        assert_eq!(board.get_score(A), Some(-2));
        assert_eq!(board.get_score(B), Some(-1));
    }

    #[test]
    fn test_opening_foul_counts_toward_streak() {
        let events = [
            GameEvent::foul(A, 15),
            GameEvent::foul(A, 15),
            GameEvent::foul(A, 15),
        ];

        let board = FoulRule::new().apply(&events);
        assert_eq!(board.get_score(A), Some(-2 - 1 - 15));
    }

    #[test]
    fn test_empty_events() {
        assert!(FoulRule::new().apply(&[]).is_empty());
    }

    #[test]
    fn test_custom_penalties() {
        let config = ScoringConfig::new()
            .with_opening_foul_penalty(-4)
            .with_foul_penalty(-2)
            .with_repeat_foul(2, -10);
        let sut = FoulRule::with_config(&config);

        let board = sut.apply(&[GameEvent::foul(A, 15), GameEvent::foul(A, 15)]);
        assert_eq!(board.get_score(A), Some(-14));
    }
}
