//! Points for potted balls.

use rustc_hash::FxHashMap;

use crate::core::{EventType, GameEvent, PlayerId, ScoringConfig, Scoreboard};

use super::rule::ScoringRule;

/// Credits each player with the balls that left the table on their turn.
///
/// The rule keeps a running count of balls on the table, starting from a
/// full rack. An ordinary event credits the difference between the running
/// count and the event's snapshot. A `NewRack` event credits every ball but
/// the one left standing for the re-rack, then refills the table.
///
/// Snapshots are trusted: a count that goes up yields a negative credit.
#[derive(Clone, Debug)]
pub struct PottingRule {
    rack_size: u8,
}

impl Default for PottingRule {
    fn default() -> Self {
        Self::with_config(&ScoringConfig::default())
    }
}

impl PottingRule {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: &ScoringConfig) -> Self {
        Self {
            rack_size: config.rack_size,
        }
    }
}

impl ScoringRule for PottingRule {
    fn apply(&self, events: &[GameEvent]) -> Scoreboard {
        let full_rack = i64::from(self.rack_size);
        let mut on_table = full_rack;
        let mut scores: FxHashMap<PlayerId, i64> = FxHashMap::default();

        for event in events {
            let score = scores.entry(event.player).or_insert(0);

            if event.event_type == EventType::NewRack {
                *score += on_table - 1;
                on_table = full_rack;
            } else {
                let remaining = i64::from(event.balls_on_table);
                *score += on_table - remaining;
                on_table = remaining;
            }
        }

        scores.into_iter().collect()
    }

    fn name(&self) -> &str {
        "potting"
    }
}
