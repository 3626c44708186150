//! Turn-ending events.
//!
//! A match is recorded as one `GameEvent` per turn: who was at the table,
//! how many balls were left when the turn ended, and why it ended. Rules
//! derive every score from this log alone.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Why a turn ended.
///
/// `EndGame` is the sentinel a player returns to finish the match. It has
/// no scoring meaning of its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// The shooter missed; any balls potted before the miss still count.
    #[default]
    MissedBall,
    /// The shooter committed a foul.
    Foul,
    /// A defensive shot: nothing potted, no foul.
    Safety,
    /// The rack was cleared down to one ball and the balls were re-racked.
    NewRack,
    /// The match is over.
    EndGame,
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EventType::MissedBall => "MissedBall",
            EventType::Foul => "Foul",
            EventType::Safety => "Safety",
            EventType::NewRack => "NewRack",
            EventType::EndGame => "EndGame",
        };
        f.write_str(name)
    }
}

/// The outcome of one turn.
///
/// `balls_on_table` is the table as it stood when the turn ended. For a
/// `NewRack` event the value is not used by the potting rule: the table is
/// always full again after a re-rack.
///
/// ## Example
///
/// ```
/// use pool_score::core::{EventType, GameEvent, PlayerId};
///
/// let miss = GameEvent::new(PlayerId::new(0), 12);
/// assert_eq!(miss.event_type, EventType::MissedBall);
///
/// let foul = GameEvent::foul(PlayerId::new(1), 12);
/// assert!(foul.is_foul());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameEvent {
    /// The player whose turn ended.
    pub player: PlayerId,

    /// Balls left on the table at the end of the turn.
    pub balls_on_table: u8,

    /// Why the turn ended.
    #[serde(default)]
    pub event_type: EventType,
}

impl GameEvent {
    /// Create an ordinary missed-ball event.
    #[must_use]
    pub const fn new(player: PlayerId, balls_on_table: u8) -> Self {
        Self::with_type(player, balls_on_table, EventType::MissedBall)
    }

    /// Create an event with an explicit type.
    #[must_use]
    pub const fn with_type(player: PlayerId, balls_on_table: u8, event_type: EventType) -> Self {
        Self {
            player,
            balls_on_table,
            event_type,
        }
    }

    #[must_use]
    pub const fn foul(player: PlayerId, balls_on_table: u8) -> Self {
        Self::with_type(player, balls_on_table, EventType::Foul)
    }

    #[must_use]
    pub const fn safety(player: PlayerId, balls_on_table: u8) -> Self {
        Self::with_type(player, balls_on_table, EventType::Safety)
    }

    /// Create a re-rack event. The table is full again afterwards.
    #[must_use]
    pub const fn new_rack(player: PlayerId, balls_on_table: u8) -> Self {
        Self::with_type(player, balls_on_table, EventType::NewRack)
    }

    #[must_use]
    pub const fn end_game(player: PlayerId, balls_on_table: u8) -> Self {
        Self::with_type(player, balls_on_table, EventType::EndGame)
    }

    #[must_use]
    pub fn is_foul(&self) -> bool {
        self.event_type == EventType::Foul
    }

    /// Check if this event finishes the match.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.event_type == EventType::EndGame
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} ({} on table)",
            self.player, self.event_type, self.balls_on_table
        )
    }
}
