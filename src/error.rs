//! Errors raised while running a match.

use thiserror::Error;

use crate::core::PlayerId;

/// Error type a player collaborator may fail with.
pub type PlayerError = Box<dyn std::error::Error + Send + Sync>;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid roster: expected 2 players, found {found}")]
    WrongPlayerCount { found: usize },

    #[error("invalid roster: {0} appears more than once")]
    DuplicatePlayer(PlayerId),

    #[error("game already started")]
    AlreadyStarted,

    #[error("{player} failed to produce an event")]
    Player {
        player: PlayerId,
        #[source]
        source: PlayerError,
    },

    #[error("{expected} produced an event for {found}")]
    ForeignEvent { expected: PlayerId, found: PlayerId },

    #[error("no scoring rules configured")]
    NoRules,
}

impl GameError {
    /// Roster problems are detected before any turn is played.
    pub fn is_invalid_roster(&self) -> bool {
        matches!(
            self,
            GameError::WrongPlayerCount { .. } | GameError::DuplicatePlayer(_)
        )
    }

    /// Errors that abort a match that was already running.
    pub fn is_collaborator_failure(&self) -> bool {
        matches!(self, GameError::Player { .. } | GameError::ForeignEvent { .. })
    }
}
