//! Players driven by closures and fixed scripts.

use std::collections::VecDeque;

use thiserror::Error;

use crate::core::{GameEvent, PlayerId};
use crate::error::PlayerError;

use super::Player;

/// A player whose events come from a closure.
///
/// The closure receives the player's own id, so the same closure can serve
/// several players.
///
/// ```
/// use pool_score::core::{GameEvent, PlayerId};
/// use pool_score::players::{FnPlayer, Player};
///
/// let mut john = FnPlayer::new(PlayerId::new(0), "John", |me| Ok(GameEvent::new(me, 15)));
///
/// assert_eq!(john.name(), "John");
/// assert_eq!(john.next_event().unwrap().player, PlayerId::new(0));
/// ```
pub struct FnPlayer<F> {
    id: PlayerId,
    name: String,
    produce: F,
}

impl<F> FnPlayer<F>
where
    F: FnMut(PlayerId) -> Result<GameEvent, PlayerError>,
{
    pub fn new(id: PlayerId, name: impl Into<String>, produce: F) -> Self {
        Self {
            id,
            name: name.into(),
            produce,
        }
    }
}

impl<F> Player for FnPlayer<F>
where
    F: FnMut(PlayerId) -> Result<GameEvent, PlayerError>,
{
    fn id(&self) -> PlayerId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn next_event(&mut self) -> Result<GameEvent, PlayerError> {
        (self.produce)(self.id)
    }
}

impl<F> std::fmt::Debug for FnPlayer<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnPlayer")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Raised when a [`ScriptedPlayer`] is asked for more turns than it has.
#[derive(Debug, Error)]
#[error("{0} has no scripted events left")]
pub struct ScriptExhausted(pub PlayerId);

/// A player that replays a fixed list of events.
#[derive(Clone, Debug)]
pub struct ScriptedPlayer {
    id: PlayerId,
    name: String,
    script: VecDeque<GameEvent>,
}

impl ScriptedPlayer {
    pub fn new(id: PlayerId, script: impl IntoIterator<Item = GameEvent>) -> Self {
        Self {
            id,
            name: String::new(),
            script: script.into_iter().collect(),
        }
    }

    /// Set the display name (builder pattern).
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Events not yet played.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Player for ScriptedPlayer {
    fn id(&self) -> PlayerId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn next_event(&mut self) -> Result<GameEvent, PlayerError> {
        self.script
            .pop_front()
            .ok_or_else(|| ScriptExhausted(self.id).into())
    }
}
