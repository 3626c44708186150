//! Player collaborators.
//!
//! The `Game` driver knows a player only through the [`Player`] trait: a
//! stable identity and a way to ask for the next turn's event. Who decides
//! what happens on the table (a person at a terminal, a script, a
//! simulation) is up to the implementation.
//!
//! - [`FnPlayer`]: events come from a closure
//! - [`ScriptedPlayer`]: replays a fixed list of events
//! - [`SimulatedPlayer`]: seeded random play on a shared [`Table`]

mod scripted;
mod simulated;

pub use scripted::{FnPlayer, ScriptExhausted, ScriptedPlayer};
pub use simulated::{SimulatedPlayer, SimulationConfig, Table};

use crate::core::{GameEvent, PlayerId};
use crate::error::PlayerError;

/// A participant in a match.
///
/// ## Contract
///
/// - `id` never changes for the lifetime of the player.
/// - `next_event` returns the outcome of the player's turn. The event's
///   `player` must equal `id()`.
/// - Returning `EndGame` finishes the match. A player that never does so
///   keeps the match running forever.
/// - An error aborts the match; it is not retried.
pub trait Player {
    /// The player's identity.
    fn id(&self) -> PlayerId;

    /// Display name. Not used for scoring.
    fn name(&self) -> &str {
        ""
    }

    /// Play a turn and report how it ended.
    fn next_event(&mut self) -> Result<GameEvent, PlayerError>;
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn id(&self) -> PlayerId {
        (**self).id()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn next_event(&mut self) -> Result<GameEvent, PlayerError> {
        (**self).next_event()
    }
}
