//! The scoring rule trait and score aggregation.

use crate::core::{GameEvent, Scoreboard};
use crate::error::{GameError, Result};

/// A scoring rule.
///
/// `apply` must be a pure function of the event slice: no state survives
/// between calls, and the input is never modified. Rules are `Send + Sync`
/// so several can be evaluated in parallel over the same log.
///
/// Plain functions and closures with the right signature are rules too.
pub trait ScoringRule: Send + Sync {
    /// Score the events, oldest first.
    fn apply(&self, events: &[GameEvent]) -> Scoreboard;

    /// Name used in logs.
    fn name(&self) -> &str {
        "rule"
    }
}

impl<F> ScoringRule for F
where
    F: Fn(&[GameEvent]) -> Scoreboard + Send + Sync,
{
    fn apply(&self, events: &[GameEvent]) -> Scoreboard {
        self(events)
    }
}

/// Apply every rule to the same events and fold the boards left to right.
///
/// Fails with [`GameError::NoRules`] when `rules` is empty: there is no
/// neutral board to start the fold from.
pub fn aggregate<R>(rules: &[R], events: &[GameEvent]) -> Result<Scoreboard>
where
    R: AsRef<dyn ScoringRule>,
{
    let mut boards = rules.iter().map(|rule| {
        let rule = rule.as_ref();
        let board = rule.apply(events);
        log::trace!("{} scored {} events: {}", rule.name(), events.len(), board);
        board
    });

    let first = boards.next().ok_or(GameError::NoRules)?;
    Ok(boards.fold(first, |total, board| total.add(&board)))
}
