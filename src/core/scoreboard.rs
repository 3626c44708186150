//! Per-player score snapshots.
//!
//! A `Scoreboard` is what a scoring rule produces. It is immutable: merging
//! two boards with [`Scoreboard::add`] builds a new one and leaves both
//! operands untouched. Backed by an `im::OrdMap`, so clones are O(1) and
//! iteration is ordered by player.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Outcome of a finished match, read off a scoreboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single highest score.
    Winner(PlayerId),
    /// Two or more players share the highest score.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }
}

/// Immutable mapping of player to score.
///
/// A player with no entry has no score at all, which is different from a
/// score of zero.
///
/// ## Example
///
/// ```
/// use pool_score::core::{PlayerId, Scoreboard};
///
/// let a = PlayerId::new(0);
/// let b = PlayerId::new(1);
///
/// let potting: Scoreboard = [(a, 10), (b, 5)].into_iter().collect();
/// let fouls: Scoreboard = [(b, -2)].into_iter().collect();
///
/// let total = potting.add(&fouls);
/// assert_eq!(total.get_score(a), Some(10));
/// assert_eq!(total.get_score(b), Some(3));
/// assert_eq!(total.get_score(PlayerId::new(2)), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    scores: OrdMap<PlayerId, i64>,
}

impl Scoreboard {
    /// Create an empty scoreboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a player's score, or `None` if the player has no entry.
    #[must_use]
    pub fn get_score(&self, player: PlayerId) -> Option<i64> {
        self.scores.get(&player).copied()
    }

    /// Check if the player has an entry.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        self.scores.contains_key(&player)
    }

    /// Merge two scoreboards into a new one.
    ///
    /// Players on both boards get the sum of their scores. Players on only
    /// one board keep their score. Neither `self` nor `other` changes.
    #[must_use]
    pub fn add(&self, other: &Scoreboard) -> Scoreboard {
        let scores = self
            .scores
            .clone()
            .union_with(other.scores.clone(), |ours, theirs| ours + theirs);
        Self { scores }
    }

    /// Return a copy with `player` set to `score`.
    #[must_use]
    pub fn with_score(&self, player: PlayerId, score: i64) -> Scoreboard {
        Self {
            scores: self.scores.update(player, score),
        }
    }

    /// Iterate over `(player, score)` pairs in player order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, i64)> + '_ {
        self.scores.iter().map(|(p, s)| (*p, *s))
    }

    /// Iterate over the players with an entry.
    pub fn players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.scores.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Sum of all scores on the board.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.scores.values().sum()
    }

    /// Decide the match from this board.
    ///
    /// Returns `None` for an empty board.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        let best = self.scores.values().max()?;
        let mut leaders = self.iter().filter(|(_, score)| score == best);

        match (leaders.next(), leaders.next()) {
            (Some((winner, _)), None) => Some(GameResult::Winner(winner)),
            _ => Some(GameResult::Draw),
        }
    }
}

impl FromIterator<(PlayerId, i64)> for Scoreboard {
    fn from_iter<I: IntoIterator<Item = (PlayerId, i64)>>(iter: I) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}

impl<'a> std::ops::Add<&'a Scoreboard> for &'a Scoreboard {
    type Output = Scoreboard;

    fn add(self, other: &'a Scoreboard) -> Scoreboard {
        Scoreboard::add(self, other)
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (player, score) in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", player, score)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: PlayerId = PlayerId::new(0);
    const B: PlayerId = PlayerId::new(1);
    const C: PlayerId = PlayerId::new(2);

    fn board(entries: &[(PlayerId, i64)]) -> Scoreboard {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_get_score() {
        let sut = board(&[(A, 0), (B, 50)]);

        assert_eq!(sut.get_score(A), Some(0));
        assert_eq!(sut.get_score(B), Some(50));
        assert_eq!(sut.get_score(C), None);
        assert!(sut.contains(A));
        assert!(!sut.contains(C));
    }

    #[test]
    fn test_add_disjoint() {
        let left = board(&[(A, 3)]);
        let right = board(&[(B, -1)]);

        let sum = left.add(&right);
        assert_eq!(sum.len(), 2);
        assert_eq!(sum.get_score(A), Some(3));
        assert_eq!(sum.get_score(B), Some(-1));
    }

    #[test]
    fn test_add_overlapping() {
        let left = board(&[(A, 3), (B, 11)]);
        let right = board(&[(A, 0), (B, -17), (C, 4)]);

        let sum = left.add(&right);
        assert_eq!(sum.get_score(A), Some(3));
        assert_eq!(sum.get_score(B), Some(-6));
        assert_eq!(sum.get_score(C), Some(4));
        assert_eq!(sum, right.add(&left));
    }

    #[test]
    fn test_add_does_not_mutate_operands() {
        let left = board(&[(A, 3), (B, 11)]);
        let right = board(&[(B, -1)]);
        let left_before = left.clone();
        let right_before = right.clone();

        let _ = left.add(&right);
        let _ = &left + &right;

        assert_eq!(left, left_before);
        assert_eq!(right, right_before);
    }

    #[test]
    fn test_add_empty() {
        let sut = board(&[(A, 3)]);
        assert_eq!(sut.add(&Scoreboard::new()), sut);
        assert_eq!(Scoreboard::new().add(&sut), sut);
    }

    #[test]
    fn test_with_score() {
        let sut = board(&[(A, 3)]);
        let updated = sut.with_score(B, 7);

        assert_eq!(sut.get_score(B), None);
        assert_eq!(updated.get_score(B), Some(7));
    }

    #[test]
    fn test_iteration_is_ordered() {
        let sut = board(&[(C, 1), (A, 2), (B, 3)]);
        let players: Vec<_> = sut.players().collect();
        assert_eq!(players, vec![A, B, C]);
        assert_eq!(sut.total(), 6);
    }

    #[test]
    fn test_result() {
        assert_eq!(Scoreboard::new().result(), None);

        let win = board(&[(A, 10), (B, 4)]);
        assert_eq!(win.result(), Some(GameResult::Winner(A)));
        assert!(win.result().unwrap().is_winner(A));

        let draw = board(&[(A, 4), (B, 4)]);
        assert_eq!(draw.result(), Some(GameResult::Draw));
        assert!(!draw.result().unwrap().is_winner(A));
    }

    #[test]
    fn test_display() {
        let sut = board(&[(B, -2), (A, 10)]);
        assert_eq!(sut.to_string(), "Player 0: 10, Player 1: -2");
    }
}
