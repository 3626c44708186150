//! Turn loop and score aggregation.

use log::{debug, info, warn};
use smallvec::SmallVec;

use crate::core::{GameEvent, GameResult, ScoringConfig, Scoreboard};
use crate::error::{GameError, Result};
use crate::players::Player;
use crate::rules::{aggregate, FoulRule, PottingRule, ScoringRule};

/// Players in a match.
const ROSTER_SIZE: usize = 2;

/// Where a match is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// `start()` has not been called yet.
    NotStarted,
    /// Turns are being played.
    Running,
    /// A player returned `EndGame`.
    Finished,
    /// A player failed; the log holds the turns played before the failure.
    Aborted,
}

/// A two-player match.
///
/// ## Example
///
/// ```
/// use pool_score::core::{GameEvent, PlayerId};
/// use pool_score::game::{Game, GameStatus};
/// use pool_score::players::{Player, ScriptedPlayer};
///
/// let a = PlayerId::new(0);
/// let b = PlayerId::new(1);
///
/// let players: Vec<Box<dyn Player>> = vec![
///     Box::new(ScriptedPlayer::new(a, [GameEvent::new(a, 12), GameEvent::end_game(a, 12)])),
///     Box::new(ScriptedPlayer::new(b, [GameEvent::foul(b, 12)])),
/// ];
///
/// let mut game = Game::standard(players);
/// game.start().unwrap();
///
/// assert_eq!(game.status(), GameStatus::Finished);
/// assert_eq!(game.events().len(), 3);
///
/// let score = game.calculate_score().unwrap();
/// assert_eq!(score.get_score(a), Some(3));
/// assert_eq!(score.get_score(b), Some(-1));
/// ```
pub struct Game {
    players: Vec<Box<dyn Player>>,
    rules: SmallVec<[Box<dyn ScoringRule>; 2]>,
    events: Vec<GameEvent>,
    status: GameStatus,
    turn: usize,
}

impl Game {
    /// Create a match with no scoring rules.
    ///
    /// The roster is checked by [`Game::start`], not here.
    pub fn new(players: Vec<Box<dyn Player>>) -> Self {
        Self {
            players,
            rules: SmallVec::new(),
            events: Vec::new(),
            status: GameStatus::NotStarted,
            turn: 0,
        }
    }

    /// Create a match scored by potting and fouls with standard values.
    pub fn standard(players: Vec<Box<dyn Player>>) -> Self {
        Self::with_config(players, &ScoringConfig::default())
    }

    /// Create a match scored by potting and fouls with the given values.
    pub fn with_config(players: Vec<Box<dyn Player>>, config: &ScoringConfig) -> Self {
        Self::new(players)
            .with_rule(PottingRule::with_config(config))
            .with_rule(FoulRule::with_config(config))
    }

    /// Add a scoring rule (builder pattern).
    #[must_use]
    pub fn with_rule(mut self, rule: impl ScoringRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Add boxed scoring rules (builder pattern).
    #[must_use]
    pub fn with_rules(mut self, rules: impl IntoIterator<Item = Box<dyn ScoringRule>>) -> Self {
        self.rules.extend(rules);
        self
    }

    #[must_use]
    pub fn players(&self) -> &[Box<dyn Player>] {
        &self.players
    }

    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// The event log, oldest first.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of turns played so far.
    #[must_use]
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Play the match.
    ///
    /// Validates the roster, then alternates turns starting with the first
    /// player until one of them returns `EndGame`. No player is asked for an
    /// event after that.
    ///
    /// A roster error is returned before any turn is played. A player error
    /// aborts the match; the turns played so far stay in [`Game::events`].
    pub fn start(&mut self) -> Result<()> {
        if self.status != GameStatus::NotStarted {
            return Err(GameError::AlreadyStarted);
        }
        self.validate_roster()?;

        self.status = GameStatus::Running;
        info!(
            "match started: {} vs {}",
            describe(self.players[0].as_ref()),
            describe(self.players[1].as_ref())
        );

        loop {
            let event = match self.play_turn() {
                Ok(event) => event,
                Err(err) => {
                    warn!("match aborted after {} turns: {}", self.turn, err);
                    self.status = GameStatus::Aborted;
                    return Err(err);
                }
            };

            if event.is_end() {
                break;
            }
        }

        self.status = GameStatus::Finished;
        info!("match finished after {} turns", self.turn);
        Ok(())
    }

    /// Score the event log with every configured rule.
    ///
    /// Can be called at any point, including after an aborted match.
    pub fn calculate_score(&self) -> Result<Scoreboard> {
        aggregate(self.rules.as_slice(), &self.events)
    }

    /// Decide the match from the current score.
    pub fn result(&self) -> Result<Option<GameResult>> {
        Ok(self.calculate_score()?.result())
    }

    fn validate_roster(&self) -> Result<()> {
        if self.players.len() != ROSTER_SIZE {
            return Err(GameError::WrongPlayerCount {
                found: self.players.len(),
            });
        }

        let first = self.players[0].id();
        if self.players[1].id() == first {
            return Err(GameError::DuplicatePlayer(first));
        }

        Ok(())
    }

    fn play_turn(&mut self) -> Result<GameEvent> {
        let active = &mut self.players[self.turn % ROSTER_SIZE];
        let expected = active.id();

        let event = active
            .next_event()
            .map_err(|source| GameError::Player {
                player: expected,
                source,
            })?;

        if event.player != expected {
            return Err(GameError::ForeignEvent {
                expected,
                found: event.player,
            });
        }

        debug!("turn {}: {}", self.turn, event);
        self.events.push(event);
        self.turn += 1;
        Ok(event)
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let players: Vec<_> = self.players.iter().map(|p| p.id()).collect();
        f.debug_struct("Game")
            .field("players", &players)
            .field("rules", &self.rules.len())
            .field("events", &self.events.len())
            .field("status", &self.status)
            .finish()
    }
}

fn describe(player: &dyn Player) -> String {
    if player.name().is_empty() {
        player.id().to_string()
    } else {
        format!("{} ({})", player.name(), player.id())
    }
}
