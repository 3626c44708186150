//! # pool-score
//!
//! A scoring engine for two-player straight pool matches.
//!
//! ## Design Principles
//!
//! 1. **The log is the truth**: A match is an ordered list of turn-ending
//!    `GameEvent`s. Every score is derived from that list and nothing else.
//!
//! 2. **Independent rules**: Each `ScoringRule` scores the whole log on its
//!    own. Their `Scoreboard`s are folded together with `Scoreboard::add`.
//!
//! 3. **Trusted input**: Ball counts are not checked for plausibility. A
//!    malformed log produces odd scores, not errors.
//!
//! ## Modules
//!
//! - `core`: Player ids, events, scoreboards, scoring configuration, RNG
//! - `rules`: The `ScoringRule` trait, potting and foul rules, aggregation
//! - `players`: The `Player` collaborator trait and ready-made players
//! - `game`: The two-player turn loop
//! - `error`: Error types

pub mod core;
pub mod error;
pub mod rules;
pub mod players;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    EventType, GameEvent, GameResult, GameRng, PlayerId, Scoreboard, ScoringConfig, RACK_SIZE,
};

pub use crate::error::{GameError, PlayerError, Result};

pub use crate::rules::{aggregate, FoulRule, PottingRule, ScoringRule};

pub use crate::players::{
    FnPlayer, Player, ScriptExhausted, ScriptedPlayer, SimulatedPlayer, SimulationConfig, Table,
};

pub use crate::game::{Game, GameStatus};
