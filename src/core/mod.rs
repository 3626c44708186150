//! Core engine types: players, events, scoreboards, configuration, RNG.
//!
//! Everything in here is plain data. The scoring logic lives in `rules`
//! and the turn loop in `game`.

pub mod player;
pub mod event;
pub mod scoreboard;
pub mod config;
pub mod rng;

pub use player::PlayerId;
pub use event::{EventType, GameEvent};
pub use scoreboard::{GameResult, Scoreboard};
pub use config::{ScoringConfig, RACK_SIZE};
pub use rng::GameRng;
