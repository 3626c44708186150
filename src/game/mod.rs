//! The match driver.
//!
//! [`Game`] takes turns from two players until one of them ends the match,
//! keeping every event in an append-only log, then scores that log with its
//! configured rules.
//!
//! ```text
//! NotStarted --start()--> Running --EndGame--> Finished
//!                            |
//!                            +--player failure--> Aborted
//! ```

mod engine;

pub use engine::{Game, GameStatus};
