//! Scoring rules.
//!
//! A rule turns the event log into a `Scoreboard`. Rules are independent of
//! each other: every rule sees the same log, and their boards are folded
//! together with `Scoreboard::add`.
//!
//! - [`PottingRule`]: points for balls potted
//! - [`FoulRule`]: penalties for fouls, escalating for consecutive fouls
//!
//! ## Example
//!
//! ```
//! use pool_score::core::{GameEvent, PlayerId};
//! use pool_score::rules::{aggregate, FoulRule, PottingRule, ScoringRule};
//!
//! let a = PlayerId::new(0);
//! let b = PlayerId::new(1);
//! let events = [GameEvent::new(a, 10), GameEvent::foul(b, 10)];
//!
//! let rules: Vec<Box<dyn ScoringRule>> = vec![Box::new(PottingRule::new()), Box::new(FoulRule::new())];
//! let score = aggregate(&rules, &events).unwrap();
//!
//! assert_eq!(score.get_score(a), Some(5));
//! assert_eq!(score.get_score(b), Some(-1));
//! ```

mod rule;
mod potting;
mod foul;

pub use rule::{aggregate, ScoringRule};
pub use potting::PottingRule;
pub use foul::FoulRule;
