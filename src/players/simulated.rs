//! Seeded random players for simulated matches.
//!
//! Both players of a simulated match hold a handle to the same [`Table`], so
//! each one sees the balls the other left behind. Every turn a player
//! either fouls, plays safe, or pots a random run of balls. Clearing the
//! rack down to its last ball produces a `NewRack` event. Once the table
//! has been re-racked `racks` times (or the player has used up
//! `max_turns`), the player ends the match.

use std::cell::Cell;
use std::rc::Rc;

use crate::core::{GameEvent, GameRng, PlayerId, RACK_SIZE};
use crate::error::PlayerError;

use super::Player;

/// Parameters for [`SimulatedPlayer`].
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    /// Probability that a turn ends in a foul.
    pub foul_chance: f64,

    /// Probability that a turn is a safety.
    pub safety_chance: f64,

    /// Most balls potted in a single turn.
    pub max_run: u8,

    /// Re-racks after which the match ends.
    pub racks: u32,

    /// Turns after which the player ends the match regardless of racks.
    pub max_turns: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            foul_chance: 0.1,
            safety_chance: 0.2,
            max_run: 5,
            racks: 1,
            max_turns: 500,
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_foul_chance(mut self, chance: f64) -> Self {
        self.foul_chance = chance;
        self
    }

    #[must_use]
    pub fn with_safety_chance(mut self, chance: f64) -> Self {
        self.safety_chance = chance;
        self
    }

    #[must_use]
    pub fn with_max_run(mut self, max_run: u8) -> Self {
        self.max_run = max_run;
        self
    }

    #[must_use]
    pub fn with_racks(mut self, racks: u32) -> Self {
        self.racks = racks;
        self
    }

    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }
}

#[derive(Debug)]
struct TableState {
    rack_size: u8,
    balls_on_table: Cell<u8>,
    racks_completed: Cell<u32>,
}

/// Shared view of the table for the players of one simulated match.
///
/// Cloning a `Table` yields another handle to the same table.
#[derive(Clone, Debug)]
pub struct Table {
    state: Rc<TableState>,
}

impl Default for Table {
    fn default() -> Self {
        Self::new(RACK_SIZE)
    }
}

impl Table {
    /// Create a table holding a full rack.
    #[must_use]
    pub fn new(rack_size: u8) -> Self {
        Self {
            state: Rc::new(TableState {
                rack_size,
                balls_on_table: Cell::new(rack_size),
                racks_completed: Cell::new(0),
            }),
        }
    }

    #[must_use]
    pub fn rack_size(&self) -> u8 {
        self.state.rack_size
    }

    #[must_use]
    pub fn balls_on_table(&self) -> u8 {
        self.state.balls_on_table.get()
    }

    #[must_use]
    pub fn racks_completed(&self) -> u32 {
        self.state.racks_completed.get()
    }

    fn set_balls(&self, balls: u8) {
        self.state.balls_on_table.set(balls);
    }

    fn rerack(&self) {
        self.state.balls_on_table.set(self.state.rack_size);
        self.state.racks_completed.set(self.racks_completed() + 1);
    }
}

/// A player that shoots at random, deterministically for a given seed.
#[derive(Debug)]
pub struct SimulatedPlayer {
    id: PlayerId,
    name: String,
    table: Table,
    rng: GameRng,
    config: SimulationConfig,
    turns_taken: u32,
}

impl SimulatedPlayer {
    pub fn new(id: PlayerId, table: Table, rng: GameRng, config: SimulationConfig) -> Self {
        Self {
            id,
            name: String::new(),
            table,
            rng,
            config,
            turns_taken: 0,
        }
    }

    /// Set the display name (builder pattern).
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn turns_taken(&self) -> u32 {
        self.turns_taken
    }

    fn match_over(&self) -> bool {
        self.table.racks_completed() >= self.config.racks || self.turns_taken >= self.config.max_turns
    }

    fn shoot(&mut self) -> GameEvent {
        let on_table = self.table.balls_on_table();
        let shot_chance = (1.0 - self.config.foul_chance - self.config.safety_chance).max(0.0);
        let weights = [
            self.config.foul_chance.max(0.0),
            self.config.safety_chance.max(0.0),
            shot_chance,
        ];

        match self.rng.choose_weighted(&weights) {
            Some(0) => GameEvent::foul(self.id, on_table),
            Some(1) => GameEvent::safety(self.id, on_table),
            _ => {
                let longest = self.config.max_run.min(on_table.saturating_sub(1));
                let run = self.rng.gen_balls(0..=longest);
                let left = on_table - run;

                if left <= 1 {
                    self.table.rerack();
                    GameEvent::new_rack(self.id, self.table.balls_on_table())
                } else {
                    self.table.set_balls(left);
                    GameEvent::new(self.id, left)
                }
            }
        }
    }
}

impl Player for SimulatedPlayer {
    fn id(&self) -> PlayerId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn next_event(&mut self) -> Result<GameEvent, PlayerError> {
        if self.match_over() {
            return Ok(GameEvent::end_game(self.id, self.table.balls_on_table()));
        }

        self.turns_taken += 1;
        Ok(self.shoot())
    }
}
