//! Game engine: outcome sampling, the half-inning state machine and
//! full-game simulation.

pub mod config;
pub mod game;
pub mod inning;
pub mod outcome;

pub use config::SimConfig;
pub use game::{GameResult, GameSimulator};
pub use inning::{advance, Bases, GameState, InningResult, InningSimulator, OUTS_PER_INNING};
pub use outcome::{AtBatOutcome, OutcomeModel};
