//! Half-inning state machine
//!
//! Bases are a fixed-length queue. Every advancement pushes the batter's new
//! occupancy onto first base and evicts whatever was on third; an evicted
//! runner scores. That single operation covers forced advancement for
//! walks, singles and productive outs:
//!
//! | outcome          | outs | push sequence          |
//! |------------------|------|------------------------|
//! | `Strikeout`      | +1   | none                   |
//! | `HitOut`         | +1   | empty                  |
//! | `Walk`, `Hit`    |      | occupied               |
//! | `ExtraBaseHit`   |      | occupied, then empty   |
//!
//! The extra-base push runs on the state left by the first push, so the
//! batter ends on second and every runner moves up two bases.

use super::outcome::AtBatOutcome;
use crate::engine::config::DEFAULT_MAX_PLATE_APPEARANCES;
use crate::error::{Result, SimError};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const OUTS_PER_INNING: u8 = 3;

/// Occupancy of first, second and third base.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bases([bool; 3]);

impl Bases {
    pub const EMPTY: Bases = Bases([false; 3]);
    pub const LOADED: Bases = Bases([true; 3]);

    pub fn new(first: bool, second: bool, third: bool) -> Self {
        Self([first, second, third])
    }

    pub fn first(&self) -> bool {
        self.0[0]
    }

    pub fn second(&self) -> bool {
        self.0[1]
    }

    pub fn third(&self) -> bool {
        self.0[2]
    }

    pub fn occupied(&self) -> usize {
        self.0.iter().filter(|&&b| b).count()
    }

    /// Shift every base up by one, placing `batter` on first.
    /// Returns whether a runner was pushed home from third.
    pub fn push(&mut self, batter: bool) -> bool {
        let scored = self.0[2];
        self.0 = [batter, self.0[0], self.0[1]];
        scored
    }
}

impl fmt::Display for Bases {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = |b: bool| if b { 'X' } else { '_' };
        write!(f, "[{} {} {}]", mark(self.0[0]), mark(self.0[1]), mark(self.0[2]))
    }
}

/// Transient state of one half-inning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub outs: u8,
    pub bases: Bases,
    pub score: u32,
}

impl GameState {
    pub fn is_over(&self) -> bool {
        self.outs >= OUTS_PER_INNING
    }

    fn push(&mut self, batter: bool) {
        if self.bases.push(batter) {
            self.score += 1;
        }
    }
}

/// Apply one plate appearance to the state.
pub fn advance(mut state: GameState, outcome: AtBatOutcome) -> GameState {
    match outcome {
        AtBatOutcome::Strikeout => {
            state.outs += 1;
        }
        AtBatOutcome::HitOut => {
            state.outs += 1;
            state.push(false);
        }
        AtBatOutcome::Walk | AtBatOutcome::Hit => {
            state.push(true);
        }
        AtBatOutcome::ExtraBaseHit => {
            state.push(true);
            state.push(false);
        }
    }
    state
}

/// Summary of a completed half-inning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InningResult {
    pub score: u32,
    pub plate_appearances: u32,
}

/// Plays half-innings to three outs under a plate-appearance safety bound.
#[derive(Debug, Clone, Copy)]
pub struct InningSimulator {
    max_plate_appearances: u32,
}

impl Default for InningSimulator {
    fn default() -> Self {
        Self { max_plate_appearances: DEFAULT_MAX_PLATE_APPEARANCES }
    }
}

impl InningSimulator {
    pub fn new(max_plate_appearances: u32) -> Self {
        Self { max_plate_appearances }
    }

    pub fn max_plate_appearances(&self) -> u32 {
        self.max_plate_appearances
    }

    /// Play one half-inning. `next_outcome` resolves each plate appearance
    /// given the state the batter walks up to.
    pub fn play<F>(&self, mut next_outcome: F) -> Result<InningResult>
    where
        F: FnMut(&GameState) -> AtBatOutcome,
    {
        let mut state = GameState::default();
        let mut plate_appearances = 0u32;

        while !state.is_over() {
            if plate_appearances >= self.max_plate_appearances {
                log::warn!(
                    "Inning stopped after {} plate appearances with {} outs",
                    plate_appearances,
                    state.outs
                );
                return Err(SimError::NonTerminatingInning { limit: self.max_plate_appearances });
            }

            let outcome = next_outcome(&state);
            state = advance(state, outcome);
            plate_appearances += 1;

            log::trace!("score={} outs={} bases={}", state.score, state.outs, state.bases);
        }

        log::debug!("Inning complete: {} runs, {} plate appearances", state.score, plate_appearances);
        Ok(InningResult { score: state.score, plate_appearances })
    }
}
