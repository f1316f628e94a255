//! Plate-appearance outcome model

use crate::error::{SimError, ValidationError};
use crate::player::Player;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a single plate appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AtBatOutcome {
    Strikeout,
    Walk,
    HitOut,
    Hit,
    ExtraBaseHit,
}

impl AtBatOutcome {
    /// Fixed order matching [`Player::outcome_chances`].
    pub const ALL: [AtBatOutcome; 5] = [
        AtBatOutcome::Strikeout,
        AtBatOutcome::Walk,
        AtBatOutcome::HitOut,
        AtBatOutcome::Hit,
        AtBatOutcome::ExtraBaseHit,
    ];

    pub fn is_out(self) -> bool {
        matches!(self, AtBatOutcome::Strikeout | AtBatOutcome::HitOut)
    }
}

impl fmt::Display for AtBatOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AtBatOutcome::Strikeout => "STRIKEOUT",
            AtBatOutcome::Walk => "WALK",
            AtBatOutcome::HitOut => "HIT_OUT",
            AtBatOutcome::Hit => "HIT",
            AtBatOutcome::ExtraBaseHit => "EXTRA_BASE_HIT",
        };
        f.write_str(label)
    }
}

/// Weighted sampler over one batter's five outcomes.
#[derive(Debug, Clone)]
pub struct OutcomeModel<'a> {
    player: &'a Player,
    weights: WeightedIndex<f64>,
}

impl<'a> OutcomeModel<'a> {
    pub fn new(player: &'a Player) -> Result<Self, SimError> {
        let weights = WeightedIndex::new(player.outcome_chances()).map_err(|err| {
            ValidationError::InvalidDistribution {
                player: player.name().to_string(),
                reason: err.to_string(),
            }
        })?;
        Ok(Self { player, weights })
    }

    pub fn player(&self) -> &'a Player {
        self.player
    }

    /// Draw exactly one outcome.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> AtBatOutcome {
        let outcome = AtBatOutcome::ALL[self.weights.sample(rng)];
        log::trace!("{} bats: {}", self.player.name(), outcome);
        outcome
    }
}
