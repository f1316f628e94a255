//! Batter profiles
//!
//! A [`Player`] carries four independent rates taken from scouting data and
//! derives the remaining two so that the five plate-appearance outcomes
//! partition the unit interval:
//!
//! ```text
//! walk    = 1 - strikeout - contact
//! hit_out = contact - onbase - extrabase
//! ```
//!
//! Construction validates every rate, so a `Player` that exists is always a
//! well-formed distribution.

pub mod roster;
pub mod validation;

pub use roster::{demo_roster, lineup_name, Roster};
pub use validation::RosterValidator;

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Derived rates this far below zero are rounding noise and read as zero.
pub const PROBABILITY_EPSILON: f64 = 1e-9;

/// Immutable statistical profile of a batter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PlayerRecord", into = "PlayerRecord")]
pub struct Player {
    name: String,
    strikeout_chance: f64,
    contact_chance: f64,
    onbase_chance: f64,
    extrabase_chance: f64,
    walk_chance: f64,
    hit_out_chance: f64,
}

/// Wire form of a player; only the four measured rates are stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub strikeout_chance: f64,
    pub contact_chance: f64,
    pub onbase_chance: f64,
    pub extrabase_chance: f64,
}

impl Player {
    /// Build a player, rejecting rates outside [0, 1] and inconsistent
    /// combinations whose derived walk or hit-out rate would be negative.
    pub fn new(
        name: impl Into<String>,
        strikeout_chance: f64,
        contact_chance: f64,
        onbase_chance: f64,
        extrabase_chance: f64,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        for (field, value) in [
            ("strikeout_chance", strikeout_chance),
            ("contact_chance", contact_chance),
            ("onbase_chance", onbase_chance),
            ("extrabase_chance", extrabase_chance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ValidationError::ProbabilityOutOfRange { player: name, field, value });
            }
        }

        let walk_chance =
            derived_rate(&name, "walk_chance", 1.0 - strikeout_chance - contact_chance)?;
        let hit_out_chance = derived_rate(
            &name,
            "hit_out_chance",
            contact_chance - onbase_chance - extrabase_chance,
        )?;

        Ok(Self {
            name,
            strikeout_chance,
            contact_chance,
            onbase_chance,
            extrabase_chance,
            walk_chance,
            hit_out_chance,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn strikeout_chance(&self) -> f64 {
        self.strikeout_chance
    }

    pub fn contact_chance(&self) -> f64 {
        self.contact_chance
    }

    pub fn onbase_chance(&self) -> f64 {
        self.onbase_chance
    }

    pub fn extrabase_chance(&self) -> f64 {
        self.extrabase_chance
    }

    pub fn walk_chance(&self) -> f64 {
        self.walk_chance
    }

    pub fn hit_out_chance(&self) -> f64 {
        self.hit_out_chance
    }

    /// Probability that a plate appearance ends in an out.
    pub fn out_chance(&self) -> f64 {
        self.strikeout_chance + self.hit_out_chance
    }

    /// Outcome weights in [`AtBatOutcome::ALL`](crate::engine::AtBatOutcome::ALL) order:
    /// strikeout, walk, hit-out, hit, extra-base hit.
    pub fn outcome_chances(&self) -> [f64; 5] {
        [
            self.strikeout_chance,
            self.walk_chance,
            self.hit_out_chance,
            self.onbase_chance,
            self.extrabase_chance,
        ]
    }
}

fn derived_rate(player: &str, field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value < -PROBABILITY_EPSILON {
        return Err(ValidationError::NegativeDerived { player: player.to_string(), field, value });
    }
    Ok(value.max(0.0))
}

impl TryFrom<PlayerRecord> for Player {
    type Error = ValidationError;

    fn try_from(record: PlayerRecord) -> Result<Self, Self::Error> {
        Player::new(
            record.name,
            record.strikeout_chance,
            record.contact_chance,
            record.onbase_chance,
            record.extrabase_chance,
        )
    }
}

impl From<Player> for PlayerRecord {
    fn from(player: Player) -> Self {
        Self {
            name: player.name,
            strikeout_chance: player.strikeout_chance,
            contact_chance: player.contact_chance,
            onbase_chance: player.onbase_chance,
            extrabase_chance: player.extrabase_chance,
        }
    }
}
