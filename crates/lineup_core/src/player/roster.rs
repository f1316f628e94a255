//! Rosters and lineup naming

use super::{Player, RosterValidator};
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Validated, ordered set of batters available for a lineup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Player>", into = "Vec<Player>")]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new(players: Vec<Player>) -> Result<Self, ValidationError> {
        RosterValidator::validate(&players)?;
        Ok(Self { players })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Look up a batter by name.
    pub fn get(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    /// Build a lineup in the given batting order. Every name must be on the
    /// roster; names may be omitted but not repeated.
    pub fn lineup(&self, order: &[&str]) -> Result<Vec<Player>, ValidationError> {
        let mut lineup: Vec<Player> = Vec::with_capacity(order.len());
        for &name in order {
            if lineup.iter().any(|p| p.name() == name) {
                return Err(ValidationError::DuplicateName { name: name.to_string() });
            }
            let player = self
                .get(name)
                .ok_or_else(|| ValidationError::UnknownPlayer { name: name.to_string() })?;
            lineup.push(player.clone());
        }
        Ok(lineup)
    }
}

impl TryFrom<Vec<Player>> for Roster {
    type Error = ValidationError;

    fn try_from(players: Vec<Player>) -> Result<Self, Self::Error> {
        Roster::new(players)
    }
}

impl From<Roster> for Vec<Player> {
    fn from(roster: Roster) -> Self {
        roster.players
    }
}

/// Identifier of a batting order: member names concatenated in order.
pub fn lineup_name(lineup: &[Player]) -> String {
    lineup.iter().map(Player::name).collect()
}

/// Nine-batter demo roster.
///
/// Batter D is recorded with contact .450 so that onbase .250 plus
/// extrabase .200 fits inside it; at contact .400 the profile is invalid.
pub fn demo_roster() -> Roster {
    // Name, Strikeout, Contact, On Base, Extra Base
    const TEAM: [(&str, f64, f64, f64, f64); 9] = [
        ("A", 0.400, 0.500, 0.300, 0.050),
        ("B", 0.400, 0.500, 0.300, 0.050),
        ("C", 0.400, 0.400, 0.300, 0.050),
        ("D", 0.400, 0.450, 0.250, 0.200),
        ("E", 0.500, 0.400, 0.250, 0.100),
        ("F", 0.500, 0.300, 0.100, 0.050),
        ("G", 0.600, 0.300, 0.100, 0.050),
        ("H", 0.600, 0.300, 0.100, 0.050),
        ("I", 0.600, 0.200, 0.050, 0.050),
    ];

    let players = TEAM
        .iter()
        .filter_map(|&(name, k, contact, onbase, extra)| {
            Player::new(name, k, contact, onbase, extra).ok()
        })
        .collect();
    Roster { players }
}
