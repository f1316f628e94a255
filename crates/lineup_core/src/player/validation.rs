//! Roster-level validation
//!
//! Individual rates are checked by [`Player::new`]; this module checks the
//! properties that only make sense across a whole roster.

use super::Player;
use crate::error::ValidationError;
use std::collections::HashSet;

/// Roster validation utility
pub struct RosterValidator;

impl RosterValidator {
    /// Validate a roster before it is used for a permutation sweep.
    ///
    /// Names must be unique and prefix-free: no name may start another.
    /// That keeps every concatenated lineup name decodable, so distinct
    /// batting orders never collide on the same key.
    pub fn validate(players: &[Player]) -> Result<(), ValidationError> {
        let mut seen = HashSet::with_capacity(players.len());
        for player in players {
            if !seen.insert(player.name()) {
                return Err(ValidationError::DuplicateName { name: player.name().to_string() });
            }
        }

        for a in players {
            for b in players {
                if a.name() != b.name() && b.name().starts_with(a.name()) {
                    return Err(ValidationError::AmbiguousName {
                        prefix: a.name().to_string(),
                        name: b.name().to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}
