//! Scenario files
//!
//! A scenario bundles a roster with simulation settings. YAML and JSON are
//! both accepted, chosen by file extension:
//!
//! ```yaml
//! simulation:
//!   trials: 500
//!   seed: 7
//! roster:
//!   - { name: A, strikeout_chance: 0.4, contact_chance: 0.5, onbase_chance: 0.3, extrabase_chance: 0.05 }
//!   - { name: B, strikeout_chance: 0.5, contact_chance: 0.3, onbase_chance: 0.1, extrabase_chance: 0.05 }
//! ```

use crate::engine::SimConfig;
use crate::error::ConfigError;
use crate::player::{demo_roster, Roster};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub simulation: SimConfig,
    pub roster: Roster,
}

impl Default for Scenario {
    fn default() -> Self {
        Self { simulation: SimConfig::default(), roster: demo_roster() }
    }
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();

        let scenario: Scenario = match extension.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => serde_yaml::from_str(&contents)?,
            "json" => serde_json::from_str(&contents)?,
            _ => {
                return Err(ConfigError::UnsupportedFormat { path: path.display().to_string() })
            }
        };
        scenario.simulation.validate()?;

        log::info!(
            "Loaded {} batters from {}",
            scenario.roster.len(),
            path.display()
        );
        Ok(scenario)
    }

    /// Load `path` when given, otherwise fall back to the demo roster with
    /// default settings.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
