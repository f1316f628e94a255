//! Simulation configuration
//!
//! All tuning knobs for a game, an evaluation and a sweep live here.
//!
//! ```rust
//! use lineup_core::engine::SimConfig;
//!
//! let config = SimConfig::default();
//! let quick = SimConfig::quick();
//! assert!(quick.trials < config.trials);
//! ```

use crate::error::{Result, SimError};
use serde::{Deserialize, Serialize};

pub const DEFAULT_INNINGS: u32 = 7;
pub const DEFAULT_TRIALS: u32 = 1000;
pub const DEFAULT_MAX_PLATE_APPEARANCES: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Innings per game
    pub innings: u32,
    /// Games simulated per lineup evaluation
    pub trials: u32,
    /// Safety bound on plate appearances in a single inning
    pub max_plate_appearances: u32,
    /// Base seed; trial `i` uses `seed + i`. Random when absent.
    pub seed: Option<u64>,
    /// Worker threads for parallel dispatch. Rayon's default when absent.
    pub workers: Option<usize>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            innings: DEFAULT_INNINGS,
            trials: DEFAULT_TRIALS,
            max_plate_appearances: DEFAULT_MAX_PLATE_APPEARANCES,
            seed: None,
            workers: None,
        }
    }
}

impl SimConfig {
    /// Fast, noisy estimates for smoke runs
    pub fn quick() -> Self {
        Self { trials: 100, ..Self::default() }
    }

    /// Tight estimates (standard error roughly a third of the default)
    pub fn thorough() -> Self {
        Self { trials: 10_000, ..Self::default() }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_trials(mut self, trials: u32) -> Self {
        self.trials = trials;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.innings == 0 {
            return Err(SimError::InvalidConfig("innings must be at least 1".to_string()));
        }
        if self.trials == 0 {
            return Err(SimError::InvalidConfig("trials must be at least 1".to_string()));
        }
        if self.max_plate_appearances == 0 {
            return Err(SimError::InvalidConfig(
                "max_plate_appearances must be at least 1".to_string(),
            ));
        }
        if self.workers == Some(0) {
            return Err(SimError::InvalidConfig("workers must be at least 1".to_string()));
        }
        Ok(())
    }
}
