//! # lineup_core - Monte-Carlo Batting Lineup Optimizer
//!
//! Estimates expected runs per game for a batting order by repeated
//! simulation, then sweeps every permutation of a roster to rank them.
//!
//! ## Features
//! - Five-outcome plate-appearance model with validated player profiles
//! - Half-inning state machine with a plate-appearance safety bound
//! - Reproducible evaluation (same seed = same estimate, any worker count)
//! - Parallel permutation sweep with per-lineup failure reporting
//!
//! ```rust
//! use lineup_core::{demo_roster, MonteCarloEvaluator, SequentialExecutor, SimConfig};
//!
//! let roster = demo_roster();
//! let config = SimConfig::quick().with_seed(42);
//! let evaluator = MonteCarloEvaluator::new(config, SequentialExecutor).unwrap();
//! let summary = evaluator.evaluate(roster.players()).unwrap();
//! assert!(summary.expected_runs >= 0.0);
//! ```

pub mod analysis;
pub mod engine;
pub mod error;
pub mod executor;
pub mod player;
pub mod scenario;
pub mod search;

pub use analysis::{EvaluationSummary, MonteCarloEvaluator, RunStats};
pub use engine::{AtBatOutcome, Bases, GameResult, GameSimulator, GameState, InningSimulator, SimConfig};
pub use error::{ConfigError, Result, SimError, ValidationError};
pub use executor::{CancellationToken, Executor, RayonExecutor, SequentialExecutor};
pub use player::{demo_roster, lineup_name, Player, Roster};
pub use scenario::Scenario;
pub use search::{LineupEvaluation, LineupFailure, LineupSearch, SearchReport, SortOrder};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
