//! Monte-Carlo evaluation of a single lineup

pub mod evaluator;
pub mod stats;

pub use evaluator::MonteCarloEvaluator;
pub use stats::{EvaluationSummary, RunStats};
