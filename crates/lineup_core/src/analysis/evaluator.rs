//! Monte-Carlo lineup evaluator
//!
//! Runs many independent games for one lineup and reduces the run totals
//! to an expected value. Trial `i` draws from its own
//! `ChaCha8Rng::seed_from_u64(seed + i)`, so a given seed yields the same
//! estimate regardless of worker count or completion order.

use super::stats::{EvaluationSummary, RunStats};
use crate::engine::{GameResult, GameSimulator, SimConfig};
use crate::error::{Result, SimError};
use crate::executor::Executor;
use crate::player::{lineup_name, Player};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub struct MonteCarloEvaluator<E> {
    config: SimConfig,
    executor: E,
}

impl<E: Executor> MonteCarloEvaluator<E> {
    pub fn new(config: SimConfig, executor: E) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, executor })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Base seed for an evaluation: the configured one, or a fresh random
    /// seed when none is configured.
    pub fn base_seed(&self) -> u64 {
        self.config.seed.unwrap_or_else(|| rand::thread_rng().gen())
    }

    /// Estimate expected runs per game for `lineup`.
    pub fn evaluate(&self, lineup: &[Player]) -> Result<EvaluationSummary> {
        self.evaluate_seeded(lineup, self.base_seed())
    }

    /// Estimate expected runs per game for `lineup` from an explicit base seed.
    ///
    /// A failing trial fails the whole evaluation; the error reported is the
    /// one from the lowest-numbered failing trial.
    pub fn evaluate_seeded(&self, lineup: &[Player], seed: u64) -> Result<EvaluationSummary> {
        let template = GameSimulator::new(lineup, &self.config)?;

        let outcomes = self.executor.map(0..self.config.trials, |trial| {
            let mut game = template.clone();
            let mut rng = trial_rng(seed, trial);
            game.simulate(&mut rng).map(|result| result.total).map_err(|err| (trial, err))
        });

        let mut stats = RunStats::default();
        let mut first_failure: Option<(u32, SimError)> = None;
        for outcome in outcomes {
            match outcome {
                Ok(runs) => stats.add(runs),
                Err((trial, err)) => {
                    if first_failure.as_ref().map_or(true, |(t, _)| trial < *t) {
                        first_failure = Some((trial, err));
                    }
                }
            }
        }

        if let Some((trial, err)) = first_failure {
            log::warn!("Lineup {} failed at trial {}: {}", lineup_name(lineup), trial, err);
            return Err(err);
        }

        let summary = stats.summary();
        log::debug!(
            "Lineup {}: {:.3} runs/game (se {:.3}, {} trials)",
            lineup_name(lineup),
            summary.expected_runs,
            summary.std_error,
            summary.trials
        );
        Ok(summary)
    }

    /// Replay a single trial of an evaluation.
    pub fn run_trial(&self, lineup: &[Player], seed: u64, trial: u32) -> Result<GameResult> {
        let mut game = GameSimulator::new(lineup, &self.config)?;
        game.simulate(&mut trial_rng(seed, trial))
    }
}

fn trial_rng(seed: u64, trial: u32) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed.wrapping_add(trial as u64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::{RayonExecutor, SequentialExecutor};
    use crate::player::demo_roster;

    /// Runs tasks sequentially, last item first.
    struct ReversingExecutor;

    impl Executor for ReversingExecutor {
        fn map<I, R, F>(&self, items: I, f: F) -> Vec<R>
        where
            I: IntoIterator,
            I::IntoIter: Send,
            I::Item: Send,
            R: Send,
            F: Fn(I::Item) -> R + Send + Sync,
        {
            let mut items: Vec<_> = items.into_iter().collect();
            items.reverse();
            items.into_iter().map(f).collect()
        }
    }

    fn config(trials: u32) -> SimConfig {
        SimConfig::default().with_trials(trials).with_seed(2024)
    }

    #[test]
    fn test_strikeout_lineup_expects_zero() {
        let k = |name: &str| Player::new(name, 1.0, 0.0, 0.0, 0.0).unwrap();
        let lineup = vec![k("A"), k("B"), k("C")];

        for trials in [1, 10, 250] {
            let evaluator = MonteCarloEvaluator::new(config(trials), SequentialExecutor).unwrap();
            let summary = evaluator.evaluate(&lineup).unwrap();
            assert_eq!(summary.expected_runs, 0.0);
            assert_eq!(summary.variance, 0.0);
            assert_eq!(summary.trials, trials as u64);
        }
    }

    #[test]
    fn test_mean_independent_of_trial_order() {
        let roster = demo_roster();
        let sequential = MonteCarloEvaluator::new(config(300), SequentialExecutor).unwrap();
        let reversed = MonteCarloEvaluator::new(config(300), ReversingExecutor).unwrap();
        let parallel =
            MonteCarloEvaluator::new(config(300), RayonExecutor::new(Some(4)).unwrap()).unwrap();

        let a = sequential.evaluate(roster.players()).unwrap();
        let b = reversed.evaluate(roster.players()).unwrap();
        let c = parallel.evaluate(roster.players()).unwrap();

        assert_eq!(a, b);
        assert_eq!(a, c);
        assert!(a.expected_runs > 0.0);
    }

    #[test]
    fn test_different_seeds_agree_within_noise() {
        let roster = demo_roster();
        let evaluator = MonteCarloEvaluator::new(config(2000), RayonExecutor::global()).unwrap();

        let a = evaluator.evaluate_seeded(roster.players(), 1).unwrap();
        let b = evaluator.evaluate_seeded(roster.players(), 1_000_000).unwrap();

        let tolerance = 5.0 * (a.std_error.powi(2) + b.std_error.powi(2)).sqrt();
        assert!(
            (a.expected_runs - b.expected_runs).abs() < tolerance,
            "{} vs {} (tolerance {})",
            a.expected_runs,
            b.expected_runs,
            tolerance
        );
    }

    #[test]
    fn test_run_trial_replays_evaluation() {
        let roster = demo_roster();
        let evaluator = MonteCarloEvaluator::new(config(1), SequentialExecutor).unwrap();

        let summary = evaluator.evaluate_seeded(roster.players(), 77).unwrap();
        let replay = evaluator.run_trial(roster.players(), 77, 0).unwrap();
        assert_eq!(summary.expected_runs, replay.total as f64);
    }

    #[test]
    fn test_non_terminating_lineup_fails_evaluation() {
        // one out per 10^6 plate appearances; the cap trips first
        let walker = |name: &str| Player::new(name, 0.000_001, 0.999_999, 0.999_999, 0.0).unwrap();
        let lineup = vec![walker("A"), walker("B")];
        let config = SimConfig { max_plate_appearances: 100, ..config(5) };
        let evaluator = MonteCarloEvaluator::new(config, SequentialExecutor).unwrap();

        let err = evaluator.evaluate(&lineup).unwrap_err();
        assert_eq!(err, SimError::NonTerminatingInning { limit: 100 });
    }

    #[test]
    fn test_zero_trials_rejected() {
        let result = MonteCarloEvaluator::new(config(0), SequentialExecutor);
        assert!(matches!(result, Err(SimError::InvalidConfig(_))));
    }
}
