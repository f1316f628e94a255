//! Exhaustive lineup search
//!
//! Every permutation of the roster is evaluated independently. All lineups
//! in one sweep share a base seed, so differences between batting orders
//! are not swamped by differences between random streams.

pub mod permutations;
pub mod report;

pub use permutations::{permutation_count, Permutations};
pub use report::{read_expected_values, LineupEvaluation, LineupFailure, SearchReport, SortOrder};

use crate::analysis::MonteCarloEvaluator;
use crate::executor::{CancellationToken, Executor};
use crate::player::{lineup_name, Player, Roster};

enum LineupOutcome {
    Evaluated(LineupEvaluation),
    Failed(LineupFailure),
    Skipped,
}

pub struct LineupSearch<E> {
    evaluator: MonteCarloEvaluator<E>,
    cancel: CancellationToken,
}

impl<E: Executor> LineupSearch<E> {
    pub fn new(evaluator: MonteCarloEvaluator<E>) -> Self {
        Self { evaluator, cancel: CancellationToken::new() }
    }

    /// Stop the sweep early when `token` is cancelled. Lineups already
    /// being evaluated finish; the rest are counted as skipped.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn evaluator(&self) -> &MonteCarloEvaluator<E> {
        &self.evaluator
    }

    /// Evaluate every batting order of `roster`.
    pub fn run(&self, roster: &Roster) -> SearchReport {
        let players = roster.players();
        let seed = self.evaluator.base_seed();
        let permutations = permutation_count(players.len());

        log::info!(
            "Brute forcing {} lineups ({} trials each, seed {})",
            permutations,
            self.evaluator.config().trials,
            seed
        );

        let outcomes = self
            .evaluator
            .executor()
            .map(Permutations::new(players.len()), |order| self.evaluate_order(players, &order, seed));

        let mut report = SearchReport { seed, permutations, ..Default::default() };
        for outcome in outcomes {
            match outcome {
                LineupOutcome::Evaluated(evaluation) => report.evaluations.push(evaluation),
                LineupOutcome::Failed(failure) => report.failures.push(failure),
                LineupOutcome::Skipped => report.skipped += 1,
            }
        }

        if report.skipped > 0 {
            log::warn!("Sweep cancelled: {} lineups skipped", report.skipped);
        }
        if !report.failures.is_empty() {
            log::warn!("{} lineups failed evaluation", report.failures.len());
        }
        log::info!(
            "Evaluated {} of {} lineups",
            report.evaluations.len(),
            report.permutations
        );
        report
    }

    fn evaluate_order(&self, players: &[Player], order: &[usize], seed: u64) -> LineupOutcome {
        if self.cancel.is_cancelled() {
            return LineupOutcome::Skipped;
        }

        let lineup: Vec<Player> = order.iter().map(|&slot| players[slot].clone()).collect();
        let name = lineup_name(&lineup);

        match self.evaluator.evaluate_seeded(&lineup, seed) {
            Ok(summary) => LineupOutcome::Evaluated(LineupEvaluation { lineup: name, summary }),
            Err(error) => {
                if error.is_data_error() {
                    log::debug!("Lineup {} rejected: {}", name, error);
                } else {
                    log::warn!("Lineup {} failed: {}", name, error);
                }
                LineupOutcome::Failed(LineupFailure { lineup: name, error })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SimConfig;
    use crate::error::SimError;
    use crate::executor::{RayonExecutor, SequentialExecutor};
    use std::collections::HashSet;

    fn roster_of(profile: (f64, f64, f64, f64), names: &[&str]) -> Roster {
        let (k, contact, onbase, extra) = profile;
        let players =
            names.iter().map(|&name| Player::new(name, k, contact, onbase, extra).unwrap()).collect();
        Roster::new(players).unwrap()
    }

    fn search<E: Executor>(trials: u32, executor: E) -> LineupSearch<E> {
        let config = SimConfig::default().with_trials(trials).with_seed(11);
        LineupSearch::new(MonteCarloEvaluator::new(config, executor).unwrap())
    }

    #[test]
    fn test_produces_n_factorial_unique_names() {
        let roster = roster_of((0.4, 0.5, 0.3, 0.05), &["A", "B", "C", "D"]);
        let report = search(5, RayonExecutor::global()).run(&roster);

        assert_eq!(report.permutations, 24);
        assert_eq!(report.evaluations.len(), 24);
        let names: HashSet<&str> = report.evaluations.iter().map(|e| e.lineup.as_str()).collect();
        assert_eq!(names.len(), 24);
        assert!(report.is_complete());
    }

    #[test]
    fn test_strikeout_roster_expects_zero_everywhere() {
        let roster = roster_of((1.0, 0.0, 0.0, 0.0), &["A", "B", "C"]);
        let report = search(20, SequentialExecutor).run(&roster);

        assert_eq!(report.evaluations.len(), 6);
        assert!(report.expected_values().values().all(|&v| v == 0.0));
    }

    #[test]
    fn test_roster_without_outs_rejected_not_hung() {
        let roster = roster_of((0.0, 1.0, 1.0, 0.0), &["A", "B", "C"]);
        let report = search(20, RayonExecutor::global()).run(&roster);

        assert!(report.evaluations.is_empty());
        assert_eq!(report.failures.len(), 6);
        assert!(report
            .failures
            .iter()
            .all(|f| matches!(f.error, SimError::DegenerateLineup { .. })));
    }

    #[test]
    fn test_single_and_empty_rosters() {
        let single = roster_of((0.5, 0.4, 0.2, 0.1), &["A"]);
        let report = search(10, SequentialExecutor).run(&single);
        assert_eq!(report.permutations, 1);
        assert_eq!(report.ranked_names(SortOrder::Descending), vec!["A"]);

        let report = search(10, SequentialExecutor).run(&Roster::default());
        assert_eq!(report.permutations, 1);
        assert!(report.evaluations.is_empty());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].lineup, "");
        assert_eq!(report.failures[0].error, SimError::EmptyLineup);
    }

    #[test]
    fn test_failures_isolated_per_lineup() {
        // A always strikes out, B and C always single. A one-inning game
        // led off by A ends in 7 plate appearances; led off by B or C it
        // needs 9 and trips the cap.
        let players = vec![
            Player::new("A", 1.0, 0.0, 0.0, 0.0).unwrap(),
            Player::new("B", 0.0, 1.0, 1.0, 0.0).unwrap(),
            Player::new("C", 0.0, 1.0, 1.0, 0.0).unwrap(),
        ];
        let roster = Roster::new(players).unwrap();
        let config = SimConfig { innings: 1, max_plate_appearances: 7, ..Default::default() }
            .with_trials(3)
            .with_seed(5);
        let search = LineupSearch::new(MonteCarloEvaluator::new(config, SequentialExecutor).unwrap());

        let report = search.run(&roster);

        assert_eq!(report.ranked_names(SortOrder::Descending), vec!["ABC", "ACB"]);
        assert!(report.evaluations.iter().all(|e| e.expected_runs() == 1.0));
        assert_eq!(report.failures.len(), 4);
        assert!(report
            .failures
            .iter()
            .all(|f| f.error == SimError::NonTerminatingInning { limit: 7 }));
    }

    #[test]
    fn test_parallel_and_sequential_sweeps_agree() {
        let roster = roster_of((0.4, 0.5, 0.3, 0.05), &["A", "B", "C"]);
        let sequential = search(50, SequentialExecutor).run(&roster);
        let parallel = search(50, RayonExecutor::new(Some(3)).unwrap()).run(&roster);

        assert_eq!(sequential.expected_values(), parallel.expected_values());
    }

    #[test]
    fn test_cancelled_sweep_skips_everything() {
        let roster = roster_of((0.4, 0.5, 0.3, 0.05), &["A", "B", "C"]);
        let token = CancellationToken::new();
        token.cancel();

        let report = search(10, SequentialExecutor).with_cancellation(token).run(&roster);
        assert_eq!(report.skipped, 6);
        assert!(report.evaluations.is_empty());
        assert!(!report.is_complete());
    }
}
