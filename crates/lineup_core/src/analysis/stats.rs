//! Run-total statistics
//!
//! Game totals are integers, so the accumulator keeps exact integer sums.
//! Merging two accumulators is associative and commutative, which lets
//! trials be reduced in whatever order workers finish them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    count: u64,
    sum: u64,
    sum_sq: u64,
    min: u32,
    max: u32,
}

impl Default for RunStats {
    fn default() -> Self {
        Self { count: 0, sum: 0, sum_sq: 0, min: u32::MAX, max: 0 }
    }
}

impl RunStats {
    pub fn add(&mut self, runs: u32) {
        let runs64 = runs as u64;
        self.count += 1;
        self.sum += runs64;
        self.sum_sq += runs64 * runs64;
        self.min = self.min.min(runs);
        self.max = self.max.max(runs);
    }

    pub fn merge(mut self, other: RunStats) -> RunStats {
        self.count += other.count;
        self.sum += other.sum;
        self.sum_sq += other.sum_sq;
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        self
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum as f64 / self.count as f64
        }
    }

    /// Sample variance (divide by n - 1).
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            return 0.0;
        }
        let n = self.count as f64;
        let sum = self.sum as f64;
        let centered = self.sum_sq as f64 - sum * sum / n;
        (centered / (n - 1.0)).max(0.0)
    }

    /// Standard error of the mean.
    pub fn std_error(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            (self.variance() / self.count as f64).sqrt()
        }
    }

    pub fn summary(&self) -> EvaluationSummary {
        EvaluationSummary {
            trials: self.count,
            expected_runs: self.mean(),
            variance: self.variance(),
            std_error: self.std_error(),
            min_runs: if self.count == 0 { 0 } else { self.min },
            max_runs: self.max,
        }
    }
}

impl FromIterator<u32> for RunStats {
    fn from_iter<T: IntoIterator<Item = u32>>(iter: T) -> Self {
        let mut stats = RunStats::default();
        for runs in iter {
            stats.add(runs);
        }
        stats
    }
}

/// Expected-value estimate for one lineup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationSummary {
    pub trials: u64,
    pub expected_runs: f64,
    pub variance: f64,
    pub std_error: f64,
    pub min_runs: u32,
    pub max_runs: u32,
}
