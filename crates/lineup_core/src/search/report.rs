//! Sweep results: ranking and persistence

use crate::analysis::EvaluationSummary;
use crate::error::{ConfigError, SimError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

/// Expected value of one batting order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupEvaluation {
    pub lineup: String,
    pub summary: EvaluationSummary,
}

impl LineupEvaluation {
    pub fn expected_runs(&self) -> f64 {
        self.summary.expected_runs
    }
}

/// A batting order whose evaluation failed.
#[derive(Debug, Clone, PartialEq)]
pub struct LineupFailure {
    pub lineup: String,
    pub error: SimError,
}

impl fmt::Display for LineupFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.lineup, self.error)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchReport {
    /// Base seed shared by every lineup in the sweep
    pub seed: u64,
    /// Number of batting orders in the sweep (`n!`)
    pub permutations: u64,
    pub evaluations: Vec<LineupEvaluation>,
    pub failures: Vec<LineupFailure>,
    /// Lineups never started because the sweep was cancelled
    pub skipped: u64,
}

impl SearchReport {
    /// Every permutation was evaluated successfully.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty() && self.skipped == 0
    }

    /// Lineup name to expected runs per game.
    pub fn expected_values(&self) -> BTreeMap<String, f64> {
        self.evaluations.iter().map(|e| (e.lineup.clone(), e.expected_runs())).collect()
    }

    /// Evaluations sorted by expected runs; ties broken by lineup name.
    pub fn ranking(&self, order: SortOrder) -> Vec<&LineupEvaluation> {
        let mut ranked: Vec<&LineupEvaluation> = self.evaluations.iter().collect();
        ranked.sort_by(|a, b| {
            let by_value = a.expected_runs().total_cmp(&b.expected_runs());
            let by_value = match order {
                SortOrder::Ascending => by_value,
                SortOrder::Descending => by_value.reverse(),
            };
            by_value.then_with(|| a.lineup.cmp(&b.lineup))
        });
        ranked
    }

    pub fn ranked_names(&self, order: SortOrder) -> Vec<String> {
        self.ranking(order).into_iter().map(|e| e.lineup.clone()).collect()
    }

    pub fn best(&self) -> Option<&LineupEvaluation> {
        self.ranking(SortOrder::Descending).into_iter().next()
    }

    /// Write the name → expected value mapping as a flat JSON object.
    pub fn write_json(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &self.expected_values())?;
        writer.flush()?;

        log::info!("Wrote {} lineup values to {}", self.evaluations.len(), path.display());
        Ok(())
    }
}

/// Read a mapping written by [`SearchReport::write_json`].
pub fn read_expected_values(path: &Path) -> Result<BTreeMap<String, f64>, ConfigError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
