//! Per-split dataset statistics
//!
//! Counts collected while the writer streams records, reported to the operator
//! once all splits are written and optionally saved as JSON.

use std::fmt;
use std::io::{BufWriter, Write};
use std::path::Path;

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::error::util::safe_create_file;
use crate::error::{DatasetError, Result};
use crate::models::{DatasetRecord, Split};

/// Counts for a single split
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SplitStatistics {
    /// Records written
    pub records: usize,
    /// Records labeled eligible
    pub eligible: usize,
    /// Records labeled ineligible
    pub ineligible: usize,
    /// Trials assigned to the split
    pub assigned_trials: usize,
    /// Assigned trials that produced at least one record
    pub contributing_trials: usize,
}

impl SplitStatistics {
    /// Share of eligible records, or 0 for an empty split
    #[must_use]
    pub fn eligible_rate(&self) -> f64 {
        if self.records == 0 {
            0.0
        } else {
            self.eligible as f64 / self.records as f64
        }
    }
}

/// Accumulates statistics for one split while records are written
#[derive(Debug, Default)]
pub struct SplitAccumulator {
    stats: SplitStatistics,
    trials: FxHashSet<usize>,
}

impl SplitAccumulator {
    #[must_use]
    pub fn new(assigned_trials: usize) -> Self {
        Self {
            stats: SplitStatistics {
                assigned_trials,
                ..SplitStatistics::default()
            },
            trials: FxHashSet::default(),
        }
    }

    pub fn record(&mut self, record: &DatasetRecord<'_>) {
        self.stats.records += 1;
        if record.is_eligible() {
            self.stats.eligible += 1;
        } else {
            self.stats.ineligible += 1;
        }
        self.trials.insert(record.trial_index);
    }

    #[must_use]
    pub fn finish(mut self) -> SplitStatistics {
        self.stats.contributing_trials = self.trials.len();
        self.stats
    }
}

/// Statistics for all three splits
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DatasetStatistics {
    pub train: SplitStatistics,
    pub val: SplitStatistics,
    pub test: SplitStatistics,
}

impl DatasetStatistics {
    #[must_use]
    pub const fn get(&self, split: Split) -> &SplitStatistics {
        match split {
            Split::Train => &self.train,
            Split::Val => &self.val,
            Split::Test => &self.test,
        }
    }

    pub fn set(&mut self, split: Split, stats: SplitStatistics) {
        match split {
            Split::Train => self.train = stats,
            Split::Val => self.val = stats,
            Split::Test => self.test = stats,
        }
    }

    /// Records written across all splits
    #[must_use]
    pub fn total_records(&self) -> usize {
        Split::ALL.iter().map(|s| self.get(*s).records).sum()
    }

    /// Save the statistics as pretty-printed JSON
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let file = safe_create_file(path, "saving dataset statistics")?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer
            .write_all(b"\n")
            .and_then(|()| writer.flush())
            .map_err(|e| DatasetError::io(path, "failed to write dataset statistics", e))
    }
}

impl fmt::Display for DatasetStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dataset splits:")?;
        for split in Split::ALL {
            let stats = self.get(split);
            writeln!(
                f,
                "  {split}: {} pairs ({} eligible, {} ineligible, {:.1}% eligible) from {}/{} trials",
                stats.records,
                stats.eligible,
                stats.ineligible,
                stats.eligible_rate() * 100.0,
                stats.contributing_trials,
                stats.assigned_trials
            )?;
        }
        write!(f, "  total: {} pairs", self.total_records())
    }
}
