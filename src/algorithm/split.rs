//! Trial-level train/validation/test partitioning
//!
//! Splits are decided per trial index, never per record. All records of a
//! trial therefore land in the same split, which keeps held-out evaluation on
//! trials the model has never seen.
//!
//! The partition runs in two stages: a random train/holdout split, then a
//! random val/test split of the holdout. Stage one rounds the holdout down so
//! train never falls below its exact share; stage two rounds test up, so an odd
//! holdout gives its extra trial to test.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::DatasetConfig;
use crate::models::{Split, SplitAssignment};

/// Partitions trial indices into train, val and test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialSplitPartitioner {
    holdout_fraction: f64,
    test_fraction_of_holdout: f64,
}

impl Default for TrialSplitPartitioner {
    fn default() -> Self {
        Self::new(0.2, 0.5)
    }
}

impl TrialSplitPartitioner {
    /// Create a partitioner with the given stage fractions
    ///
    /// # Arguments
    /// * `holdout_fraction` - Share of trials moved out of train in stage one
    /// * `test_fraction_of_holdout` - Share of the holdout assigned to test in stage two
    #[must_use]
    pub const fn new(holdout_fraction: f64, test_fraction_of_holdout: f64) -> Self {
        Self {
            holdout_fraction,
            test_fraction_of_holdout,
        }
    }

    #[must_use]
    pub const fn from_config(config: &DatasetConfig) -> Self {
        Self::new(config.holdout_fraction, config.test_fraction_of_holdout)
    }

    /// Assign every index in `0..trial_count` to exactly one split
    pub fn partition<R>(&self, trial_count: usize, rng: &mut R) -> SplitAssignment
    where
        R: Rng + ?Sized,
    {
        let mut splits = vec![Split::Train; trial_count];

        // Stage 1: train vs holdout
        let mut indices: Vec<usize> = (0..trial_count).collect();
        indices.shuffle(rng);
        let holdout_count = share_down(trial_count, self.holdout_fraction);
        let mut holdout = indices[..holdout_count].to_vec();

        // Stage 2: val vs test
        holdout.shuffle(rng);
        let test_count = share_up(holdout.len(), self.test_fraction_of_holdout);
        let (test, val) = holdout.split_at(test_count);

        for &i in val {
            splits[i] = Split::Val;
        }
        for &i in test {
            splits[i] = Split::Test;
        }

        debug!(
            "Split {} trials: {} train, {} val, {} test",
            trial_count,
            trial_count - holdout_count,
            val.len(),
            test.len()
        );

        SplitAssignment::new(splits)
    }
}

/// `fraction` of `total`, rounded down
fn share_down(total: usize, fraction: f64) -> usize {
    ((total as f64 * fraction).floor() as usize).min(total)
}

/// `fraction` of `total`, rounded up
fn share_up(total: usize, fraction: f64) -> usize {
    ((total as f64 * fraction).ceil() as usize).min(total)
}
