//! Parallel dataset build
//!
//! Trials are independent of one another, so they can be processed on the
//! rayon thread pool. Each trial gets its own random source derived from the
//! base seed and the trial index, which keeps the output identical across runs
//! no matter how the work is scheduled.

use indicatif::ProgressBar;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

use crate::algorithm::{BalancedRecordBuilder, CandidateSampler, TrialRecords};
use crate::models::{Patient, Trial};

/// Seed of the random source used for the trial at `trial_index`
#[must_use]
pub const fn trial_seed(base_seed: u64, trial_index: usize) -> u64 {
    base_seed.wrapping_add(trial_index as u64)
}

/// Build the balanced records of every trial in parallel
///
/// Results come back in trial order.
pub fn perform_parallel_build<'a>(
    trials: &'a [Trial],
    patients: &'a [Patient],
    sampler: &CandidateSampler,
    builder: &BalancedRecordBuilder,
    seed: u64,
    pb: &ProgressBar,
) -> Vec<TrialRecords<'a>> {
    info!(
        "Using parallel processing for {} trials with {} threads",
        trials.len(),
        rayon::current_num_threads()
    );

    trials
        .par_iter()
        .enumerate()
        .map(|(trial_index, trial)| {
            let mut rng = StdRng::seed_from_u64(trial_seed(seed, trial_index));
            let candidates = sampler.sample(patients, &mut rng);
            let records = builder.build(trial_index, trial, &candidates, &mut rng);
            pb.inc(1);
            records
        })
        .collect()
}
