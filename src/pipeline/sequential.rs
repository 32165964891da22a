//! Sequential dataset build
//!
//! Trials are processed one at a time in input order with a single random
//! source threaded through every draw, so a given seed always reproduces the
//! same records.

use indicatif::ProgressBar;
use log::info;
use rand::Rng;

use crate::algorithm::{BalancedRecordBuilder, CandidateSampler, TrialRecords};
use crate::models::{Patient, Trial};

/// Build the balanced records of every trial sequentially
pub fn perform_sequential_build<'a, R>(
    trials: &'a [Trial],
    patients: &'a [Patient],
    sampler: &CandidateSampler,
    builder: &BalancedRecordBuilder,
    rng: &mut R,
    pb: &ProgressBar,
) -> Vec<TrialRecords<'a>>
where
    R: Rng + ?Sized,
{
    info!("Using sequential processing for {} trials", trials.len());

    let mut per_trial = Vec::with_capacity(trials.len());
    let mut collected = 0;

    for (trial_index, trial) in trials.iter().enumerate() {
        let candidates = sampler.sample(patients, rng);
        let records = builder.build(trial_index, trial, &candidates, rng);
        collected += records.len();
        per_trial.push(records);

        pb.inc(1);
        if trial_index % 100 == 0 {
            pb.set_message(format!("Collected {collected} pairs"));
        }
    }

    per_trial
}
