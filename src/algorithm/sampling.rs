//! Candidate sampling for per-trial evaluation
//!
//! Each trial evaluates a fresh random subset of the patient pool. The subset is
//! several times larger than the number of pairs wanted so that narrow trials
//! still see enough eligible and ineligible candidates to fill both quotas.

use rand::Rng;
use rand::seq::index;

use crate::config::DatasetConfig;
use crate::models::Patient;

/// Draws a bounded, uniformly random subset of patients without replacement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateSampler {
    candidate_count: usize,
}

impl CandidateSampler {
    /// Create a sampler drawing `pairs_per_trial * oversample_factor` candidates
    #[must_use]
    pub const fn new(pairs_per_trial: usize, oversample_factor: usize) -> Self {
        Self {
            candidate_count: pairs_per_trial.saturating_mul(oversample_factor),
        }
    }

    #[must_use]
    pub const fn from_config(config: &DatasetConfig) -> Self {
        Self {
            candidate_count: config.candidate_count(),
        }
    }

    /// Upper bound on the number of candidates returned
    #[must_use]
    pub const fn candidate_count(&self) -> usize {
        self.candidate_count
    }

    /// Sample `min(pool.len(), candidate_count)` distinct patients
    ///
    /// Patients are returned in draw order. The same pool may be sampled again
    /// for the next trial, so a patient can appear under several trials.
    pub fn sample<'a, R>(&self, pool: &'a [Patient], rng: &mut R) -> Vec<&'a Patient>
    where
        R: Rng + ?Sized,
    {
        let amount = self.candidate_count.min(pool.len());
        index::sample(rng, pool.len(), amount)
            .into_iter()
            .map(|i| &pool[i])
            .collect()
    }
}
