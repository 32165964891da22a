//! Balanced selection of eligible and ineligible records
//!
//! For each trial the sampled candidates are evaluated and split into a
//! positive (eligible) and a negative (ineligible) bucket. A random quota is
//! then drawn from each bucket independently. Trials with narrow criteria often
//! have few or no positives among their candidates; such trials simply
//! contribute fewer records.

use std::ops::RangeInclusive;

use log::debug;
use rand::Rng;
use rand::seq::index;

use crate::algorithm::eligibility::evaluate;
use crate::config::DatasetConfig;
use crate::models::{DatasetRecord, Patient, Trial};

/// Records selected for one trial together with the bucket sizes they came from
#[derive(Debug, Clone)]
pub struct TrialRecords<'a> {
    /// Selected positives followed by selected negatives
    pub records: Vec<DatasetRecord<'a>>,
    /// Eligible candidates available before the quota draw
    pub positives_available: usize,
    /// Ineligible candidates available before the quota draw
    pub negatives_available: usize,
    /// Eligible records kept
    pub positives_drawn: usize,
    /// Ineligible records kept
    pub negatives_drawn: usize,
}

impl TrialRecords<'_> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Evaluates candidates and draws a balanced quota from each outcome bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalancedRecordBuilder {
    quota: RangeInclusive<usize>,
}

impl Default for BalancedRecordBuilder {
    fn default() -> Self {
        Self::new(5..=10)
    }
}

impl BalancedRecordBuilder {
    /// Create a builder drawing per-bucket quotas from `quota`
    ///
    /// # Panics
    /// If `quota` is empty (start above end). Configurations checked with
    /// [`DatasetConfig::validate`] never produce one.
    #[must_use]
    pub const fn new(quota: RangeInclusive<usize>) -> Self {
        assert!(*quota.start() <= *quota.end(), "quota range must not be empty");
        Self { quota }
    }

    /// # Panics
    /// If the configured quota range is empty; see [`DatasetConfig::validate`].
    #[must_use]
    pub const fn from_config(config: &DatasetConfig) -> Self {
        Self::new(config.quota_range())
    }

    /// Inclusive range quotas are drawn from
    #[must_use]
    pub const fn quota(&self) -> &RangeInclusive<usize> {
        &self.quota
    }

    /// Build the balanced records for one trial
    ///
    /// Draw order per trial is: positive quota, positive selection, negative
    /// quota, negative selection. No quota is drawn for an empty bucket.
    pub fn build<'a, R>(
        &self,
        trial_index: usize,
        trial: &'a Trial,
        candidates: &[&'a Patient],
        rng: &mut R,
    ) -> TrialRecords<'a>
    where
        R: Rng + ?Sized,
    {
        let (positives, negatives): (Vec<_>, Vec<_>) = candidates
            .iter()
            .map(|&patient| DatasetRecord::new(trial_index, patient, trial, evaluate(patient, trial)))
            .partition(|record| record.is_eligible());

        let positives_available = positives.len();
        let negatives_available = negatives.len();

        let mut records = self.draw_quota(positives, rng);
        let positives_drawn = records.len();
        records.extend(self.draw_quota(negatives, rng));
        let negatives_drawn = records.len() - positives_drawn;

        if positives_available == 0 || negatives_available == 0 {
            debug!(
                "Trial {} has an empty bucket ({} eligible, {} ineligible of {} candidates)",
                trial.label(trial_index),
                positives_available,
                negatives_available,
                candidates.len()
            );
        } else if positives_available.min(negatives_available) < *self.quota.start() {
            debug!(
                "Trial {} cannot fill its minimum quota ({} eligible, {} ineligible)",
                trial.label(trial_index),
                positives_available,
                negatives_available
            );
        }

        TrialRecords {
            records,
            positives_available,
            negatives_available,
            positives_drawn,
            negatives_drawn,
        }
    }

    /// Draw `min(bucket.len(), q)` items for a random `q` in the quota range
    fn draw_quota<T, R>(&self, bucket: Vec<T>, rng: &mut R) -> Vec<T>
    where
        R: Rng + ?Sized,
    {
        if bucket.is_empty() {
            return Vec::new();
        }

        let quota = rng.random_range(self.quota.clone());
        let amount = quota.min(bucket.len());

        let mut slots: Vec<Option<T>> = bucket.into_iter().map(Some).collect();
        index::sample(rng, slots.len(), amount)
            .into_iter()
            .filter_map(|i| slots[i].take())
            .collect()
    }
}
