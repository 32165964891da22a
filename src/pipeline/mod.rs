//! Dataset assembly pipeline
//!
//! Wires loading, per-trial record building, trial-level splitting and output
//! together:
//!
//! 1. Load trials and patients (any malformed input aborts here)
//! 2. For each trial: sample candidates, evaluate, keep a balanced quota
//! 3. Partition trial indices into train/val/test
//! 4. Stream each split's records to its own JSONL file
//!
//! Nothing is written until every record has been built.

pub mod parallel;
pub mod sequential;

use std::path::Path;
use std::time::Instant;

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::algorithm::{BalancedRecordBuilder, CandidateSampler, TrialRecords, TrialSplitPartitioner};
use crate::config::DatasetConfig;
use crate::error::Result;
use crate::loader::{load_patients, load_trials};
use crate::models::{DatasetRecord, Patient, SplitAssignment, Trial};
use crate::statistics::DatasetStatistics;
use crate::utils::logging::{create_trial_progress_bar, finish_progress_bar, log_warning};
use crate::writer::DatasetWriter;

pub use parallel::perform_parallel_build;
pub use sequential::perform_sequential_build;

/// Bucket coverage across all trials of a build pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Trials processed
    pub trials: usize,
    /// Records kept across all trials
    pub records: usize,
    /// Trials whose candidates contained no eligible patient
    pub trials_without_positives: usize,
    /// Trials whose candidates contained no ineligible patient
    pub trials_without_negatives: usize,
}

impl BuildReport {
    fn from_trials(per_trial: &[TrialRecords<'_>]) -> Self {
        Self {
            trials: per_trial.len(),
            records: per_trial.iter().map(TrialRecords::len).sum(),
            trials_without_positives: per_trial
                .iter()
                .filter(|t| t.positives_available == 0)
                .count(),
            trials_without_negatives: per_trial
                .iter()
                .filter(|t| t.negatives_available == 0)
                .count(),
        }
    }
}

/// Records built for a set of trials, in accumulation order
#[derive(Debug, Clone)]
pub struct BuiltRecords<'a> {
    pub records: Vec<DatasetRecord<'a>>,
    pub report: BuildReport,
}

/// Outcome of a complete pipeline run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub report: BuildReport,
    pub statistics: DatasetStatistics,
}

/// Configured dataset pipeline
#[derive(Debug, Clone)]
pub struct DatasetPipeline {
    config: DatasetConfig,
    sampler: CandidateSampler,
    builder: BalancedRecordBuilder,
    partitioner: TrialSplitPartitioner,
}

impl DatasetPipeline {
    /// Create a pipeline, rejecting invalid configurations up front
    pub fn new(config: DatasetConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            sampler: CandidateSampler::from_config(&config),
            builder: BalancedRecordBuilder::from_config(&config),
            partitioner: TrialSplitPartitioner::from_config(&config),
            config,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &DatasetConfig {
        &self.config
    }

    /// Build the balanced records of every trial
    ///
    /// Records of trial `i` precede those of trial `i + 1`; within a trial the
    /// drawn positives precede the drawn negatives.
    pub fn build_records<'a>(&self, trials: &'a [Trial], patients: &'a [Patient]) -> BuiltRecords<'a> {
        let pb = create_trial_progress_bar(trials.len(), self.config.show_progress);

        let per_trial = if self.config.use_parallel {
            perform_parallel_build(trials, patients, &self.sampler, &self.builder, self.config.seed, &pb)
        } else {
            let mut rng = StdRng::seed_from_u64(self.config.seed);
            perform_sequential_build(trials, patients, &self.sampler, &self.builder, &mut rng, &pb)
        };

        let report = BuildReport::from_trials(&per_trial);
        finish_progress_bar(&pb, Some(format!("Collected {} pairs", report.records).as_str()));

        if report.trials_without_positives > 0 {
            info!(
                "{} of {} trials had no eligible candidates",
                report.trials_without_positives, report.trials
            );
        }
        if report.trials_without_negatives > 0 {
            info!(
                "{} of {} trials had no ineligible candidates",
                report.trials_without_negatives, report.trials
            );
        }

        let records = per_trial.into_iter().flat_map(|t| t.records).collect();
        BuiltRecords { records, report }
    }

    /// Partition `0..trial_count` into train, val and test
    ///
    /// Uses its own random source seeded from `split_seed`, so the assignment
    /// depends only on the number of trials.
    #[must_use]
    pub fn assign_splits(&self, trial_count: usize) -> SplitAssignment {
        let mut rng = StdRng::seed_from_u64(self.config.split_seed);
        self.partitioner.partition(trial_count, &mut rng)
    }

    /// Run the whole pipeline from input files to per-split output files
    pub fn run(
        &self,
        trials_path: &Path,
        patients_path: &Path,
        output_prefix: &Path,
    ) -> Result<RunSummary> {
        info!("Starting dataset build");
        info!("Configuration: {}", self.config);
        let start = Instant::now();

        let trials = load_trials(trials_path)?;
        let patients = load_patients(patients_path)?;
        if trials.is_empty() {
            log_warning("No trials found; all splits will be empty", trials_path);
        }
        if patients.is_empty() {
            log_warning("Patient pool is empty; no records can be built", patients_path);
        }

        let built = self.build_records(&trials, &patients);
        info!("Collected {} total pairs", built.report.records);

        let assignment = self.assign_splits(trials.len());
        let statistics = DatasetWriter::new(output_prefix).write_splits(&built.records, &assignment)?;

        info!("Dataset build completed in {:?}", start.elapsed());
        Ok(RunSummary {
            report: built.report,
            statistics,
        })
    }
}

/// Build a dataset with default settings and `pairs_per_trial` candidates per trial
///
/// Writes `{output_prefix}_train.jsonl`, `{output_prefix}_val.jsonl` and
/// `{output_prefix}_test.jsonl`.
pub fn build_dataset(
    trials_path: &Path,
    patients_path: &Path,
    output_prefix: &Path,
    pairs_per_trial: usize,
) -> Result<RunSummary> {
    let config = DatasetConfig::builder()
        .pairs_per_trial(pairs_per_trial)
        .show_progress(false)
        .build();
    DatasetPipeline::new(config)?.run(trials_path, patients_path, output_prefix)
}
