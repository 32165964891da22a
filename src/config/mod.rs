//! Configuration for dataset assembly.

use std::fmt;
use std::ops::RangeInclusive;

use crate::error::{DatasetError, Result};

/// Default number of candidate pairs targeted per trial
pub const DEFAULT_PAIRS_PER_TRIAL: usize = 15;

/// Default seed shared by candidate sampling and quota sizing
pub const DEFAULT_SEED: u64 = 42;

/// Configuration for the dataset pipeline
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    /// Per-trial candidate target `k`
    pub pairs_per_trial: usize,
    /// Candidates drawn per trial are `oversample_factor * pairs_per_trial`
    pub oversample_factor: usize,
    /// Smallest quota drawn from a bucket
    pub quota_min: usize,
    /// Largest quota drawn from a bucket
    pub quota_max: usize,
    /// Share of trials moved out of train in the first split stage
    pub holdout_fraction: f64,
    /// Share of the holdout that becomes test in the second split stage
    pub test_fraction_of_holdout: f64,
    /// Seed for candidate sampling and quota draws
    pub seed: u64,
    /// Seed for the train/val/test partition
    pub split_seed: u64,
    /// Whether to process trials in parallel
    pub use_parallel: bool,
    /// Whether to draw a progress bar over trials
    pub show_progress: bool,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            pairs_per_trial: DEFAULT_PAIRS_PER_TRIAL,
            oversample_factor: 5,
            quota_min: 5,
            quota_max: 10,
            holdout_fraction: 0.2,
            test_fraction_of_holdout: 0.5,
            seed: DEFAULT_SEED,
            split_seed: DEFAULT_SEED,
            use_parallel: false,
            show_progress: true,
        }
    }
}

impl DatasetConfig {
    /// Create a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder for constructing a configuration
    #[must_use]
    pub fn builder() -> DatasetConfigBuilder {
        DatasetConfigBuilder::new()
    }

    /// Number of candidates sampled for each trial before the pool is capped
    #[must_use]
    pub const fn candidate_count(&self) -> usize {
        self.pairs_per_trial.saturating_mul(self.oversample_factor)
    }

    /// Inclusive range the per-bucket quota is drawn from
    #[must_use]
    pub const fn quota_range(&self) -> RangeInclusive<usize> {
        self.quota_min..=self.quota_max
    }

    /// Reject configurations the pipeline cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.pairs_per_trial == 0 {
            return Err(DatasetError::config("pairs_per_trial must be at least 1"));
        }
        if self.oversample_factor == 0 {
            return Err(DatasetError::config("oversample_factor must be at least 1"));
        }
        if self.quota_min > self.quota_max {
            return Err(DatasetError::config(format!(
                "quota_min ({}) exceeds quota_max ({})",
                self.quota_min, self.quota_max
            )));
        }
        for (name, value) in [
            ("holdout_fraction", self.holdout_fraction),
            ("test_fraction_of_holdout", self.test_fraction_of_holdout),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(DatasetError::config(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for DatasetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dataset Configuration:")?;
        writeln!(f, "  Pairs per trial: {}", self.pairs_per_trial)?;
        writeln!(f, "  Candidates per trial: {}", self.candidate_count())?;
        writeln!(f, "  Quota per bucket: {}-{}", self.quota_min, self.quota_max)?;
        writeln!(
            f,
            "  Holdout: {:.0}% (test share {:.0}%)",
            self.holdout_fraction * 100.0,
            self.test_fraction_of_holdout * 100.0
        )?;
        writeln!(f, "  Seed: {} (split seed {})", self.seed, self.split_seed)?;
        writeln!(f, "  Parallel: {}", self.use_parallel)?;
        Ok(())
    }
}

/// Builder for constructing a dataset configuration
#[derive(Debug, Clone)]
pub struct DatasetConfigBuilder {
    config: DatasetConfig,
}

impl Default for DatasetConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetConfigBuilder {
    /// Create a new builder with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: DatasetConfig::default(),
        }
    }

    /// Set the per-trial candidate target
    #[must_use]
    pub const fn pairs_per_trial(mut self, pairs: usize) -> Self {
        self.config.pairs_per_trial = pairs;
        self
    }

    /// Set the oversampling factor
    #[must_use]
    pub const fn oversample_factor(mut self, factor: usize) -> Self {
        self.config.oversample_factor = factor;
        self
    }

    /// Set the inclusive quota bounds
    #[must_use]
    pub const fn quota(mut self, min: usize, max: usize) -> Self {
        self.config.quota_min = min;
        self.config.quota_max = max;
        self
    }

    /// Set the first-stage holdout fraction
    #[must_use]
    pub const fn holdout_fraction(mut self, fraction: f64) -> Self {
        self.config.holdout_fraction = fraction;
        self
    }

    /// Set the share of the holdout assigned to test
    #[must_use]
    pub const fn test_fraction_of_holdout(mut self, fraction: f64) -> Self {
        self.config.test_fraction_of_holdout = fraction;
        self
    }

    /// Set the sampling seed
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Set the split seed
    #[must_use]
    pub const fn split_seed(mut self, seed: u64) -> Self {
        self.config.split_seed = seed;
        self
    }

    /// Set whether to use parallel processing
    #[must_use]
    pub const fn use_parallel(mut self, parallel: bool) -> Self {
        self.config.use_parallel = parallel;
        self
    }

    /// Set whether to show a progress bar
    #[must_use]
    pub const fn show_progress(mut self, show: bool) -> Self {
        self.config.show_progress = show;
        self
    }

    /// Build the configuration
    #[must_use]
    pub const fn build(self) -> DatasetConfig {
        self.config
    }
}
