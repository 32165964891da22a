//! CLI argument definitions for the dataset builder.

use std::path::PathBuf;

use clap::Parser;

use eligibility_corpus::DatasetConfig;
use eligibility_corpus::config::{DEFAULT_PAIRS_PER_TRIAL, DEFAULT_SEED};

#[derive(Parser)]
#[command(
    name = "eligibility-corpus",
    version,
    about = "Build a balanced, trial-split eligibility training corpus",
    long_about = "Pair normalized clinical trials with sampled patient records, label each pair\n\
                  with rule-based eligibility, keep a balanced quota per trial, and write\n\
                  train/val/test splits as line-delimited JSON."
)]
pub struct Cli {
    /// JSON array of normalized trials.
    #[arg(value_name = "TRIALS")]
    pub trials: PathBuf,

    /// JSON array of patient records.
    #[arg(value_name = "PATIENTS")]
    pub patients: PathBuf,

    /// Prefix for the `_train.jsonl`, `_val.jsonl` and `_test.jsonl` outputs.
    #[arg(long = "output-prefix", value_name = "PREFIX", default_value = "eligibility_dataset")]
    pub output_prefix: PathBuf,

    /// Target pairs per trial; five times as many candidates are sampled.
    #[arg(long = "pairs-per-trial", value_name = "K", default_value_t = DEFAULT_PAIRS_PER_TRIAL)]
    pub pairs_per_trial: usize,

    /// Seed for candidate sampling and quota draws.
    #[arg(long = "seed", default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Seed for the train/val/test partition.
    #[arg(long = "split-seed", default_value_t = DEFAULT_SEED)]
    pub split_seed: u64,

    /// Process trials in parallel (deterministic, but differs from sequential output).
    #[arg(long = "parallel")]
    pub parallel: bool,

    /// Hide the progress bar.
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    /// Also save per-split statistics as JSON.
    #[arg(long = "summary-file", value_name = "PATH")]
    pub summary_file: Option<PathBuf>,
}

impl Cli {
    /// Build the pipeline configuration from the parsed flags
    pub fn dataset_config(&self) -> DatasetConfig {
        DatasetConfig::builder()
            .pairs_per_trial(self.pairs_per_trial)
            .seed(self.seed)
            .split_seed(self.split_seed)
            .use_parallel(self.parallel)
            .show_progress(!self.no_progress)
            .build()
    }
}
