//! A Rust library for assembling balanced, leakage-free training corpora for
//! clinical trial eligibility models.
//!
//! Given normalized trials and a pool of patient records, every trial is paired
//! with a random sample of patients, each pair is labeled by a rule-based
//! eligibility evaluator, and a balanced number of eligible and ineligible
//! pairs is kept. Trials (not records) are then split into train, validation
//! and test sets and each split is written as line-delimited JSON.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod pipeline;
pub mod statistics;
pub mod utils;
pub mod writer;

// Re-export the most common types for easier use
pub use config::{DatasetConfig, DatasetConfigBuilder};
pub use error::{DatasetError, Result};
pub use models::{
    DatasetRecord, EligibilityDecision, Patient, RecordInput, Split, SplitAssignment, Trial,
};

// Algorithms
pub use algorithm::{
    BalancedRecordBuilder, CandidateSampler, TrialRecords, TrialSplitPartitioner, evaluate,
};

// Pipeline entry points
pub use loader::{load_patients, load_trials};
pub use pipeline::{BuildReport, DatasetPipeline, RunSummary, build_dataset};
pub use statistics::{DatasetStatistics, SplitStatistics};
pub use writer::{DatasetWriter, split_output_path, write_split};
