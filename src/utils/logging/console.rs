//! Console output utilities
//!
//! Operator-facing summaries printed once a run is complete.

use crate::statistics::DatasetStatistics;

/// Print the number of pairs collected before splitting
pub fn print_collection_summary(total_records: usize, trials: usize) {
    println!("Collected {total_records} total pairs from {trials} trials");
}

/// Print per-split record counts
pub fn print_split_summary(statistics: &DatasetStatistics) {
    println!("{statistics}");
}
