//! Logging, console output and progress tracking

pub mod console;
pub mod log;
pub mod progress;

pub use console::{print_collection_summary, print_split_summary};
pub use log::{log_operation_complete, log_operation_start, log_warning};
pub use progress::{create_trial_progress_bar, finish_progress_bar};
