//! File-level log lines
//!
//! Every input read and every split written is reported through these helpers,
//! so the run log lists each file once when it is opened and once when done.

use std::path::Path;
use std::time::Duration;

use log::{info, warn};

/// Announce work on a record file
pub fn log_operation_start(operation: &str, path: &Path) {
    info!("{operation} {}", path.display());
}

/// Report how many records a file operation handled
///
/// `operation` is a past-tense verb such as "loaded" or "wrote".
pub fn log_operation_complete(operation: &str, path: &Path, records: usize, elapsed: Option<Duration>) {
    match elapsed {
        Some(duration) => info!(
            "Successfully {operation} {records} records ({}) in {duration:.2?}",
            path.display()
        ),
        None => info!("Successfully {operation} {records} records ({})", path.display()),
    }
}

/// Warn about an input that will produce a degenerate dataset
pub fn log_warning(message: &str, path: &Path) {
    warn!("{message}: {}", path.display());
}
