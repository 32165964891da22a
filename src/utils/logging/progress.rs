//! Progress reporting for the per-trial build pass, using the indicatif crate.

use indicatif::{ProgressBar, ProgressStyle};

/// Bar layout for the per-trial pass
pub const TRIAL_PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} trials ({per_sec}) {msg}";

/// Create the trial progress bar, or a hidden one when progress output is off
///
/// A hidden bar accepts the same calls, so build loops never branch on
/// visibility.
#[must_use]
pub fn create_trial_progress_bar(trials: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let style = ProgressStyle::default_bar()
        .template(TRIAL_PROGRESS_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    let pb = ProgressBar::new(trials as u64).with_style(style);
    pb.set_message("Building dataset");
    pb
}

/// Finish a progress bar, replacing its message when one is given
pub fn finish_progress_bar(pb: &ProgressBar, message: Option<&str>) {
    match message {
        Some(msg) => pb.finish_with_message(msg.to_string()),
        None => pb.finish(),
    }
}
