//! Input loading for trials and patients
//!
//! Both inputs are JSON arrays read fully before any processing starts. A file
//! that cannot be opened or parsed aborts the run, so no partial output is ever
//! written.

use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use serde::de::DeserializeOwned;

use crate::error::util::safe_open_file;
use crate::error::{DatasetError, Result};
use crate::models::{Patient, Trial};
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Read a JSON array of `T` from `path`
pub fn read_json_array<T>(path: &Path, purpose: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    log_operation_start(&format!("Loading {purpose} from"), path);
    let start = Instant::now();

    let file = safe_open_file(path, purpose)?;
    let items: Vec<T> = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| DatasetError::json(path, e))?;

    log_operation_complete("loaded", path, items.len(), Some(start.elapsed()));
    Ok(items)
}

/// Load normalized trials
pub fn load_trials(path: &Path) -> Result<Vec<Trial>> {
    read_json_array(path, "trials")
}

/// Load patient records
pub fn load_patients(path: &Path) -> Result<Vec<Patient>> {
    read_json_array(path, "patients")
}
