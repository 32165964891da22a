//! Utility functions for error handling
//!
//! File helpers that attach the path and the reason the file was needed to any
//! failure, so the operator sees which input or output broke the run.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{DatasetError, Result};

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(DatasetError::io(
            path,
            format!("needed for {purpose}"),
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        ));
    }

    if !path.is_file() {
        return Err(DatasetError::io(
            path,
            format!("expected a file for {purpose}"),
            io::Error::new(io::ErrorKind::InvalidInput, "path is not a file"),
        ));
    }

    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "permission denied - check file permissions".to_string()
            }
            _ => format!("failed to open file for {purpose}"),
        };
        DatasetError::io(path, context, e)
    })
}

/// Create (or truncate) an output file, creating missing parent directories
pub fn safe_create_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                DatasetError::io(parent, format!("failed to create directory for {purpose}"), e)
            })?;
        }
    }

    fs::File::create(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                "permission denied - check directory permissions".to_string()
            }
            _ => format!("failed to create file for {purpose}"),
        };
        DatasetError::io(path, context, e)
    })
}
