//! Line-delimited JSON output per split
//!
//! Every split gets its own file holding one record per line. Records are
//! written in accumulation order; nothing is reordered or deduplicated.

use std::ffi::OsString;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::error::util::safe_create_file;
use crate::error::{DatasetError, Result};
use crate::models::{DatasetRecord, Split, SplitAssignment};
use crate::statistics::{DatasetStatistics, SplitAccumulator, SplitStatistics};
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Output path for `split`: `{prefix}_{split}.jsonl`
#[must_use]
pub fn split_output_path(prefix: &Path, split: Split) -> PathBuf {
    let mut name = OsString::from(prefix.as_os_str());
    name.push(format!("_{split}.jsonl"));
    PathBuf::from(name)
}

/// Stream the records belonging to `split` into `sink`, one JSON object per line
pub fn write_split<W>(
    sink: W,
    records: &[DatasetRecord<'_>],
    assignment: &SplitAssignment,
    split: Split,
) -> io::Result<SplitStatistics>
where
    W: Write,
{
    let mut writer = BufWriter::new(sink);
    let mut acc = SplitAccumulator::new(assignment.count(split));

    for record in records
        .iter()
        .filter(|r| assignment.contains(split, r.trial_index))
    {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
        acc.record(record);
    }

    writer.flush()?;
    Ok(acc.finish())
}

/// Writes the train, val and test files for a dataset
#[derive(Debug, Clone)]
pub struct DatasetWriter {
    prefix: PathBuf,
}

impl DatasetWriter {
    /// Create a writer producing `{prefix}_train.jsonl`, `{prefix}_val.jsonl`
    /// and `{prefix}_test.jsonl`
    pub fn new(prefix: impl Into<PathBuf>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    #[must_use]
    pub fn path_for(&self, split: Split) -> PathBuf {
        split_output_path(&self.prefix, split)
    }

    /// Write every split and return the per-split counts
    pub fn write_splits(
        &self,
        records: &[DatasetRecord<'_>],
        assignment: &SplitAssignment,
    ) -> Result<DatasetStatistics> {
        let mut statistics = DatasetStatistics::default();

        for split in Split::ALL {
            let path = self.path_for(split);
            log_operation_start(&format!("Writing {split} split to"), &path);
            let start = Instant::now();

            let file = safe_create_file(&path, &format!("writing the {split} split"))?;
            let stats = write_split(file, records, assignment, split)
                .map_err(|e| DatasetError::io(&path, format!("failed to write the {split} split"), e))?;

            log_operation_complete("wrote", &path, stats.records, Some(start.elapsed()));
            statistics.set(split, stats);
        }

        Ok(statistics)
    }
}
