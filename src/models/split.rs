//! Dataset split model

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three dataset partitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    Train,
    Val,
    Test,
}

impl Split {
    /// All splits in output order
    pub const ALL: [Self; 3] = [Self::Train, Self::Val, Self::Test];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Train => "train",
            Self::Val => "val",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Total mapping from trial index to split
///
/// Position `i` holds the split of trial `i`, so every trial belongs to exactly
/// one split and the mapping covers the whole input sequence by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitAssignment {
    splits: Vec<Split>,
}

impl SplitAssignment {
    #[must_use]
    pub const fn new(splits: Vec<Split>) -> Self {
        Self { splits }
    }

    /// Number of trials covered
    #[must_use]
    pub fn len(&self) -> usize {
        self.splits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.splits.is_empty()
    }

    /// Split of the trial at `trial_index`, if that index is covered
    #[must_use]
    pub fn split_of(&self, trial_index: usize) -> Option<Split> {
        self.splits.get(trial_index).copied()
    }

    /// Whether the trial at `trial_index` belongs to `split`
    #[must_use]
    pub fn contains(&self, split: Split, trial_index: usize) -> bool {
        self.split_of(trial_index) == Some(split)
    }

    /// Trial indices assigned to `split`, ascending
    #[must_use]
    pub fn trial_indices(&self, split: Split) -> Vec<usize> {
        self.splits
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == split)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of trials assigned to `split`
    #[must_use]
    pub fn count(&self, split: Split) -> usize {
        self.splits.iter().filter(|s| **s == split).count()
    }
}
