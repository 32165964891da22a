//! Dataset record model

use serde::Serialize;

use super::{EligibilityDecision, Patient, Trial};

/// Instruction string shared by every training record
pub const INSTRUCTION: &str = "Decide eligibility for the patient against the trial and explain.";

/// The (patient, trial) pair a record was built from
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RecordInput<'a> {
    pub patient: &'a Patient,
    pub trial: &'a Trial,
}

/// One labeled training example
///
/// Records borrow their patient and trial from the loaded inputs. The source
/// trial's position is carried alongside so split filtering is an index lookup;
/// it is not part of the serialized record.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetRecord<'a> {
    #[serde(skip)]
    pub trial_index: usize,
    pub instruction: &'static str,
    pub input: RecordInput<'a>,
    pub output: EligibilityDecision,
}

impl<'a> DatasetRecord<'a> {
    /// Create a record for a decision already made about `patient` and `trial`
    #[must_use]
    pub const fn new(
        trial_index: usize,
        patient: &'a Patient,
        trial: &'a Trial,
        output: EligibilityDecision,
    ) -> Self {
        Self {
            trial_index,
            instruction: INSTRUCTION,
            input: RecordInput { patient, trial },
            output,
        }
    }

    #[must_use]
    pub const fn is_eligible(&self) -> bool {
        self.output.eligible
    }
}
