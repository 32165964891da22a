//! Eligibility decision model

use serde::{Deserialize, Serialize};

/// Outcome of evaluating one patient against one trial
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityDecision {
    /// True iff no criterion failed
    pub eligible: bool,
    /// Satisfied criteria, in evaluation order
    pub met_criteria: Vec<String>,
    /// Violated criteria, in evaluation order
    pub failed_criteria: Vec<String>,
    /// Templated explanation
    pub rationale: String,
    /// Placeholder confidence, not a calibrated probability
    pub confidence: f64,
}

impl EligibilityDecision {
    /// Number of criteria that were evaluated (skipped criteria are not counted)
    #[must_use]
    pub fn evaluated_count(&self) -> usize {
        self.met_criteria.len() + self.failed_criteria.len()
    }
}
