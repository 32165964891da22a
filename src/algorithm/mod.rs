//! Algorithm implementations for eligibility dataset assembly
//!
//! This module contains the pieces run for every trial and once per dataset:
//!
//! 1. Rule-based eligibility evaluation of a patient against a trial
//! 2. Candidate sampling from the patient pool
//! 3. Balanced selection of eligible and ineligible records
//! 4. Trial-level train/validation/test partitioning
//!
//! Every random decision takes an explicit `rand::Rng` handle so callers control
//! seeding and draw order.

pub mod balance;
pub mod eligibility;
pub mod sampling;
pub mod split;

// Re-export key types
pub use balance::{BalancedRecordBuilder, TrialRecords};
pub use eligibility::evaluate;
pub use sampling::CandidateSampler;
pub use split::TrialSplitPartitioner;
