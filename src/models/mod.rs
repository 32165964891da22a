//! Domain models for eligibility dataset assembly
//!
//! Trials and patients are read-only inputs. Decisions and records are created
//! during the build pass and never mutated afterwards.

pub mod decision;
pub mod fields;
pub mod patient;
pub mod record;
pub mod split;
pub mod trial;

// Re-export commonly used types
pub use decision::EligibilityDecision;
pub use fields::{FieldTypeError, IntoNumber};
pub use patient::Patient;
pub use record::{DatasetRecord, INSTRUCTION, RecordInput};
pub use split::{Split, SplitAssignment};
pub use trial::Trial;
