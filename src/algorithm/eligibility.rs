//! Rule-based eligibility evaluation
//!
//! Evaluation is a pure function of a patient and a trial. Absent trial bounds
//! fall back to wide defaults; absent patient measurements fall back to a
//! negative sentinel that fails any realistic bound, so missing data is
//! treated as a failed criterion rather than an unknown one.
//!
//! A trial whose lower bound is itself at or below the sentinel will accept a
//! patient with the measurement missing. That gap is kept as-is.

use std::fmt;

use serde_json::Number;

use crate::models::{EligibilityDecision, Patient, Trial};

/// Lower age bound used when a trial gives none
pub const DEFAULT_AGE_MIN: f64 = 0.0;
/// Upper age bound used when a trial gives none
pub const DEFAULT_AGE_MAX: f64 = 120.0;
/// Lower BMI bound used when a trial gives none
pub const DEFAULT_BMI_MIN: f64 = 0.0;
/// Upper BMI bound used when a trial gives none
pub const DEFAULT_BMI_MAX: f64 = 100.0;
/// Value substituted for a missing patient measurement
pub const MISSING_MEASUREMENT: f64 = -1.0;

/// Confidence reported for eligible decisions
pub const ELIGIBLE_CONFIDENCE: f64 = 0.8;
/// Confidence reported for ineligible decisions
pub const INELIGIBLE_CONFIDENCE: f64 = 0.6;

/// Rationale used when every criterion is met
pub const ELIGIBLE_RATIONALE: &str = "Meets all criteria.";

/// A trial bound: the producer's number, or the default when none was given
///
/// Compared as `f64`, but printed with the token it was written with, so `30.0`
/// stays `30.0` and `18` stays `18` in criterion messages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound<'a> {
    Given(&'a Number),
    Default(f64),
}

impl<'a> Bound<'a> {
    fn resolve(given: Option<&'a Number>, default: f64) -> Self {
        given.map_or(Self::Default(default), Self::Given)
    }

    /// Numeric value used for comparison
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            // Every non-arbitrary-precision number has an f64 value
            Self::Given(n) => n.as_f64().unwrap_or(f64::NAN),
            Self::Default(v) => v,
        }
    }
}

impl fmt::Display for Bound<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Given(n) => fmt::Display::fmt(n, f),
            Self::Default(v) => fmt::Display::fmt(v, f),
        }
    }
}

/// Trial bounds with defaults applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedBounds<'a> {
    pub age_min: Bound<'a>,
    pub age_max: Bound<'a>,
    pub bmi_min: Bound<'a>,
    pub bmi_max: Bound<'a>,
    pub exclude_pregnant: bool,
}

impl<'a> ResolvedBounds<'a> {
    #[must_use]
    pub fn from_trial(trial: &'a Trial) -> Self {
        Self {
            age_min: Bound::resolve(trial.age_min(), DEFAULT_AGE_MIN),
            age_max: Bound::resolve(trial.age_max(), DEFAULT_AGE_MAX),
            bmi_min: Bound::resolve(trial.bmi_min(), DEFAULT_BMI_MIN),
            bmi_max: Bound::resolve(trial.bmi_max(), DEFAULT_BMI_MAX),
            exclude_pregnant: trial.excludes_pregnancy(),
        }
    }
}

/// Patient measurements with sentinels applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedAttributes {
    pub age: f64,
    pub bmi: f64,
    pub pregnant: bool,
}

impl ResolvedAttributes {
    #[must_use]
    pub fn from_patient(patient: &Patient) -> Self {
        let measure = |n: Option<&Number>| n.and_then(Number::as_f64).unwrap_or(MISSING_MEASUREMENT);
        Self {
            age: measure(patient.age()),
            bmi: measure(patient.bmi()),
            pregnant: patient.is_pregnant(),
        }
    }
}

/// Result of a single criterion
#[derive(Debug, Clone, PartialEq, Eq)]
enum Outcome {
    Met(String),
    Failed(String),
    Skipped,
}

fn within(value: f64, min: Bound<'_>, max: Bound<'_>) -> bool {
    min.value() <= value && value <= max.value()
}

fn check_age(attrs: &ResolvedAttributes, bounds: &ResolvedBounds<'_>) -> Outcome {
    if within(attrs.age, bounds.age_min, bounds.age_max) {
        Outcome::Met(format!("Age between {} and {}", bounds.age_min, bounds.age_max))
    } else {
        Outcome::Failed(format!("Age not in range {}-{}", bounds.age_min, bounds.age_max))
    }
}

fn check_bmi(attrs: &ResolvedAttributes, bounds: &ResolvedBounds<'_>) -> Outcome {
    if within(attrs.bmi, bounds.bmi_min, bounds.bmi_max) {
        Outcome::Met(format!("BMI between {} and {}", bounds.bmi_min, bounds.bmi_max))
    } else {
        Outcome::Failed(format!("BMI not in range {}-{}", bounds.bmi_min, bounds.bmi_max))
    }
}

fn check_pregnancy(attrs: &ResolvedAttributes, bounds: &ResolvedBounds<'_>) -> Outcome {
    if !bounds.exclude_pregnant {
        Outcome::Skipped
    } else if attrs.pregnant {
        Outcome::Failed("Pregnancy exclusion".to_string())
    } else {
        Outcome::Met("Not pregnant".to_string())
    }
}

/// Evaluate a patient against a trial
///
/// All criteria are checked in the fixed order age, BMI, pregnancy; a failure
/// does not stop later criteria from being evaluated.
#[must_use]
pub fn evaluate(patient: &Patient, trial: &Trial) -> EligibilityDecision {
    let bounds = ResolvedBounds::from_trial(trial);
    let attrs = ResolvedAttributes::from_patient(patient);

    let mut met_criteria = Vec::with_capacity(3);
    let mut failed_criteria = Vec::new();

    for outcome in [
        check_age(&attrs, &bounds),
        check_bmi(&attrs, &bounds),
        check_pregnancy(&attrs, &bounds),
    ] {
        match outcome {
            Outcome::Met(reason) => met_criteria.push(reason),
            Outcome::Failed(reason) => failed_criteria.push(reason),
            Outcome::Skipped => {}
        }
    }

    let eligible = failed_criteria.is_empty();
    let rationale = if eligible {
        ELIGIBLE_RATIONALE.to_string()
    } else {
        format!("Failed criteria: {}", failed_criteria.join(", "))
    };

    EligibilityDecision {
        eligible,
        met_criteria,
        failed_criteria,
        rationale,
        confidence: if eligible {
            ELIGIBLE_CONFIDENCE
        } else {
            INELIGIBLE_CONFIDENCE
        },
    }
}
