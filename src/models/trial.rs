//! Trial entity model
//!
//! A trial is a normalized set of eligibility bounds. Every bound is optional;
//! the evaluator decides what an absent bound means. The trial keeps the JSON
//! object it was loaded from, so any other fields the producer emitted (status,
//! countries, raw criteria text), explicit nulls and number tokens are written
//! back out unchanged with each record.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Number, Value};

use super::fields::{FieldTypeError, IntoNumber, expect_flag, expect_number, flag_field, number_field};

pub const TRIAL_ID: &str = "trial_id";
pub const AGE_MIN: &str = "age_min";
pub const AGE_MAX: &str = "age_max";
pub const BMI_MIN: &str = "bmi_min";
pub const BMI_MAX: &str = "bmi_max";
pub const EXCLUDE_PREGNANT: &str = "exclude_pregnant";

/// Normalized clinical trial eligibility criteria
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Trial {
    fields: Map<String, Value>,
}

impl Serialize for Trial {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

impl TryFrom<Map<String, Value>> for Trial {
    type Error = FieldTypeError;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        for bound in [AGE_MIN, AGE_MAX, BMI_MIN, BMI_MAX] {
            expect_number(&fields, bound)?;
        }
        expect_flag(&fields, EXCLUDE_PREGNANT)?;
        Ok(Self { fields })
    }
}

impl Trial {
    /// Create an empty trial with the given identifier
    #[must_use]
    pub fn new(trial_id: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert(TRIAL_ID.to_string(), Value::String(trial_id.into()));
        Self { fields }
    }

    /// Set the inclusive age range
    #[must_use]
    pub fn with_age_range(mut self, min: impl IntoNumber, max: impl IntoNumber) -> Self {
        self.fields.insert(AGE_MIN.to_string(), min.into_number());
        self.fields.insert(AGE_MAX.to_string(), max.into_number());
        self
    }

    /// Set the inclusive BMI range
    #[must_use]
    pub fn with_bmi_range(mut self, min: impl IntoNumber, max: impl IntoNumber) -> Self {
        self.fields.insert(BMI_MIN.to_string(), min.into_number());
        self.fields.insert(BMI_MAX.to_string(), max.into_number());
        self
    }

    /// Set whether pregnancy excludes a patient
    #[must_use]
    pub fn with_pregnancy_exclusion(mut self, exclude: bool) -> Self {
        self.fields.insert(EXCLUDE_PREGNANT.to_string(), Value::Bool(exclude));
        self
    }

    /// Registry identifier, when the producer supplied one as a string
    #[must_use]
    pub fn trial_id(&self) -> Option<&str> {
        self.fields.get(TRIAL_ID).and_then(Value::as_str)
    }

    #[must_use]
    pub fn age_min(&self) -> Option<&Number> {
        number_field(&self.fields, AGE_MIN)
    }

    #[must_use]
    pub fn age_max(&self) -> Option<&Number> {
        number_field(&self.fields, AGE_MAX)
    }

    #[must_use]
    pub fn bmi_min(&self) -> Option<&Number> {
        number_field(&self.fields, BMI_MIN)
    }

    #[must_use]
    pub fn bmi_max(&self) -> Option<&Number> {
        number_field(&self.fields, BMI_MAX)
    }

    /// Whether the pregnancy criterion applies to this trial
    #[must_use]
    pub fn excludes_pregnancy(&self) -> bool {
        flag_field(&self.fields, EXCLUDE_PREGNANT)
    }

    /// The object as loaded, in its original key order
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Identifier for log messages, falling back to the positional index
    #[must_use]
    pub fn label(&self, index: usize) -> String {
        self.trial_id()
            .map_or_else(|| format!("#{index}"), str::to_string)
    }
}
