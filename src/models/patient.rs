//! Patient entity model

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Number, Value};

use super::fields::{FieldTypeError, IntoNumber, expect_flag, expect_number, flag_field, number_field};

pub const ID: &str = "id";
pub const AGE: &str = "age";
pub const BMI: &str = "bmi";
pub const PREGNANT: &str = "pregnant";

/// Structured (synthetic) patient record
///
/// Only `age`, `bmi` and `pregnant` are consumed by the evaluator. The record
/// keeps the object it was loaded from, so everything else (sex, diagnoses,
/// medications, insurance...) is written back out unchanged.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Patient {
    fields: Map<String, Value>,
}

impl Serialize for Patient {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

impl TryFrom<Map<String, Value>> for Patient {
    type Error = FieldTypeError;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        expect_number(&fields, AGE)?;
        expect_number(&fields, BMI)?;
        expect_flag(&fields, PREGNANT)?;
        Ok(Self { fields })
    }
}

impl Patient {
    /// Create a patient with only an identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert(ID.to_string(), Value::String(id.into()));
        Self { fields }
    }

    /// Set the age in years
    #[must_use]
    pub fn with_age(mut self, age: impl IntoNumber) -> Self {
        self.fields.insert(AGE.to_string(), age.into_number());
        self
    }

    /// Set the body mass index
    #[must_use]
    pub fn with_bmi(mut self, bmi: impl IntoNumber) -> Self {
        self.fields.insert(BMI.to_string(), bmi.into_number());
        self
    }

    /// Set the pregnancy status
    #[must_use]
    pub fn with_pregnant(mut self, pregnant: bool) -> Self {
        self.fields.insert(PREGNANT.to_string(), Value::Bool(pregnant));
        self
    }

    /// Patient identifier, when supplied as a string
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.fields.get(ID).and_then(Value::as_str)
    }

    #[must_use]
    pub fn age(&self) -> Option<&Number> {
        number_field(&self.fields, AGE)
    }

    #[must_use]
    pub fn bmi(&self) -> Option<&Number> {
        number_field(&self.fields, BMI)
    }

    /// Pregnancy status; absent and null read as not pregnant
    #[must_use]
    pub fn is_pregnant(&self) -> bool {
        flag_field(&self.fields, PREGNANT)
    }

    /// The object as loaded, in its original key order
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}
